//! Diagnostic sink writing to standard error.

use crate::ports::DiagnosticSink;

/// Writes diagnostics to stderr, keeping stdout free for the resolved
/// environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl StderrDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn trace(&self, message: &str) {
        eprintln!("{}", message);
    }
}
