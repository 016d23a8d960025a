use std::sync::Mutex;

use crate::ports::DiagnosticSink;

/// Diagnostic sink collecting messages for assertions.
#[derive(Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<String>>,
    traces: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    pub fn traces(&self) -> Vec<String> {
        self.traces.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, message: &str) {
        self.reports.lock().unwrap().push(message.to_string());
    }

    fn trace(&self, message: &str) {
        self.traces.lock().unwrap().push(message.to_string());
    }
}
