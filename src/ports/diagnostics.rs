/// Port for human-readable resolution diagnostics.
///
/// `report` carries messages the user should see: fetch failures, parse
/// failures, malformed shortcut keys. `trace` carries progress and debug
/// output. Presentation (stderr, dialog, log collector) is the
/// implementation's concern.
pub trait DiagnosticSink {
    fn report(&self, message: &str);
    fn trace(&self, message: &str);
}
