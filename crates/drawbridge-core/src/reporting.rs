//! Developer diagnostics and the user-visible console.
//!
//! The two output channels are independent: the diagnostic channel feeds a
//! developer-facing log or crash-reporting backend, while the console
//! channel is what a user of the scripting environment sees. Raising the
//! script-visible error is not a sink concern; that lives on the stack.

use std::sync::Mutex;

/// Where conversion failures and console output go.
///
/// Implementations must be callable through a shared reference; the
/// converters report mid-operation while other host state is borrowed.
pub trait ReportSink {
    /// Write a line to the developer-facing diagnostic channel.
    ///
    /// Callers tag the message with their own call-site identity (the
    /// operation name) before handing it over.
    fn log_diagnostic(&self, message: &str);

    /// Write a line to the user-visible console surface.
    fn print_line(&self, text: &str);
}

/// Default sink: diagnostics via the `log` facade, console via stdout.
#[derive(Debug, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn log_diagnostic(&self, message: &str) {
        log::error!(target: "drawbridge", "{message}");
    }

    fn print_line(&self, text: &str) {
        println!("{text}");
    }
}

/// In-memory sink that records both channels, for tests and embedders
/// that surface output themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    diagnostics: Mutex<Vec<String>>,
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostic channel so far.
    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Snapshot of the console channel so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ReportSink for MemorySink {
    fn log_diagnostic(&self, message: &str) {
        self.diagnostics
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }

    fn print_line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
    }
}

impl<S: ReportSink> ReportSink for std::sync::Arc<S> {
    fn log_diagnostic(&self, message: &str) {
        (**self).log_diagnostic(message);
    }

    fn print_line(&self, text: &str) {
        (**self).print_line(text);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn memory_sink_keeps_channels_separate() {
        let sink = MemorySink::new();
        sink.log_diagnostic("diag one");
        sink.print_line("hello");
        sink.log_diagnostic("diag two");

        assert_eq!(sink.diagnostics(), vec!["diag one", "diag two"]);
        assert_eq!(sink.lines(), vec!["hello"]);
    }

    #[test]
    fn arc_sink_delegates() {
        let sink = Arc::new(MemorySink::new());
        let shared = sink.clone();
        shared.log_diagnostic("via arc");
        assert_eq!(sink.diagnostics(), vec!["via arc"]);
    }
}
