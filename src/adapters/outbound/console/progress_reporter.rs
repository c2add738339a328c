use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with SBOM output on stdout.
/// Warnings and errors are colored when stderr is a terminal.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_warning(&self, message: &str) {
        let line = format!("⚠️  Warning: {}", message);
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |text| text.yellow()));
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.if_supports_color(Stream::Stderr, |text| text.red()));
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!("{}", message.if_supports_color(Stream::Stderr, |text| text.green()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_warning("Test warning");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        reporter.report("Test message");
    }
}
