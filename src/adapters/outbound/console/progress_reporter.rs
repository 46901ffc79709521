use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting status to stderr
///
/// This adapter implements the ProgressReporter port, writing to stderr so
/// it doesn't interfere with the JSON on stdout. Step messages are only
/// shown in verbose mode; warnings and completions are always shown.
pub struct StderrProgressReporter {
    verbose: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn verbose(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        assert!(!reporter.verbose);
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_reporter_verbose() {
        let reporter = StderrProgressReporter::verbose(true);
        assert!(reporter.verbose);
        reporter.report("Test message");
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        assert!(!reporter.verbose);
    }
}
