/// ProgressReporter port for status messages
///
/// Status goes to a side channel (stderr in the CLI) so that stdout only ever
/// carries JSON.
pub trait ProgressReporter {
    /// Reports a step of the current command; may be suppressed
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports a warning that the user should always see
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation that has no JSON output of its own
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
