use crate::shared::Result;

/// OutputPresenter port for presenting command output
///
/// Commands render their result as indented JSON; this port abstracts where
/// that text ends up (stdout in the CLI, a buffer in tests).
pub trait OutputPresenter {
    /// Presents one rendered result
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}

impl<T: OutputPresenter + ?Sized> OutputPresenter for &T {
    fn present(&self, content: &str) -> Result<()> {
        (**self).present(content)
    }
}
