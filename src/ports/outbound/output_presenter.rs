use crate::shared::Result;

/// OutputPresenter port for the rendered report or history
///
/// Implementations decide where the text ends up (stdout or a file).
pub trait OutputPresenter {
    /// Writes `content` unchanged
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}
