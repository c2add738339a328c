use crate::shared::Result;

/// OutputPresenter port for delivering the serialized SBOM
///
/// Implementations decide where the document goes: stdout or a file
/// named by `--output-file`.
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, including
    /// when a file destination is a symbolic link.
    fn present(&self, content: &str) -> Result<()>;
}
