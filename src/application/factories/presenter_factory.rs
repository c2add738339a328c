use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Destination of the finished SBOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `--output-file <path>` writes to a file; `-` or nothing means stdout
    pub fn from_output_file(output_file: Option<PathBuf>) -> Self {
        match output_file {
            Some(path) if path.as_os_str() != "-" => OutputTarget::File(path),
            _ => OutputTarget::Stdout,
        }
    }
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the specified output target
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::factories::{OutputTarget, PresenterFactory};
    ///
    /// let presenter = PresenterFactory::create(OutputTarget::Stdout);
    /// ```
    pub fn create(target: OutputTarget) -> Box<dyn OutputPresenter> {
        match target {
            OutputTarget::Stdout => Box::new(StdoutPresenter::new()),
            OutputTarget::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
