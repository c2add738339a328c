/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (npm, file system, console).
pub mod dependency_tree_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_tree_reader::{DependencyTreeReader, ListingOptions};
pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
