/// Mock implementations for testing
mod mock_dependency_tree_reader;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_dependency_tree_reader::MockDependencyTreeReader;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
