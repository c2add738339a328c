use std::path::Path;
use std::sync::{Arc, Mutex};
use npm_sbom::prelude::*;

/// Mock DependencyTreeReader for testing
///
/// Records the listing options of every call so tests can check what
/// the use case asked npm for.
#[derive(Clone)]
pub struct MockDependencyTreeReader {
    pub content: String,
    pub should_fail: bool,
    pub calls: Arc<Mutex<Vec<ListingOptions>>>,
}

#[allow(dead_code)]
impl MockDependencyTreeReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new(String::new())
        }
    }

    pub fn recorded_calls(&self) -> Vec<ListingOptions> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencyTreeReader for MockDependencyTreeReader {
    fn read_dependency_tree(&self, _project_path: &Path, options: &ListingOptions) -> Result<String> {
        self.calls.lock().unwrap().push(options.clone());
        if self.should_fail {
            anyhow::bail!("Mock dependency tree read failure");
        }
        Ok(self.content.clone())
    }
}
