use crate::sbom_generation::domain::OmitType;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::path::Path;

/// Options for obtaining the dependency listing from npm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Dependency types npm should leave out of the listing
    pub omit: BTreeSet<OmitType>,
    /// Read only `package-lock.json`, ignoring `node_modules`
    pub package_lock_only: bool,
    /// Restrict the listing to these workspaces
    pub workspaces: Vec<String>,
    /// Use the listing even when npm exits unsuccessfully
    pub ignore_npm_errors: bool,
}

/// DependencyTreeReader port for reading the `npm ls` dependency listing
///
/// This port abstracts where the listing comes from: a live npm invocation
/// or a previously saved JSON file.
pub trait DependencyTreeReader {
    /// Reads the raw JSON listing for the project in `project_path`
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing package.json
    /// * `options` - Listing options passed through to npm
    ///
    /// # Returns
    /// The raw JSON text of the listing
    ///
    /// # Errors
    /// Returns an error if:
    /// - npm cannot be executed or exits unsuccessfully
    /// - The listing file cannot be read
    fn read_dependency_tree(&self, project_path: &Path, options: &ListingOptions) -> Result<String>;
}

impl<T: DependencyTreeReader + ?Sized> DependencyTreeReader for Box<T> {
    fn read_dependency_tree(&self, project_path: &Path, options: &ListingOptions) -> Result<String> {
        (**self).read_dependency_tree(project_path, options)
    }
}
