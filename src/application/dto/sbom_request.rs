use crate::ports::outbound::ListingOptions;
use crate::sbom_generation::domain::BuildOptions;
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for SBOM generation use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external API request.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the project directory containing package.json
    pub project_path: PathBuf,
    /// Options for graph building and tree assembly
    pub build_options: BuildOptions,
    /// Options passed to npm when obtaining the listing
    pub listing_options: ListingOptions,
    /// Report policy skips and other notes, not just warnings
    pub verbose: bool,
}

impl SbomRequest {
    pub fn new(
        project_path: PathBuf,
        build_options: BuildOptions,
        listing_options: ListingOptions,
    ) -> Self {
        Self {
            project_path,
            build_options,
            listing_options,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
