use crate::ports::outbound::{DependencyTreeReader, ListingOptions};
use crate::shared::error::SbomError;
use crate::shared::security::{read_regular_file, MAX_LISTING_SIZE};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading a saved `npm ls` listing
///
/// Stands in for a live npm run when the listing was produced earlier, e.g.
/// `npm ls --json --long --all > listing.json`. Listing options are ignored:
/// the file already reflects whatever options npm was run with.
pub struct FileSystemReader {
    listing_path: PathBuf,
}

impl FileSystemReader {
    pub fn new(listing_path: PathBuf) -> Self {
        Self { listing_path }
    }

    pub fn listing_path(&self) -> &Path {
        &self.listing_path
    }
}

impl DependencyTreeReader for FileSystemReader {
    fn read_dependency_tree(&self, _project_path: &Path, _options: &ListingOptions) -> Result<String> {
        if !self.listing_path.exists() {
            return Err(SbomError::FileReadError {
                path: self.listing_path.clone(),
                details: "file does not exist".to_string(),
            }
            .into());
        }

        read_regular_file(&self.listing_path, "dependency listing", MAX_LISTING_SIZE).map_err(|e| {
            SbomError::FileReadError {
                path: self.listing_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
