use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::adapters::outbound::npm::NpmCliReader;
use crate::ports::outbound::DependencyTreeReader;
use std::path::PathBuf;

/// Where the `npm ls` listing comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    /// Run npm in the project directory
    Npm,
    /// Read a previously saved listing
    File(PathBuf),
}

impl ListingSource {
    /// `--input <file>` selects a saved listing; otherwise npm runs
    pub fn from_input(input: Option<PathBuf>) -> Self {
        input.map_or(ListingSource::Npm, ListingSource::File)
    }
}

/// Factory for creating dependency tree readers
///
/// This factory encapsulates the creation logic for different reader implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct ListingSourceFactory;

impl ListingSourceFactory {
    /// Creates a reader for the specified listing source
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::factories::{ListingSource, ListingSourceFactory};
    ///
    /// let reader = ListingSourceFactory::create(ListingSource::Npm);
    /// ```
    pub fn create(source: ListingSource) -> Box<dyn DependencyTreeReader> {
        match source {
            ListingSource::Npm => Box::new(NpmCliReader::new()),
            ListingSource::File(path) => Box::new(FileSystemReader::new(path)),
        }
    }

    /// Progress message shown before the listing is read
    pub fn progress_message(source: &ListingSource) -> String {
        match source {
            ListingSource::Npm => "📖 Collecting dependencies with npm ls...".to_string(),
            ListingSource::File(path) => {
                format!("📖 Loading dependency listing from {}...", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        assert_eq!(ListingSource::from_input(None), ListingSource::Npm);
        assert_eq!(
            ListingSource::from_input(Some(PathBuf::from("ls.json"))),
            ListingSource::File(PathBuf::from("ls.json"))
        );
    }

    #[test]
    fn test_create_readers() {
        let npm = ListingSourceFactory::create(ListingSource::Npm);
        let file = ListingSourceFactory::create(ListingSource::File(PathBuf::from("ls.json")));
        assert!(std::mem::size_of_val(&npm) > 0);
        assert!(std::mem::size_of_val(&file) > 0);
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            ListingSourceFactory::progress_message(&ListingSource::Npm),
            "📖 Collecting dependencies with npm ls..."
        );
        assert!(
            ListingSourceFactory::progress_message(&ListingSource::File(PathBuf::from("ls.json")))
                .contains("ls.json")
        );
    }
}
