use crate::application::read_models::SbomReadModel;
use crate::shared::Result;

/// SbomFormatter port for formatting SBOM output
///
/// This port abstracts the formatting logic for different SBOM formats
/// (CycloneDX JSON today).
pub trait SbomFormatter {
    /// Formats SBOM output using the unified read model
    ///
    /// # Arguments
    /// * `model` - The SBOM read model containing metadata, the nested
    ///   component forest and resolved dependency relationships
    ///
    /// # Returns
    /// Formatted SBOM content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}
