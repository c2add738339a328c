use crate::sbom_generation::domain::SbomMetadata;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Name recorded as the generating tool
pub const TOOL_NAME: &str = "npm-sbom";

/// SbomGenerator service for generating SBOM metadata
///
/// This service contains pure business logic for SBOM metadata generation.
/// It creates metadata conforming to CycloneDX specification.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata with current timestamp and unique serial number
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the SBOM
    /// * `tool_version` - Version of the tool
    /// * `reproducible` - Leave out timestamp and serial number
    pub fn generate_metadata(tool_name: &str, tool_version: &str, reproducible: bool) -> SbomMetadata {
        let (timestamp, serial_number) = if reproducible {
            (None, None)
        } else {
            (
                Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
                Some(format!("urn:uuid:{}", Uuid::new_v4())),
            )
        };

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Generates SBOM metadata with default tool information (npm-sbom)
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default_metadata(reproducible: bool) -> SbomMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"), reproducible)
    }
}
