/// SbomMetadata value object representing document-level SBOM metadata
///
/// Timestamp and serial number are absent for reproducible output.
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: Option<String>,
    tool_name: String,
    tool_version: String,
    serial_number: Option<String>,
}

impl SbomMetadata {
    pub fn new(
        timestamp: Option<String>,
        tool_name: String,
        tool_version: String,
        serial_number: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            serial_number,
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }
}
