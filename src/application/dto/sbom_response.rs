use crate::sbom_generation::domain::{BuildDiagnostic, Component, SbomMetadata};

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// This DTO contains the rich data structures produced by the use case,
/// which adapters can then format into the appropriate output format.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// The project itself; the subject of the SBOM
    pub root: Component,
    /// Nested (or flattened) component forest below the root
    pub components: Vec<Component>,
    /// SBOM metadata (timestamp, tool info, serial number)
    pub metadata: SbomMetadata,
    /// Everything the graph walk skipped or patched up
    pub diagnostics: Vec<BuildDiagnostic>,
    /// Whether output orderings must be sorted deterministically
    pub reproducible: bool,
}

impl SbomResponse {
    pub fn new(
        root: Component,
        components: Vec<Component>,
        metadata: SbomMetadata,
        diagnostics: Vec<BuildDiagnostic>,
        reproducible: bool,
    ) -> Self {
        Self {
            root,
            components,
            metadata,
            diagnostics,
            reproducible,
        }
    }

    /// Number of components in the forest, nested ones included
    pub fn component_count(&self) -> usize {
        let mut count = 0;
        for component in &self.components {
            component.walk(&mut |_| count += 1);
        }
        count
    }
}
