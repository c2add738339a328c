//! SBOM read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! all SBOM data in a query-optimized format.

use super::component_view::ComponentView;
use super::dependency_view::DependencyView;

/// Main read model for SBOM data
///
/// This struct provides a denormalized, query-optimized view of SBOM data
/// following the CQRS-lite pattern.
#[derive(Debug, Clone)]
pub struct SbomReadModel {
    /// SBOM metadata
    pub metadata: SbomMetadataView,
    /// Component forest below the root
    pub components: Vec<ComponentView>,
    /// One entry per component with a bom-ref, root included
    pub dependencies: Vec<DependencyView>,
}

/// View representation of SBOM metadata
#[derive(Debug, Clone)]
pub struct SbomMetadataView {
    /// Timestamp when the SBOM was created; absent for reproducible output
    pub timestamp: Option<String>,
    /// Name of the tool that generated the SBOM
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
    /// Serial number of the SBOM; absent for reproducible output
    pub serial_number: Option<String>,
    /// The project the SBOM describes
    pub component: ComponentView,
}
