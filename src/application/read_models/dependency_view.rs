//! Dependency view structs for read model
//!
//! These structs provide a query-optimized view of dependency relationships.

/// Direct dependencies of one component, by final bom-ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyView {
    /// BOM reference of the depending component
    pub bom_ref: String,
    /// BOM references of its direct dependencies
    pub depends_on: Vec<String>,
}
