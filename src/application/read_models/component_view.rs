//! Component view structs for read model
//!
//! These structs mirror the nested component forest in a serializer-friendly
//! shape: enums become their CycloneDX strings, purls are rendered.

/// View representation of a software component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    /// BOM reference identifier, prefixed with its ancestors when nested
    pub bom_ref: Option<String>,
    /// CycloneDX component type (`library`, `application`, `firmware`)
    pub component_type: String,
    /// npm scope, e.g. `@babel`
    pub group: Option<String>,
    /// Component name
    pub name: String,
    /// Component version
    pub version: Option<String>,
    /// Component description
    pub description: Option<String>,
    /// License information
    pub license: Option<LicenseView>,
    /// `required` or `optional`
    pub scope: Option<String>,
    /// Package URL (purl)
    pub purl: Option<String>,
    pub external_references: Vec<ExternalReferenceView>,
    pub properties: Vec<PropertyView>,
    /// Nested components
    pub components: Vec<ComponentView>,
}

/// View representation of license information
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseView {
    /// Compound SPDX expression such as `(MIT OR Apache-2.0)`
    Expression(String),
    /// Single SPDX-style identifier
    Id(String),
    /// Free-form license name
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReferenceView {
    pub reference_type: String,
    pub url: String,
    pub comment: Option<String>,
    pub hashes: Vec<HashView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashView {
    pub algorithm: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyView {
    pub name: String,
    pub value: String,
}
