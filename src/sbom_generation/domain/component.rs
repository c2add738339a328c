use super::PackageUrl;
use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;

/// Well-known property names attached to npm components
pub mod property_names {
    pub const PACKAGE_PATH: &str = "cdx:npm:package:path";
    pub const PACKAGE_DEVELOPMENT: &str = "cdx:npm:package:development";
    pub const PACKAGE_EXTRANEOUS: &str = "cdx:npm:package:extraneous";
    pub const PACKAGE_PRIVATE: &str = "cdx:npm:package:private";
    pub const PACKAGE_BUNDLED: &str = "cdx:npm:package:bundled";
    /// Set on flattened components to record their former parent
    pub const PACKAGE_NESTED_UNDER: &str = "cdx:npm:package:nestedUnder";
}

/// CycloneDX component classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentType {
    Application,
    #[default]
    Library,
    Firmware,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Application => "application",
            ComponentType::Library => "library",
            ComponentType::Firmware => "firmware",
        }
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "application" => Ok(ComponentType::Application),
            "library" => Ok(ComponentType::Library),
            "firmware" => Ok(ComponentType::Firmware),
            _ => Err(format!(
                "Invalid component type: {}. Please specify 'application', 'library' or 'firmware'",
                s
            )),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a component is needed at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentScope {
    Required,
    Optional,
}

impl ComponentScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentScope::Required => "required",
            ComponentScope::Optional => "optional",
        }
    }
}

/// Digest algorithms npm records in `integrity` fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

/// A digest with its content as lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hash {
    pub algorithm: HashAlgorithm,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExternalReferenceType {
    Distribution,
    Vcs,
    Website,
}

impl ExternalReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalReferenceType::Distribution => "distribution",
            ExternalReferenceType::Vcs => "vcs",
            ExternalReferenceType::Website => "website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    pub reference_type: ExternalReferenceType,
    pub url: String,
    pub comment: Option<String>,
    pub hashes: Vec<Hash>,
}

impl ExternalReference {
    pub fn new(reference_type: ExternalReferenceType, url: String) -> Self {
        Self {
            reference_type,
            url,
            comment: None,
            hashes: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Canonical component entity
///
/// Identity is the install path: the graph builder keeps exactly one
/// `Component` per path. Dependency edges name their targets by install path
/// too, so they survive bom-ref rewriting during nesting.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub component_type: ComponentType,
    pub name: String,
    pub group: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    /// SPDX license expression as declared by the package
    pub license: Option<String>,
    pub scope: Option<ComponentScope>,
    pub properties: Vec<Property>,
    pub external_references: Vec<ExternalReference>,
    pub purl: Option<PackageUrl>,
    pub bom_ref: Option<String>,
    /// Install path this component was materialized from
    pub path: String,
    /// Install paths of direct dependencies, in discovery order
    pub dependencies: IndexSet<String>,
    /// Nested components, filled by the tree assembler
    pub components: Vec<Component>,
}

impl Component {
    pub fn new(component_type: ComponentType, name: String, path: String) -> Self {
        Self {
            component_type,
            name,
            group: None,
            version: None,
            description: None,
            license: None,
            scope: None,
            properties: Vec::new(),
            external_references: Vec::new(),
            purl: None,
            bom_ref: None,
            path,
            dependencies: IndexSet::new(),
            components: Vec::new(),
        }
    }

    /// Stand-in for a record too malformed to normalize.
    ///
    /// It still owns its install path so the graph stays connected and later
    /// occurrences of the path reuse it.
    pub fn placeholder(name: &str, path: &str) -> Self {
        let mut component = Self::new(
            ComponentType::Library,
            format!("InterferedDependency.{}", name),
            path.to_string(),
        );
        component.bom_ref = Some(fallback_bom_ref(None, &component.name, None));
        component.add_property(property_names::PACKAGE_PATH, path);
        component
    }

    pub fn add_property(&mut self, name: &str, value: impl Into<String>) {
        self.properties.push(Property::new(name, value));
    }

    /// Returns the value of the first property called `name`
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn external_reference(&self, reference_type: ExternalReferenceType) -> Option<&ExternalReference> {
        self.external_references
            .iter()
            .find(|r| r.reference_type == reference_type)
    }

    /// bom-ref, or `None` when unset or empty
    pub fn bom_ref_value(&self) -> Option<&str> {
        self.bom_ref.as_deref().filter(|r| !r.is_empty())
    }

    /// Visits this component and all nested components in pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Component)) {
        visit(self);
        for child in &self.components {
            child.walk(visit);
        }
    }
}

/// `group/name@version` with `-` standing in for missing parts
pub fn fallback_bom_ref(group: Option<&str>, name: &str, version: Option<&str>) -> String {
    format!(
        "{}/{}@{}",
        group.unwrap_or("-"),
        name,
        version.unwrap_or("-")
    )
}
