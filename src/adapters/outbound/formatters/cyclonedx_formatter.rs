use crate::application::read_models::{
    ComponentView, DependencyView, ExternalReferenceView, LicenseView, SbomMetadataView,
    SbomReadModel,
};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    #[serde(rename = "serialNumber", skip_serializing_if = "Option::is_none")]
    serial_number: Option<String>,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize)]
struct Dependency {
    #[serde(rename = "ref")]
    bom_ref: String,
    #[serde(rename = "dependsOn", skip_serializing_if = "Vec::is_empty")]
    depends_on: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    tools: Tools,
    component: Component,
}

#[derive(Debug, Serialize)]
struct Tools {
    components: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(rename = "bom-ref", skip_serializing_if = "Option::is_none")]
    bom_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<License>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
    #[serde(rename = "externalReferences", skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<ExternalReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum License {
    License { license: LicenseContent },
    Expression { expression: String },
}

#[derive(Debug, Serialize)]
struct LicenseContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExternalReference {
    #[serde(rename = "type")]
    reference_type: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hashes: Vec<HashEntry>,
}

#[derive(Debug, Serialize)]
struct HashEntry {
    alg: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// This adapter implements the SbomFormatter port for CycloneDX format.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: "1.6",
            serial_number: model.metadata.serial_number.clone(),
            version: 1,
            metadata: self.build_metadata(&model.metadata),
            components: self.build_components(&model.components),
            dependencies: self.build_dependencies(&model.dependencies),
        };

        let mut json = serde_json::to_string_pretty(&bom)?;
        json.push('\n');
        Ok(json)
    }
}

impl CycloneDxFormatter {
    /// Build metadata from SbomMetadataView
    fn build_metadata(&self, metadata: &SbomMetadataView) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp.clone(),
            tools: Tools {
                components: vec![Tool {
                    component_type: "application",
                    name: metadata.tool_name.clone(),
                    version: metadata.tool_version.clone(),
                }],
            },
            component: self.build_component(&metadata.component),
        }
    }

    /// Build components from ComponentView slice
    fn build_components(&self, components: &[ComponentView]) -> Vec<Component> {
        components.iter().map(|c| self.build_component(c)).collect()
    }

    fn build_component(&self, c: &ComponentView) -> Component {
        Component {
            component_type: c.component_type.clone(),
            bom_ref: c.bom_ref.clone(),
            group: c.group.clone(),
            name: c.name.clone(),
            version: c.version.clone(),
            description: c.description.clone(),
            scope: c.scope.clone(),
            licenses: c.license.as_ref().map(|l| self.build_license(l)),
            purl: c.purl.clone(),
            external_references: c
                .external_references
                .iter()
                .map(|r| self.build_external_reference(r))
                .collect(),
            properties: c
                .properties
                .iter()
                .map(|p| Property {
                    name: p.name.clone(),
                    value: p.value.clone(),
                })
                .collect(),
            components: self.build_components(&c.components),
        }
    }

    /// Build license from LicenseView
    fn build_license(&self, license: &LicenseView) -> Vec<License> {
        let choice = match license {
            LicenseView::Expression(expression) => License::Expression {
                expression: expression.clone(),
            },
            LicenseView::Id(id) => License::License {
                license: LicenseContent {
                    id: Some(id.clone()),
                    name: None,
                },
            },
            LicenseView::Name(name) => License::License {
                license: LicenseContent {
                    id: None,
                    name: Some(name.clone()),
                },
            },
        };
        vec![choice]
    }

    fn build_external_reference(&self, reference: &ExternalReferenceView) -> ExternalReference {
        ExternalReference {
            reference_type: reference.reference_type.clone(),
            url: reference.url.clone(),
            comment: reference.comment.clone(),
            hashes: reference
                .hashes
                .iter()
                .map(|h| HashEntry {
                    alg: h.algorithm.clone(),
                    content: h.content.clone(),
                })
                .collect(),
        }
    }

    /// Build dependencies from DependencyView slice
    fn build_dependencies(&self, dependencies: &[DependencyView]) -> Vec<Dependency> {
        dependencies
            .iter()
            .map(|d| Dependency {
                bom_ref: d.bom_ref.clone(),
                depends_on: d.depends_on.clone(),
            })
            .collect()
    }
}
