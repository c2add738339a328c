//! Builder for constructing SbomReadModel from domain objects
//!
//! This module provides the builder that transforms domain objects into
//! the query-optimized read model.

use super::component_view::{
    ComponentView, ExternalReferenceView, HashView, LicenseView, PropertyView,
};
use super::dependency_view::DependencyView;
use super::sbom_read_model::{SbomMetadataView, SbomReadModel};
use crate::application::dto::SbomResponse;
use crate::sbom_generation::domain::{Component, SbomMetadata};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Builder for constructing SbomReadModel from domain objects
///
/// Resolves dependency edges, which the domain keeps as install paths, to the
/// final bom-refs assigned during assembly. In reproducible mode every list
/// in the model is sorted so identical input always serializes identically.
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds a SbomReadModel from the use case response
    pub fn build(response: &SbomResponse) -> SbomReadModel {
        let mut metadata = Self::build_metadata(&response.metadata, &response.root);
        let mut components: Vec<ComponentView> =
            response.components.iter().map(Self::build_component).collect();
        let mut dependencies = Self::build_dependencies(&response.root, &response.components);

        if response.reproducible {
            sort_component(&mut metadata.component);
            sort_components(&mut components);
            for dependency in &mut dependencies {
                dependency.depends_on.sort();
            }
            dependencies.sort_by(|a, b| a.bom_ref.cmp(&b.bom_ref));
        }

        SbomReadModel {
            metadata,
            components,
            dependencies,
        }
    }

    /// Converts domain metadata to view representation
    fn build_metadata(metadata: &SbomMetadata, root: &Component) -> SbomMetadataView {
        SbomMetadataView {
            timestamp: metadata.timestamp().map(str::to_string),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            serial_number: metadata.serial_number().map(str::to_string),
            component: Self::build_component(root),
        }
    }

    fn build_component(component: &Component) -> ComponentView {
        ComponentView {
            bom_ref: component.bom_ref.clone(),
            component_type: component.component_type.as_str().to_string(),
            group: component.group.clone(),
            name: component.name.clone(),
            version: component.version.clone(),
            description: component.description.clone(),
            license: component.license.as_deref().map(classify_license),
            scope: component.scope.map(|scope| scope.as_str().to_string()),
            purl: component.purl.as_ref().map(ToString::to_string),
            external_references: component
                .external_references
                .iter()
                .map(|reference| ExternalReferenceView {
                    reference_type: reference.reference_type.as_str().to_string(),
                    url: reference.url.clone(),
                    comment: reference.comment.clone(),
                    hashes: reference
                        .hashes
                        .iter()
                        .map(|hash| HashView {
                            algorithm: hash.algorithm.as_str().to_string(),
                            content: hash.content.clone(),
                        })
                        .collect(),
                })
                .collect(),
            properties: component
                .properties
                .iter()
                .map(|property| PropertyView {
                    name: property.name.clone(),
                    value: property.value.clone(),
                })
                .collect(),
            components: component.components.iter().map(Self::build_component).collect(),
        }
    }

    /// One entry per bom-ref, root first, then the forest in pre-order
    ///
    /// Components sharing a bom-ref (possible when flattened) share one
    /// entry with the union of their dependencies.
    fn build_dependencies(root: &Component, forest: &[Component]) -> Vec<DependencyView> {
        let mut all: Vec<&Component> = vec![root];
        for top in forest {
            top.walk(&mut |component| all.push(component));
        }

        let refs_by_path: HashMap<&str, &str> = all
            .iter()
            .filter_map(|c| c.bom_ref_value().map(|bom_ref| (c.path.as_str(), bom_ref)))
            .collect();

        let mut entries: IndexMap<&str, IndexSet<&str>> = IndexMap::new();
        for component in &all {
            let Some(bom_ref) = component.bom_ref_value() else {
                continue;
            };
            let depends_on = entries.entry(bom_ref).or_default();
            depends_on.extend(
                component
                    .dependencies
                    .iter()
                    .filter_map(|path| refs_by_path.get(path.as_str()).copied()),
            );
        }

        entries
            .into_iter()
            .map(|(bom_ref, depends_on)| DependencyView {
                bom_ref: bom_ref.to_string(),
                depends_on: depends_on.into_iter().map(str::to_string).collect(),
            })
            .collect()
    }
}

/// Splits declared licenses into SPDX expressions, ids and free-form names
fn classify_license(license: &str) -> LicenseView {
    let is_expression = license.starts_with('(')
        || [" OR ", " AND ", " WITH "]
            .iter()
            .any(|operator| license.contains(operator));
    if is_expression {
        return LicenseView::Expression(license.to_string());
    }

    let is_id = license
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '+'));
    if is_id {
        LicenseView::Id(license.to_string())
    } else {
        LicenseView::Name(license.to_string())
    }
}

fn sort_components(components: &mut [ComponentView]) {
    components.sort_by(|a, b| {
        (&a.bom_ref, &a.group, &a.name, &a.version).cmp(&(&b.bom_ref, &b.group, &b.name, &b.version))
    });
    for component in components {
        sort_component(component);
    }
}

fn sort_component(component: &mut ComponentView) {
    component
        .properties
        .sort_by(|a, b| (&a.name, &a.value).cmp(&(&b.name, &b.value)));
    for reference in &mut component.external_references {
        reference
            .hashes
            .sort_by(|a, b| (&a.algorithm, &a.content).cmp(&(&b.algorithm, &b.content)));
    }
    component
        .external_references
        .sort_by(|a, b| (&a.reference_type, &a.url).cmp(&(&b.reference_type, &b.url)));
    sort_components(&mut component.components);
}
