use super::integrity_hash::IntegrityHashExtractor;
use super::package_metadata::{ComponentFactory, PackageDataNormalizer, PackageMetadata};
use crate::sbom_generation::domain::{
    fallback_bom_ref, property_names, BuildOptions, Component, ComponentScope, ComponentType,
    ExternalReference, ExternalReferenceType, OmitType, PackageUrl, RawNode,
};

/// Tarballs from the default registry are derivable from name and version,
/// so they are not repeated as a purl `download_url` qualifier.
const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org/";

/// Result of normalizing one raw record
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Component(Box<Component>),
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Excluded by the omission policy
    Omitted(OmitType),
    /// The record cannot be turned into a component
    Malformed,
}

/// PackageRecordNormalizer turns one raw listing node into a canonical component
///
/// Applies the omission policy first, then normalizes package data, builds the
/// component and enriches it with scope, npm properties, the distribution
/// reference with its integrity hash, purl and bom-ref.
pub struct PackageRecordNormalizer<'a> {
    options: &'a BuildOptions,
}

impl<'a> PackageRecordNormalizer<'a> {
    pub fn new(options: &'a BuildOptions) -> Self {
        Self { options }
    }

    /// Normalizes `node`; the root is exempt from the omission policy and
    /// takes the configured root component type.
    pub fn normalize(&self, node: &RawNode, is_root: bool) -> Normalized {
        if !is_root {
            if let Some(omit_type) = self.omission(node) {
                return Normalized::Skip(SkipReason::Omitted(omit_type));
            }
        }

        let Some(path) = node.path else {
            return Normalized::Skip(SkipReason::Malformed);
        };

        let mut metadata = PackageDataNormalizer::normalize(node);
        // the declared version wins over the coerced one
        if let Some(version) = node.version.filter(|v| !v.is_empty()) {
            metadata.version = Some(version.to_string());
        }

        let component_type = if is_root {
            self.options.root_component_type
        } else {
            ComponentType::Library
        };
        let Some(mut component) = ComponentFactory::make_component(&metadata, component_type, path)
        else {
            return Normalized::Skip(SkipReason::Malformed);
        };

        if !is_root {
            component.scope = Some(if node.optional || node.dev_optional {
                ComponentScope::Optional
            } else {
                ComponentScope::Required
            });
        }
        Self::add_properties(&mut component, node, path);
        if let Some(distribution) = Self::distribution_reference(node) {
            component.external_references.push(distribution);
        }
        component.purl = Some(self.package_url(&component, &metadata));
        component.bom_ref = Some(match node.id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => fallback_bom_ref(
                component.group.as_deref(),
                &component.name,
                component.version.as_deref(),
            ),
        });

        Normalized::Component(Box::new(component))
    }

    /// Which omitted dependency type, if any, excludes `node`.
    ///
    /// A devOptional package is reachable both as a dev and as an optional
    /// dependency, so it only goes when both types are omitted.
    fn omission(&self, node: &RawNode) -> Option<OmitType> {
        if node.optional && self.options.omits(OmitType::Optional) {
            return Some(OmitType::Optional);
        }
        if node.dev && !node.dev_optional && self.options.omits(OmitType::Dev) {
            return Some(OmitType::Dev);
        }
        if node.dev_optional
            && self.options.omits(OmitType::Dev)
            && self.options.omits(OmitType::Optional)
        {
            return Some(OmitType::Dev);
        }
        None
    }

    fn add_properties(component: &mut Component, node: &RawNode, path: &str) {
        component.add_property(property_names::PACKAGE_PATH, path);

        let flags = [
            (node.dev || node.dev_optional, property_names::PACKAGE_DEVELOPMENT),
            (node.extraneous, property_names::PACKAGE_EXTRANEOUS),
            (node.private, property_names::PACKAGE_PRIVATE),
            (node.in_bundle, property_names::PACKAGE_BUNDLED),
        ];
        for (set, name) in flags {
            if set {
                component.add_property(name, "true");
            }
        }
    }

    fn distribution_reference(node: &RawNode) -> Option<ExternalReference> {
        let resolved = node.resolved.filter(|r| !r.is_empty())?;
        if is_ignored_source(resolved) {
            return None;
        }

        let mut reference =
            ExternalReference::new(ExternalReferenceType::Distribution, resolved.to_string())
                .with_comment("as detected from npm-ls property \"resolved\"");
        reference
            .hashes
            .extend(IntegrityHashExtractor::extract(node.integrity));
        Some(reference)
    }

    fn package_url(&self, component: &Component, metadata: &PackageMetadata) -> PackageUrl {
        let mut purl = PackageUrl::new(
            component.group.clone(),
            component.name.clone(),
            component.version.clone(),
        );
        if let Some(vcs) = component.external_reference(ExternalReferenceType::Vcs) {
            purl = purl.with_qualifier("vcs_url", &vcs.url);
        }
        if let Some(distribution) =
            component.external_reference(ExternalReferenceType::Distribution)
        {
            if !distribution.url.starts_with(DEFAULT_REGISTRY) {
                purl = purl.with_qualifier("download_url", &distribution.url);
            }
        }
        let purl = purl.with_subpath(metadata.repository_directory.clone());
        if self.options.short_purls {
            purl.shortened()
        } else {
            purl
        }
    }
}

/// Sources that must not be listed as distributions: explicit `ignore:` markers
/// and `file:` links to locally built artifacts.
fn is_ignored_source(resolved: &str) -> bool {
    let lower = resolved.to_ascii_lowercase();
    lower.starts_with("ignore:") || lower.starts_with("file:")
}
