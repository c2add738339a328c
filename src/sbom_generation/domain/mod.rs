pub mod build_options;
pub mod component;
pub mod dependency_graph;
pub mod package_url;
pub mod path_trie;
pub mod raw_node;
pub mod sbom_metadata;

pub use build_options::{BuildOptions, OmitType};
pub use component::{
    fallback_bom_ref, property_names, Component, ComponentScope, ComponentType,
    ExternalReference, ExternalReferenceType, Hash, HashAlgorithm, Property,
};
pub use dependency_graph::{BuildDiagnostic, DependencyGraph};
pub use package_url::PackageUrl;
pub use path_trie::PathTrie;
pub use raw_node::RawNode;
pub use sbom_metadata::SbomMetadata;
