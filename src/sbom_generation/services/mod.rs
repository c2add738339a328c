mod graph_builder;
mod integrity_hash;
mod package_metadata;
mod path_nester;
mod record_normalizer;
mod sbom_generator;
mod tree_assembler;

pub use graph_builder::{DependencyGraphBuilder, GraphBuildOutcome};
pub use integrity_hash::IntegrityHashExtractor;
pub use package_metadata::{ComponentFactory, PackageDataNormalizer, PackageMetadata};
pub use path_nester::PathTrieNester;
pub use record_normalizer::{Normalized, PackageRecordNormalizer, SkipReason};
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
pub use tree_assembler::{TreeAssembler, BOM_REF_SEPARATOR};
