use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{DependencyTreeReader, ProgressReporter};
use crate::sbom_generation::domain::{BuildDiagnostic, BuildOptions, Component, DependencyGraph};
use crate::sbom_generation::services::{
    DependencyGraphBuilder, PathTrieNester, SbomGenerator, TreeAssembler,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde_json::Value;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the SBOM generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `R` - DependencyTreeReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<R, PR> {
    dependency_tree_reader: R,
    progress_reporter: PR,
}

impl<R, PR> GenerateSbomUseCase<R, PR>
where
    R: DependencyTreeReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(dependency_tree_reader: R, progress_reporter: PR) -> Self {
        Self {
            dependency_tree_reader,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - SBOM generation request containing project path and options
    ///
    /// # Returns
    /// SbomResponse containing the root component, the component forest and metadata
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Read and parse the dependency listing
        let listing = self.read_listing(&request)?;

        // Step 2: Build the de-duplicated dependency graph
        let (graph, diagnostics) = self.build_graph(&listing, &request)?;

        // Step 3: Nest components by install path
        let (root, components) = self.assemble(graph, &request.build_options);

        // Step 4: Build and return response
        let metadata = SbomGenerator::generate_default_metadata(request.build_options.reproducible);
        Ok(SbomResponse::new(
            root,
            components,
            metadata,
            diagnostics,
            request.build_options.reproducible,
        ))
    }

    /// Reads the listing through the reader port and parses it as JSON
    fn read_listing(&self, request: &SbomRequest) -> Result<Value> {
        let content = self
            .dependency_tree_reader
            .read_dependency_tree(&request.project_path, &request.listing_options)?;

        serde_json::from_str(&content).map_err(|e| {
            SbomError::DependencyTreeParseError {
                source_name: format!("the listing for {}", request.project_path.display()),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Builds the graph and reports what the walk skipped or patched up
    fn build_graph(
        &self,
        listing: &Value,
        request: &SbomRequest,
    ) -> Result<(DependencyGraph, Vec<BuildDiagnostic>)> {
        self.progress_reporter
            .report("📊 Building dependency graph...");

        let outcome = DependencyGraphBuilder::new(&request.build_options).build(listing)?;
        self.report_diagnostics(&outcome.diagnostics, request.verbose);

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s) with {} dependency edge(s)",
            outcome.graph.component_count(),
            outcome.graph.edge_count()
        ));
        Ok((outcome.graph, outcome.diagnostics))
    }

    /// Warnings are always shown; policy skips and other notes only when verbose
    fn report_diagnostics(&self, diagnostics: &[BuildDiagnostic], verbose: bool) {
        for diagnostic in diagnostics {
            if diagnostic.is_warning() {
                self.progress_reporter
                    .report_warning(&diagnostic.to_string());
            } else if verbose {
                self.progress_reporter.report(&format!("   {}", diagnostic));
            }
        }
    }

    /// Nests the graph's components under their install paths
    fn assemble(&self, graph: DependencyGraph, options: &BuildOptions) -> (Component, Vec<Component>) {
        let (root, components) = graph.into_parts();
        let separator = PathTrieNester::separator_for(&root.path);
        let trie = PathTrieNester::nest(
            std::iter::once(root.path.as_str()).chain(components.keys().map(String::as_str)),
            separator,
        );

        let forest = TreeAssembler::assemble(components, &trie, options.flatten_components);
        (root, forest)
    }
}
