use super::record_normalizer::{Normalized, PackageRecordNormalizer, SkipReason};
use crate::sbom_generation::domain::{
    BuildDiagnostic, BuildOptions, Component, DependencyGraph, RawNode,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use indexmap::IndexMap;
use serde_json::Value;

/// Graph plus everything the walk recovered from
#[derive(Debug, Clone)]
pub struct GraphBuildOutcome {
    pub graph: DependencyGraph,
    pub diagnostics: Vec<BuildDiagnostic>,
}

/// One pending listing entry: (parent install path, entry name, entry)
type WorkItem<'v> = (&'v str, &'v str, &'v Value);

/// DependencyGraphBuilder walks an `npm ls` listing into a de-duplicated graph
///
/// The same package shows up at several depths of the listing; the install
/// path is its identity. The first occurrence in listing order (depth-first,
/// pre-order) materializes the component, later occurrences only add edges.
/// Only the top-most occurrence is guaranteed to carry full metadata, which
/// the listing order always visits first for a given path.
///
/// The walk uses an explicit work-list, so listing depth does not grow the
/// call stack.
pub struct DependencyGraphBuilder<'a> {
    options: &'a BuildOptions,
    normalizer: PackageRecordNormalizer<'a>,
}

impl<'a> DependencyGraphBuilder<'a> {
    pub fn new(options: &'a BuildOptions) -> Self {
        Self {
            options,
            normalizer: PackageRecordNormalizer::new(options),
        }
    }

    /// Builds the graph for the listing rooted at `raw_root`
    ///
    /// # Errors
    /// Fails only when the top level is not an object or has no string `path`.
    pub fn build(&self, raw_root: &Value) -> Result<GraphBuildOutcome> {
        let root_node = RawNode::from_value(raw_root).ok_or_else(|| SbomError::InvalidDependencyTree {
            reason: "the top level of the listing is not an object".to_string(),
        })?;
        let root_path = root_node.path.ok_or_else(|| SbomError::InvalidDependencyTree {
            reason: "the root package has no install path".to_string(),
        })?;

        let mut diagnostics = Vec::new();
        let root = match self.normalizer.normalize(&root_node, true) {
            Normalized::Component(component) => *component,
            Normalized::Skip(_) => {
                let name = root_node.name.unwrap_or("root");
                diagnostics.push(BuildDiagnostic::Placeholder {
                    name: name.to_string(),
                    path: root_path.to_string(),
                });
                self.root_placeholder(name, root_path)
            }
        };

        // The root sits in the arena during the walk so edges back to the
        // project path resolve to it.
        let mut components: IndexMap<String, Component> = IndexMap::new();
        components.insert(root_path.to_string(), root);

        let mut work: Vec<WorkItem> = Vec::new();
        push_children(&mut work, root_path, &root_node);

        while let Some((parent_path, name, value)) = work.pop() {
            let Some(node) = RawNode::from_value(value) else {
                diagnostics.push(BuildDiagnostic::NotAnObject {
                    name: name.to_string(),
                    parent_path: parent_path.to_string(),
                });
                continue;
            };
            let Some(path) = node.path else {
                diagnostics.push(BuildDiagnostic::MissingPath {
                    name: name.to_string(),
                    parent_path: parent_path.to_string(),
                });
                continue;
            };

            if !components.contains_key(path) {
                let component = match self.normalizer.normalize(&node, false) {
                    Normalized::Component(component) => *component,
                    Normalized::Skip(SkipReason::Omitted(omit_type)) => {
                        // final for this edge only; other edges to the path decide on their own
                        diagnostics.push(BuildDiagnostic::Omitted {
                            name: name.to_string(),
                            path: path.to_string(),
                            omit_type,
                        });
                        continue;
                    }
                    Normalized::Skip(SkipReason::Malformed) => {
                        diagnostics.push(BuildDiagnostic::Placeholder {
                            name: name.to_string(),
                            path: path.to_string(),
                        });
                        Component::placeholder(name, path)
                    }
                };
                components.insert(path.to_string(), component);
            }

            if let Some(parent) = components.get_mut(parent_path) {
                parent.dependencies.insert(path.to_string());
            }
            push_children(&mut work, path, &node);
        }

        let root = components
            .shift_remove(root_path)
            .ok_or_else(|| SbomError::InvalidDependencyTree {
                reason: format!("root component at {} went missing during the walk", root_path),
            })?;

        Ok(GraphBuildOutcome {
            graph: DependencyGraph::new(root, components),
            diagnostics,
        })
    }

    fn root_placeholder(&self, name: &str, path: &str) -> Component {
        let mut component = Component::placeholder(name, path);
        component.component_type = self.options.root_component_type;
        component
    }
}

/// Queues the children of `node` so they pop in listing order
fn push_children<'v>(work: &mut Vec<WorkItem<'v>>, parent_path: &'v str, node: &RawNode<'v>) {
    work.extend(
        node.dependencies()
            .rev()
            .map(|(name, value)| (parent_path, name, value)),
    );
}
