use super::{Component, OmitType};
use indexmap::IndexMap;
use std::fmt;

/// DependencyGraph aggregate produced by one graph walk
///
/// `components` is the arena: install path → the one canonical component for
/// that path, in first-seen order. The root project is held separately and is
/// never part of the map.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: Component,
    components: IndexMap<String, Component>,
}

impl DependencyGraph {
    pub fn new(root: Component, components: IndexMap<String, Component>) -> Self {
        Self { root, components }
    }

    pub fn root(&self) -> &Component {
        &self.root
    }

    pub fn components(&self) -> &IndexMap<String, Component> {
        &self.components
    }

    pub fn component(&self, path: &str) -> Option<&Component> {
        self.components.get(path)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn edge_count(&self) -> usize {
        self.root.dependencies.len()
            + self
                .components
                .values()
                .map(|c| c.dependencies.len())
                .sum::<usize>()
    }

    pub fn into_parts(self) -> (Component, IndexMap<String, Component>) {
        (self.root, self.components)
    }
}

/// Something the graph walk noticed but recovered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDiagnostic {
    /// Left out by the omission policy
    Omitted {
        name: String,
        path: String,
        omit_type: OmitType,
    },
    /// Entry has no usable install path; usually an optional or peer
    /// dependency that was never installed
    MissingPath { name: String, parent_path: String },
    /// Entry is not a JSON object
    NotAnObject { name: String, parent_path: String },
    /// Record could not be normalized; a placeholder stands in for it
    Placeholder { name: String, path: String },
}

impl BuildDiagnostic {
    /// Warnings are always surfaced; the rest only in verbose mode
    pub fn is_warning(&self) -> bool {
        matches!(self, BuildDiagnostic::Placeholder { .. })
    }
}

impl fmt::Display for BuildDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildDiagnostic::Omitted {
                name,
                path,
                omit_type,
            } => write!(f, "Omitted {} dependency '{}' at {}", omit_type, name, path),
            BuildDiagnostic::MissingPath { name, parent_path } => write!(
                f,
                "Skipped dependency '{}' of {}: no install path (not installed?)",
                name, parent_path
            ),
            BuildDiagnostic::NotAnObject { name, parent_path } => write!(
                f,
                "Skipped dependency '{}' of {}: entry is not an object",
                name, parent_path
            ),
            BuildDiagnostic::Placeholder { name, path } => write!(
                f,
                "Could not interpret package data for '{}' at {}; using a placeholder component",
                name, path
            ),
        }
    }
}
