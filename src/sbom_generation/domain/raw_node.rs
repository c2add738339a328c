//! Normalized view of one node of an `npm ls --json --long` listing
//!
//! Older npm releases hide several fields behind underscore-prefixed aliases
//! (`_resolved`, `_integrity`, `_development`, ...). [`RawNode::from_value`]
//! resolves each field once, preferring the canonical spelling, so the rest of
//! the pipeline never looks at both spellings.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct RawNode<'a> {
    pub name: Option<&'a str>,
    pub version: Option<&'a str>,
    pub path: Option<&'a str>,
    pub dev: bool,
    pub optional: bool,
    pub dev_optional: bool,
    pub extraneous: bool,
    pub private: bool,
    pub in_bundle: bool,
    pub resolved: Option<&'a str>,
    pub integrity: Option<&'a str>,
    /// npm's own identity string, usually `name@version`
    pub id: Option<&'a str>,
    pub description: Option<&'a str>,
    pub license: Option<&'a Value>,
    pub homepage: Option<&'a str>,
    pub repository: Option<&'a Value>,
    dependencies: Option<&'a Map<String, Value>>,
}

impl<'a> RawNode<'a> {
    /// Returns `None` when `value` is not a JSON object
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let obj = value.as_object()?;

        Some(Self {
            name: string_field(obj, "name", "_name"),
            version: string_field(obj, "version", "_version"),
            path: obj.get("path").and_then(Value::as_str),
            dev: flag(obj, "dev", "_development"),
            optional: flag(obj, "optional", "_optional"),
            dev_optional: flag(obj, "devOptional", "_devOptional"),
            extraneous: flag(obj, "extraneous", "_extraneous"),
            private: flag(obj, "private", "_private"),
            in_bundle: flag(obj, "inBundle", "_inBundle"),
            resolved: string_field(obj, "resolved", "_resolved"),
            integrity: string_field(obj, "integrity", "_integrity"),
            id: obj.get("_id").and_then(Value::as_str),
            description: obj.get("description").and_then(Value::as_str),
            license: obj.get("license").filter(|v| !v.is_null()),
            homepage: obj.get("homepage").and_then(Value::as_str),
            repository: obj.get("repository").filter(|v| !v.is_null()),
            dependencies: obj.get("dependencies").and_then(Value::as_object),
        })
    }

    /// Child entries in listing order, keyed by the name they were required under
    pub fn dependencies(&self) -> impl DoubleEndedIterator<Item = (&'a str, &'a Value)> {
        self.dependencies
            .into_iter()
            .flat_map(|deps| deps.iter().map(|(name, value)| (name.as_str(), value)))
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.map_or(0, Map::len)
    }
}

fn field<'a>(obj: &'a Map<String, Value>, canonical: &str, legacy: &str) -> Option<&'a Value> {
    obj.get(canonical)
        .filter(|v| !v.is_null())
        .or_else(|| obj.get(legacy).filter(|v| !v.is_null()))
}

fn string_field<'a>(obj: &'a Map<String, Value>, canonical: &str, legacy: &str) -> Option<&'a str> {
    field(obj, canonical, legacy).and_then(Value::as_str)
}

fn flag(obj: &Map<String, Value>, canonical: &str, legacy: &str) -> bool {
    field(obj, canonical, legacy)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
