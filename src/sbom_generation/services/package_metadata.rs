use crate::sbom_generation::domain::{
    Component, ComponentType, ExternalReference, ExternalReferenceType, RawNode,
};
use serde_json::Value;

/// Package data after normalization, before it becomes a component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub homepage: Option<String>,
    pub repository_url: Option<String>,
    pub repository_directory: Option<String>,
}

/// Hosts understood in `repository` shorthands like `github:owner/repo`
const HOSTED_GIT_SHORTCUTS: [(&str, &str); 4] = [
    ("github:", "https://github.com/"),
    ("gitlab:", "https://gitlab.com/"),
    ("bitbucket:", "https://bitbucket.org/"),
    ("gist:", "https://gist.github.com/"),
];

/// PackageDataNormalizer cleans up the loosely typed package fields npm reports
///
/// Mirrors what npm itself does to `package.json` data: scoped names are split,
/// versions lose a leading `v`/`=`, licenses and repositories in object form are
/// reduced to strings and repository shorthands are expanded to URLs.
pub struct PackageDataNormalizer;

impl PackageDataNormalizer {
    pub fn normalize(node: &RawNode) -> PackageMetadata {
        let (group, name) = match node.name.map(str::trim) {
            Some(full_name) => split_scoped_name(full_name),
            None => (None, None),
        };
        let (repository_url, repository_directory) = node
            .repository
            .map(normalize_repository)
            .unwrap_or_default();

        PackageMetadata {
            group,
            name,
            version: node.version.and_then(coerce_version),
            description: non_empty(node.description),
            license: node.license.and_then(normalize_license),
            homepage: non_empty(node.homepage),
            repository_url,
            repository_directory,
        }
    }
}

/// ComponentFactory turns normalized package data into a component
pub struct ComponentFactory;

impl ComponentFactory {
    /// Returns `None` when the data cannot describe a component at all,
    /// i.e. it has no usable name.
    pub fn make_component(
        metadata: &PackageMetadata,
        component_type: ComponentType,
        path: &str,
    ) -> Option<Component> {
        let name = metadata.name.as_deref()?;
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return None;
        }

        let mut component = Component::new(component_type, name.to_string(), path.to_string());
        component.group = metadata.group.clone();
        component.version = metadata.version.clone();
        component.description = metadata.description.clone();
        component.license = metadata.license.clone();

        if let Some(homepage) = &metadata.homepage {
            component.external_references.push(
                ExternalReference::new(ExternalReferenceType::Website, homepage.clone())
                    .with_comment("as detected from package data property \"homepage\""),
            );
        }
        if let Some(repository) = &metadata.repository_url {
            component.external_references.push(
                ExternalReference::new(ExternalReferenceType::Vcs, repository.clone())
                    .with_comment("as detected from package data property \"repository\""),
            );
        }

        Some(component)
    }
}

/// `@scope/name` → (`@scope`, `name`); anything else has no group
fn split_scoped_name(full_name: &str) -> (Option<String>, Option<String>) {
    if let Some(rest) = full_name.strip_prefix('@') {
        if let Some((scope, name)) = rest.split_once('/') {
            return (
                Some(format!("@{}", scope)).filter(|s| s.len() > 1),
                Some(name.to_string()).filter(|n| !n.is_empty()),
            );
        }
    }
    (None, Some(full_name.to_string()).filter(|n| !n.is_empty()))
}

fn coerce_version(version: &str) -> Option<String> {
    let trimmed = version.trim();
    let cleaned = trimmed
        .strip_prefix('=')
        .unwrap_or(trimmed)
        .trim_start();
    let cleaned = cleaned
        .strip_prefix('v')
        .or_else(|| cleaned.strip_prefix('V'))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or(cleaned);
    Some(cleaned.to_string()).filter(|v| !v.is_empty())
}

fn normalize_license(license: &Value) -> Option<String> {
    match license {
        Value::String(s) => non_empty(Some(s.as_str())),
        Value::Object(obj) => non_empty(obj.get("type").and_then(Value::as_str)),
        _ => None,
    }
}

fn normalize_repository(repository: &Value) -> (Option<String>, Option<String>) {
    match repository {
        Value::String(s) => (expand_repository_shorthand(s), None),
        Value::Object(obj) => (
            obj.get("url")
                .and_then(Value::as_str)
                .and_then(expand_repository_shorthand),
            non_empty(obj.get("directory").and_then(Value::as_str)),
        ),
        _ => (None, None),
    }
}

fn expand_repository_shorthand(repository: &str) -> Option<String> {
    let repository = repository.trim();
    if repository.is_empty() {
        return None;
    }

    for (prefix, base) in HOSTED_GIT_SHORTCUTS {
        if let Some(slug) = repository.strip_prefix(prefix) {
            return Some(format!("git+{}{}.git", base, slug.trim_end_matches(".git")));
        }
    }

    // bare `owner/repo` means GitHub
    let is_bare_slug = !repository.contains(':')
        && repository.matches('/').count() == 1
        && !repository.starts_with(['.', '/', '@']);
    if is_bare_slug {
        return Some(format!(
            "git+https://github.com/{}.git",
            repository.trim_end_matches(".git")
        ));
    }

    Some(repository.to_string())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
