use std::collections::BTreeMap;
use std::fmt;

/// Package URL (purl) for an npm package
///
/// Renders as `pkg:npm/<namespace>/<name>@<version>?<qualifiers>#<subpath>`.
/// Qualifiers are kept in a sorted map so rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUrl {
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: BTreeMap<String, String>,
    subpath: Option<String>,
}

impl PackageUrl {
    pub const PURL_TYPE: &'static str = "npm";

    pub fn new(namespace: Option<String>, name: String, version: Option<String>) -> Self {
        Self {
            namespace: namespace.filter(|n| !n.is_empty()),
            name,
            version: version.filter(|v| !v.is_empty()),
            qualifiers: BTreeMap::new(),
            subpath: None,
        }
    }

    pub fn with_qualifier(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.qualifiers.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn with_subpath(mut self, subpath: Option<String>) -> Self {
        self.subpath = subpath
            .map(|s| s.trim_matches('/').to_string())
            .filter(|s| !s.is_empty());
        self
    }

    /// Minimal coordinates only: qualifiers and subpath removed
    pub fn shortened(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            qualifiers: BTreeMap::new(),
            subpath: None,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn qualifier(&self, key: &str) -> Option<&str> {
        self.qualifiers.get(key).map(String::as_str)
    }

    pub fn has_qualifiers(&self) -> bool {
        !self.qualifiers.is_empty()
    }

    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkg:{}/", Self::PURL_TYPE)?;
        if let Some(namespace) = &self.namespace {
            write!(f, "{}/", urlencoding::encode(namespace))?;
        }
        write!(f, "{}", urlencoding::encode(&self.name))?;
        if let Some(version) = &self.version {
            write!(f, "@{}", urlencoding::encode(version))?;
        }
        let mut separator = '?';
        for (key, value) in &self.qualifiers {
            write!(f, "{}{}={}", separator, key, urlencoding::encode(value))?;
            separator = '&';
        }
        if let Some(subpath) = &self.subpath {
            let segments: Vec<String> = subpath
                .split('/')
                .filter(|s| !s.is_empty() && *s != "." && *s != "..")
                .map(|s| urlencoding::encode(s).into_owned())
                .collect();
            if !segments.is_empty() {
                write!(f, "#{}", segments.join("/"))?;
            }
        }
        Ok(())
    }
}
