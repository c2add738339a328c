use indexmap::IndexMap;

/// Structural prefix tree over install paths
///
/// Each key is the full install path of a node; its value holds the paths
/// nested directly below it. Carries no component data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTrie(IndexMap<String, PathTrie>);

impl PathTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, subtree: PathTrie) {
        self.0.insert(key, subtree);
    }

    pub fn get(&self, key: &str) -> Option<&PathTrie> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathTrie)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, PathTrie)> for PathTrie {
    fn from_iter<T: IntoIterator<Item = (String, PathTrie)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
