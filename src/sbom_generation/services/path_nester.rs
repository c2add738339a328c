use crate::sbom_generation::domain::PathTrie;
use indexmap::{IndexMap, IndexSet};

/// PathTrieNester rebuilds the filesystem hierarchy from flat install paths
///
/// Works on plain strings only. The separator comes from the data (see
/// [`PathTrieNester::separator_for`]), never from the host platform, so the
/// same listing nests identically everywhere.
///
/// Sibling keys are compared pairwise, which is quadratic in the number of
/// siblings on one level. Sibling counts follow the fan-out of a single
/// `node_modules` directory rather than the total package count.
pub struct PathTrieNester;

impl PathTrieNester {
    /// `/` for POSIX-style root paths, `\` otherwise
    pub fn separator_for(root_path: &str) -> char {
        if root_path.starts_with('/') {
            '/'
        } else {
            '\\'
        }
    }

    /// Nests `paths` by literal string prefix
    ///
    /// Every path gets a trailing separator first, so `/x/abc` never counts
    /// as a prefix of `/x/abcdef`. Keys of the returned trie are the full
    /// install paths again, without the trailing separator.
    pub fn nest<'p>(paths: impl IntoIterator<Item = &'p str>, separator: char) -> PathTrie {
        let keys: IndexSet<String> = paths
            .into_iter()
            .map(|path| format!("{}{}", path, separator))
            .collect();
        nest_level("", keys.into_iter().collect(), separator)
    }
}

/// Groups one level of keys, then recurses into each group
///
/// `prefix` is the already consumed part of every key on this level.
fn nest_level(prefix: &str, keys: Vec<String>, separator: char) -> PathTrie {
    let mut groups: IndexMap<&str, Vec<String>> = keys
        .iter()
        .filter(|key| shortest_prefix_of(key, &keys).is_none())
        .map(|key| (key.as_str(), Vec::new()))
        .collect();

    for key in &keys {
        if let Some(parent) = shortest_prefix_of(key, &keys) {
            if let Some(children) = groups.get_mut(parent) {
                children.push(key[parent.len()..].to_string());
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, children)| {
            let full = format!("{}{}", prefix, key);
            let subtree = nest_level(&full, children, separator);
            let resolved = full.strip_suffix(separator).unwrap_or(&full).to_string();
            (resolved, subtree)
        })
        .collect()
}

/// Shortest other key that `key` starts with
///
/// The shortest one is always a top-level key itself, since any prefix of it
/// would be a shorter prefix of `key` as well.
fn shortest_prefix_of<'k>(key: &str, keys: &'k [String]) -> Option<&'k str> {
    keys.iter()
        .filter(|other| other.len() < key.len() && key.starts_with(other.as_str()))
        .min_by_key(|other| other.len())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(paths: &[&str]) -> PathTrie {
        let separator = PathTrieNester::separator_for(paths[0]);
        PathTrieNester::nest(paths.iter().copied(), separator)
    }

    #[test]
    fn test_separator_from_root_path() {
        assert_eq!(PathTrieNester::separator_for("/home/me/proj"), '/');
        assert_eq!(PathTrieNester::separator_for("C:\\Users\\me\\proj"), '\\');
        assert_eq!(PathTrieNester::separator_for(""), '\\');
    }

    #[test]
    fn test_nested_node_modules() {
        let trie = nest(&[
            "/proj",
            "/proj/node_modules/a",
            "/proj/node_modules/a/node_modules/b",
        ]);

        assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["/proj"]);
        let proj = trie.get("/proj").unwrap();
        assert_eq!(proj.keys().collect::<Vec<_>>(), vec!["/proj/node_modules/a"]);
        let a = proj.get("/proj/node_modules/a").unwrap();
        assert_eq!(
            a.keys().collect::<Vec<_>>(),
            vec!["/proj/node_modules/a/node_modules/b"]
        );
        assert!(a.get("/proj/node_modules/a/node_modules/b").unwrap().is_empty());
    }

    #[test]
    fn test_siblings_stay_siblings() {
        let trie = nest(&["/proj", "/proj/node_modules/a", "/proj/node_modules/b"]);

        let proj = trie.get("/proj").unwrap();
        assert_eq!(
            proj.keys().collect::<Vec<_>>(),
            vec!["/proj/node_modules/a", "/proj/node_modules/b"]
        );
        assert!(proj.iter().all(|(_, subtree)| subtree.is_empty()));
    }

    #[test]
    fn test_name_prefix_is_not_path_prefix() {
        let trie = nest(&["/proj/node_modules/abc", "/proj/node_modules/abcdef"]);

        assert_eq!(trie.len(), 2);
        assert!(trie.get("/proj/node_modules/abc").unwrap().is_empty());
        assert!(trie.get("/proj/node_modules/abcdef").unwrap().is_empty());
    }

    #[test]
    fn test_intermediate_directory_without_entry() {
        // `/proj/node_modules/@scope` itself is never listed
        let trie = nest(&[
            "/proj",
            "/proj/node_modules/@scope/x",
            "/proj/node_modules/@scope/y",
        ]);

        let proj = trie.get("/proj").unwrap();
        assert_eq!(proj.len(), 2);
        assert!(proj.get("/proj/node_modules/@scope/x").is_some());
        assert!(proj.get("/proj/node_modules/@scope/y").is_some());
    }

    #[test]
    fn test_grandchild_listed_before_child() {
        let trie = nest(&[
            "/proj",
            "/proj/node_modules/a/node_modules/b",
            "/proj/node_modules/a",
        ]);

        let a = trie
            .get("/proj")
            .and_then(|proj| proj.get("/proj/node_modules/a"))
            .unwrap();
        assert_eq!(a.len(), 1);
        assert!(a.get("/proj/node_modules/a/node_modules/b").is_some());
    }

    #[test]
    fn test_paths_outside_root_are_top_level() {
        let trie = nest(&["/proj", "/proj/node_modules/a", "/shared/linked"]);

        assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["/proj", "/shared/linked"]);
    }

    #[test]
    fn test_windows_paths() {
        let trie = nest(&[
            "C:\\proj",
            "C:\\proj\\node_modules\\a",
            "C:\\proj\\node_modules\\a\\node_modules\\b",
        ]);

        let a = trie
            .get("C:\\proj")
            .and_then(|proj| proj.get("C:\\proj\\node_modules\\a"))
            .unwrap();
        assert!(a.get("C:\\proj\\node_modules\\a\\node_modules\\b").is_some());
    }

    #[test]
    fn test_duplicate_paths_collapse() {
        let trie = nest(&["/proj", "/proj/node_modules/a", "/proj/node_modules/a"]);
        assert_eq!(trie.get("/proj").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(PathTrieNester::nest(std::iter::empty(), '/').is_empty());
    }
}
