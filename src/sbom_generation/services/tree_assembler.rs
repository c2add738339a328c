use crate::sbom_generation::domain::{property_names, Component, PathTrie};
use indexmap::IndexMap;

/// Joins a bom-ref to its ancestor chain in nested mode
pub const BOM_REF_SEPARATOR: char = '|';

/// TreeAssembler zips the de-duplicated components with the path trie
///
/// The trie gives the structure, the component map gives the content. A trie
/// node without a component (the project root, or a directory hop such as a
/// bare `@scope` folder) passes its children up to its own parent.
pub struct TreeAssembler;

impl TreeAssembler {
    /// Builds the component forest
    ///
    /// Components whose path the trie does not cover are appended at the top
    /// level, so nothing the graph builder found is lost.
    pub fn assemble(
        mut components: IndexMap<String, Component>,
        trie: &PathTrie,
        flatten: bool,
    ) -> Vec<Component> {
        let mut forest = assemble_level(&mut components, trie);
        forest.extend(components.into_values());

        if flatten {
            flatten_forest(forest)
        } else {
            prefix_bom_refs(&mut forest, None);
            forest
        }
    }
}

fn assemble_level(components: &mut IndexMap<String, Component>, trie: &PathTrie) -> Vec<Component> {
    let mut forest = Vec::new();
    for (path, subtree) in trie.iter() {
        let children = assemble_level(components, subtree);
        match components.swap_remove(path) {
            Some(mut component) => {
                component.components = children;
                forest.push(component);
            }
            None => forest.extend(children),
        }
    }
    forest
}

/// Prefixes each bom-ref with its nearest ancestors' refs
///
/// Components without a bom-ref keep none and hand their parent's prefix
/// down unchanged.
fn prefix_bom_refs(components: &mut [Component], parent_ref: Option<&str>) {
    for component in components {
        let own_ref = component.bom_ref_value().map(str::to_string);
        let chain = match (parent_ref, own_ref) {
            (Some(parent), Some(own)) => Some(format!("{}{}{}", parent, BOM_REF_SEPARATOR, own)),
            (None, Some(own)) => Some(own),
            (parent, None) => parent.map(str::to_string),
        };
        if component.bom_ref_value().is_some() {
            component.bom_ref = chain.clone();
        }
        prefix_bom_refs(&mut component.components, chain.as_deref());
    }
}

/// Lifts every nested component to the top level, in pre-order
fn flatten_forest(forest: Vec<Component>) -> Vec<Component> {
    let mut flat = Vec::new();
    let mut stack: Vec<(Component, Option<String>)> =
        forest.into_iter().rev().map(|c| (c, None)).collect();

    while let Some((mut component, nested_under)) = stack.pop() {
        let children = std::mem::take(&mut component.components);
        let own_ref = component.bom_ref_value().map(str::to_string);
        if let Some(parent_ref) = nested_under {
            component.add_property(property_names::PACKAGE_NESTED_UNDER, parent_ref);
        }
        stack.extend(
            children
                .into_iter()
                .rev()
                .map(|child| (child, own_ref.clone())),
        );
        flat.push(component);
    }
    flat
}
