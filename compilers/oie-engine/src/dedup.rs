use std::collections::HashSet;

use oie_tree::DependencyTree;

use crate::extraction::Extraction;

/// Drops invalid extractions and keeps the first of each rendered triple.
pub fn deduplicate(
    tree: &DependencyTree,
    extractions: Vec<Extraction>,
    allow_hidden_subject: bool,
) -> Vec<Extraction> {
    let mut seen = HashSet::new();
    extractions
        .into_iter()
        .filter(|extraction| extraction.is_valid(tree, allow_hidden_subject))
        .filter(|extraction| seen.insert(extraction.triple(tree)))
        .collect()
}
