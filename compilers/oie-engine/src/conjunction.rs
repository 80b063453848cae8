use oie_protocol::DepSet;
use oie_tree::Node;

use crate::collector::{collect, Visited};
use crate::labels::SHARED_MODIFIERS;
use crate::phrase::Phrase;
use crate::predicate::NodePredicate;

/// `root` followed by every non-verbal conjunct reachable from it through
/// `conj` links, in sentence order.
pub fn conjuncts<'t>(root: Node<'t>, visited: &Visited) -> Vec<Node<'t>> {
    let mut found = vec![root];
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        for child in node.children_in(DepSet::CONJ) {
            if child.is_verbal() || visited.contains(&child.index()) {
                continue;
            }
            found.push(child);
            stack.push(child);
        }
    }
    found[1..].sort_by_key(|node| node.index());
    found
}

/// Splits a coordination into one phrase per conjunct.
///
/// Each conjunct is collected without crossing into the others. Case markers
/// and determiners written once before the first conjunct are copied to the
/// conjuncts that have none of their own ("de Ana e [de] Rui").
pub fn expand<P>(root: Node<'_>, visited: &Visited, include: &P, boundary: DepSet) -> Vec<Phrase>
where
    P: NodePredicate + ?Sized,
{
    let conjuncts = conjuncts(root, visited);
    let mut exclusion = visited.clone();
    exclusion.extend(conjuncts.iter().map(|node| node.index()));

    let shared: Vec<Node<'_>> = root
        .children_in(SHARED_MODIFIERS)
        .filter(|modifier| modifier.precedes(&root) && !visited.contains(&modifier.index()))
        .collect();

    conjuncts
        .iter()
        .enumerate()
        .map(|(position, conjunct)| {
            let mut phrase = collect(*conjunct, &exclusion, include, boundary);
            if position > 0 {
                for modifier in &shared {
                    if !conjunct.has_child_in(modifier.dep().as_set()) {
                        phrase.add_piece(modifier.index());
                    }
                }
            }
            phrase
        })
        .collect()
}
