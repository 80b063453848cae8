use std::collections::BTreeSet;

use oie_protocol::DepSet;
use oie_tree::Node;
use tracing::trace;

use crate::phrase::Phrase;
use crate::predicate::NodePredicate;

/// Token indices already claimed by some element.
pub type Visited = BTreeSet<usize>;

/// Gathers the subtree of `start` into a phrase.
///
/// Walks children only, depth-first. A child is skipped (together with its
/// subtree) when it was visited, when its label is in `boundary`, or when
/// `include` rejects it.
pub fn collect<P>(start: Node<'_>, visited: &Visited, include: &P, boundary: DepSet) -> Phrase
where
    P: NodePredicate + ?Sized,
{
    let mut phrase = Phrase::new(start.index());
    let mut seen = visited.clone();
    seen.insert(start.index());

    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        for child in current.children() {
            if seen.contains(&child.index())
                || child.dep().is_in(boundary)
                || !include.accepts(child)
            {
                continue;
            }
            seen.insert(child.index());
            phrase.add_piece(child.index());
            stack.push(child);
        }
    }

    trace!(start = ?start, size = phrase.indices().count(), "collected phrase");
    phrase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{CLAUSE_BOUNDARY, COMPONENT_BOUNDARY};
    use crate::predicate::{ComplementPart, NominalPart};
    use crate::testing::{tree, ADVERBIAL_CLAUSE, APPOSITION};

    #[test]
    fn test_collects_noun_phrase() {
        let tree = tree(APPOSITION);
        let maria = tree.node(0);
        let phrase = collect(maria, &Visited::new(), &NominalPart::subject(maria), CLAUSE_BOUNDARY);
        assert_eq!(phrase.render(&tree), "Maria , a professora");

        let anchor = collect(maria, &Visited::new(), &NominalPart::anchor(maria), CLAUSE_BOUNDARY);
        assert_eq!(anchor.render(&tree), "Maria");
    }

    #[test]
    fn test_stops_at_boundary_and_visited() {
        let tree = tree(ADVERBIAL_CLAUSE);
        let saiu = tree.node(1);
        let phrase = collect(saiu, &Visited::new(), &ComplementPart, COMPONENT_BOUNDARY);
        assert_eq!(phrase.indices().collect::<Vec<_>>(), vec![1]);

        let comprar = tree.node(3);
        let visited: Visited = [4].into_iter().collect();
        let phrase = collect(comprar, &visited, &ComplementPart, DepSet::empty());
        assert_eq!(phrase.render(&tree), "para comprar");
    }
}
