use oie_protocol::{DepRel, DepSet};
use oie_tree::Node;
use tracing::trace;

use crate::collector::Visited;
use crate::labels::{is_relation_adverb, AUXILIARIES};
use crate::phrase::Phrase;
use crate::predicate::NodePredicate;

/// How a dependent attaches to the relation being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationLink {
    /// `aux`, `aux:pass`: "*foi* construída".
    Auxiliary,
    /// `cop` of a nominal predicate.
    Copula,
    /// Verbal `xcomp`: "quer *comer*".
    Control,
    /// The marker of a controlled verb: "começou *a* estudar".
    Marker,
    /// Negation and aspect adverbs, pronominal `se`.
    Modifier,
}

impl RelationLink {
    pub fn classify(node: Node<'_>) -> Option<Self> {
        match node.dep() {
            DepRel::Aux | DepRel::AuxPass => Some(Self::Auxiliary),
            DepRel::Cop => Some(Self::Copula),
            DepRel::Xcomp if node.is_verbal() => Some(Self::Control),
            DepRel::Mark if node.head().dep() == DepRel::Xcomp && node.head().is_verbal() => {
                Some(Self::Marker)
            }
            DepRel::Advmod if is_relation_adverb(node) => Some(Self::Modifier),
            DepRel::ExplPv => Some(Self::Modifier),
            _ => None,
        }
    }

    /// Links that may move the effective node to the right.
    fn extends_verb(self) -> bool {
        matches!(self, Self::Auxiliary | Self::Control)
    }

    /// Links accepted below a nominal predicate head ("não é bonita").
    fn attaches_to_nominal(self) -> bool {
        !matches!(self, Self::Control | Self::Marker)
    }
}

/// Dependents that join a relation. Below the nominal head of a copula only
/// auxiliaries, copulas and modifiers are taken.
#[derive(Debug, Clone, Copy)]
pub struct RelationPart {
    pub nominal_head: bool,
}

impl NodePredicate for RelationPart {
    fn accepts(&self, node: Node<'_>) -> bool {
        RelationLink::classify(node)
            .is_some_and(|link| !self.nominal_head || link.attaches_to_nominal())
    }
}

/// A built relation and the node its complements hang from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub phrase: Phrase,
    /// The right-most verb of the chain, or the nominal head of a copula.
    pub effective: usize,
}

struct Builder<'t> {
    phrase: Phrase,
    visited: Visited,
    effective: Node<'t>,
    stack: Vec<(Node<'t>, bool)>,
}

impl<'t> Builder<'t> {
    /// The nominal head becomes effective; its own word stays out of the relation.
    fn anchor_nominal(&mut self, head: Node<'t>) {
        self.effective = head;
        self.visited.insert(head.index());
        self.stack.push((head, true));
    }

    fn fold_verb(&mut self, verb: Node<'t>) {
        self.phrase.add_piece(verb.index());
        self.visited.insert(verb.index());
        self.effective = verb;
        self.stack.push((verb, false));
    }

    fn drain(&mut self) {
        while let Some((node, nominal)) = self.stack.pop() {
            let part = RelationPart { nominal_head: nominal };
            for child in node.children() {
                if self.visited.contains(&child.index()) || !part.accepts(child) {
                    continue;
                }
                self.visited.insert(child.index());
                self.phrase.add_piece(child.index());
                self.stack.push((child, false));

                let extends = RelationLink::classify(child).is_some_and(RelationLink::extends_verb);
                if !nominal && extends && self.effective.precedes(&child) {
                    self.effective = child;
                }
            }
        }
    }
}

/// Builds the relation that starts at `predicate`, never touching `excluded`.
///
/// Returns `None` when the phrase ends up without a verb or auxiliary.
pub fn build_relation(predicate: Node<'_>, excluded: &Visited) -> Option<Relation> {
    let mut visited = excluded.clone();
    visited.insert(predicate.index());
    let mut builder = Builder {
        phrase: Phrase::new(predicate.index()),
        visited,
        effective: predicate,
        stack: Vec::new(),
    };

    if predicate.dep() == DepRel::Cop {
        builder.anchor_nominal(predicate.head());
    } else {
        builder.stack.push((predicate, false));
    }
    builder.drain();

    // An auxiliary left as the right-most verb hands over to the word it serves.
    while builder.effective.dep().is_in(AUXILIARIES) && !builder.effective.is_root() {
        let head = builder.effective.head();
        if builder.phrase.contains(head.index()) || excluded.contains(&head.index()) {
            break;
        }
        if head.is_verbal() {
            builder.fold_verb(head);
        } else {
            builder.anchor_nominal(head);
        }
        builder.drain();
    }

    let tree = predicate.tree();
    let verbal = builder
        .phrase
        .indices()
        .any(|i| tree.get(i).is_some_and(|n| n.is_verbal()));
    if !verbal {
        return None;
    }

    trace!(predicate = ?predicate, effective = ?builder.effective, "relation built");
    Some(Relation {
        phrase: builder.phrase,
        effective: builder.effective.index(),
    })
}

/// Relations of verbs coordinated with `effective` that share its subject
/// ("o cão correu e *saltou*"), following chains of coordination.
pub fn coordinated_relations(effective: Node<'_>, excluded: &Visited) -> Vec<Relation> {
    let mut relations = Vec::new();
    for conj in effective.children_in(DepSet::CONJ) {
        if !conj.is_verbal() || conj.has_own_subject() || excluded.contains(&conj.index()) {
            continue;
        }
        if let Some(relation) = build_relation(conj, excluded) {
            let next = conj.tree().node(relation.effective);
            relations.push(relation);
            relations.extend(coordinated_relations(next, excluded));
        }
    }
    relations
}
