use oie_protocol::DepRel;
use oie_tree::Node;

use crate::labels::{
    is_phrase_punctuation, NOMINAL_MEMBERS, NON_INITIATORS, SUBJECTS, SUBORDINATE_CLAUSES,
};

/// Decides whether a dependent joins the phrase being collected.
pub trait NodePredicate {
    fn accepts(&self, node: Node<'_>) -> bool;
}

impl<F> NodePredicate for F
where
    F: Fn(Node<'_>) -> bool,
{
    fn accepts(&self, node: Node<'_>) -> bool {
        self(node)
    }
}

/// Members of the noun phrase headed by `head`.
#[derive(Debug, Clone, Copy)]
pub struct NominalPart {
    head: usize,
    keep_head_case: bool,
    keep_appositions: bool,
}

impl NominalPart {
    /// Subjects drop the preposition of their head and keep appositions.
    pub fn subject(head: Node<'_>) -> Self {
        Self {
            head: head.index(),
            keep_head_case: false,
            keep_appositions: true,
        }
    }

    /// The entity an apposition describes, without the apposition.
    pub fn anchor(head: Node<'_>) -> Self {
        Self {
            head: head.index(),
            keep_head_case: false,
            keep_appositions: false,
        }
    }

    /// The apposition itself; nested appositions are asserted separately.
    pub fn apposition(head: Node<'_>) -> Self {
        Self {
            head: head.index(),
            keep_head_case: true,
            keep_appositions: false,
        }
    }
}

impl NodePredicate for NominalPart {
    fn accepts(&self, node: Node<'_>) -> bool {
        match node.dep() {
            DepRel::Case => self.keep_head_case || node.head().index() != self.head,
            DepRel::Appos => self.keep_appositions,
            DepRel::Conj => !node.is_verbal(),
            DepRel::Punct => is_phrase_punctuation(node),
            dep => dep.is_in(NOMINAL_MEMBERS) && !node.is_relative_pronoun(),
        }
    }
}

/// Which children of the effective node may open a complement component.
#[derive(Debug, Clone, Copy)]
pub struct ComplementStart {
    pub subordinate_clauses: bool,
}

impl NodePredicate for ComplementStart {
    fn accepts(&self, node: Node<'_>) -> bool {
        let dep = node.dep();
        if dep.is_in(NON_INITIATORS) || dep.is_in(SUBJECTS) || node.is_relative_pronoun() {
            return false;
        }
        if dep == DepRel::Conj && node.is_verbal() {
            return false;
        }
        !dep.is_in(SUBORDINATE_CLAUSES) || self.subordinate_clauses
    }
}

/// Anything below a component root, short of subjects, relative pronouns,
/// coordinated verbs and stray punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplementPart;

impl NodePredicate for ComplementPart {
    fn accepts(&self, node: Node<'_>) -> bool {
        match node.dep() {
            dep if dep.is_in(SUBJECTS) => false,
            DepRel::Conj if node.is_verbal() => false,
            DepRel::Punct => is_phrase_punctuation(node),
            _ => !node.is_relative_pronoun(),
        }
    }
}
