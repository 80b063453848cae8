use oie_protocol::DepSet;
use oie_tree::Node;
use tracing::trace;

use crate::collector::{collect, Visited};
use crate::labels::{
    is_existential, AUXILIARIES, CLAUSAL_SUBJECTS, CLAUSE_BOUNDARY, COMPONENT_BOUNDARY,
    NOMINAL_SUBJECTS, PASSIVE_MARKERS, RELATIVE_CLAUSES,
};
use crate::phrase::Phrase;
use crate::predicate::{ComplementPart, NominalPart};

/// Finds the subject of the predicate starting at `predicate`.
///
/// Auxiliaries and copulas look for it on their head. Failing an explicit
/// subject, passive and existential predicates promote their object, and
/// relative clause verbs borrow the noun they modify.
pub fn find_subject(predicate: Node<'_>) -> Option<Phrase> {
    let search = if predicate.dep().is_in(AUXILIARIES) {
        predicate.head()
    } else {
        predicate
    };

    if let Some(subject) = search.children_in(NOMINAL_SUBJECTS.union(CLAUSAL_SUBJECTS)).next() {
        trace!(predicate = ?predicate, subject = ?subject, "explicit subject");
        if subject.dep().is_in(CLAUSAL_SUBJECTS) {
            return Some(collect(subject, &Visited::new(), &ComplementPart, COMPONENT_BOUNDARY));
        }
        if subject.is_relative_pronoun() {
            return Some(antecedent(search, subject));
        }
        return Some(noun_phrase(subject));
    }

    if is_passive(predicate, search) || is_existential(search) {
        if let Some(object) = search.children_in(DepSet::OBJ).next() {
            trace!(predicate = ?predicate, object = ?object, "object promoted to subject");
            return Some(noun_phrase(object));
        }
    }

    if search.dep().is_in(RELATIVE_CLAUSES) {
        return Some(noun_phrase(search.head()));
    }

    None
}

/// The noun a relative pronoun stands for: the head of the nearest enclosing
/// relative clause. Without one the pronoun stays, and validation rejects it.
fn antecedent<'t>(clause: Node<'t>, pronoun: Node<'t>) -> Phrase {
    let relative = std::iter::once(clause)
        .chain(clause.ancestors())
        .find(|node| node.dep().is_in(RELATIVE_CLAUSES));
    match relative {
        Some(relative) => noun_phrase(relative.head()),
        None => noun_phrase(pronoun),
    }
}

fn is_passive(predicate: Node<'_>, search: Node<'_>) -> bool {
    predicate.feats().contains("Voice", "Pass")
        || search.feats().contains("Voice", "Pass")
        || search.has_child_in(PASSIVE_MARKERS)
}

pub(crate) fn noun_phrase(head: Node<'_>) -> Phrase {
    collect(head, &Visited::new(), &NominalPart::subject(head), CLAUSE_BOUNDARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        tree, CLAUSAL_SUBJECT, COPULA_COORDINATION, EXISTENTIAL, HIDDEN_SUBJECT, PASSIVE,
        RELATIVE_CLAUSE, TRANSITIVE,
    };

    fn subject_of(conllu: &str, predicate: usize) -> Option<String> {
        let tree = tree(conllu);
        find_subject(tree.node(predicate)).map(|phrase| phrase.render(&tree))
    }

    #[test]
    fn test_explicit_subjects() {
        assert_eq!(subject_of(TRANSITIVE, 1).as_deref(), Some("João"));
        assert_eq!(subject_of(PASSIVE, 3).as_deref(), Some("a ponte"));
        // from the auxiliary and from the copula
        assert_eq!(subject_of(PASSIVE, 2).as_deref(), Some("a ponte"));
        assert_eq!(subject_of(COPULA_COORDINATION, 2).as_deref(), Some("Maria"));
        assert_eq!(subject_of(CLAUSAL_SUBJECT, 1).as_deref(), Some("Correr"));
    }

    #[test]
    fn test_relative_clause_subjects() {
        // "que" resolves to its antecedent
        assert_eq!(subject_of(RELATIVE_CLAUSE, 3).as_deref(), Some("O homem"));
        assert_eq!(subject_of(RELATIVE_CLAUSE, 4).as_deref(), Some("O homem"));
    }

    #[test]
    fn test_promoted_objects() {
        assert_eq!(subject_of(EXISTENTIAL, 0).as_deref(), Some("muitos problemas"));
        assert_eq!(subject_of(HIDDEN_SUBJECT, 0), None);
    }

    #[test]
    fn test_passive_without_subject_uses_object() {
        let conllu = "
1 Vendem-se vender VERB _ Voice=Pass 0 root
2 casas casa NOUN _ _ 1 obj
";
        assert_eq!(subject_of(conllu, 0).as_deref(), Some("casas"));
    }
}
