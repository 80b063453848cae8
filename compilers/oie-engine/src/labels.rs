//! Closed label sets and word lists the extraction rules are written against.

use oie_protocol::DepSet;
use oie_tree::Node;

/// Nominal and clausal subjects, active or passive.
pub const SUBJECTS: DepSet = DepSet::NSUBJ
    .union(DepSet::NSUBJ_PASS)
    .union(DepSet::CSUBJ)
    .union(DepSet::CSUBJ_PASS);

pub const NOMINAL_SUBJECTS: DepSet = DepSet::NSUBJ.union(DepSet::NSUBJ_PASS);

pub const CLAUSAL_SUBJECTS: DepSet = DepSet::CSUBJ.union(DepSet::CSUBJ_PASS);

/// Words whose head, not themselves, carries the predicate.
pub const AUXILIARIES: DepSet = DepSet::AUX.union(DepSet::AUX_PASS).union(DepSet::COP);

pub const RELATIVE_CLAUSES: DepSet = DepSet::ACL.union(DepSet::ACL_RELCL);

/// Collection never crosses into a subordinate clause or its marker.
pub const CLAUSE_BOUNDARY: DepSet = DepSet::ADVCL.union(DepSet::CCOMP).union(DepSet::MARK);

/// Subordinate clauses that may become a complement.
pub const SUBORDINATE_CLAUSES: DepSet = DepSet::ADVCL.union(DepSet::CCOMP);

/// Components stop at clause boundaries and at nested subjects.
pub const COMPONENT_BOUNDARY: DepSet = CLAUSE_BOUNDARY.union(SUBJECTS);

/// Children that never open a complement component.
pub const NON_INITIATORS: DepSet = DepSet::MARK
    .union(DepSet::CASE)
    .union(DepSet::COP)
    .union(DepSet::PUNCT)
    .union(DepSet::AUX)
    .union(DepSet::AUX_PASS)
    .union(DepSet::EXPL_PV);

/// Dependents that make up a noun phrase.
pub const NOMINAL_MEMBERS: DepSet = DepSet::DET
    .union(DepSet::NUMMOD)
    .union(DepSet::AMOD)
    .union(DepSet::NMOD)
    .union(DepSet::FLAT)
    .union(DepSet::FLAT_NAME)
    .union(DepSet::FIXED)
    .union(DepSet::COMPOUND)
    .union(DepSet::CLF)
    .union(DepSet::APPOS)
    .union(DepSet::CONJ)
    .union(DepSet::CC)
    .union(DepSet::CASE)
    .union(DepSet::PUNCT);

/// Modifiers of the first conjunct that the other conjuncts share ("*de* Ana e Rui").
pub const SHARED_MODIFIERS: DepSet = DepSet::CASE.union(DepSet::DET);

pub const PASSIVE_MARKERS: DepSet = DepSet::AUX_PASS.union(DepSet::EXPL_PASS);

/// Appositions under reported or controlled clauses are not asserted by the sentence.
pub const REPORTED_CLAUSES: DepSet = DepSet::CCOMP.union(DepSet::XCOMP);

/// Adverbs that stay inside the relation ("*não* comeu").
pub const RELATION_ADVERBS: [&str; 5] = ["não", "já", "ainda", "também", "nunca"];

/// Verbs whose object is the thing that exists ("*Há* muitos problemas").
pub const EXISTENTIAL_LEMMAS: [&str; 5] = ["haver", "ocorrer", "acontecer", "existir", "surgir"];

/// The only punctuation kept inside a phrase.
pub const PHRASE_PUNCTUATION: [&str; 9] = ["(", ")", "{", "}", "\"", "'", "[", "]", ","];

/// Relation of appositive extractions.
pub const COPULA: &str = "é";

pub fn is_phrase_punctuation(node: Node<'_>) -> bool {
    PHRASE_PUNCTUATION.contains(&node.text())
}

pub fn is_relation_adverb(node: Node<'_>) -> bool {
    let lemma = node.lemma().to_lowercase();
    RELATION_ADVERBS.contains(&lemma.as_str())
}

pub fn is_existential(node: Node<'_>) -> bool {
    let lemma = node.lemma().to_lowercase();
    EXISTENTIAL_LEMMAS.contains(&lemma.as_str())
}
