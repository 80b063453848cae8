use std::sync::Arc;

use oie_tree::DependencyTree;
use serde::{Deserialize, Serialize};

use crate::collector::Visited;
use crate::phrase::Phrase;

/// A subject, relation and complement over one sentence.
///
/// Subject and relation are shared between the variants a predicate yields
/// (one per complement component), so they sit behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub subject: Option<Arc<Phrase>>,
    pub relation: Option<Arc<Phrase>>,
    pub complement: Option<Phrase>,
}

/// The rendered form of an [`Extraction`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub arg1: String,
    pub rel: String,
    pub arg2: String,
}

/// Core word and pieces of one element, for inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDebug {
    pub token: Option<String>,
    pub pieces: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionDebug {
    pub subject: ElementDebug,
    pub relation: ElementDebug,
    pub complement: ElementDebug,
}

impl Extraction {
    pub fn new(subject: Option<Arc<Phrase>>, relation: Arc<Phrase>) -> Self {
        Self {
            subject,
            relation: Some(relation),
            complement: None,
        }
    }

    /// Same subject and relation, new complement.
    pub fn with_complement(&self, complement: Phrase) -> Self {
        Self {
            subject: self.subject.clone(),
            relation: self.relation.clone(),
            complement: Some(complement),
        }
    }

    /// Tokens claimed by the subject and the relation.
    pub fn claimed(&self) -> Visited {
        self.subject
            .iter()
            .chain(self.relation.iter())
            .flat_map(|phrase| phrase.indices())
            .collect()
    }

    /// An extraction is emitted only when
    /// - its subject renders to something (unless hidden subjects are allowed),
    /// - its subject is not just relative pronouns,
    /// - its relation is synthetic or holds a verb or auxiliary.
    pub fn is_valid(&self, tree: &DependencyTree, allow_hidden_subject: bool) -> bool {
        let subject_ok = match self.subject.as_deref() {
            Some(subject) if subject.is_literal() => true,
            Some(subject) => {
                let tokens = subject.tokens(tree);
                if tokens.is_empty() {
                    allow_hidden_subject
                } else {
                    !tokens.iter().all(|n| n.is_relative_pronoun())
                }
            }
            None => allow_hidden_subject,
        };

        let relation_ok = self.relation.as_deref().is_some_and(|relation| {
            relation.is_literal()
                || relation
                    .indices()
                    .filter_map(|i| tree.get(i))
                    .any(|n| n.is_verbal())
        });

        subject_ok && relation_ok
    }

    pub fn triple(&self, tree: &DependencyTree) -> Triple {
        let render = |phrase: Option<&Phrase>| phrase.map(|p| p.render(tree)).unwrap_or_default();
        Triple {
            arg1: render(self.subject.as_deref()),
            rel: render(self.relation.as_deref()),
            arg2: render(self.complement.as_ref()),
        }
    }

    pub fn debug(&self, tree: &DependencyTree) -> ExtractionDebug {
        let element = |phrase: Option<&Phrase>| {
            let Some(phrase) = phrase else {
                return ElementDebug::default();
            };
            if phrase.is_literal() {
                return ElementDebug {
                    token: Some(phrase.render(tree)),
                    pieces: Vec::new(),
                };
            }
            let text = |i: usize| tree.get(i).map(|n| n.text().to_string());
            ElementDebug {
                token: phrase.core().and_then(text),
                pieces: phrase.pieces().filter_map(text).collect(),
            }
        };
        ExtractionDebug {
            subject: element(self.subject.as_deref()),
            relation: element(self.relation.as_deref()),
            complement: element(self.complement.as_ref()),
        }
    }
}
