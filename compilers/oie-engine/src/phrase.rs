use std::collections::BTreeSet;

use oie_protocol::{DepRel, PartOfSpeech};
use oie_tree::{DependencyTree, Node};

/// A span of the sentence built around one core word.
///
/// Pieces are kept as an index set, so the rendered text always follows sentence
/// order whatever order the rules added them in. A phrase with a `literal` is
/// synthetic: it renders that text and owns no tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    core: Option<usize>,
    pieces: BTreeSet<usize>,
    literal: Option<String>,
}

impl Phrase {
    pub fn new(core: usize) -> Self {
        Self {
            core: Some(core),
            ..Self::default()
        }
    }

    /// A tokenless phrase that renders as `text`.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            literal: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn core(&self) -> Option<usize> {
        self.core
    }

    pub fn is_literal(&self) -> bool {
        self.literal.is_some()
    }

    pub fn add_piece(&mut self, index: usize) {
        if self.core != Some(index) {
            self.pieces.insert(index);
        }
    }

    pub fn remove_piece(&mut self, index: usize) {
        self.pieces.remove(&index);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.core == Some(index) || self.pieces.contains(&index)
    }

    /// Pieces in sentence order, core excluded.
    pub fn pieces(&self) -> impl Iterator<Item = usize> + '_ {
        self.pieces.iter().copied()
    }

    /// Core and pieces in sentence order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        let mut all: Vec<usize> = self.core.into_iter().chain(self.pieces()).collect();
        all.sort_unstable();
        all.into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_none() && self.pieces.is_empty() && self.literal.is_none()
    }

    /// Folds every token of `other` in as a piece.
    pub fn merge(&mut self, other: &Phrase) {
        for index in other.indices() {
            self.add_piece(index);
        }
    }

    /// Tokens in sentence order, without leading punctuation or coordinators and
    /// without trailing punctuation.
    pub fn tokens<'t>(&self, tree: &'t DependencyTree) -> Vec<Node<'t>> {
        let mut tokens: Vec<Node<'t>> = self.indices().filter_map(|i| tree.get(i)).collect();
        let leading = tokens.iter().take_while(|n| is_connector(**n)).count();
        tokens.drain(..leading);
        while tokens.last().is_some_and(|n| n.pos() == PartOfSpeech::Punctuation) {
            tokens.pop();
        }
        tokens
    }

    pub fn render(&self, tree: &DependencyTree) -> String {
        if let Some(text) = &self.literal {
            return text.clone();
        }
        self.tokens(tree)
            .iter()
            .map(|n| n.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Drops the coordinator and punctuation that attach a conjunct to its
    /// predecessor ("maçãs *,* peras *e* uvas").
    pub fn without_connectors(&self, tree: &DependencyTree) -> Phrase {
        let mut phrase = self.clone();
        let Some(core) = self.core.and_then(|i| tree.get(i)) else {
            return phrase;
        };
        for child in core.children() {
            if child.precedes(&core) && is_connector(child) {
                phrase.remove_piece(child.index());
            }
        }
        phrase
    }
}

fn is_connector(node: Node<'_>) -> bool {
    matches!(
        node.pos(),
        PartOfSpeech::Punctuation | PartOfSpeech::CoordinatingConjunction
    ) || node.dep() == DepRel::Cc
}
