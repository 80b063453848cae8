use std::fmt;

use oie_protocol::{DepRel, DepSet, Features, PartOfSpeech, Token, TokenId};

use crate::DependencyTree;

const SUBJECTS: DepSet = DepSet::NSUBJ
    .union(DepSet::NSUBJ_PASS)
    .union(DepSet::CSUBJ)
    .union(DepSet::CSUBJ_PASS);

/// A read-only handle on one word of a [`DependencyTree`].
///
/// Handles are `Copy`; they only carry the tree reference and the 0-based index.
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t DependencyTree,
    index: usize,
}

impl<'t> Node<'t> {
    pub(crate) fn new(tree: &'t DependencyTree, index: usize) -> Self {
        Self { tree, index }
    }

    pub fn tree(&self) -> &'t DependencyTree {
        self.tree
    }

    /// 0-based position in the sentence; defines the total order of nodes.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn token(&self) -> &'t Token {
        &self.tree.sentence().tokens[self.index]
    }

    pub fn id(&self) -> TokenId {
        self.token().id
    }

    pub fn text(&self) -> &'t str {
        &self.token().form
    }

    pub fn lemma(&self) -> &'t str {
        &self.token().lemma
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.token().upos
    }

    pub fn dep(&self) -> DepRel {
        self.token().deprel
    }

    pub fn feats(&self) -> &'t Features {
        &self.token().feats
    }

    /// The governing node; the root is its own head.
    pub fn head(&self) -> Node<'t> {
        Node::new(self.tree, self.tree.head_index(self.index))
    }

    pub fn is_root(&self) -> bool {
        self.tree.head_index(self.index) == self.index
    }

    /// Dependents in sentence order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Node<'t>> + 't {
        let tree = self.tree;
        tree.child_indices(self.index)
            .iter()
            .map(move |&child| Node::new(tree, child))
    }

    /// Dependents whose relation is in `labels`, in sentence order.
    pub fn children_in(&self, labels: DepSet) -> impl Iterator<Item = Node<'t>> + 't {
        self.children().filter(move |child| child.dep().is_in(labels))
    }

    pub fn has_child_in(&self, labels: DepSet) -> bool {
        self.children_in(labels).next().is_some()
    }

    /// Heads from the parent up to the root (the node itself is not included).
    pub fn ancestors(&self) -> Ancestors<'t> {
        Ancestors {
            current: if self.is_root() { None } else { Some(self.head()) },
        }
    }

    pub fn is_verbal(&self) -> bool {
        self.pos().is_verbal()
    }

    /// `PronType=Rel` ("que", "qual", "onde" introducing a relative clause).
    pub fn is_relative_pronoun(&self) -> bool {
        self.feats().contains("PronType", "Rel")
    }

    /// Whether a nominal or clausal subject hangs directly from this node.
    pub fn has_own_subject(&self) -> bool {
        self.has_child_in(SUBJECTS)
    }

    pub fn precedes(&self, other: &Node<'_>) -> bool {
        self.index < other.index
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.tree, other.tree)
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.index, self.text(), self.dep())
    }
}

/// Iterator over the heads above a node.
pub struct Ancestors<'t> {
    current: Option<Node<'t>>,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = if node.is_root() { None } else { Some(node.head()) };
        Some(node)
    }
}
