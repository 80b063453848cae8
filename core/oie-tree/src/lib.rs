pub mod node;
pub mod validation;

use oie_protocol::Sentence;

pub use node::{Ancestors, Node};
pub use validation::{validate, TreeError};

/// An annotated sentence indexed as a dependency tree.
///
/// Nodes live in an arena ordered by sentence position and are addressed by
/// their 0-based index; heads and children are precomputed index tables, so the
/// tree is never mutated after [`DependencyTree::build`].
#[derive(Debug, Clone)]
pub struct DependencyTree {
    sentence: Sentence,
    heads: Vec<usize>,
    children: Vec<Vec<usize>>,
    root: usize,
}

impl DependencyTree {
    /// Validates the head column and builds the index tables.
    pub fn build(sentence: Sentence) -> Result<Self, TreeError> {
        let root = validate(&sentence)?;

        let n = sentence.tokens.len();
        let mut heads = Vec::with_capacity(n);
        let mut children = vec![Vec::new(); n];
        for (i, token) in sentence.tokens.iter().enumerate() {
            let head = if token.head == 0 { i } else { token.head as usize - 1 };
            heads.push(head);
            if head != i {
                // Pushed in index order, so every child list is already sorted.
                children[head].push(i);
            }
        }

        Ok(Self {
            sentence,
            heads,
            children,
            root,
        })
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn len(&self) -> usize {
        self.heads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// Handle on the node at `index`.
    ///
    /// # Panics
    /// If `index` is not smaller than [`len`](Self::len).
    pub fn node(&self, index: usize) -> Node<'_> {
        assert!(index < self.len(), "node {index} outside a {}-word sentence", self.len());
        Node::new(self, index)
    }

    pub fn get(&self, index: usize) -> Option<Node<'_>> {
        (index < self.len()).then(|| Node::new(self, index))
    }

    pub fn root(&self) -> Node<'_> {
        Node::new(self, self.root)
    }

    /// All nodes in sentence order.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        (0..self.len()).map(move |i| Node::new(self, i))
    }

    pub(crate) fn head_index(&self, index: usize) -> usize {
        self.heads[index]
    }

    pub(crate) fn child_indices(&self, index: usize) -> &[usize] {
        &self.children[index]
    }
}

impl TryFrom<Sentence> for DependencyTree {
    type Error = TreeError;

    fn try_from(sentence: Sentence) -> Result<Self, Self::Error> {
        Self::build(sentence)
    }
}
