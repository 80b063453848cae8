use std::collections::HashMap;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Directed;

/// Entities linked to their appositive aliases.
///
/// Nodes are the core token of an entity mention. An edge `entity -> alias`
/// is labelled with the slot of the appositive extraction that asserted it.
pub struct IdentityGraph {
    graph: Graph<usize, usize, Directed>,
    index_map: HashMap<usize, NodeIndex>,
}

impl IdentityGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            index_map: HashMap::new(),
        }
    }

    fn node(&mut self, token: usize) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .index_map
            .entry(token)
            .or_insert_with(|| graph.add_node(token))
    }

    pub fn add_alias(&mut self, entity: usize, alias: usize, slot: usize) {
        let from = self.node(entity);
        let to = self.node(alias);
        self.graph.add_edge(from, to, slot);
    }

    /// Slots of the aliases asserted directly for `entity`, in slot order.
    ///
    /// An alias of an alias is not followed: "Ana, diretora, engenheira" makes
    /// "diretora" an alias of Ana, and "engenheira" one of "diretora" only.
    pub fn aliases(&self, entity: usize) -> Vec<usize> {
        let Some(&start) = self.index_map.get(&entity) else {
            return Vec::new();
        };

        let mut slots: Vec<usize> = self.graph.edges(start).map(|edge| *edge.weight()).collect();
        slots.sort_unstable();
        slots.dedup();
        slots
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }
}

impl Default for IdentityGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_are_direct() {
        let mut graph = IdentityGraph::new();
        assert!(graph.is_empty());

        // Ana(0) -> diretora(2) -> engenheira(4)
        graph.add_alias(0, 2, 0);
        graph.add_alias(2, 4, 1);
        // Rui(6) -> vizinho(8), Rui(6) -> médico(10)
        graph.add_alias(6, 10, 3);
        graph.add_alias(6, 8, 2);

        assert_eq!(graph.aliases(0), vec![0]);
        assert_eq!(graph.aliases(2), vec![1]);
        assert_eq!(graph.aliases(6), vec![2, 3]);
        assert!(graph.aliases(4).is_empty());
        assert!(graph.aliases(99).is_empty());
    }

    #[test]
    fn test_cycles_are_harmless() {
        let mut graph = IdentityGraph::new();
        graph.add_alias(0, 1, 0);
        graph.add_alias(1, 0, 1);
        assert_eq!(graph.aliases(0), vec![0]);
        assert_eq!(graph.aliases(1), vec![1]);
    }
}
