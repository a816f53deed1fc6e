use std::collections::HashSet;

use petgraph::unionfind::UnionFind;

use super::container::CycleGraph;
use super::types::{EdgeRef, NodeId};

/// Spanning forest of the undirected projection of a graph.
///
/// Tree edges are recorded by their position in the graph's edge arena, so
/// for multigraphs exactly one of several parallel edges can be claimed.
/// Self-loops never belong to a forest.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    tree: Vec<usize>,
    members: HashSet<usize>,
    components: usize,
}

impl SpanningForest {
    /// Spanning forest taking edges in insertion order
    pub fn new<N: NodeId, E>(graph: &CycleGraph<N, E>) -> Self {
        Self::from_order(graph, 0..graph.edge_count())
    }

    /// Minimum spanning forest under `weight` (Kruskal).
    ///
    /// Ties keep insertion order.
    pub fn minimum_by<N, E, W, F>(graph: &CycleGraph<N, E>, mut weight: F) -> Self
    where
        N: NodeId,
        W: PartialOrd,
        F: FnMut(EdgeRef<'_, N, E>) -> W,
    {
        let mut order: Vec<(usize, W)> = (0..graph.edge_count())
            .map(|id| (id, weight(graph.edge_ref(id))))
            .collect();
        order.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Self::from_order(graph, order.into_iter().map(|(id, _)| id))
    }

    fn from_order<N: NodeId, E>(graph: &CycleGraph<N, E>, order: impl Iterator<Item = usize>) -> Self {
        let mut sets = UnionFind::<usize>::new(graph.node_count());
        let mut tree = Vec::new();

        for id in order {
            let slot = graph.slot(id);
            if slot.is_self_loop() {
                continue;
            }
            if sets.union(slot.source, slot.target) {
                tree.push(id);
            }
        }

        tree.sort_unstable();
        let members = tree.iter().copied().collect();
        let components = graph.node_count() - tree.len();

        Self {
            tree,
            members,
            components,
        }
    }

    /// Whether the edge at arena position `edge` is a tree edge
    pub(crate) fn contains(&self, edge: usize) -> bool {
        self.members.contains(&edge)
    }

    /// Arena positions of the tree edges, ascending
    pub(crate) fn edge_ids(&self) -> &[usize] {
        &self.tree
    }

    /// The tree edges of `graph`, in insertion order
    pub fn edges<'g, N: NodeId, E>(
        &'g self,
        graph: &'g CycleGraph<N, E>,
    ) -> impl Iterator<Item = EdgeRef<'g, N, E>> + 'g {
        self.tree.iter().map(move |&id| graph.edge_ref(id))
    }

    pub fn edge_count(&self) -> usize {
        self.tree.len()
    }

    /// Number of connected components of the undirected projection
    pub fn component_count(&self) -> usize {
        self.components
    }
}
