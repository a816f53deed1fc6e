use crate::graph::{CycleGraph, NodeId, SpanningForest};

/// Edges of a graph split by a spanning forest of its undirected projection
#[derive(Debug, Clone)]
pub struct Chords<N, E = ()> {
    /// Edges outside the forest; each closes one fundamental cycle
    pub chords: CycleGraph<N, E>,
    /// The spanning forest, in the graph's own kind and orientation
    pub tree: CycleGraph<N, E>,
}

/// Forest plus the arena positions of the chord edges, in insertion order
pub(crate) struct Partition {
    pub(crate) forest: SpanningForest,
    pub(crate) chords: Vec<usize>,
}

pub(crate) fn partition<N: NodeId, E>(graph: &CycleGraph<N, E>) -> Partition {
    let forest = SpanningForest::new(graph);
    let chords = (0..graph.edge_count())
        .filter(|&id| !forest.contains(id))
        .collect();
    Partition { forest, chords }
}

/// Split the edges of `graph` into spanning-forest edges and chords.
///
/// The forest spans the undirected projection; directed graphs get their
/// tree edges back with the stored orientation. Of several parallel edges
/// exactly one can be a tree edge, the others stay chords, and self-loops
/// are always chords. Keys and weights are carried over unchanged, and both
/// halves keep every node of `graph`.
pub fn chords<N: NodeId, E: Clone>(graph: &CycleGraph<N, E>) -> Chords<N, E> {
    let Partition { forest, .. } = partition(graph);
    Chords {
        chords: graph.retain_edge_ids(|id| !forest.contains(id)),
        tree: graph.retain_edge_ids(|id| forest.contains(id)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::GraphKind;

    fn pairs<E>(graph: &CycleGraph<u32, E>) -> Vec<(u32, u32)> {
        graph.edges().map(|edge| (*edge.source, *edge.target)).collect()
    }

    #[test]
    fn test_chords_of_simple_graph() {
        let graph: CycleGraph<u32> = CycleGraph::from_edges(
            GraphKind::Graph,
            [(1, 2), (1, 3), (2, 3), (2, 4), (3, 4), (3, 5), (3, 6), (4, 5), (4, 6), (5, 6)],
        );
        let Chords { chords, tree } = chords(&graph);

        assert_eq!(tree.edge_count(), 5);
        assert_eq!(chords.edge_count(), 5);
        assert_eq!(pairs(&chords), vec![(2, 3), (3, 4), (4, 5), (4, 6), (5, 6)]);
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn test_directed_tree_keeps_orientation() {
        let graph: CycleGraph<u32> =
            CycleGraph::from_edges(GraphKind::DiGraph, [(1, 0), (1, 2), (2, 0)]);
        let Chords { chords, tree } = chords(&graph);

        assert_eq!(tree.kind(), GraphKind::DiGraph);
        assert_eq!(pairs(&tree), vec![(1, 0), (1, 2)]);
        assert_eq!(pairs(&chords), vec![(2, 0)]);
    }

    #[test]
    fn test_parallel_edges_leave_all_but_one_as_chords() {
        let mut graph: CycleGraph<&str, &str> = CycleGraph::multigraph();
        graph.add_weighted_edge("a", "b", "first");
        graph.add_weighted_edge("a", "b", "second");
        graph.add_weighted_edge("b", "a", "third");
        graph.add_weighted_edge("b", "b", "loop");

        let Chords { chords, tree } = chords(&graph);

        let tree_edges: Vec<_> = tree.edges().map(|edge| (edge.key, *edge.weight)).collect();
        assert_eq!(tree_edges, vec![(0, "first")]);

        let chord_edges: Vec<_> = chords
            .edges()
            .map(|edge| (edge.key, *edge.weight))
            .collect();
        assert_eq!(chord_edges, vec![(1, "second"), (2, "third"), (0, "loop")]);
    }

    #[test]
    fn test_each_component_gets_a_tree() {
        let graph: CycleGraph<u32> =
            CycleGraph::from_edges(GraphKind::Graph, [(0, 1), (1, 2), (2, 0), (5, 6)]);
        let Chords { chords, tree } = chords(&graph);

        assert_eq!(pairs(&tree), vec![(0, 1), (1, 2), (5, 6)]);
        assert_eq!(pairs(&chords), vec![(2, 0)]);
    }
}
