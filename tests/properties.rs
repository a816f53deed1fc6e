//! Property tests over randomly generated graphs

use std::collections::BTreeSet;

use ferris_cycles::detector::{
    chords, cycle_basis, find_cycle, recursive_simple_cycles, simple_cycles,
};
use ferris_cycles::error::CycleError;
use ferris_cycles::graph::{CycleGraph, GraphKind, Orientation};
use proptest::prelude::*;

const MAX_NODES: u8 = 7;

fn edge_lists() -> impl Strategy<Value = (u8, Vec<(u8, u8)>)> {
    (1..=MAX_NODES).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..14)))
}

fn build(kind: GraphKind, nodes: u8, edges: &[(u8, u8)]) -> CycleGraph<u8> {
    let mut graph = CycleGraph::new(kind);
    for node in 0..nodes {
        graph.add_node(node);
    }
    for &(source, target) in edges {
        graph.add_edge(source, target);
    }
    graph
}

/// Connected components of the undirected projection, counted independently
fn component_count(nodes: u8, edges: &[(u8, u8)]) -> usize {
    let mut parent: Vec<usize> = (0..nodes as usize).collect();
    fn find(parent: &mut [usize], x: usize) -> usize {
        let mut root = x;
        while parent[root] != root {
            root = parent[root];
        }
        root
    }
    let mut components = nodes as usize;
    for &(a, b) in edges {
        let (ra, rb) = (find(&mut parent, a as usize), find(&mut parent, b as usize));
        if ra != rb {
            parent[ra] = rb;
            components -= 1;
        }
    }
    components
}

fn canonical(circuits: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    let mut rotated: Vec<Vec<u8>> = circuits
        .into_iter()
        .map(|mut circuit| {
            if let Some(start) = (0..circuit.len()).min_by_key(|&i| circuit[i]) {
                circuit.rotate_left(start);
            }
            circuit
        })
        .collect();
    rotated.sort();
    rotated
}

proptest! {
    #[test]
    fn basis_size_is_cyclomatic_number((nodes, edges) in edge_lists(), multi in any::<bool>()) {
        let kind = if multi { GraphKind::MultiGraph } else { GraphKind::Graph };
        let graph = build(kind, nodes, &edges);

        let basis = cycle_basis(&graph, None).unwrap();
        let expected = graph.edge_count() + component_count(nodes, &edges) - graph.node_count();
        prop_assert_eq!(basis.len(), expected);
        prop_assert_eq!(chords(&graph).chords.edge_count(), expected);
    }

    #[test]
    fn basis_cycles_are_closed_walks((nodes, edges) in edge_lists(), root in 0..MAX_NODES) {
        let graph = build(GraphKind::Graph, nodes, &edges);
        let root = root % nodes;

        for cycle in cycle_basis(&graph, Some(&root)).unwrap() {
            let distinct: BTreeSet<_> = cycle.iter().collect();
            prop_assert_eq!(distinct.len(), cycle.len());
            for (i, node) in cycle.iter().enumerate() {
                let next = &cycle[(i + 1) % cycle.len()];
                prop_assert!(graph.has_edge(node, next));
            }
        }
    }

    #[test]
    fn lazy_and_eager_circuits_agree((nodes, edges) in edge_lists(), multi in any::<bool>()) {
        let kind = if multi { GraphKind::MultiDiGraph } else { GraphKind::DiGraph };
        let graph = build(kind, nodes, &edges);

        let lazy = canonical(simple_cycles(&graph).unwrap().collect());
        let eager = canonical(recursive_simple_cycles(&graph).unwrap());
        prop_assert_eq!(&lazy, &eager);

        let distinct: BTreeSet<_> = lazy.iter().collect();
        prop_assert_eq!(distinct.len(), lazy.len());
    }

    #[test]
    fn find_cycle_agrees_with_enumeration((nodes, edges) in edge_lists()) {
        let graph = build(GraphKind::DiGraph, nodes, &edges);
        let has_circuit = simple_cycles(&graph).unwrap().next().is_some();

        match find_cycle(&graph, None, Orientation::Original) {
            Ok(cycle) => {
                prop_assert!(has_circuit);
                let last = &cycle[cycle.len() - 1];
                prop_assert_eq!(last.head(), cycle[0].tail());
                for pair in cycle.windows(2) {
                    prop_assert_eq!(pair[0].head(), pair[1].tail());
                }
            }
            Err(error) => {
                prop_assert_eq!(error, CycleError::NoCycleFound);
                prop_assert!(!has_circuit);
            }
        }
    }

    #[test]
    fn forward_edges_never_close_a_cycle((nodes, edges) in edge_lists()) {
        let forward: Vec<(u8, u8)> = edges
            .into_iter()
            .filter(|(source, target)| source < target)
            .collect();
        let graph = build(GraphKind::DiGraph, nodes, &forward);

        prop_assert_eq!(
            find_cycle(&graph, None, Orientation::Original),
            Err(CycleError::NoCycleFound)
        );
        prop_assert_eq!(
            find_cycle(&graph, None, Orientation::Reverse),
            Err(CycleError::NoCycleFound)
        );
        prop_assert_eq!(simple_cycles(&graph).unwrap().count(), 0);
    }
}
