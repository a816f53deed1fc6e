use super::working::{Blocking, Component, WorkingGraph};
use crate::error::CycleError;
use crate::graph::{CycleGraph, NodeId};

struct Frame {
    node: usize,
    cursor: usize,
    closed: bool,
}

/// Elementary circuits of a directed graph, fully materialized.
///
/// Same circuits as [`simple_cycles`](super::simple_cycles), computed in
/// Johnson's original order: nodes are taken in insertion order, and each
/// one searches the strongly connected component it forms with the nodes
/// inserted after it. Every circuit is held in memory at once, so prefer the
/// lazy form on graphs with many circuits.
///
/// # Errors
///
/// [`CycleError::UnsupportedGraphKind`] for undirected graphs.
pub fn recursive_simple_cycles<N: NodeId, E>(
    graph: &CycleGraph<N, E>,
) -> Result<Vec<Vec<N>>, CycleError> {
    if !graph.is_directed() {
        return Err(CycleError::unsupported(
            "recursive_simple_cycles",
            graph.kind(),
        ));
    }

    let mut working = WorkingGraph::new(graph);
    let mut result = Vec::new();

    // Removing nodes only splits components, so a node on no circuit stays
    // off every circuit; such starts skip the component search.
    let mut on_circuit = vec![true; graph.node_count()];

    for start in 0..graph.node_count() {
        if on_circuit[start] {
            let components = working.components_within(&working.live_nodes());
            on_circuit.fill(false);
            for &ix in components.iter().flatten() {
                on_circuit[ix] = true;
            }

            let least = components
                .into_iter()
                .find(|nodes| nodes.first() == Some(&start));

            if let Some(nodes) = least {
                let component = working.component(nodes);
                for circuit in circuits_through_first(&component) {
                    result.push(
                        circuit
                            .into_iter()
                            .map(|local| graph.node_at(component.nodes[local]).clone())
                            .collect(),
                    );
                }
            }
        }

        working.remove(start);
    }

    Ok(result)
}

/// Every circuit of `component` through its local node 0
fn circuits_through_first(component: &Component) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    let mut blocking = Blocking::new(component.len());
    let mut path = vec![0];
    let mut stack = vec![Frame {
        node: 0,
        cursor: 0,
        closed: false,
    }];
    blocking.block(0);

    while let Some(frame) = stack.last_mut() {
        if let Some(&next) = component.successors[frame.node].get(frame.cursor) {
            frame.cursor += 1;
            if next == 0 {
                found.push(path.clone());
                frame.closed = true;
            } else if !blocking.is_blocked(next) {
                path.push(next);
                blocking.block(next);
                stack.push(Frame {
                    node: next,
                    cursor: 0,
                    closed: false,
                });
            }
            continue;
        }

        let Some(Frame { node, closed, .. }) = stack.pop() else {
            break;
        };
        if closed {
            blocking.unblock(node);
            if let Some(parent) = stack.last_mut() {
                parent.closed = true;
            }
        } else {
            blocking.wait_on(node, &component.successors[node]);
        }
        path.pop();
    }

    found
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::GraphKind;

    #[test]
    fn test_recursive_simple_cycles_in_insertion_order() {
        let graph: CycleGraph<u32> = CycleGraph::from_edges(
            GraphKind::DiGraph,
            [(0, 0), (0, 1), (0, 2), (1, 2), (2, 0), (2, 1), (2, 2)],
        );
        assert_eq!(
            recursive_simple_cycles(&graph).unwrap(),
            vec![vec![0], vec![0, 1, 2], vec![0, 2], vec![1, 2], vec![2]]
        );
    }

    #[test]
    fn test_nodes_outside_any_cycle_are_skipped() {
        let graph: CycleGraph<&str> = CycleGraph::from_edges(
            GraphKind::DiGraph,
            [("in", "a"), ("a", "b"), ("b", "a"), ("b", "out")],
        );
        assert_eq!(
            recursive_simple_cycles(&graph).unwrap(),
            vec![vec!["a", "b"]]
        );
    }

    #[test]
    fn test_long_acyclic_prefix_before_circuit() {
        let mut graph: CycleGraph<u32> = CycleGraph::digraph();
        for node in 0..=5_000 {
            graph.add_edge(node, node + 1);
        }
        graph.add_edge(5_001, 5_000);
        graph.add_edge(5_001, 5_002);
        graph.add_edge(5_002, 5_001);

        assert_eq!(
            recursive_simple_cycles(&graph).unwrap(),
            vec![vec![5_000, 5_001], vec![5_001, 5_002]]
        );
    }

    #[test]
    fn test_undirected_graph_is_rejected() {
        let graph: CycleGraph<u32> = CycleGraph::from_edges(GraphKind::Graph, [(0, 1)]);
        assert_eq!(
            recursive_simple_cycles(&graph),
            Err(CycleError::unsupported("recursive_simple_cycles", GraphKind::Graph))
        );
    }
}
