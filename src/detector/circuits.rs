use std::iter::FusedIterator;

use super::working::{Blocking, Component, WorkingGraph};
use crate::error::CycleError;
use crate::graph::{CycleGraph, NodeId};

/// Lazy enumeration of the elementary circuits of a directed graph.
///
/// Created by [`simple_cycles`]. Each circuit is produced once, as the node
/// sequence starting from its lowest-positioned node; the edge back to the
/// first node is implied. The enumeration consumes its own working copy of
/// the graph, so it cannot be rewound: call [`simple_cycles`] again instead.
pub struct SimpleCycles<'g, N, E> {
    graph: &'g CycleGraph<N, E>,
    working: WorkingGraph,
    pending: Vec<Vec<usize>>,
    search: Option<Search>,
}

struct Frame {
    node: usize,
    cursor: usize,
}

/// Search for the circuits through the first node of one component
struct Search {
    component: Component,
    blocking: Blocking,
    closed: Vec<bool>,
    path: Vec<usize>,
    stack: Vec<Frame>,
}

impl Search {
    fn new(component: Component) -> Self {
        let mut blocking = Blocking::new(component.len());
        blocking.block(0);
        Self {
            closed: vec![false; component.len()],
            component,
            blocking,
            path: vec![0],
            stack: vec![Frame { node: 0, cursor: 0 }],
        }
    }

    /// Run until the next circuit, as local indices
    fn advance(&mut self) -> Option<Vec<usize>> {
        let Search {
            component,
            blocking,
            closed,
            path,
            stack,
        } = self;

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            if let Some(&next) = component.successors[node].get(frame.cursor) {
                frame.cursor += 1;
                if next == 0 {
                    for &member in path.iter() {
                        closed[member] = true;
                    }
                    return Some(path.clone());
                }
                if !blocking.is_blocked(next) {
                    path.push(next);
                    stack.push(Frame {
                        node: next,
                        cursor: 0,
                    });
                    closed[next] = false;
                    blocking.block(next);
                }
                continue;
            }

            if closed[node] {
                blocking.unblock(node);
            } else {
                blocking.wait_on(node, &component.successors[node]);
            }
            stack.pop();
            path.pop();
        }

        None
    }
}

impl<'g, N: NodeId, E> SimpleCycles<'g, N, E> {
    fn new(graph: &'g CycleGraph<N, E>) -> Self {
        let working = WorkingGraph::new(graph);
        let pending = working.components_within(&working.live_nodes());
        Self {
            graph,
            working,
            pending,
            search: None,
        }
    }
}

impl<N: NodeId, E> Iterator for SimpleCycles<'_, N, E> {
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Vec<N>> {
        loop {
            if let Some(search) = self.search.as_mut() {
                if let Some(circuit) = search.advance() {
                    return Some(
                        circuit
                            .into_iter()
                            .map(|local| self.graph.node_at(search.component.nodes[local]).clone())
                            .collect(),
                    );
                }

                // Every circuit through the start node is out; drop it and
                // split what is left of its component.
                let Some(done) = self.search.take() else {
                    continue;
                };
                let members = done.component.nodes;
                self.working.remove(members[0]);
                self.pending
                    .extend(self.working.components_within(&members));
                continue;
            }

            let nodes = self.pending.pop()?;
            self.search = Some(Search::new(self.working.component(nodes)));
        }
    }
}

impl<N: NodeId, E> FusedIterator for SimpleCycles<'_, N, E> {}

/// Elementary circuits of a directed graph or multigraph, produced lazily
/// with Johnson's algorithm.
///
/// Parallel edges do not produce extra circuits. A self-loop is the
/// one-node circuit `[v]`. No order is guaranteed between circuits.
///
/// # Examples
///
/// ```
/// use ferris_cycles::detector::simple_cycles;
/// use ferris_cycles::graph::{CycleGraph, GraphKind};
///
/// let graph: CycleGraph<u32> = CycleGraph::from_edges(
///     GraphKind::DiGraph,
///     [(0, 0), (0, 1), (0, 2), (1, 2), (2, 0), (2, 1), (2, 2)],
/// );
/// assert_eq!(simple_cycles(&graph)?.count(), 5);
/// # Ok::<(), ferris_cycles::error::CycleError>(())
/// ```
///
/// # Errors
///
/// [`CycleError::UnsupportedGraphKind`] for undirected graphs.
pub fn simple_cycles<N: NodeId, E>(
    graph: &CycleGraph<N, E>,
) -> Result<SimpleCycles<'_, N, E>, CycleError> {
    if !graph.is_directed() {
        return Err(CycleError::unsupported("simple_cycles", graph.kind()));
    }
    Ok(SimpleCycles::new(graph))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::GraphKind;

    fn collect_sorted(graph: &CycleGraph<u32>) -> Vec<Vec<u32>> {
        let mut cycles: Vec<Vec<u32>> = simple_cycles(graph).unwrap().collect();
        cycles.sort();
        cycles
    }

    #[test]
    fn test_simple_cycles_small_graph() {
        let graph = CycleGraph::from_edges(
            GraphKind::DiGraph,
            [(0, 0), (0, 1), (0, 2), (1, 2), (2, 0), (2, 1), (2, 2)],
        );
        assert_eq!(
            collect_sorted(&graph),
            vec![vec![0], vec![0, 1, 2], vec![0, 2], vec![1, 2], vec![2]]
        );
    }

    #[test]
    fn test_cycles_start_from_lowest_positioned_node() {
        let graph = CycleGraph::from_edges(GraphKind::DiGraph, [(5, 7), (7, 6), (6, 5)]);
        let cycles: Vec<Vec<u32>> = simple_cycles(&graph).unwrap().collect();
        assert_eq!(cycles, vec![vec![5, 7, 6]]);
    }

    #[test]
    fn test_acyclic_graph_has_no_circuits() {
        let graph = CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (1, 2), (0, 2)]);
        let mut cycles = simple_cycles(&graph).unwrap();
        assert_eq!(cycles.next(), None);
        assert_eq!(cycles.next(), None);
    }

    #[test]
    fn test_parallel_edges_do_not_repeat_circuits() {
        let graph = CycleGraph::from_edges(
            GraphKind::MultiDiGraph,
            [(0, 1), (0, 1), (1, 0), (1, 1), (1, 1)],
        );
        assert_eq!(collect_sorted(&graph), vec![vec![0, 1], vec![1]]);
    }

    #[test]
    fn test_graph_is_left_untouched() {
        let graph = CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (1, 0)]);
        let first: Vec<_> = simple_cycles(&graph).unwrap().collect();
        let second: Vec<_> = simple_cycles(&graph).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_undirected_graph_is_rejected() {
        let graph = CycleGraph::from_edges(GraphKind::MultiGraph, [(0, 1)]);
        assert!(matches!(
            simple_cycles(&graph),
            Err(CycleError::UnsupportedGraphKind { .. })
        ));
    }
}
