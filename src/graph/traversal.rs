//! Depth-first traversal over edges.
//!
//! Unlike a node DFS, every edge reachable from the roots is reported
//! exactly once, in depth-first order, even when it leads back to a node
//! that was already visited. This is what cycle witnesses are built from.

use std::collections::{HashMap, HashSet};

use super::container::CycleGraph;
use super::types::{Direction, NodeId, Orientation, TraversedEdge};

/// One traversal step over the edge with arena id `edge`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) edge: usize,
    pub(crate) tail: usize,
    pub(crate) head: usize,
    pub(crate) direction: Direction,
}

impl<N: NodeId, E> CycleGraph<N, E> {
    /// Steps leaving `ix` under `orientation`, in insertion order
    pub(crate) fn steps_from(&self, ix: usize, orientation: Orientation) -> Vec<Step> {
        if !self.is_directed() {
            return self
                .outgoing_ids(ix)
                .iter()
                .map(|&edge| Step {
                    edge,
                    tail: ix,
                    head: self.slot(edge).other(ix),
                    direction: Direction::Forward,
                })
                .collect();
        }

        let forward = self.outgoing_ids(ix).iter().map(|&edge| Step {
            edge,
            tail: ix,
            head: self.slot(edge).target,
            direction: Direction::Forward,
        });
        let reverse = self.incoming_ids(ix).iter().map(|&edge| Step {
            edge,
            tail: ix,
            head: self.slot(edge).source,
            direction: Direction::Reverse,
        });

        match orientation {
            Orientation::Original => forward.collect(),
            Orientation::Reverse => reverse.collect(),
            Orientation::Ignore => forward.chain(reverse).collect(),
        }
    }

    /// Public form of a step, as handed back to callers
    pub(crate) fn traversed(&self, step: Step, orientation: Orientation) -> TraversedEdge<N> {
        let slot = self.slot(step.edge);
        let key = self.is_multigraph().then_some(slot.key);

        if !self.is_directed() {
            return TraversedEdge {
                source: self.node_at(step.tail).clone(),
                target: self.node_at(step.head).clone(),
                key,
                direction: None,
            };
        }

        TraversedEdge {
            source: self.node_at(slot.source).clone(),
            target: self.node_at(slot.target).clone(),
            key,
            direction: match orientation {
                Orientation::Original => None,
                Orientation::Reverse | Orientation::Ignore => Some(step.direction),
            },
        }
    }
}

/// Depth-first edge traversal from a list of roots.
///
/// Each node keeps a cursor into its own list of candidate steps, shared by
/// every visit to that node, so no edge is handed out twice.
pub(crate) struct EdgeDfs<'g, N, E> {
    graph: &'g CycleGraph<N, E>,
    orientation: Orientation,
    roots: std::vec::IntoIter<usize>,
    stack: Vec<usize>,
    frontier: HashMap<usize, (Vec<Step>, usize)>,
    visited_edges: HashSet<usize>,
}

impl<'g, N: NodeId, E> EdgeDfs<'g, N, E> {
    pub(crate) fn new(graph: &'g CycleGraph<N, E>, roots: Vec<usize>, orientation: Orientation) -> Self {
        Self {
            graph,
            orientation,
            roots: roots.into_iter(),
            stack: Vec::new(),
            frontier: HashMap::new(),
            visited_edges: HashSet::new(),
        }
    }

    /// Do not descend past the head of the step that was just yielded
    pub(crate) fn prune(&mut self) {
        self.stack.pop();
    }
}

impl<N: NodeId, E> Iterator for EdgeDfs<'_, N, E> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let Some(&current) = self.stack.last() else {
                let root = self.roots.next()?;
                self.stack.push(root);
                continue;
            };

            let graph = self.graph;
            let orientation = self.orientation;
            let (steps, cursor) = self
                .frontier
                .entry(current)
                .or_insert_with(|| (graph.steps_from(current, orientation), 0));

            match steps.get(*cursor).copied() {
                Some(step) => {
                    *cursor += 1;
                    if self.visited_edges.insert(step.edge) {
                        self.stack.push(step.head);
                        return Some(step);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;

    fn walk(graph: &CycleGraph<u32>, root: u32, orientation: Orientation) -> Vec<(u32, u32)> {
        let root = graph.index_of(&root).unwrap();
        EdgeDfs::new(graph, vec![root], orientation)
            .map(|step| (*graph.node_at(step.tail), *graph.node_at(step.head)))
            .collect()
    }

    #[test]
    fn test_directed_original_follows_out_edges() {
        let graph = CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (1, 2), (2, 0), (3, 0)]);
        assert_eq!(walk(&graph, 0, Orientation::Original), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_directed_reverse_follows_in_edges() {
        let graph = CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (1, 2), (3, 0)]);
        assert_eq!(walk(&graph, 2, Orientation::Reverse), vec![(2, 1), (1, 0), (0, 3)]);
    }

    #[test]
    fn test_ignore_visits_each_edge_once() {
        let graph = CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (0, 2), (1, 2)]);
        let steps = walk(&graph, 0, Orientation::Ignore);
        assert_eq!(steps, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_undirected_edges_are_not_walked_back() {
        let graph = CycleGraph::from_edges(GraphKind::Graph, [(0, 1), (1, 2)]);
        assert_eq!(walk(&graph, 1, Orientation::Original), vec![(1, 0), (1, 2)]);
    }

    #[test]
    fn test_prune_skips_subtree() {
        let graph = CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (1, 2), (0, 3)]);
        let root = graph.index_of(&0).unwrap();
        let mut dfs = EdgeDfs::new(&graph, vec![root], Orientation::Original);

        let first = dfs.next().unwrap();
        assert_eq!(*graph.node_at(first.head), 1);
        dfs.prune();

        let rest: Vec<u32> = dfs.map(|step| *graph.node_at(step.head)).collect();
        assert_eq!(rest, vec![3]);
    }

    #[test]
    fn test_traversed_reports_stored_orientation() {
        let graph = CycleGraph::from_edges(GraphKind::MultiDiGraph, [(0, 1), (2, 1)]);
        let one = graph.index_of(&1).unwrap();
        let steps = graph.steps_from(one, Orientation::Ignore);
        assert_eq!(steps.len(), 2);

        let edge = graph.traversed(steps[1], Orientation::Ignore);
        assert_eq!(edge.endpoints(), (&2, &1));
        assert_eq!(edge.key, Some(0));
        assert_eq!(edge.direction, Some(Direction::Reverse));
        assert_eq!(*edge.tail(), 1);
    }
}
