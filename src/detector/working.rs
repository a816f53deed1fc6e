//! Owned working copy used by circuit enumeration.
//!
//! The copy keeps plain structure only: one edge per ordered pair, no keys
//! or weights. Nodes are identified by their position in the caller's graph,
//! and removing a node never renumbers the others.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::graph::{CycleGraph, NodeId};

pub(crate) struct WorkingGraph {
    graph: StableDiGraph<usize, ()>,
    // Successors in the caller's insertion order, parallel edges collapsed
    successors: Vec<Vec<usize>>,
}

impl WorkingGraph {
    pub(crate) fn new<N: NodeId, E>(source: &CycleGraph<N, E>) -> Self {
        let mut graph = StableDiGraph::with_capacity(source.node_count(), source.edge_count());
        for ix in 0..source.node_count() {
            graph.add_node(ix);
        }

        let successors: Vec<Vec<usize>> = (0..source.node_count())
            .map(|ix| source.neighbor_indices(ix))
            .collect();
        for (ix, targets) in successors.iter().enumerate() {
            for &target in targets {
                graph.add_edge(NodeIndex::new(ix), NodeIndex::new(target), ());
            }
        }

        Self { graph, successors }
    }

    /// Every node still present, ascending
    pub(crate) fn live_nodes(&self) -> Vec<usize> {
        let mut nodes: Vec<usize> = self.graph.node_weights().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    pub(crate) fn remove(&mut self, node: usize) {
        self.graph.remove_node(NodeIndex::new(node));
    }

    fn has_self_loop(&self, node: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(node), NodeIndex::new(node))
            .is_some()
    }

    /// Strongly connected components of the subgraph induced by `members`.
    ///
    /// Components that cannot hold a circuit, a single node without a
    /// self-loop, are dropped. Each component lists its nodes ascending.
    pub(crate) fn components_within(&self, members: &[usize]) -> Vec<Vec<usize>> {
        let keep: HashSet<usize> = members.iter().copied().collect();
        let induced = self
            .graph
            .filter_map(|_, &ix| keep.contains(&ix).then_some(ix), |_, _| Some(()));

        tarjan_scc(&induced)
            .into_iter()
            .map(|scc| {
                let mut nodes: Vec<usize> = scc.into_iter().map(|node| induced[node]).collect();
                nodes.sort_unstable();
                nodes
            })
            .filter(|nodes| nodes.len() > 1 || self.has_self_loop(nodes[0]))
            .collect()
    }

    /// Local arena for one component; local index 0 is its first node
    pub(crate) fn component(&self, nodes: Vec<usize>) -> Component {
        let local: HashMap<usize, usize> = nodes
            .iter()
            .enumerate()
            .map(|(position, &ix)| (ix, position))
            .collect();

        let successors = nodes
            .iter()
            .map(|&ix| {
                self.successors[ix]
                    .iter()
                    .filter_map(|target| local.get(target).copied())
                    .collect()
            })
            .collect();

        Component { nodes, successors }
    }
}

/// A strongly connected component renumbered `0..len`
pub(crate) struct Component {
    pub(crate) nodes: Vec<usize>,
    pub(crate) successors: Vec<Vec<usize>>,
}

impl Component {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Johnson's blocking state over one component's local indices
pub(crate) struct Blocking {
    blocked: Vec<bool>,
    waiting: Vec<HashSet<usize>>,
}

impl Blocking {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            blocked: vec![false; len],
            waiting: vec![HashSet::new(); len],
        }
    }

    pub(crate) fn is_blocked(&self, node: usize) -> bool {
        self.blocked[node]
    }

    pub(crate) fn block(&mut self, node: usize) {
        self.blocked[node] = true;
    }

    /// Unblock `node` and, transitively, everything waiting on it
    pub(crate) fn unblock(&mut self, node: usize) {
        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            if self.blocked[current] {
                self.blocked[current] = false;
                pending.extend(self.waiting[current].drain());
            }
        }
    }

    /// `node` stays blocked until one of `successors` is unblocked
    pub(crate) fn wait_on(&mut self, node: usize, successors: &[usize]) {
        for &next in successors {
            self.waiting[next].insert(node);
        }
    }
}
