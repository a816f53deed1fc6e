use std::collections::{HashMap, HashSet};

use petgraph::EdgeType;

use super::types::{EdgeRef, GraphKind, NodeId};

/// Stored edge, addressed by its position in the edge arena
#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot<E> {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) key: usize,
    pub(crate) weight: E,
}

impl<E> EdgeSlot<E> {
    /// The endpoint opposite to `node`
    pub(crate) fn other(&self, node: usize) -> usize {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    pub(crate) fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Graph container used by every cycle algorithm in this crate.
///
/// Nodes live in an insertion-ordered arena and are addressed internally by
/// their position; edges likewise. Iteration over nodes, edges and
/// neighbors always follows insertion order, which keeps every traversal
/// deterministic.
///
/// Parallel edges are only kept by the multigraph kinds, where each one
/// receives the lowest integer `key` not yet used between the same pair.
#[derive(Debug, Clone)]
pub struct CycleGraph<N, E = ()> {
    kind: GraphKind,
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    edges: Vec<EdgeSlot<E>>,
    // Out-edges for directed kinds, incident edges for undirected kinds
    outgoing: Vec<Vec<usize>>,
    // In-edges, directed kinds only
    incoming: Vec<Vec<usize>>,
}

impl<N: NodeId, E> CycleGraph<N, E> {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Empty undirected simple graph
    pub fn graph() -> Self {
        Self::new(GraphKind::Graph)
    }

    /// Empty directed simple graph
    pub fn digraph() -> Self {
        Self::new(GraphKind::DiGraph)
    }

    /// Empty undirected multigraph
    pub fn multigraph() -> Self {
        Self::new(GraphKind::MultiGraph)
    }

    /// Empty directed multigraph
    pub fn multidigraph() -> Self {
        Self::new(GraphKind::MultiDiGraph)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    pub fn is_multigraph(&self) -> bool {
        self.kind.is_multigraph()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Add a node, returning `false` if it was already present
    pub fn add_node(&mut self, node: N) -> bool {
        let before = self.nodes.len();
        self.ensure_node(node);
        self.nodes.len() > before
    }

    /// Add an edge carrying `weight`, creating missing endpoints.
    ///
    /// Returns the key of the edge. Simple kinds replace the weight of an
    /// existing edge between the same pair instead of adding a new one.
    pub fn add_weighted_edge(&mut self, source: N, target: N, weight: E) -> usize {
        let source = self.ensure_node(source);
        let target = self.ensure_node(target);

        let existing: Vec<usize> = self.pair_edges(source, target).collect();
        if !self.kind.is_multigraph() {
            if let Some(&id) = existing.first() {
                self.edges[id].weight = weight;
                return self.edges[id].key;
            }
            self.push_edge(source, target, 0, weight);
            return 0;
        }

        let used: HashSet<usize> = existing.iter().map(|&id| self.edges[id].key).collect();
        let key = (0..=used.len())
            .find(|candidate| !used.contains(candidate))
            .unwrap_or(used.len());
        self.push_edge(source, target, key, weight);
        key
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, N, E>> + '_ {
        (0..self.edges.len()).map(move |id| self.edge_ref(id))
    }

    /// Whether an edge joins `source` to `target` (in either order when undirected)
    pub fn has_edge(&self, source: &N, target: &N) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&u), Some(&v)) => self.pair_edges(u, v).next().is_some(),
            _ => false,
        }
    }

    /// Every parallel edge between `source` and `target`
    pub fn edges_between(&self, source: &N, target: &N) -> Vec<EdgeRef<'_, N, E>> {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&u), Some(&v)) => self.pair_edges(u, v).map(|id| self.edge_ref(id)).collect(),
            _ => Vec::new(),
        }
    }

    /// Successors for directed kinds, adjacent nodes for undirected kinds.
    ///
    /// Each neighbor is reported once, however many parallel edges lead to it.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + use<'a, N, E> {
        let found = self.index.get(node).copied();
        found
            .into_iter()
            .flat_map(move |ix| self.neighbor_indices(ix))
            .map(move |ix| &self.nodes[ix])
    }

    /// Predecessors for directed kinds, adjacent nodes for undirected kinds
    pub fn predecessors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + use<'a, N, E> {
        let found = self.index.get(node).copied();
        found
            .into_iter()
            .flat_map(move |ix| self.predecessor_indices(ix))
            .map(move |ix| &self.nodes[ix])
    }

    /// Number of edge endpoints at `node`; a self-loop counts twice
    pub fn degree(&self, node: &N) -> usize {
        let Some(&ix) = self.index.get(node) else {
            return 0;
        };
        if self.kind.is_directed() {
            self.outgoing[ix].len() + self.incoming[ix].len()
        } else {
            let loops = self.outgoing[ix]
                .iter()
                .filter(|&&id| self.edges[id].is_self_loop())
                .count();
            self.outgoing[ix].len() + loops
        }
    }

    pub(crate) fn node_at(&self, ix: usize) -> &N {
        &self.nodes[ix]
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub(crate) fn slot(&self, id: usize) -> &EdgeSlot<E> {
        &self.edges[id]
    }

    pub(crate) fn edge_ref(&self, id: usize) -> EdgeRef<'_, N, E> {
        let slot = &self.edges[id];
        EdgeRef {
            source: &self.nodes[slot.source],
            target: &self.nodes[slot.target],
            key: slot.key,
            weight: &slot.weight,
        }
    }

    /// Out-edges (directed) or incident edges (undirected) of `ix`, in insertion order
    pub(crate) fn outgoing_ids(&self, ix: usize) -> &[usize] {
        &self.outgoing[ix]
    }

    /// In-edges of `ix`; empty for undirected kinds
    pub(crate) fn incoming_ids(&self, ix: usize) -> &[usize] {
        &self.incoming[ix]
    }

    pub(crate) fn neighbor_indices(&self, ix: usize) -> Vec<usize> {
        let mut seen = HashSet::new();
        self.outgoing[ix]
            .iter()
            .map(|&id| self.edges[id].other(ix))
            .filter(|&other| seen.insert(other))
            .collect()
    }

    pub(crate) fn predecessor_indices(&self, ix: usize) -> Vec<usize> {
        if !self.kind.is_directed() {
            return self.neighbor_indices(ix);
        }
        let mut seen = HashSet::new();
        self.incoming[ix]
            .iter()
            .map(|&id| self.edges[id].source)
            .filter(|&other| seen.insert(other))
            .collect()
    }

    fn ensure_node(&mut self, node: N) -> usize {
        if let Some(&ix) = self.index.get(&node) {
            return ix;
        }
        let ix = self.nodes.len();
        self.index.insert(node.clone(), ix);
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        ix
    }

    fn pair_edges(&self, source: usize, target: usize) -> impl Iterator<Item = usize> + '_ {
        let directed = self.kind.is_directed();
        self.outgoing[source].iter().copied().filter(move |&id| {
            let slot = &self.edges[id];
            if directed {
                slot.target == target
            } else {
                slot.other(source) == target
            }
        })
    }

    fn push_edge(&mut self, source: usize, target: usize, key: usize, weight: E) -> usize {
        let id = self.edges.len();
        self.edges.push(EdgeSlot {
            source,
            target,
            key,
            weight,
        });
        self.outgoing[source].push(id);
        if self.kind.is_directed() {
            self.incoming[target].push(id);
        } else if source != target {
            self.outgoing[target].push(id);
        }
        id
    }
}

impl<N: NodeId, E: Default> CycleGraph<N, E> {
    /// Add an edge with a default weight. See [`CycleGraph::add_weighted_edge`].
    pub fn add_edge(&mut self, source: N, target: N) -> usize {
        self.add_weighted_edge(source, target, E::default())
    }
}

impl<N: NodeId> CycleGraph<N> {
    /// Build an unweighted graph of `kind` from an edge list
    pub fn from_edges<I>(kind: GraphKind, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new(kind);
        for (source, target) in edges {
            graph.add_edge(source, target);
        }
        graph
    }
}

impl<N: NodeId, E: Clone> CycleGraph<N, E> {
    /// Subgraph induced by `nodes`; nodes absent from the graph are ignored.
    ///
    /// Surviving edges keep their keys.
    pub fn subgraph<'a, I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let keep: HashSet<usize> = nodes
            .into_iter()
            .filter_map(|node| self.index.get(node).copied())
            .collect();
        let mut result = Self::new(self.kind);
        for (ix, node) in self.nodes.iter().enumerate() {
            if keep.contains(&ix) {
                result.ensure_node(node.clone());
            }
        }
        for slot in &self.edges {
            if keep.contains(&slot.source) && keep.contains(&slot.target) {
                result.copy_slot(self, slot);
            }
        }
        result
    }

    /// Same nodes, only the edges accepted by `keep`; surviving edges keep their keys
    pub fn filter_edges<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(EdgeRef<'_, N, E>) -> bool,
    {
        self.retain_edge_ids(|id| keep(self.edge_ref(id)))
    }

    /// Same nodes, only the edges whose arena position is accepted by `keep`
    pub(crate) fn retain_edge_ids<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        let mut result = Self::new(self.kind);
        for node in &self.nodes {
            result.ensure_node(node.clone());
        }
        for id in 0..self.edges.len() {
            if keep(id) {
                result.copy_slot(self, &self.edges[id]);
            }
        }
        result
    }

    /// Collapse parallel edges, keeping the same directedness
    pub fn to_simple(&self) -> Self {
        self.project(self.kind.simple())
    }

    /// Forget edge directions, keeping parallel edges for multigraphs
    pub fn to_undirected(&self) -> Self {
        self.project(self.kind.undirected())
    }

    fn project(&self, kind: GraphKind) -> Self {
        let mut result = Self::new(kind);
        for node in &self.nodes {
            result.ensure_node(node.clone());
        }
        for slot in &self.edges {
            result.add_weighted_edge(
                self.nodes[slot.source].clone(),
                self.nodes[slot.target].clone(),
                slot.weight.clone(),
            );
        }
        result
    }

    fn copy_slot(&mut self, from: &Self, slot: &EdgeSlot<E>) {
        let source = self.ensure_node(from.nodes[slot.source].clone());
        let target = self.ensure_node(from.nodes[slot.target].clone());
        self.push_edge(source, target, slot.key, slot.weight.clone());
    }
}

impl<N: NodeId, E: Clone, Ty: EdgeType> From<&petgraph::Graph<N, E, Ty>> for CycleGraph<N, E> {
    /// petgraph graphs allow parallel edges, so they convert to a multigraph
    /// kind. Nodes with equal weights are merged into one node.
    fn from(graph: &petgraph::Graph<N, E, Ty>) -> Self {
        let kind = if Ty::is_directed() {
            GraphKind::MultiDiGraph
        } else {
            GraphKind::MultiGraph
        };
        let mut result = Self::new(kind);
        for weight in graph.node_weights() {
            result.add_node(weight.clone());
        }
        for edge in graph.raw_edges() {
            result.add_weighted_edge(
                graph[edge.source()].clone(),
                graph[edge.target()].clone(),
                edge.weight.clone(),
            );
        }
        result
    }
}
