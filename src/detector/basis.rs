use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use super::chords::{Partition, partition};
use crate::error::CycleError;
use crate::graph::{CycleGraph, NodeId};

/// Fundamental cycle basis of an undirected graph or multigraph.
///
/// Each cycle is a node sequence; the edge from the last node back to the
/// first is implied. A self-loop gives the one-node cycle `[v]`. For
/// multigraphs every parallel edge beyond the first between a pair adds the
/// two-node cycle `[u, v]`, so the basis always has
/// `edges - nodes + components` cycles.
///
/// Components are walked in node insertion order, starting with the one
/// containing `root` when given. The root changes which cycles are returned,
/// never how many.
///
/// # Errors
///
/// [`CycleError::UnsupportedGraphKind`] for directed graphs and
/// [`CycleError::NodeNotFound`] when `root` is not in the graph.
pub fn cycle_basis<N: NodeId, E>(
    graph: &CycleGraph<N, E>,
    root: Option<&N>,
) -> Result<Vec<Vec<N>>, CycleError> {
    if graph.is_directed() {
        return Err(CycleError::unsupported("cycle_basis", graph.kind()));
    }

    let root = root
        .map(|node| graph.index_of(node).ok_or_else(|| CycleError::node_not_found(node)))
        .transpose()?;

    let mut cycles = Vec::new();
    if graph.is_multigraph() {
        cycles.extend(parallel_edge_cycles(graph));
    }

    // Neighbor lists are deduplicated, so the walk below sees the simple
    // projection of a multigraph without copying it.
    let mut walk = PatonWalk::new(graph.node_count());
    let mut next_root = root;
    let mut scan = 0;

    loop {
        let start = match next_root.take() {
            Some(ix) => ix,
            None => {
                while scan < graph.node_count() && walk.is_visited(scan) {
                    scan += 1;
                }
                if scan == graph.node_count() {
                    break;
                }
                scan
            }
        };

        walk.component(graph, start, &mut cycles)?;
    }

    Ok(cycles
        .into_iter()
        .map(|cycle| cycle.into_iter().map(|ix| graph.node_at(ix).clone()).collect())
        .collect())
}

/// Two-node cycles contributed by parallel edges, plus repeated self-loops
fn parallel_edge_cycles<N: NodeId, E>(graph: &CycleGraph<N, E>) -> Vec<Vec<usize>> {
    let Partition { forest, chords } = partition(graph);
    let unordered = |id: usize| {
        let slot = graph.slot(id);
        (slot.source.min(slot.target), slot.source.max(slot.target))
    };

    let tree_pairs: HashSet<(usize, usize)> =
        forest.edge_ids().iter().map(|&id| unordered(id)).collect();
    let mut chord_pairs = HashSet::new();
    let mut cycles = Vec::new();

    for id in chords {
        let pair = unordered(id);
        let repeated = !chord_pairs.insert(pair);
        if tree_pairs.contains(&pair) || repeated {
            let slot = graph.slot(id);
            if slot.is_self_loop() {
                cycles.push(vec![slot.source]);
            } else {
                cycles.push(vec![slot.source, slot.target]);
            }
        }
    }
    cycles
}

/// Predecessors and used-neighbor sets of Paton's walk.
///
/// Allocated once per basis and shared by every component; components are
/// disjoint, so a walk never reads another component's entries.
struct PatonWalk {
    pred: Vec<Option<usize>>,
    used: Vec<Option<HashSet<usize>>>,
}

impl PatonWalk {
    fn new(nodes: usize) -> Self {
        Self {
            pred: vec![None; nodes],
            used: vec![None; nodes],
        }
    }

    fn is_visited(&self, ix: usize) -> bool {
        self.used[ix].is_some()
    }

    /// Walk the component of `root`, appending the cycles it closes
    fn component<N: NodeId, E>(
        &mut self,
        graph: &CycleGraph<N, E>,
        root: usize,
        cycles: &mut Vec<Vec<usize>>,
    ) -> Result<(), CycleError> {
        let mut stack = vec![root];
        self.pred[root] = Some(root);
        self.used[root] = Some(HashSet::new());

        while let Some(z) = stack.pop() {
            for nbr in graph.neighbor_indices(z) {
                if self.used[nbr].is_none() {
                    self.pred[nbr] = Some(z);
                    self.used[nbr] = Some(HashSet::from([z]));
                    stack.push(nbr);
                } else if nbr == z {
                    cycles.push(vec![z]);
                } else if !self.used[z].as_ref().is_some_and(|set| set.contains(&nbr)) {
                    cycles.push(close_cycle(graph, &self.pred, &self.used, z, nbr)?);
                    if let Some(set) = self.used[nbr].as_mut() {
                        set.insert(z);
                    }
                }
            }
        }

        Ok(())
    }
}

/// Cycle closed by the non-tree edge `z - nbr`: `nbr`, `z`, then the
/// predecessors of `z` up to the first node `nbr` was reached from
fn close_cycle<N: NodeId, E>(
    graph: &CycleGraph<N, E>,
    pred: &[Option<usize>],
    used: &[Option<HashSet<usize>>],
    z: usize,
    nbr: usize,
) -> Result<Vec<usize>, CycleError> {
    let malformed = || CycleError::MalformedPath {
        details: format!(
            "no tree path joins {:?} and {:?}",
            graph.node_at(z),
            graph.node_at(nbr)
        ),
    };

    let targets = used[nbr].as_ref().ok_or_else(malformed)?;
    let mut cycle = vec![nbr, z];
    let mut p = pred[z].ok_or_else(malformed)?;

    while !targets.contains(&p) {
        cycle.push(p);
        let parent = pred[p].ok_or_else(malformed)?;
        if parent == p {
            return Err(malformed());
        }
        p = parent;
    }
    cycle.push(p);
    Ok(cycle)
}

/// Signed edge-by-cycle incidence matrix of a fundamental cycle basis.
///
/// Row `i` is the `i`-th edge of the graph in insertion order; column `j` is
/// the cycle closed by the `j`-th chord. Entries are `1` when the cycle
/// follows the stored orientation of the edge, `-1` when it runs against it
/// and `0` when the edge is not on the cycle. Each cycle is oriented so that
/// it walks its chord from source to target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleMatrix {
    rows: usize,
    columns: usize,
    entries: Vec<i8>,
    chord_rows: Vec<usize>,
}

impl CycleMatrix {
    fn zeros(rows: usize, chord_rows: Vec<usize>) -> Self {
        let columns = chord_rows.len();
        Self {
            rows,
            columns,
            entries: vec![0; rows * columns],
            chord_rows,
        }
    }

    /// Number of edges
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of fundamental cycles
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<i8> {
        (row < self.rows && column < self.columns).then(|| self.entries[row * self.columns + column])
    }

    pub fn row(&self, row: usize) -> Option<&[i8]> {
        (row < self.rows).then(|| &self.entries[row * self.columns..(row + 1) * self.columns])
    }

    pub fn column(&self, column: usize) -> Option<Vec<i8>> {
        (column < self.columns).then(|| {
            (0..self.rows)
                .map(|row| self.entries[row * self.columns + column])
                .collect()
        })
    }

    /// Row of the chord that closes each column's cycle
    pub fn chord_rows(&self) -> &[usize] {
        &self.chord_rows
    }

    fn set(&mut self, row: usize, column: usize, value: i8) {
        self.entries[row * self.columns + column] = value;
    }
}

/// Cycle matrix of the fundamental cycles of an undirected graph or multigraph.
///
/// # Errors
///
/// [`CycleError::UnsupportedGraphKind`] for directed graphs.
/// [`CycleError::MalformedPath`] if a chord's endpoints are not joined in
/// the spanning forest, which well-formed input never triggers.
pub fn cycle_basis_matrix<N: NodeId, E>(
    graph: &CycleGraph<N, E>,
) -> Result<CycleMatrix, CycleError> {
    if graph.is_directed() {
        return Err(CycleError::unsupported("cycle_basis_matrix", graph.kind()));
    }

    let Partition { forest, chords } = partition(graph);

    let mut tree_adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); graph.node_count()];
    for &id in forest.edge_ids() {
        let slot = graph.slot(id);
        tree_adjacency[slot.source].push((id, slot.target));
        tree_adjacency[slot.target].push((id, slot.source));
    }

    let mut matrix = CycleMatrix::zeros(graph.edge_count(), chords.clone());
    for (column, &chord) in chords.iter().enumerate() {
        matrix.set(chord, column, 1);

        let slot = graph.slot(chord);
        if slot.is_self_loop() {
            continue;
        }

        // The cycle continues from the chord's target back to its source
        let path = tree_path(&tree_adjacency, slot.target, slot.source).ok_or_else(|| {
            CycleError::MalformedPath {
                details: format!(
                    "chord ({:?}, {:?}) is not closed by the spanning forest",
                    graph.node_at(slot.source),
                    graph.node_at(slot.target)
                ),
            }
        })?;

        for (edge, from) in path {
            let sign = if graph.slot(edge).source == from { 1 } else { -1 };
            matrix.set(edge, column, sign);
        }
    }

    Ok(matrix)
}

/// Tree edges from `from` to `to`, each with the node it is walked from
fn tree_path(
    adjacency: &[Vec<(usize, usize)>],
    from: usize,
    to: usize,
) -> Option<Vec<(usize, usize)>> {
    let mut parent: Vec<Option<(usize, usize)>> = vec![None; adjacency.len()];
    let mut seen = vec![false; adjacency.len()];
    let mut queue = VecDeque::from([from]);
    seen[from] = true;

    while let Some(node) = queue.pop_front() {
        if node == to {
            break;
        }
        for &(edge, next) in &adjacency[node] {
            if !seen[next] {
                seen[next] = true;
                parent[next] = Some((edge, node));
                queue.push_back(next);
            }
        }
    }

    if !seen[to] {
        return None;
    }

    let mut path = Vec::new();
    let mut node = to;
    while let Some((edge, prev)) = parent[node] {
        path.push((edge, prev));
        node = prev;
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::GraphKind;

    fn sorted(cycles: Vec<Vec<u32>>) -> Vec<Vec<u32>> {
        let mut cycles: Vec<Vec<u32>> = cycles
            .into_iter()
            .map(|mut cycle| {
                cycle.sort_unstable();
                cycle
            })
            .collect();
        cycles.sort();
        cycles
    }

    fn three_cycles() -> CycleGraph<u32> {
        CycleGraph::from_edges(
            GraphKind::Graph,
            [
                (0, 1), (1, 2), (2, 3), (3, 0),
                (3, 4), (4, 5), (5, 0),
                (1, 6), (6, 7), (7, 8), (8, 0),
                (8, 9),
            ],
        )
    }

    #[test]
    fn test_cycle_basis_from_root() {
        let graph = three_cycles();
        let expected = vec![vec![0, 1, 2, 3], vec![0, 1, 6, 7, 8], vec![0, 3, 4, 5]];

        assert_eq!(sorted(cycle_basis(&graph, Some(&0)).unwrap()), expected);
        assert_eq!(sorted(cycle_basis(&graph, Some(&9)).unwrap()), expected);
        assert_eq!(sorted(cycle_basis(&graph, None).unwrap()), expected);
    }

    #[test]
    fn test_cycle_basis_covers_every_component() {
        let mut graph = three_cycles();
        for (u, v) in [(10, 11), (11, 12), (12, 10)] {
            graph.add_edge(u, v);
        }

        let cycles = sorted(cycle_basis(&graph, Some(&9)).unwrap());
        assert_eq!(
            cycles,
            vec![
                vec![0, 1, 2, 3],
                vec![0, 1, 6, 7, 8],
                vec![0, 3, 4, 5],
                vec![10, 11, 12],
            ]
        );
    }

    #[test]
    fn test_cycle_basis_with_many_isolated_nodes() {
        let mut graph: CycleGraph<u32> = CycleGraph::graph();
        for node in 0..20_000 {
            graph.add_node(node);
        }
        for (u, v) in [(7, 8), (8, 9), (9, 7), (19_998, 19_999), (19_999, 0), (0, 19_998)] {
            graph.add_edge(u, v);
        }

        let cycles = sorted(cycle_basis(&graph, Some(&19_999)).unwrap());
        assert_eq!(cycles, vec![vec![0, 19_998, 19_999], vec![7, 8, 9]]);
    }

    #[test]
    fn test_self_loop_is_single_node_cycle() {
        let mut graph = three_cycles();
        graph.add_edge(0, 0);
        let cycles = cycle_basis(&graph, Some(&0)).unwrap();
        assert_eq!(cycles.len(), 4);
        assert!(cycles.contains(&vec![0]));
    }

    #[test]
    fn test_multigraph_parallel_edges_give_two_cycles() {
        let graph: CycleGraph<u32> = CycleGraph::from_edges(
            GraphKind::MultiGraph,
            [(0, 1), (1, 0), (1, 2), (2, 0), (0, 1), (3, 3), (3, 3)],
        );
        let cycles = cycle_basis(&graph, None).unwrap();

        // edges - nodes + components
        assert_eq!(cycles.len(), 7 - 4 + 2);
        assert_eq!(&cycles[..3], &[vec![1, 0], vec![0, 1], vec![3]]);
        assert!(cycles.contains(&vec![3]));
        assert_eq!(cycles.iter().filter(|cycle| cycle.len() == 3).count(), 1);
    }

    #[test]
    fn test_triangle_with_doubled_chord() {
        let graph: CycleGraph<u32> = CycleGraph::from_edges(
            GraphKind::MultiGraph,
            [(0, 1), (1, 2), (2, 0), (2, 0)],
        );
        let cycles = cycle_basis(&graph, None).unwrap();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0], vec![2, 0]);
    }

    #[test]
    fn test_cycle_basis_rejects_directed_graphs() {
        let graph: CycleGraph<u32> = CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (1, 0)]);
        assert_eq!(
            cycle_basis(&graph, None),
            Err(CycleError::unsupported("cycle_basis", GraphKind::DiGraph))
        );
    }

    #[test]
    fn test_cycle_basis_unknown_root() {
        let graph = three_cycles();
        assert!(matches!(
            cycle_basis(&graph, Some(&42)),
            Err(CycleError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_matrix_of_square() {
        let graph: CycleGraph<u32> =
            CycleGraph::from_edges(GraphKind::Graph, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let matrix = cycle_basis_matrix(&graph).unwrap();

        assert_eq!((matrix.rows(), matrix.columns()), (4, 1));
        assert_eq!(matrix.chord_rows(), &[3]);
        assert_eq!(matrix.column(0), Some(vec![1, 1, 1, 1]));
    }

    #[test]
    fn test_matrix_signs_follow_stored_orientation() {
        let graph: CycleGraph<u32> =
            CycleGraph::from_edges(GraphKind::Graph, [(0, 1), (2, 1), (2, 0)]);
        let matrix = cycle_basis_matrix(&graph).unwrap();

        // Cycle 2 -> 0 -> 1 -> 2 walks (2, 1) backwards
        assert_eq!(matrix.column(0), Some(vec![1, -1, 1]));
        assert_eq!(matrix.get(1, 0), Some(-1));
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn test_matrix_of_multigraph() {
        let graph: CycleGraph<u32> = CycleGraph::from_edges(
            GraphKind::MultiGraph,
            [(0, 1), (0, 1), (1, 0), (1, 1)],
        );
        let matrix = cycle_basis_matrix(&graph).unwrap();

        assert_eq!(matrix.columns(), 3);
        assert_eq!(matrix.column(0), Some(vec![-1, 1, 0, 0]));
        assert_eq!(matrix.column(1), Some(vec![1, 0, 1, 0]));
        assert_eq!(matrix.column(2), Some(vec![0, 0, 0, 1]));
        assert_eq!(matrix.row(0), Some(&[-1, 1, 0][..]));
    }

    #[test]
    fn test_matrix_out_of_range_lookups() {
        let graph: CycleGraph<u32> =
            CycleGraph::from_edges(GraphKind::Graph, [(0, 1), (1, 2), (2, 0)]);
        let matrix = cycle_basis_matrix(&graph).unwrap();

        assert_eq!(matrix.row(3), None);
        assert_eq!(matrix.column(1), None);
        assert_eq!(matrix.row(2), Some(&[1][..]));
    }

    #[test]
    fn test_matrix_rejects_directed_graphs() {
        let graph: CycleGraph<u32> = CycleGraph::from_edges(GraphKind::MultiDiGraph, [(0, 1)]);
        assert!(matches!(
            cycle_basis_matrix(&graph),
            Err(CycleError::UnsupportedGraphKind { .. })
        ));
    }
}
