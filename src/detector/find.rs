use std::collections::HashSet;

use crate::error::CycleError;
use crate::graph::traversal::{EdgeDfs, Step};
use crate::graph::{CycleGraph, NodeId, Orientation, TraversedEdge};

/// Find one cycle by depth-first traversal of edges.
///
/// Sources are tried in order (every node in insertion order when `sources`
/// is `None` or empty), skipping nodes already explored from an earlier
/// source. The first cycle closed is returned as the edges that form it,
/// without the path that led there.
///
/// For directed graphs each edge keeps its stored `(source, target)`; with
/// [`Orientation::Reverse`] or [`Orientation::Ignore`] its `direction` says
/// how it was walked. Undirected edges are reported in the order walked.
/// Multigraph edges carry their key. The result is deterministic for a given
/// graph.
///
/// # Examples
///
/// ```
/// use ferris_cycles::detector::find_cycle;
/// use ferris_cycles::error::CycleError;
/// use ferris_cycles::graph::{CycleGraph, Direction, GraphKind, Orientation};
///
/// let graph: CycleGraph<u32> =
///     CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (0, 2), (1, 2)]);
///
/// assert_eq!(
///     find_cycle(&graph, None, Orientation::Original),
///     Err(CycleError::NoCycleFound)
/// );
///
/// let cycle = find_cycle(&graph, None, Orientation::Ignore)?;
/// let directions: Vec<_> = cycle.iter().filter_map(|edge| edge.direction).collect();
/// assert_eq!(
///     directions,
///     [Direction::Forward, Direction::Forward, Direction::Reverse]
/// );
/// # Ok::<(), CycleError>(())
/// ```
///
/// # Errors
///
/// [`CycleError::NoCycleFound`] when nothing reachable from the sources lies
/// on a cycle, [`CycleError::NodeNotFound`] for an unknown source.
pub fn find_cycle<N: NodeId, E>(
    graph: &CycleGraph<N, E>,
    sources: Option<&[N]>,
    orientation: Orientation,
) -> Result<Vec<TraversedEdge<N>>, CycleError> {
    let starts: Vec<usize> = match sources {
        Some(nodes) if !nodes.is_empty() => nodes
            .iter()
            .map(|node| graph.index_of(node).ok_or_else(|| CycleError::node_not_found(node)))
            .collect::<Result<_, _>>()?,
        _ => (0..graph.node_count()).collect(),
    };

    let mut explored = HashSet::new();
    for start in starts {
        if explored.contains(&start) {
            continue;
        }

        match search_from(graph, start, orientation, &explored) {
            Ok((edges, closing)) => {
                let first = edges
                    .iter()
                    .position(|step| step.tail == closing)
                    .unwrap_or(0);
                return Ok(edges[first..]
                    .iter()
                    .map(|&step| graph.traversed(step, orientation))
                    .collect());
            }
            Err(seen) => explored.extend(seen),
        }
    }

    Err(CycleError::NoCycleFound)
}

/// Walk from `start`. On success returns the path ending in a cycle and the
/// node that closed it; otherwise the nodes seen, now proven cycle-free.
fn search_from<N: NodeId, E>(
    graph: &CycleGraph<N, E>,
    start: usize,
    orientation: Orientation,
    explored: &HashSet<usize>,
) -> Result<(Vec<Step>, usize), HashSet<usize>> {
    let mut seen = HashSet::from([start]);
    let mut active = HashSet::from([start]);
    let mut path: Vec<Step> = Vec::new();
    let mut previous: Option<usize> = None;

    let mut dfs = EdgeDfs::new(graph, vec![start], orientation);
    while let Some(step) = dfs.next() {
        if previous.is_some_and(|node| node != step.tail) {
            rewind(&mut path, &mut active, step.tail);
        }
        path.push(step);

        if active.contains(&step.head) {
            return Ok((path, step.head));
        }

        if explored.contains(&step.head) {
            // Already proven cycle-free
            path.pop();
            dfs.prune();
            previous = Some(step.tail);
            continue;
        }

        seen.insert(step.head);
        active.insert(step.head);
        previous = Some(step.head);
    }

    Err(seen)
}

/// Pop path edges until the path ends at `tail` again
fn rewind(path: &mut Vec<Step>, active: &mut HashSet<usize>, tail: usize) {
    loop {
        let Some(popped) = path.pop() else {
            active.clear();
            active.insert(tail);
            return;
        };
        active.remove(&popped.head);

        if path.last().is_some_and(|last| last.head == tail) {
            return;
        }
    }
}
