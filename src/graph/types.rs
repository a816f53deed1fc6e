//! Core graph types
//!
//! This module contains the vocabulary shared by the graph container and the
//! cycle algorithms: graph kinds, traversal orientations and the edges a
//! traversal reports.

use std::fmt::{self, Debug};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Identity of a node.
///
/// Algorithms are generic over any cloneable, hashable identity token.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// The four supported graph variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Undirected, at most one edge per node pair
    Graph,
    /// Directed, at most one edge per ordered node pair
    DiGraph,
    /// Undirected with parallel edges
    MultiGraph,
    /// Directed with parallel edges
    MultiDiGraph,
}

impl GraphKind {
    pub fn is_directed(self) -> bool {
        matches!(self, GraphKind::DiGraph | GraphKind::MultiDiGraph)
    }

    pub fn is_multigraph(self) -> bool {
        matches!(self, GraphKind::MultiGraph | GraphKind::MultiDiGraph)
    }

    /// The kind with the same directedness but without parallel edges
    pub fn simple(self) -> Self {
        if self.is_directed() {
            GraphKind::DiGraph
        } else {
            GraphKind::Graph
        }
    }

    /// The kind with the same multiplicity but without edge direction
    pub fn undirected(self) -> Self {
        if self.is_multigraph() {
            GraphKind::MultiGraph
        } else {
            GraphKind::Graph
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Graph => write!(f, "graph"),
            GraphKind::DiGraph => write!(f, "digraph"),
            GraphKind::MultiGraph => write!(f, "multigraph"),
            GraphKind::MultiDiGraph => write!(f, "multidigraph"),
        }
    }
}

/// How directed edges may be followed during a traversal.
///
/// Undirected graphs ignore this setting: their edges are always
/// traversable both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Orientation {
    /// Follow edges from tail to head only
    #[default]
    Original,
    /// Follow edges from head to tail only
    Reverse,
    /// Follow edges either way, recording which way was taken
    Ignore,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Original => write!(f, "original"),
            Orientation::Reverse => write!(f, "reverse"),
            Orientation::Ignore => write!(f, "ignore"),
        }
    }
}

/// Direction in which a stored edge was traversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// Borrowed view of a stored edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a, N, E> {
    pub source: &'a N,
    pub target: &'a N,
    pub key: usize,
    pub weight: &'a E,
}

/// One step of a traversal, as reported by [`find_cycle`](crate::detector::find_cycle).
///
/// For directed graphs `source`/`target` keep the stored orientation of the
/// edge and `direction` tells how it was walked when the traversal was not
/// `Original`. For undirected graphs `source`/`target` are the order in which
/// the edge was walked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TraversedEdge<N> {
    pub source: N,
    pub target: N,
    /// Present for multigraphs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<usize>,
    /// Present for directed graphs walked with `Reverse` or `Ignore`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl<N> TraversedEdge<N> {
    /// Node the traversal left from
    pub fn tail(&self) -> &N {
        match self.direction {
            Some(Direction::Reverse) => &self.target,
            _ => &self.source,
        }
    }

    /// Node the traversal arrived at
    pub fn head(&self) -> &N {
        match self.direction {
            Some(Direction::Reverse) => &self.source,
            _ => &self.target,
        }
    }

    /// `(source, target)` pair, convenient for comparisons
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.source, &self.target)
    }
}

impl<N: fmt::Display> fmt::Display for TraversedEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.tail(), self.head())?;
        if let Some(key) = self.key {
            write!(f, " [key {key}]")?;
        }
        if let Some(direction) = self.direction {
            write!(f, " ({direction})")?;
        }
        Ok(())
    }
}
