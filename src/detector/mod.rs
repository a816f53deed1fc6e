//! # Cycle Detection Module
//!
//! This module implements the cycle algorithms over [`CycleGraph`]:
//!
//! - **cycle_basis**: fundamental cycle basis of an undirected graph
//!   (Paton's algorithm), plus its signed [`CycleMatrix`]
//! - **chords**: split of the edges into a spanning forest and its chords
//! - **simple_cycles**: lazy enumeration of every elementary circuit of a
//!   directed graph (Johnson's algorithm)
//! - **recursive_simple_cycles**: the same circuits, fully materialized
//! - **find_cycle**: one cycle found by depth-first edge traversal, with the
//!   edge orientation chosen by the caller
//!
//! None of them modify the graph they are given.
//!
//! ## Algorithm
//!
//! Johnson's algorithm runs on an owned working copy. Strongly connected
//! components come from petgraph's Tarjan SCC; after every circuit through
//! a component's first node is listed, that node is removed and the rest of
//! the component is split again. Blocked nodes are only released when a
//! circuit is found through them, which bounds the work by
//! `O((n + e)(c + 1))` for `c` circuits.
//!
//! ## Example
//!
//! ```
//! use ferris_cycles::detector::{cycle_basis, simple_cycles};
//! use ferris_cycles::graph::{CycleGraph, GraphKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let undirected: CycleGraph<u32> = CycleGraph::from_edges(
//!     GraphKind::Graph,
//!     [(0, 1), (1, 2), (2, 3), (3, 0), (0, 3), (3, 4), (4, 5), (5, 0)],
//! );
//! assert_eq!(cycle_basis(&undirected, Some(&0))?.len(), 2);
//!
//! let directed: CycleGraph<&str> = CycleGraph::from_edges(
//!     GraphKind::DiGraph,
//!     [("a", "b"), ("b", "c"), ("c", "a"), ("b", "a")],
//! );
//! assert_eq!(simple_cycles(&directed)?.count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! [`CycleGraph`]: crate::graph::CycleGraph

mod basis;
mod chords;
mod circuits;
mod find;
mod recursive;
mod working;

pub use basis::{CycleMatrix, cycle_basis, cycle_basis_matrix};
pub use chords::{Chords, chords};
pub use circuits::{SimpleCycles, simple_cycles};
pub use find::find_cycle;
pub use recursive::recursive_simple_cycles;
