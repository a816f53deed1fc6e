//! # Graph Container Module
//!
//! This module provides the graph representation every cycle algorithm runs
//! on, together with the traversal and spanning-forest services they share.
//!
//! ## Components
//!
//! - **CycleGraph**: insertion-ordered container covering undirected,
//!   directed and multi-edge graphs, selected by a runtime [`GraphKind`]
//! - **SpanningForest**: spanning forest of the undirected projection
//! - **GraphDocument**: JSON/TOML graph files with string node names
//!
//! ## Example
//!
//! ```
//! use ferris_cycles::graph::{CycleGraph, GraphKind, SpanningForest};
//!
//! let mut graph: CycleGraph<&str> = CycleGraph::multigraph();
//! graph.add_edge("a", "b");
//! graph.add_edge("a", "b");
//! graph.add_edge("b", "c");
//!
//! assert_eq!(graph.kind(), GraphKind::MultiGraph);
//! assert_eq!(graph.edges_between(&"b", &"a").len(), 2);
//!
//! let forest = SpanningForest::new(&graph);
//! assert_eq!(forest.edge_count(), 2);
//! assert_eq!(forest.component_count(), 1);
//! ```

mod container;
mod forest;
mod loader;
pub(crate) mod traversal;
mod types;

pub use container::CycleGraph;
pub use forest::SpanningForest;
pub use loader::{GraphDocument, InputFormat, load_graph, parse_graph};
pub use types::{Direction, EdgeRef, GraphKind, NodeId, Orientation, TraversedEdge};
