//! # Ferris Cycles - Find, Enumerate and Certify Cycles in Graphs
//!
//! Ferris Cycles detects cycles in undirected graphs, directed graphs and
//! their multi-edge variants. It can certify that a graph is a forest, list
//! every elementary circuit of a directed graph, or produce one witness
//! cycle under a chosen edge orientation.
//!
//! ## Main Components
//!
//! - **Graph**: the [`CycleGraph`](graph::CycleGraph) container, spanning
//!   forests and JSON/TOML graph files
//! - **Detector**: cycle bases (Paton), chords, circuit enumeration
//!   (Johnson) and single-cycle search
//! - **Reports**: human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: A Cycle Basis of an Undirected Graph
//!
//! ```
//! use ferris_cycles::detector::cycle_basis;
//! use ferris_cycles::graph::{CycleGraph, GraphKind};
//!
//! # fn main() -> miette::Result<()> {
//! let graph = CycleGraph::from_edges(
//!     GraphKind::Graph,
//!     [(0, 1), (1, 2), (2, 0), (2, 3), (3, 0)],
//! );
//!
//! // One fundamental cycle per chord: edges - nodes + components
//! let basis = cycle_basis(&graph, Some(&0))?;
//! assert_eq!(basis.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Streaming the Circuits of a Directed Graph
//!
//! ```
//! use ferris_cycles::detector::simple_cycles;
//! use ferris_cycles::graph::{CycleGraph, GraphKind};
//!
//! # fn main() -> miette::Result<()> {
//! let graph = CycleGraph::from_edges(
//!     GraphKind::DiGraph,
//!     [("a", "b"), ("b", "a"), ("b", "c"), ("c", "a")],
//! );
//!
//! // Circuits are produced lazily; stop whenever enough were seen
//! let first = simple_cycles(&graph)?.next();
//! assert!(first.is_some());
//! assert_eq!(simple_cycles(&graph)?.count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Finding a Witness Cycle
//!
//! ```
//! use ferris_cycles::detector::find_cycle;
//! use ferris_cycles::error::CycleError;
//! use ferris_cycles::graph::{CycleGraph, Direction, GraphKind, Orientation};
//!
//! # fn main() -> miette::Result<()> {
//! // Acyclic as stored, but not once edge directions are ignored
//! let graph = CycleGraph::from_edges(GraphKind::DiGraph, [(0, 1), (0, 2), (1, 2)]);
//!
//! assert_eq!(
//!     find_cycle(&graph, None, Orientation::Original),
//!     Err(CycleError::NoCycleFound)
//! );
//!
//! let cycle = find_cycle(&graph, None, Orientation::Ignore)?;
//! assert_eq!(cycle.len(), 3);
//! assert!(cycle.iter().any(|edge| edge.direction == Some(Direction::Reverse)));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Reporting on a Graph File
//!
//! ```no_run
//! use std::path::Path;
//!
//! use ferris_cycles::detector::cycle_basis;
//! use ferris_cycles::graph::load_graph;
//! use ferris_cycles::reports::{
//!     CycleReport, Findings, GraphSummary, HumanReportGenerator, ReportGenerator,
//! };
//!
//! # fn main() -> miette::Result<()> {
//! let graph = load_graph(Path::new("network.toml"), None)?;
//! let cycles = cycle_basis(&graph, None)?;
//!
//! let report = CycleReport::new(
//!     GraphSummary::new("network.toml", &graph),
//!     Findings::Basis { cycles, matrix: None },
//! );
//! println!("{}", HumanReportGenerator::new(Some(10)).generate_report(&report)?);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
