//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//!
//! Every command produces a [`CycleReport`] and hands it to one of them.

pub mod human;
pub mod json;

use serde::Serialize;

use crate::detector::CycleMatrix;
use crate::error::FerrisCyclesError;
use crate::graph::{CycleGraph, EdgeRef, GraphKind, Orientation, TraversedEdge};

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the result of a command
    fn generate_report(&self, report: &CycleReport) -> Result<String, FerrisCyclesError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;

/// The graph a report was computed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub path: String,
    pub kind: GraphKind,
    pub nodes: usize,
    pub edges: usize,
}

impl GraphSummary {
    pub fn new<E>(path: impl Into<String>, graph: &CycleGraph<String, E>) -> Self {
        Self {
            path: path.into(),
            kind: graph.kind(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        }
    }
}

/// An edge as it appears in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSummary {
    pub source: String,
    pub target: String,
    /// Present for multigraphs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<usize>,
}

impl EdgeSummary {
    pub fn from_edge<E>(edge: EdgeRef<'_, String, E>, multigraph: bool) -> Self {
        Self {
            source: edge.source.clone(),
            target: edge.target.clone(),
            key: multigraph.then_some(edge.key),
        }
    }

    /// Every edge of `graph`, in insertion order
    pub fn all<E>(graph: &CycleGraph<String, E>) -> Vec<Self> {
        graph
            .edges()
            .map(|edge| Self::from_edge(edge, graph.is_multigraph()))
            .collect()
    }
}

impl std::fmt::Display for EdgeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.key {
            Some(key) => write!(f, "({}, {}, {key})", self.source, self.target),
            None => write!(f, "({}, {})", self.source, self.target),
        }
    }
}

/// Signed cycle matrix together with the edges labelling its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFindings {
    pub edges: Vec<EdgeSummary>,
    pub matrix: CycleMatrix,
}

/// What a command found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Findings {
    Basis {
        cycles: Vec<Vec<String>>,
        matrix: Option<MatrixFindings>,
    },
    Circuits {
        circuits: Vec<Vec<String>>,
        /// The enumeration was stopped by a limit before it was exhausted
        truncated: bool,
        recursive: bool,
    },
    Cycle {
        /// `None` when no cycle is reachable from the sources
        edges: Option<Vec<TraversedEdge<String>>>,
        orientation: Orientation,
    },
    Chords {
        tree: Vec<EdgeSummary>,
        chords: Vec<EdgeSummary>,
    },
}

/// Input summary plus findings of one command run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub graph: GraphSummary,
    pub findings: Findings,
}

impl CycleReport {
    pub fn new(graph: GraphSummary, findings: Findings) -> Self {
        Self { graph, findings }
    }

    /// Name of the command that produced the findings
    pub fn command(&self) -> &'static str {
        match self.findings {
            Findings::Basis { .. } => "basis",
            Findings::Circuits { .. } => "circuits",
            Findings::Cycle { .. } => "find",
            Findings::Chords { .. } => "chords",
        }
    }

    /// Number of cycles reported. Each chord counts as the cycle it closes.
    pub fn cycle_count(&self) -> usize {
        match &self.findings {
            Findings::Basis { cycles, .. } => cycles.len(),
            Findings::Circuits { circuits, .. } => circuits.len(),
            Findings::Cycle { edges, .. } => usize::from(edges.is_some()),
            Findings::Chords { chords, .. } => chords.len(),
        }
    }

    pub fn has_cycles(&self) -> bool {
        self.cycle_count() > 0
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::graph::Direction;

    pub fn summary(kind: GraphKind) -> GraphSummary {
        GraphSummary {
            path: "graph.json".to_string(),
            kind,
            nodes: 3,
            edges: 3,
        }
    }

    pub fn strings(nodes: &[&str]) -> Vec<String> {
        nodes.iter().map(|node| node.to_string()).collect()
    }

    pub fn basis_report(cycles: &[&[&str]]) -> CycleReport {
        CycleReport::new(
            summary(GraphKind::Graph),
            Findings::Basis {
                cycles: cycles.iter().map(|cycle| strings(cycle)).collect(),
                matrix: None,
            },
        )
    }

    pub fn cycle_report(found: bool) -> CycleReport {
        let edges = found.then(|| {
            vec![
                TraversedEdge {
                    source: "a".to_string(),
                    target: "b".to_string(),
                    key: None,
                    direction: Some(Direction::Forward),
                },
                TraversedEdge {
                    source: "a".to_string(),
                    target: "b".to_string(),
                    key: None,
                    direction: Some(Direction::Reverse),
                },
            ]
        });
        CycleReport::new(
            summary(GraphKind::MultiDiGraph),
            Findings::Cycle {
                edges,
                orientation: Orientation::Ignore,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_cycle_count_per_findings() {
        assert_eq!(basis_report(&[&["a", "b", "c"]]).cycle_count(), 1);
        assert_eq!(cycle_report(true).cycle_count(), 1);
        assert!(!cycle_report(false).has_cycles());

        let chords = CycleReport::new(
            summary(GraphKind::Graph),
            Findings::Chords {
                tree: vec![],
                chords: vec![],
            },
        );
        assert_eq!(chords.command(), "chords");
        assert!(!chords.has_cycles());
    }

    #[test]
    fn test_edge_summaries_keep_keys_for_multigraphs() {
        let mut graph: CycleGraph<String> = CycleGraph::multigraph();
        graph.add_edge("a".to_string(), "b".to_string());
        graph.add_edge("a".to_string(), "b".to_string());

        let edges = EdgeSummary::all(&graph);
        assert_eq!(edges[0].key, Some(0));
        assert_eq!(edges[1].key, Some(1));
        assert_eq!(edges[1].to_string(), "(a, b, 1)");
    }
}
