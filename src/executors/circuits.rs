//! Circuits command executor

use miette::{Result, WrapErr};

use crate::config::CircuitsConfig;
use crate::detector::{recursive_simple_cycles, simple_cycles};
use crate::executors::{CommandExecutor, announce, load_input, print_report};
use crate::graph::CycleGraph;
use crate::progress::ProgressReporter;
use crate::reports::{CycleReport, Findings, GraphSummary};

pub struct CircuitsExecutor;

/// Pull circuits from the lazy enumeration until it ends or `limit` is hit.
///
/// Returns the circuits and whether more were left when the limit stopped it.
fn stream_circuits(
    graph: &CycleGraph<String>,
    limit: Option<usize>,
    progress: Option<&ProgressReporter>,
) -> Result<(Vec<Vec<String>>, bool)> {
    let mut circuits = Vec::new();
    for circuit in simple_cycles(graph).wrap_err("Failed to enumerate circuits")? {
        if limit.is_some_and(|limit| circuits.len() >= limit) {
            return Ok((circuits, true));
        }
        circuits.push(circuit);
        if let Some(p) = progress {
            p.circuit_found(circuits.len());
        }
    }
    Ok((circuits, false))
}

impl CommandExecutor for CircuitsExecutor {
    type Config = CircuitsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        announce("Enumerating elementary circuits");

        let mut progress = ProgressReporter::for_terminal();
        let graph = load_input(&config.input, progress.as_mut())?;

        if let Some(p) = progress.as_mut() {
            p.start_enumeration();
        }

        let (circuits, truncated) = if config.recursive {
            let circuits = recursive_simple_cycles(&graph)
                .wrap_err("Failed to enumerate circuits")?;
            (circuits, false)
        } else {
            stream_circuits(&graph, config.limit, progress.as_ref())?
        };

        if let Some(p) = progress.as_mut() {
            p.finish_enumeration();
            p.finish_analysis(circuits.len(), "circuit");
        }

        let report = CycleReport::new(
            GraphSummary::new(config.input.path.display().to_string(), &graph),
            Findings::Circuits {
                circuits,
                truncated,
                recursive: config.recursive,
            },
        );
        print_report(&report, config.format, config.max_cycles)?;

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;

    fn ring(size: usize) -> CycleGraph<String> {
        CycleGraph::from_edges(
            GraphKind::DiGraph,
            (0..size).map(|i| (i.to_string(), ((i + 1) % size).to_string())),
        )
    }

    #[test]
    fn test_stream_without_limit_is_exhaustive() {
        let mut graph = ring(3);
        graph.add_edge("0".to_string(), "2".to_string());

        let (circuits, truncated) = stream_circuits(&graph, None, None).unwrap();
        assert_eq!(circuits.len(), 2);
        assert!(!truncated);
    }

    #[test]
    fn test_stream_stops_at_limit() {
        let mut graph = ring(3);
        graph.add_edge("0".to_string(), "2".to_string());

        let (circuits, truncated) = stream_circuits(&graph, Some(1), None).unwrap();
        assert_eq!(circuits.len(), 1);
        assert!(truncated);
    }

    #[test]
    fn test_limit_equal_to_total_is_not_truncated() {
        let (circuits, truncated) = stream_circuits(&ring(4), Some(1), None).unwrap();
        assert_eq!(circuits.len(), 1);
        assert!(!truncated);
    }

    #[test]
    fn test_undirected_graph_is_rejected() {
        let graph: CycleGraph<String> = CycleGraph::graph();
        assert!(stream_circuits(&graph, None, None).is_err());
    }
}
