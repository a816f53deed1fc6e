//! Find command executor

use miette::{Result, WrapErr};

use crate::config::FindCycleConfig;
use crate::detector::find_cycle;
use crate::error::CycleError;
use crate::executors::{CommandExecutor, announce, load_input, print_report};
use crate::progress::ProgressReporter;
use crate::reports::{CycleReport, Findings, GraphSummary};

pub struct FindExecutor;

impl CommandExecutor for FindExecutor {
    type Config = FindCycleConfig;

    fn execute(config: Self::Config) -> Result<()> {
        announce(&format!(
            "Searching for a cycle ({} orientation)",
            config.orientation
        ));

        let mut progress = ProgressReporter::for_terminal();
        let graph = load_input(&config.input, progress.as_mut())?;

        if let Some(p) = progress.as_ref() {
            p.start_analysis("Traversing edges depth-first");
        }

        let sources = (!config.sources.is_empty()).then_some(config.sources.as_slice());
        let edges = match find_cycle(&graph, sources, config.orientation) {
            Ok(edges) => Some(edges),
            Err(CycleError::NoCycleFound) => None,
            Err(e) => return Err(e).wrap_err("Failed to search for a cycle"),
        };

        if let Some(p) = progress.as_ref() {
            p.finish_analysis(usize::from(edges.is_some()), "cycle");
        }

        let report = CycleReport::new(
            GraphSummary::new(config.input.path.display().to_string(), &graph),
            Findings::Cycle {
                edges,
                orientation: config.orientation,
            },
        );
        print_report(&report, config.format, None)?;

        // Exit with error code if a cycle was found and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
