//! Chords command executor

use miette::Result;

use crate::config::ChordsConfig;
use crate::detector::chords;
use crate::executors::{CommandExecutor, announce, load_input, print_report};
use crate::progress::ProgressReporter;
use crate::reports::{CycleReport, EdgeSummary, Findings, GraphSummary};

pub struct ChordsExecutor;

impl CommandExecutor for ChordsExecutor {
    type Config = ChordsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        announce("Splitting edges into a spanning forest and chords");

        let mut progress = ProgressReporter::for_terminal();
        let graph = load_input(&config.input, progress.as_mut())?;

        if let Some(p) = progress.as_ref() {
            p.start_analysis("Growing a spanning forest");
        }

        let split = chords(&graph);
        let tree = EdgeSummary::all(&split.tree);
        let chords = EdgeSummary::all(&split.chords);

        if let Some(p) = progress.as_ref() {
            p.finish_analysis(chords.len(), "chord");
        }

        let report = CycleReport::new(
            GraphSummary::new(config.input.path.display().to_string(), &graph),
            Findings::Chords { tree, chords },
        );
        print_report(&report, config.format, config.max_cycles)?;

        // Exit with error code if chords found and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
