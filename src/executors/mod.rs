//! Command executors that handle the actual logic for each command

pub mod basis;
pub mod chords;
pub mod circuits;
pub mod find;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::GraphInput;
use crate::graph::CycleGraph;
use crate::progress::ProgressReporter;
use crate::reports::{CycleReport, HumanReportGenerator, JsonReportGenerator, ReportGenerator};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Read the graph file, reporting progress when attached to a terminal
pub(crate) fn load_input(
    input: &GraphInput,
    progress: Option<&mut ProgressReporter>,
) -> Result<CycleGraph<String>> {
    let Some(progress) = progress else {
        return input
            .load()
            .wrap_err_with(|| format!("Failed to load graph from {}", input.path.display()));
    };

    progress.start_loading(&input.path);
    let graph = input
        .load()
        .wrap_err_with(|| format!("Failed to load graph from {}", input.path.display()))?;
    progress.finish_loading(graph.kind(), graph.node_count(), graph.edge_count());
    Ok(graph)
}

/// Render `report` in the requested format on stdout
pub(crate) fn print_report(
    report: &CycleReport,
    format: OutputFormat,
    max_cycles: Option<usize>,
) -> Result<()> {
    let report_result = match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(report),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(report),
    };

    match report_result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            return Err(e)
                .into_diagnostic()
                .wrap_err("Failed to generate report");
        }
    }
    Ok(())
}

/// Status line printed on stderr before a command starts
pub(crate) fn announce(what: &str) {
    eprintln!("{} {}...\n", style("🎡").cyan(), what);
}
