//! Basis command executor

use miette::{Result, WrapErr};

use crate::config::BasisConfig;
use crate::detector::{cycle_basis, cycle_basis_matrix};
use crate::executors::{CommandExecutor, announce, load_input, print_report};
use crate::progress::ProgressReporter;
use crate::reports::{CycleReport, EdgeSummary, Findings, GraphSummary, MatrixFindings};

pub struct BasisExecutor;

impl CommandExecutor for BasisExecutor {
    type Config = BasisConfig;

    fn execute(config: Self::Config) -> Result<()> {
        announce("Computing a fundamental cycle basis");

        let mut progress = ProgressReporter::for_terminal();
        let graph = load_input(&config.input, progress.as_mut())?;

        if let Some(p) = progress.as_ref() {
            p.start_analysis("Walking spanning trees");
        }

        let cycles = cycle_basis(&graph, config.root.as_ref())
            .wrap_err("Failed to compute the cycle basis")?;

        let matrix = if config.matrix {
            let matrix =
                cycle_basis_matrix(&graph).wrap_err("Failed to compute the cycle matrix")?;
            Some(MatrixFindings {
                edges: EdgeSummary::all(&graph),
                matrix,
            })
        } else {
            None
        };

        if let Some(p) = progress.as_ref() {
            p.finish_analysis(cycles.len(), "fundamental cycle");
        }

        let report = CycleReport::new(
            GraphSummary::new(config.input.path.display().to_string(), &graph),
            Findings::Basis { cycles, matrix },
        );
        print_report(&report, config.format, config.max_cycles)?;

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
