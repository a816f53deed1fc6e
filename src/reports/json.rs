//! JSON format report generation

use serde_json::{Value, json};

use super::{CycleReport, Findings, ReportGenerator};
use crate::error::FerrisCyclesError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn findings_json(findings: &Findings) -> Value {
    match findings {
        Findings::Basis { cycles, matrix } => json!({
            "cycles": cycles,
            "matrix": matrix.as_ref().map(|findings| json!({
                "edges": findings.edges,
                "rows": findings.matrix.rows(),
                "columns": findings.matrix.columns(),
                "entries": (0..findings.matrix.rows())
                    .filter_map(|row| findings.matrix.row(row).map(<[i8]>::to_vec))
                    .collect::<Vec<_>>(),
                "chord_rows": findings.matrix.chord_rows(),
            })),
        }),
        Findings::Circuits {
            circuits,
            truncated,
            recursive,
        } => json!({
            "circuits": circuits,
            "truncated": truncated,
            "recursive": recursive,
        }),
        Findings::Cycle { edges, orientation } => json!({
            "orientation": orientation.to_string(),
            "cycle": edges,
        }),
        Findings::Chords { tree, chords } => json!({
            "tree": tree,
            "chords": chords,
        }),
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, FerrisCyclesError> {
        let report = json!({
            "command": report.command(),
            "graph": report.graph,
            "has_cycles": report.has_cycles(),
            "cycle_count": report.cycle_count(),
            "findings": findings_json(&report.findings),
        });

        serde_json::to_string_pretty(&report).map_err(FerrisCyclesError::Json)
    }
}
