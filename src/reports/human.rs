//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{CycleReport, EdgeSummary, Findings, MatrixFindings, ReportGenerator};
use crate::error::FerrisCyclesError;
use crate::graph::{Orientation, TraversedEdge};
use crate::utils::string::{format_cycle, pluralize};

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }

    fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.max_cycles {
            Some(limit) if limit < items.len() => &items[..limit],
            _ => items,
        }
    }

    fn write_truncation(
        &self,
        output: &mut String,
        total: usize,
        noun: &str,
    ) -> Result<(), FerrisCyclesError> {
        if let Some(limit) = self.max_cycles.filter(|&limit| limit < total) {
            writeln!(
                output,
                "\n{} Showing {} of {} {}. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total).yellow(),
                pluralize(noun, total)
            )?;
        }
        Ok(())
    }

    fn write_cycles(
        &self,
        output: &mut String,
        cycles: &[Vec<String>],
        noun: &str,
    ) -> Result<(), FerrisCyclesError> {
        for (i, cycle) in self.visible(cycles).iter().enumerate() {
            writeln!(
                output,
                "{} Cycle #{} ({} {})",
                style("🔄").yellow(),
                i + 1,
                cycle.len(),
                pluralize("node", cycle.len())
            )?;
            writeln!(
                output,
                "  {} {}\n",
                style("→").dim(),
                style(format_cycle(cycle)).bold()
            )?;
        }
        self.write_truncation(output, cycles.len(), noun)
    }

    fn write_basis(
        &self,
        output: &mut String,
        cycles: &[Vec<String>],
        matrix: Option<&MatrixFindings>,
    ) -> Result<(), FerrisCyclesError> {
        if cycles.is_empty() {
            writeln!(
                output,
                "\n{} The cycle basis is empty: the graph is a forest.",
                style("✅").green().bold()
            )?;
        } else {
            write!(
                output,
                "\n{} Found {} fundamental {}:\n\n",
                style("❌").red().bold(),
                style(cycles.len()).red().bold(),
                pluralize("cycle", cycles.len())
            )?;
            self.write_cycles(output, cycles, "cycle")?;
        }

        if let Some(findings) = matrix {
            write_matrix(output, findings)?;
        }

        if !cycles.is_empty() {
            writeln!(
                output,
                "\n{} Every cycle of the graph is a symmetric difference of the cycles above.",
                style("💡").yellow()
            )?;
        }
        Ok(())
    }

    fn write_circuits(
        &self,
        output: &mut String,
        circuits: &[Vec<String>],
        truncated: bool,
    ) -> Result<(), FerrisCyclesError> {
        if circuits.is_empty() {
            writeln!(
                output,
                "\n{} No circuits: the graph is acyclic.",
                style("✅").green().bold()
            )?;
            return Ok(());
        }

        write!(
            output,
            "\n{} Found {} elementary {}:\n\n",
            style("❌").red().bold(),
            style(circuits.len()).red().bold(),
            pluralize("circuit", circuits.len())
        )?;
        self.write_cycles(output, circuits, "circuit")?;

        if truncated {
            writeln!(
                output,
                "\n{} Enumeration stopped after {} {}. Raise --limit to continue.",
                style("⚠").yellow().bold(),
                circuits.len(),
                pluralize("circuit", circuits.len())
            )?;
        }
        Ok(())
    }

    fn write_chords(
        &self,
        output: &mut String,
        tree: &[EdgeSummary],
        chords: &[EdgeSummary],
    ) -> Result<(), FerrisCyclesError> {
        writeln!(
            output,
            "\n{} Spanning forest with {} {}",
            style("🌲").green(),
            style(tree.len()).bold(),
            pluralize("edge", tree.len())
        )?;

        if chords.is_empty() {
            writeln!(
                output,
                "{} No chords: every edge belongs to the forest.",
                style("✅").green().bold()
            )?;
            return Ok(());
        }

        writeln!(
            output,
            "{} {} {} outside the forest:\n",
            style("❌").red().bold(),
            style(chords.len()).red().bold(),
            pluralize("chord", chords.len())
        )?;
        for chord in self.visible(chords) {
            writeln!(output, "  {} {}", style("•").dim(), style(chord).yellow())?;
        }
        self.write_truncation(output, chords.len(), "chord")?;

        writeln!(
            output,
            "\n{} Removing every chord leaves the graph acyclic.",
            style("💡").yellow()
        )?;
        Ok(())
    }
}

fn write_found_cycle(
    output: &mut String,
    edges: Option<&[TraversedEdge<String>]>,
    orientation: Orientation,
) -> Result<(), FerrisCyclesError> {
    let Some(edges) = edges else {
        writeln!(
            output,
            "\n{} No cycle found following edges in {} orientation.",
            style("✅").green().bold(),
            orientation
        )?;
        return Ok(());
    };

    write!(
        output,
        "\n{} Found a cycle of {} {}:\n\n",
        style("❌").red().bold(),
        style(edges.len()).red().bold(),
        pluralize("edge", edges.len())
    )?;
    for edge in edges {
        writeln!(output, "  {} {}", style("→").dim(), style(edge).yellow())?;
    }
    Ok(())
}

fn write_matrix(output: &mut String, findings: &MatrixFindings) -> Result<(), FerrisCyclesError> {
    let matrix = &findings.matrix;
    writeln!(
        output,
        "\n{} Cycle matrix ({} {} × {} {}):\n",
        style("🔢").cyan(),
        matrix.rows(),
        pluralize("edge", matrix.rows()),
        matrix.columns(),
        pluralize("cycle", matrix.columns())
    )?;

    let labels: Vec<String> = findings.edges.iter().map(ToString::to_string).collect();
    let width = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);

    for (row, label) in labels.iter().enumerate() {
        write!(output, "  {label:<width$} ")?;
        for entry in matrix.row(row).unwrap_or_default() {
            write!(output, " {entry:>2}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, FerrisCyclesError> {
        let mut output = String::new();

        writeln!(
            output,
            "{} {} ({}, {} {}, {} {})",
            style("📄").blue(),
            style(&report.graph.path).bold(),
            report.graph.kind,
            report.graph.nodes,
            pluralize("node", report.graph.nodes),
            report.graph.edges,
            pluralize("edge", report.graph.edges)
        )?;

        match &report.findings {
            Findings::Basis { cycles, matrix } => {
                self.write_basis(&mut output, cycles, matrix.as_ref())?
            }
            Findings::Circuits {
                circuits,
                truncated,
                ..
            } => self.write_circuits(&mut output, circuits, *truncated)?,
            Findings::Cycle { edges, orientation } => {
                write_found_cycle(&mut output, edges.as_deref(), *orientation)?
            }
            Findings::Chords { tree, chords } => self.write_chords(&mut output, tree, chords)?,
        }

        Ok(output)
    }
}
