use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};
use crate::graph::Orientation;

#[derive(Parser)]
#[command(
    name = "ferris-cycles",
    about = "🎡 Find, enumerate and certify cycles in graphs",
    long_about = "ferris-cycles reads a graph from a JSON or TOML file and reports its cycles: \
                  a fundamental cycle basis for undirected graphs, every elementary circuit of \
                  a directed graph, or a single witness cycle under a chosen edge orientation.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a fundamental cycle basis of an undirected graph
    ///
    /// Every cycle of the graph is a symmetric difference of basis cycles.
    /// The basis has one cycle per chord of a spanning forest.
    #[command(
        long_about = "Compute a fundamental cycle basis of an undirected graph or multigraph \
                      with Paton's algorithm. Parallel edges contribute two-node cycles and \
                      self-loops one-node cycles. With --matrix the signed edge-by-cycle \
                      incidence matrix is reported as well."
    )]
    Basis {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Node whose component is walked first
        #[arg(long, value_name = "NODE", env = "FERRIS_CYCLES_ROOT")]
        root: Option<String>,

        /// Also report the signed cycle matrix
        #[arg(long, env = "FERRIS_CYCLES_MATRIX")]
        matrix: bool,

        /// Exit with error code if cycles found
        #[arg(long, env = "FERRIS_CYCLES_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// List the elementary circuits of a directed graph
    ///
    /// Circuits are streamed with Johnson's algorithm. Use --limit on graphs
    /// that may hold a very large number of circuits.
    #[command(
        long_about = "Enumerate every elementary circuit of a directed graph or multigraph with \
                      Johnson's algorithm. Circuits are produced lazily and --limit stops the \
                      enumeration early. --recursive materializes all circuits at once in \
                      Johnson's original node order instead, which is useful for comparison."
    )]
    Circuits {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Materialize all circuits at once
        #[arg(long, env = "FERRIS_CYCLES_RECURSIVE", conflicts_with = "limit")]
        recursive: bool,

        /// Stop after this many circuits
        #[arg(long, value_name = "N", env = "FERRIS_CYCLES_LIMIT")]
        limit: Option<usize>,

        /// Exit with error code if cycles found
        #[arg(long, env = "FERRIS_CYCLES_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Find one cycle by depth-first traversal
    ///
    /// Reports the edges of the first cycle met, or that the graph is
    /// acyclic from the given sources.
    #[command(
        long_about = "Search for a single cycle with a depth-first traversal of edges. Directed \
                      edges are followed as stored (original), backwards (reverse) or either \
                      way (ignore), in which case every reported edge says which way it was \
                      walked. Without --source every node is tried in file order."
    )]
    Find {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Node to start from; repeat to try several in order
        #[arg(long = "source", value_name = "NODE")]
        sources: Vec<String>,

        /// How directed edges may be traversed
        #[arg(
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_ORIENTATION,
            env = "FERRIS_CYCLES_ORIENTATION"
        )]
        orientation: Orientation,

        /// Exit with error code if a cycle is found
        #[arg(long, env = "FERRIS_CYCLES_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Split the edges into a spanning forest and its chords
    ///
    /// Each chord closes exactly one fundamental cycle.
    Chords {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if the graph has any chord
        #[arg(long, env = "FERRIS_CYCLES_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_find_with_sources() {
        let cli = Cli::try_parse_from([
            "ferris-cycles",
            "find",
            "graph.json",
            "--source",
            "a",
            "--source",
            "b",
            "--orientation",
            "ignore",
        ])
        .unwrap();

        match cli.command {
            Commands::Find {
                common,
                sources,
                orientation,
                ..
            } => {
                assert_eq!(common.graph, std::path::PathBuf::from("graph.json"));
                assert_eq!(sources, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(orientation, Orientation::Ignore);
            }
            _ => panic!("Expected find command"),
        }
    }

    #[test]
    fn test_recursive_conflicts_with_limit() {
        let result = Cli::try_parse_from([
            "ferris-cycles",
            "circuits",
            "graph.json",
            "--recursive",
            "--limit",
            "3",
        ]);
        assert!(result.is_err());
    }
}
