//! Command implementations for ferris-cycles CLI
//!
//! This module contains the implementations for each CLI command:
//! - basis: Compute a fundamental cycle basis of an undirected graph
//! - circuits: Enumerate the elementary circuits of a directed graph
//! - find: Find a single cycle by depth-first traversal
//! - chords: Split the edges into a spanning forest and its chords

pub mod basis;
pub mod chords;
pub mod circuits;
pub mod find;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Basis { .. } => basis::execute_basis_command(command),
        Commands::Circuits { .. } => circuits::execute_circuits_command(command),
        Commands::Find { .. } => find::execute_find_command(command),
        Commands::Chords { .. } => chords::execute_chords_command(command),
    }
}
