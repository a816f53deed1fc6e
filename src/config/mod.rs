//! # Configuration Module
//!
//! This module provides configuration structures for all ferris-cycles
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **BasisConfig**: Configuration for the `basis` command
//! - **CircuitsConfig**: Configuration for the `circuits` command
//! - **FindCycleConfig**: Configuration for the `find` command
//! - **ChordsConfig**: Configuration for the `chords` command
//!
//! All of them read their graph through a shared [`GraphInput`].
//!
//! ## Example
//!
//! ```
//! use ferris_cycles::cli::OutputFormat;
//! use ferris_cycles::common::ConfigBuilder;
//! use ferris_cycles::config::{FindCycleConfig, GraphInput};
//! use ferris_cycles::graph::Orientation;
//!
//! let config = FindCycleConfig::builder()
//!     .with_input(GraphInput::new("graph.json".into(), None))
//!     .with_format(OutputFormat::Human)
//!     .with_orientation(Orientation::Ignore)
//!     .with_error_on_cycles(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.sources.is_empty());
//! ```

pub mod basis;
pub mod chords;
pub mod circuits;
pub mod common;
pub mod find;

pub use basis::BasisConfig;
pub use chords::ChordsConfig;
pub use circuits::CircuitsConfig;
pub use common::GraphInput;
pub use find::FindCycleConfig;
