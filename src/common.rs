//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::GraphInput;
use crate::graph::InputFormat;

/// Graph file arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Graph file to analyze (JSON or TOML)
    #[arg(value_name = "GRAPH", env = "FERRIS_CYCLES_GRAPH")]
    pub graph: PathBuf,

    /// Format of the graph file (guessed from the extension by default)
    #[arg(long, value_enum, env = "FERRIS_CYCLES_INPUT_FORMAT")]
    pub input_format: Option<InputFormat>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "FERRIS_CYCLES_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "FERRIS_CYCLES_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl CommonArgs {
    pub fn input(&self) -> GraphInput {
        GraphInput::new(self.graph.clone(), self.input_format)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::FerrisCyclesError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands)
    -> Result<Self, crate::error::FerrisCyclesError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::FerrisCyclesError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(name: &str) -> crate::error::FerrisCyclesError {
    crate::error::FerrisCyclesError::ConfigurationError {
        message: format!("Missing required field: {name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_args_input() {
        let args = CommonArgs {
            graph: PathBuf::from("graphs/ring.toml"),
            input_format: None,
        };

        let input = args.input();
        assert_eq!(input.path, PathBuf::from("graphs/ring.toml"));
        assert_eq!(input.resolved_format(), InputFormat::Toml);
    }

    #[test]
    fn test_explicit_input_format_wins() {
        let args = CommonArgs {
            graph: PathBuf::from("graph.txt"),
            input_format: Some(InputFormat::Toml),
        };
        assert_eq!(args.input().resolved_format(), InputFormat::Toml);
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing_field("graph").to_string(),
            "Configuration error: Missing required field: graph"
        );
    }
}
