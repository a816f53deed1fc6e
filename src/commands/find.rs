//! Find command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::FindCycleConfig;
use crate::error::FerrisCyclesError;

impl FromCommand for FindCycleConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisCyclesError> {
        match command {
            Commands::Find {
                common,
                format,
                sources,
                orientation,
                error_on_cycles,
            } => FindCycleConfig::builder()
                .with_input(common.input())
                .with_format(format.format)
                .with_sources(sources)
                .with_orientation(orientation)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(FerrisCyclesError::ConfigurationError {
                message: "Invalid command type for FindCycleConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(FindCycleConfig);

/// Execute the find command for locating a single cycle
pub fn execute_find_command(command: Commands) -> Result<()> {
    let config = FindCycleConfig::from_command(command)
        .wrap_err("Failed to parse find command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::find::FindExecutor;
    FindExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;
    use crate::graph::Orientation;

    #[test]
    fn test_find_config_from_cli() {
        let cli = Cli::try_parse_from([
            "ferris-cycles",
            "find",
            "graph.json",
            "--source",
            "x",
            "--orientation",
            "reverse",
        ])
        .unwrap();

        let config = FindCycleConfig::try_from(cli.command).unwrap();
        assert_eq!(config.sources, vec!["x".to_string()]);
        assert_eq!(config.orientation, Orientation::Reverse);
    }
}
