//! Circuits command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CircuitsConfig;
use crate::error::FerrisCyclesError;

impl FromCommand for CircuitsConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisCyclesError> {
        match command {
            Commands::Circuits {
                common,
                format,
                cycle_display,
                recursive,
                limit,
                error_on_cycles,
            } => CircuitsConfig::builder()
                .with_input(common.input())
                .with_format(format.format)
                .with_recursive(recursive)
                .with_limit(limit)
                .with_max_cycles(cycle_display.max_cycles)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(FerrisCyclesError::ConfigurationError {
                message: "Invalid command type for CircuitsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CircuitsConfig);

/// Execute the circuits command for enumerating elementary circuits
pub fn execute_circuits_command(command: Commands) -> Result<()> {
    let config = CircuitsConfig::from_command(command)
        .wrap_err("Failed to parse circuits command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::circuits::CircuitsExecutor;
    CircuitsExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_circuits_config_from_cli() {
        let cli = Cli::try_parse_from([
            "ferris-cycles",
            "circuits",
            "deps.json",
            "--limit",
            "50",
            "--max-cycles",
            "5",
            "--error-on-cycles",
        ])
        .unwrap();

        let config = CircuitsConfig::try_from(cli.command).unwrap();
        assert_eq!(config.limit, Some(50));
        assert_eq!(config.max_cycles, Some(5));
        assert!(config.error_on_cycles);
        assert!(!config.recursive);
    }
}
