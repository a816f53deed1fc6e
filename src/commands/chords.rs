//! Chords command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ChordsConfig;
use crate::error::FerrisCyclesError;

impl FromCommand for ChordsConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisCyclesError> {
        match command {
            Commands::Chords {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => ChordsConfig::builder()
                .with_input(common.input())
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(FerrisCyclesError::ConfigurationError {
                message: "Invalid command type for ChordsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ChordsConfig);

/// Execute the chords command for splitting edges into forest and chords
pub fn execute_chords_command(command: Commands) -> Result<()> {
    let config = ChordsConfig::from_command(command)
        .wrap_err("Failed to parse chords command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::chords::ChordsExecutor;
    ChordsExecutor::execute(config)
}
