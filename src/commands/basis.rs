//! Basis command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::BasisConfig;
use crate::error::FerrisCyclesError;

impl FromCommand for BasisConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisCyclesError> {
        match command {
            Commands::Basis {
                common,
                format,
                cycle_display,
                root,
                matrix,
                error_on_cycles,
            } => BasisConfig::builder()
                .with_input(common.input())
                .with_format(format.format)
                .with_root(root)
                .with_matrix(matrix)
                .with_max_cycles(cycle_display.max_cycles)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(FerrisCyclesError::ConfigurationError {
                message: "Invalid command type for BasisConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BasisConfig);

/// Execute the basis command for computing a fundamental cycle basis
pub fn execute_basis_command(command: Commands) -> Result<()> {
    let config = BasisConfig::from_command(command)
        .wrap_err("Failed to parse basis command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::basis::BasisExecutor;
    BasisExecutor::execute(config)
}
