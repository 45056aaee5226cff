//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::DotweaveError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, DotweaveError> {
        match command {
            Commands::Render {
                input,
                output,
                indent,
            } => RenderConfig::builder()
                .with_input(input.input)
                .with_output(output)
                .with_indent(indent)
                .build(),
            _ => Err(DotweaveError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for turning a description into DOT
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
