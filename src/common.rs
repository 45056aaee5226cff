//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Input arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Graph description file (TOML, or JSON with a .json extension)
    #[arg(value_name = "FILE", env = "DOTWEAVE_INPUT")]
    pub input: PathBuf,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DotweaveError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DotweaveError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DotweaveError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Shorthand for the "missing required field" error every builder returns
pub(crate) fn missing_field(field: &str) -> crate::error::DotweaveError {
    crate::error::DotweaveError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
