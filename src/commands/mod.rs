//! Command implementations for the dotweave CLI
//!
//! This module contains the implementations for each CLI command:
//! - render: Render a graph description as DOT
//! - check: Validate a graph description without rendering it

pub mod check;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Check { .. } => check::execute_check_command(command),
    }
}
