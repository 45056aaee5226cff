//! # Configuration Module
//!
//! This module provides configuration structures for the dotweave commands.
//! Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **RenderConfig**: Configuration for the `render` command
//! - **CheckConfig**: Configuration for the `check` command
//!
//! ## Example
//!
//! ```
//! use dotweave::common::ConfigBuilder;
//! use dotweave::config::RenderConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig::builder()
//!     .with_input("jobs.toml".into())
//!     .with_output(Some("jobs.dot".into()))
//!     .with_indent(4)
//!     .build()?;
//!
//! assert_eq!(config.render_options().indent, 4);
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod render;

pub use check::CheckConfig;
pub use render::RenderConfig;
