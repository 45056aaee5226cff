//! Render command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::graph::RenderOptions;

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Graph description to read
    pub input: PathBuf,
    /// Destination file; stdout when `None`
    pub output: Option<PathBuf>,
    /// Spaces per nesting level in the DOT output
    pub indent: usize,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new().with_indent(self.indent)
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    input: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
    indent: Option<usize>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            indent: None,
        }
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, crate::error::DotweaveError> {
        Ok(RenderConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.unwrap_or_default(),
            indent: self
                .indent
                .unwrap_or(crate::constants::defaults::INDENT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::DotweaveError;

    #[test]
    fn test_builder_defaults() {
        let config = RenderConfig::builder()
            .with_input(PathBuf::from("g.toml"))
            .build()
            .unwrap();

        assert_eq!(config.input, PathBuf::from("g.toml"));
        assert_eq!(config.output, None);
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_builder_requires_input() {
        let err = RenderConfig::builder().with_indent(4).build().unwrap_err();

        match err {
            DotweaveError::ConfigurationError { message } => {
                assert_eq!(message, "Missing required field: input");
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}
