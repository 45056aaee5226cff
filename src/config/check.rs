//! Check command configuration

use std::path::PathBuf;

use crate::common::missing_field;

/// Configuration for the check command
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Graph description to validate
    pub input: PathBuf,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    input: Option<PathBuf>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self { input: None }
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, crate::error::DotweaveError> {
        Ok(CheckConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
        })
    }
}
