use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(dotweave::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct DescriptionParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DotweaveError {
    #[error("Invalid value '{value}' for property '{property}', expected one of: {expected}")]
    #[diagnostic(
        code(dotweave::invalid_enum_value),
        help("Enumerated properties accept only the listed Graphviz keywords")
    )]
    InvalidEnumValue {
        property: String,
        value: String,
        expected: String,
    },

    #[error("Invalid value '{value}' for boolean property '{property}'")]
    #[diagnostic(
        code(dotweave::invalid_bool_value),
        help("Boolean properties accept only 'true' or 'false'")
    )]
    InvalidBoolValue { property: String, value: String },

    #[error("Invalid property name '{name}'")]
    #[diagnostic(
        code(dotweave::invalid_property_name),
        help("Property names start with a letter or '_' and contain only letters, digits and '_'")
    )]
    InvalidPropertyName { name: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(dotweave::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    DescriptionParseError(Box<DescriptionParseError>),

    #[error("JSON deserialization error")]
    #[diagnostic(
        code(dotweave::json_error),
        help("Check the JSON graph description for syntax or schema errors")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(dotweave::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dotweave::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
