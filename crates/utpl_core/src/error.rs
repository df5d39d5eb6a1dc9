//! Error types for template operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The variable name fails the name grammar, or the entry carries no
    /// usable value. Invalid static configuration, not a runtime condition.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Unsupported vars file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Vars file is not a mapping: {0}")]
    NotAMapping(PathBuf),

    #[error("Unsupported value for variable '{name}': {kind}")]
    UnsupportedValue { name: String, kind: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
