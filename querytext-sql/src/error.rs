//! Error types for querytext-sql.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading AST documents.
#[derive(Debug, Error)]
pub enum AstError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or does not match the AST shape.
    #[error("failed to parse JSON AST at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document is not valid YAML.
    #[error("failed to parse YAML AST at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but describes a statement that cannot render as SQL.
    #[error("invalid AST at {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: AstViolation,
    },

    /// Extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported AST document format at {path}; expected .json, .yaml or .yml")]
    UnsupportedFormat { path: PathBuf },
}

/// A well-typed AST that would render as invalid SQL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstViolation {
    #[error("bind variable name {0:?} must be a plain identifier")]
    BindName(String),

    #[error("float literal {0} is not finite")]
    NonFiniteFloat(f64),

    #[error("{0} must not be empty")]
    EmptyList(&'static str),
}
