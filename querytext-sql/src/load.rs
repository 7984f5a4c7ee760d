//! Loading AST documents from disk.
//!
//! JSON maps directly onto the serde shape of [`Statement`]. YAML is read
//! into a generic value first so enums can be written as single-key maps
//! (`select: {...}`) instead of YAML tags.

use std::path::Path;

use crate::ast::Statement;
use crate::error::AstError;

/// Serialization format of an AST document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<DocumentFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Read and parse the AST document at `path`.
pub fn load_statement(path: &Path) -> Result<Statement, AstError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| AstError::UnsupportedFormat { path: path.to_path_buf() })?;
    let contents = std::fs::read_to_string(path).map_err(|source| AstError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, bytes = contents.len(), "loading AST document");
    parse_statement(&contents, format, path)
}

/// Parse and validate `contents` as an AST document. `path` is used for
/// error context only.
pub fn parse_statement(
    contents: &str,
    format: DocumentFormat,
    path: &Path,
) -> Result<Statement, AstError> {
    let json_err = |source| AstError::Json { path: path.to_path_buf(), source };
    let stmt: Statement = match format {
        DocumentFormat::Json => serde_json::from_str(contents).map_err(json_err)?,
        DocumentFormat::Yaml => {
            let value: serde_json::Value =
                serde_yaml::from_str(contents).map_err(|source| AstError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?;
            serde_json::from_value(value).map_err(json_err)?
        }
    };
    stmt.validate()
        .map_err(|source| AstError::Invalid { path: path.to_path_buf(), source })?;
    Ok(stmt)
}
