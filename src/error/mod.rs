//! Error handling for the IRS 990 schema catalog and ingestion pipeline.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

use crate::ingest::validate::ValidationIssue;

/// Specialized error type for catalog, ingestion and storage operations
#[derive(Debug, thiserror::Error)]
pub enum Irs990Error {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed XML in a return
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error building or reading Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error writing or reading Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error producing JSON output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A row is missing part of its `(object_id, ein)` key
    #[error("Missing {field} for filing {object_id}")]
    MissingKey {
        object_id: String,
        field: &'static str,
    },

    /// No table with this name exists in the catalog
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// No form or schedule matches this name
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// No SQL dialect matches this name
    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    /// No column with this name exists in the table
    #[error("Unknown column {column} in table {table}")]
    UnknownColumn { table: String, column: String },

    /// A value or array does not have the type its column declares
    #[error("Type mismatch in {table}.{column}: expected {expected}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: String,
    },

    /// A row was converted with the definition of another table
    #[error("Row belongs to table {found}, expected {expected}")]
    TableMismatch { expected: String, found: String },

    /// A value violates its column's type or length constraint (strict mode)
    #[error("Validation error: {0}")]
    Validation(ValidationIssue),

    /// The document is not a recognizable IRS e-file return
    #[error("Invalid filing {}: {message}", path.display())]
    InvalidFiling { path: PathBuf, message: String },

    /// A stored file cannot be read as the table it claims to hold
    #[error("Incompatible schema for table {table}: {details}")]
    IncompatibleSchema { table: String, details: String },

    /// Task join failure in the async pipeline
    #[error("Task error: {0}")]
    Task(String),
}

impl Irs990Error {
    /// Build an `InvalidFiling` error
    pub fn invalid_filing(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidFiling {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for catalog, ingestion and storage operations
pub type Result<T> = std::result::Result<T, Irs990Error>;
