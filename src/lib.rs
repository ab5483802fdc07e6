//! Typed schema catalog for IRS Form 990, 990-EZ, 990-PF and Schedules A-R,
//! with ingestion of e-file XML returns into per-table Parquet files.
//!
//! Every form part and repeating group is declared as a struct deriving
//! [`FormTable`]; the [`Catalog`] collects them and renders SQL DDL, Arrow
//! schemas and JSON descriptions. The [`ingest`] module maps returns onto
//! those tables.

pub mod catalog;
pub mod config;
pub mod error;
pub mod ingest;
pub mod io;
pub mod schema;
pub mod utils;

// Core types
pub use catalog::{Catalog, CatalogIssue};
pub use config::{IngestConfig, OutputCompression};
pub use error::{Irs990Error, Result};
pub use schema::{
    ColumnDefinition, FieldType, FieldValue, FilingKey, FormKind, FormTable, Record, SqlDialect,
    TableDefinition,
};

// Ingestion
pub use ingest::{
    Extractor, Filing, FilingRows, IngestSummary, ValidationIssue, ingest_directory,
    ingest_directory_async, ingest_file,
};

// Storage
pub use io::{TableWriterSet, find_xml_files, read_table, read_tables_async};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;
