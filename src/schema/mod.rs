//! Schema primitives for IRS e-file form tables.
//!
//! Column and table definitions, dynamic rows, Arrow conversion, SQL DDL and
//! stored-schema compatibility checks. The per-form declarations built from
//! these live in [`crate::catalog`].

pub mod batch;
pub mod compat;
pub mod ddl;
pub mod field;
pub mod table;
pub mod value;

pub use batch::{records_from_batch, records_to_batch};
pub use compat::{SchemaCompatibilityReport, SchemaIssue, check_schema};
pub use ddl::{SqlDialect, catalog_ddl, create_table_sql};
pub use field::{
    ColumnDefinition, DATE_LENGTH, DECIMAL_PRECISION, DECIMAL_SCALE, DEFAULT_MAX_LENGTH,
    EIN_MAX_LENGTH, FieldType, OBJECT_ID_MAX_LENGTH, abbreviate_element, column_name_for, relative_path,
};
pub use table::{FormKind, FormTable, TableDefinition, TableDefinitionBuilder};
pub use value::{ColumnValue, FieldValue, FilingKey, Record, format_decimal};
