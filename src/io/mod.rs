//! File discovery and Parquet storage

pub mod files;
pub mod storage;

pub use files::{find_parquet_files, find_xml_files};
pub use storage::{
    TableOutput, TableWriterSet, read_parquet, read_table, read_tables_async, table_for_file,
};
