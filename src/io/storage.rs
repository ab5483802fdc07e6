//! Parquet storage of form tables
//!
//! Each table is written to `<output>/<table>.parquet` with the table's Arrow
//! schema, including its field and schema metadata, so stored files can be
//! matched back to their definitions.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::datatypes::Schema;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use futures::TryStreamExt;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::async_reader::ParquetRecordBatchStreamBuilder;
use parquet::file::properties::WriterProperties;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::{DEFAULT_BATCH_SIZE, IngestConfig};
use crate::error::{Irs990Error, Result};
use crate::schema::{Record, TableDefinition, check_schema, records_from_batch};
use crate::utils::{log_operation_complete, log_operation_start};

/// Result of writing one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOutput {
    pub table: String,
    pub path: PathBuf,
    pub rows: usize,
}

struct TableWriter {
    table: &'static TableDefinition,
    path: PathBuf,
    writer: ArrowWriter<File>,
    buffer: Vec<Record>,
    rows: usize,
}

impl TableWriter {
    fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let batch = self.table.to_batch(&self.buffer)?;
        self.writer.write(&batch)?;
        self.rows += self.buffer.len();
        self.buffer.clear();
        Ok(())
    }
}

/// One Parquet writer per table, opened on the first row for that table
pub struct TableWriterSet {
    output_dir: PathBuf,
    batch_size: usize,
    properties: WriterProperties,
    writers: BTreeMap<String, TableWriter>,
}

impl TableWriterSet {
    /// Create the output directory and an empty writer set
    pub fn new(output_dir: &Path, config: &IngestConfig) -> Result<Self> {
        fs::create_dir_all(output_dir)?;
        let properties = WriterProperties::builder()
            .set_compression(config.compression.to_parquet())
            .set_max_row_group_size(config.batch_size.max(1) * 4)
            .build();
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            batch_size: config.batch_size.max(1),
            properties,
            writers: BTreeMap::new(),
        })
    }

    /// Directory tables are written to
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Buffer rows, writing a batch whenever a table reaches the batch size
    ///
    /// Rows may belong to different tables.
    pub fn write_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Record>,
    {
        let batch_size = self.batch_size;
        for record in records {
            let writer = self.writer_for(record.definition())?;
            writer.buffer.push(record);
            if writer.buffer.len() >= batch_size {
                writer.flush()?;
            }
        }
        Ok(())
    }

    fn writer_for(&mut self, table: &'static TableDefinition) -> Result<&mut TableWriter> {
        if !self.writers.contains_key(table.name()) {
            let path = self.output_dir.join(format!("{}.parquet", table.name()));
            let file = File::create(&path)?;
            let writer =
                ArrowWriter::try_new(file, table.arrow_schema(), Some(self.properties.clone()))?;
            log::debug!("Opened {}", path.display());
            self.writers.insert(
                table.name().to_string(),
                TableWriter {
                    table,
                    path,
                    writer,
                    buffer: Vec::with_capacity(self.batch_size.min(1024)),
                    rows: 0,
                },
            );
        }
        self.writers
            .get_mut(table.name())
            .ok_or_else(|| Irs990Error::UnknownTable(table.name().to_string()))
    }

    /// Rows accepted so far, buffered or written
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.writers
            .values()
            .map(|writer| writer.rows + writer.buffer.len())
            .sum()
    }

    /// Drop every open writer and delete the files they were writing
    ///
    /// Used when a run aborts, so no unterminated Parquet files are left behind.
    pub fn discard(self) -> Result<()> {
        for (_, writer) in self.writers {
            let TableWriter { path, writer, .. } = writer;
            drop(writer);
            match fs::remove_file(&path) {
                Ok(()) => log::debug!("Removed partial {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Flush remaining rows and close every file
    pub fn finish(self) -> Result<Vec<TableOutput>> {
        let mut outputs = Vec::with_capacity(self.writers.len());
        for (name, mut writer) in self.writers {
            writer.flush()?;
            writer.writer.close()?;
            log::debug!("Wrote {} rows to {}", writer.rows, writer.path.display());
            outputs.push(TableOutput {
                table: name,
                path: writer.path,
                rows: writer.rows,
            });
        }
        Ok(outputs)
    }
}

/// Read every record batch of a Parquet file
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_operation_start("Reading parquet file", path);

    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build()?;
    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;

    log_operation_complete("Read", path, batches.len(), "batches", Some(start.elapsed()));
    Ok(batches)
}

/// The catalog table a stored file holds
///
/// Uses the `table` schema metadata written with every file, falling back to
/// the file stem.
pub fn table_for_file(path: &Path) -> Result<&'static TableDefinition> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(path)?)?;
    let name = builder
        .schema()
        .metadata()
        .get("table")
        .cloned()
        .or_else(|| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .unwrap_or_default();
    Catalog::global().require(&name)
}

/// Read a stored table back into rows
///
/// The file's schema is checked against `table` before any batch is read.
///
/// # Errors
/// `IncompatibleSchema` when the file's schema cannot be read as `table`
pub fn read_table(table: &'static TableDefinition, path: &Path) -> Result<Vec<Record>> {
    let start = Instant::now();
    log_operation_start("Reading table file", path);

    let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(path)?)?
        .with_batch_size(DEFAULT_BATCH_SIZE);
    ensure_compatible(table, builder.schema())?;

    let batches = builder
        .build()?
        .collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    let mut records = Vec::new();
    for batch in &batches {
        records.extend(records_from_batch(table, batch)?);
    }

    log_operation_complete("Read", path, records.len(), "rows", Some(start.elapsed()));
    Ok(records)
}

/// Check a stored file schema against the table it is read as
///
/// The `table` schema metadata must name `table`, and the columns must pass
/// [`check_schema`].
fn ensure_compatible(table: &TableDefinition, schema: &Schema) -> Result<()> {
    match schema.metadata().get("table") {
        Some(stored) if stored != table.name() => {
            return Err(Irs990Error::IncompatibleSchema {
                table: table.name().to_string(),
                details: format!("file holds table {stored}"),
            });
        }
        Some(_) => {}
        None => log::debug!("{}: stored file carries no table name", table.name()),
    }
    let report = check_schema(table, schema);
    for issue in &report.issues {
        log::debug!("{}: {issue}", table.name());
    }
    if report.compatible {
        Ok(())
    } else {
        Err(Irs990Error::IncompatibleSchema {
            table: table.name().to_string(),
            details: report.issues.iter().join("; "),
        })
    }
}

async fn read_table_async(path: PathBuf) -> Result<(&'static TableDefinition, Vec<Record>)> {
    let file = tokio::fs::File::open(&path).await?;
    let builder = ParquetRecordBatchStreamBuilder::new(file)
        .await?
        .with_batch_size(DEFAULT_BATCH_SIZE);
    let name = builder
        .schema()
        .metadata()
        .get("table")
        .cloned()
        .unwrap_or_default();
    let table = Catalog::global().require(&name)?;
    ensure_compatible(table, builder.schema())?;

    let batches = builder.build()?.try_collect::<Vec<_>>().await?;
    let mut records = Vec::new();
    for batch in &batches {
        records.extend(records_from_batch(table, batch)?);
    }
    Ok((table, records))
}

/// Read several stored tables concurrently, grouping rows by table name
pub async fn read_tables_async(paths: &[PathBuf]) -> Result<BTreeMap<String, Vec<Record>>> {
    let results = stream::iter(paths.to_vec())
        .map(read_table_async)
        .buffer_unordered(num_cpus::get())
        .collect::<Vec<_>>()
        .await;

    let mut tables: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    for result in results {
        let (table, records) = result?;
        tables
            .entry(table.name().to_string())
            .or_default()
            .extend(records);
    }
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schedule_o::SupplementalInformationDetail;
    use crate::schema::{FilingKey, FormTable};

    fn note(object_id: &str, text: &str) -> Record {
        SupplementalInformationDetail {
            object_id: object_id.to_string(),
            ein: "123456789".to_string(),
            explanation_txt: Some(text.to_string()),
            ..Default::default()
        }
        .to_record()
    }

    #[test]
    fn test_writer_set_flushes_batches_and_reads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IngestConfig::default().with_batch_size(2);
        let mut writers = TableWriterSet::new(dir.path(), &config).expect("writers");
        writers
            .write_records((0..5).map(|i| note(&format!("2019{i}"), "Explanation")))
            .expect("write");
        assert_eq!(writers.row_count(), 5);

        let outputs = writers.finish().expect("finish");
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].rows, 5);
        assert_eq!(outputs[0].table, "return_skedo_spplmntlinfrmtndtl");

        let table = table_for_file(&outputs[0].path).expect("table");
        let records = read_table(table, &outputs[0].path).expect("read");
        assert_eq!(records.len(), 5);
        assert_eq!(records[4].key(), &FilingKey::new("20194", "123456789"));
    }

    #[test]
    fn test_incompatible_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writers = TableWriterSet::new(dir.path(), &IngestConfig::default()).expect("writers");
        writers.write_records([note("1", "x")]).expect("write");
        let outputs = writers.finish().expect("finish");

        let other = Catalog::global().require("return_part_i").expect("table");
        match read_table(other, &outputs[0].path) {
            Err(Irs990Error::IncompatibleSchema { table, details }) => {
                assert_eq!(table, "return_part_i");
                assert!(details.contains("return_skedo_spplmntlinfrmtndtl"), "{details}");
            }
            other => panic!("expected IncompatibleSchema, got {other:?}"),
        }
    }

    #[test]
    fn test_discard_removes_partial_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IngestConfig::default().with_batch_size(1);
        let mut writers = TableWriterSet::new(dir.path(), &config).expect("writers");
        writers
            .write_records([note("1", "first"), note("2", "second")])
            .expect("write");
        assert_eq!(crate::io::find_parquet_files(dir.path()).expect("list").len(), 1);

        writers.discard().expect("discard");
        assert!(crate::io::find_parquet_files(dir.path()).expect("list").is_empty());
    }
}
