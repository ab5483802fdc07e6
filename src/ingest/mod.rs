//! Ingestion of IRS e-file XML returns into catalog tables
//!
//! A return is parsed into an element tree ([`xml`]), indexed by path
//! ([`filing`]), mapped onto catalog tables ([`extract`]) with per-value
//! checks ([`validate`]), and written to one Parquet file per table.

pub mod extract;
pub mod filing;
pub mod validate;
pub mod xml;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use serde::Serialize;

pub use extract::{Extractor, FilingRows};
pub use filing::{Filing, FilingSummary, object_id_for_path};
pub use validate::{IssueKind, ValidationIssue, Validator, check_record, parse_value};
pub use xml::{Element, XmlDocument};

use crate::catalog::Catalog;
use crate::config::IngestConfig;
use crate::error::{Irs990Error, Result};
use crate::io::files::find_xml_files;
use crate::io::storage::{TableOutput, TableWriterSet};
use crate::utils::{
    create_main_progress_bar, create_spinner, finish_and_clear, finish_progress_bar,
    log_operation_complete, log_operation_start, log_validation_issues, log_warning,
};

/// Files parsed per parallel round before rows are handed to the writers
const FILES_PER_ROUND: usize = 256;

/// A return that could not be ingested
#[derive(Debug, Clone, Serialize)]
pub struct IngestFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of ingesting a directory
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestSummary {
    pub files_seen: usize,
    pub files_ingested: usize,
    pub files_failed: usize,
    pub rows_written: usize,
    pub issues: usize,
    pub tables: Vec<TableOutput>,
    pub failures: Vec<IngestFailure>,
    pub elapsed: Duration,
}

/// Parse one return file and extract its rows
pub fn ingest_file(path: &Path, extractor: &Extractor) -> Result<FilingRows> {
    let filing = Filing::from_path(path)?;
    extractor.extract(&filing)
}

/// Ingest every `.xml` return below `input` into Parquet tables in `output`
///
/// Returns are parsed in parallel on a pool of `config.threads` workers.
/// A return that fails to parse is logged and counted; in strict mode the
/// first failure aborts the run and removes the tables written so far.
pub fn ingest_directory(input: &Path, output: &Path, config: &IngestConfig) -> Result<IngestSummary> {
    let start = Instant::now();
    log_operation_start("Ingesting returns from", input);

    let files = find_xml_files(input)?;
    let mut summary = IngestSummary {
        files_seen: files.len(),
        ..IngestSummary::default()
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()
        .map_err(|e| Irs990Error::Task(format!("failed to build worker pool: {e}")))?;
    let extractor = Extractor::new(Catalog::global(), config);
    let mut writers = TableWriterSet::new(output, config)?;

    let pb = create_main_progress_bar(files.len() as u64, Some("returns"));
    let rounds = ingest_rounds(&files, &pool, &extractor, &pb, &mut writers, &mut summary, config);
    if let Err(e) = rounds {
        finish_progress_bar(&pb, Some("aborted"));
        if let Err(cleanup) = writers.discard() {
            log_warning(&format!("Could not remove partial tables ({cleanup})"), Some(output));
        }
        return Err(e);
    }
    finish_progress_bar(&pb, Some("done"));

    summary.rows_written = writers.row_count();
    let spinner = create_spinner(Some("closing table files"));
    let finished = writers.finish();
    finish_and_clear(&spinner);
    summary.tables = finished?;
    summary.elapsed = start.elapsed();

    log_operation_complete(
        "Ingested",
        input,
        summary.files_ingested,
        "returns",
        Some(summary.elapsed),
    );
    if summary.files_failed > 0 {
        log::warn!("{} returns could not be ingested", summary.files_failed);
    }
    if summary.issues > 0 {
        log::info!("{} values did not fit their columns", summary.issues);
    }

    Ok(summary)
}

/// Parse `files` round by round and hand their rows to `writers`
///
/// Stops at the first write error, or at the first failed return in strict
/// mode.
fn ingest_rounds(
    files: &[PathBuf],
    pool: &rayon::ThreadPool,
    extractor: &Extractor,
    pb: &ProgressBar,
    writers: &mut TableWriterSet,
    summary: &mut IngestSummary,
    config: &IngestConfig,
) -> Result<()> {
    for round in files.chunks(FILES_PER_ROUND) {
        let results: Vec<(&PathBuf, Result<FilingRows>)> = pool.install(|| {
            round
                .par_iter()
                .progress_with(pb.clone())
                .map(|path| (path, ingest_file(path, extractor)))
                .collect()
        });

        for (path, result) in results {
            match result {
                Ok(rows) => {
                    summary.files_ingested += 1;
                    summary.issues += rows.issues.len();
                    log_validation_issues(&rows.object_id, &rows.issues);
                    writers.write_records(rows.tables.into_values().flatten())?;
                }
                Err(e) if config.strict => return Err(e),
                Err(e) => {
                    log_warning(&format!("Skipping return ({e})"), Some(path));
                    summary.files_failed += 1;
                    summary.failures.push(IngestFailure {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Run [`ingest_directory`] on the blocking thread pool of the async runtime
pub async fn ingest_directory_async(
    input: PathBuf,
    output: PathBuf,
    config: IngestConfig,
) -> Result<IngestSummary> {
    tokio::task::spawn_blocking(move || ingest_directory(&input, &output, &config))
        .await
        .map_err(|e| Irs990Error::Task(e.to_string()))?
}
