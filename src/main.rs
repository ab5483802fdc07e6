use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use irs990_schema::catalog::Catalog;
use irs990_schema::ingest::{Extractor, Filing};
use irs990_schema::io::{read_parquet, table_for_file};
use irs990_schema::schema::{SqlDialect, catalog_ddl};
use irs990_schema::utils::logging::console::{
    print_batch_summary, print_sample_rows, print_schema_info,
};
use irs990_schema::{IngestConfig, ingest_directory_async};
use log::info;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

const USAGE: &str = "usage: irs990 <command>

commands:
  catalog [--json]              list tables, or export the catalog as JSON
  describe <table>              show the columns of one table
  ddl [postgres|sqlite]         print CREATE TABLE statements
  parse <file.xml>              print the rows extracted from one return as JSON
  ingest <input> <output> [--strict]
                                write every return below <input> to Parquet tables
  inspect <file.parquet>        show the schema and first rows of a stored table";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{USAGE}");
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "catalog" => list_catalog(rest.iter().any(|arg| arg == "--json")),
        "describe" => describe(rest.first().context("describe needs a table name")?),
        "ddl" => {
            let dialect = match rest.first() {
                Some(name) => name.parse::<SqlDialect>()?,
                None => SqlDialect::default(),
            };
            print!("{}", catalog_ddl(Catalog::global(), dialect));
            Ok(())
        }
        "parse" => parse(Path::new(rest.first().context("parse needs a return file")?)),
        "ingest" => {
            let (Some(input), Some(output)) = (rest.first(), rest.get(1)) else {
                bail!("ingest needs an input and an output directory");
            };
            let strict = rest.iter().any(|arg| arg == "--strict");
            ingest(PathBuf::from(input), PathBuf::from(output), strict).await
        }
        "inspect" => inspect(Path::new(rest.first().context("inspect needs a Parquet file")?)),
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }
}

fn list_catalog(json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::global();
    if json {
        println!("{}", catalog.to_json()?);
        return Ok(());
    }

    let issues = catalog.check();
    for issue in &issues {
        log::warn!("Catalog issue: {issue}");
    }
    for form in catalog.forms() {
        println!("{form}");
        for table in catalog.tables_for_form(form) {
            let kind = table.group().map_or("single", |_| "repeating");
            println!(
                "  {:<40} {:<24} {:>4} columns  {kind}",
                table.name(),
                table.part(),
                table.columns().len()
            );
        }
    }
    println!(
        "{} tables, {} columns",
        catalog.len(),
        catalog.column_count()
    );
    Ok(())
}

fn describe(name: &str) -> anyhow::Result<()> {
    let table = Catalog::global().require(name)?;
    println!("{} ({}; {})", table.name(), table.form(), table.part());
    if !table.description().is_empty() {
        println!("{}", table.description());
    }
    if let Some(group) = table.group() {
        println!("one row per {group}");
    }
    if let Some(parent) = table.parent() {
        println!("parent: {parent}");
    }
    println!();
    for column in table.all_columns() {
        let length = column
            .max_length
            .map(|len| format!("({len})"))
            .unwrap_or_default();
        println!(
            "  {:<36} {}{length:<8} {}",
            column.name,
            column.field_type,
            column.comment()
        );
    }
    Ok(())
}

fn parse(path: &Path) -> anyhow::Result<()> {
    let config = IngestConfig::from_env();
    let filing =
        Filing::from_path(path).with_context(|| format!("reading {}", path.display()))?;
    info!(
        "Filing {} ({} forms, version {})",
        filing.object_id(),
        filing.forms().len(),
        filing.version().unwrap_or("unknown")
    );
    let rows = Extractor::new(Catalog::global(), &config).extract(&filing)?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

async fn ingest(input: PathBuf, output: PathBuf, strict: bool) -> anyhow::Result<()> {
    let mut config = IngestConfig::from_env();
    if strict {
        config = config.with_strict(true);
    }
    info!(
        "Ingesting with {} threads, batch size {}, {} mode",
        config.threads,
        config.batch_size,
        if config.strict { "strict" } else { "lenient" }
    );
    let summary = ingest_directory_async(input.clone(), output, config)
        .await
        .with_context(|| format!("ingesting {}", input.display()))?;

    info!(
        "{} of {} returns ingested, {} failed, {} rows in {} tables, {} value issues ({:?})",
        summary.files_ingested,
        summary.files_seen,
        summary.files_failed,
        summary.rows_written,
        summary.tables.len(),
        summary.issues,
        summary.elapsed
    );
    for table in &summary.tables {
        info!("  {:<40} {:>8} rows", table.table, table.rows);
    }
    Ok(())
}

fn inspect(path: &Path) -> anyhow::Result<()> {
    let start = Instant::now();
    let table = table_for_file(path).with_context(|| format!("identifying {}", path.display()))?;
    let batches = read_parquet(path)?;
    print_batch_summary(&batches, start.elapsed());
    match batches.first() {
        Some(batch) => {
            print_schema_info(&batch.schema());
            print_sample_rows(batch, 5)?;
        }
        None => print_schema_info(&table.arrow_schema()),
    }
    Ok(())
}
