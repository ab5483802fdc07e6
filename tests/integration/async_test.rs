use crate::utils::{FORM_990EZ, FORM_990PF, FULL_990, returns_dir, returns_subset, test_config};
use irs990_schema::catalog::form990ez::OfficerDirectorTrusteeEmpl;
use irs990_schema::catalog::header::ReturnHeader;
use irs990_schema::io::find_parquet_files;
use irs990_schema::{FormTable, IngestConfig, Result, ingest_directory_async, read_tables_async};

/// Ingest on the blocking pool and read every table back concurrently
#[tokio::test]
async fn test_async_ingest_and_read() -> Result<()> {
    let input = returns_subset(&[FULL_990, FORM_990EZ, FORM_990PF])?;
    let output = tempfile::tempdir()?;

    let start = std::time::Instant::now();
    let summary =
        ingest_directory_async(input.path().to_path_buf(), output.path().to_path_buf(), test_config())
            .await?;
    println!(
        "Ingested {} returns into {} tables in {:?}",
        summary.files_ingested,
        summary.tables.len(),
        start.elapsed()
    );
    assert_eq!(summary.files_ingested, 3);

    let files = find_parquet_files(output.path())?;
    let tables = read_tables_async(&files).await?;
    assert_eq!(tables.len(), summary.tables.len());
    assert_eq!(
        tables.values().map(Vec::len).sum::<usize>(),
        summary.rows_written
    );

    let mut eins: Vec<String> = tables[ReturnHeader::definition().name()]
        .iter()
        .map(|record| record.key().ein.clone())
        .collect();
    eins.sort();
    assert_eq!(eins, ["123456789", "274455667", "861122334"]);

    let officers = &tables[OfficerDirectorTrusteeEmpl::definition().name()];
    assert_eq!(officers.len(), 2);
    Ok(())
}

/// Several ingests can run side by side on the runtime
#[tokio::test]
async fn test_concurrent_ingests() -> Result<()> {
    let first = tempfile::tempdir()?;
    let second = tempfile::tempdir()?;

    let (a, b) = tokio::join!(
        ingest_directory_async(returns_dir(), first.path().to_path_buf(), test_config()),
        ingest_directory_async(
            returns_dir(),
            second.path().to_path_buf(),
            IngestConfig::default().with_threads(1)
        ),
    );
    let (a, b) = (a?, b?);
    assert_eq!(a.files_ingested, b.files_ingested);
    assert_eq!(a.rows_written, b.rows_written);
    assert_eq!(a.files_failed, 1);
    Ok(())
}

#[tokio::test]
async fn test_async_ingest_missing_input_fails() {
    let output = tempfile::tempdir().expect("tempdir");
    let result = ingest_directory_async(
        returns_dir().join("does-not-exist"),
        output.path().to_path_buf(),
        IngestConfig::default(),
    )
    .await;
    assert!(result.is_err());
}
