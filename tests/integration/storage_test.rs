use std::path::PathBuf;

use crate::utils::{FORM_990PF, FULL_990, extract_return, returns_subset, test_config};
use irs990_schema::catalog::form990::{Form990PartVIISectionA, PartI};
use irs990_schema::catalog::form990pf::GrantOrContributionPdDurYr;
use irs990_schema::io::{find_parquet_files, read_parquet, table_for_file};
use irs990_schema::{FormTable, Irs990Error, Result, ingest_directory, read_table};

fn table_path(dir: &std::path::Path, table: &str) -> PathBuf {
    dir.join(format!("{table}.parquet"))
}

#[test]
fn test_stored_rows_match_extracted_rows() -> Result<()> {
    let input = returns_subset(&[FULL_990, FORM_990PF])?;
    let output = tempfile::tempdir()?;
    ingest_directory(input.path(), output.path(), &test_config())?;

    let extracted = extract_return(FULL_990)?;
    for table in [PartI::definition(), Form990PartVIISectionA::definition()] {
        let stored = read_table(table, &table_path(output.path(), table.name()))?;
        assert_eq!(stored.as_slice(), extracted.rows(table.name()), "{}", table.name());
    }

    let grants = GrantOrContributionPdDurYr::definition();
    let stored = read_table(grants, &table_path(output.path(), grants.name()))?;
    let grants: Vec<GrantOrContributionPdDurYr> = stored
        .iter()
        .map(GrantOrContributionPdDurYr::from_record)
        .collect::<Result<_>>()?;
    assert_eq!(grants.len(), 2);
    assert!(grants.iter().all(|grant| grant.ein == "861122334"));
    Ok(())
}

#[test]
fn test_stored_files_describe_their_table() -> Result<()> {
    let input = returns_subset(&[FULL_990])?;
    let output = tempfile::tempdir()?;
    let summary = ingest_directory(input.path(), output.path(), &test_config())?;

    let files = find_parquet_files(output.path())?;
    assert_eq!(files.len(), summary.tables.len());

    let path = table_path(output.path(), PartI::definition().name());
    assert_eq!(table_for_file(&path)?.name(), "return_part_i");

    let batches = read_parquet(&path)?;
    let schema = batches[0].schema();
    let field = schema.field_with_name("CYTtlRvnAmt")?;
    assert_eq!(
        field.metadata().get("xpath").map(String::as_str),
        Some("/IRS990/CYTotalRevenueAmt")
    );
    assert_eq!(
        field.metadata().get("line_number").map(String::as_str),
        Some("Part I Line 12")
    );
    Ok(())
}

#[test]
fn test_reading_file_as_other_table_fails() -> Result<()> {
    let input = returns_subset(&[FULL_990])?;
    let output = tempfile::tempdir()?;
    ingest_directory(input.path(), output.path(), &test_config())?;

    let people = table_path(output.path(), Form990PartVIISectionA::definition().name());
    match read_table(PartI::definition(), &people) {
        Err(Irs990Error::IncompatibleSchema { table, .. }) => assert_eq!(table, "return_part_i"),
        other => panic!("expected IncompatibleSchema, got {other:?}"),
    }
    Ok(())
}
