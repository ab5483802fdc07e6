use irs990_schema::catalog::Catalog;
use irs990_schema::catalog::schedule_o::SupplementalInformationDetail;
use irs990_schema::schema::{catalog_ddl, create_table_sql};
use irs990_schema::{FormTable, Result, SqlDialect};

#[test]
fn test_postgres_ddl_for_schedule_o() {
    let sql = create_table_sql(SupplementalInformationDetail::definition(), SqlDialect::Postgres);
    println!("{sql}");

    assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"return_skedo_spplmntlinfrmtndtl\" ("));
    assert!(sql.contains("\"object_id\" VARCHAR(31) NOT NULL,"));
    assert!(sql.contains("\"ein\" VARCHAR(15) NOT NULL,"));
    assert!(sql.contains("\"ExplntnTxt\" TEXT\n"));
    assert!(sql.contains("COMMENT ON TABLE \"return_skedo_spplmntlinfrmtndtl\" IS 'Schedule O;"));
    assert!(sql.contains("/IRS990ScheduleO/SupplementalInformationDetail/ExplanationTxt"));
    assert!(!sql.contains("PRIMARY KEY"));
}

#[test]
fn test_sqlite_ddl_uses_inline_comments() -> Result<()> {
    let dialect: SqlDialect = "sqlite".parse()?;
    let sql = create_table_sql(SupplementalInformationDetail::definition(), dialect);

    assert!(sql.contains("\"object_id\" TEXT NOT NULL,"));
    assert!(sql.contains("-- "));
    assert!(!sql.contains("COMMENT ON"));
    Ok(())
}

#[test]
fn test_catalog_ddl_covers_every_table() {
    let catalog = Catalog::global();
    let sql = catalog_ddl(catalog, SqlDialect::Postgres);
    assert_eq!(sql.matches("CREATE TABLE IF NOT EXISTS").count(), catalog.len());
    for table in catalog.tables() {
        assert!(sql.contains(&format!("\"{}\"", table.name())), "{}", table.name());
    }
}

#[test]
fn test_unknown_dialect_is_rejected() {
    assert!("oracle".parse::<SqlDialect>().is_err());
}
