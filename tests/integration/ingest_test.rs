use crate::utils::{
    FORM_990EZ, FORM_990PF, FULL_990, MISSING_EIN, OLD_990, extract_return, return_file,
    returns_dir, returns_subset, test_config,
};
use irs990_schema::catalog::header::ReturnHeader;
use irs990_schema::catalog::schedule_a::{self, SupportedOrgInformation};
use irs990_schema::catalog::schedule_o::SupplementalInformationDetail;
use irs990_schema::catalog::{form990, form990ez, form990pf};
use irs990_schema::ingest::IssueKind;
use irs990_schema::io::find_parquet_files;
use irs990_schema::{Filing, FormKind, Irs990Error, Result, find_xml_files, ingest_directory};

#[test]
fn test_find_returns_skips_other_files() -> Result<()> {
    let files = find_xml_files(&returns_dir())?;
    assert_eq!(files.len(), 5);
    assert!(files.windows(2).all(|pair| pair[0] <= pair[1]));
    Ok(())
}

#[test]
fn test_filing_header_facts() -> Result<()> {
    let filing = Filing::from_path(&return_file(FULL_990))?;
    let summary = filing.summary();
    assert_eq!(summary.object_id, "201913139349300001");
    assert_eq!(summary.ein, "123456789");
    assert_eq!(summary.return_type.as_deref(), Some("990"));
    assert_eq!(summary.tax_year.as_deref(), Some("2018"));
    assert_eq!(summary.version.as_deref(), Some("2018v3.1"));
    assert_eq!(
        summary.forms,
        [
            FormKind::ReturnHeader,
            FormKind::Form990,
            FormKind::ScheduleA,
            FormKind::ScheduleO
        ]
    );
    Ok(())
}

#[test]
fn test_full_990_rows() -> Result<()> {
    let rows = extract_return(FULL_990)?;
    assert!(rows.issues.is_empty(), "{:?}", rows.issues);

    let header: Vec<ReturnHeader> = rows.typed()?;
    assert_eq!(header.len(), 1);
    assert_eq!(header[0].tax_period_end_dt.as_deref(), Some("2018-12-31"));
    assert_eq!(
        header[0].filer_business_name_line1_txt.as_deref(),
        Some("Riverbend Community Learning Center")
    );

    let part0: Vec<form990::Part0> = rows.typed()?;
    assert_eq!(part0[0].gross_receipts_amt, Some(2_514_300));
    assert_eq!(part0[0].formation_yr, Some(1987));
    assert_eq!(part0[0].us_address_city_nm.as_deref(), Some("Madison"));

    let summary: Vec<form990::PartI> = rows.typed()?;
    assert_eq!(summary[0].total_employee_cnt, Some(42));
    assert_eq!(summary[0].cy_total_revenue_amt, Some(2_417_980));
    assert_eq!(summary[0].py_total_revenue_amt, Some(2_301_400));

    let people: Vec<form990::Form990PartVIISectionA> = rows.typed()?;
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].title_txt.as_deref(), Some("Executive Director"));
    assert_eq!(people[0].reportable_comp_from_org_amt, Some(98_500));
    assert_eq!(people[1].average_hours_per_week_rt, Some(2.5));
    assert!(people.iter().all(|person| person.object_id == "201913139349300001"));

    let sked_a: Vec<schedule_a::PartI> = rows.typed()?;
    assert_eq!(sked_a[0].school_ind.as_deref(), Some("X"));
    let support: Vec<schedule_a::PartII> = rows.typed()?;
    assert_eq!(support[0].public_support_cy_170_pct, Some(0.8512));
    let supported: Vec<SupportedOrgInformation> = rows.typed()?;
    assert_eq!(supported.len(), 1);
    assert_eq!(supported[0].ein_of_supported_org.as_deref(), Some("391234567"));
    assert_eq!(supported[0].ein, "123456789");

    let notes: Vec<SupplementalInformationDetail> = rows.typed()?;
    assert_eq!(notes.len(), 2);
    assert_eq!(
        notes[1].form_and_line_reference_desc.as_deref(),
        Some("Form 990, Part VI, Line 19")
    );
    Ok(())
}

#[test]
fn test_old_element_names_fill_current_columns() -> Result<()> {
    let rows = extract_return(OLD_990)?;

    let header: Vec<ReturnHeader> = rows.typed()?;
    assert_eq!(header[0].return_type_cd.as_deref(), Some("990"));
    assert_eq!(header[0].tax_yr, Some(2010));
    assert_eq!(header[0].tax_period_end_dt.as_deref(), Some("2010-12-31"));
    assert_eq!(
        header[0].filer_business_name_line1_txt.as_deref(),
        Some("Old Town Historical Society")
    );

    let summary: Vec<form990::PartI> = rows.typed()?;
    assert_eq!(summary[0].cy_total_revenue_amt, Some(71_950));
    assert_eq!(summary[0].cy_contributions_grants_amt, Some(64_300));
    assert_eq!(
        summary[0].activity_or_mission_desc.as_deref(),
        Some("Preserving the records of Old Town.")
    );
    assert_eq!(summary[0].total_employee_cnt, None);

    assert_eq!(rows.issues.len(), 1);
    let issue = &rows.issues[0];
    assert_eq!(issue.column, "TtlEmplyCnt");
    assert_eq!(issue.xpath, "/IRS990/TotalNbrEmployees");
    assert_eq!(issue.value, "about 12");
    assert_eq!(issue.kind, IssueKind::InvalidNumber);
    Ok(())
}

#[test]
fn test_990ez_rows() -> Result<()> {
    let rows = extract_return(FORM_990EZ)?;
    assert!(rows.tables.keys().all(|name| !name.starts_with("return_part_")));

    let part0: Vec<form990ez::Part0> = rows.typed()?;
    assert_eq!(part0[0].website_address_txt.as_deref(), Some("harborlightsrowing.org"));
    let part_i: Vec<form990ez::PartI> = rows.typed()?;
    assert_eq!(part_i[0].total_revenue_amt, Some(86_100));
    let balance: Vec<form990ez::PartII> = rows.typed()?;
    assert_eq!(balance[0].cash_savings_and_investments_boy_amt, Some(40_210));
    assert_eq!(balance[0].cash_savings_and_investments_eoy_amt, Some(45_875));

    let officers: Vec<form990ez::OfficerDirectorTrusteeEmpl> = rows.typed()?;
    let names: Vec<&str> = officers
        .iter()
        .filter_map(|officer| officer.person_nm.as_deref())
        .collect();
    assert_eq!(names, ["Alice Chen", "Samuel Okafor"]);
    assert_eq!(officers[0].average_hrs_per_wk_devoted_to_pos_rt, Some(5.0));
    Ok(())
}

#[test]
fn test_990pf_rows() -> Result<()> {
    let rows = extract_return(FORM_990PF)?;

    let part0: Vec<form990pf::Part0> = rows.typed()?;
    assert_eq!(part0[0].fmv_assets_eoy_amt, Some(5_120_400));
    let part_i: Vec<form990pf::PartI> = rows.typed()?;
    assert_eq!(part_i[0].total_rev_and_expnss_amt, Some(312_877));
    let part_ii: Vec<form990pf::PartII> = rows.typed()?;
    assert_eq!(part_ii[0].total_assets_eoy_amt, Some(4_981_022));

    let grants: Vec<form990pf::GrantOrContributionPdDurYr> = rows.typed()?;
    assert_eq!(grants.len(), 2);
    assert_eq!(grants[0].recipient_business_name_txt.as_deref(), Some("Tucson Food Bank"));
    assert_eq!(grants[1].recipient_city_nm.as_deref(), Some("Phoenix"));
    assert_eq!(grants.iter().filter_map(|grant| grant.amt).sum::<i64>(), 22_500);
    Ok(())
}

#[test]
fn test_missing_ein_is_rejected() {
    match Filing::from_path(&return_file(MISSING_EIN)) {
        Err(Irs990Error::MissingKey { object_id, field }) => {
            assert_eq!(object_id, "201943139349300405");
            assert_eq!(field, "ein");
        }
        other => panic!("expected MissingKey, got {other:?}"),
    }
}

#[test]
fn test_ingest_directory_counts_failures() -> Result<()> {
    let output = tempfile::tempdir()?;
    let summary = ingest_directory(&returns_dir(), output.path(), &test_config())?;

    assert_eq!(summary.files_seen, 5);
    assert_eq!(summary.files_ingested, 4);
    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.issues, 1);
    assert!(summary.failures[0].path.ends_with(MISSING_EIN));
    assert!(summary.failures[0].error.contains("ein"));

    let header = summary
        .tables
        .iter()
        .find(|table| table.table == "return_header")
        .expect("header table written");
    assert_eq!(header.rows, 4);
    assert!(header.path.exists());
    assert_eq!(
        summary.tables.iter().map(|table| table.rows).sum::<usize>(),
        summary.rows_written
    );
    Ok(())
}

#[test]
fn test_strict_ingest_stops_on_bad_value() -> Result<()> {
    let input = returns_subset(&[FULL_990, OLD_990])?;
    let output = tempfile::tempdir()?;
    let config = test_config().with_strict(true);

    match ingest_directory(input.path(), output.path(), &config) {
        Err(Irs990Error::Validation(issue)) => assert_eq!(issue.column, "TtlEmplyCnt"),
        other => panic!("expected a validation error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_strict_abort_leaves_no_partial_tables() -> Result<()> {
    // The bad return sorts after the clean one, so tables are already open
    // when the run aborts.
    let input = returns_subset(&[FULL_990])?;
    std::fs::copy(return_file(OLD_990), input.path().join("202903139349300999_public.xml"))?;
    let output = tempfile::tempdir()?;
    let config = test_config().with_strict(true).with_batch_size(1).with_threads(1);

    assert!(matches!(
        ingest_directory(input.path(), output.path(), &config),
        Err(Irs990Error::Validation(_))
    ));
    assert!(find_parquet_files(output.path())?.is_empty());
    Ok(())
}

#[test]
fn test_strict_ingest_accepts_clean_returns() -> Result<()> {
    let input = returns_subset(&[FULL_990, FORM_990EZ, FORM_990PF])?;
    let output = tempfile::tempdir()?;
    let summary = ingest_directory(input.path(), output.path(), &test_config().with_strict(true))?;
    assert_eq!(summary.files_ingested, 3);
    assert_eq!(summary.issues, 0);
    Ok(())
}
