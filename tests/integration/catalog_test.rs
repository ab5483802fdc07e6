use std::collections::BTreeSet;

use irs990_schema::catalog::Catalog;
use irs990_schema::catalog::form990::{Form990PartVIISectionA, PartI};
use irs990_schema::catalog::form990pf::GrantOrContributionPdDurYr;
use irs990_schema::catalog::schedule_a::SupportedOrgInformation;
use irs990_schema::{FieldType, FormKind, FormTable, Result};

#[test]
fn test_catalog_is_consistent() {
    let catalog = Catalog::global();
    let issues = catalog.check();
    assert!(issues.is_empty(), "catalog issues: {issues:?}");
    assert_eq!(catalog.forms(), FormKind::ALL.to_vec());
    assert!(catalog.column_count() > catalog.len());
}

#[test]
fn test_every_table_starts_with_filing_key() {
    for table in Catalog::global().tables() {
        let keys: Vec<(&str, Option<usize>, bool)> = table
            .all_columns()
            .take(2)
            .map(|column| (column.name.as_str(), column.max_length, column.nullable))
            .collect();
        assert_eq!(
            keys,
            [("object_id", Some(31), false), ("ein", Some(15), false)],
            "{}",
            table.name()
        );
        assert!(
            table.columns().iter().all(|column| column.nullable),
            "{} has a required data column",
            table.name()
        );
    }
}

#[test]
fn test_repeating_groups_are_separate_tables() {
    let people = Form990PartVIISectionA::definition();
    assert_eq!(people.form(), FormKind::Form990);
    assert_eq!(people.group(), Some("/IRS990/Form990PartVIISectionAGrp"));
    assert!(people.is_repeating());

    let grants = GrantOrContributionPdDurYr::definition();
    assert!(grants.has_column("Amt"));
    assert!(grants.has_column("RcpntUSAddrss_CtyNm"));

    let supported = SupportedOrgInformation::definition();
    assert_eq!(supported.parent(), Some("return_skeda_part_i"));
    assert!(!PartI::definition().is_repeating());
}

#[test]
fn test_lookup_by_name_and_xpath() -> Result<()> {
    let catalog = Catalog::global();
    let table = catalog.require("return_part_i")?;
    assert_eq!(table.form(), FormKind::Form990);

    let (by_alias, column) = catalog
        .column_for_xpath("/IRS990/TotalRevenueCurrentYear")
        .expect("alias is indexed");
    assert_eq!(by_alias.name(), table.name());
    assert_eq!(column.xpath, "/IRS990/CYTotalRevenueAmt");
    assert_eq!(column.field_type, FieldType::BigInteger);
    assert_eq!(column.line_number.as_deref(), Some("Part I Line 12"));

    assert!(catalog.require("return_part_xiii").is_err());
    Ok(())
}

#[test]
fn test_json_export_lists_every_table() -> Result<()> {
    let catalog = Catalog::global();
    let json: serde_json::Value = serde_json::from_str(&catalog.to_json()?)?;
    let tables = json.as_array().expect("array of tables");
    assert_eq!(tables.len(), catalog.len());
    assert!(
        tables
            .iter()
            .any(|table| table["name"] == "return_skedo_spplmntlinfrmtndtl")
    );
    Ok(())
}

#[test]
fn test_private_foundation_parts_are_all_declared() {
    let parts: BTreeSet<&str> = Catalog::global()
        .tables_for_form(FormKind::Form990PF)
        .map(|table| table.part())
        .collect();
    for part in [
        "Part 0", "Part I", "Part II", "Part III", "Part IV", "Part VI", "Part VII-A", "Part VII-B",
        "Part VIII", "Part IX-A", "Part IX-B", "Part X", "Part XI", "Part XII", "Part XIII",
        "Part XIV", "Part XV", "Part XVI-A", "Part XVI-B", "Part XVII",
    ] {
        assert!(parts.contains(part), "990-PF {part} has no table");
    }
    // Part V (section 4940(e) reduced tax) was repealed and has no table
    assert!(!parts.contains("Part V"));
}

#[test]
fn test_schedules_carry_supplemental_information() {
    let catalog = Catalog::global();
    let schedules = FormKind::ALL
        .iter()
        .copied()
        .filter(|form| form.root_element().starts_with("IRS990Schedule"));
    for form in schedules {
        if form == FormKind::ScheduleB {
            continue;
        }
        let supplemental = catalog.tables_for_form(form).find(|table| {
            table.group().is_some_and(|group| group.ends_with("/SupplementalInformationDetail"))
        });
        let table = supplemental.unwrap_or_else(|| panic!("{form:?} has no supplemental table"));
        assert!(table.has_column("FrmAndLnRfrncDsc"));
        assert!(table.has_column("ExplntnTxt"));
    }
}
