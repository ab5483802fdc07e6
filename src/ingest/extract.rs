//! Mapping of a parsed return onto catalog tables.

use std::collections::BTreeMap;

use serde::Serialize;

use super::filing::Filing;
use super::validate::{ValidationIssue, Validator};
use crate::catalog::Catalog;
use crate::config::IngestConfig;
use crate::error::Result;
use crate::schema::{FormTable, Record, TableDefinition, relative_path};

/// Rows produced from one filing, by table name
#[derive(Debug, Clone, Serialize)]
pub struct FilingRows {
    pub object_id: String,
    pub ein: String,
    pub tables: BTreeMap<String, Vec<Record>>,
    pub issues: Vec<ValidationIssue>,
}

impl FilingRows {
    /// Rows of one table; empty when the filing has none
    #[must_use]
    pub fn rows(&self, table: &str) -> &[Record] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or_default()
    }

    /// Rows of one table as typed structs
    pub fn typed<T: FormTable>(&self) -> Result<Vec<T>> {
        self.rows(T::definition().name())
            .iter()
            .map(T::from_record)
            .collect()
    }

    /// Total number of rows across tables
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    /// Number of tables with at least one row
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// Extracts catalog rows from filings
#[derive(Debug, Clone)]
pub struct Extractor {
    catalog: &'static Catalog,
    validator: Validator,
}

impl Extractor {
    /// Create an extractor over `catalog`
    #[must_use]
    pub fn new(catalog: &'static Catalog, config: &IngestConfig) -> Self {
        Self {
            catalog,
            validator: Validator::new(config),
        }
    }

    /// The catalog rows are extracted into
    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Extract every table whose form is present in the filing
    ///
    /// # Errors
    /// Returns `Validation` in strict mode for the first value that does not
    /// fit its column
    pub fn extract(&self, filing: &Filing) -> Result<FilingRows> {
        let mut tables = BTreeMap::new();
        let mut issues = Vec::new();

        for &table in self.catalog.tables() {
            if !filing.has_form(table.form()) {
                continue;
            }
            let rows = match table.group() {
                None => self
                    .single_row(table, filing, &mut issues)?
                    .into_iter()
                    .collect(),
                Some(group) => self.group_rows(table, group, filing, &mut issues)?,
            };
            if !rows.is_empty() {
                tables.insert(table.name().to_string(), rows);
            }
        }

        log::debug!(
            "Filing {}: {} rows in {} tables, {} issues",
            filing.object_id(),
            tables.values().map(Vec::len).sum::<usize>(),
            tables.len(),
            issues.len()
        );

        Ok(FilingRows {
            object_id: filing.object_id().to_string(),
            ein: filing.ein().to_string(),
            tables,
            issues,
        })
    }

    fn single_row(
        &self,
        table: &'static TableDefinition,
        filing: &Filing,
        issues: &mut Vec<ValidationIssue>,
    ) -> Result<Option<Record>> {
        let mut record = table.new_record(filing.key().clone());

        for (idx, column) in table.columns().iter().enumerate() {
            for xpath in column.xpaths() {
                let values = filing.values(xpath);
                let Some(raw) = values.first() else {
                    continue;
                };
                if values.len() > 1 {
                    log::debug!(
                        "Filing {}: {xpath} occurs {} times, keeping the first",
                        filing.object_id(),
                        values.len()
                    );
                }
                let value = self
                    .validator
                    .convert(table.name(), column, xpath, raw, issues)?;
                record.set_value(idx, value);
                break;
            }
        }

        Ok((!record.is_empty()).then_some(record))
    }

    fn group_rows(
        &self,
        table: &'static TableDefinition,
        group: &str,
        filing: &Filing,
        issues: &mut Vec<ValidationIssue>,
    ) -> Result<Vec<Record>> {
        let document = filing.document();
        let mut rows = Vec::new();

        for &occurrence in filing.occurrences(group) {
            let mut record = table.new_record(filing.key().clone());
            for (idx, column) in table.columns().iter().enumerate() {
                for xpath in column.xpaths() {
                    let Some(relative) = relative_path(xpath, group) else {
                        continue;
                    };
                    let Some(raw) = document.descendant_value(occurrence, relative) else {
                        continue;
                    };
                    let value = self
                        .validator
                        .convert(table.name(), column, xpath, raw, issues)?;
                    record.set_value(idx, value);
                    break;
                }
            }
            if !record.is_empty() {
                rows.push(record);
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::form990::{Form990PartVIISectionA, PartI};
    use crate::catalog::schedule_o::SupplementalInformationDetail;
    use crate::ingest::validate::IssueKind;
    use crate::schema::FieldValue;

    const RETURN: &str = r#"<Return xmlns="http://www.irs.gov/efile" returnVersion="2019v5.1">
  <ReturnHeader>
    <ReturnTypeCd>990</ReturnTypeCd>
    <Filer><EIN>123456789</EIN></Filer>
  </ReturnHeader>
  <ReturnData>
    <IRS990>
      <CYTotalRevenueAmt>1500</CYTotalRevenueAmt>
      <CYTotalRevenueAmt>9999</CYTotalRevenueAmt>
      <TotalEmployeeCnt>many</TotalEmployeeCnt>
      <Form990PartVIISectionAGrp>
        <PersonNm>Ada Lovelace</PersonNm>
        <AverageHoursPerWeekRt>40.00</AverageHoursPerWeekRt>
      </Form990PartVIISectionAGrp>
      <Form990PartVIISectionAGrp>
        <BusinessName><BusinessNameLine1Txt>Analytical Engines LLC</BusinessNameLine1Txt></BusinessName>
      </Form990PartVIISectionAGrp>
      <Form990PartVIISectionAGrp/>
    </IRS990>
    <IRS990ScheduleO>
      <SupplementalInformationDetail>
        <FormAndLineReferenceDesc>Part VI Line 11b</FormAndLineReferenceDesc>
        <ExplanationTxt>Board reviews the return.</ExplanationTxt>
      </SupplementalInformationDetail>
    </IRS990ScheduleO>
  </ReturnData>
</Return>"#;

    fn extract(config: &IngestConfig) -> Result<FilingRows> {
        let filing = Filing::from_xml("201900001", RETURN)?;
        Extractor::new(Catalog::global(), config).extract(&filing)
    }

    #[test]
    fn test_single_table_first_occurrence_wins() {
        let rows = extract(&IngestConfig::default()).expect("extract");
        let part_i: Vec<PartI> = rows.typed().expect("typed");
        assert_eq!(part_i.len(), 1);
        assert_eq!(part_i[0].cy_total_revenue_amt, Some(1500));
        assert_eq!(part_i[0].ein, "123456789");
        assert_eq!(part_i[0].total_employee_cnt, None);
    }

    #[test]
    fn test_invalid_values_become_issues() {
        let rows = extract(&IngestConfig::default()).expect("extract");
        assert_eq!(rows.issues.len(), 1);
        assert_eq!(rows.issues[0].column, "TtlEmplyCnt");
        assert_eq!(rows.issues[0].kind, IssueKind::InvalidNumber);
    }

    #[test]
    fn test_repeating_groups_skip_empty_occurrences() {
        let rows = extract(&IngestConfig::default()).expect("extract");
        let people: Vec<Form990PartVIISectionA> = rows.typed().expect("typed");
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].person_nm.as_deref(), Some("Ada Lovelace"));
        assert_eq!(people[0].average_hours_per_week_rt, Some(40.0));
        assert_eq!(
            people[1].business_name_line1_txt.as_deref(),
            Some("Analytical Engines LLC")
        );

        let notes = rows.rows(SupplementalInformationDetail::definition().name());
        assert_eq!(
            notes[0].get("ExplntnTxt"),
            Some(&FieldValue::Text("Board reviews the return.".to_string()))
        );
    }

    #[test]
    fn test_absent_forms_produce_no_tables() {
        let rows = extract(&IngestConfig::default()).expect("extract");
        assert!(rows.tables.keys().all(|name| !name.starts_with("return_ez")));
        assert!(rows.rows("return_skeda_part_i").is_empty());
        assert!(rows.tables.contains_key("return_header"));
    }

    #[test]
    fn test_strict_mode_rejects_filing() {
        assert!(extract(&IngestConfig::default().with_strict(true)).is_err());
    }
}
