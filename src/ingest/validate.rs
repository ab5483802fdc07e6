//! Conversion of element text into typed column values
//!
//! Every value is checked against its column: text against the declared
//! maximum length (in characters), numbers against the Arrow type, dates
//! against the accepted input formats. Lenient validation records a
//! [`ValidationIssue`] and keeps what it can; strict validation fails.

use std::fmt;

use arrow::compute::kernels::cast_utils::parse_decimal;
use arrow::datatypes::Decimal128Type;
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{IngestConfig, STORED_DATE_FORMAT};
use crate::error::{Irs990Error, Result};
use crate::schema::{
    ColumnDefinition, DATE_LENGTH, DECIMAL_PRECISION, DECIMAL_SCALE, FieldType, FieldValue,
    Record,
};
use crate::utils::truncate_chars;

/// What is wrong with a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    /// Text longer than the column allows
    TooLong { max_length: usize, actual: usize },
    /// Not a number of the column's type, or out of range
    InvalidNumber,
    /// Not a date in any accepted format
    InvalidDate,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::TooLong { max_length, actual } => {
                write!(f, "{actual} characters exceeds maximum of {max_length}")
            }
            IssueKind::InvalidNumber => write!(f, "not a valid number"),
            IssueKind::InvalidDate => write!(f, "not a valid date"),
        }
    }
}

/// A value that does not fit its column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub table: String,
    pub column: String,
    pub xpath: String,
    pub value: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} ({}): '{}' {}",
            self.table,
            self.column,
            self.xpath,
            truncate_chars(&self.value, 40),
            self.kind
        )
    }
}

/// Result of converting one raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Value to store; truncated text for over-long input, `None` if unusable
    pub value: Option<FieldValue>,
    /// Problem found, if any
    pub issue: Option<IssueKind>,
}

impl Parsed {
    fn ok(value: FieldValue) -> Self {
        Self {
            value: Some(value),
            issue: None,
        }
    }

    fn invalid(issue: IssueKind) -> Self {
        Self {
            value: None,
            issue: Some(issue),
        }
    }
}

/// Convert trimmed element text into a value of the column's type
#[must_use]
pub fn parse_value(column: &ColumnDefinition, raw: &str, date_formats: &[String]) -> Parsed {
    let raw = raw.trim();
    match column.field_type {
        FieldType::Identifier | FieldType::ShortText | FieldType::LongText => {
            parse_text(raw, column.max_length)
        }
        FieldType::Integer => match raw.parse::<i32>() {
            Ok(value) => Parsed::ok(FieldValue::Integer(value)),
            Err(_) => Parsed::invalid(IssueKind::InvalidNumber),
        },
        FieldType::BigInteger => match raw.parse::<i64>() {
            Ok(value) => Parsed::ok(FieldValue::BigInteger(value)),
            Err(_) => Parsed::invalid(IssueKind::InvalidNumber),
        },
        FieldType::Decimal => {
            match parse_decimal::<Decimal128Type>(raw, DECIMAL_PRECISION, DECIMAL_SCALE) {
                Ok(mantissa) => Parsed::ok(FieldValue::Decimal(mantissa)),
                Err(_) => Parsed::invalid(IssueKind::InvalidNumber),
            }
        }
        FieldType::Date => parse_date(raw, date_formats).map_or_else(
            || Parsed::invalid(IssueKind::InvalidDate),
            |date| Parsed::ok(FieldValue::Text(date)),
        ),
    }
}

fn parse_text(raw: &str, max_length: Option<usize>) -> Parsed {
    if let Some(max_length) = max_length {
        let actual = raw.chars().count();
        if actual > max_length {
            return Parsed {
                value: Some(FieldValue::Text(truncate_chars(raw, max_length).to_string())),
                issue: Some(IssueKind::TooLong { max_length, actual }),
            };
        }
    }
    Parsed::ok(FieldValue::Text(raw.to_string()))
}

/// Parse a date in any of `formats` and render it as `YYYY-MM-DD`
///
/// Values carrying a time or zone suffix after a leading `YYYY-MM-DD` are
/// accepted as that date.
#[must_use]
pub fn parse_date(raw: &str, formats: &[String]) -> Option<String> {
    let parsed = formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            raw.get(..DATE_LENGTH)
                .filter(|_| raw.len() > DATE_LENGTH)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, STORED_DATE_FORMAT).ok())
        })?;
    Some(parsed.format(STORED_DATE_FORMAT).to_string())
}

/// Applies column validation in lenient or strict mode
#[derive(Debug, Clone)]
pub struct Validator {
    strict: bool,
    date_formats: Vec<String>,
}

impl Validator {
    /// Validator using the config's mode and date formats
    #[must_use]
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            strict: config.strict,
            date_formats: config.date_formats.clone(),
        }
    }

    /// Whether issues are errors
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Convert `raw` for `column`, collecting any issue
    ///
    /// # Errors
    /// Returns `Validation` in strict mode when the value does not fit
    pub fn convert(
        &self,
        table: &str,
        column: &ColumnDefinition,
        xpath: &str,
        raw: &str,
        issues: &mut Vec<ValidationIssue>,
    ) -> Result<Option<FieldValue>> {
        let parsed = parse_value(column, raw, &self.date_formats);
        if let Some(kind) = parsed.issue {
            let issue = ValidationIssue {
                table: table.to_string(),
                column: column.name.clone(),
                xpath: xpath.to_string(),
                value: raw.to_string(),
                kind,
            };
            if self.strict {
                return Err(Irs990Error::Validation(issue));
            }
            issues.push(issue);
        }
        Ok(parsed.value)
    }
}

/// Check an already built row against its table's bounds
///
/// Reports keys and text values longer than their columns allow, and values
/// whose kind does not match the column type.
#[must_use]
pub fn check_record(record: &Record) -> Vec<ValidationIssue> {
    let table = record.definition();
    let mut issues = Vec::new();

    let keys = [&record.key().object_id, &record.key().ein];
    for (column, value) in table.key_columns().iter().zip(keys) {
        if let Some(kind) = length_issue(column, value) {
            issues.push(issue_for(table.name(), column, value.clone(), kind));
        }
    }

    for (column, value) in table.columns().iter().zip(record.values()) {
        let Some(value) = value else { continue };
        if !value.fits(column.field_type) {
            let kind = if column.field_type == FieldType::Date {
                IssueKind::InvalidDate
            } else {
                IssueKind::InvalidNumber
            };
            issues.push(issue_for(table.name(), column, value.to_string(), kind));
            continue;
        }
        if let FieldValue::Text(text) = value {
            if let Some(kind) = length_issue(column, text) {
                issues.push(issue_for(table.name(), column, text.clone(), kind));
            }
        }
    }

    issues
}

fn length_issue(column: &ColumnDefinition, text: &str) -> Option<IssueKind> {
    let max_length = column.max_length?;
    let actual = text.chars().count();
    (actual > max_length).then_some(IssueKind::TooLong { max_length, actual })
}

fn issue_for(table: &str, column: &ColumnDefinition, value: String, kind: IssueKind) -> ValidationIssue {
    ValidationIssue {
        table: table.to_string(),
        column: column.name.clone(),
        xpath: column.xpath.clone(),
        value,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::form990::PartI;
    use crate::schema::{FilingKey, FormTable};

    fn formats() -> Vec<String> {
        IngestConfig::default().date_formats
    }

    #[test]
    fn test_numbers() {
        let amount = ColumnDefinition::new("/IRS990/CYTotalRevenueAmt", FieldType::BigInteger);
        assert_eq!(
            parse_value(&amount, " 1234567 ", &formats()).value,
            Some(FieldValue::BigInteger(1_234_567))
        );
        assert_eq!(
            parse_value(&amount, "12,000", &formats()).issue,
            Some(IssueKind::InvalidNumber)
        );

        let count = ColumnDefinition::new("/IRS990/TotalEmployeeCnt", FieldType::Integer);
        assert_eq!(
            parse_value(&count, "3000000000", &formats()).issue,
            Some(IssueKind::InvalidNumber)
        );
    }

    #[test]
    fn test_decimal_precision() {
        let pct = ColumnDefinition::new("/IRS990ScheduleA/PublicSupportCY170Pct", FieldType::Decimal);
        assert_eq!(
            parse_value(&pct, "0.7534", &formats()).value,
            Some(FieldValue::Decimal(75_340))
        );
        let too_wide = "12345678901234567890.5";
        assert_eq!(
            parse_value(&pct, too_wide, &formats()).issue,
            Some(IssueKind::InvalidNumber)
        );
    }

    #[test]
    fn test_dates_are_normalized() {
        let column = ColumnDefinition::new("/ReturnHeader/TaxPeriodEndDt", FieldType::Date);
        assert_eq!(
            parse_value(&column, "12/31/2019", &formats()).value,
            Some(FieldValue::Text("2019-12-31".to_string()))
        );
        assert_eq!(
            parse_date("2019-12-31-05:00", &formats()),
            Some("2019-12-31".to_string())
        );
        assert_eq!(
            parse_value(&column, "last year", &formats()).issue,
            Some(IssueKind::InvalidDate)
        );
    }

    #[test]
    fn test_stored_dates_fit_date_columns() {
        let column = ColumnDefinition::new("/ReturnHeader/TaxPeriodBeginDt", FieldType::Date);
        assert_eq!(column.max_length, Some(DATE_LENGTH));
        let parsed = parse_date("2019-01-01T00:00:00Z", &formats()).expect("date prefix");
        assert_eq!(parsed.len(), DATE_LENGTH);
    }

    #[test]
    fn test_text_is_truncated_in_lenient_mode() {
        let column = ColumnDefinition::new("/IRS990/WebsiteAddressTxt", FieldType::ShortText)
            .with_max_length(5);
        let validator = Validator::new(&IngestConfig::default());
        let mut issues = Vec::new();
        let value = validator
            .convert("return_part_0", &column, &column.xpath, "ééééééé", &mut issues)
            .expect("lenient");
        assert_eq!(value, Some(FieldValue::Text("ééééé".to_string())));
        assert_eq!(
            issues[0].kind,
            IssueKind::TooLong {
                max_length: 5,
                actual: 7
            }
        );
    }

    #[test]
    fn test_strict_mode_fails() {
        let column = ColumnDefinition::new("/IRS990/CYTotalRevenueAmt", FieldType::BigInteger);
        let validator = Validator::new(&IngestConfig::default().with_strict(true));
        let mut issues = Vec::new();
        let result = validator.convert("return_part_i", &column, &column.xpath, "n/a", &mut issues);
        assert!(matches!(result, Err(Irs990Error::Validation(_))));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_check_record_reports_long_key() {
        let table = PartI::definition();
        let record = table.new_record(FilingKey::new("201900000000000000000000000000001", "12-3456789"));
        let issues = check_record(&record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].column, "object_id");
    }
}
