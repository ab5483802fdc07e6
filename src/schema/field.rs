//! Column definitions for form tables
//!
//! A column is one XML element of an IRS e-file return: its abbreviated
//! column name, source XPath, form line number and scalar type.

use std::collections::HashMap;
use std::fmt;

use arrow::datatypes::{DataType, Field};
use serde::Serialize;
use smallvec::SmallVec;

/// Precision of decimal columns (percentages, ratios, hours)
pub const DECIMAL_PRECISION: u8 = 22;
/// Scale of decimal columns
pub const DECIMAL_SCALE: i8 = 5;
/// Maximum length of short text columns that do not declare one
pub const DEFAULT_MAX_LENGTH: usize = 100;
/// Maximum length of `object_id`
pub const OBJECT_ID_MAX_LENGTH: usize = 31;
/// Maximum length of `ein`
pub const EIN_MAX_LENGTH: usize = 15;
/// Length of a date kept as text (`YYYY-MM-DD`)
pub const DATE_LENGTH: usize = 10;

/// Represents the scalar type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldType {
    /// `object_id` / `ein` key columns
    Identifier,
    /// Bounded text: codes, names, indicators
    ShortText,
    /// Unbounded text: descriptions, explanations
    LongText,
    /// Counts
    Integer,
    /// Monetary amounts
    BigInteger,
    /// Fixed-precision decimal
    Decimal,
    /// Date kept as `YYYY-MM-DD` text
    Date,
}

impl FieldType {
    /// Convert to Arrow `DataType`
    #[must_use]
    pub fn to_arrow_type(&self) -> DataType {
        match self {
            FieldType::Identifier
            | FieldType::ShortText
            | FieldType::LongText
            | FieldType::Date => DataType::Utf8,
            FieldType::Integer => DataType::Int32,
            FieldType::BigInteger => DataType::Int64,
            FieldType::Decimal => DataType::Decimal128(DECIMAL_PRECISION, DECIMAL_SCALE),
        }
    }

    /// Whether values of this type are text
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FieldType::Identifier | FieldType::ShortText | FieldType::LongText | FieldType::Date
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Identifier => write!(f, "Identifier"),
            FieldType::ShortText => write!(f, "ShortText"),
            FieldType::LongText => write!(f, "LongText"),
            FieldType::Integer => write!(f, "Integer"),
            FieldType::BigInteger => write!(f, "BigInteger"),
            FieldType::Decimal => write!(f, "Decimal"),
            FieldType::Date => write!(f, "Date"),
        }
    }
}

/// One column of a form table
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDefinition {
    /// Column name; derived from the XPath when not declared
    pub name: String,
    /// Absolute XPath of the source element
    pub xpath: String,
    /// Alternate XPaths used by older schema versions
    pub aliases: SmallVec<[String; 2]>,
    /// Form line reference, e.g. "Part I Line 12"
    pub line_number: Option<String>,
    /// Description of the line
    pub description: String,
    /// Scalar type of the column
    pub field_type: FieldType,
    /// Maximum text length, for bounded text columns
    pub max_length: Option<usize>,
    /// Whether the column can be null
    pub nullable: bool,
    #[serde(skip)]
    name_declared: bool,
}

impl ColumnDefinition {
    /// Create a new column definition
    ///
    /// Short text columns get [`DEFAULT_MAX_LENGTH`] and dates [`DATE_LENGTH`]
    /// unless overridden.
    pub fn new(xpath: impl Into<String>, field_type: FieldType) -> Self {
        let xpath = xpath.into();
        let max_length = match field_type {
            FieldType::ShortText => Some(DEFAULT_MAX_LENGTH),
            FieldType::Date => Some(DATE_LENGTH),
            _ => None,
        };
        Self {
            name: last_segment(&xpath).to_string(),
            xpath,
            aliases: SmallVec::new(),
            line_number: None,
            description: String::new(),
            field_type,
            max_length,
            nullable: true,
            name_declared: false,
        }
    }

    /// Create one of the non-null key columns
    pub(crate) fn key(name: &str, max_length: usize) -> Self {
        Self {
            name: name.to_string(),
            xpath: String::new(),
            aliases: SmallVec::new(),
            line_number: None,
            description: String::new(),
            field_type: FieldType::Identifier,
            max_length: Some(max_length),
            nullable: false,
            name_declared: true,
        }
    }

    /// Override the derived column name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.name_declared = true;
        self
    }

    /// Set the form line reference
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line_number = Some(line.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the maximum text length
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Add an alternate XPath
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Derive the column name from the XPath below `anchor` unless one was declared
    pub(crate) fn resolve_name(&mut self, anchor: &str) {
        if !self.name_declared {
            self.name = column_name_for(&self.xpath, anchor);
        }
    }

    /// Convert to an Arrow Field, carrying the XPath and line as metadata
    #[must_use]
    pub fn to_arrow_field(&self) -> Field {
        let mut metadata = HashMap::new();
        if !self.xpath.is_empty() {
            metadata.insert("xpath".to_string(), self.xpath.clone());
        }
        if let Some(line) = &self.line_number {
            metadata.insert("line_number".to_string(), line.clone());
        }
        if !self.description.is_empty() {
            metadata.insert("description".to_string(), self.description.clone());
        }
        Field::new(&self.name, self.field_type.to_arrow_type(), self.nullable)
            .with_metadata(metadata)
    }

    /// Check if the given XPath is this column's XPath or one of its aliases
    #[must_use]
    pub fn matches_xpath(&self, xpath: &str) -> bool {
        self.xpath == xpath || self.aliases.iter().any(|alias| alias == xpath)
    }

    /// Primary XPath followed by aliases, in lookup order
    pub fn xpaths(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.xpath.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Human-readable comment combining line number, description and XPath
    #[must_use]
    pub fn comment(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(line) = &self.line_number {
            parts.push(line.clone());
        }
        if !self.description.is_empty() {
            parts.push(self.description.clone());
        }
        if !self.xpath.is_empty() {
            parts.push(format!("xpath: {}", self.xpath));
        }
        parts.join("; ")
    }
}

/// Path of `xpath` below `anchor`, without the leading slash
///
/// Returns `None` when `xpath` is not under `anchor`.
#[must_use]
pub fn relative_path<'a>(xpath: &'a str, anchor: &str) -> Option<&'a str> {
    let rest = xpath.strip_prefix(anchor)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('/')
}

fn last_segment(xpath: &str) -> &str {
    xpath.rsplit('/').next().unwrap_or(xpath)
}

/// Derive a column name from an XPath relative to its table anchor
///
/// Intermediate `...Grp` suffixes are dropped and every segment is
/// abbreviated with [`abbreviate_element`].
#[must_use]
pub fn column_name_for(xpath: &str, anchor: &str) -> String {
    let relative = relative_path(xpath, anchor).unwrap_or_else(|| xpath.trim_start_matches('/'));
    let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            let segment = if idx < last {
                segment.strip_suffix("Grp").unwrap_or(segment)
            } else {
                segment
            };
            abbreviate_element(segment)
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Abbreviate a CamelCase element name by dropping lowercase vowels that do
/// not start a word: `ActivityOrMissionDesc` becomes `ActvtyOrMssnDsc`.
#[must_use]
pub fn abbreviate_element(element: &str) -> String {
    let mut abbreviated = String::with_capacity(element.len());
    let mut word_start = true;
    for ch in element.chars() {
        if !ch.is_alphanumeric() {
            abbreviated.push(ch);
            word_start = true;
            continue;
        }
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u');
        if word_start || !is_vowel {
            abbreviated.push(ch);
        }
        word_start = false;
    }
    abbreviated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_element() {
        assert_eq!(abbreviate_element("ActivityOrMissionDesc"), "ActvtyOrMssnDsc");
        assert_eq!(abbreviate_element("CYTotalRevenueAmt"), "CYTtlRvnAmt");
        assert_eq!(abbreviate_element("TotalAssetsBOYAmt"), "TtlAsstsBOYAmt");
        assert_eq!(abbreviate_element("EIN"), "EIN");
        assert_eq!(abbreviate_element("Organization501c3Ind"), "Orgnztn501c3Ind");
    }

    #[test]
    fn test_column_name_for_nested_group() {
        assert_eq!(
            column_name_for("/IRS990/InvestmentIncomeGrp/TotalRevenueColumnAmt", "/IRS990"),
            "InvstmntIncm_TtlRvnClmnAmt"
        );
        assert_eq!(
            column_name_for(
                "/IRS990/Form990PartVIISectionAGrp/PersonNm",
                "/IRS990/Form990PartVIISectionAGrp"
            ),
            "PrsnNm"
        );
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(relative_path("/IRS990/A/B", "/IRS990"), Some("A/B"));
        assert_eq!(relative_path("/IRS990EZ/A", "/IRS990"), None);
        assert_eq!(relative_path("/IRS990", "/IRS990"), Some(""));
    }

    #[test]
    fn test_arrow_field_carries_metadata() {
        let column = ColumnDefinition::new("/IRS990/CYTotalRevenueAmt", FieldType::BigInteger)
            .with_line("Part I Line 12");
        let field = column.to_arrow_field();
        assert_eq!(field.data_type(), &DataType::Int64);
        assert!(field.is_nullable());
        assert_eq!(
            field.metadata().get("xpath").map(String::as_str),
            Some("/IRS990/CYTotalRevenueAmt")
        );
    }

    #[test]
    fn test_short_text_default_length() {
        let column = ColumnDefinition::new("/IRS990/WebsiteAddressTxt", FieldType::ShortText);
        assert_eq!(column.max_length, Some(DEFAULT_MAX_LENGTH));
        let column = column.with_max_length(250);
        assert_eq!(column.max_length, Some(250));
    }
}
