//! Table definitions for form parts and repeating groups
//!
//! Each [`TableDefinition`] describes one relational table: the part of a
//! form (or the repeating group within a part) it holds, its columns, and the
//! Arrow schema rows are stored with.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use arrow::datatypes::{Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::batch::{records_from_batch, records_to_batch};
use super::field::{ColumnDefinition, EIN_MAX_LENGTH, OBJECT_ID_MAX_LENGTH};
use super::value::{FilingKey, Record};
use crate::error::{Irs990Error, Result};

/// The return, form or schedule a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FormKind {
    ReturnHeader,
    Form990,
    Form990EZ,
    Form990PF,
    ScheduleA,
    ScheduleB,
    ScheduleC,
    ScheduleD,
    ScheduleE,
    ScheduleF,
    ScheduleG,
    ScheduleH,
    ScheduleI,
    ScheduleJ,
    ScheduleK,
    ScheduleL,
    ScheduleM,
    ScheduleN,
    ScheduleO,
    ScheduleR,
}

impl FormKind {
    /// Every form kind, in catalog order
    pub const ALL: [FormKind; 20] = [
        FormKind::ReturnHeader,
        FormKind::Form990,
        FormKind::Form990EZ,
        FormKind::Form990PF,
        FormKind::ScheduleA,
        FormKind::ScheduleB,
        FormKind::ScheduleC,
        FormKind::ScheduleD,
        FormKind::ScheduleE,
        FormKind::ScheduleF,
        FormKind::ScheduleG,
        FormKind::ScheduleH,
        FormKind::ScheduleI,
        FormKind::ScheduleJ,
        FormKind::ScheduleK,
        FormKind::ScheduleL,
        FormKind::ScheduleM,
        FormKind::ScheduleN,
        FormKind::ScheduleO,
        FormKind::ScheduleR,
    ];

    /// Name of the XML element holding this form in a return
    #[must_use]
    pub fn root_element(&self) -> &'static str {
        match self {
            FormKind::ReturnHeader => "ReturnHeader",
            FormKind::Form990 => "IRS990",
            FormKind::Form990EZ => "IRS990EZ",
            FormKind::Form990PF => "IRS990PF",
            FormKind::ScheduleA => "IRS990ScheduleA",
            FormKind::ScheduleB => "IRS990ScheduleB",
            FormKind::ScheduleC => "IRS990ScheduleC",
            FormKind::ScheduleD => "IRS990ScheduleD",
            FormKind::ScheduleE => "IRS990ScheduleE",
            FormKind::ScheduleF => "IRS990ScheduleF",
            FormKind::ScheduleG => "IRS990ScheduleG",
            FormKind::ScheduleH => "IRS990ScheduleH",
            FormKind::ScheduleI => "IRS990ScheduleI",
            FormKind::ScheduleJ => "IRS990ScheduleJ",
            FormKind::ScheduleK => "IRS990ScheduleK",
            FormKind::ScheduleL => "IRS990ScheduleL",
            FormKind::ScheduleM => "IRS990ScheduleM",
            FormKind::ScheduleN => "IRS990ScheduleN",
            FormKind::ScheduleO => "IRS990ScheduleO",
            FormKind::ScheduleR => "IRS990ScheduleR",
        }
    }

    /// Absolute XPath of the form root, e.g. `/IRS990`
    #[must_use]
    pub fn root_xpath(&self) -> String {
        format!("/{}", self.root_element())
    }

    /// Find the form kind for an XML element name
    #[must_use]
    pub fn from_root_element(element: &str) -> Option<FormKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.root_element() == element)
    }

    /// Short code used on the command line: `990`, `990ez`, `a`, `r`, ...
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FormKind::ReturnHeader => "header",
            FormKind::Form990 => "990",
            FormKind::Form990EZ => "990ez",
            FormKind::Form990PF => "990pf",
            FormKind::ScheduleA => "a",
            FormKind::ScheduleB => "b",
            FormKind::ScheduleC => "c",
            FormKind::ScheduleD => "d",
            FormKind::ScheduleE => "e",
            FormKind::ScheduleF => "f",
            FormKind::ScheduleG => "g",
            FormKind::ScheduleH => "h",
            FormKind::ScheduleI => "i",
            FormKind::ScheduleJ => "j",
            FormKind::ScheduleK => "k",
            FormKind::ScheduleL => "l",
            FormKind::ScheduleM => "m",
            FormKind::ScheduleN => "n",
            FormKind::ScheduleO => "o",
            FormKind::ScheduleR => "r",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::ReturnHeader => write!(f, "Return Header"),
            FormKind::Form990 => write!(f, "Form 990"),
            FormKind::Form990EZ => write!(f, "Form 990-EZ"),
            FormKind::Form990PF => write!(f, "Form 990-PF"),
            other => write!(f, "Schedule {}", other.code().to_uppercase()),
        }
    }
}

impl FromStr for FormKind {
    type Err = Irs990Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['-', '_', ' '], "")
            .trim_start_matches("form")
            .trim_start_matches("schedule")
            .trim_start_matches("irs990schedule")
            .to_string();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.code() == normalized || kind.root_element().to_lowercase() == normalized
            })
            .ok_or_else(|| Irs990Error::UnknownForm(s.to_string()))
    }
}

/// A table holding one part of a form or one repeating group
#[derive(Debug, Clone, Serialize)]
pub struct TableDefinition {
    name: String,
    form: FormKind,
    part: String,
    description: String,
    root: String,
    group: Option<String>,
    parent: Option<String>,
    keys: [ColumnDefinition; 2],
    columns: Vec<ColumnDefinition>,
    #[serde(skip)]
    arrow_schema: SchemaRef,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl TableDefinition {
    /// Start building a table definition
    pub fn builder(name: impl Into<String>, form: FormKind) -> TableDefinitionBuilder {
        TableDefinitionBuilder {
            name: name.into(),
            form,
            part: String::new(),
            description: String::new(),
            group: None,
            parent: None,
            columns: Vec::new(),
        }
    }

    /// Table name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Form the table belongs to
    #[must_use]
    pub fn form(&self) -> FormKind {
        self.form
    }

    /// Part of the form, e.g. "Part VII Section A"
    #[must_use]
    pub fn part(&self) -> &str {
        &self.part
    }

    /// Description of the table
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// XPath of the form root
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// XPath of the repeating element, for repeating tables
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Table this repeating table belongs to, by convention only
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Whether the table holds one row per occurrence of a repeating element
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.group.is_some()
    }

    /// XPath that column names and extraction are relative to
    #[must_use]
    pub fn anchor(&self) -> &str {
        self.group.as_deref().unwrap_or(&self.root)
    }

    /// The `object_id` and `ein` key columns
    #[must_use]
    pub fn key_columns(&self) -> &[ColumnDefinition] {
        &self.keys
    }

    /// Data columns in declaration order
    #[must_use]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Key columns followed by data columns
    pub fn all_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.keys.iter().chain(self.columns.iter())
    }

    /// Position of a data column by name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Data column by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.column_index(name).map(|idx| &self.columns[idx])
    }

    /// Data column whose XPath or alias is `xpath`
    #[must_use]
    pub fn column_for_xpath(&self, xpath: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.matches_xpath(xpath))
    }

    /// Check if this table contains a column with the given name
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the Arrow schema for this table
    #[must_use]
    pub fn arrow_schema(&self) -> SchemaRef {
        self.arrow_schema.clone()
    }

    /// Create an empty row for this table
    #[must_use]
    pub fn new_record(&'static self, key: FilingKey) -> Record {
        Record::new(self, key)
    }

    /// Convert rows of this table into a record batch
    pub fn to_batch(&'static self, records: &[Record]) -> Result<RecordBatch> {
        records_to_batch(self, records)
    }

    /// Convert a record batch holding this table back into rows
    pub fn from_batch(&'static self, batch: &RecordBatch) -> Result<Vec<Record>> {
        records_from_batch(self, batch)
    }
}

/// Builder used by the `FormTable` derive
#[derive(Debug)]
pub struct TableDefinitionBuilder {
    name: String,
    form: FormKind,
    part: String,
    description: String,
    group: Option<String>,
    parent: Option<String>,
    columns: Vec<ColumnDefinition>,
}

impl TableDefinitionBuilder {
    /// Set the part label
    #[must_use]
    pub fn part(mut self, part: impl Into<String>) -> Self {
        self.part = part.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the table as repeating under the given element
    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Record the parent table
    #[must_use]
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the data columns
    #[must_use]
    pub fn columns(mut self, columns: Vec<ColumnDefinition>) -> Self {
        self.columns = columns;
        self
    }

    /// Resolve column names and cache the Arrow schema
    #[must_use]
    pub fn build(self) -> TableDefinition {
        let root = self.form.root_xpath();
        let anchor = self.group.clone().unwrap_or_else(|| root.clone());

        let mut columns = self.columns;
        for column in &mut columns {
            column.resolve_name(&anchor);
        }

        let keys = [
            ColumnDefinition::key("object_id", OBJECT_ID_MAX_LENGTH),
            ColumnDefinition::key("ein", EIN_MAX_LENGTH),
        ];

        let fields: Vec<arrow::datatypes::Field> = keys
            .iter()
            .chain(columns.iter())
            .map(ColumnDefinition::to_arrow_field)
            .collect();

        let mut metadata = HashMap::new();
        metadata.insert("table".to_string(), self.name.clone());
        metadata.insert("form".to_string(), self.form.root_element().to_string());
        if !self.part.is_empty() {
            metadata.insert("part".to_string(), self.part.clone());
        }
        if let Some(group) = &self.group {
            metadata.insert("group".to_string(), group.clone());
        }
        let arrow_schema = Arc::new(Schema::new_with_metadata(fields, metadata));

        // first declaration wins; duplicates are reported by `Catalog::check`
        let mut index = FxHashMap::default();
        for (idx, column) in columns.iter().enumerate() {
            index.entry(column.name.clone()).or_insert(idx);
        }

        TableDefinition {
            name: self.name,
            form: self.form,
            part: self.part,
            description: self.description,
            root,
            group: self.group,
            parent: self.parent,
            keys,
            columns,
            arrow_schema,
            index,
        }
    }
}

/// A Rust struct declaring one form table
///
/// Implemented by `#[derive(FormTable)]`.
pub trait FormTable: Sized {
    /// The table definition, built once
    fn definition() -> &'static TableDefinition;

    /// The `(object_id, ein)` key of this row
    fn key(&self) -> FilingKey;

    /// Convert to a dynamic row
    fn to_record(&self) -> Record;

    /// Convert from a dynamic row of the same table
    fn from_record(record: &Record) -> Result<Self>;

    /// Convert typed rows into a record batch
    fn to_batch(rows: &[Self]) -> Result<RecordBatch> {
        let records: Vec<Record> = rows.iter().map(Self::to_record).collect();
        records_to_batch(Self::definition(), &records)
    }

    /// Convert a record batch into typed rows
    fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        records_from_batch(Self::definition(), batch)?
            .iter()
            .map(Self::from_record)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field::FieldType;

    fn sample() -> TableDefinition {
        TableDefinition::builder("return_sample", FormKind::Form990)
            .part("Part I")
            .columns(vec![
                ColumnDefinition::new("/IRS990/CYTotalRevenueAmt", FieldType::BigInteger),
                ColumnDefinition::new("/IRS990/ActivityOrMissionDesc", FieldType::LongText)
                    .with_name("ActvtyOrMssnDsc"),
            ])
            .build()
    }

    #[test]
    fn test_keys_lead_the_arrow_schema() {
        let table = sample();
        let schema = table.arrow_schema();
        assert_eq!(schema.field(0).name(), "object_id");
        assert!(!schema.field(0).is_nullable());
        assert_eq!(schema.field(1).name(), "ein");
        assert_eq!(schema.field(2).name(), "CYTtlRvnAmt");
        assert_eq!(schema.fields().len(), 4);
        assert_eq!(
            schema.metadata().get("form").map(String::as_str),
            Some("IRS990")
        );
    }

    #[test]
    fn test_lookup_by_name_and_xpath() {
        let table = sample();
        assert_eq!(table.column_index("ActvtyOrMssnDsc"), Some(1));
        assert!(table.column_for_xpath("/IRS990/CYTotalRevenueAmt").is_some());
        assert!(!table.is_repeating());
        assert_eq!(table.anchor(), "/IRS990");
    }

    #[test]
    fn test_form_kind_parsing() {
        assert_eq!("990".parse::<FormKind>().ok(), Some(FormKind::Form990));
        assert_eq!("990-EZ".parse::<FormKind>().ok(), Some(FormKind::Form990EZ));
        assert_eq!("schedule_a".parse::<FormKind>().ok(), Some(FormKind::ScheduleA));
        assert_eq!(
            "IRS990ScheduleR".parse::<FormKind>().ok(),
            Some(FormKind::ScheduleR)
        );
        assert!("schedule_z".parse::<FormKind>().is_err());
        assert_eq!(FormKind::ScheduleO.to_string(), "Schedule O");
    }
}
