//! The schema catalog: every declared form part and repeating group.
//!
//! Declarations live in one module per form or schedule. Each module lists
//! its tables in [`tables`] order; the catalog keeps that order, grouped by
//! [`FormKind`].

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{Irs990Error, Result};
use crate::schema::field::relative_path;
use crate::schema::{ColumnDefinition, FormKind, TableDefinition};

pub mod form990;
pub mod form990ez;
pub mod form990pf;
pub mod header;
pub mod schedule_a;
pub mod schedule_b;
pub mod schedule_c;
pub mod schedule_d;
pub mod schedule_e;
pub mod schedule_f;
pub mod schedule_g;
pub mod schedule_h;
pub mod schedule_i;
pub mod schedule_j;
pub mod schedule_k;
pub mod schedule_l;
pub mod schedule_m;
pub mod schedule_n;
pub mod schedule_o;
pub mod schedule_r;

/// PostgreSQL truncates identifiers beyond this length
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Every table definition, in catalog order
#[must_use]
pub fn tables() -> Vec<&'static TableDefinition> {
    [
        header::tables(),
        form990::tables(),
        form990ez::tables(),
        form990pf::tables(),
        schedule_a::tables(),
        schedule_b::tables(),
        schedule_c::tables(),
        schedule_d::tables(),
        schedule_e::tables(),
        schedule_f::tables(),
        schedule_g::tables(),
        schedule_h::tables(),
        schedule_i::tables(),
        schedule_j::tables(),
        schedule_k::tables(),
        schedule_l::tables(),
        schedule_m::tables(),
        schedule_n::tables(),
        schedule_o::tables(),
        schedule_r::tables(),
    ]
    .concat()
}

/// A structural problem found by [`Catalog::check`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogIssue {
    DuplicateTable { table: String },
    DuplicateColumn { table: String, column: String },
    IdentifierTooLong { table: String, identifier: String },
    UnanchoredXpath { table: String, xpath: String },
    EmptyTable { table: String },
    UnknownParent { table: String, parent: String },
    InvalidParent { table: String, parent: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateTable { table } => write!(f, "table {table} is declared twice"),
            CatalogIssue::DuplicateColumn { table, column } => {
                write!(f, "column {column} is declared twice in {table}")
            }
            CatalogIssue::IdentifierTooLong { table, identifier } => {
                write!(f, "{table}: identifier {identifier} is too long")
            }
            CatalogIssue::UnanchoredXpath { table, xpath } => {
                write!(f, "{table}: {xpath} is not below the table anchor")
            }
            CatalogIssue::EmptyTable { table } => write!(f, "table {table} has no columns"),
            CatalogIssue::UnknownParent { table, parent } => {
                write!(f, "{table}: parent table {parent} does not exist")
            }
            CatalogIssue::InvalidParent { table, parent } => {
                write!(f, "{table}: parent {parent} is not a single table of the same form")
            }
        }
    }
}

/// Lookup structure over all table definitions
#[derive(Debug)]
pub struct Catalog {
    tables: Vec<&'static TableDefinition>,
    by_name: FxHashMap<String, usize>,
    by_xpath: FxHashMap<String, (usize, usize)>,
}

impl Catalog {
    /// The catalog of all declared tables, built on first use
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(tables()))
    }

    /// Build a catalog from a list of definitions
    #[must_use]
    pub fn new(tables: Vec<&'static TableDefinition>) -> Self {
        let mut by_name = FxHashMap::default();
        let mut by_xpath = FxHashMap::default();
        for (table_idx, table) in tables.iter().enumerate() {
            by_name.entry(table.name().to_string()).or_insert(table_idx);
            for (column_idx, column) in table.columns().iter().enumerate() {
                for xpath in column.xpaths() {
                    by_xpath
                        .entry(xpath.to_string())
                        .or_insert((table_idx, column_idx));
                }
            }
        }
        log::debug!("Catalog built with {} tables", tables.len());
        Self {
            tables,
            by_name,
            by_xpath,
        }
    }

    /// All tables in catalog order
    #[must_use]
    pub fn tables(&self) -> &[&'static TableDefinition] {
        &self.tables
    }

    /// Number of tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the catalog has no tables
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table by name
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&'static TableDefinition> {
        self.by_name.get(name).map(|&idx| self.tables[idx])
    }

    /// Table by name, failing with `UnknownTable`
    pub fn require(&self, name: &str) -> Result<&'static TableDefinition> {
        self.table(name)
            .ok_or_else(|| Irs990Error::UnknownTable(name.to_string()))
    }

    /// Tables of one form, in catalog order
    pub fn tables_for_form(
        &self,
        form: FormKind,
    ) -> impl Iterator<Item = &'static TableDefinition> + '_ {
        self.tables
            .iter()
            .copied()
            .filter(move |table| table.form() == form)
    }

    /// Forms that have at least one table, in [`FormKind::ALL`] order
    #[must_use]
    pub fn forms(&self) -> Vec<FormKind> {
        FormKind::ALL
            .iter()
            .copied()
            .filter(|form| self.tables.iter().any(|table| table.form() == *form))
            .collect()
    }

    /// The table and column an XPath (or alias) is stored in
    ///
    /// XPaths claimed by more than one table resolve to the first one.
    #[must_use]
    pub fn column_for_xpath(
        &self,
        xpath: &str,
    ) -> Option<(&'static TableDefinition, &'static ColumnDefinition)> {
        self.by_xpath.get(xpath).map(|&(table_idx, column_idx)| {
            let table = self.tables[table_idx];
            (table, &table.columns()[column_idx])
        })
    }

    /// Total number of data columns
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|table| table.columns().len()).sum()
    }

    /// Structural self-check
    ///
    /// Table names are unique, column names are unique within a table and
    /// fit a PostgreSQL identifier, every XPath and alias lies below the
    /// table anchor, and every declared parent is a single table of the same
    /// form.
    #[must_use]
    pub fn check(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut names = HashSet::new();

        for table in &self.tables {
            let table_name = table.name().to_string();
            if !names.insert(table.name()) {
                issues.push(CatalogIssue::DuplicateTable {
                    table: table_name.clone(),
                });
            }
            if table.name().len() > MAX_IDENTIFIER_LENGTH {
                issues.push(CatalogIssue::IdentifierTooLong {
                    table: table_name.clone(),
                    identifier: table_name.clone(),
                });
            }
            if table.columns().is_empty() {
                issues.push(CatalogIssue::EmptyTable {
                    table: table_name.clone(),
                });
            }

            let mut columns = HashSet::new();
            for column in table.all_columns() {
                if !columns.insert(column.name.as_str()) {
                    issues.push(CatalogIssue::DuplicateColumn {
                        table: table_name.clone(),
                        column: column.name.clone(),
                    });
                }
                if column.name.len() > MAX_IDENTIFIER_LENGTH {
                    issues.push(CatalogIssue::IdentifierTooLong {
                        table: table_name.clone(),
                        identifier: column.name.clone(),
                    });
                }
            }

            if let Some(group) = table.group() {
                if !relative_path(group, table.root()).is_some_and(|rest| !rest.is_empty()) {
                    issues.push(CatalogIssue::UnanchoredXpath {
                        table: table_name.clone(),
                        xpath: group.to_string(),
                    });
                }
            }
            for column in table.columns() {
                for xpath in column.xpaths() {
                    let anchored =
                        relative_path(xpath, table.anchor()).is_some_and(|rest| !rest.is_empty());
                    if !anchored {
                        issues.push(CatalogIssue::UnanchoredXpath {
                            table: table_name.clone(),
                            xpath: xpath.to_string(),
                        });
                    }
                }
            }

            if let Some(parent) = table.parent() {
                match self.table(parent) {
                    None => issues.push(CatalogIssue::UnknownParent {
                        table: table_name.clone(),
                        parent: parent.to_string(),
                    }),
                    Some(parent_table)
                        if parent_table.form() != table.form() || parent_table.is_repeating() =>
                    {
                        issues.push(CatalogIssue::InvalidParent {
                            table: table_name.clone(),
                            parent: parent.to_string(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        issues
    }

    /// JSON description of every table, for export
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tables)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;

    #[test]
    fn test_global_catalog_passes_self_check() {
        let issues = Catalog::global().check();
        assert!(issues.is_empty(), "catalog issues: {issues:?}");
    }

    #[test]
    fn test_every_form_is_covered() {
        let catalog = Catalog::global();
        assert_eq!(catalog.forms(), FormKind::ALL.to_vec());
    }

    #[test]
    fn test_xpath_lookup_includes_aliases() {
        let catalog = Catalog::global();
        let (table, column) = catalog
            .column_for_xpath("/IRS990/CYTotalRevenueAmt")
            .expect("current xpath");
        assert_eq!(table.name(), "return_part_i");
        assert_eq!(column.name, "CYTtlRvnAmt");

        let (_, alias_column) = catalog
            .column_for_xpath("/IRS990/TotalRevenueCurrentYear")
            .expect("alias xpath");
        assert_eq!(alias_column.name, "CYTtlRvnAmt");
    }

    #[test]
    fn test_check_reports_bad_parent_and_anchor() {
        static BROKEN: OnceLock<TableDefinition> = OnceLock::new();
        let broken = BROKEN.get_or_init(|| {
            TableDefinition::builder("return_broken", FormKind::ScheduleO)
                .group("/IRS990ScheduleO/SupplementalInformationDetail")
                .parent("return_nowhere")
                .columns(vec![ColumnDefinition::new(
                    "/IRS990/ActivityOrMissionDesc",
                    FieldType::LongText,
                )])
                .build()
        });
        let catalog = Catalog::new(vec![broken, broken]);
        let issues = catalog.check();
        assert!(issues.contains(&CatalogIssue::DuplicateTable {
            table: "return_broken".to_string()
        }));
        assert!(issues.contains(&CatalogIssue::UnknownParent {
            table: "return_broken".to_string(),
            parent: "return_nowhere".to_string(),
        }));
        assert!(issues.contains(&CatalogIssue::UnanchoredXpath {
            table: "return_broken".to_string(),
            xpath: "/IRS990/ActivityOrMissionDesc".to_string(),
        }));
    }
}
