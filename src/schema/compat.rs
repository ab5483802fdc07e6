//! Compatibility of stored data with the catalog's table definitions.

use arrow::datatypes::Schema;

use super::table::TableDefinition;

/// A single difference between a stored schema and a table definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssue {
    /// A declared column is absent from the stored schema
    MissingColumn { column: String },
    /// The stored schema has a column the table does not declare
    UnexpectedColumn { column: String },
    /// A column is stored with a different Arrow type
    TypeMismatch {
        column: String,
        expected: String,
        found: String,
    },
    /// A key column is stored as nullable
    NullableKey { column: String },
}

impl std::fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaIssue::MissingColumn { column } => write!(f, "missing column '{column}'"),
            SchemaIssue::UnexpectedColumn { column } => {
                write!(f, "unexpected column '{column}'")
            }
            SchemaIssue::TypeMismatch {
                column,
                expected,
                found,
            } => write!(f, "column '{column}': expected {expected}, found {found}"),
            SchemaIssue::NullableKey { column } => {
                write!(f, "key column '{column}' is nullable")
            }
        }
    }
}

/// Result of comparing a stored schema with a table definition
#[derive(Debug, Clone)]
pub struct SchemaCompatibilityReport {
    /// Name of the table checked
    pub table: String,
    /// Whether rows of the stored schema can be read as this table
    pub compatible: bool,
    /// All differences found
    pub issues: Vec<SchemaIssue>,
}

impl SchemaCompatibilityReport {
    /// Declared columns absent from the stored schema
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().filter_map(|issue| match issue {
            SchemaIssue::MissingColumn { column } => Some(column.as_str()),
            _ => None,
        })
    }

    /// Stored columns the table does not declare
    pub fn unexpected(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().filter_map(|issue| match issue {
            SchemaIssue::UnexpectedColumn { column } => Some(column.as_str()),
            _ => None,
        })
    }
}

/// Compare a stored Arrow schema with a table definition
///
/// Missing data columns and unexpected columns are reported but do not make
/// the schema incompatible: missing columns read as null and extra columns
/// are ignored. Missing keys, nullable keys and type mismatches do.
#[must_use]
pub fn check_schema(table: &TableDefinition, schema: &Schema) -> SchemaCompatibilityReport {
    let mut issues = Vec::new();
    let mut compatible = true;

    for column in table.key_columns() {
        match schema.field_with_name(&column.name) {
            Err(_) => {
                compatible = false;
                issues.push(SchemaIssue::MissingColumn {
                    column: column.name.clone(),
                });
            }
            Ok(field) => {
                if field.is_nullable() {
                    issues.push(SchemaIssue::NullableKey {
                        column: column.name.clone(),
                    });
                }
                if field.data_type() != &column.field_type.to_arrow_type() {
                    compatible = false;
                    issues.push(SchemaIssue::TypeMismatch {
                        column: column.name.clone(),
                        expected: column.field_type.to_arrow_type().to_string(),
                        found: field.data_type().to_string(),
                    });
                }
            }
        }
    }

    for column in table.columns() {
        let Ok(field) = schema.field_with_name(&column.name) else {
            issues.push(SchemaIssue::MissingColumn {
                column: column.name.clone(),
            });
            continue;
        };
        let expected = column.field_type.to_arrow_type();
        if field.data_type() != &expected {
            compatible = false;
            issues.push(SchemaIssue::TypeMismatch {
                column: column.name.clone(),
                expected: expected.to_string(),
                found: field.data_type().to_string(),
            });
        }
    }

    for field in schema.fields() {
        let declared = table.has_column(field.name())
            || table.key_columns().iter().any(|key| &key.name == field.name());
        if !declared {
            issues.push(SchemaIssue::UnexpectedColumn {
                column: field.name().clone(),
            });
        }
    }

    SchemaCompatibilityReport {
        table: table.name().to_string(),
        compatible,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field::{ColumnDefinition, FieldType};
    use crate::schema::table::FormKind;
    use arrow::datatypes::{DataType, Field};

    fn sample() -> TableDefinition {
        TableDefinition::builder("return_sample", FormKind::Form990)
            .columns(vec![
                ColumnDefinition::new("/IRS990/CYTotalRevenueAmt", FieldType::BigInteger),
                ColumnDefinition::new("/IRS990/WebsiteAddressTxt", FieldType::ShortText),
            ])
            .build()
    }

    #[test]
    fn test_own_schema_is_compatible() {
        let table = sample();
        let report = check_schema(&table, &table.arrow_schema());
        assert!(report.compatible);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_missing_and_extra_columns() {
        let table = sample();
        let schema = Schema::new(vec![
            Field::new("object_id", DataType::Utf8, false),
            Field::new("ein", DataType::Utf8, false),
            Field::new("CYTtlRvnAmt", DataType::Int64, true),
            Field::new("Extra", DataType::Utf8, true),
        ]);
        let report = check_schema(&table, &schema);
        assert!(report.compatible);
        assert_eq!(report.missing().collect::<Vec<_>>(), vec!["WbstAddrssTxt"]);
        assert_eq!(report.unexpected().collect::<Vec<_>>(), vec!["Extra"]);
    }

    #[test]
    fn test_type_mismatch_is_incompatible() {
        let table = sample();
        let schema = Schema::new(vec![
            Field::new("object_id", DataType::Utf8, false),
            Field::new("ein", DataType::Utf8, false),
            Field::new("CYTtlRvnAmt", DataType::Utf8, true),
        ]);
        let report = check_schema(&table, &schema);
        assert!(!report.compatible);
        assert!(report.issues.contains(&SchemaIssue::TypeMismatch {
            column: "CYTtlRvnAmt".to_string(),
            expected: "Int64".to_string(),
            found: "Utf8".to_string(),
        }));
    }

    #[test]
    fn test_missing_key_is_incompatible() {
        let table = sample();
        let schema = Schema::new(vec![Field::new("ein", DataType::Utf8, false)]);
        assert!(!check_schema(&table, &schema).compatible);
    }
}
