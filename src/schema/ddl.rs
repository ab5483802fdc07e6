//! SQL DDL rendering for form tables
//!
//! Tables carry no keys, indexes or constraints beyond `NOT NULL` on the
//! `(object_id, ein)` pair.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::field::{ColumnDefinition, DECIMAL_PRECISION, DECIMAL_SCALE, FieldType};
use super::table::TableDefinition;
use crate::catalog::Catalog;
use crate::error::Irs990Error;

/// Target SQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlDialect {
    #[default]
    Postgres,
    Sqlite,
}

impl FromStr for SqlDialect {
    type Err = Irs990Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(SqlDialect::Postgres),
            "sqlite" | "sqlite3" => Ok(SqlDialect::Sqlite),
            other => Err(Irs990Error::UnknownDialect(other.to_string())),
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlDialect::Postgres => write!(f, "postgres"),
            SqlDialect::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// SQL type of a column in the given dialect
#[must_use]
pub fn sql_type(column: &ColumnDefinition, dialect: SqlDialect) -> String {
    match dialect {
        SqlDialect::Postgres => match column.field_type {
            FieldType::Identifier | FieldType::ShortText | FieldType::Date => {
                format!("VARCHAR({})", column.max_length.unwrap_or_default())
            }
            FieldType::LongText => "TEXT".to_string(),
            FieldType::Integer => "INTEGER".to_string(),
            FieldType::BigInteger => "BIGINT".to_string(),
            FieldType::Decimal => format!("NUMERIC({DECIMAL_PRECISION}, {DECIMAL_SCALE})"),
        },
        SqlDialect::Sqlite => match column.field_type {
            FieldType::Identifier
            | FieldType::ShortText
            | FieldType::LongText
            | FieldType::Date => "TEXT".to_string(),
            FieldType::Integer | FieldType::BigInteger => "INTEGER".to_string(),
            FieldType::Decimal => "NUMERIC".to_string(),
        },
    }
}

/// Double-quote an identifier
#[must_use]
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Single-quote a string literal
#[must_use]
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Render `CREATE TABLE` for one table
///
/// The PostgreSQL rendering is followed by `COMMENT ON` statements carrying
/// the part, line numbers, descriptions and XPaths. SQLite gets the same
/// information as trailing `--` comments.
#[must_use]
pub fn create_table_sql(table: &TableDefinition, dialect: SqlDialect) -> String {
    CreateTable { table, dialect }.to_string()
}

/// `CREATE TABLE` and comment statements for one table in one dialect
struct CreateTable<'a> {
    table: &'a TableDefinition,
    dialect: SqlDialect,
}

impl fmt::Display for CreateTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        let table_ident = quote_ident(table.name());
        let columns: Vec<&ColumnDefinition> = table.all_columns().collect();
        let last = columns.len().saturating_sub(1);

        writeln!(f, "CREATE TABLE IF NOT EXISTS {table_ident} (")?;
        for (idx, column) in columns.iter().enumerate() {
            let null = if column.nullable { "" } else { " NOT NULL" };
            let separator = if idx == last { "" } else { "," };
            write!(
                f,
                "    {} {}{null}{separator}",
                quote_ident(&column.name),
                sql_type(column, self.dialect)
            )?;
            if self.dialect == SqlDialect::Sqlite {
                let comment = column.comment();
                if !comment.is_empty() {
                    write!(f, " -- {}", comment.replace('\n', " "))?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, ");")?;

        if self.dialect == SqlDialect::Postgres {
            writeln!(
                f,
                "COMMENT ON TABLE {table_ident} IS {};",
                quote_literal(&table_comment(table))
            )?;
            for column in table.columns() {
                let comment = column.comment();
                if comment.is_empty() {
                    continue;
                }
                writeln!(
                    f,
                    "COMMENT ON COLUMN {table_ident}.{} IS {};",
                    quote_ident(&column.name),
                    quote_literal(&comment)
                )?;
            }
        }
        Ok(())
    }
}

fn table_comment(table: &TableDefinition) -> String {
    let mut parts = vec![table.form().to_string()];
    if !table.part().is_empty() {
        parts.push(table.part().to_string());
    }
    if !table.description().is_empty() {
        parts.push(table.description().to_string());
    }
    if let Some(group) = table.group() {
        parts.push(format!("one row per {group}"));
    }
    if let Some(parent) = table.parent() {
        parts.push(format!("repeats under {parent}"));
    }
    parts.join("; ")
}

/// Render DDL for every table in the catalog, grouped by form
#[must_use]
pub fn catalog_ddl(catalog: &Catalog, dialect: SqlDialect) -> String {
    catalog
        .forms()
        .into_iter()
        .map(|form| {
            let tables = catalog
                .tables_for_form(form)
                .map(|table| create_table_sql(table, dialect))
                .join("\n");
            format!("-- {form}\n\n{tables}")
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::table::FormKind;

    fn sample() -> TableDefinition {
        TableDefinition::builder("return_sample", FormKind::Form990)
            .part("Part I")
            .columns(vec![
                ColumnDefinition::new("/IRS990/CYTotalRevenueAmt", FieldType::BigInteger)
                    .with_line("Part I Line 12")
                    .with_description("Total revenue - current year"),
                ColumnDefinition::new("/IRS990/ActivityOrMissionDesc", FieldType::LongText)
                    .with_description("Organization's mission"),
                ColumnDefinition::new("/IRS990/WebsiteAddressTxt", FieldType::ShortText),
            ])
            .build()
    }

    #[test]
    fn test_postgres_create_table() {
        let sql = create_table_sql(&sample(), SqlDialect::Postgres);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"return_sample\" (\n"));
        assert!(sql.contains("    \"object_id\" VARCHAR(31) NOT NULL,\n"));
        assert!(sql.contains("    \"ein\" VARCHAR(15) NOT NULL,\n"));
        assert!(sql.contains("    \"CYTtlRvnAmt\" BIGINT,\n"));
        assert!(sql.contains("    \"WbstAddrssTxt\" VARCHAR(100)\n);"));
        assert!(sql.contains(
            "COMMENT ON COLUMN \"return_sample\".\"ActvtyOrMssnDsc\" IS 'Organization''s mission; xpath: /IRS990/ActivityOrMissionDesc';"
        ));
    }

    #[test]
    fn test_sqlite_create_table() {
        let sql = create_table_sql(&sample(), SqlDialect::Sqlite);
        assert!(sql.contains("\"CYTtlRvnAmt\" INTEGER, -- Part I Line 12"));
        assert!(!sql.contains("COMMENT ON"));
    }

    #[test]
    fn test_statements_are_complete_lines() {
        let sql = create_table_sql(&sample(), SqlDialect::Postgres);
        assert!(sql.ends_with(";\n"));
        assert_eq!(sql.matches("COMMENT ON TABLE").count(), 1);
        // Two described columns, the undescribed one still has an xpath
        assert_eq!(sql.matches("COMMENT ON COLUMN").count(), 3);

        let sqlite = create_table_sql(&sample(), SqlDialect::Sqlite);
        assert!(sqlite.ends_with(");\n"));
        assert_eq!(sqlite.lines().count(), 7);
    }

    #[test]
    fn test_dialect_parsing() {
        assert_eq!("PostgreSQL".parse::<SqlDialect>().ok(), Some(SqlDialect::Postgres));
        assert_eq!("sqlite".parse::<SqlDialect>().ok(), Some(SqlDialect::Sqlite));
        assert!("oracle".parse::<SqlDialect>().is_err());
    }
}
