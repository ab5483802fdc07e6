//! Row values
//!
//! A [`Record`] is one row of one form table: the `(object_id, ein)` key plus
//! one optional scalar per declared column, in declaration order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::field::{DECIMAL_SCALE, FieldType};
use super::table::TableDefinition;
use crate::error::{Irs990Error, Result};

/// A single non-null column value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// Text, including dates kept as text
    Text(String),
    /// 32-bit count
    Integer(i32),
    /// 64-bit amount
    BigInteger(i64),
    /// Decimal mantissa scaled by [`DECIMAL_SCALE`]
    Decimal(i128),
}

impl FieldValue {
    /// Whether this value can be stored in a column of the given type
    #[must_use]
    pub fn fits(&self, field_type: FieldType) -> bool {
        match self {
            FieldValue::Text(_) => field_type.is_text(),
            FieldValue::Integer(_) => {
                matches!(field_type, FieldType::Integer | FieldType::BigInteger)
            }
            FieldValue::BigInteger(_) => field_type == FieldType::BigInteger,
            FieldValue::Decimal(_) => field_type == FieldType::Decimal,
        }
    }

    /// Text view of the value, if it is text
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::BigInteger(value) => write!(f, "{value}"),
            FieldValue::Decimal(mantissa) => write!(f, "{}", format_decimal(*mantissa)),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::Integer(value) => serializer.serialize_i32(*value),
            FieldValue::BigInteger(value) => serializer.serialize_i64(*value),
            FieldValue::Decimal(mantissa) => serializer.serialize_str(&format_decimal(*mantissa)),
        }
    }
}

/// Render a scaled decimal mantissa, e.g. `1234500` as `12.34500`
#[must_use]
pub fn format_decimal(mantissa: i128) -> String {
    let scale = DECIMAL_SCALE.unsigned_abs() as u32;
    let divisor = 10_i128.pow(scale);
    let sign = if mantissa < 0 { "-" } else { "" };
    let abs = mantissa.unsigned_abs();
    let divisor = divisor.unsigned_abs();
    format!(
        "{sign}{}.{:0width$}",
        abs / divisor,
        abs % divisor,
        width = scale as usize
    )
}

/// Conversion between Rust field types and [`FieldValue`]
pub trait ColumnValue: Sized {
    /// Name of the expected value kind, for error messages
    const EXPECTED: &'static str;

    /// Wrap the value
    fn into_value(self) -> FieldValue;

    /// Unwrap a value of the matching kind
    fn from_value(value: &FieldValue) -> Option<Self>;
}

impl ColumnValue for String {
    const EXPECTED: &'static str = "text";

    fn into_value(self) -> FieldValue {
        FieldValue::Text(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl ColumnValue for i32 {
    const EXPECTED: &'static str = "integer";

    fn into_value(self) -> FieldValue {
        FieldValue::Integer(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::BigInteger(value) => i32::try_from(*value).ok(),
            _ => None,
        }
    }
}

impl ColumnValue for i64 {
    const EXPECTED: &'static str = "amount";

    fn into_value(self) -> FieldValue {
        FieldValue::BigInteger(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(value) => Some(i64::from(*value)),
            FieldValue::BigInteger(value) => Some(*value),
            _ => None,
        }
    }
}

impl ColumnValue for f64 {
    const EXPECTED: &'static str = "decimal";

    #[allow(clippy::cast_possible_truncation)]
    fn into_value(self) -> FieldValue {
        let factor = 10_f64.powi(i32::from(DECIMAL_SCALE));
        FieldValue::Decimal((self * factor).round() as i128)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Decimal(mantissa) => {
                Some(*mantissa as f64 / 10_f64.powi(i32::from(DECIMAL_SCALE)))
            }
            _ => None,
        }
    }
}

/// The `(object_id, ein)` pair identifying the filing a row belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct FilingKey {
    pub object_id: String,
    pub ein: String,
}

impl FilingKey {
    /// Create a new filing key
    pub fn new(object_id: impl Into<String>, ein: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            ein: ein.into(),
        }
    }
}

impl fmt::Display for FilingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.object_id, self.ein)
    }
}

/// One row of a form table
#[derive(Debug, Clone)]
pub struct Record {
    table: &'static TableDefinition,
    key: FilingKey,
    values: Vec<Option<FieldValue>>,
}

impl Record {
    /// Create an empty row for the given table
    #[must_use]
    pub fn new(table: &'static TableDefinition, key: FilingKey) -> Self {
        Self {
            table,
            key,
            values: vec![None; table.columns().len()],
        }
    }

    /// Table this row belongs to
    #[must_use]
    pub fn definition(&self) -> &'static TableDefinition {
        self.table
    }

    /// Name of the table this row belongs to
    #[must_use]
    pub fn table_name(&self) -> &str {
        self.table.name()
    }

    /// The `(object_id, ein)` key
    #[must_use]
    pub fn key(&self) -> &FilingKey {
        &self.key
    }

    /// Set the value of the column at `idx`; out-of-range indexes are ignored
    pub fn set_value(&mut self, idx: usize, value: Option<FieldValue>) {
        if let Some(slot) = self.values.get_mut(idx) {
            *slot = value;
        }
    }

    /// Set the value of a column by name
    pub fn set(&mut self, column: &str, value: Option<FieldValue>) -> Result<()> {
        let idx = self
            .table
            .column_index(column)
            .ok_or_else(|| Irs990Error::UnknownColumn {
                table: self.table.name().to_string(),
                column: column.to_string(),
            })?;
        self.values[idx] = value;
        Ok(())
    }

    /// Value of the column at `idx`
    #[must_use]
    pub fn value(&self, idx: usize) -> Option<&FieldValue> {
        self.values.get(idx).and_then(Option::as_ref)
    }

    /// Value of a column by name
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.table
            .column_index(column)
            .and_then(|idx| self.value(idx))
    }

    /// Typed value of the column at `idx`
    pub fn typed<T: ColumnValue>(&self, idx: usize) -> Result<Option<T>> {
        match self.value(idx) {
            None => Ok(None),
            Some(value) => T::from_value(value).map(Some).ok_or_else(|| {
                Irs990Error::TypeMismatch {
                    table: self.table.name().to_string(),
                    column: self
                        .table
                        .columns()
                        .get(idx)
                        .map(|column| column.name.clone())
                        .unwrap_or_default(),
                    expected: T::EXPECTED.to_string(),
                }
            }),
        }
    }

    /// All values in column order
    #[must_use]
    pub fn values(&self) -> &[Option<FieldValue>] {
        &self.values
    }

    /// Number of non-null data values
    #[must_use]
    pub fn populated(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    /// Whether no data column has a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated() == 0
    }

    /// Fail unless this row belongs to `table`
    pub fn ensure_table(&self, table: &TableDefinition) -> Result<()> {
        if self.table.name() == table.name() {
            Ok(())
        } else {
            Err(Irs990Error::TableMismatch {
                expected: table.name().to_string(),
                found: self.table.name().to_string(),
            })
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.table.name() == other.table.name()
            && self.key == other.key
            && self.values == other.values
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.populated()))?;
        map.serialize_entry("object_id", &self.key.object_id)?;
        map.serialize_entry("ein", &self.key.ein)?;
        for (column, value) in self.table.columns().iter().zip(&self.values) {
            if let Some(value) = value {
                map.serialize_entry(&column.name, value)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1_234_500), "12.34500");
        assert_eq!(format_decimal(-50_000), "-0.50000");
        assert_eq!(format_decimal(0), "0.00000");
    }

    #[test]
    fn test_column_value_widening() {
        assert_eq!(i64::from_value(&FieldValue::Integer(7)), Some(7));
        assert_eq!(i32::from_value(&FieldValue::BigInteger(i64::MAX)), None);
        assert_eq!(String::from_value(&FieldValue::Integer(7)), None);
    }

    #[test]
    fn test_decimal_from_f64() {
        assert_eq!(0.7534_f64.into_value(), FieldValue::Decimal(75_340));
        let back = f64::from_value(&FieldValue::Decimal(4_000_000));
        assert_eq!(back, Some(40.0));
    }

    #[test]
    fn test_fits() {
        assert!(FieldValue::Text("X".into()).fits(FieldType::ShortText));
        assert!(FieldValue::Integer(1).fits(FieldType::BigInteger));
        assert!(!FieldValue::BigInteger(1).fits(FieldType::Integer));
        assert!(!FieldValue::Decimal(1).fits(FieldType::LongText));
    }
}
