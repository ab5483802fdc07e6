//! Conversion between rows and Arrow record batches

use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, AsArray, Decimal128Builder, Int32Builder, Int64Builder, StringArray,
    StringBuilder,
};
use arrow::datatypes::{Decimal128Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;

use super::field::{ColumnDefinition, DECIMAL_PRECISION, DECIMAL_SCALE, FieldType};
use super::table::TableDefinition;
use super::value::{FieldValue, FilingKey, Record};
use crate::error::{Irs990Error, Result};

/// Build a record batch with the table's Arrow schema from rows of that table
pub fn records_to_batch(table: &TableDefinition, records: &[Record]) -> Result<RecordBatch> {
    for record in records {
        record.ensure_table(table)?;
    }

    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(table.columns().len() + 2);
    arrays.push(Arc::new(StringArray::from_iter_values(
        records.iter().map(|record| record.key().object_id.as_str()),
    )));
    arrays.push(Arc::new(StringArray::from_iter_values(
        records.iter().map(|record| record.key().ein.as_str()),
    )));

    for (idx, column) in table.columns().iter().enumerate() {
        arrays.push(build_column(column, idx, records)?);
    }

    Ok(RecordBatch::try_new(table.arrow_schema(), arrays)?)
}

fn build_column(column: &ColumnDefinition, idx: usize, records: &[Record]) -> Result<ArrayRef> {
    let rows = records.len();
    let array: ArrayRef = match column.field_type {
        FieldType::Identifier | FieldType::ShortText | FieldType::LongText | FieldType::Date => {
            let mut builder = StringBuilder::with_capacity(rows, rows * 16);
            for record in records {
                builder.append_option(record.typed::<String>(idx)?);
            }
            Arc::new(builder.finish())
        }
        FieldType::Integer => {
            let mut builder = Int32Builder::with_capacity(rows);
            for record in records {
                builder.append_option(record.typed::<i32>(idx)?);
            }
            Arc::new(builder.finish())
        }
        FieldType::BigInteger => {
            let mut builder = Int64Builder::with_capacity(rows);
            for record in records {
                builder.append_option(record.typed::<i64>(idx)?);
            }
            Arc::new(builder.finish())
        }
        FieldType::Decimal => {
            let mut builder = Decimal128Builder::with_capacity(rows)
                .with_precision_and_scale(DECIMAL_PRECISION, DECIMAL_SCALE)?;
            for record in records {
                match record.value(idx) {
                    None => builder.append_null(),
                    Some(FieldValue::Decimal(mantissa)) => builder.append_value(*mantissa),
                    Some(_) => return Err(mismatch(record.definition(), column)),
                }
            }
            Arc::new(builder.finish())
        }
    };
    Ok(array)
}

/// Read rows of `table` back from a record batch
///
/// Data columns absent from the batch are read as null; the key columns are
/// required and must be non-null.
pub fn records_from_batch(
    table: &'static TableDefinition,
    batch: &RecordBatch,
) -> Result<Vec<Record>> {
    let object_ids = key_column(table, batch, "object_id")?;
    let eins = key_column(table, batch, "ein")?;

    let mut records = Vec::with_capacity(batch.num_rows());
    for row in 0..batch.num_rows() {
        if object_ids.is_null(row) {
            return Err(Irs990Error::MissingKey {
                object_id: format!("{} row {row}", table.name()),
                field: "object_id",
            });
        }
        let object_id = object_ids.value(row);
        if eins.is_null(row) {
            return Err(Irs990Error::MissingKey {
                object_id: object_id.to_string(),
                field: "ein",
            });
        }
        records.push(Record::new(
            table,
            FilingKey::new(object_id, eins.value(row)),
        ));
    }

    for (idx, column) in table.columns().iter().enumerate() {
        let Some(array) = batch.column_by_name(&column.name) else {
            continue;
        };
        read_column(table, column, idx, array, &mut records)?;
    }

    Ok(records)
}

fn key_column<'a>(
    table: &TableDefinition,
    batch: &'a RecordBatch,
    name: &str,
) -> Result<&'a StringArray> {
    batch
        .column_by_name(name)
        .ok_or_else(|| Irs990Error::UnknownColumn {
            table: table.name().to_string(),
            column: name.to_string(),
        })?
        .as_string_opt::<i32>()
        .ok_or_else(|| Irs990Error::TypeMismatch {
            table: table.name().to_string(),
            column: name.to_string(),
            expected: "Utf8".to_string(),
        })
}

fn read_column(
    table: &TableDefinition,
    column: &ColumnDefinition,
    idx: usize,
    array: &ArrayRef,
    records: &mut [Record],
) -> Result<()> {
    match column.field_type {
        FieldType::Identifier | FieldType::ShortText | FieldType::LongText | FieldType::Date => {
            let values = array
                .as_string_opt::<i32>()
                .ok_or_else(|| mismatch(table, column))?;
            for (row, record) in records.iter_mut().enumerate() {
                if values.is_valid(row) {
                    record.set_value(idx, Some(FieldValue::Text(values.value(row).to_string())));
                }
            }
        }
        FieldType::Integer => {
            let values = array
                .as_primitive_opt::<Int32Type>()
                .ok_or_else(|| mismatch(table, column))?;
            for (row, record) in records.iter_mut().enumerate() {
                if values.is_valid(row) {
                    record.set_value(idx, Some(FieldValue::Integer(values.value(row))));
                }
            }
        }
        FieldType::BigInteger => {
            let values = array
                .as_primitive_opt::<Int64Type>()
                .ok_or_else(|| mismatch(table, column))?;
            for (row, record) in records.iter_mut().enumerate() {
                if values.is_valid(row) {
                    record.set_value(idx, Some(FieldValue::BigInteger(values.value(row))));
                }
            }
        }
        FieldType::Decimal => {
            let values = array
                .as_primitive_opt::<Decimal128Type>()
                .ok_or_else(|| mismatch(table, column))?;
            if values.scale() != DECIMAL_SCALE {
                return Err(mismatch(table, column));
            }
            for (row, record) in records.iter_mut().enumerate() {
                if values.is_valid(row) {
                    record.set_value(idx, Some(FieldValue::Decimal(values.value(row))));
                }
            }
        }
    }
    Ok(())
}

fn mismatch(table: &TableDefinition, column: &ColumnDefinition) -> Irs990Error {
    Irs990Error::TypeMismatch {
        table: table.name().to_string(),
        column: column.name.clone(),
        expected: column.field_type.to_arrow_type().to_string(),
    }
}
