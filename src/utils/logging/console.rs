//! Console output for inspecting stored tables.

use arrow::array::Array;
use arrow::datatypes::Schema;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};

/// Print row and batch counts
pub fn print_batch_summary(batches: &[RecordBatch], elapsed: std::time::Duration) {
    println!("Read {} record batches in {:?}", batches.len(), elapsed);
    println!(
        "Total rows: {}",
        batches.iter().map(RecordBatch::num_rows).sum::<usize>()
    );
}

/// Print each field with its type and form line
pub fn print_schema_info(schema: &Schema) {
    if let Some(table) = schema.metadata().get("table") {
        println!("Table: {table}");
    }
    println!("Schema:");
    for field in schema.fields() {
        let line = field
            .metadata()
            .get("line_number")
            .map(|line| format!(" [{line}]"))
            .unwrap_or_default();
        println!("  - {} ({}){line}", field.name(), field.data_type());
    }
}

/// Print the first `num_rows` rows of a batch, skipping null columns
pub fn print_sample_rows(batch: &RecordBatch, num_rows: usize) -> Result<(), ArrowError> {
    let options = FormatOptions::default();
    let formatters = batch
        .columns()
        .iter()
        .map(|column| ArrayFormatter::try_new(column.as_ref(), &options))
        .collect::<Result<Vec<_>, ArrowError>>()?;
    let schema = batch.schema();

    println!("First {} rows:", num_rows.min(batch.num_rows()));
    for row_idx in 0..num_rows.min(batch.num_rows()) {
        let cells: Vec<String> = formatters
            .iter()
            .enumerate()
            .filter(|(col_idx, _)| !batch.column(*col_idx).is_null(row_idx))
            .map(|(col_idx, formatter)| {
                format!("{}: {}", schema.field(col_idx).name(), formatter.value(row_idx))
            })
            .collect();
        println!("Row {row_idx}: [{}]", cells.join(", "));
    }
    Ok(())
}
