//! Procedural macros for the irs990-schema crate
//!
//! This crate provides the `FormTable` derive, which turns a plain struct
//! declaration of an IRS form part into a table definition plus the record
//! conversions the ingestion pipeline relies on.

use proc_macro::TokenStream;

mod form_table;
mod utils;

/// Derive macro for declaring a form table
///
/// Every struct must declare `object_id: String` and `ein: String`. All other
/// fields are `Option<T>` where `T` selects the column type:
/// `String` (short text, or long text with `long`, or date-as-text with
/// `date`), `i32` (integer), `i64` (amount) and `f64` (fixed-precision
/// decimal). Doc comments become column descriptions.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(FormTable)]
/// #[table(name = "return_part_i", form = "Form990", part = "Part I", description = "Summary")]
/// pub struct PartI {
///     pub object_id: String,
///     pub ein: String,
///
///     /// Briefly describe the organization's mission or most significant activities
///     #[field(xpath = "/IRS990/ActivityOrMissionDesc", line = "Part I Line 1", long)]
///     pub activity_or_mission_desc: Option<String>,
///
///     /// Total revenue - current year
///     #[field(xpath = "/IRS990/CYTotalRevenueAmt", line = "Part I Line 12",
///             alias = "/IRS990/TotalRevenueCurrentYear")]
///     pub cy_total_revenue_amt: Option<i64>,
/// }
/// ```
#[proc_macro_derive(FormTable, attributes(table, field))]
pub fn derive_form_table(input: TokenStream) -> TokenStream {
    form_table::process_derive_form_table(input)
}
