//! Output formatting module
//!
//! Handles the output formats: table, CSV, JSON and YAML. Record types opt in
//! by implementing [`TableRow`]; structured formats serialize the records
//! themselves.

mod common;
mod csv;
mod json;
mod projects;
mod regions;
mod stacks;
mod table;
mod tasks;
mod volumes;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use common::escape_csv;
pub use tasks::{created_resource_rows, CreatedResourceRow};

/// Column view of a record for table and CSV output
pub trait TableRow: Serialize {
    /// Column headers in display order
    fn headers() -> &'static [&'static str];

    /// Cell values, one per header
    fn cells(&self) -> Vec<String>;
}

/// Render a list of records in the requested format
pub fn render_records<T: TableRow>(
    records: &[T],
    format: OutputFormat,
    no_header: bool,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::render(records, no_header)),
        OutputFormat::Csv => Ok(csv::render(records, no_header)),
        OutputFormat::Json => json::to_json(records),
        OutputFormat::Yaml => json::to_yaml(records),
    }
}

/// Render a single record; structured formats emit the bare object
pub fn render_record<T: TableRow>(
    record: &T,
    format: OutputFormat,
    no_header: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(record),
        OutputFormat::Yaml => json::to_yaml(record),
        _ => render_records(std::slice::from_ref(record), format, no_header),
    }
}

/// Print a list of records to stdout
///
/// Tables get a trailing total line unless headers are suppressed.
pub fn output_records<T: TableRow>(
    records: &[T],
    format: OutputFormat,
    no_header: bool,
    label: &str,
) -> Result<()> {
    let rendered = render_records(records, format, no_header)?;
    if format == OutputFormat::Table {
        println!();
        println!("{}", rendered);
        if !no_header {
            println!("\nTotal: {} {}", records.len(), label);
        }
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

/// Print a single record to stdout
pub fn output_record<T: TableRow>(record: &T, format: OutputFormat, no_header: bool) -> Result<()> {
    let rendered = render_record(record, format, no_header)?;
    if format == OutputFormat::Table {
        println!();
    }
    println!("{}", rendered);
    Ok(())
}

/// Print an arbitrary serializable value as JSON or YAML
pub fn output_structured<S: Serialize + ?Sized>(value: &S, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Yaml => json::to_yaml(value)?,
        _ => json::to_json(value)?,
    };
    println!("{}", rendered);
    Ok(())
}
