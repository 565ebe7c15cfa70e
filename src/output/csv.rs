//! CSV output formatter

use super::common::escape_csv;
use super::TableRow;

/// Header label as a CSV column name: lowercase, underscores for spaces
fn column_name(header: &str) -> String {
    header
        .to_lowercase()
        .replace(['(', ')'], "")
        .trim()
        .replace(' ', "_")
}

/// Render records as RFC 4180 CSV
pub(super) fn render<T: TableRow>(records: &[T], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);

    if !no_header {
        let headers: Vec<String> = T::headers().iter().map(|h| column_name(h)).collect();
        lines.push(headers.join(","));
    }

    for record in records {
        let fields: Vec<String> = record.cells().iter().map(|c| escape_csv(c)).collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}
