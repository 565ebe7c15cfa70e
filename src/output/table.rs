//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::TableRow;

/// Render records as a borderless aligned table
pub(super) fn render<T: TableRow>(records: &[T], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    if !no_header {
        table.set_header(T::headers().to_vec());
    }

    for record in records {
        table.add_row(record.cells());
    }

    table.to_string()
}
