//! Volume output formatter

use super::common::{cell, yes_no};
use super::TableRow;
use crate::cloud::Volume;

impl TableRow for Volume {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Size (GiB)",
            "Status",
            "Type",
            "Bootable",
            "Attached To",
            "Created",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.size.to_string(),
            cell(self.status.as_deref()),
            cell(self.volume_type.as_deref()),
            yes_no(self.bootable),
            self.attached_servers().join(";"),
            cell(self.created_at.as_deref()),
        ]
    }
}
