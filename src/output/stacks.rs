//! Stack output formatter

use super::common::cell;
use super::TableRow;
use crate::cloud::Stack;

impl TableRow for Stack {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Status", "Created", "Updated", "Reason"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.stack_name.clone(),
            cell(self.stack_status.as_deref()),
            cell(self.creation_time.as_deref()),
            cell(self.updated_time.as_deref()),
            cell(self.stack_status_reason.as_deref()),
        ]
    }
}
