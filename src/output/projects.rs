//! Project output formatter

use super::common::{cell, yes_no};
use super::TableRow;
use crate::cloud::Project;

impl TableRow for Project {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "State", "Default", "Created", "Description"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.state().to_string(),
            yes_no(self.is_default),
            cell(self.created_at.as_deref()),
            self.description().to_string(),
        ]
    }
}
