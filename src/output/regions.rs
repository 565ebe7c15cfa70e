//! Region output formatter

use super::common::cell;
use super::TableRow;
use crate::cloud::Region;

impl TableRow for Region {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Keystone Name", "State", "Country", "Zone", "Endpoint"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.display_name.clone(),
            cell(self.keystone_name.as_deref()),
            cell(self.state.as_deref()),
            cell(self.country.as_deref()),
            cell(self.zone.as_deref()),
            cell(self.endpoint_type.as_deref()),
        ]
    }
}
