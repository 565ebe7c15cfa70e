//! Task and created-resource output formatters

use serde::Serialize;

use super::common::cell;
use super::TableRow;
use crate::cloud::{CreatedResources, ResourceKind, Task};

impl TableRow for Task {
    fn headers() -> &'static [&'static str] {
        &["ID", "State", "Type", "Created", "Finished", "Error"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.state.to_string(),
            cell(self.task_type.as_deref()),
            cell(self.created_on.as_deref()),
            cell(self.finished_on.as_deref()),
            cell(self.error.as_deref()),
        ]
    }
}

/// One created resource ID, tagged with its payload key
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedResourceRow {
    pub kind: String,
    pub id: String,
}

impl TableRow for CreatedResourceRow {
    fn headers() -> &'static [&'static str] {
        &["Kind", "ID"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.kind.clone(), self.id.clone()]
    }
}

/// Flatten a created-resources payload into rows
///
/// With `kind` set only that key is listed; otherwise every key holding an
/// ID array, in payload order.
pub fn created_resource_rows(
    created: &CreatedResources,
    kind: Option<ResourceKind>,
) -> Vec<CreatedResourceRow> {
    let keys: Vec<&str> = match kind {
        Some(kind) => vec![kind.key()],
        None => created.keys(),
    };

    keys.into_iter()
        .flat_map(|key| {
            created
                .ids_for(key)
                .into_iter()
                .map(move |id| CreatedResourceRow {
                    kind: key.to_string(),
                    id,
                })
        })
        .collect()
}
