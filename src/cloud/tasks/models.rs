//! Task data models

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CloudError, Result};

/// Lifecycle state of a server-side task
///
/// Unknown strings are kept verbatim in `Other`; the service reports its
/// failure states that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskState {
    New,
    Running,
    Finished,
    Other(String),
}

impl TaskState {
    pub fn as_str(&self) -> &str {
        match self {
            TaskState::New => "NEW",
            TaskState::Running => "RUNNING",
            TaskState::Finished => "FINISHED",
            TaskState::Other(s) => s,
        }
    }

    /// NEW and RUNNING are the only states worth polling again
    pub fn is_in_progress(&self) -> bool {
        matches!(self, TaskState::New | TaskState::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }
}

impl From<String> for TaskState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "NEW" => TaskState::New,
            "RUNNING" => TaskState::Running,
            "FINISHED" => TaskState::Finished,
            _ => TaskState::Other(s),
        }
    }
}

impl From<&str> for TaskState {
    fn from(s: &str) -> Self {
        TaskState::from(s.to_string())
    }
}

impl From<TaskState> for String {
    fn from(state: TaskState) -> Self {
        match state {
            TaskState::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resource keys found in a created-resources payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Volumes,
    Stacks,
    Projects,
}

impl ResourceKind {
    pub fn key(&self) -> &'static str {
        match self {
            ResourceKind::Volumes => "volumes",
            ResourceKind::Stacks => "stacks",
            ResourceKind::Projects => "projects",
        }
    }
}

/// Result payload of a finished task
///
/// Its shape depends on the call that started the task, so it stays raw
/// JSON until the caller asks for a concrete view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedResources(Value);

impl CreatedResources {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// IDs listed under a known resource key
    pub fn ids(&self, kind: ResourceKind) -> Vec<String> {
        self.ids_for(kind.key())
    }

    /// IDs listed under an arbitrary key; numeric IDs are stringified
    pub fn ids_for(&self, key: &str) -> Vec<String> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resource keys present in the payload
    pub fn keys(&self) -> Vec<&str> {
        self.0
            .as_object()
            .map(|obj| obj.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Convert the whole payload into a caller-defined shape
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.0.clone())
            .map_err(|e| CloudError::Json(format!("Failed to decode created resources: {}", e)))
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(obj) => obj.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }
}

/// Task snapshot from `GET /tasks/<id>`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    pub state: TaskState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_resources: Option<CreatedResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_on: Option<String>,
}

/// Immediate response of a mutating call
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskIdList {
    pub tasks: Vec<String>,
}

impl TaskIdList {
    /// Decode the task IDs of an already-fetched mutating-call body
    pub fn from_body(body: &Value) -> Result<Self> {
        Self::deserialize(body)
            .map_err(|e| CloudError::Json(format!("Failed to parse task list: {}", e)))
    }

    /// First task ID, or `EmptyTaskList` if the service returned none
    pub fn first(&self, context: &str) -> Result<&str> {
        self.tasks
            .first()
            .map(String::as_str)
            .ok_or_else(|| CloudError::EmptyTaskList(context.to_string()))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
