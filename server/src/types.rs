//! Wire and storage types for the todo service.
//!
//! `Todo` is both the stored document and the JSON shape returned to
//! clients. Request payloads are deliberately loose (every field optional)
//! so that missing fields surface as validation errors with a readable
//! message instead of a generic deserialization rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single item of the ordered to-do list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub value: String,
    /// Display position. Higher orders are listed first.
    pub order: u32,
    /// Completion time, `None` while the item is still open.
    pub done_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub value: Option<String>,
}

/// Partial update. Absent fields leave the stored item untouched, and a
/// request with no body at all is an update with every field absent.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    /// Target position. `0` is treated the same as absent.
    #[serde(default)]
    pub order: Option<u32>,
    /// Present-but-null counts as `false`.
    #[serde(default, deserialize_with = "present_flag")]
    pub done: Option<bool>,
    /// An empty string is treated the same as absent.
    #[serde(default)]
    pub value: Option<String>,
}

fn present_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<bool>::deserialize(deserializer)?.unwrap_or(false)))
}

#[derive(Debug, Serialize)]
pub struct TodoBody {
    pub todo: Todo,
}

#[derive(Debug, Serialize)]
pub struct TodoListBody {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_message: String,
}
