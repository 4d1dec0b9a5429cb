//! File entry model for the grid's row collection.

use serde::{Deserialize, Deserializer, Serialize};

/// One row's backend-provided record.
///
/// Created server-side and fetched as a snapshot list. The client never
/// mutates an entry in place; rows are only inserted (after upload) or
/// removed (after delete). Every uid is unique within one snapshot, and
/// delete/move operations reference entries exclusively by uid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Opaque unique identifier assigned by the backend.
    pub uid: String,
    /// Display name.
    pub name: String,
    /// Size in bytes. The backend has been observed to send a number,
    /// a numeric string, or nothing at all; anything non-numeric
    /// deserializes to `None`.
    #[serde(default, deserialize_with = "de_size")]
    pub size: Option<u64>,
    /// Tree nesting level, 0 for root entries.
    #[serde(default)]
    pub depth: u32,
    /// Entry kind as reported by the backend, e.g. "file" or "folder".
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Accept a JSON number, a numeric string, or absence for `size`.
fn de_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
