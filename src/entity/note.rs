use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title given to notes that end up without one.
pub const DEFAULT_TITLE: &str = "Untitled Note";

pub(crate) fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// A note as persisted in its own JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Storage key the note lives under. Internal only, never sent over HTTP.
    #[serde(default)]
    pub file_name: String,
}

impl Note {
    /// Refresh `updated_at`, always moving it strictly forward.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = Some(match self.updated_at {
            Some(previous) if now <= previous => previous + Duration::milliseconds(1),
            _ => now,
        });
    }
}

/// Optional field values supplied when creating or patching a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

impl NoteInput {
    /// Pick the string-valued `title`/`description`/`content` fields out of a
    /// request body. Anything else (missing keys, non-strings, a body that is
    /// not an object) is treated as absent.
    pub fn from_json(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            title: field("title"),
            description: field("description"),
            content: field("content"),
        }
    }

    /// Parse a raw request body leniently; unparsable input means "no fields".
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(|value| Self::from_json(&value))
            .unwrap_or_default()
    }
}

/// Trim a title, returning `None` if nothing is left.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
