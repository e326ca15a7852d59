use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::note::default_title;

/// Default field values applied to new notes, persisted as `template.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    /// Always `null` on disk.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            content: String::new(),
            updated_at: None,
        }
    }
}
