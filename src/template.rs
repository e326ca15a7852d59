//! Lazily created default note shape.

use std::sync::Arc;

use crate::entity::Template;
use crate::error::{NotekeepError, Result};
use crate::storage::NoteStorage;

/// Reserved key holding the template; never listed as a note.
pub const TEMPLATE_KEY: &str = "template.json";

#[derive(Clone)]
pub struct TemplateStore {
    storage: Arc<dyn NoteStorage>,
}

impl TemplateStore {
    pub fn new(storage: Arc<dyn NoteStorage>) -> Self {
        Self { storage }
    }

    /// Load the template, writing the default one first if none exists.
    pub fn get_template(&self) -> Result<Template> {
        match self.storage.read_key(TEMPLATE_KEY)? {
            Some(raw) => serde_json::from_slice(&raw).map_err(NotekeepError::CorruptTemplate),
            None => {
                let template = Template::default();
                self.storage
                    .write_key(TEMPLATE_KEY, &serde_json::to_vec_pretty(&template)?)?;
                tracing::info!(key = TEMPLATE_KEY, "created default note template");
                Ok(template)
            }
        }
    }
}
