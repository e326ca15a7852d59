//! Note repository over a [`NoteStorage`].
//!
//! Every call goes back to storage: listing re-reads each file, lookups by id
//! scan the full listing, and file names are resolved against the keys that
//! exist at the moment of the write. Nothing is cached between calls, and two
//! concurrent writers that resolve the same file name will overwrite each
//! other.

mod id;

pub use id::{IdGenerator, UuidGenerator};

use std::collections::HashSet;
use std::sync::Arc;

use crate::entity::{normalize_title, Note, NoteInput, Template, DEFAULT_TITLE};
use crate::error::{NotekeepError, Result};
use crate::slug::slug_or_fallback;
use crate::storage::{NoteStorage, KEY_SUFFIX};
use crate::template::{TemplateStore, TEMPLATE_KEY};

#[derive(Clone)]
pub struct NoteRepository {
    storage: Arc<dyn NoteStorage>,
    templates: TemplateStore,
    ids: Arc<dyn IdGenerator>,
}

impl NoteRepository {
    pub fn new(storage: Arc<dyn NoteStorage>) -> Self {
        Self::with_id_generator(storage, Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(storage: Arc<dyn NoteStorage>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            templates: TemplateStore::new(storage.clone()),
            storage,
            ids,
        }
    }

    pub fn template(&self) -> Result<Template> {
        self.templates.get_template()
    }

    /// All notes, most recently updated first.
    ///
    /// A single unreadable note file fails the whole listing.
    pub fn list_all(&self) -> Result<Vec<Note>> {
        let mut notes = Vec::new();
        for key in self.storage.list_keys()? {
            if key == TEMPLATE_KEY {
                continue;
            }
            // Renamed away by another writer since the listing.
            let Some(raw) = self.storage.read_key(&key)? else {
                continue;
            };
            notes.push(parse_note(&key, &raw)?);
        }

        notes.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });
        Ok(notes)
    }

    /// Linear scan over [`list_all`](Self::list_all).
    pub fn find_by_id(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.list_all()?.into_iter().find(|note| note.id == id))
    }

    pub fn create(&self, input: NoteInput) -> Result<Note> {
        let template = self.templates.get_template()?;

        let raw_title = input
            .title
            .filter(|t| !t.is_empty())
            .or_else(|| Some(template.title).filter(|t| !t.is_empty()))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let title = normalize_title(&raw_title).unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let taken = self.storage.list_keys()?;
        let mut note = Note {
            id: self.ids.generate_id(),
            file_name: resolve_file_name(&title, &taken, None),
            title,
            description: input.description.unwrap_or(template.description),
            content: input.content.unwrap_or(template.content),
            updated_at: None,
        };
        note.touch();
        self.write_note(&note)?;

        tracing::info!(id = %note.id, file = %note.file_name, "created note");
        Ok(note)
    }

    /// Apply `patch` to the note with `id`, renaming its file if the title
    /// now maps to a different name. Returns `None` for an unknown id.
    pub fn update(&self, id: &str, patch: NoteInput) -> Result<Option<Note>> {
        let Some(mut note) = self.find_by_id(id)? else {
            return Ok(None);
        };

        if let Some(title) = patch.title.as_deref().and_then(normalize_title) {
            note.title = title;
        }
        if let Some(description) = patch.description {
            note.description = description;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }

        let current_key = note.file_name.clone();
        let taken = self.storage.list_keys()?;
        let desired_key = resolve_file_name(&note.title, &taken, Some(&current_key));
        note.touch();

        if desired_key == current_key {
            self.write_note(&note)?;
            tracing::debug!(id = %note.id, file = %note.file_name, "updated note in place");
        } else {
            note.file_name = desired_key;
            self.write_note(&note)?;
            let removed = self.storage.delete_key(&current_key)?;
            tracing::info!(
                id = %note.id,
                from = %current_key,
                to = %note.file_name,
                removed,
                "renamed note file"
            );
        }

        Ok(Some(note))
    }

    fn write_note(&self, note: &Note) -> Result<()> {
        let json = serde_json::to_vec_pretty(note)?;
        self.storage.write_key(&note.file_name, &json)
    }
}

fn parse_note(key: &str, raw: &[u8]) -> Result<Note> {
    let mut note: Note = serde_json::from_slice(raw).map_err(|source| NotekeepError::CorruptNote {
        file: key.to_string(),
        source,
    })?;
    note.file_name = key.to_string();
    Ok(note)
}

/// Pick the first free name among `slug.json`, `slug-1.json`, `slug-2.json`, ...
///
/// `exclude` is the caller's own current key, which does not count as taken.
pub fn resolve_file_name(title: &str, taken: &[String], exclude: Option<&str>) -> String {
    let slug = slug_or_fallback(title);
    let taken: HashSet<&str> = taken
        .iter()
        .map(String::as_str)
        .filter(|key| Some(*key) != exclude)
        .collect();

    let mut candidate = format!("{slug}{KEY_SUFFIX}");
    let mut suffix = 1u32;
    while taken.contains(candidate.as_str()) {
        candidate = format!("{slug}-{suffix}{KEY_SUFFIX}");
        suffix += 1;
    }
    candidate
}
