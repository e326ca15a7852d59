use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::NoteFields;
use crate::api::{self, handlers::NoteView};
use crate::config::ServerConfig;
use crate::entity::Note;
use crate::error::{NotekeepError, Result};
use crate::repo::NoteRepository;
use crate::storage::FsStorage;

fn open_repository(data_dir: &Path) -> NoteRepository {
    NoteRepository::new(Arc::new(FsStorage::new(data_dir)))
}

fn format_timestamp(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_note(note: &Note) {
    println!("{}", note.title);
    println!("  id:      {}", note.id);
    println!("  updated: {}", format_timestamp(note.updated_at));
    if !note.description.is_empty() {
        println!("  {}", note.description);
    }
    if !note.content.is_empty() {
        println!();
        println!("{}", note.content);
    }
}

pub fn handle_serve(data_dir: PathBuf, host: String, port: u16, static_dir: PathBuf) -> Result<()> {
    let config = ServerConfig {
        host,
        port,
        data_dir,
        static_dir,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(api::serve(config))
}

pub fn handle_list(data_dir: PathBuf, json: bool) -> Result<()> {
    let notes = open_repository(&data_dir).list_all()?;

    if json {
        let views: Vec<NoteView> = notes.into_iter().map(NoteView::from).collect();
        return print_json(&views);
    }

    if notes.is_empty() {
        println!("No notes found.");
        return Ok(());
    }
    for note in &notes {
        println!(
            "{}  {}  ({})",
            note.id,
            note.title,
            format_timestamp(note.updated_at)
        );
    }
    Ok(())
}

pub fn handle_get(data_dir: PathBuf, id: String, json: bool) -> Result<()> {
    let note = open_repository(&data_dir)
        .find_by_id(&id)?
        .ok_or(NotekeepError::NoteNotFound(id))?;

    if json {
        print_json(&NoteView::from(note))
    } else {
        print_note(&note);
        Ok(())
    }
}

pub fn handle_add(data_dir: PathBuf, fields: NoteFields, json: bool) -> Result<()> {
    let note = open_repository(&data_dir).create(fields.into())?;

    if json {
        print_json(&NoteView::from(note))
    } else {
        println!("Created note {} - {}", note.id, note.title);
        Ok(())
    }
}

pub fn handle_update(data_dir: PathBuf, id: String, fields: NoteFields, json: bool) -> Result<()> {
    let note = open_repository(&data_dir)
        .update(&id, fields.into())?
        .ok_or(NotekeepError::NoteNotFound(id))?;

    if json {
        print_json(&NoteView::from(note))
    } else {
        println!("Updated note {} - {}", note.id, note.title);
        Ok(())
    }
}
