use std::fs;
use std::io;
use std::path::PathBuf;

use super::{NoteStorage, KEY_SUFFIX};
use crate::error::Result;

/// Stores each key as a file directly inside one directory.
///
/// The directory is created on demand, so pointing at a path that does not
/// exist yet is fine.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl NoteStorage for FsStorage {
    fn list_keys(&self) -> Result<Vec<String>> {
        self.ensure_dir()?;

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(KEY_SUFFIX) {
                    keys.push(name.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn read_key(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_key(&self, key: &str, contents: &[u8]) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.path_for(key), contents)?;
        Ok(())
    }

    fn delete_key(&self, key: &str) -> Result<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
