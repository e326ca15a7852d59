use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{NoteStorage, KEY_SUFFIX};
use crate::error::Result;

/// In-process storage, mostly useful in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        // A panic while holding the lock cannot leave a half-written value.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoteStorage for MemoryStorage {
    fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self
            .entries()
            .keys()
            .filter(|k| k.ends_with(KEY_SUFFIX))
            .cloned()
            .collect())
    }

    fn read_key(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries().get(key).cloned())
    }

    fn write_key(&self, key: &str, contents: &[u8]) -> Result<()> {
        self.entries().insert(key.to_string(), contents.to_vec());
        Ok(())
    }

    fn delete_key(&self, key: &str) -> Result<bool> {
        Ok(self.entries().remove(key).is_some())
    }
}
