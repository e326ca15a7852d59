//! Key/value storage the note repository persists into.
//!
//! A key is a bare file name such as `daily-plan.json`; a value is the full
//! file contents. Every write replaces the whole value.

mod fs_store;
mod memory_store;

pub use fs_store::FsStorage;
pub use memory_store::MemoryStorage;

use crate::error::Result;

/// Suffix every note and template key carries.
pub const KEY_SUFFIX: &str = ".json";

pub trait NoteStorage: Send + Sync {
    /// All `*.json` keys currently stored, sorted.
    fn list_keys(&self) -> Result<Vec<String>>;

    /// Raw bytes stored under `key`, or `None` if it does not exist.
    /// Callers decode them and report bad content against the key.
    fn read_key(&self, key: &str) -> Result<Option<Vec<u8>>>;

    fn write_key(&self, key: &str, contents: &[u8]) -> Result<()>;

    /// Remove `key`. Returns `false` if there was nothing to remove.
    fn delete_key(&self, key: &str) -> Result<bool>;
}
