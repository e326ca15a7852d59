pub mod api;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod repo;
pub mod slug;
pub mod storage;
pub mod template;

pub use error::{NotekeepError, Result};
pub use repo::NoteRepository;
