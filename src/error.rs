use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotekeepError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Corrupt note file {file}: {source}")]
    CorruptNote {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Corrupt template file: {0}")]
    CorruptTemplate(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotekeepError>;
