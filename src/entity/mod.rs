mod note;
mod template;

pub use note::{normalize_title, Note, NoteInput, DEFAULT_TITLE};
pub use template::Template;
