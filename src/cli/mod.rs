mod commands;
mod handlers;

pub use commands::{Cli, Commands, NoteFields};
pub use handlers::{handle_add, handle_get, handle_list, handle_serve, handle_update};
