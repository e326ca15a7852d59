use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_DATA_DIR, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR};
use crate::entity::NoteInput;

#[derive(Parser, Debug)]
#[command(name = "notekeep")]
#[command(version, about = "A small note service that keeps each note in its own JSON file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the note files
    #[arg(long, global = true, env = "NOTEKEEP_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind
        #[arg(long, env = "NOTEKEEP_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, short, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory served for every path outside /api
        #[arg(long, env = "NOTEKEEP_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
    },

    /// List all notes, most recently updated first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Get {
        /// Note ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note; omitted fields come from the template
    Add {
        #[command(flatten)]
        fields: NoteFields,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change fields of an existing note
    Update {
        /// Note ID
        id: String,

        #[command(flatten)]
        fields: NoteFields,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct NoteFields {
    /// Note title
    #[arg(long, short)]
    pub title: Option<String>,

    /// Short description
    #[arg(long, short)]
    pub description: Option<String>,

    /// Note body
    #[arg(long, short)]
    pub content: Option<String>,
}

impl From<NoteFields> for NoteInput {
    fn from(fields: NoteFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            content: fields.content,
        }
    }
}
