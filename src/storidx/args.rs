use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for dev
/// builds. Format: "0.3.2" or "0.3.2@abc1234 2026-08-06".
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "storidx", version = get_version())]
#[command(about = "Sequential word-index store for short texts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global store instead of the project one
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new story
    #[command(alias = "a")]
    Add {
        /// Title of the story (optional, opens editor if not provided)
        #[arg(required = false)]
        title: Option<String>,

        /// Text of the story
        #[arg(required = false)]
        text: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List stories
    #[command(alias = "ls")]
    List,

    /// View one or more stories as reconstructed text
    #[command(alias = "v")]
    View {
        /// Story ids (e.g. 0 2)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show a story's positional token index as JSON
    Tokens {
        /// Story id
        id: String,
    },

    /// Edit a story in the editor
    #[command(alias = "e")]
    Edit {
        /// Story id
        id: String,

        /// Skip the editor and take --title/--text as-is
        #[arg(long)]
        no_editor: bool,

        /// New title (with --no-editor; current title kept when omitted)
        #[arg(long)]
        title: Option<String>,

        /// New text (with --no-editor; current text kept when omitted)
        #[arg(long)]
        text: Option<String>,
    },

    /// Delete one or more stories
    #[command(alias = "rm")]
    Delete {
        /// Story ids (e.g. 0 2)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Keep the remaining ids as they are (skip renumbering)
        #[arg(long)]
        keep_ids: bool,
    },

    /// Export stories to a file
    Export {
        /// Story ids (all stories when omitted)
        #[arg(num_args = 0..)]
        ids: Vec<String>,

        /// Write a .tar.gz of story texts instead of the JSON document
        #[arg(long)]
        archive: bool,
    },

    /// Show collection statistics
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., strip-accents)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store
    Init,
}
