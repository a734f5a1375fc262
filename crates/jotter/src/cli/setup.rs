use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jotter",
    bin_name = "jotter",
    version,
    disable_help_subcommand = true,
    after_help = "Documents are addressed by id or by a unique id prefix (at least 4 characters)."
)]
#[command(about = "Nested documents with a trash can, from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Act as this user (overrides config and JOTTER_USER)
    #[arg(long, global = true, help_heading = "Options")]
    pub user: Option<String>,

    /// Directory holding documents.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the default jotter.toml
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new document
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Create inside another document
        #[arg(long, short = 'i', value_name = "ID")]
        inside: Option<String>,

        /// Title words (joined with spaces, "Untitled" when omitted)
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// List one level of the tree (top level by default)
    #[command(alias = "ls", display_order = 2)]
    List {
        /// List the documents directly inside this one
        #[arg(long, short = 'p', value_name = "ID")]
        parent: Option<String>,
    },

    /// Show the whole tree
    #[command(display_order = 3)]
    Tree,

    /// Search live documents by title
    #[command(display_order = 4)]
    Search {
        /// Title words (all documents when omitted)
        term: Vec<String>,
    },

    /// View a document
    #[command(alias = "v", display_order = 10)]
    View { id: String },

    /// View a published document the way the public sees it
    ///
    /// Without a user, ID must be the full document id.
    #[command(display_order = 11)]
    Preview { id: String },

    /// Change title, content, icon or cover image
    #[command(display_order = 12)]
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        /// Cover image URL
        #[arg(long)]
        cover: Option<String>,
    },

    /// Make a document publicly readable
    #[command(display_order = 13)]
    Publish { id: String },

    /// Stop sharing a document
    #[command(display_order = 14)]
    Unpublish { id: String },

    /// Clear a document's icon
    #[command(display_order = 15)]
    RemoveIcon { id: String },

    /// Clear a document's cover image
    #[command(display_order = 16)]
    RemoveCover { id: String },

    /// Move a document and everything inside it to the trash
    #[command(display_order = 20)]
    Archive { id: String },

    /// Bring a document and everything inside it back from the trash
    #[command(display_order = 21)]
    Restore { id: String },

    /// Permanently delete a document
    #[command(display_order = 22)]
    Remove {
        id: String,

        /// Also delete everything inside it
        #[arg(long, short = 'r')]
        recursive: bool,
    },

    /// List the trash
    #[command(display_order = 23)]
    Trash {
        /// Only show documents whose title contains this
        #[arg(long, short = 's')]
        search: Option<String>,
    },
}
