use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "memos")]
#[command(
    author,
    version,
    about = "A local-first markdown memo keeper for the terminal"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "MEMOS_LOG_FILE")]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new memos project in the current directory
    Init {
        /// Data directory, relative to the project root
        #[arg(long)]
        path: Option<String>,

        /// Default category for new memos
        #[arg(long)]
        default_category: Option<String>,
    },

    /// Create a new memo
    #[command(visible_alias = "c", visible_alias = "new")]
    Create {
        /// Title of the memo
        title: String,

        /// Category (personal, work, study, idea, other)
        #[arg(short, long)]
        category: Option<String>,

        /// Markdown content (use '-' to read from stdin)
        #[arg(short = 'd', long = "content")]
        content: Option<String>,

        /// Tags to add (repeatable, or comma-separated)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a memo
    Show {
        /// Memo ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List memos, most recently updated first
    #[command(visible_alias = "ls")]
    List {
        /// Only memos matching this text (title, content or tags)
        #[arg(short, long)]
        search: Option<String>,

        /// Only memos in this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search memos by text
    Search {
        /// Search query
        query: String,

        /// Restrict to a category
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a memo; unspecified fields keep their current values
    Update {
        /// Memo ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New markdown content (use '-' to read from stdin)
        #[arg(short = 'd', long = "content")]
        content: Option<String>,

        /// Replace tags with these (repeatable, or comma-separated)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tag")]
        clear_tags: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a memo permanently
    #[command(visible_alias = "rm")]
    Delete {
        /// Memo ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show memo counts per category
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known categories
    Categories,
}
