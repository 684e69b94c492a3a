use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.4.1"
/// Format for dev builds: "v0.4.1\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "nook",
    bin_name = "nook",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Hierarchical document workspace for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Act as this user (default: the configured identity)
    #[arg(short, long, global = true, env = "NOOK_USER")]
    pub user: Option<String>,

    /// Make the request with no identity at all (overrides --user)
    #[arg(long, global = true)]
    pub anonymous: bool,

    /// Data directory (default: the platform data dir)
    #[arg(long, global = true, env = "NOOK_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print documents as JSON instead of the listing format
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new document
    #[command(alias = "n")]
    Create {
        /// Create inside another document (parent selector)
        #[arg(long, short = 'i', value_name = "DOC")]
        inside: Option<String>,

        /// Title words (joined with spaces; defaults to "Untitled")
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// List one level of the tree (non-archived documents)
    #[command(alias = "ls")]
    List {
        /// List the children of this document instead of the roots
        #[arg(long, short = 'p', value_name = "DOC")]
        parent: Option<String>,
    },

    /// View a document
    #[command(alias = "v")]
    View {
        /// Document selector (full id, or a unique prefix of at least 4 chars)
        doc: String,
    },

    /// Edit document fields
    #[command(alias = "e")]
    Edit {
        /// Document selector
        doc: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content body
        #[arg(long)]
        content: Option<String>,

        /// New icon
        #[arg(long)]
        icon: Option<String>,

        /// New cover image
        #[arg(long, value_name = "URL")]
        cover: Option<String>,
    },

    /// Publish a document for anonymous reading
    Publish {
        /// Document selector
        doc: String,
    },

    /// Make a published document private again
    Unpublish {
        /// Document selector
        doc: String,
    },

    /// Remove a document's icon
    RemoveIcon {
        /// Document selector
        doc: String,
    },

    /// Remove a document's cover image
    RemoveCover {
        /// Document selector
        doc: String,
    },

    /// Archive a document and its whole subtree
    #[command(alias = "rm")]
    Archive {
        /// Document selector
        doc: String,
    },

    /// Restore an archived document and its subtree
    Restore {
        /// Document selector
        doc: String,
    },

    /// List archived documents
    Trash,

    /// List all live documents, optionally filtered by a term
    Search {
        /// Search term (matched against title and content)
        term: Option<String>,
    },

    /// Permanently delete a document (children are kept)
    Purge {
        /// Document selector
        doc: String,
    },

    /// Check for dangling parent references
    Doctor {
        /// Reparent orphans to root
        #[arg(long)]
        fix: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., user)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
