//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Library catalog manager: author-ordered BST catalog, lending workflow, and console browser
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Start with an empty catalog instead of the demo books
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new book
    Add {
        isbn: String,
        title: String,
        /// Ordering key, e.g. "Borges, Jorge L."
        author: String,
        publisher: String,
        year: i32,
        category: String,
    },

    /// Find a book by author
    Find {
        author: String,
    },

    /// Find a book by ISBN (full-catalog scan)
    Isbn {
        isbn: String,
    },

    /// Remove a book from the catalog
    Remove {
        author: String,
    },

    /// Record a loan
    Loan {
        author: String,
        borrower: String,
    },

    /// Record a return
    Return {
        author: String,
    },

    /// List the catalog
    List {
        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = Order::In)]
        order: Order,
    },

    /// List available books
    Available,

    /// List books on loan
    Borrowed,

    /// List books of a category
    Category {
        category: String,
    },

    /// List books whose author contains a fragment (empty matches all)
    Search {
        #[arg(default_value = "")]
        fragment: String,
    },

    /// Show catalog statistics
    Stats,

    /// Show the tree shape
    Tree,

    /// Interactive console session
    Menu,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Traversal order for `list`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Ascending by author (left, node, right)
    #[default]
    In,
    /// Tree-structural order (node, left, right)
    Pre,
    /// Children first (left, right, node)
    Post,
}
