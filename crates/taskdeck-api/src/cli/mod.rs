//! CLI command definitions and dispatch for the `tdeck` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI is a thin wrapper
//! over the same `TaskService` the REST API uses.

pub mod status;
pub mod task;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Track tasks from the terminal or over REST.
#[derive(Parser)]
#[command(name = "tdeck", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task title.
        title: String,

        /// Longer free-text description.
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List tasks.
    #[command(alias = "ls")]
    List {
        /// Show only completed tasks.
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Show only pending tasks.
        #[arg(long)]
        pending: bool,

        /// Sort by field (created_at, updated_at, title, completed).
        #[arg(long, default_value = "created_at")]
        sort: String,

        /// Sort order (asc, desc).
        #[arg(long, default_value = "asc")]
        order: String,

        /// Maximum number of tasks to show.
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Show details of a task.
    Show {
        /// Task id.
        id: String,
    },

    /// Mark a task as completed.
    Done {
        /// Task id.
        id: String,
    },

    /// Delete a task.
    #[command(alias = "rm")]
    Delete {
        /// Task id.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },

    /// System status (data dir, database, task counts).
    Status,

    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Export spans via OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
