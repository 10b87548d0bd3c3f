use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "habitual", version, about = "Habit tracking CLI with weekly statistics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Act as this user instead of the configured one
    #[arg(long, global = true)]
    pub user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Create a new habit
    Add {
        /// Habit name (unique per user)
        name: String,

        /// Optional category (e.g. health, learning)
        #[arg(long)]
        category: Option<String>,
    },

    /// List habits with their log counts
    List,

    /// Delete a habit and all its logs
    Remove {
        /// Habit name or numeric id
        habit: String,
    },

    /// Record minutes against a habit
    Log {
        /// Habit name or numeric id
        habit: String,

        /// Minutes spent
        minutes: i64,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Show log entries and per-day totals for a habit
    Logs {
        /// Habit name or numeric id
        habit: String,

        /// Number of recent entries to show
        #[arg(long)]
        last: Option<u32>,
    },

    /// Delete a single log entry by id
    Unlog {
        /// Log entry id
        id: i64,
    },

    /// Weekly statistics for a habit
    Stats {
        /// Habit name or numeric id
        habit: String,

        /// Window length in days
        #[arg(long, default_value_t = 7)]
        days: u32,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (currently only "user")
        key: String,
        /// Config value
        value: String,
    },
}
