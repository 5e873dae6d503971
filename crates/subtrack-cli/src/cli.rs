//! Command-line argument definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subtrack_core::SubscriptionId;

/// subtrack — local subscription tracker
#[derive(Parser, Debug)]
#[command(name = "subtrack", version, about = "Track recurring payments from the command line", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "SUBTRACK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all subscriptions
    List,

    /// Add a new subscription
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Payment amount
        #[arg(long)]
        price: String,

        /// Renewal date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Renewal cycle (Monthly or Yearly)
        #[arg(long)]
        cycle: String,
    },

    /// Edit an existing subscription; omitted flags keep current values
    Edit {
        /// Record id (shown by `subtrack list`)
        id: SubscriptionId,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New payment amount
        #[arg(long)]
        price: Option<String>,

        /// New renewal date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New renewal cycle (Monthly or Yearly)
        #[arg(long)]
        cycle: Option<String>,
    },

    /// Delete a subscription (asks for confirmation)
    Remove {
        /// Record id (shown by `subtrack list`)
        id: SubscriptionId,

        /// Answer the confirmation prompt with yes
        #[arg(long)]
        yes: bool,
    },

    /// Show payments due within the next 7 days
    Upcoming {
        /// Reference date (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },

    /// Print the resolved data file path
    Path,
}
