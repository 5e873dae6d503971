//! # subtrack-cli
//!
//! The `subtrack` binary: a command-line surface over the subscription
//! store. Commands map one-to-one onto the store operations plus the
//! upcoming-payments view:
//! - `list`, `add`, `edit`, `remove` — record lifecycle
//! - `upcoming` — the 7-day forward window
//! - `path` — the resolved data file location

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod screen;

use subtrack_core::Result;
use subtrack_store::{JsonFileBackend, SubscriptionStore};

use crate::cli::{Args, Command};
use crate::config::Config;
use crate::screen::ConsoleScreen;

/// Loads configuration and the store, then dispatches the command.
///
/// Validation failures come back as `Error::Validation` for the caller to
/// surface as a blocking message; everything else is a hard failure.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let data_file = config.data_file()?;

    if let Command::Path = args.command {
        return commands::cmd_path(&data_file);
    }

    let mut store = SubscriptionStore::load(JsonFileBackend::new(&data_file));
    store.subscribe(Box::new(|event| {
        tracing::debug!(?event, "store changed");
    }));

    let mut screen = ConsoleScreen::new();
    match args.command {
        Command::List => commands::cmd_list(&store),
        Command::Add {
            name,
            price,
            date,
            cycle,
        } => commands::cmd_add(&mut store, name, price, date, cycle),
        Command::Edit {
            id,
            name,
            price,
            date,
            cycle,
        } => commands::cmd_edit(&mut store, id, name, price, date, cycle),
        Command::Remove { id, yes } => commands::cmd_remove(&mut store, &mut screen, id, yes),
        Command::Upcoming { on } => commands::cmd_upcoming(&store, on),
        Command::Path => Ok(()), // handled above, before the store loads
    }
}
