//! Handler functions for the CLI commands.
//!
//! Each handler is generic over the storage backend (and the screen where
//! a prompt is involved), so tests drive them with the in-memory backend
//! and a scripted screen.

use chrono::NaiveDate;
use std::path::Path;
use tracing::info;

use subtrack_core::{
    upcoming_within_week, Result, SubscriptionDraft, SubscriptionId,
};
use subtrack_store::{FormController, StorageBackend, Submission, SubscriptionStore};

use crate::render::{render_list, render_upcoming};
use crate::screen::Screen;

/// `subtrack list` — render every subscription.
pub fn cmd_list<B: StorageBackend>(store: &SubscriptionStore<B>) -> Result<()> {
    println!("{}", render_list(store.list()));
    Ok(())
}

/// `subtrack add` — a Creating-state form submission.
pub fn cmd_add<B: StorageBackend>(
    store: &mut SubscriptionStore<B>,
    name: String,
    price: String,
    date: String,
    cycle: String,
) -> Result<()> {
    let mut form = FormController::new();
    *form.draft_mut() = SubscriptionDraft {
        name,
        price,
        renewal_date: date,
        renewal_cycle: cycle,
    };

    match form.submit(store)? {
        Submission::Created(id) => info!(%id, "subscription created"),
        Submission::Updated(id) => info!(%id, "subscription updated"),
    }

    println!("{}", render_list(store.list()));
    Ok(())
}

/// `subtrack edit <id>` — an Editing-state form submission.
///
/// The form is pre-filled from the record, then the provided flags overlay
/// individual fields; omitted flags keep the current values.
pub fn cmd_edit<B: StorageBackend>(
    store: &mut SubscriptionStore<B>,
    id: SubscriptionId,
    name: Option<String>,
    price: Option<String>,
    date: Option<String>,
    cycle: Option<String>,
) -> Result<()> {
    let mut form = FormController::new();
    form.begin_edit(store, id)?;

    let draft = form.draft_mut();
    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(price) = price {
        draft.price = price;
    }
    if let Some(date) = date {
        draft.renewal_date = date;
    }
    if let Some(cycle) = cycle {
        draft.renewal_cycle = cycle;
    }

    form.submit(store)?;
    info!(%id, "subscription edited");

    println!("{}", render_list(store.list()));
    Ok(())
}

/// `subtrack remove <id>` — confirm (naming the record), then delete.
///
/// `assume_yes` answers the prompt affirmatively for scripting. Declining
/// the prompt leaves the store untouched.
pub fn cmd_remove<B: StorageBackend, S: Screen>(
    store: &mut SubscriptionStore<B>,
    screen: &mut S,
    id: SubscriptionId,
    assume_yes: bool,
) -> Result<()> {
    let name = store
        .get(id)
        .map(|sub| sub.name.clone())
        .ok_or_else(|| subtrack_core::Error::not_found(id))?;

    let question = format!("Are you sure you want to delete {name}?");
    if !assume_yes && !screen.confirm(&question) {
        info!(%id, "removal declined");
        return Ok(());
    }

    let removed = store.remove(id)?;
    info!(%id, name = %removed.name, "subscription deleted");

    println!("{}", render_list(store.list()));
    Ok(())
}

/// `subtrack upcoming` — the 7-day forward window.
///
/// `reference` pins "today" for scripting; otherwise the local calendar
/// date is used. The view is recomputed here on every invocation.
pub fn cmd_upcoming<B: StorageBackend>(
    store: &SubscriptionStore<B>,
    reference: Option<NaiveDate>,
) -> Result<()> {
    let today = reference.unwrap_or_else(|| chrono::Local::now().date_naive());
    let view = upcoming_within_week(store.list(), today);
    println!("{}", render_upcoming(&view));
    Ok(())
}

/// `subtrack path` — print the resolved data file path.
pub fn cmd_path(data_file: &Path) -> Result<()> {
    println!("{}", data_file.display());
    Ok(())
}
