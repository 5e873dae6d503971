//! The subscription store.
//!
//! Owns the ordered list of subscription records and persists the whole
//! list to its [`StorageBackend`] after every mutation. Mutations emit a
//! [`StoreEvent`] so rendering can subscribe instead of being called
//! directly (one-way data flow).

use tracing::{debug, info, warn};

use subtrack_core::{Error, Result, Subscription, SubscriptionId, ValidatedFields};

use crate::backend::StorageBackend;
use crate::seed::seed_catalog;

/// Change notification emitted after a mutation has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A record was appended.
    Added(SubscriptionId),
    /// A record was replaced in place.
    Updated(SubscriptionId),
    /// A record was deleted.
    Removed(SubscriptionId),
}

type Observer = Box<dyn Fn(&StoreEvent)>;

/// The ordered subscription list plus its durable backend.
///
/// All operations run to completion on the caller's thread; the displayed
/// state is never stale relative to the in-memory list.
pub struct SubscriptionStore<B: StorageBackend> {
    backend: B,
    records: Vec<Subscription>,
    observers: Vec<Observer>,
}

impl<B: StorageBackend> SubscriptionStore<B> {
    /// Loads the store from the backend, falling back to the seed catalog.
    ///
    /// An absent key and an unparsable payload are treated identically:
    /// the built-in seed catalog becomes the initial list. Runs once at
    /// startup; the seed is never merged into already-persisted data.
    pub fn load(backend: B) -> Self {
        let records = match backend.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Subscription>>(&payload) {
                Ok(records) => {
                    debug!(count = records.len(), "loaded persisted subscriptions");
                    records
                }
                Err(e) => {
                    warn!(error = %e, "persisted subscriptions unparsable, using seed catalog");
                    seed_catalog()
                }
            },
            Ok(None) => {
                info!("no persisted subscriptions, using seed catalog");
                seed_catalog()
            }
            Err(e) => {
                warn!(error = %e, "failed to read persisted subscriptions, using seed catalog");
                seed_catalog()
            }
        };

        Self {
            backend,
            records,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for change notifications.
    ///
    /// Every mutation emits exactly one event, after persisting. Observers
    /// receive the event by reference and must not re-enter the store.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    /// The current list, in insertion order.
    pub fn list(&self) -> &[Subscription] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: SubscriptionId) -> Option<&Subscription> {
        self.records.iter().find(|sub| sub.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record built from validated fields under a fresh unique id.
    ///
    /// Persists the full list before returning the new id.
    pub fn add(&mut self, fields: ValidatedFields) -> Result<SubscriptionId> {
        let id = self.fresh_id();
        self.records.push(Subscription::from_fields(id, fields));
        self.persist()?;
        debug!(%id, "subscription added");
        self.emit(StoreEvent::Added(id));
        Ok(id)
    }

    /// Replaces the record with the given id.
    ///
    /// Ids are sourced from the rendered list under normal flow, so a
    /// missing id is surfaced as [`Error::NotFound`] rather than ignored.
    pub fn update(&mut self, id: SubscriptionId, fields: ValidatedFields) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|sub| sub.id == id)
            .ok_or_else(|| Error::not_found(id))?;
        self.records[index] = Subscription::from_fields(id, fields);
        self.persist()?;
        debug!(%id, "subscription updated");
        self.emit(StoreEvent::Updated(id));
        Ok(())
    }

    /// Deletes the record with the given id and returns it.
    ///
    /// Callers must have obtained the user's yes/no confirmation (naming
    /// the record) before invoking this.
    pub fn remove(&mut self, id: SubscriptionId) -> Result<Subscription> {
        let index = self
            .records
            .iter()
            .position(|sub| sub.id == id)
            .ok_or_else(|| Error::not_found(id))?;
        let removed = self.records.remove(index);
        self.persist()?;
        debug!(%id, name = %removed.name, "subscription removed");
        self.emit(StoreEvent::Removed(id));
        Ok(removed)
    }

    /// Serializes the current list and overwrites the durable key.
    ///
    /// Called after every mutating operation; there is no batching or
    /// debouncing, and write failures propagate untouched.
    pub fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.records)?;
        self.backend.write(&payload)
    }

    /// Generates an id unique within the current list.
    ///
    /// Wall-clock milliseconds give practical uniqueness; the bump loop
    /// covers sub-millisecond successive inserts.
    fn fresh_id(&self) -> SubscriptionId {
        let mut id = SubscriptionId::now();
        while self.get(id).is_some() {
            id = id.successor();
        }
        id
    }

    fn emit(&self, event: StoreEvent) {
        for observer in &self.observers {
            observer(&event);
        }
    }
}
