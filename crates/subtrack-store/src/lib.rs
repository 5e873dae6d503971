//! # subtrack-store
//!
//! Owns the ordered subscription list and everything that touches it:
//! - [`backend`]: the durable-key boundary (one JSON file, or memory in tests)
//! - [`seed`]: the built-in catalog used when no persisted state exists
//! - [`store`]: load / add / update / remove / persist / list, with change
//!   notifications after every mutation
//! - [`form`]: the Creating/Editing add-edit form state machine
//!
//! Everything runs to completion on the caller's thread; there is no
//! locking, batching, or background work.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod form;
pub mod seed;
pub mod store;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use form::{FormController, FormMode, Submission};
pub use seed::seed_catalog;
pub use store::{StoreEvent, SubscriptionStore};
