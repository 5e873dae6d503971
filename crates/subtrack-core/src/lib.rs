#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Subtrack Core Library
//!
//! Domain types, validation, and the upcoming-payments window for the
//! subtrack subscription tracker.

pub mod error;
pub mod types;
pub mod upcoming;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{
    RenewalCycle, Subscription, SubscriptionDraft, SubscriptionId, ValidatedFields,
};
pub use upcoming::{upcoming_within_week, UpcomingPayments, UPCOMING_WINDOW_DAYS};
