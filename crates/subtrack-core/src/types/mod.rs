//! Core types for subscription records.

mod cycle;
mod draft;
mod ids;
mod proptests;
mod subscription;

pub use cycle::RenewalCycle;
pub use draft::{SubscriptionDraft, ValidatedFields};
pub use ids::SubscriptionId;
pub use subscription::Subscription;
