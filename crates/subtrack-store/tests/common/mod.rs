//! Common test utilities for store integration tests.

use chrono::{Days, NaiveDate};
use subtrack_core::{RenewalCycle, ValidatedFields};
use subtrack_store::{MemoryBackend, SubscriptionStore};

/// Fixed reference "now" so window assertions never depend on the clock.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
}

/// A date relative to [`fixed_today`].
pub fn days_from_today(days: u64) -> NaiveDate {
    fixed_today().checked_add_days(Days::new(days)).unwrap()
}

/// Validated fields with the given name/price, dated three days out.
pub fn fields(name: &str, price: f64) -> ValidatedFields {
    fields_on(name, price, days_from_today(3))
}

/// Validated fields with an explicit renewal date.
pub fn fields_on(name: &str, price: f64, renewal_date: NaiveDate) -> ValidatedFields {
    ValidatedFields {
        name: name.to_string(),
        price,
        renewal_date,
        renewal_cycle: RenewalCycle::Monthly,
    }
}

/// A store loaded from an absent key, i.e. holding the seed catalog.
pub fn seeded_store() -> SubscriptionStore<MemoryBackend> {
    SubscriptionStore::load(MemoryBackend::new())
}

/// A store loaded from an empty persisted list.
pub fn empty_store() -> SubscriptionStore<MemoryBackend> {
    SubscriptionStore::load(MemoryBackend::with_payload("[]"))
}
