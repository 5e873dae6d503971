//! The subscription record and its persisted wire shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{RenewalCycle, SubscriptionId, ValidatedFields};

/// A single recurring-payment record.
///
/// Field renames give the exact persisted layout: a JSON object with `id`
/// (integer), `name` (string), `price` (number), `renewalDate` (ISO 8601
/// date string), and `renewalCycle` (`"Monthly"`/`"Yearly"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier, stable for the record's lifetime.
    pub id: SubscriptionId,

    /// Non-empty display label.
    pub name: String,

    /// Non-negative payment amount.
    pub price: f64,

    /// Next renewal date (calendar-day granularity).
    #[serde(rename = "renewalDate")]
    pub renewal_date: NaiveDate,

    /// How often the subscription renews.
    #[serde(rename = "renewalCycle")]
    pub renewal_cycle: RenewalCycle,
}

impl Subscription {
    /// Assembles a record from validated form fields and an id.
    ///
    /// This is the only construction path used by the store, so a record
    /// never carries an empty name or a non-numeric price.
    pub fn from_fields(id: SubscriptionId, fields: ValidatedFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            renewal_date: fields.renewal_date,
            renewal_cycle: fields.renewal_cycle,
        }
    }
}
