//! Validating factory for form submissions.
//!
//! The form delivers every field as raw text. `SubscriptionDraft` holds that
//! raw text between user actions (prefill on edit, clear on submit) and
//! `validate` is the single gate that turns it into typed values. Malformed
//! input is rejected here, at the boundary, and never reaches the store.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::types::{RenewalCycle, Subscription};

/// Raw form fields for creating or editing a subscription.
///
/// An empty string means the field has not been filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionDraft {
    /// Display label, as typed.
    pub name: String,
    /// Payment amount, as typed.
    pub price: String,
    /// Renewal date, as typed (expected `YYYY-MM-DD`).
    pub renewal_date: String,
    /// Renewal cycle, as typed (expected `Monthly`/`Yearly`).
    pub renewal_cycle: String,
}

/// Typed output of a successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    /// Non-empty, trimmed display label.
    pub name: String,
    /// Non-negative, finite amount.
    pub price: f64,
    /// Parsed renewal date.
    pub renewal_date: NaiveDate,
    /// Parsed renewal cycle.
    pub renewal_cycle: RenewalCycle,
}

impl SubscriptionDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the draft with a record's current values.
    ///
    /// Used when the form transitions into editing mode.
    pub fn prefill(record: &Subscription) -> Self {
        Self {
            name: record.name.clone(),
            price: record.price.to_string(),
            renewal_date: record.renewal_date.to_string(),
            renewal_cycle: record.renewal_cycle.to_string(),
        }
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the raw fields and produces typed values.
    ///
    /// Checks, in order: name non-empty after trimming; price present,
    /// numeric, finite, and non-negative; renewal date present and a valid
    /// ISO date; renewal cycle present and one of `Monthly`/`Yearly`.
    /// Returns the first failure as [`Error::Validation`].
    pub fn validate(&self) -> Result<ValidatedFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::validation_field("name", "must not be empty"));
        }

        let raw_price = self.price.trim();
        if raw_price.is_empty() {
            return Err(Error::validation_field("price", "is required"));
        }
        let price: f64 = raw_price
            .parse()
            .map_err(|_| Error::validation_field("price", "must be a number"))?;
        if !price.is_finite() {
            return Err(Error::validation_field("price", "must be a number"));
        }
        if price < 0.0 {
            return Err(Error::validation_field("price", "must not be negative"));
        }

        let raw_date = self.renewal_date.trim();
        if raw_date.is_empty() {
            return Err(Error::validation_field("renewal date", "is required"));
        }
        let renewal_date: NaiveDate = raw_date.parse().map_err(|_| {
            Error::validation_field("renewal date", "must be a valid YYYY-MM-DD date")
        })?;

        let raw_cycle = self.renewal_cycle.trim();
        if raw_cycle.is_empty() {
            return Err(Error::validation_field("renewal cycle", "is required"));
        }
        let renewal_cycle: RenewalCycle = raw_cycle.parse()?;

        Ok(ValidatedFields {
            name: name.to_string(),
            price,
            renewal_date,
            renewal_cycle,
        })
    }
}
