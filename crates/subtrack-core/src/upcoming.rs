//! The upcoming-payments view.
//!
//! A pure function of a record list and a reference date. Nothing here is
//! cached; the caller recomputes on every display.

use chrono::{Days, NaiveDate};

use crate::types::Subscription;

/// Width of the forward window, in days. The window is inclusive on both
/// ends: a renewal exactly seven days out is still "upcoming".
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Result of the upcoming-payments computation.
///
/// An empty result is a real rendered state, not an absence: `None` carries
/// the obligation to show an explicit "nothing due" indicator. `Due` never
/// holds an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum UpcomingPayments {
    /// No renewals fall inside the window.
    None,
    /// Renewals inside the window, in store order.
    Due(Vec<Subscription>),
}

impl UpcomingPayments {
    /// Returns `true` when nothing is due inside the window.
    pub fn is_none(&self) -> bool {
        matches!(self, UpcomingPayments::None)
    }

    /// Returns the due records, empty when nothing is due.
    pub fn due(&self) -> &[Subscription] {
        match self {
            UpcomingPayments::None => &[],
            UpcomingPayments::Due(records) => records,
        }
    }
}

/// Filters `records` down to those renewing within the next
/// [`UPCOMING_WINDOW_DAYS`] days of `today`, bounds inclusive.
///
/// Comparison is at calendar-day granularity on the date portion only, and
/// the result preserves the input (store) order. Records dated before
/// `today` are excluded, however overdue they are.
pub fn upcoming_within_week(records: &[Subscription], today: NaiveDate) -> UpcomingPayments {
    let end = today
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let due: Vec<Subscription> = records
        .iter()
        .filter(|sub| sub.renewal_date >= today && sub.renewal_date <= end)
        .cloned()
        .collect();

    if due.is_empty() {
        UpcomingPayments::None
    } else {
        UpcomingPayments::Due(due)
    }
}
