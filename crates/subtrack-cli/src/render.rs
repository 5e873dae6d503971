//! Text rendering of subscription cards and the upcoming view.

use subtrack_core::{Subscription, UpcomingPayments};

/// Explicit indicator shown when nothing renews inside the window.
pub const NO_UPCOMING: &str = "No upcoming payments in the next 7 days.";

/// Line shown for an empty subscription list.
pub const NO_SUBSCRIPTIONS: &str = "No subscriptions yet.";

/// Renders one subscription as a text card.
pub fn render_card(sub: &Subscription) -> String {
    format!(
        "{name}\n  Price: ₹{price:.2}\n  Renewal Date: {date}\n  Cycle: {cycle}\n  Id: {id}",
        name = sub.name,
        price = sub.price,
        date = sub.renewal_date,
        cycle = sub.renewal_cycle,
        id = sub.id,
    )
}

/// Renders the full list, in store order.
pub fn render_list(records: &[Subscription]) -> String {
    if records.is_empty() {
        return NO_SUBSCRIPTIONS.to_string();
    }
    records
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders the upcoming-payments view, with the explicit none indicator.
pub fn render_upcoming(view: &UpcomingPayments) -> String {
    match view {
        UpcomingPayments::None => NO_UPCOMING.to_string(),
        UpcomingPayments::Due(records) => records
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}
