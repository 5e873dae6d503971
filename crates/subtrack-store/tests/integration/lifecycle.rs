//! Record lifecycle tests: form submissions, edits, deletes, and the
//! upcoming-payments scenario over a freshly seeded store.

use crate::common::{days_from_today, empty_store, fields, fixed_today, seeded_store};
use subtrack_core::{upcoming_within_week, SubscriptionDraft};
use subtrack_store::{FormController, FormMode, Submission};

#[test]
fn test_seed_then_add_then_upcoming_scenario() {
    // Fresh seed load → add {Test, 100, today+3, Monthly} → size 7 →
    // upcoming view includes "Test".
    let mut store = seeded_store();
    assert_eq!(store.len(), 6);

    let mut form = FormController::new();
    *form.draft_mut() = SubscriptionDraft {
        name: "Test".to_string(),
        price: "100".to_string(),
        renewal_date: days_from_today(3).to_string(),
        renewal_cycle: "Monthly".to_string(),
    };
    let submission = form.submit(&mut store).unwrap();
    assert!(matches!(submission, Submission::Created(_)));
    assert_eq!(store.len(), 7);

    let view = upcoming_within_week(store.list(), fixed_today());
    assert!(view.due().iter().any(|sub| sub.name == "Test"));
}

#[test]
fn test_added_record_matches_submitted_values_exactly() {
    let mut store = empty_store();
    let mut form = FormController::new();
    *form.draft_mut() = SubscriptionDraft {
        name: "Disney+ Hotstar".to_string(),
        price: "299.50".to_string(),
        renewal_date: "2025-10-01".to_string(),
        renewal_cycle: "yearly".to_string(),
    };

    let Submission::Created(id) = form.submit(&mut store).unwrap() else {
        unreachable!("Expected Created submission");
    };

    let sub = store.get(id).unwrap();
    assert_eq!(sub.name, "Disney+ Hotstar");
    assert_eq!(sub.price, 299.5);
    assert_eq!(sub.renewal_date.to_string(), "2025-10-01");
    assert_eq!(sub.renewal_cycle.to_string(), "Yearly");
}

#[test]
fn test_edit_seeded_record_in_place() {
    let mut store = seeded_store();
    let id = store.list()[1].id; // Spotify Premium

    let mut form = FormController::new();
    form.begin_edit(&store, id).unwrap();
    assert_eq!(form.mode(), FormMode::Editing(id));
    assert_eq!(form.draft().name, "Spotify Premium");

    form.draft_mut().price = "199".to_string();
    form.submit(&mut store).unwrap();

    assert_eq!(store.len(), 6);
    let sub = store.get(id).unwrap();
    assert_eq!(sub.name, "Spotify Premium");
    assert_eq!(sub.price, 199.0);
}

#[test]
fn test_delete_leaves_other_records_untouched() {
    let mut store = seeded_store();
    let victim = store.list()[0].id;
    let survivors: Vec<_> = store.list()[1..].to_vec();

    let removed = store.remove(victim).unwrap();

    assert_eq!(removed.name, "Myntra Insider");
    assert_eq!(store.list(), survivors.as_slice());
}

#[test]
fn test_failed_validation_never_reaches_seeded_store() {
    let mut store = seeded_store();
    let before: Vec<_> = store.list().to_vec();

    let mut form = FormController::new();
    *form.draft_mut() = SubscriptionDraft {
        name: String::new(),
        price: "100".to_string(),
        renewal_date: "2025-10-01".to_string(),
        renewal_cycle: "Monthly".to_string(),
    };
    assert!(form.submit(&mut store).is_err());

    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn test_upcoming_over_empty_store_is_explicit_none() {
    let store = empty_store();
    let view = upcoming_within_week(store.list(), fixed_today());
    assert!(view.is_none());
}

#[test]
fn test_store_size_changes_by_exactly_one() {
    let mut store = empty_store();
    let id_a = store.add(fields("A", 1.0)).unwrap();
    assert_eq!(store.len(), 1);
    store.add(fields("B", 2.0)).unwrap();
    assert_eq!(store.len(), 2);
    store.remove(id_a).unwrap();
    assert_eq!(store.len(), 1);
}
