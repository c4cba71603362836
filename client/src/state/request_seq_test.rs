use super::*;

#[test]
fn begin_issues_increasing_numbers() {
    let mut slot = RequestSlot::default();
    assert!(!slot.is_pending());
    assert_eq!(slot.begin(), 1);
    assert_eq!(slot.begin(), 2);
    assert!(slot.is_pending());
}

#[test]
fn in_order_completions_are_accepted() {
    let mut slot = RequestSlot::default();
    let first = slot.begin();
    assert!(slot.complete(first));
    let second = slot.begin();
    assert!(slot.complete(second));
    assert!(!slot.is_pending());
}

#[test]
fn older_completion_after_newer_is_discarded() {
    let mut slot = RequestSlot::default();
    let older = slot.begin();
    let newer = slot.begin();
    assert!(slot.complete(newer));
    assert!(!slot.complete(older));
}

#[test]
fn older_completion_before_newer_is_still_applied() {
    let mut slot = RequestSlot::default();
    let older = slot.begin();
    let newer = slot.begin();
    assert!(slot.complete(older));
    assert!(slot.is_pending());
    assert!(slot.complete(newer));
    assert!(!slot.is_pending());
}

#[test]
fn duplicate_completion_is_discarded() {
    let mut slot = RequestSlot::default();
    let seq = slot.begin();
    assert!(slot.complete(seq));
    assert!(!slot.complete(seq));
}

#[test]
fn never_issued_sequence_is_discarded() {
    let mut slot = RequestSlot::default();
    assert!(!slot.complete(1));
    slot.begin();
    assert!(!slot.complete(5));
}

#[test]
fn invalidate_makes_in_flight_requests_stale() {
    let mut slot = RequestSlot::default();
    let a = slot.begin();
    let b = slot.begin();
    slot.invalidate();
    assert!(!slot.is_pending());
    assert!(!slot.complete(a));
    assert!(!slot.complete(b));

    let c = slot.begin();
    assert!(slot.complete(c));
}
