use super::*;

// =============================================================
// FlashMessage
// =============================================================

#[test]
fn message_walks_through_lifecycle() {
    let mut msg = FlashMessage::default();
    assert_eq!(msg.phase(), MessagePhase::Shown);
    assert!(msg.schedule());
    assert!(msg.begin_fade());
    assert!(msg.finish());
    assert_eq!(msg.phase(), MessagePhase::Removed);
}

#[test]
fn message_is_scheduled_only_once() {
    let mut msg = FlashMessage::default();
    assert!(msg.schedule());
    assert!(!msg.schedule());
}

#[test]
fn claim_of_unmarked_message_is_scheduled() {
    let Some(mut msg) = FlashMessage::claim(false) else {
        panic!("unmarked message should be claimable");
    };
    assert_eq!(msg.phase(), MessagePhase::Scheduled);
    assert!(msg.begin_fade());
}

#[test]
fn claim_of_marked_message_is_refused() {
    assert!(FlashMessage::claim(true).is_none());
}

#[test]
fn out_of_order_transitions_are_refused() {
    let mut msg = FlashMessage::default();
    assert!(!msg.begin_fade());
    assert!(!msg.finish());
    assert_eq!(msg.phase(), MessagePhase::Shown);
}

// =============================================================
// MessagePoller
// =============================================================

#[test]
fn poller_stops_after_budget() {
    let mut poller = MessagePoller::new(10);
    let continued = (0..10).filter(|_| poller.record_scan()).count();
    assert_eq!(continued, 9);
    assert_eq!(poller.attempts(), 10);
    assert!(poller.exhausted());
    assert!(!poller.record_scan());
    assert_eq!(poller.attempts(), 10);
}

#[test]
fn zero_budget_poller_is_exhausted_immediately() {
    let mut poller = MessagePoller::new(0);
    assert!(poller.exhausted());
    assert!(!poller.record_scan());
}
