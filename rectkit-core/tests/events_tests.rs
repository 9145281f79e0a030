// rectkit-core/tests/events_tests.rs

use std::sync::{Arc, Mutex};

use rectkit_core::{EventKind, Events, RectEvent, RectId};

fn event(kind: EventKind) -> RectEvent {
    RectEvent {
        kind,
        target: RectId::new(),
        cursor: None,
    }
}

#[test]
fn test_empty_bag() {
    let events = Events::new();
    assert!(events.is_empty());
    assert_eq!(events.len(), 0);
    assert_eq!(events.emit(&event(EventKind::Click)), 0);
}

#[test]
fn test_emit_only_matching_kind_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut events = Events::new();
    for tag in ["a", "b"] {
        let order = order.clone();
        events.on(EventKind::Click, move |_| order.lock().unwrap().push(tag));
    }
    let o = order.clone();
    events.on(EventKind::Press, move |_| o.lock().unwrap().push("press"));

    assert_eq!(events.emit(&event(EventKind::Click)), 2);
    assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
    assert_eq!(events.count(EventKind::Click), 2);
    assert_eq!(events.count(EventKind::Press), 1);
    assert_eq!(events.count(EventKind::Blur), 0);
}

#[test]
fn test_clear_kind() {
    let mut events = Events::new();
    events.on(EventKind::Focus, |_| {});
    events.on(EventKind::Blur, |_| {});
    events.clear(EventKind::Focus);
    assert_eq!(events.count(EventKind::Focus), 0);
    assert_eq!(events.len(), 1);
    events.clear_all();
    assert!(events.is_empty());
}

#[test]
fn test_clone_shares_listeners() {
    let hits = Arc::new(Mutex::new(0));
    let h = hits.clone();
    let mut events = Events::new();
    events.on(EventKind::MouseIn, move |_| *h.lock().unwrap() += 1);

    let copy = events.clone();
    copy.emit(&event(EventKind::MouseIn));
    events.emit(&event(EventKind::MouseIn));
    assert_eq!(*hits.lock().unwrap(), 2);
}

#[test]
fn test_debug_lists_kinds() {
    let mut events = Events::new();
    events.on(EventKind::MouseOut, |_| {});
    assert!(format!("{:?}", events).contains("mouse-out"));
}

#[test]
fn test_kind_labels_unique() {
    let labels: std::collections::HashSet<_> =
        EventKind::all().iter().map(|k| k.label()).collect();
    assert_eq!(labels.len(), EventKind::all().len());
}
