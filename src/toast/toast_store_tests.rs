//! Tests for toast_store

use super::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::time::Duration;

use crate::toast::Toaster;

const DELAY: Duration = Duration::from_millis(500);

fn store_with_limit(limit: usize) -> ToastStore {
    ToastStore::new(ToastSettings {
        limit,
        remove_delay: DELAY,
    })
}

fn titles(store: &ToastStore) -> Vec<String> {
    store
        .state()
        .toasts
        .iter()
        .map(|t| t.title.clone().unwrap_or_default())
        .collect()
}

/// Records every state an observer receives
fn recording_observer(store: &ToastStore) -> (Rc<RefCell<Vec<ToastState>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    (seen, subscription)
}

#[test]
fn test_first_toast_gets_id_one() {
    let store = store_with_limit(1);
    let handle = store.toast(ToastProps::new().title("A"));

    assert_eq!(handle.id().as_str(), "1");
    let state = store.state();
    assert_eq!(state.len(), 1);
    assert_eq!(state.toasts[0].id.as_str(), "1");
    assert_eq!(state.toasts[0].title.as_deref(), Some("A"));
    assert!(state.toasts[0].open);
    assert!(state.toasts[0].on_open_change.is_some());
}

#[test]
fn test_second_toast_evicts_first() {
    let store = store_with_limit(1);
    store.toast(ToastProps::new().title("A"));
    let second = store.toast(ToastProps::new().title("B"));

    assert_eq!(second.id().as_str(), "2");
    let state = store.state();
    assert_eq!(state.len(), 1);
    assert_eq!(state.toasts[0].id.as_str(), "2");
    assert_eq!(state.toasts[0].title.as_deref(), Some("B"));
    assert!(state.toasts[0].open);
}

#[test]
fn test_dismiss_then_removal_after_delay() {
    let store = store_with_limit(1);
    store.toast(ToastProps::new().title("A"));
    let handle = store.toast(ToastProps::new().title("B"));

    let dismissed_at = Instant::now();
    handle.dismiss();

    let state = store.state();
    assert_eq!(state.len(), 1);
    assert!(!state.toasts[0].open);
    assert_eq!(store.pending_removals(), 1);

    // Not yet due
    assert_eq!(store.tick_at(dismissed_at), 0);
    assert_eq!(store.state().len(), 1);

    assert_eq!(store.tick_at(Instant::now() + DELAY), 1);
    assert!(store.state().is_empty());
    assert_eq!(store.pending_removals(), 0);
}

#[test]
fn test_update_closed_toast_before_removal() {
    let store = store_with_limit(1);
    store.toast(ToastProps::new().title("A"));
    let handle = store.toast(ToastProps::new().title("B"));
    handle.dismiss();

    store.update(&ToastId::from("2"), ToastUpdate::new().description("hello"));

    let toast = &store.state().toasts[0];
    assert_eq!(toast.id.as_str(), "2");
    assert_eq!(toast.title.as_deref(), Some("B"));
    assert_eq!(toast.description.as_deref(), Some("hello"));
    assert!(!toast.open);
}

#[test]
fn test_handle_update_merges() {
    let store = store_with_limit(1);
    let handle = store.toast(ToastProps::new().title("Uploading").description("0%"));
    handle.update(ToastUpdate::new().description("100%"));

    assert_eq!(titles(&store), vec!["Uploading"]);
    assert_eq!(store.state().toasts[0].description.as_deref(), Some("100%"));
}

#[test]
fn test_dismiss_twice_keeps_one_pending_timer() {
    let store = store_with_limit(1);
    let handle = store.toast(ToastProps::new().title("A"));

    handle.dismiss();
    let once = store.state();
    let deadline = store.next_removal_at();

    handle.dismiss();
    assert_eq!(store.state(), once);
    assert_eq!(store.pending_removals(), 1);
    assert_eq!(store.next_removal_at(), deadline);
}

#[test]
fn test_dismiss_with_maximum_delay_keeps_toast() {
    let store = ToastStore::new(ToastSettings {
        limit: 1,
        remove_delay: Duration::MAX,
    });
    let handle = store.toast(ToastProps::new().title("Sticky"));

    handle.dismiss();

    assert!(!store.state().toasts[0].open);
    assert!(store.is_removal_pending(handle.id()));
    assert_eq!(store.next_removal_at(), None);
    assert_eq!(store.tick_at(Instant::now() + Duration::from_secs(86_400)), 0);
    assert_eq!(store.state().len(), 1);
}

#[test]
fn test_dismiss_all_schedules_every_toast() {
    let store = store_with_limit(3);
    store.toast(ToastProps::new().title("A"));
    store.toast(ToastProps::new().title("B"));
    store.toast(ToastProps::new().title("C"));

    store.dismiss(None);

    assert!(store.state().toasts.iter().all(|t| !t.open));
    assert_eq!(store.pending_removals(), 3);

    assert_eq!(store.tick_at(Instant::now() + DELAY), 3);
    assert!(store.state().is_empty());
}

#[test]
fn test_dismiss_unknown_id_schedules_nothing() {
    let store = store_with_limit(1);
    store.toast(ToastProps::new().title("A"));
    store.dismiss(Some(&ToastId::from("42")));

    assert_eq!(store.pending_removals(), 0);
    assert!(store.state().toasts[0].open);
}

#[test]
fn test_remove_all_is_immediate() {
    let store = store_with_limit(3);
    store.toast(ToastProps::new().title("A"));
    let b = store.toast(ToastProps::new().title("B"));
    b.dismiss();

    store.remove(None);
    assert!(store.state().is_empty());
}

#[test]
fn test_remove_one_leaves_rest() {
    let store = store_with_limit(3);
    let a = store.toast(ToastProps::new().title("A"));
    store.toast(ToastProps::new().title("B"));

    store.remove(Some(a.id()));
    assert_eq!(titles(&store), vec!["B"]);
}

#[test]
fn test_timer_for_evicted_toast_is_harmless() {
    let store = store_with_limit(1);
    let a = store.toast(ToastProps::new().title("A"));
    a.dismiss();
    store.toast(ToastProps::new().title("B"));

    assert_eq!(store.tick_at(Instant::now() + DELAY), 1);
    assert_eq!(titles(&store), vec!["B"]);
    assert!(store.state().toasts[0].open);
}

#[test]
fn test_handle_after_removal_is_noop() {
    let store = store_with_limit(1);
    let handle = store.toast(ToastProps::new().title("A"));
    store.remove(None);

    handle.update(ToastUpdate::new().title("ghost"));
    handle.dismiss();

    assert!(store.state().is_empty());
    assert_eq!(store.pending_removals(), 0);
}

#[test]
fn test_handle_after_store_dropped_is_noop() {
    let store = store_with_limit(1);
    let handle = store.toast(ToastProps::new().title("A"));
    drop(store);

    handle.update(ToastUpdate::new().title("ghost"));
    handle.dismiss();
    assert_eq!(handle.id().as_str(), "1");
}

#[test]
fn test_open_change_false_dismisses() {
    let store = store_with_limit(1);
    store.toast(ToastProps::new().title("A"));

    let toast = store.state().toasts[0].clone();
    toast.set_open_from_ui(true);
    assert!(store.state().toasts[0].open);

    toast.set_open_from_ui(false);
    assert!(!store.state().toasts[0].open);
    assert!(store.is_removal_pending(&toast.id));
}

#[test]
fn test_observers_fan_out_once_with_same_state() {
    let store = store_with_limit(1);
    let (first, _sub_first) = recording_observer(&store);
    let (second, _sub_second) = recording_observer(&store);

    store.toast(ToastProps::new().title("A"));

    assert_eq!(first.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 1);
    assert_eq!(first.borrow()[0], second.borrow()[0]);
    assert_eq!(first.borrow()[0], store.state());
}

#[test]
fn test_observers_notified_in_registration_order() {
    let store = store_with_limit(1);
    let order = Rc::new(RefCell::new(Vec::new()));

    let o1 = Rc::clone(&order);
    let _s1 = store.subscribe(move |_| o1.borrow_mut().push(1));
    let o2 = Rc::clone(&order);
    let _s2 = store.subscribe(move |_| o2.borrow_mut().push(2));

    store.dismiss(None);
    assert_eq!(*order.borrow(), vec![1, 2]);
}

#[test]
fn test_noop_action_still_notifies() {
    let store = store_with_limit(1);
    let (seen, _sub) = recording_observer(&store);

    store.update(&ToastId::from("missing"), ToastUpdate::new().title("X"));
    assert_eq!(seen.borrow().len(), 1);
    assert!(seen.borrow()[0].is_empty());
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let store = store_with_limit(1);
    let (seen, subscription) = recording_observer(&store);

    store.toast(ToastProps::new().title("A"));
    subscription.unsubscribe();
    store.toast(ToastProps::new().title("B"));

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(store.observer_count(), 0);
}

#[test]
fn test_unsubscribe_during_notification() {
    let store = store_with_limit(1);
    let calls = Rc::new(Cell::new(0));

    // First observer drops the second observer's subscription
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let victim_in_first = Rc::clone(&victim);
    let _first = store.subscribe(move |_| {
        victim_in_first.borrow_mut().take();
    });

    let calls_in_second = Rc::clone(&calls);
    *victim.borrow_mut() = Some(store.subscribe(move |_| {
        calls_in_second.set(calls_in_second.get() + 1);
    }));

    store.toast(ToastProps::new().title("A"));
    // The cycle already in flight still reaches it
    assert_eq!(calls.get(), 1);

    store.toast(ToastProps::new().title("B"));
    assert_eq!(calls.get(), 1);
    assert_eq!(store.observer_count(), 1);
}

#[test]
fn test_observer_may_dispatch() {
    let store = store_with_limit(1);
    let inner_store = store.clone();
    let _sub = store.subscribe(move |state| {
        if let Some(toast) = state.toasts.first()
            && toast.open
        {
            inner_store.dismiss(Some(&toast.id));
        }
    });

    store.toast(ToastProps::new().title("A"));
    assert!(!store.state().toasts[0].open);
}

#[test]
fn test_later_observers_end_on_state_of_nested_dispatch() {
    let store = store_with_limit(1);
    let inner_store = store.clone();
    let _dismisser = store.subscribe(move |state| {
        if let Some(toast) = state.open_toasts().next() {
            inner_store.dismiss(Some(&toast.id));
        }
    });
    let toaster = Toaster::new(&store);
    let (seen, _sub) = recording_observer(&store);

    store.toast(ToastProps::new().title("A"));

    assert!(!store.state().toasts[0].open);
    assert_eq!(*toaster.state(), store.state());
    assert_eq!(seen.borrow().last(), Some(&store.state()));
    assert!(seen.borrow().iter().all(|state| !state.toasts[0].open));
}

#[test]
fn test_subscription_outliving_store() {
    let store = store_with_limit(1);
    let (_seen, subscription) = recording_observer(&store);
    drop(store);
    drop(subscription);
}

#[test]
fn test_ids_continue_across_removals() {
    let store = store_with_limit(1);
    store.toast(ToastProps::new());
    store.remove(None);
    let handle = store.toast(ToastProps::new());
    assert_eq!(handle.id().as_str(), "2");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any number of enqueued toasts, the store tracks at most `limit`
    /// of them and the newest is first.
    #[test]
    fn prop_enqueue_bounded_newest_first(count in 1usize..25, limit in 1usize..4) {
        let store = store_with_limit(limit);
        let mut last = None;
        for n in 0..count {
            last = Some(store.toast(ToastProps::new().title(format!("t{}", n))));
            prop_assert!(store.state().len() <= limit);
        }

        let last = last.unwrap();
        let state = store.state();
        prop_assert_eq!(&state.toasts[0].id, last.id());
        prop_assert_eq!(state.len(), count.min(limit));
    }

    /// Dismissing an id twice has the same observable effect as once.
    #[test]
    fn prop_dismiss_idempotent(count in 1usize..6, pick in 0usize..6) {
        let store = store_with_limit(6);
        let handles: Vec<ToastHandle> =
            (0..count).map(|_| store.toast(ToastProps::new())).collect();
        let target = &handles[pick % count];

        target.dismiss();
        let once = store.state();
        let pending = store.pending_removals();

        target.dismiss();
        prop_assert_eq!(store.state(), once);
        prop_assert_eq!(store.pending_removals(), pending);
        prop_assert_eq!(pending, 1);
    }
}
