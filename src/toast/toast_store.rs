//! Toast store
//!
//! Holds the tracked toasts, applies actions through [`reduce`], schedules
//! delayed removal of dismissed toasts and notifies observers after every
//! dispatch. The store is single-threaded: it is shared by cloning the
//! handle, and timers fire when the owning event loop calls [`ToastStore::tick`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Instant;

use super::ToastSettings;
use super::id_generator::IdGenerator;
use super::removal_queue::RemovalQueue;
use super::toast_reducer::{Action, reduce};
use super::toast_types::{OpenChangeHandler, Toast, ToastId, ToastProps, ToastState, ToastUpdate};

/// Callback invoked with the new state after every dispatch
pub type Observer = Rc<dyn Fn(&ToastState)>;

struct StoreInner {
    state: ToastState,
    settings: ToastSettings,
    ids: IdGenerator,
    removals: RemovalQueue,
    observers: Vec<(u64, Observer)>,
    next_observer_id: u64,
}

impl StoreInner {
    fn schedule_removals(&mut self, target: Option<&ToastId>, now: Instant) {
        let delay = self.settings.remove_delay;
        for toast in &self.state.toasts {
            if target.is_some_and(|id| id != &toast.id) {
                continue;
            }
            if self.removals.schedule(&toast.id, now, delay) {
                #[cfg(debug_assertions)]
                log::debug!("Scheduled removal of toast {} in {:?}", toast.id, delay);
            }
        }
    }
}

/// Shared handle to the toast store
#[derive(Clone)]
pub struct ToastStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(ToastSettings::default())
    }
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ToastStore")
            .field("state", &inner.state)
            .field("settings", &inner.settings)
            .field("pending_removals", &inner.removals.len())
            .field("observers", &inner.observers.len())
            .finish()
    }
}

impl ToastStore {
    pub fn new(settings: ToastSettings) -> Self {
        Self::with_id_generator(settings, IdGenerator::new())
    }

    pub fn with_id_generator(settings: ToastSettings, ids: IdGenerator) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state: ToastState::new(),
                settings,
                ids,
                removals: RemovalQueue::new(),
                observers: Vec::new(),
                next_observer_id: 0,
            })),
        }
    }

    fn upgrade(weak: &Weak<RefCell<StoreInner>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    pub fn settings(&self) -> ToastSettings {
        self.inner.borrow().settings
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ToastState {
        self.inner.borrow().state.clone()
    }

    /// Apply `action` and notify every observer, in registration order
    pub fn dispatch(&self, action: Action) {
        self.dispatch_at(action, Instant::now());
    }

    fn dispatch_at(&self, action: Action, now: Instant) {
        let observers = {
            let mut inner = self.inner.borrow_mut();

            if let Action::Dismiss(target) = &action {
                inner.schedule_removals(target.as_ref(), now);
            }

            #[cfg(debug_assertions)]
            log::debug!("Toast action: {:?}", action);

            let limit = inner.settings.limit;
            let _changed = reduce(&mut inner.state, action, limit);

            #[cfg(debug_assertions)]
            if !_changed {
                log::debug!("Toast action left state unchanged");
            }

            inner
                .observers
                .iter()
                .map(|(_, o)| Rc::clone(o))
                .collect::<Vec<Observer>>()
        };

        // Borrow released: observers may dispatch or unsubscribe. The state
        // is read per observer so a nested dispatch is never followed by a
        // stale one.
        for observer in observers {
            let state = self.inner.borrow().state.clone();
            observer(&state);
        }
    }

    /// Show a new toast and return a handle bound to its id
    pub fn toast(&self, props: ToastProps) -> ToastHandle {
        let id = self.inner.borrow_mut().ids.next_id();

        let weak = Rc::downgrade(&self.inner);
        let handler_id = id.clone();
        let on_open_change = OpenChangeHandler::new(move |open| {
            if open {
                return;
            }
            if let Some(store) = ToastStore::upgrade(&weak) {
                store.dismiss(Some(&handler_id));
            }
        });

        let toast = Toast::new(id.clone(), props).with_on_open_change(on_open_change);
        self.dispatch(Action::Add(toast));

        ToastHandle {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn update(&self, id: &ToastId, update: ToastUpdate) {
        self.dispatch(Action::Update(id.clone(), update));
    }

    /// Close one toast, or all of them, and schedule their removal
    pub fn dismiss(&self, id: Option<&ToastId>) {
        self.dispatch(Action::Dismiss(id.cloned()));
    }

    /// Delete one toast, or clear the store without waiting for the delay
    pub fn remove(&self, id: Option<&ToastId>) {
        self.dispatch(Action::Remove(id.cloned()));
    }

    /// Register an observer; it stays registered until the subscription is dropped
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, observer: impl Fn(&ToastState) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_observer_id;
        inner.next_observer_id += 1;
        inner.observers.push((id, Rc::new(observer)));

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Fire removal timers that are due; returns how many fired
    pub fn tick(&self) -> usize {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&self, now: Instant) -> usize {
        let expired = self.inner.borrow_mut().removals.take_expired(now);
        let fired = expired.len();

        for id in expired {
            #[cfg(debug_assertions)]
            log::debug!("Removal timer fired for toast {}", id);
            self.dispatch_at(Action::Remove(Some(id)), now);
        }
        fired
    }

    /// Deadline of the earliest pending removal
    pub fn next_removal_at(&self) -> Option<Instant> {
        self.inner.borrow().removals.next_deadline()
    }

    pub fn pending_removals(&self) -> usize {
        self.inner.borrow().removals.len()
    }

    pub fn is_removal_pending(&self, id: &ToastId) -> bool {
        self.inner.borrow().removals.is_pending(id)
    }
}

/// Returned by [`ToastStore::toast`]; updates or dismisses that one toast.
///
/// Operations are no-ops once the toast is gone or the store is dropped.
#[derive(Clone)]
pub struct ToastHandle {
    id: ToastId,
    store: Weak<RefCell<StoreInner>>,
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle").field("id", &self.id).finish()
    }
}

impl ToastHandle {
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    pub fn update(&self, update: ToastUpdate) {
        if let Some(store) = ToastStore::upgrade(&self.store) {
            store.update(&self.id, update);
        }
    }

    pub fn dismiss(&self) {
        if let Some(store) = ToastStore::upgrade(&self.store) {
            store.dismiss(Some(&self.id));
        }
    }
}

/// Observer registration; dropping it deregisters the observer
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<StoreInner>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.borrow_mut().observers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "toast_store_tests.rs"]
mod toast_store_tests;
