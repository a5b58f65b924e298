//! Presentation binding between a [`ToastStore`] and the terminal UI.
//!
//! A [`Toaster`] captures the store's state when created, keeps a copy of
//! every later state the store publishes, and raises a dirty flag so the
//! event loop knows to redraw. Dropping it deregisters from the store.

use ratatui::Frame;
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use super::toast_render::render_toasts;
use super::toast_store::{Subscription, ToastHandle, ToastStore};
use super::toast_types::{Toast, ToastId, ToastProps, ToastState};

pub struct Toaster {
    store: ToastStore,
    state: Rc<RefCell<ToastState>>,
    dirty: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl Toaster {
    pub fn new(store: &ToastStore) -> Self {
        let state = Rc::new(RefCell::new(store.state()));
        let dirty = Rc::new(Cell::new(false));

        let observed_state = Rc::clone(&state);
        let observed_dirty = Rc::clone(&dirty);
        let subscription = store.subscribe(move |next| {
            *observed_state.borrow_mut() = next.clone();
            observed_dirty.set(true);
        });

        Self {
            store: store.clone(),
            state,
            dirty,
            _subscription: subscription,
        }
    }

    /// Latest state published by the store
    pub fn state(&self) -> Ref<'_, ToastState> {
        self.state.borrow()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.state.borrow().toasts.clone()
    }

    /// Returns whether the store changed since the last call
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn toast(&self, props: ToastProps) -> ToastHandle {
        self.store.toast(props)
    }

    pub fn dismiss(&self, id: Option<&ToastId>) {
        self.store.dismiss(id);
    }

    /// Close the newest open toast as if the user pressed its close button.
    ///
    /// Returns `false` when no toast is open.
    pub fn close_newest(&self) -> bool {
        // Clone out of the borrow: the handler dispatches back into the store
        let newest = self.state.borrow().open_toasts().next().cloned();
        match newest {
            Some(toast) => {
                toast.set_open_from_ui(false);
                true
            }
            None => false,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        render_toasts(frame, &self.state.borrow().toasts);
    }
}
