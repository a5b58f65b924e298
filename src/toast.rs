//! Toast module for toaster
//!
//! Provides a store of transient notifications ("toasts"), a reducer that
//! applies the four toast actions, and a binding that renders the store's
//! contents as floating overlays. Any component holding a [`ToastStore`] can
//! show a toast and receive a [`ToastHandle`] to update or dismiss it.

mod id_generator;
mod removal_queue;
mod toast_reducer;
mod toast_render;
mod toast_store;
mod toast_types;
mod toaster;

use std::time::Duration;

pub use id_generator::{IdGenerator, MAX_SAFE_INTEGER};
pub use toast_reducer::{Action, reduce};
pub use toast_render::render_toasts;
pub use toast_store::{Observer, Subscription, ToastHandle, ToastStore};
pub use toast_types::{
    OpenChangeHandler, Toast, ToastId, ToastProps, ToastState, ToastUpdate, ToastVariant,
};
pub use toaster::Toaster;

/// Maximum number of toasts tracked at once
pub const DEFAULT_TOAST_LIMIT: usize = 1;

/// Delay between a toast being closed and its removal from the store
pub const DEFAULT_REMOVE_DELAY: Duration = Duration::from_millis(1_000_000);

/// Store settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    pub limit: usize,
    pub remove_delay: Duration,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOAST_LIMIT,
            remove_delay: DEFAULT_REMOVE_DELAY,
        }
    }
}
