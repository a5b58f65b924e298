use std::time::{Duration, Instant};

use crate::toast::{ToastHandle, ToastProps, ToastSettings, ToastStore, ToastVariant, Toaster};

#[cfg(debug_assertions)]
use log::debug;

/// Timeout for event polling - allows periodic refresh for removal timers
pub const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub store: ToastStore,
    pub toaster: Toaster,
    /// Handle of the most recently shown toast, for update/dismiss keys
    pub last_toast: Option<ToastHandle>,
    /// Number of toasts shown so far, used to label new ones
    pub shown: u32,
    pub should_quit: bool,
    needs_first_render: bool,
}

impl App {
    pub fn new(settings: ToastSettings) -> Self {
        let store = ToastStore::new(settings);
        let toaster = Toaster::new(&store);

        #[cfg(debug_assertions)]
        debug!("App created with toast settings {:?}", settings);

        Self {
            store,
            toaster,
            last_toast: None,
            shown: 0,
            should_quit: false,
            needs_first_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns whether the frame must be redrawn, consuming the dirty flag
    pub fn should_render(&mut self) -> bool {
        let first = std::mem::take(&mut self.needs_first_render);
        // Always consume the toaster flag so it doesn't linger
        self.toaster.take_dirty() || first
    }

    /// Fire due removal timers
    pub fn tick(&self) -> usize {
        self.store.tick()
    }

    /// How long the event loop may block before the next removal is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.store.next_removal_at() {
            Some(deadline) => deadline.saturating_duration_since(now).min(EVENT_POLL_TIMEOUT),
            None => EVENT_POLL_TIMEOUT,
        }
    }

    /// Show a toast and remember its handle
    pub fn show(&mut self, props: ToastProps) -> ToastHandle {
        self.shown += 1;
        let handle = self.toaster.toast(props);
        self.last_toast = Some(handle.clone());
        handle
    }

    /// Surface a startup problem, such as an invalid config file
    pub fn show_warning(&mut self, message: &str) {
        self.show(
            ToastProps::new()
                .title("Warning")
                .description(message)
                .variant(ToastVariant::Destructive),
        );
    }
}
