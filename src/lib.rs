//! toaster library - transient toast notifications for terminal UIs
//!
//! The [`toast`] module holds the store, reducer and presentation binding;
//! the remaining modules make up the demo application built on top of it.

pub mod app;
pub mod config;
pub mod error;
pub mod theme;
pub mod toast;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use toast::{ToastHandle, ToastProps, ToastSettings, ToastStore, Toaster};
