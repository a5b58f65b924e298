// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

use crate::toast::{DEFAULT_REMOVE_DELAY, DEFAULT_TOAST_LIMIT, ToastSettings};

/// Toast store configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToastConfig {
    /// Maximum number of tracked toasts; older ones are evicted
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Delay between a toast being closed and its removal from the store
    #[serde(default = "default_remove_delay_ms")]
    pub remove_delay_ms: u64,
}

fn default_limit() -> usize {
    DEFAULT_TOAST_LIMIT
}

fn default_remove_delay_ms() -> u64 {
    DEFAULT_REMOVE_DELAY.as_millis() as u64
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            limit: default_limit(),
            remove_delay_ms: default_remove_delay_ms(),
        }
    }
}

impl ToastConfig {
    /// Store settings described by this section
    pub fn settings(&self) -> ToastSettings {
        ToastSettings {
            limit: self.limit,
            remove_delay: Duration::from_millis(self.remove_delay_ms),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
