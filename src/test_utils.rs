//! Shared test utilities for toaster
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::toast::ToastSettings;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create App with default toast settings for tests
    pub fn test_app() -> App {
        App::new(ToastSettings::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
