use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::io;
use std::time::Instant;

use super::app_state::App;
use crate::theme;
use crate::toast::{ToastProps, ToastUpdate, ToastVariant};

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Fire due removal timers before blocking on input
        self.tick();

        if event::poll(self.poll_timeout(Instant::now()))? {
            // Check that it's a key press event to avoid duplicates
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key_event(key_event);
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => {
                let n = self.shown + 1;
                self.show(
                    ToastProps::new()
                        .title(format!("Notification #{}", n))
                        .description("Press Esc to close it.")
                        .extra("sequence", n),
                );
            }
            KeyCode::Char('e') => {
                self.show(
                    ToastProps::new()
                        .title("Something went wrong")
                        .description("There was a problem with your request.")
                        .variant(ToastVariant::Destructive),
                );
            }
            KeyCode::Char('a') => {
                let action = Line::from(Span::styled(
                    "[u] Undo",
                    Style::new().fg(theme::toast::ACTION),
                ));
                self.show(ToastProps::new().title("Message archived").action(action));
            }
            KeyCode::Char('u') => {
                if let Some(handle) = &self.last_toast {
                    handle.update(ToastUpdate::new().description("Updated in place."));
                }
            }
            KeyCode::Char('x') => {
                if let Some(handle) = &self.last_toast {
                    handle.dismiss();
                }
            }
            KeyCode::Char('d') => self.toaster.dismiss(None),
            KeyCode::Char('c') => self.store.remove(None),
            KeyCode::Esc => {
                self.toaster.close_newest();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
