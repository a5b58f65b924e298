//! Toast reducer
//!
//! Pure state transitions for the four toast actions. Timers and observer
//! notification live in the store; this module only rewrites the state.

use super::toast_types::{Toast, ToastId, ToastState, ToastUpdate};

/// Toast state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Insert at the front, evicting the oldest toasts beyond the limit
    Add(Toast),
    /// Merge into the toast with this id; unknown ids are ignored
    Update(ToastId, ToastUpdate),
    /// Close one toast, or every toast when `None`
    Dismiss(Option<ToastId>),
    /// Delete one toast, or every toast when `None`
    Remove(Option<ToastId>),
}

/// Apply `action` to `state`, keeping at most `limit` toasts.
///
/// Returns `true` if the state changed. Every action is total: ids that are
/// not tracked leave the state untouched.
pub fn reduce(state: &mut ToastState, action: Action, limit: usize) -> bool {
    match action {
        Action::Add(toast) => {
            // Ids stay unique even if a caller re-adds a tracked id
            state.toasts.retain(|t| t.id != toast.id);
            state.toasts.insert(0, toast);
            state.toasts.truncate(limit);
            true
        }
        Action::Update(id, update) => match state.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.apply(update);
                true
            }
            None => false,
        },
        Action::Dismiss(id) => {
            let mut changed = false;
            for toast in state
                .toasts
                .iter_mut()
                .filter(|t| id.as_ref().is_none_or(|id| &t.id == id))
            {
                changed |= toast.open;
                toast.open = false;
            }
            changed
        }
        Action::Remove(Some(id)) => {
            let before = state.toasts.len();
            state.toasts.retain(|t| t.id != id);
            state.toasts.len() != before
        }
        Action::Remove(None) => {
            let changed = !state.toasts.is_empty();
            state.toasts.clear();
            changed
        }
    }
}

#[cfg(test)]
#[path = "toast_reducer_tests.rs"]
mod toast_reducer_tests;
