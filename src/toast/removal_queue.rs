use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::toast_types::ToastId;

/// Pending removal deadlines, at most one per toast id.
///
/// A delay too large to represent as an [`Instant`] is kept as a removal
/// that never fires.
#[derive(Debug, Default)]
pub struct RemovalQueue {
    deadlines: HashMap<ToastId, Option<Instant>>,
}

impl RemovalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule removal of `id` at `now + delay`.
    ///
    /// Returns `false` without touching the existing deadline if one is
    /// already pending for `id`.
    pub fn schedule(&mut self, id: &ToastId, now: Instant, delay: Duration) -> bool {
        if self.deadlines.contains_key(id) {
            return false;
        }
        self.deadlines.insert(id.clone(), now.checked_add(delay));
        true
    }

    pub fn is_pending(&self, id: &ToastId) -> bool {
        self.deadlines.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().flatten().min().copied()
    }

    /// Take every id whose deadline is at or before `now`, earliest first
    pub fn take_expired(&mut self, now: Instant) -> Vec<ToastId> {
        let mut expired: Vec<(Instant, ToastId)> = self
            .deadlines
            .iter()
            .filter_map(|(id, deadline)| deadline.map(|at| (at, id.clone())))
            .filter(|(at, _)| *at <= now)
            .collect();
        expired.sort();

        for (_, id) in &expired {
            self.deadlines.remove(id);
        }
        expired.into_iter().map(|(_, id)| id).collect()
    }
}
