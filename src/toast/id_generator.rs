use super::toast_types::ToastId;

/// Largest integer a double can represent exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Monotonic id source; wraps to zero after `MAX_SAFE_INTEGER`.
///
/// Ids are unique only within one counter epoch.
#[derive(Debug, Default)]
pub struct IdGenerator {
    count: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `count`, so the next id is `count + 1`
    pub fn starting_at(count: u64) -> Self {
        Self {
            count: count % MAX_SAFE_INTEGER,
        }
    }

    pub fn next_id(&mut self) -> ToastId {
        self.count = (self.count + 1) % MAX_SAFE_INTEGER;
        ToastId::from(self.count.to_string())
    }
}
