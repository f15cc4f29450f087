//! Mutable rotation state
//!
//! Everything here is only touched while the owning writer's lock is held.

use std::fs::File;

/// Position in the rotation plus the open handle
#[derive(Debug, Default)]
pub(crate) struct RotationState {
    /// Slot of the current file; `None` until the first rotation
    pub index: Option<u32>,

    /// Bytes written to the current file
    pub bytes_written: u64,

    /// At most one handle is open at a time
    pub file: Option<File>,

    /// Set by `close`; the writer never reopens afterwards
    pub closed: bool,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot the next rotation lands on. The first rotation uses slot 0.
    pub fn next_index(&self, max_file_count: u32) -> u32 {
        let count = max_file_count.max(1);
        match self.index {
            None => 0,
            Some(index) => (index + 1) % count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_wraps() {
        let mut state = RotationState::new();
        let mut visited = Vec::new();
        for _ in 0..7 {
            let next = state.next_index(3);
            visited.push(next);
            state.index = Some(next);
        }
        assert_eq!(visited, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_single_slot_always_zero() {
        let mut state = RotationState::new();
        state.index = Some(0);
        assert_eq!(state.next_index(1), 0);
    }
}
