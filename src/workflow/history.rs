//! Bounded undo history
//!
//! Keeps structural copies of the step sequence, newest last. The
//! newest snapshot always mirrors the current state, so a meaningful
//! undo discards it and restores the one before. The restored state
//! is pushed back as the new top: repeated undo calls walk
//! progressively further back. There is no redo stack.

use std::collections::VecDeque;

use crate::error::EditorError;
use crate::workflow::types::Step;

/// Maximum number of snapshots retained before the oldest is evicted.
pub const HISTORY_LIMIT: usize = 60;

#[derive(Debug, Default)]
pub struct History {
    snapshots: VecDeque<Vec<Step>>,
}

impl History {
    pub fn new() -> Self {
        History {
            snapshots: VecDeque::new(),
        }
    }

    /// Record a copy of the current step sequence, evicting the
    /// oldest snapshot once the limit is exceeded.
    pub fn snapshot(&mut self, steps: &[Step]) {
        self.snapshots.push_back(steps.to_vec());
        if self.snapshots.len() > HISTORY_LIMIT {
            self.snapshots.pop_front();
        }
    }

    /// Discard the current state and return the one before it, which
    /// re-enters the stack as the new top.
    pub fn undo(&mut self) -> Result<Vec<Step>, EditorError> {
        if self.snapshots.len() < 2 {
            return Err(EditorError::NothingToUndo);
        }
        self.snapshots.pop_back();
        match self.snapshots.pop_back() {
            Some(previous) => {
                self.snapshots.push_back(previous.clone());
                Ok(previous)
            }
            None => Err(EditorError::NothingToUndo),
        }
    }

    /// Number of snapshots currently held.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CommandKind;

    fn state(texts: &[&str]) -> Vec<Step> {
        texts
            .iter()
            .map(|text| Step::with_params(CommandKind::Echo, &[("text", text)]))
            .collect()
    }

    #[test]
    fn test_undo_fails_below_two_snapshots() {
        let mut history = History::new();
        assert_eq!(history.undo(), Err(EditorError::NothingToUndo));

        history.snapshot(&state(&["a"]));
        assert_eq!(history.undo(), Err(EditorError::NothingToUndo));
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut history = History::new();
        history.snapshot(&state(&["a"]));
        history.snapshot(&state(&["a", "b"]));

        assert_eq!(history.undo(), Ok(state(&["a"])));
        // The restored state re-entered the stack, nothing older remains
        assert_eq!(history.depth(), 1);
        assert_eq!(history.undo(), Err(EditorError::NothingToUndo));
    }

    #[test]
    fn test_repeated_undo_walks_backwards() {
        let mut history = History::new();
        history.snapshot(&state(&["a"]));
        history.snapshot(&state(&["a", "b"]));
        history.snapshot(&state(&["a", "b", "c"]));

        assert_eq!(history.undo(), Ok(state(&["a", "b"])));
        assert_eq!(history.undo(), Ok(state(&["a"])));
        assert_eq!(history.undo(), Err(EditorError::NothingToUndo));
    }

    #[test]
    fn test_snapshots_are_copies() {
        let mut history = History::new();
        let mut steps = state(&["a"]);
        history.snapshot(&steps);
        history.snapshot(&state(&["a", "b"]));

        // Mutating the live sequence must not disturb recorded snapshots
        steps[0].params.insert("text".to_string(), "mutated".to_string());
        assert_eq!(history.undo(), Ok(state(&["a"])));
    }

    #[test]
    fn test_oldest_snapshot_evicted_at_limit() {
        let mut history = History::new();
        for i in 0..=HISTORY_LIMIT {
            history.snapshot(&state(&[&i.to_string()]));
        }
        assert_eq!(history.depth(), HISTORY_LIMIT);

        // Walk all the way back: the very first state ("0") was evicted
        let mut last = Vec::new();
        while let Ok(restored) = history.undo() {
            last = restored;
        }
        assert_eq!(last, state(&["1"]));
    }
}
