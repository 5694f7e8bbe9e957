//! Snapshot-based undo/redo for canvas drawings.

use crate::ink::model::Drawing;

/// Default maximum number of undoable actions.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// A drawing as it was before (or after) a labelled action.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Human-readable action label, e.g. `"Undo adding star"`.
    pub action_name: String,
    /// Canvas content to restore.
    pub drawing: Drawing,
}

/// Undo and redo stacks of drawing snapshots.
#[derive(Clone, Debug)]
pub struct UndoHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::with_depth(DEFAULT_HISTORY_DEPTH)
    }
}

impl UndoHistory {
    /// Empty history with [`DEFAULT_HISTORY_DEPTH`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom maximum depth; 0 disables undo entirely.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Record the pre-action drawing. Clears redo and drops the oldest entry past the depth.
    pub fn record(&mut self, action_name: impl Into<String>, before: Drawing) {
        self.redo_stack.clear();
        if self.max_depth == 0 {
            return;
        }
        self.undo_stack.push(Snapshot {
            action_name: action_name.into(),
            drawing: before,
        });
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Swap `current` with the drawing saved before the last action.
    pub fn undo(&mut self, current: &mut Drawing) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        let undone = std::mem::replace(current, snapshot.drawing);
        self.redo_stack.push(Snapshot {
            action_name: snapshot.action_name,
            drawing: undone,
        });
        true
    }

    /// Swap `current` with the drawing the last undo replaced.
    pub fn redo(&mut self, current: &mut Drawing) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        let redone = std::mem::replace(current, snapshot.drawing);
        self.undo_stack.push(Snapshot {
            action_name: snapshot.action_name,
            drawing: redone,
        });
        true
    }

    /// `true` when there is an action to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// `true` when there is an undone action to re-apply.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the action `undo` would revert.
    pub fn undo_action_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|s| s.action_name.as_str())
    }

    /// Label of the action `redo` would re-apply.
    pub fn redo_action_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|s| s.action_name.as_str())
    }

    /// Number of undoable actions held.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Forget every recorded action.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/history.rs"]
mod tests;
