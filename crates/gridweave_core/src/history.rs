//! Linear undo/redo history over full document snapshots.
//!
//! Snapshots are independent deep copies; the live document never aliases a
//! stored one. Full-snapshot restore is a deliberate simplicity-over-
//! efficiency choice: depth is capped and documents are small.

use crate::constants::MAX_HISTORY;
use crate::document::Document;

/// Bounded snapshot stack with a cursor.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vec<Document>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current document after a successful mutation. Any undone
    /// future beyond the cursor is discarded first; there is no redo tree.
    /// Past the cap, the oldest snapshot is evicted and the cursor shifts to
    /// preserve its relative position.
    pub fn commit(&mut self, document: &Document) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.index + 1);
        }
        self.snapshots.push(document.clone());
        self.index = self.snapshots.len() - 1;
        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
            self.index -= 1;
        }
    }

    /// Steps the cursor back and returns a copy of that snapshot, or `None`
    /// at the beginning of history.
    pub fn undo(&mut self) -> Option<Document> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.snapshots[self.index].clone())
    }

    /// Steps the cursor forward and returns a copy of that snapshot, or
    /// `None` at the end of history.
    pub fn redo(&mut self) -> Option<Document> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.snapshots[self.index].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.index + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Layer;

    fn document_with_layers(count: u64) -> Document {
        let mut document = Document::default();
        for id in 1..=count {
            document
                .layers
                .push(Layer::new(id, format!("Layer {}", id), (id - 1) as f64));
        }
        document.active_layer_id = document.layers.last().map(|layer| layer.id);
        document
    }

    #[test]
    fn undo_rejected_at_first_snapshot() {
        let mut history = History::new();
        history.commit(&document_with_layers(1));
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
    }

    #[test]
    fn undo_redo_roundtrip_restores_deep_equal_snapshots() {
        let mut history = History::new();
        let before = document_with_layers(1);
        let after = document_with_layers(2);
        history.commit(&before);
        history.commit(&after);

        assert_eq!(history.undo(), Some(before.clone()));
        assert_eq!(history.redo(), Some(after.clone()));
        assert!(!history.can_redo());
    }

    #[test]
    fn commit_after_undo_prunes_the_future() {
        let mut history = History::new();
        history.commit(&document_with_layers(1));
        history.commit(&document_with_layers(2));
        assert!(history.undo().is_some());

        history.commit(&document_with_layers(3));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn cap_evicts_oldest_and_preserves_cursor_position() {
        let mut history = History::new();
        for round in 0..(MAX_HISTORY as u64 + 5) {
            history.commit(&document_with_layers(round % 3 + 1));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert!(!history.can_redo());
        // The cursor still sits on the newest snapshot and can walk back.
        assert!(history.undo().is_some());
    }
}
