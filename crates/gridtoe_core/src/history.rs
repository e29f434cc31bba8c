//! Linear undo/redo history over game state snapshots.
//!
//! The history is a sequence plus a cursor. Pushing after an undo prunes
//! the redo branch. The cursor always indexes a valid entry, so the
//! sequence is never empty.

use super::error::HistoryError;
use super::state::GameState;
use tracing::{debug, instrument, warn};

/// Sequence of game states with a cursor at the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<GameState>,
    cursor: usize,
    limit: Option<usize>,
}

impl History {
    /// Unbounded history starting at `initial`.
    pub fn new(initial: GameState) -> Self {
        Self::with_limit(initial, None)
    }

    /// History keeping at most `limit` entries, evicting the oldest.
    ///
    /// A limit of zero is treated as one.
    #[instrument(skip(initial))]
    pub fn with_limit(initial: GameState, limit: Option<usize>) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// The state at the cursor.
    pub fn current(&self) -> &GameState {
        &self.entries[self.cursor]
    }

    /// Drops everything after the cursor, appends `state` and moves to it.
    #[instrument(skip(self, state), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn push(&mut self, state: GameState) {
        let pruned = self.entries.len() - (self.cursor + 1);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);

        if let Some(limit) = self.limit
            && self.entries.len() > limit
        {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
            debug!(excess, "Evicted oldest history entries");
        }

        self.cursor = self.entries.len() - 1;
        debug!(pruned, cursor = self.cursor, "Pushed history entry");
    }

    /// Steps back one entry.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoHistory`] at the first entry.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn undo(&mut self) -> Result<&GameState, HistoryError> {
        if !self.can_undo() {
            warn!("Nothing to undo");
            return Err(HistoryError::NoHistory);
        }
        self.cursor -= 1;
        Ok(self.current())
    }

    /// Steps forward one entry.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoHistory`] at the last entry.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn redo(&mut self) -> Result<&GameState, HistoryError> {
        if !self.can_redo() {
            warn!("Nothing to redo");
            return Err(HistoryError::NoHistory);
        }
        self.cursor += 1;
        Ok(self.current())
    }

    /// Moves the cursor straight to `index`.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn go_to(&mut self, index: usize) -> Result<&GameState, HistoryError> {
        if index >= self.entries.len() {
            warn!(len = self.entries.len(), "History index out of range");
            return Err(HistoryError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.cursor = index;
        Ok(self.current())
    }

    /// Replaces the whole sequence with `[initial]`.
    #[instrument(skip(self, initial), fields(len = self.entries.len()))]
    pub fn reset(&mut self, initial: GameState) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
        debug!("History reset");
    }

    /// True unless the cursor is at the first entry.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True unless the cursor is at the last entry.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of undo steps available.
    pub fn back_len(&self) -> usize {
        self.cursor
    }

    /// Number of redo steps available.
    pub fn forward_len(&self) -> usize {
        self.entries.len() - self.cursor - 1
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[GameState] {
        &self.entries
    }

    /// Maximum number of entries kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
