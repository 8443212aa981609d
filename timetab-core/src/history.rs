//! Undo/redo history over whole-schedule snapshots.
//!
//! A linear stack with a cursor. Edits never mutate a snapshot in place:
//! every change produces a fresh `WeekSchedule` which gets recorded here.
//! Recording while the cursor sits behind the end discards the redo tail —
//! last writer wins, divergent branches are never kept.

use crate::schedule::WeekSchedule;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<WeekSchedule>,
    index: usize,
}

impl History {
    /// A history seeded with the initial schedule. Invariant from here on:
    /// `index < snapshots.len()` and the list is never empty.
    pub fn new(initial: WeekSchedule) -> Self {
        History {
            snapshots: vec![initial],
            index: 0,
        }
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> &WeekSchedule {
        &self.snapshots[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index < self.snapshots.len() - 1
    }

    /// Record a new snapshot: truncate everything past the cursor, append,
    /// and point at the appended entry.
    pub fn record(&mut self, snapshot: WeekSchedule) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. No-op at the oldest entry.
    pub fn undo(&mut self) -> &WeekSchedule {
        if self.index > 0 {
            self.index -= 1;
        }
        self.current()
    }

    /// Step forward one snapshot. No-op at the newest entry.
    pub fn redo(&mut self) -> &WeekSchedule {
        if self.index < self.snapshots.len() - 1 {
            self.index += 1;
        }
        self.current()
    }

    /// Number of snapshots held (at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
