//! Machine model.
//!
//! Machines are identical and always available: no calendars, no
//! changeovers, no speed factors. Each machine is a single lane that
//! accumulates load from offset zero, so its next free instant is
//! simply its load so far.

use serde::{Deserialize, Serialize};

/// An identical parallel machine accumulating assigned load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Machine index (0-based).
    pub id: usize,
    /// Total assigned processing time (ms).
    pub load_ms: i64,
}

impl Machine {
    /// Creates an idle machine.
    pub fn new(id: usize) -> Self {
        Self { id, load_ms: 0 }
    }

    /// Appends work of the given duration to this machine's lane.
    ///
    /// Returns the `(start_ms, end_ms)` interval the work occupies.
    pub fn assign(&mut self, duration_ms: i64) -> (i64, i64) {
        let start = self.load_ms;
        self.load_ms += duration_ms;
        (start, self.load_ms)
    }
}
