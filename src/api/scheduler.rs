use serde::{Deserialize, Serialize};

/// A recomputation deferred until legend visibility has settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRecompute {
    pub chart_id: String,
    pub due_at_ms: u64,
}

/// FIFO queue of deferred recomputations, driven by the host's event loop.
///
/// Legend clicks toggle trace visibility asynchronously inside the plotting
/// library, so recomputes triggered by them wait out a fixed settle delay.
/// Entries are never cancelled; if a chart disappears before its entry comes
/// due, the consumer skips the stale id when draining.
#[derive(Debug, Clone, Default)]
pub struct SettleQueue {
    pending: Vec<PendingRecompute>,
}

impl SettleQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, chart_id: impl Into<String>, due_at_ms: u64) {
        self.pending.push(PendingRecompute {
            chart_id: chart_id.into(),
            due_at_ms,
        });
    }

    /// Removes and returns every entry due at or before `now_ms`, preserving
    /// scheduling order among due entries.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<PendingRecompute> {
        let mut due = Vec::new();
        self.pending.retain(|entry| {
            if entry.due_at_ms <= now_ms {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
