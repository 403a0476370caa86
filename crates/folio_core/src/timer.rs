//! Timer queue
//!
//! An arena of pending timers driven by an explicit millisecond clock.
//! Nothing here sleeps: the host loop decides how far the clock moves
//! and drains due timers one at a time.
//!
//! Draining one at a time matters. A consumer reacting to one timer may
//! cancel another that is due at the same instant; because cancellation
//! removes the entry from the arena, the cancelled timer can never be
//! returned by a later [`TimerQueue::pop_due`].

use crate::error::ConfigError;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a pending timer
    pub struct TimerId;
}

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    /// Absolute deadline on the queue clock
    deadline_ms: u64,
    /// Re-arm period for intervals, `None` for one-shot timeouts
    period_ms: Option<u64>,
    /// Schedule order, breaks ties between equal deadlines
    seq: u64,
}

/// Deterministic single-threaded timer arena
pub struct TimerQueue {
    timers: SlotMap<TimerId, PendingTimer>,
    now_ms: u64,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Current clock value in milliseconds
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Schedule a one-shot timer `delay_ms` from now
    pub fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        let timer = PendingTimer {
            deadline_ms: self.now_ms.saturating_add(delay_ms),
            period_ms: None,
            seq: self.bump_seq(),
        };
        let id = self.timers.insert(timer);
        tracing::trace!(?id, delay_ms, "timeout scheduled");
        id
    }

    /// Schedule a repeating timer firing every `period_ms`
    pub fn set_interval(&mut self, period_ms: u64) -> Result<TimerId, ConfigError> {
        if period_ms == 0 {
            return Err(ConfigError::InvalidInterval(period_ms));
        }
        let timer = PendingTimer {
            deadline_ms: self.now_ms.saturating_add(period_ms),
            period_ms: Some(period_ms),
            seq: self.bump_seq(),
        };
        let id = self.timers.insert(timer);
        tracing::trace!(?id, period_ms, "interval scheduled");
        Ok(id)
    }

    /// Cancel a timer
    ///
    /// Returns `true` if the timer was still pending. Cancelling an unknown
    /// or already-cancelled timer is a no-op.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.timers.remove(id).is_some();
        if removed {
            tracing::trace!(?id, "timer cancelled");
        }
        removed
    }

    /// Check whether a timer is still scheduled
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Earliest deadline among pending timers
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.values().map(|t| t.deadline_ms).min()
    }

    /// Pop the earliest timer due at or before `until_ms`
    ///
    /// Moves the clock to the timer's deadline. Intervals are re-armed one
    /// period later; timeouts are dropped from the arena.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerId> {
        let (id, timer) = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline_ms <= until_ms)
            .min_by_key(|(_, t)| (t.deadline_ms, t.seq))
            .map(|(id, t)| (id, *t))?;

        self.now_ms = self.now_ms.max(timer.deadline_ms);

        match timer.period_ms {
            Some(period) => {
                let seq = self.bump_seq();
                if let Some(entry) = self.timers.get_mut(id) {
                    entry.deadline_ms = timer.deadline_ms.saturating_add(period);
                    entry.seq = seq;
                }
            }
            None => {
                self.timers.remove(id);
            }
        }

        Some(id)
    }

    /// Move the clock forward once all timers due by `until_ms` are drained
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}
