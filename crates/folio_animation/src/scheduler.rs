//! Typing scheduler
//!
//! Owns every live typing run and the interval timer that drives it.
//! Timers live in the caller's [`TimerQueue`] so that all scheduled work in
//! a page shares one clock; the scheduler only remembers which timer
//! belongs to which run.

use crate::typing::{RevealUnit, TypingFrame, TypingState};
use folio_core::{ConfigError, TimerId, TimerQueue};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a typing run
    pub struct TypingId;
}

struct TypingRun {
    state: TypingState,
    /// Pending interval, `None` once complete
    timer: Option<TimerId>,
}

/// Arena of cancellable typing runs
pub struct TypingScheduler {
    runs: SlotMap<TypingId, TypingRun>,
    by_timer: FxHashMap<TimerId, TypingId>,
}

impl TypingScheduler {
    pub fn new() -> Self {
        Self {
            runs: SlotMap::with_key(),
            by_timer: FxHashMap::default(),
        }
    }

    /// Start revealing `text`, one grapheme every `cadence_ms`
    pub fn start(
        &mut self,
        timers: &mut TimerQueue,
        text: impl Into<String>,
        cadence_ms: u32,
    ) -> Result<TypingId, ConfigError> {
        self.start_with_unit(timers, text, cadence_ms, RevealUnit::Grapheme)
    }

    pub fn start_with_unit(
        &mut self,
        timers: &mut TimerQueue,
        text: impl Into<String>,
        cadence_ms: u32,
        unit: RevealUnit,
    ) -> Result<TypingId, ConfigError> {
        let state = TypingState::with_unit(text, cadence_ms, unit)?;
        let timer = Self::arm(timers, &state)?;
        let id = self.runs.insert(TypingRun { state, timer });
        if let Some(timer) = timer {
            self.by_timer.insert(timer, id);
        }
        tracing::debug!(?id, cadence_ms, "typing started");
        Ok(id)
    }

    /// Apply new inputs to a run
    ///
    /// Unchanged inputs leave the run alone. Changed inputs cancel the
    /// in-flight schedule and restart from zero; progress is discarded.
    /// Returns `true` if the run restarted. Unknown ids are a no-op.
    pub fn update(
        &mut self,
        timers: &mut TimerQueue,
        id: TypingId,
        text: &str,
        cadence_ms: u32,
    ) -> Result<bool, ConfigError> {
        let unchanged = match self.runs.get(id) {
            Some(run) => run.state.same_source(text, cadence_ms),
            None => return Ok(false),
        };
        if unchanged {
            return Ok(false);
        }
        self.restart(timers, id, text, cadence_ms)?;
        Ok(true)
    }

    /// Unconditionally restart a run from zero with new inputs
    ///
    /// Invalid inputs are rejected before the current run is touched.
    pub fn restart(
        &mut self,
        timers: &mut TimerQueue,
        id: TypingId,
        text: impl Into<String>,
        cadence_ms: u32,
    ) -> Result<(), ConfigError> {
        let Some(unit) = self.runs.get(id).map(|run| run.state.unit()) else {
            return Ok(());
        };
        let state = TypingState::with_unit(text, cadence_ms, unit)?;

        self.disarm(timers, id);
        let timer = Self::arm(timers, &state)?;
        if let Some(run) = self.runs.get_mut(id) {
            run.state = state;
            run.timer = timer;
        }
        if let Some(timer) = timer {
            self.by_timer.insert(timer, id);
        }
        tracing::debug!(?id, cadence_ms, "typing restarted");
        Ok(())
    }

    /// Cancel a run and drop it
    ///
    /// The pending tick is removed from the timer queue, so it can never
    /// fire. Cancelling twice is a no-op.
    pub fn cancel(&mut self, timers: &mut TimerQueue, id: TypingId) -> Option<TypingState> {
        self.disarm(timers, id);
        let run = self.runs.remove(id)?;
        tracing::debug!(?id, revealed = run.state.revealed_len(), "typing cancelled");
        Some(run.state)
    }

    /// Cancel every run
    pub fn cancel_all(&mut self, timers: &mut TimerQueue) {
        let ids: Vec<TypingId> = self.runs.keys().collect();
        for id in ids {
            self.cancel(timers, id);
        }
    }

    /// Handle a fired timer
    ///
    /// Returns the advanced frame if the timer drives one of our runs. The
    /// interval is cancelled as soon as the run completes.
    pub fn on_timer(
        &mut self,
        timers: &mut TimerQueue,
        timer: TimerId,
    ) -> Option<(TypingId, TypingFrame)> {
        let id = *self.by_timer.get(&timer)?;
        let run = self.runs.get_mut(id)?;

        run.state.advance();
        let frame = run.state.frame();
        tracing::trace!(?id, revealed = frame.revealed, len = frame.len, "typing tick");

        if frame.complete {
            self.disarm(timers, id);
            tracing::debug!(?id, "typing complete");
        }
        Some((id, frame))
    }

    /// Whether `timer` drives one of our runs
    pub fn owns(&self, timer: TimerId) -> bool {
        self.by_timer.contains_key(&timer)
    }

    pub fn state(&self, id: TypingId) -> Option<&TypingState> {
        self.runs.get(id).map(|run| &run.state)
    }

    pub fn frame(&self, id: TypingId) -> Option<TypingFrame> {
        self.state(id).map(TypingState::frame)
    }

    /// Whether a run still has a tick pending
    pub fn is_running(&self, id: TypingId) -> bool {
        self.runs.get(id).is_some_and(|run| run.timer.is_some())
    }

    /// Number of live runs
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn arm(timers: &mut TimerQueue, state: &TypingState) -> Result<Option<TimerId>, ConfigError> {
        if state.is_complete() {
            return Ok(None);
        }
        timers
            .set_interval(u64::from(state.cadence_ms()))
            .map(Some)
    }

    fn disarm(&mut self, timers: &mut TimerQueue, id: TypingId) {
        let Some(run) = self.runs.get_mut(id) else {
            return;
        };
        if let Some(timer) = run.timer.take() {
            timers.cancel(timer);
            self.by_timer.remove(&timer);
        }
    }
}

impl Default for TypingScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until(scheduler: &mut TypingScheduler, timers: &mut TimerQueue, until: u64) -> usize {
        let mut frames = 0;
        while let Some(timer) = timers.pop_due(until) {
            if scheduler.on_timer(timers, timer).is_some() {
                frames += 1;
            }
        }
        timers.settle(until);
        frames
    }

    #[test]
    fn test_completes_after_len_ticks() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        let id = scheduler.start(&mut timers, "Hello", 50).unwrap();

        run_until(&mut scheduler, &mut timers, 200);
        let frame = scheduler.frame(id).unwrap();
        assert_eq!(frame.revealed, 4);
        assert!(!frame.complete);
        assert_eq!(scheduler.state(id).unwrap().visible(), "Hell");

        run_until(&mut scheduler, &mut timers, 250);
        assert!(scheduler.frame(id).unwrap().complete);
        assert!(!scheduler.is_running(id));
        assert!(timers.is_empty());
    }

    #[test]
    fn test_no_ticks_after_completion() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        let id = scheduler.start(&mut timers, "Hi", 50).unwrap();

        assert_eq!(run_until(&mut scheduler, &mut timers, 10_000), 2);
        assert_eq!(scheduler.frame(id).unwrap().revealed, 2);
    }

    #[test]
    fn test_restart_discards_progress() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        let id = scheduler.start(&mut timers, "Hello", 50).unwrap();

        run_until(&mut scheduler, &mut timers, 100);
        assert_eq!(scheduler.frame(id).unwrap().revealed, 2);

        assert!(scheduler.update(&mut timers, id, "Hi", 50).unwrap());
        assert_eq!(scheduler.frame(id).unwrap().revealed, 0);

        run_until(&mut scheduler, &mut timers, 1_000);
        let state = scheduler.state(id).unwrap();
        assert_eq!(state.revealed_len(), 2);
        assert!(state.is_complete());
        assert_eq!(state.visible(), "Hi");
    }

    #[test]
    fn test_update_with_same_inputs_keeps_progress() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        let id = scheduler.start(&mut timers, "Hello", 50).unwrap();

        run_until(&mut scheduler, &mut timers, 150);
        assert!(!scheduler.update(&mut timers, id, "Hello", 50).unwrap());
        assert_eq!(scheduler.frame(id).unwrap().revealed, 3);
    }

    #[test]
    fn test_cadence_change_restarts() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        let id = scheduler.start(&mut timers, "Hello", 50).unwrap();

        run_until(&mut scheduler, &mut timers, 100);
        assert!(scheduler.update(&mut timers, id, "Hello", 20).unwrap());
        assert_eq!(timers.len(), 1);

        run_until(&mut scheduler, &mut timers, 120);
        assert_eq!(scheduler.frame(id).unwrap().revealed, 1);
    }

    #[test]
    fn test_invalid_restart_keeps_run() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        let id = scheduler.start(&mut timers, "Hello", 50).unwrap();
        run_until(&mut scheduler, &mut timers, 50);

        let err = scheduler.update(&mut timers, id, "Hi", 0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidCadence(0));
        assert_eq!(scheduler.state(id).unwrap().text(), "Hello");
        assert!(scheduler.is_running(id));
    }

    #[test]
    fn test_cancel_suppresses_pending_tick() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        let id = scheduler.start(&mut timers, "Hello", 50).unwrap();
        run_until(&mut scheduler, &mut timers, 100);

        let state = scheduler.cancel(&mut timers, id).unwrap();
        assert_eq!(state.revealed_len(), 2);
        assert!(timers.is_empty());

        assert_eq!(run_until(&mut scheduler, &mut timers, 10_000), 0);
        assert!(scheduler.cancel(&mut timers, id).is_none());
        assert!(scheduler.frame(id).is_none());
    }

    #[test]
    fn test_empty_text_schedules_nothing() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        let id = scheduler.start(&mut timers, "", 50).unwrap();

        assert!(timers.is_empty());
        assert!(scheduler.frame(id).unwrap().complete);
    }

    #[test]
    fn test_foreign_timers_are_ignored() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        scheduler.start(&mut timers, "Hello", 50).unwrap();
        let other = timers.set_timeout(10);

        assert!(!scheduler.owns(other));
        assert!(scheduler.on_timer(&mut timers, other).is_none());
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = TimerQueue::new();
        let mut scheduler = TypingScheduler::new();
        scheduler.start(&mut timers, "one", 50).unwrap();
        scheduler.start(&mut timers, "two", 70).unwrap();

        scheduler.cancel_all(&mut timers);
        assert!(scheduler.is_empty());
        assert!(timers.is_empty());
    }
}
