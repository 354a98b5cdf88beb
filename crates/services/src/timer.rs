//! Study timers: the wall-clock session ticker and the focus cycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

pub const FOCUS_MINUTES: u64 = 25;
pub const SHORT_BREAK_MINUTES: u64 = 5;
pub const LONG_BREAK_MINUTES: u64 = 15;
/// Every Nth finished focus block earns the long break.
pub const BLOCKS_PER_LONG_BREAK: u32 = 4;

/// Background elapsed-seconds counter for a running quiz.
///
/// Counts up once per second until cancelled. Cancel is idempotent and
/// also runs on drop, so an abandoned session never leaks its task.
pub struct TickTimer {
    elapsed: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl TickTimer {
    /// Spawn the counting task on the current runtime.
    #[must_use]
    pub fn start() -> Self {
        let elapsed = Arc::new(AtomicU64::new(0));
        let cancelled = Arc::new(AtomicBool::new(false));

        let task_elapsed = Arc::clone(&elapsed);
        let task_cancelled = Arc::clone(&cancelled);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if task_cancelled.load(Ordering::SeqCst) {
                    break;
                }
                task_elapsed.fetch_add(1, Ordering::SeqCst);
            }
        });

        Self {
            elapsed,
            cancelled,
            handle,
        }
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.load(Ordering::SeqCst)
    }

    /// Stop counting. Safe to call more than once.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.handle.abort();
        }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Phase of the focus cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPhase {
    Focus,
    ShortBreak,
    LongBreak,
}

impl FocusPhase {
    #[must_use]
    pub fn duration_seconds(self) -> u64 {
        let minutes = match self {
            FocusPhase::Focus => FOCUS_MINUTES,
            FocusPhase::ShortBreak => SHORT_BREAK_MINUTES,
            FocusPhase::LongBreak => LONG_BREAK_MINUTES,
        };
        minutes * 60
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            FocusPhase::Focus => "Foco",
            FocusPhase::ShortBreak => "Pausa curta",
            FocusPhase::LongBreak => "Pausa longa",
        }
    }
}

/// What one advanced second of the focus cycle produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    Tick {
        phase: FocusPhase,
        remaining_seconds: u64,
    },
    /// A phase just ran out; the cycle has moved on to `next`.
    PhaseFinished {
        finished: FocusPhase,
        next: FocusPhase,
    },
}

/// Pure focus-cycle state machine: 25 minutes of focus, 5 of break, with
/// a 15-minute long break after every fourth focus block.
///
/// The caller drives it, one [`FocusTimer::tick`] per elapsed second, and
/// reacts to the returned event. Keeping it free of real time makes the
/// whole cycle testable.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    phase: FocusPhase,
    remaining_seconds: u64,
    completed_blocks: u32,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: FocusPhase::Focus,
            remaining_seconds: FocusPhase::Focus.duration_seconds(),
            completed_blocks: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Focus blocks finished since the cycle started.
    #[must_use]
    pub fn completed_blocks(&self) -> u32 {
        self.completed_blocks
    }

    /// Advance the cycle by one second.
    pub fn tick(&mut self) -> FocusEvent {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return FocusEvent::Tick {
                phase: self.phase,
                remaining_seconds: self.remaining_seconds,
            };
        }

        let finished = self.phase;
        if finished == FocusPhase::Focus {
            self.completed_blocks += 1;
        }

        let next = match finished {
            FocusPhase::Focus if self.completed_blocks % BLOCKS_PER_LONG_BREAK == 0 => {
                FocusPhase::LongBreak
            }
            FocusPhase::Focus => FocusPhase::ShortBreak,
            FocusPhase::ShortBreak | FocusPhase::LongBreak => FocusPhase::Focus,
        };

        self.phase = next;
        self.remaining_seconds = next.duration_seconds();
        FocusEvent::PhaseFinished { finished, next }
    }

    /// Abandon the current phase and restart the cycle from a fresh focus
    /// block. Completed blocks are kept.
    pub fn reset_phase(&mut self) {
        self.phase = FocusPhase::Focus;
        self.remaining_seconds = FocusPhase::Focus.duration_seconds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the timer to the end of its current phase, returning the
    /// transition event.
    fn finish_phase(timer: &mut FocusTimer) -> FocusEvent {
        loop {
            if let event @ FocusEvent::PhaseFinished { .. } = timer.tick() {
                return event;
            }
        }
    }

    #[test]
    fn focus_alternates_with_short_breaks() {
        let mut timer = FocusTimer::new();
        assert_eq!(timer.remaining_seconds(), 25 * 60);

        let event = finish_phase(&mut timer);
        assert_eq!(
            event,
            FocusEvent::PhaseFinished {
                finished: FocusPhase::Focus,
                next: FocusPhase::ShortBreak,
            }
        );
        assert_eq!(timer.remaining_seconds(), 5 * 60);
        assert_eq!(timer.completed_blocks(), 1);

        let event = finish_phase(&mut timer);
        assert_eq!(
            event,
            FocusEvent::PhaseFinished {
                finished: FocusPhase::ShortBreak,
                next: FocusPhase::Focus,
            }
        );
    }

    #[test]
    fn every_fourth_block_earns_the_long_break() {
        let mut timer = FocusTimer::new();
        for _ in 0..3 {
            finish_phase(&mut timer); // focus
            finish_phase(&mut timer); // short break
        }

        let event = finish_phase(&mut timer);
        assert_eq!(
            event,
            FocusEvent::PhaseFinished {
                finished: FocusPhase::Focus,
                next: FocusPhase::LongBreak,
            }
        );
        assert_eq!(timer.completed_blocks(), 4);
        assert_eq!(timer.remaining_seconds(), 15 * 60);
    }

    #[test]
    fn ticks_count_down_within_a_phase() {
        let mut timer = FocusTimer::new();
        let event = timer.tick();
        assert_eq!(
            event,
            FocusEvent::Tick {
                phase: FocusPhase::Focus,
                remaining_seconds: 25 * 60 - 1,
            }
        );
    }

    #[test]
    fn reset_phase_restarts_focus_but_keeps_the_block_count() {
        let mut timer = FocusTimer::new();
        finish_phase(&mut timer);
        timer.tick();
        timer.reset_phase();

        assert_eq!(timer.phase(), FocusPhase::Focus);
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert_eq!(timer.completed_blocks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn tick_timer_counts_elapsed_seconds() {
        let timer = TickTimer::start();
        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(timer.elapsed_seconds(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_freezes_the_count_and_is_idempotent() {
        let timer = TickTimer::start();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        timer.cancel();
        timer.cancel();

        let frozen = timer.elapsed_seconds();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(timer.elapsed_seconds(), frozen);
    }
}
