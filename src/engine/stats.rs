//! Run instrumentation
//!
//! [`InstrumentationCollector`] accumulates the comparison and swap counters of
//! the active run and keeps its wall clock. The counters are written by the
//! worker thread while the clock thread and the UI read them, so they are
//! atomics; the clock itself sits behind a mutex.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// Point-in-time view of the run statistics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    pub comparisons: u64,
    /// True swaps plus overwrite-style element moves
    pub swaps: u64,
    pub started_at: Option<Instant>,
    pub elapsed_seconds: f64,
}

#[derive(Debug, Default)]
struct Clock {
    started_at: Option<Instant>,
    elapsed_seconds: f64,
    running: bool,
}

impl Clock {
    fn sample(&mut self) -> f64 {
        if let (true, Some(start)) = (self.running, self.started_at) {
            self.elapsed_seconds = self.elapsed_seconds.max(start.elapsed().as_secs_f64());
        }
        self.elapsed_seconds
    }
}

/// Counters and clock for a single run
#[derive(Debug, Default)]
pub struct InstrumentationCollector {
    comparisons: AtomicU64,
    swaps: AtomicU64,
    clock: Mutex<Clock>,
}

impl InstrumentationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one comparison, returning the new total
    pub fn record_comparison(&self) -> u64 {
        self.comparisons.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Count one swap or overwrite, returning the new total
    pub fn record_swap(&self) -> u64 {
        self.swaps.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Zero the counters and the clock
    pub fn reset(&self) {
        self.comparisons.store(0, Ordering::Relaxed);
        self.swaps.store(0, Ordering::Relaxed);
        *self.lock_clock() = Clock::default();
    }

    /// Start the clock from now
    pub fn start(&self) {
        let mut clock = self.lock_clock();
        clock.started_at = Some(Instant::now());
        clock.elapsed_seconds = 0.0;
        clock.running = true;
    }

    /// Take a final sample and freeze the clock
    pub fn stop(&self) -> f64 {
        let mut clock = self.lock_clock();
        let elapsed = clock.sample();
        clock.running = false;
        elapsed
    }

    /// Sample the clock, returning elapsed seconds (frozen once stopped)
    pub fn tick(&self) -> f64 {
        self.lock_clock().sample()
    }

    /// Sample the clock and hand the fresh stats to `publish` while it is
    /// still running.
    ///
    /// `publish` runs under the clock lock, so no tick is published after
    /// [`stop`](Self::stop) has returned. Returns whether the clock was running.
    pub fn tick_with(&self, publish: impl FnOnce(&RunStats)) -> bool {
        let mut clock = self.lock_clock();
        if !clock.running {
            return false;
        }
        clock.sample();
        publish(&self.stats_at(&clock));
        true
    }

    /// Sample the clock (if running) and hand the current stats to `publish`.
    ///
    /// Like [`tick_with`](Self::tick_with), `publish` runs under the clock
    /// lock. Every publication goes through one of the two, so observers see
    /// `elapsed_seconds` in non-decreasing order no matter which thread
    /// publishes. `publish` must not call back into this collector.
    pub fn publish_with(&self, publish: impl FnOnce(&RunStats)) {
        let mut clock = self.lock_clock();
        clock.sample();
        publish(&self.stats_at(&clock));
    }

    pub fn is_running(&self) -> bool {
        self.lock_clock().running
    }

    /// Current counters with the last sampled elapsed time
    pub fn snapshot(&self) -> RunStats {
        self.stats_at(&self.lock_clock())
    }

    fn stats_at(&self, clock: &Clock) -> RunStats {
        RunStats {
            comparisons: self.comparisons.load(Ordering::Relaxed),
            swaps: self.swaps.load(Ordering::Relaxed),
            started_at: clock.started_at,
            elapsed_seconds: clock.elapsed_seconds,
        }
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
