//! Run orchestration
//!
//! [`run`] drives one algorithm over a buffer to completion or cancellation,
//! then plays the reveal sweep. [`SortStepper`] owns the buffer between runs
//! and executes each run on a dedicated worker thread, so a controlling UI
//! stays responsive and can cancel, restart or change speed at any time.
//!
//! # Single writer
//!
//! The worker receives its own copy of the buffer and is the only thread that
//! mutates it. Starting a run, resetting, or dropping the stepper first
//! cancels the active worker and joins it, so two runs never overlap.

use super::cancel::CancellationToken;
use super::errors::StepperError;
use super::observer::{Observer, ObserverSet};
use super::stats::{InstrumentationCollector, RunStats};
use super::step::Element;
use super::tracer::{Cancelled, Tracer};
use crate::algorithms::{self, AlgorithmId};
use crate::constants::{REVEAL_BUDGET_MS, REVEAL_FLOOR_MS, TICK_INTERVAL_MS};
use crate::dataset::{DatasetGenerator, Preset};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Shared, live-adjustable delay between steps in milliseconds.
/// Smaller is faster; zero disables the delay.
#[derive(Debug, Clone)]
pub struct SpeedHandle(Arc<AtomicU64>);

impl SpeedHandle {
    pub fn new(delay_ms: u64) -> Self {
        SpeedHandle(Arc::new(AtomicU64::new(delay_ms)))
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, delay_ms: u64) {
        self.0.store(delay_ms, Ordering::Relaxed);
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.get())
    }
}

/// Timing of everything that is not a per-step delay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    /// Lower bound on the delay between reveal steps
    pub reveal_floor: Duration,
    /// Total reveal time spread across the buffer
    pub reveal_budget: Duration,
    /// Cadence of the elapsed-time clock
    pub tick_interval: Duration,
}

impl Pacing {
    /// No reveal delays; for tests and headless batch runs
    pub fn instant() -> Self {
        Pacing {
            reveal_floor: Duration::ZERO,
            reveal_budget: Duration::ZERO,
            ..Pacing::default()
        }
    }

    /// Delay between two reveal steps for a buffer of `len` elements
    pub fn reveal_delay(&self, len: usize) -> Duration {
        let len = u32::try_from(len.max(1)).unwrap_or(u32::MAX);
        self.reveal_floor.max(self.reveal_budget / len)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            reveal_floor: Duration::from_millis(REVEAL_FLOOR_MS),
            reveal_budget: Duration::from_millis(REVEAL_BUDGET_MS),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed => f.write_str("completed"),
            RunOutcome::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Everything a run needs besides its buffer
pub struct RunEnv<'a, T> {
    pub token: &'a CancellationToken,
    pub stats: &'a InstrumentationCollector,
    pub speed: &'a SpeedHandle,
    pub pacing: Pacing,
    pub observer: &'a dyn Observer<T>,
}

/// Run `algorithm` over `buffer` until it completes or the token is set.
///
/// Resets and starts the clock, stops it when the algorithm returns, plays the
/// reveal sweep after a completed sort and finally notifies the observer
/// exactly once with `on_complete` or `on_cancelled`. A cancelled run leaves
/// the buffer in whatever state it reached.
pub fn run<T: Element>(buffer: &mut [T], algorithm: AlgorithmId, env: &RunEnv<'_, T>) -> RunOutcome {
    env.stats.reset();
    env.stats.start();

    let reveal_delay = env.pacing.reveal_delay(buffer.len());
    let mut tracer = Tracer::new(buffer, env.token, env.stats, env.speed, env.observer);

    let sorted = algorithms::execute(algorithm, &mut tracer);
    env.stats.stop();
    env.stats
        .publish_with(|stats| env.observer.on_stats_update(stats));

    let result = sorted.and_then(|()| {
        for index in 0..tracer.len() {
            tracer.reveal(index, reveal_delay)?;
        }
        Ok::<(), Cancelled>(())
    });

    match result {
        Ok(()) => {
            env.observer.on_complete();
            RunOutcome::Completed
        }
        Err(Cancelled) => {
            env.observer.on_cancelled();
            RunOutcome::Cancelled
        }
    }
}

/// Result of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<T> {
    pub algorithm: AlgorithmId,
    pub outcome: RunOutcome,
    /// Buffer as the run left it
    pub buffer: Vec<T>,
    pub stats: RunStats,
}

struct ActiveRun<T> {
    token: CancellationToken,
    clock_stop: CancellationToken,
    worker: JoinHandle<RunReport<T>>,
    clock: JoinHandle<()>,
}

/// Threaded controller owning the buffer between runs
pub struct SortStepper<T: Element = f64> {
    buffer: Vec<T>,
    speed: SpeedHandle,
    pacing: Pacing,
    stats: Arc<InstrumentationCollector>,
    observers: ObserverSet<T>,
    active: Option<ActiveRun<T>>,
    last_report: Option<RunReport<T>>,
}

impl<T: Element> SortStepper<T> {
    pub fn new(buffer: Vec<T>, speed_ms: u64) -> Self {
        SortStepper {
            buffer,
            speed: SpeedHandle::new(speed_ms),
            pacing: Pacing::default(),
            stats: Arc::new(InstrumentationCollector::new()),
            observers: ObserverSet::new(),
            active: None,
            last_report: None,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Add an observer; it receives events from the next started run on
    pub fn subscribe(&mut self, observer: Arc<dyn Observer<T>>) {
        self.observers.subscribe(observer);
    }

    /// Current buffer: the pre-run contents while a run is active, the run's
    /// result once it has been collected
    pub fn buffer(&self) -> &[T] {
        &self.buffer
    }

    pub fn stats(&self) -> RunStats {
        self.stats.snapshot()
    }

    pub fn speed(&self) -> u64 {
        self.speed.get()
    }

    /// Change the step delay; applies from the next suspension of the active run
    pub fn set_speed(&self, delay_ms: u64) {
        self.speed.set(delay_ms);
    }

    /// Whether a worker exists and has not finished yet
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.worker.is_finished())
    }

    /// Report of the most recently collected run
    pub fn last_report(&self) -> Option<&RunReport<T>> {
        self.last_report.as_ref()
    }

    /// Start `algorithm` on a copy of the buffer.
    ///
    /// Any active run is cancelled and joined first.
    pub fn start(&mut self, algorithm: AlgorithmId) -> Result<(), StepperError> {
        self.cancel()?;

        let token = CancellationToken::new();
        let clock_stop = CancellationToken::new();
        self.stats.reset();

        let worker = {
            let token = token.clone();
            let stats = Arc::clone(&self.stats);
            let speed = self.speed.clone();
            let pacing = self.pacing;
            let observers = self.observers.clone();
            let mut buffer = self.buffer.clone();
            thread::Builder::new()
                .name(format!("sortstep-{}", algorithm))
                .spawn(move || {
                    let env = RunEnv {
                        token: &token,
                        stats: &stats,
                        speed: &speed,
                        pacing,
                        observer: &observers,
                    };
                    let outcome = run(&mut buffer, algorithm, &env);
                    RunReport {
                        algorithm,
                        outcome,
                        buffer,
                        stats: stats.snapshot(),
                    }
                })?
        };

        let clock = {
            let stats = Arc::clone(&self.stats);
            let observers = self.observers.clone();
            let interval = self.pacing.tick_interval;
            let stop = clock_stop.clone();
            let spawned = thread::Builder::new()
                .name("sortstep-clock".to_string())
                .spawn(move || {
                    while !stop.wait_timeout(interval) {
                        stats.tick_with(|s| observers.on_stats_update(s));
                    }
                });
            match spawned {
                Ok(clock) => clock,
                Err(e) => {
                    token.cancel();
                    let _ = worker.join();
                    return Err(StepperError::Spawn(e));
                }
            }
        };

        self.active = Some(ActiveRun {
            token,
            clock_stop,
            worker,
            clock,
        });
        Ok(())
    }

    /// Set the step delay, then start `algorithm`
    pub fn start_at(&mut self, algorithm: AlgorithmId, delay_ms: u64) -> Result<(), StepperError> {
        self.set_speed(delay_ms);
        self.start(algorithm)
    }

    /// Parse `name` and start it; unknown names fail before anything runs
    pub fn start_named(&mut self, name: &str) -> Result<(), StepperError> {
        let algorithm: AlgorithmId = name.parse()?;
        self.start(algorithm)
    }

    /// Cancel the active run, if any, and wait for the worker to observe it.
    ///
    /// Returns the report of the run that was stopped (which may have
    /// completed on its own just before).
    pub fn cancel(&mut self) -> Result<Option<RunReport<T>>, StepperError> {
        match self.active.take() {
            Some(active) => {
                active.token.cancel();
                self.collect(active).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Collect a finished run without blocking
    pub fn poll(&mut self) -> Result<Option<RunReport<T>>, StepperError> {
        match self.active.take() {
            Some(active) if active.worker.is_finished() => self.collect(active).map(Some),
            other => {
                self.active = other;
                Ok(None)
            }
        }
    }

    /// Block until the active run ends on its own
    pub fn wait(&mut self) -> Result<Option<RunReport<T>>, StepperError> {
        match self.active.take() {
            Some(active) => self.collect(active).map(Some),
            None => Ok(None),
        }
    }

    /// Cancel any active run and install a new buffer with zeroed stats
    pub fn reset(&mut self, buffer: Vec<T>) -> Result<(), StepperError> {
        self.cancel()?;
        self.buffer = buffer;
        self.stats.reset();
        self.last_report = None;
        Ok(())
    }

    fn collect(&mut self, active: ActiveRun<T>) -> Result<RunReport<T>, StepperError> {
        let joined = active.worker.join();
        active.clock_stop.cancel();
        let clock = active.clock.join();

        let report = joined.map_err(|_| StepperError::WorkerPanicked)?;
        clock.map_err(|_| StepperError::WorkerPanicked)?;

        self.buffer.clone_from(&report.buffer);
        self.last_report = Some(report.clone());
        Ok(report)
    }
}

impl SortStepper<f64> {
    /// Cancel any active run and install a freshly generated buffer
    pub fn regenerate(
        &mut self,
        generator: &mut DatasetGenerator,
        size: usize,
        preset: Preset,
    ) -> Result<(), StepperError> {
        self.reset(generator.generate(size, preset))
    }
}

impl<T: Element> Drop for SortStepper<T> {
    fn drop(&mut self) {
        let _ = self.cancel();
    }
}
