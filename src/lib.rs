//! # Introduction
//!
//! SortStep replays classical sorting algorithms as a stream of discrete,
//! observable steps (comparisons, swaps, overwrites, completions) at a
//! controllable pace, and draws them in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! DatasetGenerator → SortStepper → Algorithm ⇄ Tracer → Observers → TUI / stdout / voice
//! ```
//!
//! 1. [`dataset`]: builds the initial buffer for a preset.
//! 2. [`engine`]: the stepper core. Runs one algorithm per worker thread,
//!    counts and paces every step, and publishes it to observers; runs are
//!    cancellable at every step.
//! 3. [`algorithms`]: bubble, selection, insertion, shell, heap, quick and
//!    merge sort, written against the engine's tracer.
//! 4. [`audio`]: maps step hints to tones through a lazily opened voice.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortstep::algorithms::AlgorithmId;
//! use sortstep::engine::{CancellationToken, InstrumentationCollector, Observer, Pacing};
//! use sortstep::engine::{run, RunEnv, RunOutcome, SpeedHandle, Step};
//!
//! struct Quiet;
//! impl Observer<u32> for Quiet {
//!     fn on_step(&self, _step: &Step<u32>) {}
//! }
//!
//! let mut buffer = vec![5, 3, 8, 1];
//! let stats = InstrumentationCollector::new();
//! let env = RunEnv {
//!     token: &CancellationToken::new(),
//!     stats: &stats,
//!     speed: &SpeedHandle::new(0),
//!     pacing: Pacing::instant(),
//!     observer: &Quiet,
//! };
//! assert_eq!(run(&mut buffer, AlgorithmId::Bubble, &env), RunOutcome::Completed);
//! assert_eq!(buffer, vec![1, 3, 5, 8]);
//! assert_eq!(stats.snapshot().swaps, 4);
//! ```

pub mod algorithms;
pub mod audio;
pub mod cli;
pub mod constants;
pub mod dataset;
pub mod engine;
pub mod headless;
pub mod ui;
