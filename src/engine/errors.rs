//! Error types for the sort stepper
//!
//! [`StepperError`] covers configuration mistakes (unknown names, rejected
//! synchronously before any stepping) and worker-thread failures.
//!
//! Cancellation is not an error: it is reported through
//! [`RunOutcome::Cancelled`](super::stepper::RunOutcome) and the observers'
//! `on_cancelled` callback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StepperError {
    /// Algorithm name not in the library
    #[error("unknown algorithm '{0}' (expected one of: bubble, selection, insertion, shell, heap, quick, merge)")]
    UnknownAlgorithm(String),

    /// Dataset preset name not recognized
    #[error("unknown preset '{0}' (expected one of: random, reversed, nearly-sorted, low-cardinality)")]
    UnknownPreset(String),

    /// Visualization mode not recognized
    #[error("unknown view '{0}' (expected one of: bars, dots, radial)")]
    UnknownView(String),

    /// The operating system refused to start a worker thread
    #[error("failed to spawn sorting thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// A worker thread panicked instead of returning its report
    #[error("sorting thread panicked")]
    WorkerPanicked,
}
