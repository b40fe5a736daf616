//! Sort stepper execution engine
//!
//! This module provides the core execution logic:
//! - [`stepper`]: the blocking [`stepper::run`] loop and the threaded [`stepper::SortStepper`]
//! - [`tracer`]: the handle algorithms use to compare and mutate the buffer
//! - [`step`]: step records published to observers
//! - [`observer`]: the subscription contract and stock observers
//! - [`stats`]: comparison/swap counters and the run clock
//! - [`cancel`]: the cooperative cancellation token
//! - [`errors`]: configuration and worker errors
//!
//! # Execution Model
//!
//! An algorithm never touches the buffer directly. Every comparison, swap and
//! overwrite goes through a [`tracer::Tracer`], which checks the cancellation
//! token, updates the counters, publishes a [`step::Step`] and then suspends
//! for the configured delay. Cancellation surfaces as `Err(Cancelled)` and
//! unwinds the algorithm through `?` at any recursion depth.

pub mod cancel;
pub mod errors;
pub mod observer;
pub mod stats;
pub mod step;
pub mod stepper;
pub mod tracer;

pub use cancel::CancellationToken;
pub use errors::StepperError;
pub use observer::{ChannelObserver, Observer, ObserverSet, StepEvent};
pub use stats::{InstrumentationCollector, RunStats};
pub use step::{Element, Step, StepKind};
pub use stepper::{run, Pacing, RunEnv, RunOutcome, RunReport, SortStepper, SpeedHandle};
pub use tracer::{Cancelled, Traced, Tracer};
