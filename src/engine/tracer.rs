//! Instrumented buffer access for algorithms
//!
//! [`Tracer`] wraps the run's buffer together with the handles an algorithm
//! needs to be observable: the cancellation token, the counters, the speed
//! and the observer. Every action follows the same order:
//!
//! 1. check the token (a set token returns `Err(Cancelled)`)
//! 2. update the counters and publish the new stats
//! 3. apply the mutation, if any
//! 4. publish the step (with a post-mutation snapshot for mutating steps)
//! 5. suspend for the current speed, waking early on cancellation
//!
//! So once an observer has seen a step, the buffer reflects it, and a
//! cancellation requested from inside `on_step` stops the run before the next
//! action.
//!
//! Suspension follows publication: there is one pause per Compare, Swap or
//! Overwrite, taken after the step is published, and the pause that precedes
//! a comparison is the one that ended the previous step. `MarkSorted` steps
//! do not pause.

use super::cancel::CancellationToken;
use super::observer::Observer;
use super::stats::InstrumentationCollector;
use super::step::{Element, Step};
use super::stepper::SpeedHandle;
use std::time::Duration;

/// Marker returned when the run has been cancelled.
///
/// Cancellation is a normal way for a run to end, so this is deliberately not
/// an error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Result of a traced action
pub type Traced<R = ()> = Result<R, Cancelled>;

pub struct Tracer<'a, T: Element> {
    buffer: &'a mut [T],
    token: &'a CancellationToken,
    stats: &'a InstrumentationCollector,
    speed: &'a SpeedHandle,
    observer: &'a dyn Observer<T>,
}

impl<'a, T: Element> Tracer<'a, T> {
    pub fn new(
        buffer: &'a mut [T],
        token: &'a CancellationToken,
        stats: &'a InstrumentationCollector,
        speed: &'a SpeedHandle,
        observer: &'a dyn Observer<T>,
    ) -> Self {
        Tracer {
            buffer,
            token,
            stats,
            speed,
            observer,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Read a value without recording anything
    pub fn get(&self, index: usize) -> T {
        self.buffer[index]
    }

    pub fn values(&self) -> &[T] {
        self.buffer
    }

    /// Record a comparison between two positions. The caller reads the
    /// values itself.
    pub fn compare(&mut self, a: usize, b: usize) -> Traced {
        self.checkpoint()?;
        self.stats.record_comparison();
        self.publish_stats();
        let hint = Some(self.buffer[a].magnitude());
        self.observer.on_step(&Step::compare(a, b, hint));
        self.pause()
    }

    /// Exchange two positions
    pub fn swap(&mut self, a: usize, b: usize) -> Traced {
        self.checkpoint()?;
        self.stats.record_swap();
        self.publish_stats();
        self.buffer.swap(a, b);
        let hint = Some(self.buffer[a].magnitude());
        self.observer
            .on_step(&Step::swap(a, b, self.buffer.to_vec(), hint));
        self.pause()
    }

    /// Write `value` into `index` (a shift or copy-back, not a swap)
    pub fn overwrite(&mut self, index: usize, value: T) -> Traced {
        self.checkpoint()?;
        self.stats.record_swap();
        self.publish_stats();
        self.buffer[index] = value;
        let hint = Some(value.magnitude());
        self.observer
            .on_step(&Step::overwrite(index, self.buffer.to_vec(), hint));
        self.pause()
    }

    /// Declare `index` final under the algorithm's own marking policy.
    /// Does not suspend.
    pub fn mark_sorted(&mut self, index: usize) -> Traced {
        self.checkpoint()?;
        let hint = Some(self.buffer[index].magnitude());
        self.observer.on_step(&Step::mark_sorted(index, hint));
        Ok(())
    }

    /// Reveal sweep step: mark `index` and wait a fixed `delay`
    pub fn reveal(&mut self, index: usize, delay: Duration) -> Traced {
        self.checkpoint()?;
        let hint = Some(self.buffer[index].magnitude());
        self.observer.on_step(&Step::mark_sorted(index, hint));
        self.wait(delay)
    }

    fn checkpoint(&self) -> Traced {
        if self.token.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    fn publish_stats(&self) {
        self.stats.publish_with(|stats| self.observer.on_stats_update(stats));
    }

    // Speed is re-read here so a change applies from the next step on.
    fn pause(&self) -> Traced {
        self.wait(self.speed.delay())
    }

    fn wait(&self, delay: Duration) -> Traced {
        if self.token.wait_timeout(delay) {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
