//! Observer subscription contract
//!
//! Observers receive every step, stats update and the terminal notification
//! of a run. They are called synchronously from the worker thread (and the
//! clock thread for periodic stats), so they must return quickly; rendering
//! and audio work belongs on the observer's own side of a channel.

use super::stats::RunStats;
use super::step::Step;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

/// Subscriber to a sorting run
pub trait Observer<T>: Send + Sync {
    fn on_step(&self, step: &Step<T>);

    fn on_stats_update(&self, _stats: &RunStats) {}

    fn on_complete(&self) {}

    fn on_cancelled(&self) {}
}

/// Fan-out over the subscribed observers, in subscription order
pub struct ObserverSet<T> {
    observers: Vec<Arc<dyn Observer<T>>>,
}

impl<T> ObserverSet<T> {
    pub fn new() -> Self {
        ObserverSet {
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn Observer<T>>) {
        self.observers.push(observer);
    }
}

impl<T> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ObserverSet<T> {
    fn clone(&self) -> Self {
        ObserverSet {
            observers: self.observers.clone(),
        }
    }
}

impl<T> Observer<T> for ObserverSet<T> {
    fn on_step(&self, step: &Step<T>) {
        for observer in &self.observers {
            observer.on_step(step);
        }
    }

    fn on_stats_update(&self, stats: &RunStats) {
        for observer in &self.observers {
            observer.on_stats_update(stats);
        }
    }

    fn on_complete(&self) {
        for observer in &self.observers {
            observer.on_complete();
        }
    }

    fn on_cancelled(&self) {
        for observer in &self.observers {
            observer.on_cancelled();
        }
    }
}

/// Observer callbacks reified for transport across threads
#[derive(Debug, Clone, PartialEq)]
pub enum StepEvent<T> {
    Step(Step<T>),
    Stats(RunStats),
    Completed,
    Cancelled,
}

/// Forwards every callback into an unbounded channel, so the worker never
/// waits on the consumer
pub struct ChannelObserver<T> {
    sender: Sender<StepEvent<T>>,
}

impl<T> ChannelObserver<T> {
    /// Create the observer along with the receiving end
    pub fn channel() -> (Self, Receiver<StepEvent<T>>) {
        let (sender, receiver) = mpsc::channel();
        (ChannelObserver { sender }, receiver)
    }
}

impl<T: Clone + Send> Observer<T> for ChannelObserver<T> {
    // A dropped receiver means nobody is watching; the run carries on.
    fn on_step(&self, step: &Step<T>) {
        let _ = self.sender.send(StepEvent::Step(step.clone()));
    }

    fn on_stats_update(&self, stats: &RunStats) {
        let _ = self.sender.send(StepEvent::Stats(*stats));
    }

    fn on_complete(&self) {
        let _ = self.sender.send(StepEvent::Completed);
    }

    fn on_cancelled(&self) {
        let _ = self.sender.send(StepEvent::Cancelled);
    }
}
