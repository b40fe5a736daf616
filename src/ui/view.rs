//! UI-side model of a run
//!
//! [`BufferView`] folds [`StepEvent`]s into what the panes draw: the current
//! values, the highlighted positions and the latest statistics. It knows
//! nothing about ratatui, so it is tested on its own.

use crate::engine::observer::StepEvent;
use crate::engine::stats::RunStats;
use crate::engine::step::{Step, StepKind};
use crate::engine::stepper::RunOutcome;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// How one position should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Sorted,
    Swap,
    Compare,
    None,
}

#[derive(Debug, Clone, Default)]
pub struct BufferView {
    pub values: Vec<f64>,
    pub compare: Vec<usize>,
    pub swap: Vec<usize>,
    pub sorted: FxHashSet<usize>,
    pub stats: RunStats,
}

impl BufferView {
    pub fn new(values: Vec<f64>) -> Self {
        BufferView {
            values,
            ..BufferView::default()
        }
    }

    /// Start over from `values` with no highlights and zeroed stats
    pub fn reset(&mut self, values: Vec<f64>) {
        *self = BufferView::new(values);
    }

    /// Clear highlights before a new run on the current values
    pub fn begin_run(&mut self) {
        self.compare.clear();
        self.swap.clear();
        self.sorted.clear();
        self.stats = RunStats::default();
    }

    /// Fold one event in. Returns the outcome once the run has ended.
    pub fn apply(&mut self, event: StepEvent<f64>) -> Option<RunOutcome> {
        match event {
            StepEvent::Step(step) => {
                self.apply_step(step);
                None
            }
            StepEvent::Stats(stats) => {
                self.stats = stats;
                None
            }
            StepEvent::Completed => {
                self.compare.clear();
                self.swap.clear();
                Some(RunOutcome::Completed)
            }
            StepEvent::Cancelled => {
                self.compare.clear();
                self.swap.clear();
                Some(RunOutcome::Cancelled)
            }
        }
    }

    fn apply_step(&mut self, step: Step<f64>) {
        match step.kind {
            StepKind::Compare => {
                self.compare = step.indices;
                self.swap.clear();
            }
            StepKind::Swap | StepKind::Overwrite => {
                self.swap = step.indices;
                if let Some(snapshot) = step.snapshot {
                    self.values = snapshot;
                }
            }
            StepKind::MarkSorted => {
                self.sorted.extend(step.indices);
            }
        }
    }

    /// Sorted wins over swap, swap over compare
    pub fn highlight(&self, index: usize) -> Highlight {
        if self.sorted.contains(&index) {
            Highlight::Sorted
        } else if self.swap.contains(&index) {
            Highlight::Swap
        } else if self.compare.contains(&index) {
            Highlight::Compare
        } else {
            Highlight::None
        }
    }

    /// Largest value, for scaling plots
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Bounded log of the most recent steps
#[derive(Debug, Clone)]
pub struct StepLog {
    lines: VecDeque<String>,
    capacity: usize,
    total: u64,
}

impl StepLog {
    pub fn new(capacity: usize) -> Self {
        StepLog {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    pub fn push(&mut self, line: String) {
        self.total += 1;
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn record(&mut self, step: &Step<f64>) {
        let line = format!("#{:<6} {}", self.total + 1, step);
        self.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.total = 0;
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
