//! Step-generating sorting algorithms
//!
//! Each algorithm sorts ascending through a [`Tracer`], which makes every
//! comparison, swap and overwrite observable and cancellable. An algorithm
//! returns `Err(Cancelled)` as soon as the tracer reports cancellation, and
//! `?` carries that out of any recursion depth.
//!
//! # Sorted-index marking
//!
//! Algorithms that produce final positions as they go (bubble, selection,
//! heap, quick) mark them immediately; insertion marks its growing prefix.
//! Shell and merge sort mark nothing and rely on the stepper's reveal sweep.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

use crate::engine::errors::StepperError;
use crate::engine::step::Element;
use crate::engine::tracer::{Traced, Tracer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a library algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Heap,
    Quick,
    Merge,
}

impl AlgorithmId {
    /// Every algorithm, in menu order
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::Bubble,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Shell,
        AlgorithmId::Heap,
        AlgorithmId::Quick,
        AlgorithmId::Merge,
    ];

    /// Identifier as accepted by [`FromStr`]
    pub fn id(self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Shell => "shell",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Merge => "merge",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "Bubble Sort",
            AlgorithmId::Selection => "Selection Sort",
            AlgorithmId::Insertion => "Insertion Sort",
            AlgorithmId::Shell => "Shell Sort",
            AlgorithmId::Heap => "Heap Sort",
            AlgorithmId::Quick => "Quick Sort",
            AlgorithmId::Merge => "Merge Sort",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            AlgorithmId::Bubble | AlgorithmId::Selection | AlgorithmId::Insertion => "O(n²)",
            AlgorithmId::Shell
            | AlgorithmId::Heap
            | AlgorithmId::Quick
            | AlgorithmId::Merge => "O(n log n)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AlgorithmId::Bubble => {
                "Larger elements bubble up to the end through repeated adjacent swaps. Slow but easy to follow."
            }
            AlgorithmId::Selection => {
                "Scans the unsorted remainder for its minimum and appends it to the sorted prefix."
            }
            AlgorithmId::Insertion => {
                "Inserts each element into place within the sorted prefix, like sorting a hand of cards. Very fast on nearly sorted data."
            }
            AlgorithmId::Shell => {
                "Insertion sort over shrinking gaps: coarse passes first, then a final fine-grained pass."
            }
            AlgorithmId::Heap => {
                "Builds a max-heap, then repeatedly moves the root (the maximum) to the end of the array."
            }
            AlgorithmId::Quick => {
                "Divide and conquer around a pivot: smaller values go left, larger go right, then both sides recurse."
            }
            AlgorithmId::Merge => {
                "Splits the array in halves down to single elements, then merges sorted halves pairwise. Stable, but needs extra space."
            }
        }
    }

    /// Whether equal elements keep their relative order
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            AlgorithmId::Bubble | AlgorithmId::Insertion | AlgorithmId::Merge
        )
    }

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AlgorithmId {
    type Err = StepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AlgorithmId::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == wanted)
            .ok_or_else(|| StepperError::UnknownAlgorithm(s.to_string()))
    }
}

/// Run `algorithm` through `tracer`
pub fn execute<T: Element>(algorithm: AlgorithmId, tracer: &mut Tracer<'_, T>) -> Traced {
    match algorithm {
        AlgorithmId::Bubble => bubble::sort(tracer),
        AlgorithmId::Selection => selection::sort(tracer),
        AlgorithmId::Insertion => insertion::sort(tracer),
        AlgorithmId::Shell => shell::sort(tracer),
        AlgorithmId::Heap => heap::sort(tracer),
        AlgorithmId::Quick => quick::sort(tracer),
        AlgorithmId::Merge => merge::sort(tracer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_id() {
        for algorithm in AlgorithmId::ALL {
            assert_eq!(algorithm.id().parse::<AlgorithmId>().unwrap(), algorithm);
        }
        assert_eq!(" Quick ".parse::<AlgorithmId>().unwrap(), AlgorithmId::Quick);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "bogo".parse::<AlgorithmId>().unwrap_err();
        assert!(matches!(err, StepperError::UnknownAlgorithm(ref name) if name == "bogo"));
    }

    #[test]
    fn test_menu_cycles() {
        assert_eq!(AlgorithmId::Merge.next(), AlgorithmId::Bubble);
        assert_eq!(AlgorithmId::Bubble.prev(), AlgorithmId::Merge);
        let mut algorithm = AlgorithmId::Shell;
        for _ in 0..AlgorithmId::ALL.len() {
            algorithm = algorithm.next();
        }
        assert_eq!(algorithm, AlgorithmId::Shell);
    }
}
