//! Step records
//!
//! A [`Step`] describes one atomic action taken by an algorithm. Steps are
//! published in exactly the order the algorithm performs them.

use std::fmt;

/// A value that can live in the sorted buffer.
///
/// Ordering comes from `PartialOrd`; [`magnitude`](Element::magnitude) is the
/// representative number handed to observers as a step hint (bar height,
/// tone pitch).
pub trait Element: Copy + PartialOrd + Send + Sync + 'static {
    fn magnitude(&self) -> f64;
}

impl Element for f64 {
    fn magnitude(&self) -> f64 {
        *self
    }
}

impl Element for f32 {
    fn magnitude(&self) -> f64 {
        f64::from(*self)
    }
}

macro_rules! integer_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn magnitude(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

integer_element!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// Kind of action a step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Compare,
    Swap,
    Overwrite,
    MarkSorted,
}

impl StepKind {
    /// Whether the step changed the buffer
    pub fn is_mutating(self) -> bool {
        matches!(self, StepKind::Swap | StepKind::Overwrite)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Overwrite => "overwrite",
            StepKind::MarkSorted => "sorted",
        };
        f.write_str(name)
    }
}

/// One observable algorithm action
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    pub kind: StepKind,
    /// The one or two positions touched
    pub indices: Vec<usize>,
    /// Buffer contents right after a mutating step; `None` otherwise
    pub snapshot: Option<Vec<T>>,
    /// Representative value for side effects such as tone pitch
    pub hint: Option<f64>,
}

impl<T> Step<T> {
    pub fn compare(a: usize, b: usize, hint: Option<f64>) -> Self {
        Step {
            kind: StepKind::Compare,
            indices: vec![a, b],
            snapshot: None,
            hint,
        }
    }

    pub fn swap(a: usize, b: usize, snapshot: Vec<T>, hint: Option<f64>) -> Self {
        Step {
            kind: StepKind::Swap,
            indices: vec![a, b],
            snapshot: Some(snapshot),
            hint,
        }
    }

    pub fn overwrite(index: usize, snapshot: Vec<T>, hint: Option<f64>) -> Self {
        Step {
            kind: StepKind::Overwrite,
            indices: vec![index],
            snapshot: Some(snapshot),
            hint,
        }
    }

    pub fn mark_sorted(index: usize, hint: Option<f64>) -> Self {
        Step {
            kind: StepKind::MarkSorted,
            indices: vec![index],
            snapshot: None,
            hint,
        }
    }
}

impl<T> fmt::Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<9}", self.kind.to_string())?;
        match self.indices.as_slice() {
            [a, b] => write!(f, " {} ↔ {}", a, b)?,
            [a] => write!(f, " {}", a)?,
            _ => {}
        }
        if let Some(hint) = self.hint {
            write!(f, " ({:.1})", hint)?;
        }
        Ok(())
    }
}
