//! Run configuration shared by the command line and the TUI

use crate::algorithms::AlgorithmId;
use crate::constants::{MAX_SIZE, MAX_SPEED_MS, MIN_SIZE, MIN_SPEED_MS};
use crate::dataset::Preset;
use crate::engine::errors::StepperError;
use std::fmt;
use std::str::FromStr;

/// How the buffer is plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Bars,
    Dots,
    Radial,
}

impl View {
    pub const ALL: [View; 3] = [View::Bars, View::Dots, View::Radial];

    pub fn id(self) -> &'static str {
        match self {
            View::Bars => "bars",
            View::Dots => "dots",
            View::Radial => "radial",
        }
    }

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = StepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        View::ALL
            .into_iter()
            .find(|view| view.id() == wanted)
            .ok_or_else(|| StepperError::UnknownView(s.to_string()))
    }
}

/// Everything the user can configure
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub algorithm: AlgorithmId,
    pub size: usize,
    pub preset: Preset,
    /// Delay between steps in milliseconds; smaller is faster
    pub speed_ms: u64,
    pub view: View,
    /// Silences the tone hints only; stepping is unaffected
    pub muted: bool,
    pub seed: Option<u64>,
}

impl Settings {
    /// Speed after one "faster" (`delta < 0`) or "slower" press, clamped to
    /// the interactive range
    pub fn adjusted_speed(&self, delta: i64) -> u64 {
        let next = self.speed_ms.saturating_add_signed(delta);
        next.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
    }

    /// Size after growing or shrinking by `delta`, clamped to the interactive range
    pub fn adjusted_size(&self, delta: isize) -> usize {
        let next = self.size.saturating_add_signed(delta);
        next.clamp(MIN_SIZE, MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_SIZE, DEFAULT_SPEED_MS};

    fn settings() -> Settings {
        Settings {
            algorithm: AlgorithmId::Bubble,
            size: DEFAULT_SIZE,
            preset: Preset::Random,
            speed_ms: DEFAULT_SPEED_MS,
            view: View::Bars,
            muted: false,
            seed: None,
        }
    }

    #[test]
    fn test_adjustments_clamp_to_interactive_range() {
        let mut s = settings();
        s.speed_ms = 3;
        assert_eq!(s.adjusted_speed(-5), MIN_SPEED_MS);
        s.speed_ms = 148;
        assert_eq!(s.adjusted_speed(5), MAX_SPEED_MS);

        s.size = 12;
        assert_eq!(s.adjusted_size(-10), MIN_SIZE);
        s.size = 195;
        assert_eq!(s.adjusted_size(10), MAX_SIZE);
    }

    #[test]
    fn test_view_parse_and_cycle() {
        assert_eq!("Radial".parse::<View>().unwrap(), View::Radial);
        assert!(matches!("pie".parse::<View>(), Err(StepperError::UnknownView(_))));
        assert_eq!(View::Radial.next(), View::Bars);
    }
}
