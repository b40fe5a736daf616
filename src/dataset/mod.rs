//! Initial buffer generation
//!
//! [`DatasetGenerator`] builds the buffer a run starts from, shaped by a
//! [`Preset`]. Values span `[VALUE_MIN, VALUE_MAX]`. The generator owns its
//! RNG so runs can be reproduced from a seed.

use crate::constants::{LOW_CARDINALITY_LEVELS, VALUE_MAX, VALUE_MIN};
use crate::engine::errors::StepperError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Input-generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Independent uniform integer draws
    #[default]
    Random,
    /// Evenly spaced ramp in descending order
    Reversed,
    /// Ascending ramp with a few random pair swaps
    NearlySorted,
    /// Few distinct values, many duplicates
    LowCardinality,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Random,
        Preset::Reversed,
        Preset::NearlySorted,
        Preset::LowCardinality,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Preset::Random => "random",
            Preset::Reversed => "reversed",
            Preset::NearlySorted => "nearly-sorted",
            Preset::LowCardinality => "low-cardinality",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Random => "Random",
            Preset::Reversed => "Reversed",
            Preset::NearlySorted => "Nearly sorted",
            Preset::LowCardinality => "Few unique",
        }
    }

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = StepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Preset::Random),
            "reversed" => Ok(Preset::Reversed),
            "nearly-sorted" | "nearly" => Ok(Preset::NearlySorted),
            "low-cardinality" | "unique" => Ok(Preset::LowCardinality),
            _ => Err(StepperError::UnknownPreset(s.to_string())),
        }
    }
}

/// Buffer factory with its own random source
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    rng: StdRng,
}

impl DatasetGenerator {
    /// Generator seeded from the operating system
    pub fn new() -> Self {
        DatasetGenerator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        DatasetGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, size: usize, preset: Preset) -> Vec<f64> {
        match preset {
            Preset::Random => (0..size)
                .map(|_| f64::from(self.rng.random_range(VALUE_MIN as u32..=VALUE_MAX as u32)))
                .collect(),
            Preset::Reversed => {
                let mut values = ramp(size);
                values.reverse();
                values
            }
            Preset::NearlySorted => {
                let mut values = ramp(size);
                if size > 0 {
                    for _ in 0..size.div_ceil(5) {
                        let a = self.rng.random_range(0..size);
                        let b = self.rng.random_range(0..size);
                        values.swap(a, b);
                    }
                }
                values
            }
            Preset::LowCardinality => {
                let step = VALUE_MAX / f64::from(LOW_CARDINALITY_LEVELS);
                (0..size)
                    .map(|_| f64::from(self.rng.random_range(1..=LOW_CARDINALITY_LEVELS)) * step)
                    .collect()
            }
        }
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evenly spaced ascending values starting at `VALUE_MIN`
fn ramp(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| VALUE_MIN + (i as f64 / size as f64) * (VALUE_MAX - VALUE_MIN))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_is_strictly_ascending_from_min() {
        let values = ramp(20);
        assert_eq!(values[0], VALUE_MIN);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(values[19] < VALUE_MAX);
    }

    #[test]
    fn test_preset_aliases() {
        assert_eq!("nearly".parse::<Preset>().unwrap(), Preset::NearlySorted);
        assert_eq!("unique".parse::<Preset>().unwrap(), Preset::LowCardinality);
        assert_eq!(
            "Low-Cardinality".parse::<Preset>().unwrap(),
            Preset::LowCardinality
        );
        assert!("sorted".parse::<Preset>().is_err());
    }

    #[test]
    fn test_zero_size_is_empty_for_every_preset() {
        let mut generator = DatasetGenerator::seeded(1);
        for preset in Preset::ALL {
            assert!(generator.generate(0, preset).is_empty());
        }
    }
}
