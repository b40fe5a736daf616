use crate::algorithms::AlgorithmId;
use crate::constants::{DEFAULT_SIZE, DEFAULT_SPEED_MS};
use crate::dataset::Preset;
use crate::ui::{Settings, View};
use clap::builder::TypedValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sortstep",
    about = "Watch sorting algorithms run step by step",
    version
)]
pub struct Cli {
    /// bubble, selection, insertion, shell, heap, quick or merge
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: AlgorithmId,

    /// Number of values to sort
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE,
          value_parser = clap::value_parser!(u64).range(1..=10_000).map(|n| n as usize))]
    pub size: usize,

    /// random, reversed, nearly-sorted or low-cardinality
    #[arg(short, long, default_value = "random")]
    pub preset: Preset,

    /// Delay between steps in milliseconds (smaller is faster, 0 for none)
    #[arg(short, long, default_value_t = DEFAULT_SPEED_MS,
          value_parser = clap::value_parser!(u64).range(0..=5_000))]
    pub speed: u64,

    /// bars, dots or radial
    #[arg(long, default_value = "bars")]
    pub view: View,

    /// Start with sound hints off
    #[arg(short, long)]
    pub muted: bool,

    /// Seed for reproducible datasets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print steps to stdout instead of opening the TUI
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            algorithm: self.algorithm,
            size: self.size,
            preset: self.preset,
            speed_ms: self.speed,
            view: self.view,
            muted: self.muted,
            seed: self.seed,
        }
    }
}
