//! Non-interactive mode: stream every step to stdout

use crate::audio::{self, AudioObserver};
use crate::dataset::DatasetGenerator;
use crate::engine::errors::StepperError;
use crate::engine::observer::Observer;
use crate::engine::step::Step;
use crate::engine::stepper::{Pacing, RunReport, SortStepper};
use crate::ui::Settings;
use std::io::{self, Write};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Writes one line per step. Write errors (a closed pipe) are ignored so the
/// run itself is never disturbed.
pub struct PrintObserver;

impl Observer<f64> for PrintObserver {
    fn on_step(&self, step: &Step<f64>) {
        let _ = writeln!(io::stdout().lock(), "{}", step);
    }

    fn on_complete(&self) {
        let _ = io::stdout().lock().flush();
    }

    fn on_cancelled(&self) {
        let _ = writeln!(io::stdout().lock(), "cancelled");
    }
}

/// Generate a buffer from `settings`, sort it and report the result
pub fn run(settings: &Settings) -> Result<Option<RunReport<f64>>, StepperError> {
    let mut generator = settings
        .seed
        .map_or_else(DatasetGenerator::new, DatasetGenerator::seeded);
    let values = generator.generate(settings.size, settings.preset);

    let pacing = if settings.speed_ms == 0 {
        Pacing::instant()
    } else {
        Pacing::default()
    };

    let mut stepper = SortStepper::new(values, settings.speed_ms).with_pacing(pacing);
    stepper.subscribe(Arc::new(PrintObserver));
    stepper.subscribe(Arc::new(AudioObserver::new(
        audio::global(),
        Arc::new(AtomicBool::new(settings.muted)),
    )));

    eprintln!(
        "Sorting {} {} values with {}...",
        settings.size,
        settings.preset,
        settings.algorithm.name()
    );
    stepper.start(settings.algorithm)?;
    let Some(report) = stepper.wait()? else {
        return Ok(None);
    };

    eprintln!(
        "{} {}: {} comparisons, {} swaps/writes, {:.2}s",
        report.algorithm.name(),
        report.outcome,
        report.stats.comparisons,
        report.stats.swaps,
        report.stats.elapsed_seconds
    );
    Ok(Some(report))
}
