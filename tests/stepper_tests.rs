// Integration tests for run control: cancellation, restarts and live speed

use sortstep::algorithms::AlgorithmId;
use sortstep::audio::{AudioObserver, LazyVoice};
use sortstep::dataset::{DatasetGenerator, Preset};
use sortstep::engine::{
    run, CancellationToken, InstrumentationCollector, Observer, Pacing, RunEnv, RunOutcome,
    RunStats, SortStepper, SpeedHandle, Step, StepKind, StepperError,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

struct Recorder {
    steps: Mutex<Vec<Step<f64>>>,
    stats_updates: AtomicUsize,
    completed: AtomicUsize,
    cancelled: AtomicUsize,
    /// Cancel this token once this many steps have been seen
    cancel_after: Option<(usize, CancellationToken)>,
}

impl Recorder {
    fn new() -> Self {
        Recorder {
            steps: Mutex::new(Vec::new()),
            stats_updates: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            cancelled: AtomicUsize::new(0),
            cancel_after: None,
        }
    }

    fn cancelling_after(k: usize, token: CancellationToken) -> Self {
        Recorder {
            cancel_after: Some((k, token)),
            ..Recorder::new()
        }
    }

    fn step_count(&self) -> usize {
        self.steps.lock().unwrap().len()
    }

    fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Observer<f64> for Recorder {
    fn on_step(&self, step: &Step<f64>) {
        let mut steps = self.steps.lock().unwrap();
        steps.push(step.clone());
        if let Some((k, token)) = &self.cancel_after {
            if steps.len() == *k {
                token.cancel();
            }
        }
    }

    fn on_stats_update(&self, _stats: &RunStats) {
        self.stats_updates.fetch_add(1, Ordering::SeqCst);
    }

    fn on_complete(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_cancelled(&self) {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
    }
}

fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    condition()
}

fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted
}

#[test]
fn test_cancel_from_observer_stops_after_exactly_k_steps() {
    let original = DatasetGenerator::seeded(5).generate(40, Preset::Reversed);

    for algorithm in AlgorithmId::ALL {
        for k in [1, 6, 23] {
            let mut buffer = original.clone();
            let token = CancellationToken::new();
            let recorder = Recorder::cancelling_after(k, token.clone());
            let stats = InstrumentationCollector::new();
            let speed = SpeedHandle::new(0);
            let env = RunEnv {
                token: &token,
                stats: &stats,
                speed: &speed,
                pacing: Pacing::instant(),
                observer: &recorder,
            };

            let outcome = run(&mut buffer, algorithm, &env);
            assert_eq!(outcome, RunOutcome::Cancelled, "{} k={}", algorithm, k);
            assert_eq!(recorder.step_count(), k, "{} k={}", algorithm, k);
            assert_eq!(recorder.cancelled(), 1);
            assert_eq!(recorder.completed(), 0);

            // The buffer is exactly what the last published mutation showed
            let steps = recorder.steps.lock().unwrap();
            let expected = steps
                .iter()
                .rev()
                .find_map(|s| s.snapshot.clone())
                .unwrap_or_else(|| original.clone());
            assert_eq!(buffer, expected, "{} k={}", algorithm, k);
            assert_eq!(sorted_copy(&buffer), sorted_copy(&original));
        }
    }
}

#[test]
fn test_token_set_before_run_publishes_nothing() {
    let mut buffer = vec![3.0, 2.0, 1.0];
    let token = CancellationToken::new();
    token.cancel();
    let recorder = Recorder::new();
    let stats = InstrumentationCollector::new();
    let speed = SpeedHandle::new(0);
    let env = RunEnv {
        token: &token,
        stats: &stats,
        speed: &speed,
        pacing: Pacing::instant(),
        observer: &recorder,
    };

    assert_eq!(run(&mut buffer, AlgorithmId::Quick, &env), RunOutcome::Cancelled);
    assert_eq!(recorder.step_count(), 0);
    assert_eq!(buffer, vec![3.0, 2.0, 1.0]);
    assert_eq!(stats.snapshot().comparisons, 0);
    assert_eq!(recorder.cancelled(), 1);
}

#[test]
fn test_cancel_during_reveal_counts_as_cancelled() {
    let mut buffer = vec![2.0, 1.0];
    let token = CancellationToken::new();
    // Bubble on two elements: compare, swap, two marks, then the sweep
    let recorder = Recorder::cancelling_after(5, token.clone());
    let stats = InstrumentationCollector::new();
    let speed = SpeedHandle::new(0);
    let env = RunEnv {
        token: &token,
        stats: &stats,
        speed: &speed,
        pacing: Pacing::instant(),
        observer: &recorder,
    };

    assert_eq!(run(&mut buffer, AlgorithmId::Bubble, &env), RunOutcome::Cancelled);
    assert_eq!(buffer, vec![1.0, 2.0]);
    assert_eq!(recorder.cancelled(), 1);
    assert_eq!(recorder.completed(), 0);
}

#[test]
fn test_threaded_run_completes_and_adopts_result() {
    let original = DatasetGenerator::seeded(9).generate(60, Preset::Random);
    let recorder = Arc::new(Recorder::new());
    let mut stepper = SortStepper::new(original.clone(), 0).with_pacing(Pacing::instant());
    stepper.subscribe(recorder.clone());

    stepper.start(AlgorithmId::Heap).unwrap();
    let report = stepper.wait().unwrap().unwrap();

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(report.algorithm, AlgorithmId::Heap);
    assert!(is_non_decreasing(stepper.buffer()));
    assert_eq!(stepper.buffer(), report.buffer.as_slice());
    assert_eq!(stepper.last_report(), Some(&report));
    assert!(!stepper.is_running());
    assert_eq!(recorder.completed(), 1);
    assert!(recorder.stats_updates.load(Ordering::SeqCst) > 0);

    let compares = recorder
        .steps
        .lock()
        .unwrap()
        .iter()
        .filter(|s| s.kind == StepKind::Compare)
        .count() as u64;
    assert_eq!(report.stats.comparisons, compares);
    assert_eq!(stepper.stats(), report.stats);
}

#[test]
fn test_buffer_is_stable_while_a_run_is_active() {
    let original = DatasetGenerator::seeded(1).generate(30, Preset::Reversed);
    let recorder = Arc::new(Recorder::new());
    let mut stepper = SortStepper::new(original.clone(), 20).with_pacing(Pacing::instant());
    stepper.subscribe(recorder.clone());

    stepper.start(AlgorithmId::Bubble).unwrap();
    assert!(wait_until(Duration::from_secs(5), || recorder.step_count() >= 3));
    assert!(stepper.is_running());
    assert_eq!(stepper.buffer(), original.as_slice());

    let report = stepper.cancel().unwrap().unwrap();
    assert_eq!(report.outcome, RunOutcome::Cancelled);
    assert_eq!(recorder.cancelled(), 1);
    assert_eq!(stepper.buffer(), report.buffer.as_slice());
    assert_eq!(sorted_copy(stepper.buffer()), sorted_copy(&original));
}

#[test]
fn test_no_steps_after_cancel_returns() {
    let original = DatasetGenerator::seeded(2).generate(50, Preset::Random);
    let recorder = Arc::new(Recorder::new());
    let mut stepper = SortStepper::new(original, 2).with_pacing(Pacing::instant());
    stepper.subscribe(recorder.clone());

    stepper.start(AlgorithmId::Selection).unwrap();
    assert!(wait_until(Duration::from_secs(5), || recorder.step_count() >= 2));
    stepper.cancel().unwrap();

    let seen = recorder.step_count();
    thread::sleep(Duration::from_millis(50));
    assert_eq!(recorder.step_count(), seen);
    assert_eq!(recorder.cancelled(), 1);
}

#[test]
fn test_restart_cancels_the_previous_run() {
    let original = DatasetGenerator::seeded(4).generate(50, Preset::Reversed);
    let recorder = Arc::new(Recorder::new());
    let mut stepper = SortStepper::new(original, 10).with_pacing(Pacing::instant());
    stepper.subscribe(recorder.clone());

    stepper.start(AlgorithmId::Bubble).unwrap();
    assert!(wait_until(Duration::from_secs(5), || recorder.step_count() >= 2));

    stepper.set_speed(0);
    stepper.start(AlgorithmId::Quick).unwrap();
    let report = stepper.wait().unwrap().unwrap();

    assert_eq!(report.algorithm, AlgorithmId::Quick);
    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(recorder.cancelled(), 1);
    assert_eq!(recorder.completed(), 1);
    assert!(is_non_decreasing(stepper.buffer()));
}

#[test]
fn test_speed_change_applies_to_the_active_run() {
    let original = DatasetGenerator::seeded(6).generate(30, Preset::Reversed);
    let recorder = Arc::new(Recorder::new());
    // Hundreds of steps at 50 ms each would take far longer than the bound below
    let mut stepper = SortStepper::new(original, 50).with_pacing(Pacing::instant());
    stepper.subscribe(recorder.clone());

    let started = Instant::now();
    stepper.start(AlgorithmId::Bubble).unwrap();
    assert!(wait_until(Duration::from_secs(5), || recorder.step_count() >= 1));
    stepper.set_speed(0);
    assert_eq!(stepper.speed(), 0);

    let report = stepper.wait().unwrap().unwrap();
    assert_eq!(report.outcome, RunOutcome::Completed);
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn test_unknown_algorithm_name_fails_before_running() {
    let recorder = Arc::new(Recorder::new());
    let mut stepper = SortStepper::new(vec![3.0, 1.0, 2.0], 0);
    stepper.subscribe(recorder.clone());

    let err = stepper.start_named("bogo").unwrap_err();
    assert!(matches!(err, StepperError::UnknownAlgorithm(ref name) if name == "bogo"));
    assert!(!stepper.is_running());
    assert!(stepper.wait().unwrap().is_none());
    assert_eq!(recorder.step_count(), 0);
    assert_eq!(stepper.buffer(), &[3.0, 1.0, 2.0]);
}

#[test]
fn test_start_named_accepts_identifiers() {
    let mut stepper = SortStepper::new(vec![3.0, 1.0, 2.0], 0).with_pacing(Pacing::instant());
    stepper.start_named(" Merge ").unwrap();
    let report = stepper.wait().unwrap().unwrap();
    assert_eq!(report.algorithm, AlgorithmId::Merge);
    assert_eq!(stepper.buffer(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_start_at_sets_the_delay() {
    let mut stepper = SortStepper::new(vec![2.0, 1.0], 80).with_pacing(Pacing::instant());
    stepper.start_at(AlgorithmId::Selection, 0).unwrap();
    assert_eq!(stepper.speed(), 0);
    let report = stepper.wait().unwrap().unwrap();
    assert_eq!(report.buffer, vec![1.0, 2.0]);
}

#[test]
fn test_reset_cancels_and_zeroes_stats() {
    let recorder = Arc::new(Recorder::new());
    let mut stepper = SortStepper::new(vec![5.0, 4.0, 3.0, 2.0, 1.0], 30);
    stepper.subscribe(recorder.clone());

    stepper.start(AlgorithmId::Insertion).unwrap();
    assert!(wait_until(Duration::from_secs(5), || recorder.step_count() >= 1));

    let mut generator = DatasetGenerator::seeded(8);
    stepper
        .regenerate(&mut generator, 12, Preset::LowCardinality)
        .unwrap();

    assert!(!stepper.is_running());
    assert_eq!(recorder.cancelled(), 1);
    assert_eq!(stepper.buffer().len(), 12);
    assert_eq!(stepper.stats().comparisons, 0);
    assert_eq!(stepper.stats().swaps, 0);
    assert!(stepper.last_report().is_none());
}

#[test]
fn test_dropping_the_stepper_cancels_its_run() {
    let recorder = Arc::new(Recorder::new());
    {
        let mut stepper = SortStepper::new(vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0], 30);
        stepper.subscribe(recorder.clone());
        stepper.start(AlgorithmId::Shell).unwrap();
        assert!(wait_until(Duration::from_secs(5), || recorder.step_count() >= 1));
    }
    assert_eq!(recorder.cancelled(), 1);
    assert_eq!(recorder.completed(), 0);
}

#[test]
fn test_independent_steppers_run_side_by_side() {
    let handles: Vec<_> = AlgorithmId::ALL
        .into_iter()
        .enumerate()
        .map(|(i, algorithm)| {
            thread::spawn(move || {
                let values = DatasetGenerator::seeded(i as u64).generate(40, Preset::Random);
                let mut stepper = SortStepper::new(values, 0).with_pacing(Pacing::instant());
                stepper.start(algorithm).unwrap();
                stepper.wait().unwrap().unwrap()
            })
        })
        .collect();

    for handle in handles {
        let report = handle.join().unwrap();
        assert_eq!(report.outcome, RunOutcome::Completed);
        assert!(is_non_decreasing(&report.buffer));
    }
}

/// Keeps every published elapsed time in arrival order
#[derive(Default)]
struct ElapsedLog {
    elapsed: Mutex<Vec<f64>>,
}

impl Observer<u32> for ElapsedLog {
    fn on_step(&self, _step: &Step<u32>) {}

    fn on_stats_update(&self, stats: &RunStats) {
        self.elapsed.lock().unwrap().push(stats.elapsed_seconds);
    }
}

#[test]
fn test_published_elapsed_time_never_goes_backwards() {
    // A very fast clock races the worker's per-step publications
    let pacing = Pacing {
        tick_interval: Duration::from_micros(50),
        ..Pacing::instant()
    };

    for _ in 0..3 {
        let log = Arc::new(ElapsedLog::default());
        let values: Vec<u32> = (0..300).rev().collect();
        let mut stepper = SortStepper::new(values, 0).with_pacing(pacing);
        stepper.subscribe(log.clone());

        stepper.start(AlgorithmId::Bubble).unwrap();
        let report = stepper.wait().unwrap().unwrap();
        assert_eq!(report.outcome, RunOutcome::Completed);

        let elapsed = log.elapsed.lock().unwrap();
        assert!(elapsed.len() > 1000);
        let regressions = elapsed.windows(2).filter(|w| w[1] < w[0]).count();
        assert_eq!(regressions, 0);
        assert_eq!(elapsed.last().copied(), Some(report.stats.elapsed_seconds));
    }
}

#[test]
fn test_muted_audio_never_opens_a_voice_and_leaves_the_run_alone() {
    static VOICE: LazyVoice = LazyVoice::new();
    let values = DatasetGenerator::seeded(12).generate(25, Preset::NearlySorted);
    let muted = Arc::new(AtomicBool::new(true));

    let run_once = |muted: &Arc<AtomicBool>| {
        let mut stepper = SortStepper::new(values.clone(), 0).with_pacing(Pacing::instant());
        stepper.subscribe(Arc::new(AudioObserver::new(&VOICE, Arc::clone(muted))));
        stepper.start(AlgorithmId::Insertion).unwrap();
        stepper.wait().unwrap().unwrap()
    };

    let quiet = run_once(&muted);
    assert!(!VOICE.is_open());

    muted.store(false, Ordering::SeqCst);
    let loud = run_once(&muted);
    assert!(VOICE.is_open());
    assert_eq!(quiet.buffer, loud.buffer);
    assert_eq!(quiet.stats.comparisons, loud.stats.comparisons);
    assert_eq!(quiet.stats.swaps, loud.stats.swaps);

    let summary = VOICE.shutdown().unwrap();
    assert!(summary.notes_played > 0);
    assert!(!VOICE.is_open());
}
