//! Main TUI application state and logic

use crate::audio::{self, AudioObserver, LazyVoice};
use crate::dataset::DatasetGenerator;
use crate::engine::observer::{ChannelObserver, StepEvent};
use crate::engine::stepper::{RunOutcome, SortStepper};
use crate::ui::settings::Settings;
use crate::ui::view::{BufferView, StepLog};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Number of steps kept in the step log
const STEP_LOG_CAPACITY: usize = 500;

/// Where the app is in the run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Sorting,
    Sorted,
    Cancelled,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Ready => "READY",
            Phase::Sorting => "▶ SORTING",
            Phase::Sorted => "SORTED",
            Phase::Cancelled => "CANCELLED",
        }
    }
}

/// The main application state
pub struct App {
    /// Current configuration, as shown in the header
    pub settings: Settings,

    stepper: SortStepper<f64>,
    generator: DatasetGenerator,
    events: Receiver<StepEvent<f64>>,

    /// Shared with the audio observer; flipping it never touches the run
    muted: Arc<AtomicBool>,
    voice: &'static LazyVoice,

    /// What the panes draw
    pub view: BufferView,
    pub log: StepLog,

    /// Step log scroll offset; `usize::MAX` pins it to the newest entry
    pub log_scroll: usize,
    pub follow_log: bool,

    pub phase: Phase,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create the app and generate the first buffer from `settings`
    pub fn new(settings: Settings) -> Self {
        let mut generator = settings
            .seed
            .map_or_else(DatasetGenerator::new, DatasetGenerator::seeded);
        let values = generator.generate(settings.size, settings.preset);

        let (channel, events) = ChannelObserver::channel();
        let muted = Arc::new(AtomicBool::new(settings.muted));
        let voice = audio::global();

        let mut stepper = SortStepper::new(values.clone(), settings.speed_ms);
        stepper.subscribe(Arc::new(channel));
        stepper.subscribe(Arc::new(AudioObserver::new(voice, Arc::clone(&muted))));

        App {
            settings,
            stepper,
            generator,
            events,
            muted,
            voice,
            view: BufferView::new(values),
            log: StepLog::new(STEP_LOG_CAPACITY),
            log_scroll: usize::MAX,
            follow_log: true,
            phase: Phase::Ready,
            should_quit: false,
            status_message: String::from("Ready! Press space to sort."),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.drain_events();
            self.reap_worker();

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Short poll keeps the animation smooth at the fastest speeds
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        if let Err(e) = self.stepper.cancel() {
            eprintln!("Warning: failed to stop sorting thread: {}", e);
        }
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Header, body, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        // Visualization | side column
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[1]);

        // Side column: stats, algorithm info, step log
        let side_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(9),
                Constraint::Min(3),
            ])
            .split(columns[1]);

        super::panes::render_header(frame, main_chunks[0], &self.settings);
        super::panes::render_visual_pane(frame, columns[0], &self.view, self.settings.view);
        super::panes::render_stats_pane(frame, side_rows[0], &self.view.stats, self.view.values.len());
        super::panes::render_info_pane(frame, side_rows[1], self.settings.algorithm);

        if self.follow_log {
            self.log_scroll = usize::MAX;
        }
        super::panes::render_steps_pane(frame, side_rows[2], &self.log, &mut self.log_scroll);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.phase,
            self.voice.last_tone(),
        );
    }

    /// Fold every pending run event into the view
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            if let StepEvent::Step(step) = &event {
                self.log.record(step);
            }
            if let Some(outcome) = self.view.apply(event) {
                self.finish(outcome);
            }
        }
    }

    /// Drop events left over from a run that has already been joined
    fn discard_events(&mut self) {
        while self.events.try_recv().is_ok() {}
    }

    fn reap_worker(&mut self) {
        if let Err(e) = self.stepper.poll() {
            self.status_message = format!("Error: {}", e);
        }
    }

    fn finish(&mut self, outcome: RunOutcome) {
        let stats = self.view.stats;
        match outcome {
            RunOutcome::Completed => {
                self.phase = Phase::Sorted;
                self.status_message = format!(
                    "Sorted in {:.2}s: {} comparisons, {} swaps/writes",
                    stats.elapsed_seconds, stats.comparisons, stats.swaps
                );
            }
            RunOutcome::Cancelled => {
                self.phase = Phase::Cancelled;
                self.status_message = "Sort cancelled".to_string();
            }
        }
    }

    /// Start sorting the current buffer with the selected algorithm
    pub fn start_sort(&mut self) {
        if self.phase == Phase::Sorting {
            return;
        }
        if let Err(e) = self.stepper.cancel() {
            self.status_message = format!("Error: {}", e);
            return;
        }
        self.discard_events();
        self.view.begin_run();
        self.log.clear();
        self.follow_log = true;

        match self.stepper.start(self.settings.algorithm) {
            Ok(()) => {
                self.phase = Phase::Sorting;
                self.status_message = format!("Sorting with {}...", self.settings.algorithm.name());
            }
            Err(e) => {
                self.status_message = format!("Cannot start: {}", e);
            }
        }
    }

    /// Stop the active run, keeping the buffer as it is
    pub fn cancel_sort(&mut self) {
        if self.phase != Phase::Sorting {
            return;
        }
        match self.stepper.cancel() {
            Ok(_) => self.drain_events(),
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    /// Cancel any run and generate a fresh buffer from the settings
    pub fn reset(&mut self) {
        let size = self.settings.size;
        let preset = self.settings.preset;
        if let Err(e) = self.stepper.regenerate(&mut self.generator, size, preset) {
            self.status_message = format!("Error: {}", e);
            return;
        }
        self.discard_events();
        self.view.reset(self.stepper.buffer().to_vec());
        self.log.clear();
        self.follow_log = true;
        self.phase = Phase::Ready;
        self.status_message = format!("New {} buffer of {} values", preset.label(), size);
    }

    /// Apply a new delay; an active run picks it up on its next step
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.settings.speed_ms = speed_ms;
        self.stepper.set_speed(speed_ms);
        self.status_message = format!("Step delay {}ms", speed_ms);
    }

    pub fn toggle_mute(&mut self) {
        self.settings.muted = !self.settings.muted;
        self.muted.store(self.settings.muted, Ordering::Relaxed);
        self.status_message = if self.settings.muted {
            "Sound off".to_string()
        } else {
            "Sound on".to_string()
        };
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // 200ms debounce to prevent key repeat from restarting
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.start_sort();
                }
            }
            KeyCode::Enter => self.start_sort(),
            KeyCode::Char('c') | KeyCode::Esc => self.cancel_sort(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.cancel_sort();
                self.settings.algorithm = if key.code == KeyCode::Char('a') {
                    self.settings.algorithm.next()
                } else {
                    self.settings.algorithm.prev()
                };
                self.status_message = format!("Algorithm: {}", self.settings.algorithm.name());
            }
            KeyCode::Char('p') => {
                self.settings.preset = self.settings.preset.next();
                self.reset();
            }
            KeyCode::Char('v') => {
                self.settings.view = self.settings.view.next();
            }
            KeyCode::Char('m') => self.toggle_mute(),
            // Smaller delay is faster
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.settings.adjusted_speed(-5);
                self.set_speed(speed);
            }
            KeyCode::Char('-') => {
                let speed = self.settings.adjusted_speed(5);
                self.set_speed(speed);
            }
            KeyCode::Char(']') => {
                self.settings.size = self.settings.adjusted_size(10);
                self.reset();
            }
            KeyCode::Char('[') => {
                self.settings.size = self.settings.adjusted_size(-10);
                self.reset();
            }
            KeyCode::Up => {
                self.follow_log = false;
                self.log_scroll = self.log_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.log_scroll = self.log_scroll.saturating_add(1);
            }
            KeyCode::End => {
                self.follow_log = true;
            }
            _ => {}
        }
    }

    pub fn is_sorting(&self) -> bool {
        self.phase == Phase::Sorting
    }
}
