//! Step sonification
//!
//! Every step carries a hint value that maps to a short triangle-wave tone,
//! low values to low pitches. The voice that "sounds" those tones is a
//! process-wide resource with an explicit lifecycle: it is opened lazily on
//! the first unmuted note and released by [`LazyVoice::shutdown`]. Muting
//! returns before the voice is ever opened.
//!
//! There is no audio device behind the voice; it keeps the tones it was asked
//! to play so a front end can show them.

use crate::constants::VALUE_MAX;
use crate::engine::observer::Observer;
use crate::engine::step::Step;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Lowest and highest pitch of the tone scale, in hertz
pub const MIN_FREQUENCY_HZ: f64 = 120.0;
pub const MAX_FREQUENCY_HZ: f64 = 1200.0;

const NOTE_GAIN: f32 = 0.05;
const NOTE_LENGTH: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Triangle,
}

/// A single short note
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f64,
    pub gain: f32,
    pub length: Duration,
    pub waveform: Waveform,
}

/// Map a value on the `[0, VALUE_MAX]` scale to its tone
pub fn tone_for(value: f64) -> Tone {
    let position = (value / VALUE_MAX).clamp(0.0, 1.0);
    Tone {
        frequency_hz: MIN_FREQUENCY_HZ + position * (MAX_FREQUENCY_HZ - MIN_FREQUENCY_HZ),
        gain: NOTE_GAIN,
        length: NOTE_LENGTH,
        waveform: Waveform::Triangle,
    }
}

/// An open voice
#[derive(Debug, Default)]
pub struct Voice {
    notes_played: u64,
    last_tone: Option<Tone>,
}

impl Voice {
    fn open() -> Self {
        Voice::default()
    }

    fn sound(&mut self, tone: Tone) {
        self.notes_played += 1;
        self.last_tone = Some(tone);
    }
}

/// Summary handed back when a voice is released
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSummary {
    pub notes_played: u64,
    pub last_tone: Option<Tone>,
}

/// Voice slot that opens on first use
#[derive(Debug)]
pub struct LazyVoice {
    slot: Mutex<Option<Voice>>,
}

impl LazyVoice {
    pub const fn new() -> Self {
        LazyVoice {
            slot: Mutex::new(None),
        }
    }

    /// Play the tone for `hint`, opening the voice if needed. A muted call
    /// returns `None` without touching the voice.
    pub fn play(&self, hint: f64, muted: bool) -> Option<Tone> {
        if muted {
            return None;
        }
        let tone = tone_for(hint);
        self.lock().get_or_insert_with(Voice::open).sound(tone);
        Some(tone)
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    pub fn last_tone(&self) -> Option<Tone> {
        self.lock().as_ref().and_then(|voice| voice.last_tone)
    }

    /// Release the voice; the next unmuted note opens a fresh one
    pub fn shutdown(&self) -> Option<VoiceSummary> {
        self.lock().take().map(|voice| VoiceSummary {
            notes_played: voice.notes_played,
            last_tone: voice.last_tone,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<Voice>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LazyVoice {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_VOICE: LazyVoice = LazyVoice::new();

/// The process-wide voice
pub fn global() -> &'static LazyVoice {
    &GLOBAL_VOICE
}

/// Plays the hint of every step unless muted. Muting never changes the run.
pub struct AudioObserver {
    voice: &'static LazyVoice,
    muted: Arc<AtomicBool>,
}

impl AudioObserver {
    pub fn new(voice: &'static LazyVoice, muted: Arc<AtomicBool>) -> Self {
        AudioObserver { voice, muted }
    }
}

impl<T> Observer<T> for AudioObserver {
    fn on_step(&self, step: &Step<T>) {
        if let Some(hint) = step.hint {
            self.voice.play(hint, self.muted.load(Ordering::Relaxed));
        }
    }
}
