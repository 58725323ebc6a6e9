//! Sound cues
//!
//! Maps simulation events to one-shot sound effects and describes each one
//! as a procedural tone. Hosts own the actual synthesis; nothing here
//! touches the simulation state.

use crate::sim::{GameEvent, Mode};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Obstacle passed, points awarded
    Score,
    /// Combo went up (pitch rises with the combo)
    Combo { combo: u32 },
    /// Magnet placed while none was active
    MagnetOn,
    /// Run ended
    GameOver,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
    /// White noise burst
    Noise,
}

/// A procedural one-shot: frequency sweep, gain decay, optional lowpass sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    /// Hz at start and end of the sweep (ignored for noise)
    pub freq: (f32, f32),
    /// Seconds
    pub duration: f32,
    /// Peak gain before master volume
    pub gain: f32,
    /// Lowpass cutoff sweep in Hz
    pub lowpass: Option<(f32, f32)>,
}

impl SoundEffect {
    pub fn tone(&self) -> Tone {
        match *self {
            SoundEffect::Score => Tone {
                waveform: Waveform::Sine,
                freq: (880.0, 1760.0),
                duration: 0.3,
                gain: 0.3,
                lowpass: None,
            },
            SoundEffect::Combo { combo } => {
                let f = 440.0 * (1.0 + combo as f32 * 0.1);
                Tone {
                    waveform: Waveform::Triangle,
                    freq: (f, f),
                    duration: 0.5,
                    gain: 0.3,
                    lowpass: None,
                }
            }
            SoundEffect::MagnetOn => Tone {
                waveform: Waveform::Sawtooth,
                freq: (110.0, 55.0),
                duration: 0.5,
                gain: 0.4,
                lowpass: Some((1000.0, 100.0)),
            },
            SoundEffect::GameOver => Tone {
                waveform: Waveform::Noise,
                freq: (0.0, 0.0),
                duration: 1.0,
                gain: 0.5,
                lowpass: Some((1000.0, 100.0)),
            },
        }
    }
}

/// Pick the sounds for one frame's events.
///
/// Several score or combo events in the same frame collapse into one cue.
pub fn cues_for(events: &[GameEvent]) -> Vec<SoundEffect> {
    let mut cues = Vec::new();
    let mut scored = false;
    let mut top_combo = None;

    for event in events {
        match *event {
            GameEvent::ScoreIncreased { .. } => scored = true,
            GameEvent::ComboIncreased { combo } => {
                top_combo = Some(top_combo.map_or(combo, |c: u32| c.max(combo)));
            }
            GameEvent::MagnetActivated { .. } => cues.push(SoundEffect::MagnetOn),
            GameEvent::RunEnded { .. } => cues.push(SoundEffect::GameOver),
            _ => {}
        }
    }

    if scored {
        cues.insert(0, SoundEffect::Score);
    }
    if let Some(combo) = top_combo {
        cues.push(SoundEffect::Combo { combo });
    }
    cues
}

/// Whether the background drone should be running
pub fn drone_active(mode: Mode) -> bool {
    mode == Mode::Playing
}

/// Volume state and cue planning
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.3,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Tones to play for a frame's events, with master volume applied
    pub fn plan(&self, events: &[GameEvent]) -> Vec<(SoundEffect, Tone)> {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return Vec::new();
        }
        cues_for(events)
            .into_iter()
            .map(|effect| {
                let mut tone = effect.tone();
                tone.gain *= vol;
                (effect, tone)
            })
            .collect()
    }
}
