//! # Scope State Module
//!
//! Aggregates the pure analysis operations into the small display state
//! a scope view binds to: current pitch, amplitude, and the sharp/flat
//! labels of the nearest note. Pitch updates are amplitude-gated, so a
//! quiet room leaves the last good reading on screen instead of
//! flickering through noise.

use serde::{Deserialize, Serialize};

use crate::pitch::{NOISE_FLOOR, PitchReading, gate_by_amplitude};
use crate::tuning::classify_pitch;
use crate::waveform::{WaveShape, rms_amplitude, shape_waveform};

/// Display state fed by the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeData {
    /// Last accepted pitch in Hz
    pub pitch: f32,
    /// Last measured amplitude (tracker amplitude or block RMS)
    pub amplitude: f32,
    /// Sharp spelling of the nearest note, e.g. "C♯4"
    pub note_name_sharp: String,
    /// Flat spelling of the nearest note, e.g. "D♭4"
    pub note_name_flat: String,
}

impl Default for ScopeData {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            amplitude: 0.0,
            note_name_sharp: "-".to_string(),
            note_name_flat: "-".to_string(),
        }
    }
}

/// One scope: a waveform shaping mode plus the retained display state.
///
/// The external capture boundary calls [`Scope::process_block`] with
/// each complete sample block and [`Scope::update_pitch`] with each
/// tracker reading; the view reads [`Scope::data`] whenever it redraws.
#[derive(Debug, Clone)]
pub struct Scope {
    shape: WaveShape,
    noise_floor: f32,
    data: ScopeData,
}

impl Scope {
    pub fn new(shape: WaveShape) -> Self {
        Self::with_noise_floor(shape, NOISE_FLOOR)
    }

    /// Creates a scope with a caller-chosen gating threshold.
    pub fn with_noise_floor(shape: WaveShape, noise_floor: f32) -> Self {
        Self {
            shape,
            noise_floor,
            data: ScopeData::default(),
        }
    }

    pub fn shape(&self) -> WaveShape {
        self.shape
    }

    /// Switches the display transform for subsequent blocks.
    pub fn set_shape(&mut self, shape: WaveShape) {
        self.shape = shape;
    }

    pub fn data(&self) -> &ScopeData {
        &self.data
    }

    /// Shapes one captured block for plotting and refreshes the RMS
    /// amplitude readout.
    pub fn process_block(&mut self, samples: &[f32]) -> Vec<f32> {
        self.data.amplitude = rms_amplitude(samples);
        shape_waveform(samples, self.shape)
    }

    /// Applies one tracker reading to the display state.
    ///
    /// Readings at or below the noise floor are dropped and the
    /// previous state stays on screen. Accepted readings update pitch
    /// and amplitude and recompute the nearest-note labels.
    pub fn update_pitch(&mut self, reading: PitchReading) {
        let Some(reading) = gate_by_amplitude(reading, self.noise_floor) else {
            return;
        };

        self.data.pitch = reading.frequency;
        self.data.amplitude = reading.amplitude;

        if let Some(note) = classify_pitch(reading.frequency) {
            self.data.note_name_sharp = note.sharp_label();
            self.data.note_name_flat = note.flat_label();
        }
    }
}
