//! # Pitch Reading Module
//!
//! Pitch readings arrive from the external tracker boundary as
//! `(frequency, amplitude)` pairs, once per capture block. The only rule
//! this module owns is the noise gate: readings at or below the noise
//! floor carry no information worth displaying and must not disturb the
//! previously shown state. The gate is a pure function returning an
//! optional update so the caller decides the retention semantics.

use serde::{Deserialize, Serialize};

/// Amplitude below which pitch readings are treated as background noise.
///
/// Gating at this floor prevents random, fluctuating display data when
/// nobody is playing into the microphone.
pub const NOISE_FLOOR: f32 = 0.1;

/// One pitch-tracker output: detected frequency and signal amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchReading {
    /// Detected frequency in Hz
    pub frequency: f32,
    /// Signal amplitude, 0.0 and up
    pub amplitude: f32,
}

/// Suppresses readings at or below the amplitude threshold.
///
/// # Arguments
/// * `reading` - Tracker output for one block
/// * `threshold` - Minimum amplitude; [`NOISE_FLOOR`] in the stock setup
///
/// # Returns
/// * `Some(reading)` - Amplitude was strictly above the threshold
/// * `None` - No update; the caller keeps its previous state
pub fn gate_by_amplitude(reading: PitchReading, threshold: f32) -> Option<PitchReading> {
    if reading.amplitude > threshold {
        Some(reading)
    } else {
        None
    }
}
