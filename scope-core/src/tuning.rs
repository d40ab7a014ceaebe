//! # Musical Tuning Module
//!
//! This module maps a detected frequency onto the nearest chromatic note.
//! It carries the twelve base-octave reference frequencies (C0 ≈ 16.35 Hz
//! through B0 ≈ 30.87 Hz) together with sharp and flat spellings, and
//! normalizes an arbitrary frequency into that band before searching.
//!
//! ## Features
//! - Octave normalization by repeated halving/doubling
//! - Nearest-neighbor pitch-class search with a stable tie break
//! - Both sharp and flat note spellings
//! - Defined invalid result for non-positive or non-finite input

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Base-octave reference frequencies in Hz, C0 through B0.
const BASE_FREQUENCIES: [f32; 12] = [
    16.35, 17.32, 18.35, 19.45, 20.6, 21.83, 23.12, 24.5, 25.96, 27.5, 29.14, 30.87,
];

const SHARP_NAMES: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

/// One entry of the base-octave reference table.
#[derive(Debug, Clone)]
pub struct Note {
    /// Sharp spelling of the pitch class (e.g. "C♯")
    pub sharp: &'static str,
    /// Flat spelling of the pitch class (e.g. "D♭")
    pub flat: &'static str,
    /// Reference frequency in Hz, octave 0
    pub frequency: f32,
}

/// Statically computed base-octave note table.
///
/// Built once by zipping the frequency table with the two spelling
/// tables; `classify_pitch` indexes into it after the nearest-neighbor
/// search.
static BASE_NOTES: Lazy<Vec<Note>> = Lazy::new(|| {
    (0..12)
        .map(|i| Note {
            sharp: SHARP_NAMES[i],
            flat: FLAT_NAMES[i],
            frequency: BASE_FREQUENCIES[i],
        })
        .collect()
});

/// The nearest chromatic note to a detected frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteClassification {
    /// Sharp spelling of the pitch class (e.g. "C♯")
    pub sharp_name: String,
    /// Flat spelling of the pitch class (e.g. "D♭")
    pub flat_name: String,
    /// Octave index; doubles of the base octave, so middle C is octave 4
    pub octave: i32,
}

impl NoteClassification {
    /// Display label using the sharp spelling, e.g. "C♯4".
    pub fn sharp_label(&self) -> String {
        format!("{}{}", self.sharp_name, self.octave)
    }

    /// Display label using the flat spelling, e.g. "D♭4".
    pub fn flat_label(&self) -> String {
        format!("{}{}", self.flat_name, self.octave)
    }
}

/// Classifies a frequency into the nearest pitch class and octave.
///
/// The frequency is first normalized into the base-octave band by
/// halving while it exceeds the table maximum and doubling while it
/// falls short of the table minimum. Both comparisons are strict, so a
/// frequency exactly on a table boundary passes through untransposed.
/// A linear scan then finds the nearest reference frequency, with ties
/// resolved to the lowest table index. The octave is the number of
/// halvings minus the number of doublings, which equals
/// ⌊log₂(original / normalized)⌋ since the ratio is an exact power of
/// two.
///
/// # Arguments
/// * `frequency_hz` - Detected frequency in Hz
///
/// # Returns
/// * `Some(classification)` - Nearest note, both spellings plus octave
/// * `None` - Frequency was zero, negative, or non-finite
pub fn classify_pitch(frequency_hz: f32) -> Option<NoteClassification> {
    // Zero or negative input would never converge into the band.
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return None;
    }

    let min = BASE_FREQUENCIES[0];
    let max = BASE_FREQUENCIES[BASE_FREQUENCIES.len() - 1];

    let mut normalized = frequency_hz;
    let mut octave: i32 = 0;
    while normalized > max {
        normalized /= 2.0;
        octave += 1;
    }
    while normalized < min {
        normalized *= 2.0;
        octave -= 1;
    }

    let mut index = 0;
    let mut min_distance = f32::INFINITY;
    for (candidate, note) in BASE_NOTES.iter().enumerate() {
        let distance = (note.frequency - normalized).abs();
        if distance < min_distance {
            index = candidate;
            min_distance = distance;
        }
    }

    let note = &BASE_NOTES[index];
    Some(NoteClassification {
        sharp_name: note.sharp.to_string(),
        flat_name: note.flat.to_string(),
        octave,
    })
}
