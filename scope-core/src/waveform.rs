//! # Waveform Shaping Module
//!
//! This module transforms one captured sample block into the data a plot
//! widget draws: a shaped per-sample buffer and an RMS loudness readout.
//! Every operation is a pure function of its inputs and allocates only
//! per-call data, so the capture callback may invoke it from any thread.
//!
//! ## Features
//! - Pass-through, hard-limited square, and sine-folded display transforms
//! - Length-preserving output (one point per input sample, no resampling)
//! - RMS amplitude with an empty-block guard

use serde::{Deserialize, Serialize};

/// Display transform applied to a captured sample block before plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveShape {
    /// Pass samples through untouched (raw mic or oscillator trace).
    Raw,
    /// Hard-limit every sample to +1.0 or -1.0.
    Square,
    /// Fold each sample through `sin(s * 2π)`. A decorative nonlinear
    /// transform of the existing signal, not a sine synthesis.
    SineFolded,
}

/// Shapes a sample block for display.
///
/// The output always has exactly one value per input sample; an empty
/// block produces an empty output. `Square` maps a sample at exactly
/// 0.0 to -1.0, keeping the trace reproducible.
///
/// # Arguments
/// * `samples` - Captured sample block, values nominally in [-1.0, 1.0]
/// * `shape` - Transform to apply
///
/// # Returns
/// * Shaped buffer of the same length as `samples`
pub fn shape_waveform(samples: &[f32], shape: WaveShape) -> Vec<f32> {
    match shape {
        WaveShape::Raw => samples.to_vec(),
        WaveShape::Square => samples
            .iter()
            .map(|&s| if s > 0.0 { 1.0 } else { -1.0 })
            .collect(),
        WaveShape::SineFolded => samples
            .iter()
            .map(|&s| (s * 2.0 * std::f32::consts::PI).sin())
            .collect(),
    }
}

/// Calculates the RMS (root mean square) amplitude of a sample block.
///
/// RMS is the loudness proxy shown next to the trace and fed to the
/// noise gate. An empty block returns 0.0 rather than dividing by zero.
///
/// # Arguments
/// * `samples` - Captured sample block
///
/// # Returns
/// * √(mean of sample²), or 0.0 for an empty block
pub fn rms_amplitude(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_of_squares = samples.iter().map(|&s| s * s).sum::<f32>();
    (sum_of_squares / samples.len() as f32).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn raw_is_identity() {
        let block = vec![0.25, -0.5, 0.0, 1.0];
        let shaped = shape_waveform(&block, WaveShape::Raw);
        assert_eq!(shaped, block);
    }

    #[test]
    fn square_hard_limits_every_sample() {
        let block = vec![0.3, -0.3, 0.0001, -1.0, 1.0];
        let shaped = shape_waveform(&block, WaveShape::Square);
        assert_eq!(shaped, vec![1.0, -1.0, 1.0, -1.0, 1.0]);
    }

    #[test]
    fn square_maps_zero_to_negative_one() {
        let shaped = shape_waveform(&[0.0], WaveShape::Square);
        assert_eq!(shaped, vec![-1.0]);
    }

    #[test]
    fn sine_folded_wraps_samples() {
        // sin(0.25 * 2π) = 1, sin(0.5 * 2π) = 0
        let shaped = shape_waveform(&[0.0, 0.25, 0.5], WaveShape::SineFolded);
        assert!(shaped[0].abs() < EPS);
        assert!((shaped[1] - 1.0).abs() < EPS);
        assert!(shaped[2].abs() < 1e-5);
    }

    #[test]
    fn output_length_matches_input_length() {
        let block: Vec<f32> = (0..1024).map(|i| (i as f32 / 1024.0) - 0.5).collect();
        for shape in [WaveShape::Raw, WaveShape::Square, WaveShape::SineFolded] {
            assert_eq!(shape_waveform(&block, shape).len(), block.len());
        }
        for shape in [WaveShape::Raw, WaveShape::Square, WaveShape::SineFolded] {
            assert!(shape_waveform(&[], shape).is_empty());
        }
    }

    #[test]
    fn shaping_is_pure() {
        let block = vec![0.1, -0.7, 0.4];
        let first = shape_waveform(&block, WaveShape::SineFolded);
        let second = shape_waveform(&block, WaveShape::SineFolded);
        assert_eq!(first, second);
    }

    #[test]
    fn rms_of_empty_block_is_zero() {
        assert_eq!(rms_amplitude(&[]), 0.0);
    }

    #[test]
    fn rms_of_full_scale_alternation_is_one() {
        assert!((rms_amplitude(&[1.0, -1.0, 1.0, -1.0]) - 1.0).abs() < EPS);
    }

    #[test]
    fn rms_of_single_sample_is_its_magnitude() {
        assert!((rms_amplitude(&[0.5]) - 0.5).abs() < EPS);
        assert!((rms_amplitude(&[-0.5]) - 0.5).abs() < EPS);
    }
}
