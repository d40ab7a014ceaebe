//! # Plot Geometry Module
//!
//! Maps a shaped sample block onto polyline points for whatever canvas
//! the host draws with. Pure geometry only; stroking the path is the
//! presentation layer's job.

/// One polyline vertex in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f32,
    pub y: f32,
}

/// Layout parameters for mapping samples onto a plot area.
///
/// The wave is centered vertically: a sample of 0.0 sits on the middle
/// line, ±1.0 reaches the edges when the amplitude scale is 1.0. An
/// amplitude scale below `flatten_threshold` draws a flat line instead
/// of amplifying noise; otherwise the scale is clamped up to
/// `min_amplitude_scale` so quiet signals stay visible.
#[derive(Debug, Clone, Copy)]
pub struct PlotLayout {
    pub width: f32,
    pub height: f32,
    /// Vertical gain applied to sample values
    pub amplitude_scale: f32,
    /// Horizontal stretch applied to the per-sample step
    pub width_scale: f32,
    /// Amplitude scale below which the trace is flattened to the midline
    pub flatten_threshold: f32,
    /// Minimum wave height once above the flatten threshold
    pub min_amplitude_scale: f32,
    /// Minimum horizontal step between points
    pub min_step: f32,
}

impl PlotLayout {
    /// Layout with the stock clamping constants.
    pub fn new(width: f32, height: f32, amplitude_scale: f32, width_scale: f32) -> Self {
        Self {
            width,
            height,
            amplitude_scale,
            width_scale,
            flatten_threshold: 0.01,
            min_amplitude_scale: 0.1,
            min_step: 0.5,
        }
    }

    fn step(&self, sample_count: usize) -> f32 {
        let count = sample_count.max(1) as f32;
        ((self.width / count) * self.width_scale).max(self.min_step)
    }

    fn effective_amplitude_scale(&self) -> f32 {
        if self.amplitude_scale < self.flatten_threshold {
            0.0
        } else {
            self.amplitude_scale.max(self.min_amplitude_scale)
        }
    }
}

/// Lays out one shaped block as polyline points, left to right.
///
/// `x` advances by the clamped per-sample step; `y` is the vertical
/// midline minus the scaled sample value (screen coordinates grow
/// downward). An empty block yields no points.
pub fn polyline(samples: &[f32], layout: &PlotLayout) -> Vec<PlotPoint> {
    let mid = layout.height / 2.0;
    let step = layout.step(samples.len());
    let scale = layout.effective_amplitude_scale();

    samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| PlotPoint {
            x: i as f32 * step,
            y: mid - sample * mid * scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_per_sample() {
        let layout = PlotLayout::new(100.0, 50.0, 1.0, 1.0);
        assert_eq!(polyline(&[0.0; 10], &layout).len(), 10);
        assert!(polyline(&[], &layout).is_empty());
    }

    #[test]
    fn zero_samples_sit_on_the_midline() {
        let layout = PlotLayout::new(100.0, 50.0, 1.0, 1.0);
        let points = polyline(&[0.0, 0.0], &layout);
        for point in points {
            assert_eq!(point.y, 25.0);
        }
    }

    #[test]
    fn positive_samples_rise_toward_the_top() {
        // Screen y grows downward, so +1.0 lands above the midline.
        let layout = PlotLayout::new(100.0, 50.0, 1.0, 1.0);
        let points = polyline(&[1.0, -1.0], &layout);
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[1].y, 50.0);
    }

    #[test]
    fn x_advances_by_the_layout_step() {
        let layout = PlotLayout::new(100.0, 50.0, 1.0, 1.0);
        let points = polyline(&[0.0; 4], &layout);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[1].x, 25.0);
        assert_eq!(points[3].x, 75.0);
    }

    #[test]
    fn narrow_plots_clamp_the_step() {
        // 10px across 1000 samples would collapse; the step floors at 0.5.
        let layout = PlotLayout::new(10.0, 50.0, 1.0, 1.0);
        let points = polyline(&[0.0; 1000], &layout);
        assert_eq!(points[1].x - points[0].x, 0.5);
    }

    #[test]
    fn tiny_amplitude_scale_flattens_the_trace() {
        let layout = PlotLayout::new(100.0, 50.0, 0.005, 1.0);
        let points = polyline(&[1.0, -1.0], &layout);
        assert_eq!(points[0].y, 25.0);
        assert_eq!(points[1].y, 25.0);
    }

    #[test]
    fn small_but_visible_scale_clamps_up() {
        let layout = PlotLayout::new(100.0, 50.0, 0.02, 1.0);
        let points = polyline(&[1.0], &layout);
        // Clamped to min_amplitude_scale 0.1: y = 25 - 25 * 0.1
        assert!((points[0].y - 22.5).abs() < 1e-6);
    }
}
