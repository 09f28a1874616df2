//! Window functions for segment tapering
//!
//! Windows are applied to interleaved buffers: both elements of a complex
//! pair are scaled by the coefficient of that sample position.

use crate::error::{PeriodogramError, Result};
use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5*(1 - cos(2π(n+1)/(N+1)))
    ///
    /// Same as `hann(N)` in MATLAB/Octave. Never exactly zero at the edges.
    Hann,

    /// Rectangular window (no windowing)
    Rectangular,
}

impl WindowType {
    /// Hann when `enabled`, rectangular otherwise
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            WindowType::Hann
        } else {
            WindowType::Rectangular
        }
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f32> {
    match window_type {
        WindowType::Hann => hann_window(length),
        WindowType::Rectangular => vec![1.0; length],
    }
}

/// Hann window of `length` samples
pub fn hann_window(length: usize) -> Vec<f32> {
    let denom = (length + 1) as f64;
    (0..length)
        .map(|n| {
            let angle = 2.0 * PI * (n + 1) as f64 / denom;
            (0.5 * (1.0 - angle.cos())) as f32
        })
        .collect()
}

/// Apply window in-place to an interleaved buffer of `window.len()` samples
pub fn apply_window_interleaved(data: &mut [f32], window: &[f32]) -> Result<()> {
    if data.len() != 2 * window.len() {
        return Err(PeriodogramError::InvalidConfiguration(format!(
            "window of {} samples does not fit an interleaved buffer of {} values",
            window.len(),
            data.len()
        )));
    }

    for (pair, &w) in data.chunks_exact_mut(2).zip(window.iter()) {
        pair[0] *= w;
        pair[1] *= w;
    }
    Ok(())
}
