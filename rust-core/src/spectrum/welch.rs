//! Welch power spectral density estimation
//!
//! Splits an interleaved block into segments of `N` complex samples with 50%
//! overlap, windows and transforms each one, and averages the (optionally
//! recentred) periodograms.

use super::fft::{transform, Direction};
use super::power::{power_spectrum, recenter_in_place};
use super::windowing::{apply_window_interleaved, generate_window, WindowType};
use crate::config::PeriodogramConfig;
use crate::error::{PeriodogramError, Result};

/// Welch estimator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelchOptions {
    /// Segment length in complex samples (power of two, at least 2)
    pub segment_len: usize,

    /// Window applied to every segment
    pub window_type: WindowType,

    /// Move bin 0 to the centre of every periodogram
    pub recenter: bool,
}

impl Default for WelchOptions {
    fn default() -> Self {
        Self {
            segment_len: 1024,
            window_type: WindowType::Hann,
            recenter: true,
        }
    }
}

impl From<&PeriodogramConfig> for WelchOptions {
    fn from(config: &PeriodogramConfig) -> Self {
        Self {
            segment_len: config.blocksize,
            window_type: WindowType::from_flag(config.window),
            recenter: config.shift,
        }
    }
}

/// Number of half-overlapping segments of `segment_len` in `total_samples`
///
/// `2*total/N - 1` with truncating division; `None` when no full segment fits.
pub fn segment_count(total_samples: usize, segment_len: usize) -> Option<usize> {
    if segment_len == 0 {
        return None;
    }
    (2 * total_samples / segment_len)
        .checked_sub(1)
        .filter(|&count| count > 0)
}

/// Averaged periodogram estimator
pub struct WelchEstimator {
    options: WelchOptions,
    window: Vec<f32>,
}

impl WelchEstimator {
    /// Create estimator, precomputing the window for the segment length
    pub fn new(options: WelchOptions) -> Result<Self> {
        if options.segment_len < 2 || !options.segment_len.is_power_of_two() {
            return Err(PeriodogramError::InvalidConfiguration(format!(
                "segment length must be a power of two of at least 2, got {}",
                options.segment_len
            )));
        }

        let window = generate_window(options.window_type, options.segment_len);
        Ok(Self { options, window })
    }

    /// Estimate the PSD of an interleaved buffer
    ///
    /// # Returns
    /// `segment_len` linear power values averaged over all segments
    pub fn estimate(&self, interleaved: &[f32]) -> Result<Vec<f32>> {
        let n = self.options.segment_len;
        if interleaved.len() % 2 != 0 {
            return Err(PeriodogramError::InvalidConfiguration(format!(
                "interleaved buffer must have even length, got {}",
                interleaved.len()
            )));
        }

        let total = interleaved.len() / 2;
        let segments = segment_count(total, n).ok_or(PeriodogramError::InsufficientSamples {
            available: total,
            required: n,
        })?;
        log::debug!("Welch estimate: {} samples, {} segments of {}", total, segments, n);

        let mut segment = vec![0.0f32; 2 * n];
        let mut power = vec![0.0f32; n];
        let mut accumulator = vec![0.0f64; n];

        for i in 0..segments {
            // Stride of N elements is N/2 complex samples
            let offset = n * i;
            segment.copy_from_slice(&interleaved[offset..offset + 2 * n]);

            if self.options.window_type != WindowType::Rectangular {
                apply_window_interleaved(&mut segment, &self.window)?;
            }
            transform(&mut segment, Direction::Forward)?;
            power_spectrum(&segment, &mut power)?;
            if self.options.recenter {
                recenter_in_place(&mut power);
            }

            for (acc, &p) in accumulator.iter_mut().zip(power.iter()) {
                *acc += p as f64;
            }
        }

        let scale = 1.0 / segments as f64;
        Ok(accumulator.iter().map(|&acc| (acc * scale) as f32).collect())
    }

    /// Segment length (and output length)
    pub fn segment_len(&self) -> usize {
        self.options.segment_len
    }

    pub fn options(&self) -> &WelchOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(segment_len: usize, window_type: WindowType, recenter: bool) -> WelchOptions {
        WelchOptions {
            segment_len,
            window_type,
            recenter,
        }
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count(16384, 1024), Some(31));
        assert_eq!(segment_count(1536, 1024), Some(2));
        assert_eq!(segment_count(1024, 1024), Some(1));
        assert_eq!(segment_count(1023, 1024), None);
        assert_eq!(segment_count(100, 1024), None);
        assert_eq!(segment_count(100, 0), None);
    }

    #[test]
    fn test_insufficient_samples() {
        let estimator = WelchEstimator::new(WelchOptions::default()).unwrap();
        let data = vec![1.0f32; 2 * 1000];
        assert_eq!(
            estimator.estimate(&data),
            Err(PeriodogramError::InsufficientSamples {
                available: 1000,
                required: 1024
            })
        );
    }

    #[test]
    fn test_rejects_bad_segment_len() {
        for &n in &[0usize, 1, 1000] {
            let result = WelchEstimator::new(options(n, WindowType::Hann, true));
            assert!(matches!(result, Err(PeriodogramError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn test_two_segments_average() {
        // 3N/2 samples: segments start at sample 0 and N/2
        let n = 8;
        let estimator = WelchEstimator::new(options(n, WindowType::Rectangular, false)).unwrap();

        // Pair k holds the constant k / 4 + 1 in its first element
        let data: Vec<f32> = (0..3 * n / 2)
            .flat_map(|k| [(k / 4 + 1) as f32, 0.0])
            .collect();
        let psd = estimator.estimate(&data).unwrap();

        // Bin 0 power is |sum|^2 per segment
        let first: f32 = (0..n).map(|k| (k / 4 + 1) as f32).sum();
        let second: f32 = (n / 2..n / 2 + n).map(|k| (k / 4 + 1) as f32).sum();
        let expected = (first * first + second * second) / 2.0;
        assert!((psd[0] - expected).abs() < 1e-3);
    }

    #[test]
    fn test_constant_input_concentrates_at_dc() {
        let n = 64;
        let estimator = WelchEstimator::new(options(n, WindowType::Rectangular, true)).unwrap();
        let data: Vec<f32> = (0..4 * n).flat_map(|_| [1.0f32, 0.0]).collect();
        let psd = estimator.estimate(&data).unwrap();

        // Rectangular window: all energy in the DC bin, now at n/2
        assert!((psd[n / 2] - (n * n) as f32).abs() < 1e-2);
        for (k, &p) in psd.iter().enumerate() {
            if k != n / 2 {
                assert!(p < 1e-6, "bin {} has power {}", k, p);
            }
        }
    }

    #[test]
    fn test_output_non_negative() {
        let n = 128;
        let estimator = WelchEstimator::new(options(n, WindowType::Hann, true)).unwrap();
        let data: Vec<f32> = (0..2 * 5 * n).map(|k| ((k as f32) * 0.13).sin()).collect();
        let psd = estimator.estimate(&data).unwrap();
        assert_eq!(psd.len(), n);
        assert!(psd.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_odd_interleaved_length() {
        let estimator = WelchEstimator::new(options(4, WindowType::Hann, true)).unwrap();
        assert!(matches!(
            estimator.estimate(&[0.0; 9]),
            Err(PeriodogramError::InvalidConfiguration(_))
        ));
    }
}
