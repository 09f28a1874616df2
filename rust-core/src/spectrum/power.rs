//! Power spectrum and fftshift recentring

use crate::error::{PeriodogramError, Result};

/// Magnitude-squared of every complex pair in a transformed buffer
///
/// `out[k] = data[2k]² + data[2k+1]²`, unscaled.
pub fn power_spectrum(data: &[f32], out: &mut [f32]) -> Result<()> {
    if data.len() != 2 * out.len() {
        return Err(PeriodogramError::BlockLength {
            expected: 2 * out.len(),
            actual: data.len(),
        });
    }

    for (p, pair) in out.iter_mut().zip(data.chunks_exact(2)) {
        *p = pair[0] * pair[0] + pair[1] * pair[1];
    }
    Ok(())
}

/// Rotate the spectrum by half its length so bin 0 lands in the centre
pub fn recenter(spectrum: &[f32]) -> Vec<f32> {
    let mut out = spectrum.to_vec();
    recenter_in_place(&mut out);
    out
}

/// In-place variant of [`recenter`]
pub fn recenter_in_place(spectrum: &mut [f32]) {
    let half = spectrum.len() / 2;
    spectrum.rotate_left(half);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_pairs() {
        let data = vec![3.0, 4.0, -1.0, 0.0, 0.0, -2.0];
        let mut out = vec![0.0; 3];
        power_spectrum(&data, &mut out).unwrap();
        assert_eq!(out, vec![25.0, 1.0, 4.0]);
    }

    #[test]
    fn test_power_non_negative() {
        let data: Vec<f32> = (0..512).map(|k| ((k as f32) * 0.91).sin() * 1e3 - 7.0).collect();
        let mut out = vec![0.0; 256];
        power_spectrum(&data, &mut out).unwrap();
        assert!(out.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_power_length_mismatch() {
        let mut out = vec![0.0; 4];
        assert!(power_spectrum(&[1.0; 6], &mut out).is_err());
    }

    #[test]
    fn test_recenter_moves_second_half_first() {
        let spectrum = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(recenter(&spectrum), vec![4.0, 5.0, 6.0, 7.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_recenter_twice_is_identity() {
        let spectrum: Vec<f32> = (0..1024).map(|k| k as f32 * 0.5).collect();
        assert_eq!(recenter(&recenter(&spectrum)), spectrum);
    }
}
