//! In-place radix-2 FFT over interleaved buffers
//!
//! The buffer holds `N` complex values as `2*N` consecutive floats, each
//! adjacent pair read as (real, imaginary). `N` must be a power of two.

use crate::error::{PeriodogramError, Result};
use std::f64::consts::PI;

/// Sign of the transform kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Kernel `exp(+2πi·jk/N)`
    ///
    /// Fed with imaginary-first interleaving this yields the conventional
    /// spectrum of the original samples (see [`crate::stream::processor`]).
    Forward,

    /// Kernel `exp(-2πi·jk/N)`, unscaled
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Inverse => -1.0,
        }
    }
}

/// Number of complex slots in an interleaved buffer, if it is a valid FFT size
pub fn complex_len(data: &[f32]) -> Result<usize> {
    if data.len() % 2 != 0 {
        return Err(PeriodogramError::InvalidConfiguration(format!(
            "interleaved buffer must have even length, got {}",
            data.len()
        )));
    }
    let n = data.len() / 2;
    if n == 0 || !n.is_power_of_two() {
        return Err(PeriodogramError::InvalidConfiguration(format!(
            "transform length must be a power of two, got {}",
            n
        )));
    }
    Ok(n)
}

/// Transform `data` in place
///
/// No normalization is applied in either direction.
pub fn transform(data: &mut [f32], direction: Direction) -> Result<()> {
    let n = complex_len(data)?;

    bit_reverse_permute(data, n);
    danielson_lanczos(data, direction.sign());

    Ok(())
}

/// Reorder complex slots into bit-reversed index order
fn bit_reverse_permute(data: &mut [f32], n: usize) {
    let mut j = 0usize;
    for i in 0..n.saturating_sub(1) {
        if i < j {
            data.swap(2 * i, 2 * j);
            data.swap(2 * i + 1, 2 * j + 1);
        }
        let mut m = n >> 1;
        while j & m != 0 {
            j ^= m;
            m >>= 1;
        }
        j |= m;
    }
}

/// Butterfly stages with twiddles from the half-angle recurrence
fn danielson_lanczos(data: &mut [f32], sign: f64) {
    let len = data.len();
    let mut mmax = 2;

    while len > mmax {
        let istep = mmax << 1;
        let theta = sign * (2.0 * PI / mmax as f64);
        let half = (0.5 * theta).sin();
        let wpr = -2.0 * half * half;
        let wpi = theta.sin();
        let mut wr = 1.0f64;
        let mut wi = 0.0f64;

        for m in (0..mmax).step_by(2) {
            for i in (m..len).step_by(istep) {
                let j = i + mmax;
                let (jr, ji) = (data[j] as f64, data[j + 1] as f64);
                let tempr = wr * jr - wi * ji;
                let tempi = wr * ji + wi * jr;
                let (ir, ii) = (data[i] as f64, data[i + 1] as f64);
                data[j] = (ir - tempr) as f32;
                data[j + 1] = (ii - tempi) as f32;
                data[i] = (ir + tempr) as f32;
                data[i + 1] = (ii + tempi) as f32;
            }
            let wtemp = wr;
            wr = wtemp * wpr - wi * wpi + wr;
            wi = wi * wpr + wtemp * wpi + wi;
        }
        mmax = istep;
    }
}
