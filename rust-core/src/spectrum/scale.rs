//! Decibel compression of averaged power spectra

use crate::error::{PeriodogramError, Result};

/// Smallest power converted to dB; anything at or below maps to -200 dB
pub const POWER_FLOOR: f32 = 1e-20;

/// Replace every power value `p` with `10*log10(p)`
///
/// Non-finite input is rejected before anything is modified. Zero or negative
/// power (float underflow) is clamped to [`POWER_FLOOR`].
pub fn log_compress(values: &mut [f32]) -> Result<()> {
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PeriodogramError::NumericAnomaly { index, value });
    }

    for p in values.iter_mut() {
        *p = 10.0 * p.max(POWER_FLOOR).log10();
    }
    Ok(())
}
