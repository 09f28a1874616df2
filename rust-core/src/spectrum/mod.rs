//! Spectral estimation: FFT, windowing, power, averaging and dB scaling

pub mod fft;
pub mod windowing;
pub mod power;
pub mod welch;
pub mod scale;

pub use fft::{transform, Direction};
pub use windowing::{apply_window_interleaved, generate_window, hann_window, WindowType};
pub use power::{power_spectrum, recenter, recenter_in_place};
pub use welch::{segment_count, WelchEstimator, WelchOptions};
pub use scale::{log_compress, POWER_FLOOR};
