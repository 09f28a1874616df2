//! Periodogram - Streaming Welch PSD Estimator
//! 
//! Averaged, windowed power spectral density of a complex sample stream,
//! computed block by block with an in-place radix-2 FFT.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod config;
pub mod error;
pub mod spectrum;
pub mod stream;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use config::{ConfigHandle, PeriodogramConfig};
pub use error::{PeriodogramError, Result};
pub use spectrum::{WelchEstimator, WelchOptions, WindowType};
pub use stream::{ComplexBlock, DataBlock, Periodogram, PowerBlock};
pub use num_complex::Complex32;
