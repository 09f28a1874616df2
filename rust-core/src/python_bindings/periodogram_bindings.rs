//! Python bindings for the periodogram stage

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use num_complex::Complex32;
use crate::config::PeriodogramConfig;
use crate::error::PeriodogramError;
use crate::stream::{ComplexBlock, Periodogram};

fn to_py_err(err: PeriodogramError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Welch PSD estimator exposed to Python
#[pyclass(name = "Periodogram")]
pub struct PyPeriodogram {
    periodogram: Periodogram,
}

#[pymethods]
impl PyPeriodogram {
    /// Create a new periodogram
    /// 
    /// Args:
    ///     number_of_complex_samples: Expected input block length
    ///     blocksize: FFT and output length (power of 2)
    ///     shift: Centre the zero-frequency bin
    ///     window: Apply a Hann window to each segment
    #[new]
    #[pyo3(signature = (number_of_complex_samples=16384, blocksize=1024, shift=true, window=true))]
    fn new(
        number_of_complex_samples: usize,
        blocksize: usize,
        shift: bool,
        window: bool,
    ) -> PyResult<Self> {
        let config = PeriodogramConfig {
            number_of_complex_samples,
            blocksize,
            shift,
            window,
        };

        Ok(Self {
            periodogram: Periodogram::new(config).map_err(to_py_err)?,
        })
    }
    
    /// Compute the log-power spectrum of one block
    /// 
    /// Args:
    ///     samples: complex64 numpy array
    ///     timestamp: Block timestamp in seconds
    ///     sample_rate: Sample rate in Hz
    /// 
    /// Returns:
    ///     float32 numpy array of `blocksize` values in dB
    #[pyo3(signature = (samples, timestamp=0.0, sample_rate=1.0))]
    fn process<'py>(
        &mut self,
        py: Python<'py>,
        samples: PyReadonlyArray1<Complex32>,
        timestamp: f64,
        sample_rate: f64,
    ) -> PyResult<&'py PyArray1<f32>> {
        let data = samples
            .as_slice()
            .map_err(|e| PyValueError::new_err(e.to_string()))?
            .to_vec();
        let input = ComplexBlock::new(data, timestamp, sample_rate);
        let output = self.periodogram.process_block(&input).map_err(to_py_err)?;

        Ok(PyArray1::from_vec(py, output.data))
    }
    
    /// Stage a dynamic parameter update for the next block
    fn set_parameter(&self, name: &str, value: &str) -> PyResult<()> {
        self.periodogram.set_parameter(name, value).map_err(to_py_err)
    }
    
    /// Get current output block size
    fn blocksize(&self) -> usize {
        self.periodogram.config().blocksize
    }
}
