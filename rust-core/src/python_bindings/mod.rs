//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod periodogram_bindings;

/// Python module definition
#[pymodule]
fn periodogram(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<periodogram_bindings::PyPeriodogram>()?;

    Ok(())
}
