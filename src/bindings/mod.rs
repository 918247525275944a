mod ordinal;

pub use ordinal::*;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// Ordinal Stone - ordinal regression loss layers in Rust
#[pymodule]
pub fn _rust(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", "0.1.0")?;
    m.add_class::<ordinal::PyOrdinalCdfLoss>()?;
    Ok(())
}
