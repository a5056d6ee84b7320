use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::forward, m)?)?;
    m.add_function(wrap_pyfunction!(transform::inverse, m)?)?;
    m.add_function(wrap_pyfunction!(transform::forward_points, m)?)?;
    m.add_function(wrap_pyfunction!(transform::inverse_points, m)?)?;
    Ok(())
}
