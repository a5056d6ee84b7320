//! PyO3 bindings for NZTM2000 coordinate conversion.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::ProjError;
use crate::nztm;

fn to_py_err(e: ProjError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Convert one latitude/longitude pair (degrees) to NZTM2000.
///
/// Returns:
///     Tuple of (easting, northing) in metres.
#[pyfunction]
pub fn forward(latitude: f64, longitude: f64) -> PyResult<(f64, f64)> {
    let p = nztm::forward(latitude, longitude).map_err(to_py_err)?;
    Ok((p.easting, p.northing))
}

/// Convert one NZTM2000 easting/northing pair (metres) to latitude/longitude.
///
/// Returns:
///     Tuple of (latitude, longitude) in degrees.
#[pyfunction]
pub fn inverse(easting: f64, northing: f64) -> PyResult<(f64, f64)> {
    let g = nztm::inverse(easting, northing).map_err(to_py_err)?;
    Ok((g.latitude, g.longitude))
}

/// Pair two equal-length arrays into a coordinate buffer.
fn zip_arrays(
    a: &PyReadonlyArray1<'_, f64>,
    b: &PyReadonlyArray1<'_, f64>,
) -> PyResult<Vec<(f64, f64)>> {
    let a_view = a.as_array();
    let b_view = b.as_array();

    let n = a_view.len();
    let b_len = b_view.len();
    if n != b_len {
        return Err(PyValueError::new_err(format!(
            "input arrays must have same length, got {} and {}",
            n, b_len
        )));
    }

    Ok(a_view
        .iter()
        .zip(b_view.iter())
        .map(|(&ai, &bi)| (ai, bi))
        .collect())
}

#[allow(clippy::type_complexity)]
fn unzip_arrays<'py>(
    py: Python<'py>,
    coords: Vec<(f64, f64)>,
) -> (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
    let (xs, ys): (Vec<f64>, Vec<f64>) = coords.into_iter().unzip();
    (
        PyArray1::from_owned_array(py, ndarray::Array1::from(xs)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ys)),
    )
}

/// Convert arrays of latitude/longitude (degrees) to NZTM2000.
///
/// Args:
///     latitude: 1D array of latitudes.
///     longitude: 1D array of longitudes.
///
/// Returns:
///     Tuple of (easting, northing) arrays in metres.
#[pyfunction]
#[pyo3(signature = (latitude, longitude))]
#[allow(clippy::type_complexity)]
pub fn forward_points<'py>(
    py: Python<'py>,
    latitude: PyReadonlyArray1<'py, f64>,
    longitude: PyReadonlyArray1<'py, f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let mut coords = zip_arrays(&latitude, &longitude)?;

    let coords = py.detach(move || -> PyResult<Vec<(f64, f64)>> {
        nztm::forward_batch(&mut coords).map_err(to_py_err)?;
        Ok(coords)
    })?;

    Ok(unzip_arrays(py, coords))
}

/// Convert arrays of NZTM2000 easting/northing (metres) to latitude/longitude.
///
/// Args:
///     easting: 1D array of eastings.
///     northing: 1D array of northings.
///
/// Returns:
///     Tuple of (latitude, longitude) arrays in degrees.
#[pyfunction]
#[pyo3(signature = (easting, northing))]
#[allow(clippy::type_complexity)]
pub fn inverse_points<'py>(
    py: Python<'py>,
    easting: PyReadonlyArray1<'py, f64>,
    northing: PyReadonlyArray1<'py, f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let mut coords = zip_arrays(&easting, &northing)?;

    let coords = py.detach(move || -> PyResult<Vec<(f64, f64)>> {
        nztm::inverse_batch(&mut coords).map_err(to_py_err)?;
        Ok(coords)
    })?;

    Ok(unzip_arrays(py, coords))
}
