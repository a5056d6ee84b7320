//! NZTM2000 Transverse Mercator projection.
//!
//! [`nztm::forward`] and [`nztm::inverse`] convert between latitude/longitude
//! in degrees and NZTM2000 easting/northing in metres. The general
//! [`proj::transverse_mercator::TransverseMercator`] works in radians and can be
//! configured for any Transverse Mercator grid.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;
pub mod nztm;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use error::ProjError;
pub use proj::{GeodeticCoord, ProjectedCoord};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "nztm")]
fn nztm_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
