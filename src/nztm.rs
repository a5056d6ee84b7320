//! New Zealand Transverse Mercator 2000 (EPSG:2193).
//!
//! Degrees in, degrees out. The projection definition is built once, on first
//! use, and shared for the life of the process.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::error::ProjError;
use crate::proj::ellipsoid::{Ellipsoid, GRS80};
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::{GeodeticCoord, ProjectedCoord, Projection};

pub const NZTM_A: f64 = GRS80.a;
pub const NZTM_RF: f64 = GRS80.rf;
/// Central meridian (degrees)
pub const NZTM_CM: f64 = 173.0;
/// Origin latitude (degrees)
pub const NZTM_OLAT: f64 = 0.0;
pub const NZTM_SF: f64 = 0.9996;
pub const NZTM_FE: f64 = 1_600_000.0;
pub const NZTM_FN: f64 = 10_000_000.0;
pub const NZTM_UTOM: f64 = 1.0;

/// Degrees per radian. Conversions divide or multiply by this factor so results
/// match the published NZTM2000 reference values bit for bit.
const RAD2DEG: f64 = 180.0 / PI;

static NZTM: OnceLock<TransverseMercator> = OnceLock::new();

/// The NZTM2000 projection definition.
pub fn projection() -> &'static TransverseMercator {
    NZTM.get_or_init(|| {
        TransverseMercator::new(
            Ellipsoid::new(NZTM_A, NZTM_RF),
            NZTM_CM / RAD2DEG,
            NZTM_OLAT / RAD2DEG,
            NZTM_SF,
            NZTM_FE,
            NZTM_FN,
            NZTM_UTOM,
        )
    })
}

/// Latitude/longitude (degrees) to NZTM2000 easting/northing (metres).
pub fn forward(latitude: f64, longitude: f64) -> Result<ProjectedCoord, ProjError> {
    let (easting, northing) = projection().forward(longitude / RAD2DEG, latitude / RAD2DEG)?;
    Ok(ProjectedCoord { easting, northing })
}

/// NZTM2000 easting/northing (metres) to latitude/longitude (degrees).
pub fn inverse(easting: f64, northing: f64) -> Result<GeodeticCoord, ProjError> {
    let (lon, lat) = projection().inverse(easting, northing)?;
    Ok(GeodeticCoord {
        latitude: lat * RAD2DEG,
        longitude: lon * RAD2DEG,
    })
}

/// In-place forward transform of `(latitude, longitude)` pairs into
/// `(easting, northing)`.
///
/// Stops at the first invalid point; entries before it are already converted.
pub fn forward_batch(coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
    for c in coords.iter_mut() {
        let p = forward(c.0, c.1)?;
        *c = (p.easting, p.northing);
    }
    Ok(())
}

/// In-place inverse transform of `(easting, northing)` pairs into
/// `(latitude, longitude)`.
pub fn inverse_batch(coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
    for c in coords.iter_mut() {
        let g = inverse(c.0, c.1)?;
        *c = (g.latitude, g.longitude);
    }
    Ok(())
}
