pub mod common;
pub mod ellipsoid;
pub mod transverse_mercator;

use crate::error::ProjError;

/// A grid projection between geodetic radians and projected units.
///
/// Implementations are immutable, so one value can be shared across threads.
/// Non-finite inputs are rejected with [`ProjError::InvalidInput`].
pub trait Projection: Send + Sync {
    /// Longitude and latitude in radians to (easting, northing).
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError>;

    /// Easting and northing to (longitude, latitude) in radians.
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError>;

    /// Projects `(lon, lat)` pairs in place, stopping at the first failing point.
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1)?;
        }
        Ok(())
    }

    /// Unprojects `(easting, northing)` pairs in place.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }

    /// The ellipsoid the series are evaluated on.
    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;
}

/// A point on the ellipsoid. Radians or degrees depending on the layer that returns it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCoord {
    pub latitude: f64,
    pub longitude: f64,
}

/// A grid point relative to the projection's false origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedCoord {
    pub easting: f64,
    pub northing: f64,
}
