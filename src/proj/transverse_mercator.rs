//! Transverse Mercator projection — Redfearn's series.
//!
//! Forward and inverse follow Redfearn's formulation as expressed in the GDA
//! technical manual (the same series used by LINZ for NZTM2000). Accuracy is
//! sub-millimetre within a few degrees of the central meridian and degrades
//! smoothly further out; no zone-width limit is enforced.

use crate::error::ProjError;
use crate::proj::common::{foot_point_latitude, meridian_arc, wrap_longitude_delta, Curvature};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projection;

/// An immutable Transverse Mercator definition.
///
/// The meridian arc at the origin latitude is cached at construction; the
/// `with_*` builders return a new definition with it recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    lon0: f64,
    lat0: f64,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
    unit_to_meter: f64,
    // Meridian arc at lat0 (metres)
    om: f64,
}

impl TransverseMercator {
    /// Build a definition. Angles are in radians, false origin in projection units.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        lat0: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
        unit_to_meter: f64,
    ) -> Self {
        let om = meridian_arc(&ellipsoid, lat0);
        Self {
            ellipsoid,
            lon0,
            lat0,
            k0,
            false_easting,
            false_northing,
            unit_to_meter,
            om,
        }
    }

    /// Like [`TransverseMercator::new`], but rejects parameters that cannot
    /// describe a projection.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        lat0: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
        unit_to_meter: f64,
    ) -> Result<Self, ProjError> {
        if !(ellipsoid.a.is_finite() && ellipsoid.a > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "semi-major axis must be positive, got {}",
                ellipsoid.a
            )));
        }
        if !(ellipsoid.rf.is_finite() && ellipsoid.rf >= 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "inverse flattening must be >= 0, got {}",
                ellipsoid.rf
            )));
        }
        if !(k0.is_finite() && k0 > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "scale factor must be positive, got {k0}"
            )));
        }
        if !(unit_to_meter.is_finite() && unit_to_meter > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "unit-to-metre factor must be positive, got {unit_to_meter}"
            )));
        }
        for (name, value) in [
            ("central meridian", lon0),
            ("origin latitude", lat0),
            ("false easting", false_easting),
            ("false northing", false_northing),
        ] {
            if !value.is_finite() {
                return Err(ProjError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(Self::new(
            ellipsoid,
            lon0,
            lat0,
            k0,
            false_easting,
            false_northing,
            unit_to_meter,
        ))
    }

    /// Same projection with a different origin latitude (radians).
    pub fn with_origin_latitude(self, lat0: f64) -> Self {
        Self::new(
            self.ellipsoid,
            self.lon0,
            lat0,
            self.k0,
            self.false_easting,
            self.false_northing,
            self.unit_to_meter,
        )
    }

    /// Same projection on a different ellipsoid.
    pub fn with_ellipsoid(self, ellipsoid: Ellipsoid) -> Self {
        Self::new(
            ellipsoid,
            self.lon0,
            self.lat0,
            self.k0,
            self.false_easting,
            self.false_northing,
            self.unit_to_meter,
        )
    }

    pub fn central_meridian(&self) -> f64 {
        self.lon0
    }

    pub fn origin_latitude(&self) -> f64 {
        self.lat0
    }

    pub fn scale_factor(&self) -> f64 {
        self.k0
    }

    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    pub fn unit_to_meter(&self) -> f64 {
        self.unit_to_meter
    }

    /// Meridian arc from the equator to the origin latitude (metres).
    pub fn origin_meridian_arc(&self) -> f64 {
        self.om
    }

    /// Geodetic (radians) to grid coordinates, no input checks.
    fn geod_to_grid(&self, lon: f64, lat: f64) -> (f64, f64) {
        let sf = self.k0;
        let utom = self.unit_to_meter;

        let dlon = wrap_longitude_delta(lon - self.lon0);
        let m = meridian_arc(&self.ellipsoid, lat);

        let c = Curvature::at(&self.ellipsoid, lat);
        let (eta, psi, clt) = (c.nu, c.psi, c.cos_lat);

        let wc = clt * dlon;
        let wc2 = wc * wc;

        let t = c.tan_lat();
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t2 * t4;

        // Easting
        let trm1 = (psi - t2) / 6.0;
        let trm2 = (((4.0 * (1.0 - 6.0 * t2) * psi + (1.0 + 8.0 * t2)) * psi - 2.0 * t2) * psi
            + t4)
            / 120.0;
        let trm3 = (61.0 - 479.0 * t2 + 179.0 * t4 - t6) / 5040.0;

        let gce = (sf * eta * dlon * clt) * (((trm3 * wc2 + trm2) * wc2 + trm1) * wc2 + 1.0);
        let easting = gce / utom + self.false_easting;

        // Northing
        let trm1 = 1.0 / 2.0;
        let trm2 = ((4.0 * psi + 1.0) * psi - t2) / 24.0;
        let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 28.0 * (1.0 - 6.0 * t2)) * psi
            + (1.0 - 32.0 * t2))
            * psi
            - 2.0 * t2)
            * psi
            + t4)
            / 720.0;
        let trm4 = (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6) / 40320.0;

        let gcn = (eta * t) * ((((trm4 * wc2 + trm3) * wc2 + trm2) * wc2 + trm1) * wc2);
        let northing = (gcn + m - self.om) * sf / utom + self.false_northing;

        (easting, northing)
    }

    /// Grid coordinates to geodetic (radians), no input checks.
    fn grid_to_geod(&self, easting: f64, northing: f64) -> (f64, f64) {
        let sf = self.k0;
        let utom = self.unit_to_meter;

        // Meridian arc of the foot point
        let cn1 = (northing - self.false_northing) * utom / sf + self.om;
        let fphi = foot_point_latitude(&self.ellipsoid, cn1);

        let c = Curvature::at(&self.ellipsoid, fphi);
        let (eta, rho, psi, clt) = (c.nu, c.rho, c.psi, c.cos_lat);

        let e = (easting - self.false_easting) * utom;
        let x = e / (eta * sf);
        let x2 = x * x;

        let t = c.tan_lat();
        let t2 = t * t;
        let t4 = t2 * t2;

        // Latitude
        let trm1 = 1.0 / 2.0;
        let trm2 = ((-4.0 * psi + 9.0 * (1.0 - t2)) * psi + 12.0 * t2) / 24.0;
        let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 12.0 * (21.0 - 71.0 * t2)) * psi
            + 15.0 * ((15.0 * t2 - 98.0) * t2 + 15.0))
            * psi
            + 180.0 * ((-3.0 * t2 + 5.0) * t2))
            * psi
            + 360.0 * t4)
            / 720.0;
        let trm4 = (((1575.0 * t2 + 4095.0) * t2 + 3633.0) * t2 + 1385.0) / 40320.0;

        let lat = fphi + (t * x * e / (sf * rho)) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

        // Longitude
        let trm1 = 1.0;
        let trm2 = (psi + 2.0 * t2) / 6.0;
        let trm3 = (((-4.0 * (1.0 - 6.0 * t2) * psi + (9.0 - 68.0 * t2)) * psi + 72.0 * t2) * psi
            + 24.0 * t4)
            / 120.0;
        let trm4 = (((720.0 * t2 + 1320.0) * t2 + 662.0) * t2 + 61.0) / 5040.0;

        let lon = self.lon0 - (x / clt) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

        (lon, lat)
    }
}

impl Projection for TransverseMercator {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let lon = ProjError::check_finite("longitude", lon)?;
        let lat = ProjError::check_finite("latitude", lat)?;
        Ok(self.geod_to_grid(lon, lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let x = ProjError::check_finite("easting", x)?;
        let y = ProjError::check_finite("northing", y)?;
        Ok(self.grid_to_geod(x, y))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
