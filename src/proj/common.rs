//! Common helpers for the Redfearn Transverse Mercator series
//! (meridian arc, foot-point latitude, radii of curvature, longitude wrapping).
//!
//! Formulas follow Redfearn's formulation as published in the GDA technical manual.

use std::f64::consts::{PI, TAU};

use super::ellipsoid::Ellipsoid;

/// Beyond this span the wrapping loop would run for many iterations, so the
/// delta is reduced with a remainder first.
const WRAP_LOOP_LIMIT: f64 = 64.0 * PI;

/// Meridian arc length (metres) from the equator to latitude `phi` (radians).
///
/// Helmert's series in even powers of e, truncated after the e⁶ terms:
///   M = a·(A0·φ − A2·sin2φ + A4·sin4φ − A6·sin6φ)
pub fn meridian_arc(ellipsoid: &Ellipsoid, phi: f64) -> f64 {
    let e2 = ellipsoid.e2;
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    let a0 = 1.0 - (e2 / 4.0) - (3.0 * e4 / 64.0) - (5.0 * e6 / 256.0);
    let a2 = (3.0 / 8.0) * (e2 + e4 / 4.0 + 15.0 * e6 / 128.0);
    let a4 = (15.0 / 256.0) * (e4 + 3.0 * e6 / 4.0);
    let a6 = 35.0 * e6 / 3072.0;

    ellipsoid.a
        * (a0 * phi - a2 * (2.0 * phi).sin() + a4 * (4.0 * phi).sin() - a6 * (6.0 * phi).sin())
}

/// Foot-point latitude (radians): the latitude whose meridian arc equals `m` metres.
///
/// Series in the third flattening n, accurate to the n⁴ terms.
pub fn foot_point_latitude(ellipsoid: &Ellipsoid, m: f64) -> f64 {
    let n = ellipsoid.n;
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n2 * n2;

    // Mean length of a radian of the meridian.
    let g = ellipsoid.a * (1.0 - n) * (1.0 - n2) * (1.0 + 9.0 * n2 / 4.0 + 225.0 * n4 / 64.0);
    let sigma = m / g;

    sigma
        + (3.0 * n / 2.0 - 27.0 * n3 / 32.0) * (2.0 * sigma).sin()
        + (21.0 * n2 / 16.0 - 55.0 * n4 / 32.0) * (4.0 * sigma).sin()
        + (151.0 * n3 / 96.0) * (6.0 * sigma).sin()
        + (1097.0 * n4 / 512.0) * (8.0 * sigma).sin()
}

/// Wrap a longitude difference (radians) into [-π, π].
///
/// Repeated ±2π steps, so ±π themselves are left untouched.
pub fn wrap_longitude_delta(dlon: f64) -> f64 {
    let mut dlon = if dlon.abs() > WRAP_LOOP_LIMIT {
        dlon % TAU
    } else {
        dlon
    };
    while dlon > PI {
        dlon -= TAU;
    }
    while dlon < -PI {
        dlon += TAU;
    }
    dlon
}

/// Radii of curvature at a latitude, as used by both directions of the projection.
#[derive(Clone, Copy, Debug)]
pub struct Curvature {
    pub sin_lat: f64,
    pub cos_lat: f64,
    /// Prime vertical radius ν (metres)
    pub nu: f64,
    /// Meridional radius ρ (metres)
    pub rho: f64,
    /// ψ = ν / ρ
    pub psi: f64,
}

impl Curvature {
    pub fn at(ellipsoid: &Ellipsoid, lat: f64) -> Self {
        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        let w2 = 1.0 - ellipsoid.e2 * sin_lat * sin_lat;
        let nu = ellipsoid.a / w2.sqrt();
        let rho = nu * (1.0 - ellipsoid.e2) / w2;
        Self {
            sin_lat,
            cos_lat,
            nu,
            rho,
            psi: nu / rho,
        }
    }

    /// tan φ, taken as sin/cos.
    pub fn tan_lat(&self) -> f64 {
        self.sin_lat / self.cos_lat
    }
}
