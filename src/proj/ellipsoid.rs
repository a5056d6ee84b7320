/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Inverse flattening; 0 means a sphere
    pub rf: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// Second eccentricity squared: e^2 / (1 - e^2)
    pub ep2: f64,
    /// Third flattening: f / (2 - f)
    pub n: f64,
}

impl Ellipsoid {
    /// Build an ellipsoid from its semi-major axis and inverse flattening.
    pub const fn new(a: f64, rf: f64) -> Self {
        let f = if rf != 0.0 { 1.0 / rf } else { 0.0 };
        let e2 = 2.0 * f - f * f;
        let ep2 = e2 / (1.0 - e2);
        let n = f / (2.0 - f);
        Self {
            a,
            rf,
            f,
            e2,
            ep2,
            n,
        }
    }

    /// A sphere of the given radius.
    pub const fn sphere(radius: f64) -> Self {
        Self::new(radius, 0.0)
    }

    pub fn is_sphere(&self) -> bool {
        self.f == 0.0
    }
}

/// GRS80, the ellipsoid of the NZGD2000 datum.
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_222_101);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grs80_constants() {
        let grs80 = GRS80;
        assert_relative_eq!(grs80.a, 6_378_137.0);
        assert_relative_eq!(grs80.f, 1.0 / 298.257_222_101, epsilon = 1e-18);
        assert_relative_eq!(grs80.e2, 0.006_694_380_022_90, epsilon = 1e-14);
        assert_relative_eq!(grs80.ep2, 0.006_739_496_775_48, epsilon = 1e-14);
        assert_relative_eq!(grs80.n, 0.001_679_220_394_628, epsilon = 1e-14);
    }

    #[test]
    fn test_const_construction_matches_runtime() {
        const MEAN_EARTH: Ellipsoid = Ellipsoid::sphere(6_371_000.0);
        assert_eq!(MEAN_EARTH, Ellipsoid::new(6_371_000.0, 0.0));
        let rf = std::hint::black_box(298.257_222_101);
        assert_eq!(GRS80, Ellipsoid::new(6_378_137.0, rf));
    }

    #[test]
    fn test_sphere_has_no_eccentricity() {
        let s = Ellipsoid::sphere(6_371_000.0);
        assert!(s.is_sphere());
        assert_eq!(s.f, 0.0);
        assert_eq!(s.e2, 0.0);
        assert_eq!(s.ep2, 0.0);
        assert_eq!(s.n, 0.0);
    }

    #[test]
    fn test_second_eccentricity_relation() {
        let grs80 = GRS80;
        // (1 + e'^2)(1 - e^2) = 1
        assert_relative_eq!((1.0 + grs80.ep2) * (1.0 - grs80.e2), 1.0, epsilon = 1e-15);
    }
}
