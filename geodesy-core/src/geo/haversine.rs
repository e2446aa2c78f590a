use super::{Coordinate, Ellipsoid, SpheroidDistanceAlgorithm};

/// Haversine (great-circle) distance on a sphere
///
/// By default the sphere has the WGS-84 mean radius. The error against the
/// ellipsoidal distance stays around `0.5%`, use [`VincentyInverse`] when
/// that matters.
///
/// [`VincentyInverse`]: super::VincentyInverse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    /// sphere radius in meter
    radius: f64,
}

impl Haversine {
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Uses the ellipsoid's mean radius `(2a + b) / 3`.
    pub const fn from_ellipsoid(ellipsoid: &Ellipsoid) -> Self {
        Self::new(ellipsoid.mean_radius())
    }

    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::from_ellipsoid(&Ellipsoid::WGS84)
    }
}

impl SpheroidDistanceAlgorithm for Haversine {
    fn distance(&self, point1: Coordinate, point2: Coordinate) -> f64 {
        if point1 == point2 {
            return 0.0;
        }

        if !point1.is_valid() || !point2.is_valid() {
            return f64::NAN;
        }

        let (phi1, phi2) = (point1.latitude_radians(), point2.latitude_radians());
        let (lambda1, lambda2) = (point1.longitude_radians(), point2.longitude_radians());

        let half_lat = ((phi2 - phi1) / 2.0).sin();
        let half_lon = ((lambda2 - lambda1) / 2.0).sin();

        // cosine product grouped so that swapping the points rounds the same
        let h = (half_lat * half_lat + half_lon * half_lon * (phi1.cos() * phi2.cos())).sqrt();

        // asin is only real for h in [0, 1]
        if h > 1.0 {
            return f64::NAN;
        }

        2.0 * self.radius * h.asin()
    }
}
