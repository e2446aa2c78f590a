mod coordinate;
mod ellipsoid;
mod haversine;
mod vincenty;

pub use self::{
    coordinate::{Coordinate, LATITUDE_BOUNDS, LONGITUDE_BOUNDS},
    ellipsoid::{Ellipsoid, grs80, wgs84},
    haversine::Haversine,
    vincenty::{InverseSolution, Termination, VincentyInverse},
};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error(
        "latitude out of range [{min}, {max}] in degrees: {value}",
        min = LATITUDE_BOUNDS.start(),
        max = LATITUDE_BOUNDS.end()
    )]
    InvalidLatitude { value: f64 },
    #[error(
        "longitude out of range [{min}, {max}] in degrees: {value}",
        min = LONGITUDE_BOUNDS.start(),
        max = LONGITUDE_BOUNDS.end()
    )]
    InvalidLongitude { value: f64 },
    #[error(
        "ellipsoid requires a finite semi major axis > 0 and a flattening in [0, 1), got a = {semi_major_axis}, f = {flattening}"
    )]
    InvalidEllipsoid {
        semi_major_axis: f64,
        flattening: f64,
    },
    #[error("points are exact antipodes, vincenty inverse formula does not converge")]
    Antipodal,
    #[error("points are coincident or diametrically opposed on the auxiliary sphere")]
    Indeterminate,
    #[error("vincenty inverse formula did not converge after {iterations} iterations")]
    NonConvergent { iterations: usize },
    #[error("geo computation produced a non-finite value")]
    NonFiniteComputation,
}

/// Distance between two points on (or approximating) a spheroid.
///
/// Implementations never fail: a distance that cannot be computed is
/// reported as `NaN`, see [`f64::is_nan`].
pub trait SpheroidDistanceAlgorithm {
    /// Distance in meters between `point1` and `point2`.
    fn distance(&self, point1: Coordinate, point2: Coordinate) -> f64;
}

/// Great-circle distance in meters using the haversine formula on a sphere
/// of the WGS-84 mean radius.
///
/// Returns `NaN` if either coordinate is out of range (unless both points
/// are equal, in which case the distance is `0`).
///
/// ```
/// use geodesy_core::{Coordinate, haversine_distance};
///
/// let p1 = Coordinate::new(-37.550643, -56.51251);
/// let p2 = Coordinate::new(-34.555733, -58.520749);
///
/// assert!((haversine_distance(p1, p2) - 378_780.852).abs() < 1e-3);
/// assert!(haversine_distance(p1, Coordinate::new(91.0, 0.0)).is_nan());
/// ```
pub fn haversine_distance(p1: Coordinate, p2: Coordinate) -> f64 {
    Haversine::default().distance(p1, p2)
}

/// Ellipsoidal distance and azimuths on WGS-84 using the Vincenty inverse
/// formula.
///
/// * `tolerance`: convergence tolerance in radians, a value `<= 0` selects
///   [`DEFAULT_TOLERANCE`];
/// * `compute_azimuth`: when `false` both azimuths are `NaN` ("not
///   computed").
///
/// Returns `(distance, azimuth1, azimuth2)`, the distance in meters and the
/// azimuths in degrees within `[0, 360)`. Equal points yield `(0, 0, 0)`;
/// antipodes, invalid coordinates and non-convergence yield `NaN` for all
/// three values.
///
/// ```
/// use geodesy_core::{Coordinate, vincenty_inverse};
///
/// let p1 = Coordinate::new(0.0, -71.313379);
/// let p2 = Coordinate::new(0.0, -73.15691);
///
/// let (distance, azimuth1, azimuth2) = vincenty_inverse(p1, p2, 0.0, true);
/// assert!((distance - 205_220.932).abs() < 1e-3);
/// assert_eq!(azimuth1, 270.0);
/// assert_eq!(azimuth2, 90.0);
///
/// let (distance, _, _) = vincenty_inverse(p1, p1.antipode(), 0.0, true);
/// assert!(distance.is_nan());
/// ```
///
/// [`DEFAULT_TOLERANCE`]: crate::defaults::DEFAULT_TOLERANCE
pub fn vincenty_inverse(
    p1: Coordinate,
    p2: Coordinate,
    tolerance: f64,
    compute_azimuth: bool,
) -> (f64, f64, f64) {
    VincentyInverse::default()
        .with_tolerance(tolerance)
        .with_azimuths(compute_azimuth)
        .solve(p1, p2)
        .as_tuple()
}

fn normalize_distance(distance: f64) -> Result<f64, GeoError> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(GeoError::NonFiniteComputation);
    }

    Ok(distance)
}

/// Haversine distance in meters, with invalid input reported as an error.
pub fn distance_between_locations_haversine(
    p1: Coordinate,
    p2: Coordinate,
) -> Result<f64, GeoError> {
    let p1 = p1.validate()?;
    let p2 = p2.validate()?;

    normalize_distance(haversine_distance(p1, p2))
}

/// Vincenty distance in meters on WGS-84, with every non-converged
/// termination reported as an error.
///
/// ```
/// use geodesy_core::{Coordinate, GeoError, distance_between_locations_vincenty};
///
/// let p1 = Coordinate::new(42.358312, -95.310466);
///
/// assert_eq!(
///     distance_between_locations_vincenty(p1, p1.antipode()).unwrap_err(),
///     GeoError::Antipodal,
/// );
/// ```
pub fn distance_between_locations_vincenty(
    p1: Coordinate,
    p2: Coordinate,
) -> Result<f64, GeoError> {
    let solution = VincentyInverse::default()
        .with_azimuths(false)
        .try_solve(p1, p2)?;

    normalize_distance(solution.distance)
}
