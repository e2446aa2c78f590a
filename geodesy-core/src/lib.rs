//! Distances and azimuths between geographic coordinates.
//!
//! Two algorithms are provided:
//!
//! * [`haversine_distance`]: closed-form great-circle distance on a sphere
//!   of the ellipsoid's mean radius;
//! * [`vincenty_inverse`]: Vincenty's iterative inverse solution on the
//!   reference ellipsoid, accurate to well under a millimeter, with optional
//!   forward and reverse azimuths.
//!
//! Numerical failures (invalid coordinates, exact antipodes, non-convergence)
//! are reported as `NaN` rather than through an error channel. Callers that
//! prefer a [`Result`] can use [`InverseSolution::into_result`] or
//! [`distance_between_locations_vincenty`].
//!
//! ```
//! use geodesy_core::{Coordinate, haversine_distance, vincenty_inverse};
//!
//! let p1 = Coordinate::new(-37.57037203, 144.25295244);
//! let p2 = Coordinate::new(-37.39101561, 143.55353839);
//!
//! let (distance, azimuth1, azimuth2) = vincenty_inverse(p1, p2, -1.0, true);
//! assert!((distance - 64_985.585).abs() < 1e-3);
//! assert!((azimuth1 - 287.624).abs() < 1e-3);
//! assert!((azimuth2 - 108.050).abs() < 1e-3);
//!
//! assert!(haversine_distance(p1, p2) > 0.0);
//! ```

pub mod defaults;
pub mod geo;

pub use self::geo::{
    Coordinate, Ellipsoid, GeoError, Haversine, InverseSolution, SpheroidDistanceAlgorithm,
    Termination, VincentyInverse, distance_between_locations_haversine,
    distance_between_locations_vincenty, haversine_distance, vincenty_inverse,
};
