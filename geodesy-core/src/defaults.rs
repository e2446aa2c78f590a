/// Default convergence tolerance of the Vincenty inverse iteration
///
/// Expressed in radians of auxiliary-sphere longitude. `1e-12` radians
/// is roughly `0.06 mm` on the earth's surface.
///
/// A tolerance that is not strictly positive (or not finite) is replaced
/// by this value, see [`VincentyInverse::with_tolerance`].
///
/// ```
/// # use geodesy_core::defaults::*;
/// assert_eq!(DEFAULT_TOLERANCE, 1e-12);
/// ```
///
/// [`VincentyInverse::with_tolerance`]: crate::geo::VincentyInverse::with_tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default cap on the number of Vincenty iterations
///
/// Reaching the cap without converging is reported as a divergence
/// (`NaN` distance). This is the only bound on the time spent in a
/// single inverse computation.
///
/// ```
/// # use geodesy_core::defaults::*;
/// assert_eq!(DEFAULT_MAX_ITERATIONS, 50);
/// ```
pub const DEFAULT_MAX_ITERATIONS: usize = 50;
