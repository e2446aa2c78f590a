//! Vincenty's inverse solution of the geodesic problem.
//!
//! Notations, on the reference ellipsoid:
//!
//! * `a`, `b`: semi major / semi minor axis, `f` the flattening;
//! * `u1`, `u2`: reduced latitudes, `atan((1 - f) * tan(latitude))`, the
//!   latitudes on the auxiliary sphere;
//! * `L`: difference in longitude of the two points;
//! * `λ`: difference in longitude on the auxiliary sphere (the unknown);
//! * `σ`: angular separation of the points on the auxiliary sphere;
//! * `σₘ`: angular separation between the midpoint of the line and the
//!   equator;
//! * `α`: azimuth of the geodesic at the equator; `α1`, `α2` the azimuths
//!   at the end points.
//!
//! [Wikipedia Vincenty formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae)

use super::{Coordinate, Ellipsoid, GeoError, SpheroidDistanceAlgorithm};
use crate::defaults::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use log::trace;
use std::f64::consts::TAU;

/// Vincenty inverse formula, parametrized with the ellipsoid, the
/// convergence tolerance and the number of maximum iterations.
///
/// Known limitation:
/// this iterative method can fail to converge for nearly antipodal point pairs.
/// Exact antipodes (see [`Coordinate::is_antipode_of`]) are not iterated at
/// all. Both are reported with `NaN` outputs.
///
/// Each call owns its iteration state, a `VincentyInverse` can be shared
/// freely between threads.
///
/// ```
/// use geodesy_core::{Coordinate, Ellipsoid, Termination, VincentyInverse};
///
/// let solver = VincentyInverse::default()
///     .with_ellipsoid(Ellipsoid::GRS80)
///     .with_tolerance(1e-9);
///
/// let solution = solver.solve(
///     Coordinate::new(43.916325, -119.352141),
///     Coordinate::new(27.049648, -84.467283),
/// );
///
/// assert!(matches!(solution.termination, Termination::Converged { .. }));
/// assert!((solution.distance - 3_637_748.79).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VincentyInverse {
    ellipsoid: Ellipsoid,
    tolerance: f64,
    max_iterations: usize,
    compute_azimuths: bool,
}

impl Default for VincentyInverse {
    fn default() -> Self {
        Self::new(Ellipsoid::WGS84)
    }
}

/// How a [`VincentyInverse::solve`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Both points are equal, nothing to iterate: `(0, 0, 0)`.
    Coincident,
    /// `λ` moved by no more than the tolerance on the last iteration.
    Converged { iterations: usize },
    /// The points are exact antipodes, the iteration is known not to converge.
    Antipodal,
    /// `sin σ` became exactly `0` while iterating: the points are coincident
    /// or diametrically opposed on the auxiliary sphere and the azimuth is
    /// indeterminate.
    Indeterminate { iterations: usize },
    /// The iteration cap was reached before converging.
    Diverged { iterations: usize },
    /// A coordinate is out of range, or the ellipsoid is malformed.
    InvalidInput,
}

/// Output of the Vincenty inverse formula.
///
/// Unless [`Termination::Coincident`] or [`Termination::Converged`], every
/// value is `NaN`. Azimuths are also `NaN` when they were not requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// ellipsoidal distance, in meters
    pub distance: f64,
    /// forward azimuth at the first point, in degrees within `[0, 360)`
    pub azimuth1: f64,
    /// reverse azimuth at the second point (bearing back to the first
    /// point), in degrees within `[0, 360)`
    pub azimuth2: f64,
    pub termination: Termination,
}

impl InverseSolution {
    const fn coincident() -> Self {
        Self {
            distance: 0.0,
            azimuth1: 0.0,
            azimuth2: 0.0,
            termination: Termination::Coincident,
        }
    }

    const fn failed(termination: Termination) -> Self {
        Self {
            distance: f64::NAN,
            azimuth1: f64::NAN,
            azimuth2: f64::NAN,
            termination,
        }
    }

    /// `(distance, azimuth1, azimuth2)`
    pub const fn as_tuple(&self) -> (f64, f64, f64) {
        (self.distance, self.azimuth1, self.azimuth2)
    }

    pub const fn is_converged(&self) -> bool {
        matches!(
            self.termination,
            Termination::Coincident | Termination::Converged { .. }
        )
    }

    /// Map the `NaN` outcomes to a [`GeoError`].
    ///
    /// [`Termination::InvalidInput`] becomes
    /// [`GeoError::NonFiniteComputation`], use
    /// [`VincentyInverse::try_solve`] to get which input was invalid.
    pub fn into_result(self) -> Result<Self, GeoError> {
        match self.termination {
            Termination::Coincident | Termination::Converged { .. } => Ok(self),
            Termination::Antipodal => Err(GeoError::Antipodal),
            Termination::Indeterminate { .. } => Err(GeoError::Indeterminate),
            Termination::Diverged { iterations } => Err(GeoError::NonConvergent { iterations }),
            Termination::InvalidInput => Err(GeoError::NonFiniteComputation),
        }
    }
}

/// sine and cosine of the reduced latitudes
#[derive(Clone, Copy)]
struct AuxiliarySphere {
    sin_u1: f64,
    cos_u1: f64,
    sin_u2: f64,
    cos_u2: f64,
}

impl AuxiliarySphere {
    fn new(flattening: f64, point1: Coordinate, point2: Coordinate) -> Self {
        let reduce = |latitude: f64| ((1.0 - flattening) * latitude.tan()).atan();

        let (sin_u1, cos_u1) = reduce(point1.latitude_radians()).sin_cos();
        let (sin_u2, cos_u2) = reduce(point2.latitude_radians()).sin_cos();

        Self {
            sin_u1,
            cos_u1,
            sin_u2,
            cos_u2,
        }
    }
}

/// trig state of the last iteration
struct Converged {
    iterations: usize,
    lambda: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_sq_alpha: f64,
    cos2_sigma_m: f64,
}

enum Iteration {
    Converged(Converged),
    Indeterminate { iterations: usize },
    Diverged,
}

impl VincentyInverse {
    pub const fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            compute_azimuths: true,
        }
    }

    pub fn with_ellipsoid(self, ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid, ..self }
    }

    /// Convergence tolerance on `λ`, in radians.
    ///
    /// Values that are not strictly positive and finite select
    /// [`DEFAULT_TOLERANCE`].
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            DEFAULT_TOLERANCE
        };

        Self { tolerance, ..self }
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// When disabled, both azimuths of the solution are `NaN`.
    pub fn with_azimuths(self, compute_azimuths: bool) -> Self {
        Self {
            compute_azimuths,
            ..self
        }
    }

    pub const fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Solve the inverse problem between `point1` and `point2`.
    ///
    /// Checked in order: equal points (`0` distance), invalid input, exact
    /// antipodes, then the iteration. Never fails, see [`InverseSolution`].
    pub fn solve(&self, point1: Coordinate, point2: Coordinate) -> InverseSolution {
        if point1 == point2 {
            return InverseSolution::coincident();
        }

        if !point1.is_valid() || !point2.is_valid() || !self.ellipsoid.is_valid() {
            trace!(
                "vincenty inverse: invalid input {point1} -> {point2} on {:?}",
                self.ellipsoid
            );
            return InverseSolution::failed(Termination::InvalidInput);
        }

        if point1.is_antipode_of(point2) {
            trace!("vincenty inverse: {point1} -> {point2} are antipodes");
            return InverseSolution::failed(Termination::Antipodal);
        }

        let sphere = AuxiliarySphere::new(self.ellipsoid.flattening(), point1, point2);
        let difference_longitudes = point2.longitude_radians() - point1.longitude_radians();
        // σₘ is undefined for geodesics touching the equator, C = 0 there
        let equatorial = point1.latitude() == 0.0 || point2.latitude() == 0.0;

        match self.iterate(&sphere, difference_longitudes, equatorial) {
            Iteration::Converged(state) => self.converged(&sphere, &state),
            Iteration::Indeterminate { iterations } => {
                trace!(
                    "vincenty inverse: {point1} -> {point2} indeterminate after {iterations} iterations"
                );
                InverseSolution::failed(Termination::Indeterminate { iterations })
            }
            Iteration::Diverged => {
                trace!(
                    "vincenty inverse: {point1} -> {point2} did not converge in {} iterations",
                    self.max_iterations
                );
                InverseSolution::failed(Termination::Diverged {
                    iterations: self.max_iterations,
                })
            }
        }
    }

    /// Like [`VincentyInverse::solve`], with invalid input and every
    /// non-converged termination reported as a [`GeoError`].
    pub fn try_solve(
        &self,
        point1: Coordinate,
        point2: Coordinate,
    ) -> Result<InverseSolution, GeoError> {
        let point1 = point1.validate()?;
        let point2 = point2.validate()?;
        if !self.ellipsoid.is_valid() {
            return Err(GeoError::InvalidEllipsoid {
                semi_major_axis: self.ellipsoid.semi_major_axis(),
                flattening: self.ellipsoid.flattening(),
            });
        }

        self.solve(point1, point2).into_result()
    }

    fn iterate(
        &self,
        sphere: &AuxiliarySphere,
        difference_longitudes: f64,
        equatorial: bool,
    ) -> Iteration {
        let f = self.ellipsoid.flattening();
        let AuxiliarySphere {
            sin_u1,
            cos_u1,
            sin_u2,
            cos_u2,
        } = *sphere;

        let mut lambda = difference_longitudes;

        for iterations in 1..=self.max_iterations {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sq_sigma = (cos_u2 * sin_lambda) * (cos_u2 * sin_lambda)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda)
                    * (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);

            if sin_sq_sigma == 0.0 {
                return Iteration::Indeterminate { iterations };
            }

            let sin_sigma = sin_sq_sigma.sqrt();
            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

            let (cos2_sigma_m, c) = if equatorial {
                (0.0, 0.0)
            } else {
                let cos2_sigma_m = if cos_sq_alpha != 0.0 {
                    cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
                } else {
                    0.0
                };
                let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
                (cos2_sigma_m, c)
            };

            let lambda_prime = lambda;
            lambda = difference_longitudes
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos2_sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)));

            if (lambda - lambda_prime).abs() <= self.tolerance {
                return Iteration::Converged(Converged {
                    iterations,
                    lambda,
                    sigma,
                    sin_sigma,
                    cos_sigma,
                    cos_sq_alpha,
                    cos2_sigma_m,
                });
            }
        }

        Iteration::Diverged
    }

    fn converged(&self, sphere: &AuxiliarySphere, state: &Converged) -> InverseSolution {
        let b = self.ellipsoid.semi_minor_axis();
        let Converged {
            iterations,
            lambda,
            sigma,
            sin_sigma,
            cos_sigma,
            cos_sq_alpha,
            cos2_sigma_m,
        } = *state;

        let u_sq = cos_sq_alpha * self.ellipsoid.second_eccentricity_squared();
        let cap_a =
            1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let cap_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let delta_sigma = cap_b
            * sin_sigma
            * (cos2_sigma_m
                + cap_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)
                        - cap_b / 6.0
                            * cos2_sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos2_sigma_m * cos2_sigma_m)));

        let (azimuth1, azimuth2) = if self.compute_azimuths {
            azimuths(sphere, lambda)
        } else {
            (f64::NAN, f64::NAN)
        };

        InverseSolution {
            distance: b * cap_a * (sigma - delta_sigma),
            azimuth1,
            azimuth2,
            termination: Termination::Converged { iterations },
        }
    }
}

impl SpheroidDistanceAlgorithm for VincentyInverse {
    fn distance(&self, point1: Coordinate, point2: Coordinate) -> f64 {
        self.with_azimuths(false).solve(point1, point2).distance
    }
}

/// forward azimuth at the first point and reverse azimuth at the second,
/// in degrees
fn azimuths(sphere: &AuxiliarySphere, lambda: f64) -> (f64, f64) {
    let AuxiliarySphere {
        sin_u1,
        cos_u1,
        sin_u2,
        cos_u2,
    } = *sphere;
    let (sin_lambda, cos_lambda) = lambda.sin_cos();

    let alpha1 = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
    let alpha2 = (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

    // alpha2 points along the geodesic, rotate it back towards the first point
    (
        full_circle_degrees(alpha1),
        (full_circle_degrees(alpha2) + 180.0) % 360.0,
    )
}

/// maps an `atan2` angle in `(-π, π]` to degrees in `[0, 360)`
fn full_circle_degrees(radians: f64) -> f64 {
    let radians = if radians < 0.0 { radians + TAU } else { radians };
    let degrees = radians.to_degrees();

    if degrees >= 360.0 {
        degrees - 360.0
    } else {
        degrees
    }
}
