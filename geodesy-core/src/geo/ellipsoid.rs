use super::GeoError;

/// WGS-84 constants.
///
/// Derived values are rounded. See "A Compendium Of Earth Constants
/// Relevant To Australian Geodetic Science" (Curtin University) and
/// <https://ahrs.readthedocs.io/en/latest/wgs84.html>.
#[allow(clippy::excessive_precision)]
pub mod wgs84 {
    /// Semi major axis `a` (equatorial radius), in meters
    pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
    /// Semi minor axis `b` (polar radius), in meters
    pub const SEMI_MINOR_AXIS: f64 = 6_356_752.31424518;
    /// Flattening inverse `1/f`
    pub const FLATTENING_INVERSE: f64 = 298.257223563;
    /// Flattening `f = (a - b) / a`
    pub const FLATTENING: f64 = 1.0 / FLATTENING_INVERSE;
    /// Aspect ratio `b / a`
    pub const ASPECT_RATIO: f64 = 0.9966471893352525;

    /// Mean radius `R1 = (2a + b) / 3`, in meters
    pub const MEAN_RADIUS: f64 = 6_371_008.771415059;
    /// Authalic mean radius `R2`, in meters
    pub const AUTHALIC_MEAN_RADIUS: f64 = 6_371_007.1809182055;
    /// Radius of a sphere of the same volume `R3 = (a²b)^(1/3)`, in meters
    pub const SPHERE_RADIUS: f64 = 6_371_000.79000916;
    /// Polar radius of curvature `a² / b`, in meters
    pub const POLAR_CURVATURE_RADIUS: f64 = 6_399_593.625758493;
    /// Equatorial meridian radius of curvature `b² / a`, in meters
    pub const MERIDIAN_CURVATURE_EQUATORIAL_RADIUS: f64 = 6_335_439.327292821;
    /// Meridian quadrant (quarter meridian), in meters
    pub const MERIDIAN_QUADRANT: f64 = 10_001_965.729;
    /// Linear eccentricity `c = sqrt(a² - b²)`, in meters
    pub const LINEAR_ECCENTRICITY: f64 = 521_854.0084234;
    /// Eccentricity of the elliptical section through the poles `c / a`
    pub const ECCENTRICITY: f64 = 0.0818191918426205;

    /// Geocentric gravitational constant `GM`, in m³/s²
    pub const GEOCENTRIC_GRAVITATIONAL_CONSTANT: f64 = 3_986_005_000_000_000.0;
    /// Dynamical form factor `J2`
    pub const DYNAMICAL_FORM_FACTOR: f64 = 0.0010826298213129219;
    /// Angular velocity `ω`, in rad/s
    pub const ANGULAR_VELOCITY: f64 = 0.0007292115;
    /// Period of rotation (sidereal day) `2π / ω`, in seconds
    pub const ROTATION_PERIOD: f64 = 8_616.4100637;
}

/// GRS-80 constants.
///
/// Derived values are rounded. See "Geodetic Reference System 1980"
/// (H. Moritz).
#[allow(clippy::excessive_precision)]
pub mod grs80 {
    /// Semi major axis `a` (equatorial radius), in meters
    pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
    /// Semi minor axis `b` (polar radius), in meters
    pub const SEMI_MINOR_AXIS: f64 = 6_356_752.314140;
    /// Flattening `f = (a - b) / a`
    pub const FLATTENING: f64 = 0.003352810681183637418;
    /// Flattening inverse `1/f`
    pub const FLATTENING_INVERSE: f64 = 1.0 / FLATTENING;
    /// Aspect ratio `b / a`
    pub const ASPECT_RATIO: f64 = 0.996647189318816362;

    /// Mean radius `R1 = (2a + b) / 3`, in meters
    pub const MEAN_RADIUS: f64 = 6_371_008.7714;
    /// Authalic mean radius `R2`, in meters
    pub const AUTHALIC_MEAN_RADIUS: f64 = 6_371_007.1810;
    /// Radius of a sphere of the same volume `R3 = (a²b)^(1/3)`, in meters
    pub const SPHERE_RADIUS: f64 = 6_371_000.7900;
    /// Polar radius of curvature `a² / b`, in meters
    pub const POLAR_CURVATURE_RADIUS: f64 = 6_399_593.6259;
    /// Equatorial meridian radius of curvature `b² / a`, in meters
    pub const MERIDIAN_CURVATURE_EQUATORIAL_RADIUS: f64 = 6_335_439.3271;
    /// Meridian quadrant (quarter meridian), in meters
    pub const MERIDIAN_QUADRANT: f64 = 10_001_965.7293;
    /// Linear eccentricity `c = sqrt(a² - b²)`, in meters
    pub const LINEAR_ECCENTRICITY: f64 = 521_854.0097;
    /// Eccentricity of the elliptical section through the poles `c / a`
    pub const ECCENTRICITY: f64 = 0.0818191910435;

    /// Geocentric gravitational constant `GM`, in m³/s²
    pub const GEOCENTRIC_GRAVITATIONAL_CONSTANT: f64 = 3_986_005_000_000_000.0;
    /// Dynamical form factor `J2`
    pub const DYNAMICAL_FORM_FACTOR: f64 = 0.00108263;
    /// Angular velocity `ω`, in rad/s
    pub const ANGULAR_VELOCITY: f64 = 0.0007292115;
    /// Period of rotation (sidereal day) `2π / ω`, in seconds
    pub const ROTATION_PERIOD: f64 = 8_616.4100637;
}

/// Reference ellipsoid parameters
///
/// Defined by its semi major axis `a` (meters) and flattening `f`, the
/// semi minor axis is derived: `b = a * (1 - f)`.
///
/// for the earth, use [`Ellipsoid::WGS84`] (the [`Default`]) or
/// [`Ellipsoid::GRS80`].
///
/// ```
/// use geodesy_core::Ellipsoid;
///
/// let wgs84 = Ellipsoid::WGS84;
/// assert_eq!(wgs84.semi_major_axis(), 6_378_137.0);
/// assert!((wgs84.semi_minor_axis() - 6_356_752.314245).abs() < 1e-6);
/// assert!((wgs84.inverse_flattening() - 298.257223563).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi major axis in meter / Radius at equator
    semi_major_axis: f64,
    /// Semi minor axis in meter / Radius at pole
    semi_minor_axis: f64,
    /// flattening f
    flattening: f64,
}

impl Ellipsoid {
    pub const WGS84: Self = Self::new(wgs84::SEMI_MAJOR_AXIS, wgs84::FLATTENING);
    pub const GRS80: Self = Self::new(grs80::SEMI_MAJOR_AXIS, grs80::FLATTENING);

    /// Creates an ellipsoid without checking its parameters.
    ///
    /// See [`Ellipsoid::is_valid`].
    pub const fn new(semi_major_axis: f64, flattening: f64) -> Self {
        Self {
            semi_major_axis,
            semi_minor_axis: semi_major_axis * (1.0 - flattening),
            flattening,
        }
    }

    /// Creates an ellipsoid, requiring a finite `a > 0` and `0 <= f < 1`.
    pub fn try_new(semi_major_axis: f64, flattening: f64) -> Result<Self, GeoError> {
        let ellipsoid = Self::new(semi_major_axis, flattening);
        if !ellipsoid.is_valid() {
            return Err(GeoError::InvalidEllipsoid {
                semi_major_axis,
                flattening,
            });
        }

        Ok(ellipsoid)
    }

    pub fn is_valid(&self) -> bool {
        self.semi_major_axis.is_finite()
            && self.semi_major_axis > 0.0
            && (0.0..1.0).contains(&self.flattening)
    }

    pub const fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub const fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    pub const fn flattening(&self) -> f64 {
        self.flattening
    }

    /// `1/f`, infinite for a sphere.
    pub const fn inverse_flattening(&self) -> f64 {
        1.0 / self.flattening
    }

    /// Mean radius `R1 = (2a + b) / 3`
    pub const fn mean_radius(&self) -> f64 {
        (2.0 * self.semi_major_axis + self.semi_minor_axis) / 3.0
    }

    /// `b / a`
    pub const fn aspect_ratio(&self) -> f64 {
        self.semi_minor_axis / self.semi_major_axis
    }

    /// `(a² - b²) / b²`, scales `cos²α` into the `u²` of the Vincenty
    /// distance series.
    pub const fn second_eccentricity_squared(&self) -> f64 {
        let a_sq = self.semi_major_axis * self.semi_major_axis;
        let b_sq = self.semi_minor_axis * self.semi_minor_axis;
        (a_sq - b_sq) / b_sq
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_derived_values_match_table() {
        let e = Ellipsoid::WGS84;

        assert!((e.semi_minor_axis() - wgs84::SEMI_MINOR_AXIS).abs() < 1e-6);
        assert!((e.mean_radius() - wgs84::MEAN_RADIUS).abs() < 1e-6);
        assert!((e.aspect_ratio() - wgs84::ASPECT_RATIO).abs() < 1e-12);
        assert!((e.inverse_flattening() - wgs84::FLATTENING_INVERSE).abs() < 1e-9);
        assert!(e.semi_minor_axis() < e.semi_major_axis());
    }

    #[test]
    fn grs80_derived_values_match_table() {
        let e = Ellipsoid::GRS80;

        assert!((e.semi_minor_axis() - grs80::SEMI_MINOR_AXIS).abs() < 1e-3);
        assert!((e.mean_radius() - grs80::MEAN_RADIUS).abs() < 1e-3);
        assert!((e.aspect_ratio() - grs80::ASPECT_RATIO).abs() < 1e-12);
        assert!((e.inverse_flattening() - grs80::FLATTENING_INVERSE).abs() < 1e-9);
    }

    #[test]
    fn table_radii_are_consistent() {
        let a = wgs84::SEMI_MAJOR_AXIS;
        let b = wgs84::SEMI_MINOR_AXIS;

        assert!((a * a / b - wgs84::POLAR_CURVATURE_RADIUS).abs() < 1e-6);
        assert!((b * b / a - wgs84::MERIDIAN_CURVATURE_EQUATORIAL_RADIUS).abs() < 1e-6);
        assert!(((a * a - b * b).sqrt() - wgs84::LINEAR_ECCENTRICITY).abs() < 1e-3);
        assert!(((a * a - b * b).sqrt() / a - wgs84::ECCENTRICITY).abs() < 1e-8);
        assert!(((a * a * b).cbrt() - wgs84::SPHERE_RADIUS).abs() < 1e-6);
    }

    #[test]
    fn default_is_wgs84() {
        assert_eq!(Ellipsoid::default(), Ellipsoid::WGS84);
    }

    #[test]
    fn sphere_is_valid() {
        let sphere = Ellipsoid::try_new(6_371_000.0, 0.0).unwrap();

        assert_eq!(sphere.semi_minor_axis(), sphere.semi_major_axis());
        assert_eq!(sphere.second_eccentricity_squared(), 0.0);
        assert!(sphere.inverse_flattening().is_infinite());
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            Ellipsoid::try_new(-1.0, 0.003).unwrap_err(),
            GeoError::InvalidEllipsoid {
                semi_major_axis: -1.0,
                flattening: 0.003
            }
        );
        assert!(Ellipsoid::try_new(6_378_137.0, 1.0).is_err());
        assert!(Ellipsoid::try_new(6_378_137.0, -0.1).is_err());
        assert!(Ellipsoid::try_new(f64::INFINITY, 0.003).is_err());
        assert!(!Ellipsoid::new(0.0, 0.0).is_valid());
    }
}
