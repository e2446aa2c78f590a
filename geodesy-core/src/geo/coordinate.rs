use super::GeoError;
use anyhow::{Context as _, anyhow, ensure};
use std::{fmt, ops::RangeInclusive, str::FromStr};

/// Valid latitudes, in degrees (inclusive).
pub const LATITUDE_BOUNDS: RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitudes, in degrees (inclusive).
pub const LONGITUDE_BOUNDS: RangeInclusive<f64> = -180.0..=180.0;

const DEGREE_SUFFIX: char = '\u{00BA}';
const ALT_DEGREE_SUFFIX: char = '\u{00B0}';

/// Latitude and longitude pair, in decimal degrees.
///
/// Out of range values are representable (see [`Coordinate::new`]) but
/// [`Coordinate::is_valid`] flags them, and the distance functions return
/// `NaN` for them. Use [`Coordinate::try_new`] to reject them upfront.
///
/// Equality is exact IEEE equality on both components, there is no epsilon
/// tolerance: `0.0 == -0.0`, and a `NaN` component is never equal to
/// anything.
///
/// Non-finite components are undefined input: they are never valid, so
/// distances involving them come out as `NaN`, but no other guarantee is
/// made.
///
/// # Parsing and display
///
/// ```
/// use geodesy_core::Coordinate;
///
/// let buenos_aires: Coordinate = "-34.57934, -57.534954".parse().unwrap();
/// assert_eq!(buenos_aires, Coordinate::new(-34.57934, -57.534954));
/// assert_eq!(buenos_aires.to_string(), "-34.57934º, -57.534954º");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting out of range (or non-finite) values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        Self::new(latitude, longitude).validate()
    }

    pub(crate) fn validate(self) -> Result<Self, GeoError> {
        if !LATITUDE_BOUNDS.contains(&self.latitude) {
            return Err(GeoError::InvalidLatitude {
                value: self.latitude,
            });
        }
        if !LONGITUDE_BOUNDS.contains(&self.longitude) {
            return Err(GeoError::InvalidLongitude {
                value: self.longitude,
            });
        }

        Ok(self)
    }

    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    pub const fn longitude(self) -> f64 {
        self.longitude
    }

    pub fn latitude_radians(self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn longitude_radians(self) -> f64 {
        self.longitude.to_radians()
    }

    /// Returns `(-latitude, 180 - |longitude|)`.
    ///
    /// This is the point [`Coordinate::is_antipode_of`] matches, and the pair
    /// the Vincenty solver short-circuits as non-convergent.
    ///
    /// ```
    /// use geodesy_core::Coordinate;
    ///
    /// let p = Coordinate::new(42.358312, -95.310466);
    ///
    /// assert_eq!(p.antipode(), Coordinate::new(-42.358312, 180.0 - 95.310466));
    /// assert!(p.is_antipode_of(p.antipode()));
    /// assert!(p.antipode().is_antipode_of(p));
    /// ```
    pub fn antipode(self) -> Self {
        Self::new(-self.latitude, 180.0 - self.longitude.abs())
    }

    /// Exact antipode check, in either direction.
    pub fn is_antipode_of(self, other: Self) -> bool {
        let other_is_antipode =
            self.latitude == -other.latitude && self.longitude == 180.0 - other.longitude.abs();
        let self_is_antipode =
            other.latitude == -self.latitude && other.longitude == 180.0 - self.longitude.abs();

        other_is_antipode || self_is_antipode
    }

    /// Whether both components are within their inclusive bounds.
    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DEGREE_SUFFIX}, {}{DEGREE_SUFFIX}",
            self.latitude, self.longitude
        )
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let Some(latitude_raw) = parts.next() else {
            return Err(anyhow!(
                "Failed to parse Coordinate: expected format `<latitude>, <longitude>`"
            ));
        };
        let Some(longitude_raw) = parts.next() else {
            return Err(anyhow!(
                "Failed to parse Coordinate: expected format `<latitude>, <longitude>`"
            ));
        };
        ensure!(
            parts.next().is_none(),
            "Failed to parse Coordinate: expected a single comma separator"
        );

        let latitude =
            parse_coordinate_degrees(latitude_raw).context("Failed to parse Coordinate latitude")?;
        let longitude = parse_coordinate_degrees(longitude_raw)
            .context("Failed to parse Coordinate longitude")?;

        Self::try_new(latitude, longitude)
            .map_err(|error| anyhow!("Failed to parse Coordinate: {error}"))
    }
}

fn parse_coordinate_degrees(input: &str) -> anyhow::Result<f64> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_suffix(DEGREE_SUFFIX)
        .or_else(|| trimmed.strip_suffix(ALT_DEGREE_SUFFIX))
        .unwrap_or(trimmed)
        .trim();

    ensure!(!trimmed.is_empty(), "cannot parse from empty string");

    trimmed
        .parse::<f64>()
        .map_err(|error| anyhow!("failed to parse `{input}`: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radians_conversion() {
        let p = Coordinate::new(180.0, -90.0);

        assert_eq!(p.latitude_radians(), std::f64::consts::PI);
        assert_eq!(p.longitude_radians(), -std::f64::consts::FRAC_PI_2);
        assert_eq!(Coordinate::new(0.0, 0.0).latitude_radians(), 0.0);
    }

    #[test]
    fn equality_is_exact() {
        let p = Coordinate::new(-34.579340, -57.534954);

        assert_eq!(p, Coordinate::new(-34.579340, -57.534954));
        assert_ne!(p, Coordinate::new(-34.579340, -57.534954 + 1e-12));
        assert_ne!(p, Coordinate::new(-34.579340 - 1e-12, -57.534954));
    }

    #[test]
    fn equality_follows_ieee() {
        assert_eq!(Coordinate::new(0.0, 10.0), Coordinate::new(-0.0, 10.0));
        assert_eq!(Coordinate::new(10.0, 0.0), Coordinate::new(10.0, -0.0));

        let nan = Coordinate::new(f64::NAN, 0.0);
        assert_ne!(nan, nan);
    }

    #[test]
    fn antipode_of_each_quadrant() {
        let nw = Coordinate::new(42.358312, -95.310466);
        let ne = Coordinate::new(62.379312, 99.612962);
        let sw = Coordinate::new(-54.839747, 66.500319);
        let se = Coordinate::new(-46.272337, 169.398118);

        for p in [nw, ne, sw, se] {
            let antipode = p.antipode();

            assert_eq!(antipode.latitude(), -p.latitude());
            assert_eq!(antipode.longitude(), 180.0 - p.longitude().abs());
            assert!(p.is_antipode_of(antipode));
            assert!(antipode.is_antipode_of(p));
            assert!(antipode.is_valid());
        }
    }

    #[test]
    fn antipode_check_is_exact() {
        let p = Coordinate::new(42.358312, -95.310466);
        let near = Coordinate::new(p.antipode().latitude() + 1e-8, p.antipode().longitude());

        assert!(!p.is_antipode_of(near));
        assert!(!near.is_antipode_of(p));
        assert!(!p.is_antipode_of(p));
    }

    #[test]
    fn validity_bounds_are_inclusive() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(-90.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 0.0).is_valid());
        assert!(Coordinate::new(0.0, -180.0).is_valid());
        assert!(Coordinate::new(0.0, 180.0).is_valid());

        assert!(!Coordinate::new(-91.0, 0.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -181.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn non_finite_is_invalid() {
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
        assert!(!Coordinate::new(f64::NEG_INFINITY, 0.0).is_valid());
    }

    #[test]
    fn try_new_rejects_invalid_values() {
        assert_eq!(
            Coordinate::try_new(91.0, 0.0).unwrap_err(),
            GeoError::InvalidLatitude { value: 91.0 }
        );
        assert_eq!(
            Coordinate::try_new(0.0, -181.0).unwrap_err(),
            GeoError::InvalidLongitude { value: -181.0 }
        );
        assert!(Coordinate::try_new(37.7749, -122.4194).is_ok());
    }

    #[test]
    fn display_and_parse() {
        let p = Coordinate::new(48.8566, 2.3522);

        assert_eq!(p.to_string(), "48.8566º, 2.3522º");
        assert_eq!("48.8566, 2.3522".parse::<Coordinate>().unwrap(), p);
        assert_eq!("48.8566º, 2.3522º".parse::<Coordinate>().unwrap(), p);
        assert_eq!(" 48.8566\u{00B0} , 2.3522\u{00B0} ".parse::<Coordinate>().unwrap(), p);
    }

    #[test]
    fn display_roundtrip() {
        let p = Coordinate::new(-37.57037203, 144.25295244);

        assert_eq!(p.to_string().parse::<Coordinate>().unwrap(), p);
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let missing_separator = "48.8566".parse::<Coordinate>().unwrap_err().to_string();
        assert!(missing_separator.contains("expected format"));

        let extra_separator = "48.8566, 2.3522, 1"
            .parse::<Coordinate>()
            .unwrap_err()
            .to_string();
        assert!(extra_separator.contains("single comma"));

        let invalid_latitude = "abc, 2.3522".parse::<Coordinate>().unwrap_err().to_string();
        assert!(invalid_latitude.contains("Failed to parse Coordinate latitude"));

        let out_of_range = "48.8566, 181".parse::<Coordinate>().unwrap_err().to_string();
        assert!(out_of_range.contains("longitude out of range"));
    }

    #[test]
    fn from_tuple() {
        assert_eq!(
            Coordinate::from((0.0, -71.313379)),
            Coordinate::new(0.0, -71.313379)
        );
    }
}
