use std::fmt::{Display, Formatter};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};
use crate::geo::crs::Crs;
use crate::geo::lat_lng_bounds::LatLngBounds;
use crate::util::format_num;

/// Default margin used by [`LatLng::equals`].
pub const DEFAULT_EQUALITY_MARGIN: f64 = 1.0e-9;

/// Length of the Earth equator in meters, used to convert meters into degrees.
const EQUATOR_LENGTH: f64 = 40_075_017.0;

/// Anything that has latitude and longitude.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lon(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        self.lon().to_radians()
    }
}

/// Geographic point types that can be created from latitude and longitude.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: f64, lon: f64) -> Self;

    /// Creates a point from longitude and latitude.
    fn lonlat(lon: f64, lat: f64) -> Self {
        Self::latlon(lat, lon)
    }
}

/// Geographical point with an optional altitude.
///
/// Longitude is not limited to `[-180, 180]` range. Wrapping is the responsibility of the [`Crs`]
/// (see [`Crs::wrap_lat_lng`]).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LatLngRepr")]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Altitude in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LatLngRepr {
    Pair([f64; 2]),
    WithAltitude([f64; 3]),
    Object {
        lat: f64,
        #[serde(alias = "lon")]
        lng: f64,
        #[serde(default)]
        alt: Option<f64>,
    },
}

impl From<LatLngRepr> for LatLng {
    fn from(value: LatLngRepr) -> Self {
        match value {
            LatLngRepr::Pair([lat, lng]) => LatLng::new(lat, lng),
            LatLngRepr::WithAltitude([lat, lng, alt]) => LatLng::with_alt(lat, lng, alt),
            LatLngRepr::Object { lat, lng, alt } => LatLng { lat, lng, alt },
        }
    }
}

impl LatLng {
    /// Creates a new point without altitude.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            alt: None,
        }
    }

    /// Creates a new point with altitude.
    pub const fn with_alt(lat: f64, lng: f64, alt: f64) -> Self {
        Self {
            lat,
            lng,
            alt: Some(alt),
        }
    }

    /// Creates a new point, checking that the coordinates are numbers.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        if lat.is_nan() || lng.is_nan() {
            return Err(GeoError::InvalidLatLng { lat, lng });
        }

        Ok(Self::new(lat, lng))
    }

    /// Returns true if the other point is at the same position within [`DEFAULT_EQUALITY_MARGIN`].
    pub fn equals(&self, other: impl Into<LatLng>) -> bool {
        self.equals_with_margin(other, DEFAULT_EQUALITY_MARGIN)
    }

    /// Returns true if neither latitude nor longitude differ by more than `max_margin` degrees.
    pub fn equals_with_margin(&self, other: impl Into<LatLng>, max_margin: f64) -> bool {
        let other: LatLng = other.into();
        let margin = (self.lat - other.lat)
            .abs()
            .max((self.lng - other.lng).abs());

        margin <= max_margin
    }

    /// Great-circle distance to the other point in meters, using [`Crs::EARTH`].
    pub fn distance_to(&self, other: impl Into<LatLng>) -> f64 {
        Crs::EARTH.distance(self, other)
    }

    /// Returns the point with longitude wrapped into `[-180, 180]` range.
    pub fn wrap(&self) -> Self {
        Crs::EARTH.wrap_lat_lng(self)
    }

    /// Returns bounds with the point in the center, each side `size_in_meters / 2` meters apart from it.
    pub fn to_bounds(&self, size_in_meters: f64) -> LatLngBounds {
        let lat_accuracy = 180.0 * size_in_meters / EQUATOR_LENGTH;
        let lng_accuracy = lat_accuracy / self.lat.to_radians().cos();

        LatLngBounds::new(
            [self.lat - lat_accuracy, self.lng - lng_accuracy],
            [self.lat + lat_accuracy, self.lng + lng_accuracy],
        )
    }

    /// Formats the point with the given number of decimal digits.
    pub fn to_string_with_precision(&self, digits: u32) -> String {
        format!(
            "LatLng({}, {})",
            format_num(self.lat, digits),
            format_num(self.lng, digits)
        )
    }
}

impl GeoPoint for LatLng {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lng
    }
}

impl NewGeoPoint for LatLng {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

impl From<[f64; 3]> for LatLng {
    fn from([lat, lng, alt]: [f64; 3]) -> Self {
        Self::with_alt(lat, lng, alt)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<&LatLng> for LatLng {
    fn from(value: &LatLng) -> Self {
        *value
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with_precision(6))
    }
}

impl AbsDiffEq for LatLng {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lng.abs_diff_eq(&other.lng, epsilon)
    }
}

impl RelativeEq for LatLng {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lat.relative_eq(&other.lat, epsilon, max_relative)
            && self.lng.relative_eq(&other.lng, epsilon, max_relative)
    }
}

/// Creates a new [`LatLng`] from latitude and longitude values (in degrees).
///
/// ```
/// use meridian_geo::latlng;
///
/// let point = latlng!(38.0, 52.0);
/// assert_eq!(point.lat, 38.0);
/// ```
#[macro_export]
macro_rules! latlng {
    ($lat:expr, $lng:expr) => {
        $crate::geo::LatLng::new($lat, $lng)
    };
    ($lat:expr, $lng:expr, $alt:expr) => {
        $crate::geo::LatLng::with_alt($lat, $lng, $alt)
    };
}
