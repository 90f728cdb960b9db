use std::f64::consts::PI;

use crate::cartesian::{Bounds, Point};
use crate::geo::datum::Datum;
use crate::geo::lat_lng::LatLng;
use crate::geo::projection::Projection;

/// Spherical Mercator projection, used by most of the online tile services (EPSG:3857).
///
/// The earth is treated as a sphere with the radius equal to the semi-major axis of the datum. Latitudes beyond
/// [`SphericalMercator::MAX_LATITUDE`] are clamped, so the projected world is a square.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphericalMercator {
    datum: Datum,
}

impl SphericalMercator {
    /// Maximum latitude that can be projected. At this latitude the projected world becomes a square.
    pub const MAX_LATITUDE: f64 = 85.0511287798;

    /// Spherical Mercator over the WGS84 semi-major axis.
    pub const WGS84: Self = Self::new(Datum::WGS84);

    /// Creates a new projection using the given datum.
    pub const fn new(datum: Datum) -> Self {
        Self { datum }
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.datum.semimajor()
    }
}

impl Default for SphericalMercator {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Projection for SphericalMercator {
    fn project(&self, lat_lng: &LatLng) -> Point {
        let lat = lat_lng
            .lat
            .clamp(-Self::MAX_LATITUDE, Self::MAX_LATITUDE);
        let sin = lat.to_radians().sin();

        Point::new(
            self.radius() * lat_lng.lng.to_radians(),
            self.radius() * ((1.0 + sin) / (1.0 - sin)).ln() / 2.0,
        )
    }

    fn unproject(&self, point: &Point) -> LatLng {
        LatLng::new(
            (2.0 * (point.y / self.radius()).exp().atan() - PI / 2.0).to_degrees(),
            (point.x / self.radius()).to_degrees(),
        )
    }

    fn bounds(&self) -> Bounds {
        let d = self.radius() * PI;
        Bounds::new([-d, -d], [d, d])
    }
}
