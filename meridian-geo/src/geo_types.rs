//! Conversions between the crate types and [`geo_types`] geometries.
//!
//! Geographic coordinates are stored in `geo_types` with longitude as `x` and latitude as `y`.

use ::geo_types::{coord, point, Coord, Rect};

use crate::cartesian::{Bounds, CartesianPoint2d, NewCartesianPoint2d, Point};
use crate::geo::{GeoPoint, LatLng, LatLngBounds, NewGeoPoint};

impl CartesianPoint2d for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl NewCartesianPoint2d for Coord<f64> {
    fn new(x: f64, y: f64) -> Self {
        coord!(x: x, y: y)
    }
}

impl CartesianPoint2d for ::geo_types::Point<f64> {
    fn x(&self) -> f64 {
        self.0.x
    }

    fn y(&self) -> f64 {
        self.0.y
    }
}

impl NewCartesianPoint2d for ::geo_types::Point<f64> {
    fn new(x: f64, y: f64) -> Self {
        point!(x: x, y: y)
    }
}

impl GeoPoint for ::geo_types::Point<f64> {
    fn lat(&self) -> f64 {
        self.0.y
    }

    fn lon(&self) -> f64 {
        self.0.x
    }
}

impl NewGeoPoint for ::geo_types::Point<f64> {
    fn latlon(lat: f64, lon: f64) -> Self {
        point!(x: lon, y: lat)
    }
}

impl From<Point> for Coord<f64> {
    fn from(value: Point) -> Self {
        coord!(x: value.x, y: value.y)
    }
}

impl From<Coord<f64>> for Point {
    fn from(value: Coord<f64>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<Point> for ::geo_types::Point<f64> {
    fn from(value: Point) -> Self {
        point!(x: value.x, y: value.y)
    }
}

impl From<::geo_types::Point<f64>> for Point {
    fn from(value: ::geo_types::Point<f64>) -> Self {
        Point::from_cartesian(&value)
    }
}

impl From<LatLng> for ::geo_types::Point<f64> {
    fn from(value: LatLng) -> Self {
        point!(x: value.lng, y: value.lat)
    }
}

impl From<::geo_types::Point<f64>> for LatLng {
    fn from(value: ::geo_types::Point<f64>) -> Self {
        LatLng::new(value.y(), value.x())
    }
}

impl From<Bounds> for Rect<f64> {
    fn from(value: Bounds) -> Self {
        Rect::new(value.min(), value.max())
    }
}

impl From<Rect<f64>> for Bounds {
    fn from(value: Rect<f64>) -> Self {
        Bounds::new(value.min(), value.max())
    }
}

impl From<LatLngBounds> for Rect<f64> {
    fn from(value: LatLngBounds) -> Self {
        Rect::new(
            coord!(x: value.west(), y: value.south()),
            coord!(x: value.east(), y: value.north()),
        )
    }
}

impl From<Rect<f64>> for LatLngBounds {
    fn from(value: Rect<f64>) -> Self {
        let (min, max) = (value.min(), value.max());
        LatLngBounds::new([min.y, min.x], [max.y, max.x])
    }
}
