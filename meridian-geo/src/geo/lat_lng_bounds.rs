use serde::{Deserialize, Serialize};

use crate::geo::lat_lng::{LatLng, DEFAULT_EQUALITY_MARGIN};

/// Rectangular geographical area, defined by its south-west and north-east corners.
///
/// The corners are normalized on construction, so `west <= east` and `south <= north`. Bounds produced by
/// [`Crs::wrap_lat_lng_bounds`](crate::geo::Crs::wrap_lat_lng_bounds) keep their width, so their east side may be
/// greater than 180 (or the west side less than -180). Such bounds cross the antimeridian, see
/// [`LatLngBounds::crosses_antimeridian`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LatLngBoundsRepr")]
pub struct LatLngBounds {
    south_west: LatLng,
    north_east: LatLng,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LatLngBoundsRepr {
    Corners([LatLng; 2]),
    Object {
        south_west: LatLng,
        north_east: LatLng,
    },
}

impl From<LatLngBoundsRepr> for LatLngBounds {
    fn from(value: LatLngBoundsRepr) -> Self {
        match value {
            LatLngBoundsRepr::Corners([a, b]) => LatLngBounds::new(a, b),
            LatLngBoundsRepr::Object {
                south_west,
                north_east,
            } => LatLngBounds::new(south_west, north_east),
        }
    }
}

impl LatLngBounds {
    /// Creates bounds from two opposite corners, in any order.
    pub fn new(corner1: impl Into<LatLng>, corner2: impl Into<LatLng>) -> Self {
        let mut bounds = Self::from_lat_lng(corner1);
        bounds.extend(corner2);
        bounds
    }

    /// Creates zero-size bounds around a single point.
    pub fn from_lat_lng(point: impl Into<LatLng>) -> Self {
        let point: LatLng = point.into();
        let corner = LatLng::new(point.lat, point.lng);
        Self {
            south_west: corner,
            north_east: corner,
        }
    }

    /// Creates the smallest bounds containing all the points. Returns `None` if the iterator is empty.
    pub fn from_lat_lngs<P: Into<LatLng>>(points: impl IntoIterator<Item = P>) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut bounds = Self::from_lat_lng(iter.next()?);
        for p in iter {
            bounds.extend(p);
        }

        Some(bounds)
    }

    /// Extends the bounds to contain the given point.
    pub fn extend(&mut self, point: impl Into<LatLng>) {
        let point: LatLng = point.into();
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Extends the bounds to contain the other bounds.
    pub fn extend_bounds(&mut self, other: &LatLngBounds) {
        self.extend(other.south_west);
        self.extend(other.north_east);
    }

    /// Returns bounds extended (or retracted for negative values) by `buffer_ratio` of their size in each direction.
    pub fn pad(&self, buffer_ratio: f64) -> Self {
        let height_buffer = (self.south_west.lat - self.north_east.lat).abs() * buffer_ratio;
        let width_buffer = (self.south_west.lng - self.north_east.lng).abs() * buffer_ratio;

        Self::new(
            [
                self.south_west.lat - height_buffer,
                self.south_west.lng - width_buffer,
            ],
            [
                self.north_east.lat + height_buffer,
                self.north_east.lng + width_buffer,
            ],
        )
    }

    /// Center of the bounds (in degrees, not a geodesic center).
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// South-west corner.
    pub fn south_west(&self) -> LatLng {
        self.south_west
    }

    /// North-east corner.
    pub fn north_east(&self) -> LatLng {
        self.north_east
    }

    /// North-west corner.
    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north(), self.west())
    }

    /// South-east corner.
    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south(), self.east())
    }

    /// West longitude.
    pub fn west(&self) -> f64 {
        self.south_west.lng
    }

    /// South latitude.
    pub fn south(&self) -> f64 {
        self.south_west.lat
    }

    /// East longitude.
    pub fn east(&self) -> f64 {
        self.north_east.lng
    }

    /// North latitude.
    pub fn north(&self) -> f64 {
        self.north_east.lat
    }

    /// Returns true if the bounds span over the 180th meridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.west() < -180.0 || self.east() > 180.0
    }

    /// Returns true if the point is inside the bounds or on their border.
    pub fn contains(&self, point: impl Into<LatLng>) -> bool {
        let point: LatLng = point.into();
        point.lat >= self.south()
            && point.lat <= self.north()
            && point.lng >= self.west()
            && point.lng <= self.east()
    }

    /// Returns true if the other bounds lie completely inside these bounds.
    pub fn contains_bounds(&self, other: impl Into<LatLngBounds>) -> bool {
        let other: LatLngBounds = other.into();
        self.contains(other.south_west) && self.contains(other.north_east)
    }

    /// Returns true if the bounds have at least one common point, including touching borders.
    pub fn intersects(&self, other: impl Into<LatLngBounds>) -> bool {
        let other: LatLngBounds = other.into();
        let lat_intersects = other.north() >= self.south() && other.south() <= self.north();
        let lng_intersects = other.east() >= self.west() && other.west() <= self.east();

        lat_intersects && lng_intersects
    }

    /// Returns true if the intersection of the bounds is an area.
    pub fn overlaps(&self, other: impl Into<LatLngBounds>) -> bool {
        let other: LatLngBounds = other.into();
        let lat_overlaps = other.north() > self.south() && other.south() < self.north();
        let lng_overlaps = other.east() > self.west() && other.west() < self.east();

        lat_overlaps && lng_overlaps
    }

    /// Returns true if both corners are equal within [`DEFAULT_EQUALITY_MARGIN`].
    pub fn equals(&self, other: impl Into<LatLngBounds>) -> bool {
        self.equals_with_margin(other, DEFAULT_EQUALITY_MARGIN)
    }

    /// Returns true if both corners are equal within `max_margin` degrees.
    pub fn equals_with_margin(&self, other: impl Into<LatLngBounds>, max_margin: f64) -> bool {
        let other: LatLngBounds = other.into();
        self.south_west
            .equals_with_margin(other.south_west, max_margin)
            && self
                .north_east
                .equals_with_margin(other.north_east, max_margin)
    }

    /// String in `west,south,east,north` format, as used by WMS-like services.
    pub fn to_bbox_string(&self) -> String {
        format!(
            "{},{},{},{}",
            self.west(),
            self.south(),
            self.east(),
            self.north()
        )
    }
}

impl From<[[f64; 2]; 2]> for LatLngBounds {
    fn from([a, b]: [[f64; 2]; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<[LatLng; 2]> for LatLngBounds {
    fn from([a, b]: [LatLng; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<&LatLngBounds> for LatLngBounds {
    fn from(value: &LatLngBounds) -> Self {
        *value
    }
}
