//! Map projections convert geographic coordinates into planar projected coordinates and back.

mod lon_lat;
mod mercator;
mod spherical_mercator;

pub use lon_lat::LonLat;
pub use mercator::EllipticalMercator;
pub use spherical_mercator::SphericalMercator;

use crate::cartesian::{Bounds, Point};
use crate::geo::lat_lng::LatLng;

/// Pure forward/inverse mapping between geographic and projected coordinates.
///
/// `project` and `unproject` are approximate inverses of each other for every point inside the projection
/// [`bounds`](Projection::bounds). Points outside the valid domain are clamped to it, so `project` never returns
/// infinite or NaN values for finite input.
pub trait Projection {
    /// Projects geographic point into planar coordinates.
    fn project(&self, lat_lng: &LatLng) -> Point;

    /// Converts planar coordinates back into geographic point.
    fn unproject(&self, point: &Point) -> LatLng;

    /// Valid extent of projected coordinates.
    fn bounds(&self) -> Bounds;
}

/// Projection used by a [`Crs`](crate::geo::Crs).
#[derive(Debug, Copy, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProjectionType {
    /// Plate carrée: longitude and latitude are used as `x` and `y` directly.
    LonLat(LonLat),
    /// Spherical (web) Mercator.
    SphericalMercator(SphericalMercator),
    /// Ellipsoidal (true) Mercator.
    EllipticalMercator(EllipticalMercator),
}

impl Projection for ProjectionType {
    fn project(&self, lat_lng: &LatLng) -> Point {
        match self {
            ProjectionType::LonLat(p) => p.project(lat_lng),
            ProjectionType::SphericalMercator(p) => p.project(lat_lng),
            ProjectionType::EllipticalMercator(p) => p.project(lat_lng),
        }
    }

    fn unproject(&self, point: &Point) -> LatLng {
        match self {
            ProjectionType::LonLat(p) => p.unproject(point),
            ProjectionType::SphericalMercator(p) => p.unproject(point),
            ProjectionType::EllipticalMercator(p) => p.unproject(point),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            ProjectionType::LonLat(p) => p.bounds(),
            ProjectionType::SphericalMercator(p) => p.bounds(),
            ProjectionType::EllipticalMercator(p) => p.bounds(),
        }
    }
}
