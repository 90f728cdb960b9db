use crate::cartesian::{Bounds, Point};
use crate::geo::lat_lng::LatLng;
use crate::geo::projection::Projection;

/// Equirectangular projection with longitude used as `x` and latitude as `y`, without any scaling.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LonLat;

impl Projection for LonLat {
    fn project(&self, lat_lng: &LatLng) -> Point {
        Point::new(lat_lng.lng, lat_lng.lat)
    }

    fn unproject(&self, point: &Point) -> LatLng {
        LatLng::new(point.y, point.x)
    }

    fn bounds(&self) -> Bounds {
        Bounds::new([-180.0, -90.0], [180.0, 90.0])
    }
}
