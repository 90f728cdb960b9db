//! Geographic coordinates (latitude and longitude) (see [`LatLng`]), coordinate reference systems (see [`Crs`]) and
//! projections used by them (see [`Projection`]).

mod crs;
mod datum;
mod lat_lng;
mod lat_lng_bounds;
pub mod projection;

pub use crs::{Crs, DistanceMetric, EARTH_RADIUS};
pub use datum::Datum;
pub use lat_lng::{GeoPoint, LatLng, NewGeoPoint, DEFAULT_EQUALITY_MARGIN};
pub use lat_lng_bounds::LatLngBounds;
pub use projection::{Projection, ProjectionType};
