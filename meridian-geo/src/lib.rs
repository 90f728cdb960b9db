//! Coordinate systems and geometry primitives of a slippy map.
//!
//! The crate converts geographic coordinates ([`geo::LatLng`]) into pixel coordinates of a map view
//! ([`cartesian::Point`]) and back, using one of the coordinate reference systems ([`geo::Crs`]). It also contains
//! the algorithms needed to prepare geometries for rendering: clipping by the visible area, simplification, finding
//! the label position and hit testing.
//!
//! ```
//! use meridian_geo::cartesian::Bounds;
//! use meridian_geo::geo::{Crs, LatLng};
//! use meridian_geo::line::clip_polyline;
//!
//! let crs = Crs::EPSG3857;
//! let line: Vec<_> = [LatLng::new(50.0, 30.0), LatLng::new(51.0, 31.0)]
//!     .into_iter()
//!     .map(|p| crs.lat_lng_to_point(p, 10.0))
//!     .collect();
//!
//! let viewport = Bounds::new(line[0], line[0] + [256.0, -256.0].into());
//! let visible = clip_polyline(&line, &viewport, true);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod cartesian;
pub mod error;
pub mod geo;
pub mod line;
pub mod polygon;
mod segment;
mod shape;
pub mod util;

#[cfg(test)]
mod test_log;

#[cfg(feature = "geo-types")]
pub mod geo_types;

pub use error::{GeoError, Result};
pub use segment::Segment;
pub use shape::Shape;
