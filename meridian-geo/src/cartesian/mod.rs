//! Types and functions on geometries in cartesian (pixel or projected) coordinates.

mod bounds;
mod point;
mod transformation;

pub use bounds::Bounds;
pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point};
pub use transformation::Transformation;
