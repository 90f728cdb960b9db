use crate::cartesian::{CartesianPoint2d, Point};

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a, P>(pub &'a P, pub &'a P);

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Point of the segment closest to the given point:
    ///
    /// * if the normal from the point to the segment ends inside the segment, it's the end of the normal
    /// * otherwise it's the segment endpoint closest to the point
    pub fn closest_point(&self, point: &impl CartesianPoint2d) -> Point {
        let mut x = self.0.x();
        let mut y = self.0.y();
        let dx = self.1.x() - x;
        let dy = self.1.y() - y;
        let len_sq = dx * dx + dy * dy;

        if len_sq > 0.0 {
            let t = ((point.x() - x) * dx + (point.y() - y) * dy) / len_sq;
            if t > 1.0 {
                x = self.1.x();
                y = self.1.y();
            } else if t > 0.0 {
                x += dx * t;
                y += dy * t;
            }
        }

        Point::new(x, y)
    }

    /// Shortest euclidean distance (squared) between a point and the segment.
    pub fn distance_to_point_sq(&self, point: &impl CartesianPoint2d) -> f64 {
        point.distance_sq(&self.closest_point(point))
    }

    /// Shortest euclidean distance between a point and the segment.
    pub fn distance_to_point(&self, point: &impl CartesianPoint2d) -> f64 {
        self.distance_to_point_sq(point).sqrt()
    }
}
