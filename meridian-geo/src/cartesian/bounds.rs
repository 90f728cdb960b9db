use serde::{Deserialize, Serialize};

use crate::cartesian::point::Point;

/// Axis-aligned rectangle in pixel coordinates.
///
/// `min` is the top-left corner and `max` is the bottom-right one (pixel `y` grows downwards). A value of this type is
/// always valid, i.e. `min.x <= max.x && min.y <= max.y`. Bounds that do not contain any point yet are represented by
/// `None` (see [`Bounds::from_points`] and [`Bounds::extend_option`]).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoundsRepr")]
pub struct Bounds {
    min: Point,
    max: Point,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoundsRepr {
    Corners([Point; 2]),
    Object { min: Point, max: Point },
}

impl From<BoundsRepr> for Bounds {
    fn from(value: BoundsRepr) -> Self {
        match value {
            BoundsRepr::Corners([a, b]) => Bounds::new(a, b),
            BoundsRepr::Object { min, max } => Bounds::new(min, max),
        }
    }
}

impl Bounds {
    /// Creates bounds from two opposite corners, in any order.
    pub fn new(corner1: impl Into<Point>, corner2: impl Into<Point>) -> Self {
        let mut bounds = Self::from_point(corner1);
        bounds.extend(corner2);
        bounds
    }

    /// Creates zero-size bounds around a single point.
    pub fn from_point(point: impl Into<Point>) -> Self {
        let point = point.into();
        Self {
            min: point,
            max: point,
        }
    }

    /// Creates the smallest bounds containing all the points. Returns `None` if the iterator is empty.
    pub fn from_points<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Option<Self> {
        let mut bounds = None;
        for p in points {
            Self::extend_option(&mut bounds, p);
        }

        bounds
    }

    /// Extends possibly empty bounds with the point. Empty bounds are initialized with the point itself.
    pub fn extend_option(bounds: &mut Option<Self>, point: impl Into<Point>) {
        match bounds {
            Some(b) => b.extend(point),
            None => *bounds = Some(Self::from_point(point)),
        }
    }

    /// Top-left corner.
    pub fn min(&self) -> Point {
        self.min
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Point {
        self.max
    }

    /// Extends the bounds to contain the given point.
    pub fn extend(&mut self, point: impl Into<Point>) {
        let point: Point = point.into();
        self.min.x = self.min.x.min(point.x);
        self.max.x = self.max.x.max(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.y = self.max.y.max(point.y);
    }

    /// Extends the bounds to contain the other bounds.
    pub fn extend_bounds(&mut self, other: &Bounds) {
        self.extend(other.min);
        self.extend(other.max);
    }

    /// Returns new bounds containing both `self` and `other`.
    pub fn merge(&self, other: &Bounds) -> Self {
        let mut merged = *self;
        merged.extend_bounds(other);
        merged
    }

    /// Center point of the bounds.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Center point of the bounds with coordinates rounded to integers.
    pub fn center_rounded(&self) -> Point {
        self.center().round()
    }

    /// Bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.min.x, self.max.y)
    }

    /// Top-right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.max.x, self.min.y)
    }

    /// Top-left corner (same as [`Bounds::min`]).
    pub fn top_left(&self) -> Point {
        self.min
    }

    /// Bottom-right corner (same as [`Bounds::max`]).
    pub fn bottom_right(&self) -> Point {
        self.max
    }

    /// Width and height of the bounds.
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// Returns true if the point lies inside the bounds or on their border.
    pub fn contains(&self, point: impl Into<Point>) -> bool {
        let point: Point = point.into();
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Returns true if the other bounds lie completely inside these bounds.
    pub fn contains_bounds(&self, other: impl Into<Bounds>) -> bool {
        let other: Bounds = other.into();
        self.contains(&other.min) && self.contains(&other.max)
    }

    /// Returns true if the bounds have at least one common point, including touching borders.
    pub fn intersects(&self, other: impl Into<Bounds>) -> bool {
        let other: Bounds = other.into();
        let x_intersects = other.max.x >= self.min.x && other.min.x <= self.max.x;
        let y_intersects = other.max.y >= self.min.y && other.min.y <= self.max.y;

        x_intersects && y_intersects
    }

    /// Returns true if the intersection of the bounds is an area.
    pub fn overlaps(&self, other: impl Into<Bounds>) -> bool {
        let other: Bounds = other.into();
        let x_overlaps = other.max.x > self.min.x && other.min.x < self.max.x;
        let y_overlaps = other.max.y > self.min.y && other.min.y < self.max.y;

        x_overlaps && y_overlaps
    }

    /// Returns bounds extended (or retracted for negative values) by `buffer_ratio` of their size in each direction.
    ///
    /// For example, a ratio of 0.5 extends the bounds by 50% of the width to the left and to the right, and by 50% of
    /// the height upwards and downwards.
    pub fn pad(&self, buffer_ratio: f64) -> Self {
        let x_buffer = (self.min.x - self.max.x).abs() * buffer_ratio;
        let y_buffer = (self.min.y - self.max.y).abs() * buffer_ratio;

        Self::new(
            Point::new(self.min.x - x_buffer, self.min.y - y_buffer),
            Point::new(self.max.x + x_buffer, self.max.y + y_buffer),
        )
    }

    /// Exact equality of corners.
    pub fn equals(&self, other: impl Into<Bounds>) -> bool {
        let other: Bounds = other.into();
        self.min == other.top_left() && self.max == other.bottom_right()
    }

    /// Corners of the bounds in clockwise order starting from the top-left one.
    pub fn into_quadrangle(self) -> [Point; 4] {
        [self.min, self.top_right(), self.max, self.bottom_left()]
    }
}

impl From<[[f64; 2]; 2]> for Bounds {
    fn from([a, b]: [[f64; 2]; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<[Point; 2]> for Bounds {
    fn from([a, b]: [Point; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<(Point, Point)> for Bounds {
    fn from((a, b): (Point, Point)) -> Self {
        Self::new(a, b)
    }
}

impl From<&Bounds> for Bounds {
    fn from(value: &Bounds) -> Self {
        *value
    }
}
