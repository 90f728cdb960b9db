use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::util::format_num;

/// Anything that has `x` and `y` coordinates in a 2d cartesian space.
pub trait CartesianPoint2d {
    /// X coordinate.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;

    /// Squared euclidean distance to the `other` point.
    fn distance_sq(&self, other: &impl CartesianPoint2d) -> f64 {
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        dx * dx + dy * dy
    }
}

/// Point types that can be created from a pair of cartesian coordinates.
pub trait NewCartesianPoint2d: CartesianPoint2d {
    /// Creates a new point.
    fn new(x: f64, y: f64) -> Self;
}

/// A point in pixel (or projected) coordinates.
///
/// Every operation returns a new point. In-place modification is available only through the
/// compound assignment operators (`+=`, `-=`, `*=`, `/=`).
///
/// Two points are equal only if both their coordinates are exactly equal. Use the [`approx`]
/// traits to compare with a tolerance.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PointRepr")]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Array([f64; 2]),
    Object { x: f64, y: f64 },
}

impl From<PointRepr> for Point {
    fn from(value: PointRepr) -> Self {
        match value {
            PointRepr::Array([x, y]) => Point::new(x, y),
            PointRepr::Object { x, y } => Point::new(x, y),
        }
    }
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new point, rounding both coordinates to the nearest integer.
    pub fn new_rounded(x: f64, y: f64) -> Self {
        Self::new(x, y).round()
    }

    /// Creates a new point from any cartesian point.
    pub fn from_cartesian(point: &impl CartesianPoint2d) -> Self {
        Self::new(point.x(), point.y())
    }

    /// Returns coordinates as an array.
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Multiplies both coordinates by `num`.
    pub fn multiply_by(&self, num: f64) -> Self {
        *self * num
    }

    /// Divides both coordinates by `num`.
    pub fn divide_by(&self, num: f64) -> Self {
        *self / num
    }

    /// Multiplies each coordinate by the corresponding coordinate of `scale`.
    pub fn scale_by(&self, scale: impl Into<Point>) -> Self {
        let scale: Point = scale.into();
        Self::new(self.x * scale.x, self.y * scale.y)
    }

    /// Inverse of [`Point::scale_by`].
    pub fn unscale_by(&self, scale: impl Into<Point>) -> Self {
        let scale: Point = scale.into();
        Self::new(self.x / scale.x, self.y / scale.y)
    }

    /// Rounds coordinates to the nearest integer. Halves are rounded up, so `-2.5` becomes `-2`.
    pub fn round(&self) -> Self {
        Self::new((self.x + 0.5).floor(), (self.y + 0.5).floor())
    }

    /// Rounds coordinates down.
    pub fn floor(&self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Rounds coordinates up.
    pub fn ceil(&self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    /// Rounds coordinates towards zero.
    pub fn trunc(&self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }

    /// Cartesian distance to the other point.
    pub fn distance_to(&self, other: impl Into<Point>) -> f64 {
        let other: Point = other.into();
        self.distance_sq(&other).sqrt()
    }

    /// Exact equality of both coordinates.
    pub fn equals(&self, other: impl Into<Point>) -> bool {
        let other: Point = other.into();
        *self == other
    }

    /// Returns true if both coordinates of `other` are not greater than the coordinates of this point
    /// in absolute values.
    ///
    /// This is not a geometric containment test.
    pub fn contains(&self, other: impl Into<Point>) -> bool {
        let other: Point = other.into();
        other.x.abs() <= self.x.abs() && other.y.abs() <= self.y.abs()
    }
}

impl CartesianPoint2d for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl NewCartesianPoint2d for Point {
    fn new(x: f64, y: f64) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<&Point> for Point {
    fn from(value: &Point) -> Self {
        *value
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Point({}, {})",
            format_num(self.x, 6),
            format_num(self.y, 6)
        )
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
