use serde::{Deserialize, Serialize};

use crate::cartesian::point::Point;
use crate::error::{GeoError, Result};

/// Affine transformation `(x, y) -> ((a * x + b) * scale, (c * y + d) * scale)`.
///
/// Used by [`Crs`](crate::geo::Crs) to convert projected coordinates into pixel coordinates at a given zoom scale.
/// Zero `a` or `c` coefficients make the transformation not invertible; this is not checked.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Transformation {
    /// Creates a new transformation with the given coefficients.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Creates a transformation from a slice of exactly four coefficients.
    pub fn from_slice(coefficients: &[f64]) -> Result<Self> {
        match coefficients {
            &[a, b, c, d] => Ok(Self::new(a, b, c, d)),
            _ => Err(GeoError::InvalidTransformation(format!(
                "expected 4 coefficients, got {}",
                coefficients.len()
            ))),
        }
    }

    /// Coefficients `[a, b, c, d]`.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Transforms the point with the given scale.
    pub fn transform(&self, point: impl Into<Point>, scale: f64) -> Point {
        let point: Point = point.into();
        Point::new(
            scale * (self.a * point.x + self.b),
            scale * (self.c * point.y + self.d),
        )
    }

    /// Same as [`Transformation::transform`] with the scale of 1.
    pub fn transform_unscaled(&self, point: impl Into<Point>) -> Point {
        self.transform(point, 1.0)
    }

    /// Same as [`Transformation::transform`], but rounds the resulting coordinates to integers.
    pub fn transform_rounded(&self, point: impl Into<Point>, scale: f64) -> Point {
        self.transform(point, scale).round()
    }

    /// Reverse transformation with the given scale.
    pub fn untransform(&self, point: impl Into<Point>, scale: f64) -> Point {
        let point: Point = point.into();
        Point::new(
            (point.x / scale - self.b) / self.a,
            (point.y / scale - self.d) / self.c,
        )
    }

    /// Same as [`Transformation::untransform`] with the scale of 1.
    pub fn untransform_unscaled(&self, point: impl Into<Point>) -> Point {
        self.untransform(point, 1.0)
    }
}

impl From<[f64; 4]> for Transformation {
    fn from([a, b, c, d]: [f64; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl TryFrom<&[f64]> for Transformation {
    type Error = GeoError;

    fn try_from(value: &[f64]) -> Result<Self> {
        Self::from_slice(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const T: Transformation = Transformation::new(1.0, 2.0, 3.0, 4.0);

    #[test]
    fn transform() {
        assert_eq!(T.transform([10.0, 20.0], 2.0), Point::new(24.0, 128.0));
        assert_eq!(T.transform_unscaled([10.0, 20.0]), Point::new(12.0, 64.0));
    }

    #[test]
    fn untransform() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(T.untransform(T.transform(p, 2.0), 2.0), p);
        assert_eq!(T.untransform_unscaled([12.0, 64.0]), p);
    }

    #[test]
    fn round_trip_is_exact_for_power_of_two_scales() {
        let t = Transformation::new(0.5, 0.25, -0.5, 0.25);
        for zoom in 0..20 {
            let scale = 256.0 * 2f64.powi(zoom);
            for p in [[0.0, 0.0], [1.5, -3.25], [-1000.0, 4096.5]] {
                let p = Point::from(p);
                assert_eq!(t.untransform(t.transform(p, scale), scale), p);
            }
        }
    }

    #[test]
    fn transform_rounded() {
        let t = Transformation::new(0.5, 0.0, 0.5, 0.0);
        assert_eq!(t.transform_rounded([3.0, 5.0], 1.0), Point::new(2.0, 3.0));
    }

    #[test]
    fn construct_from_array() {
        assert_eq!(Transformation::from([1.0, 2.0, 3.0, 4.0]), T);
        assert_eq!(
            Transformation::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap(),
            T
        );
        assert_eq!(T.coefficients(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn construct_from_invalid_slice() {
        assert_matches!(
            Transformation::from_slice(&[1.0, 2.0, 3.0]),
            Err(GeoError::InvalidTransformation(_))
        );
    }
}
