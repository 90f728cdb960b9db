//! Algorithms on polylines: simplification, clipping against a rectangle, distances and hit testing.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::cartesian::{Bounds, CartesianPoint2d, Point};
use crate::error::Result;
use crate::geo::{Crs, LatLng, LatLngBounds};
use crate::polygon::centroid;
use crate::segment::Segment;
use crate::shape::Shape;

/// Area (in square meters) of the bounding box of coordinates, below which the coordinates are moved to the
/// origin before calculating their center, to keep enough precision.
pub(crate) const SMALL_AREA: f64 = 1700.0;

/// Maximum number of endpoint moves done while clipping one segment.
///
/// Each endpoint is moved to at most two edges in exact arithmetic. Rounding can push a moved point out of the
/// bounds again, so the number of moves is limited to never loop endlessly.
const MAX_CLIP_STEPS: usize = 8;

/// Position of a point relative to a rectangle, as used by the Cohen-Sutherland algorithm.
///
/// Every side of the rectangle the point lies outside of sets one bit of the code.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OutCode(u8);

impl OutCode {
    /// The point is inside the rectangle or on its border.
    pub const INSIDE: OutCode = OutCode(0);
    /// The point is to the left of the rectangle (`x < min.x`).
    pub const LEFT: OutCode = OutCode(1);
    /// The point is to the right of the rectangle (`x > max.x`).
    pub const RIGHT: OutCode = OutCode(2);
    /// The point is below the rectangle (`y < min.y`).
    pub const BOTTOM: OutCode = OutCode(4);
    /// The point is above the rectangle (`y > max.y`).
    pub const TOP: OutCode = OutCode(8);

    /// Calculates the code of the point relative to the bounds.
    pub fn of(point: &impl CartesianPoint2d, bounds: &Bounds) -> Self {
        let mut code = Self::INSIDE;

        if point.x() < bounds.min().x {
            code |= Self::LEFT;
        } else if point.x() > bounds.max().x {
            code |= Self::RIGHT;
        }

        if point.y() < bounds.min().y {
            code |= Self::BOTTOM;
        } else if point.y() > bounds.max().y {
            code |= Self::TOP;
        }

        code
    }

    /// Returns true if no bits are set.
    pub fn is_inside(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if all the bits of the `other` code are set in this one.
    pub fn contains(&self, other: OutCode) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if the codes have at least one common bit set.
    pub fn intersects(&self, other: OutCode) -> bool {
        self.0 & other.0 != 0
    }

    /// Raw bits of the code.
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl BitOr for OutCode {
    type Output = OutCode;

    fn bitor(self, rhs: Self) -> Self::Output {
        OutCode(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OutCode {
    type Output = OutCode;

    fn bitand(self, rhs: Self) -> Self::Output {
        OutCode(self.0 & rhs.0)
    }
}

/// Intersection of the line through `a` and `b` with the bounds side given by `code`.
///
/// Top and bottom sides take precedence over left and right ones if the code has several bits set.
pub(crate) fn edge_intersection(
    a: &Point,
    b: &Point,
    code: OutCode,
    bounds: &Bounds,
    round: bool,
) -> Point {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let min = bounds.min();
    let max = bounds.max();

    let (x, y) = if code.contains(OutCode::TOP) {
        (a.x + dx * (max.y - a.y) / dy, max.y)
    } else if code.contains(OutCode::BOTTOM) {
        (a.x + dx * (min.y - a.y) / dy, min.y)
    } else if code.contains(OutCode::RIGHT) {
        (max.x, a.y + dy * (max.x - a.x) / dx)
    } else if code.contains(OutCode::LEFT) {
        (min.x, a.y + dy * (min.x - a.x) / dx)
    } else {
        (a.x, a.y)
    };

    if round {
        Point::new_rounded(x, y)
    } else {
        Point::new(x, y)
    }
}

/// Part of a segment visible inside the clipping bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClippedSegment {
    /// Start of the visible part.
    pub a: Point,
    /// End of the visible part.
    pub b: Point,
    /// Out code of the original (not clipped) start point.
    pub code_a: OutCode,
    /// Out code of the original (not clipped) end point.
    pub code_b: OutCode,
}

impl ClippedSegment {
    /// Returns true if the original end point was outside of the bounds, so the segment leaves the clipping area.
    pub fn exits(&self) -> bool {
        !self.code_b.is_inside()
    }

    /// Returns true if the original start point was outside of the bounds, so the segment enters the clipping area.
    pub fn enters(&self) -> bool {
        !self.code_a.is_inside()
    }
}

/// Clips consecutive segments of a polyline against bounds with the Cohen-Sutherland algorithm.
///
/// The clipper remembers the out code of the end of the last clipped segment. When walking a polyline, the next
/// segment starts where the previous one ended, so that code can be reused instead of calculating it again.
#[derive(Debug, Clone)]
pub struct SegmentClipper {
    bounds: Bounds,
    round: bool,
    last_code: Option<OutCode>,
}

impl SegmentClipper {
    /// Creates a new clipper. If `round` is set, the points moved to the bounds edges are rounded to integers.
    pub fn new(bounds: Bounds, round: bool) -> Self {
        Self {
            bounds,
            round,
            last_code: None,
        }
    }

    /// Clipping bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Out code of the end point of the last clipped segment.
    pub fn last_code(&self) -> Option<OutCode> {
        self.last_code
    }

    /// Clips the segment `a -> b`.
    ///
    /// If `use_last_code` is set, the out code of `a` is taken from the last clipped segment. It's up to the caller
    /// to ensure that `a` is the end point of that segment.
    ///
    /// Returns `None` if no part of the segment is inside the bounds.
    pub fn clip(
        &mut self,
        a: impl Into<Point>,
        b: impl Into<Point>,
        use_last_code: bool,
    ) -> Option<ClippedSegment> {
        let mut a: Point = a.into();
        let mut b: Point = b.into();

        let original_code_a = match self.last_code {
            Some(code) if use_last_code => code,
            _ => OutCode::of(&a, &self.bounds),
        };
        let original_code_b = OutCode::of(&b, &self.bounds);
        self.last_code = Some(original_code_b);

        let mut code_a = original_code_a;
        let mut code_b = original_code_b;

        for _ in 0..MAX_CLIP_STEPS {
            if (code_a | code_b).is_inside() {
                return Some(ClippedSegment {
                    a,
                    b,
                    code_a: original_code_a,
                    code_b: original_code_b,
                });
            }

            if code_a.intersects(code_b) {
                return None;
            }

            let code_out = if code_a.is_inside() { code_b } else { code_a };
            let p = edge_intersection(&a, &b, code_out, &self.bounds, self.round);
            let new_code = OutCode::of(&p, &self.bounds);

            if code_out == code_a {
                a = p;
                code_a = new_code;
            } else {
                b = p;
                code_b = new_code;
            }
        }

        None
    }
}

/// Clips the segment `a -> b` by the bounds.
///
/// Returns `None` if no part of the segment is inside the bounds. Otherwise returns the visible part of the segment
/// along with the out codes of the original end points.
pub fn clip_segment(
    a: impl Into<Point>,
    b: impl Into<Point>,
    bounds: &Bounds,
    round: bool,
) -> Option<ClippedSegment> {
    SegmentClipper::new(*bounds, round).clip(a, b, false)
}

/// Splits a polyline into parts visible inside the bounds.
///
/// Every time the polyline leaves the bounds, the current part ends. Parts are returned in the order they appear in
/// the polyline.
pub fn clip_polyline(
    points: impl IntoIterator<Item = impl Into<Point>>,
    bounds: &Bounds,
    round: bool,
) -> Vec<Vec<Point>> {
    let points: Vec<Point> = points.into_iter().map(Into::into).collect();
    let mut parts = vec![];
    let mut current = vec![];
    let mut clipper = SegmentClipper::new(*bounds, round);

    for (j, pair) in points.windows(2).enumerate() {
        let Some(segment) = clipper.clip(pair[0], pair[1], j > 0) else {
            continue;
        };

        current.push(segment.a);
        if segment.exits() || j == points.len() - 2 {
            current.push(segment.b);
            parts.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

/// Reduces the number of points in a polyline, keeping its shape within `tolerance`.
///
/// First drops points closer than `tolerance` to the last kept one, then simplifies the rest with the
/// Douglas-Peucker algorithm. The first and the last points are always kept. If `tolerance` is not positive or there
/// are no points, the points are returned unchanged.
pub fn simplify(points: impl IntoIterator<Item = impl Into<Point>>, tolerance: f64) -> Vec<Point> {
    let points: Vec<Point> = points.into_iter().map(Into::into).collect();
    if tolerance <= 0.0 || points.is_empty() {
        return points;
    }

    let sq_tolerance = tolerance * tolerance;
    let reduced = reduce_points(&points, sq_tolerance);
    simplify_douglas_peucker(&reduced, sq_tolerance)
}

fn reduce_points(points: &[Point], sq_tolerance: f64) -> Vec<Point> {
    let mut reduced = vec![points[0]];
    let mut prev = 0;

    for (i, point) in points.iter().enumerate().skip(1) {
        if point.distance_sq(&points[prev]) > sq_tolerance {
            reduced.push(*point);
            prev = i;
        }
    }

    if prev < points.len() - 1 {
        reduced.push(points[points.len() - 1]);
    }

    reduced
}

fn simplify_douglas_peucker(points: &[Point], sq_tolerance: f64) -> Vec<Point> {
    let last = points.len() - 1;
    let mut markers = vec![false; points.len()];
    markers[0] = true;
    markers[last] = true;

    let mut stack = vec![(0, last)];
    while let Some((first, last)) = stack.pop() {
        let mut max_sq_dist = 0.0;
        let mut index = first;

        let segment = Segment(&points[first], &points[last]);
        for (i, point) in points.iter().enumerate().take(last).skip(first + 1) {
            let sq_dist = segment.distance_to_point_sq(point);
            if sq_dist > max_sq_dist {
                index = i;
                max_sq_dist = sq_dist;
            }
        }

        if max_sq_dist > sq_tolerance {
            markers[index] = true;
            stack.push((index, last));
            stack.push((first, index));
        }
    }

    points
        .iter()
        .zip(markers)
        .filter_map(|(p, marked)| marked.then_some(*p))
        .collect()
}

/// Distance between point `p` and segment `p1 -> p2`.
pub fn point_to_segment_distance(
    p: impl Into<Point>,
    p1: impl Into<Point>,
    p2: impl Into<Point>,
) -> f64 {
    point_to_segment_distance_sq(p, p1, p2).sqrt()
}

/// Squared distance between point `p` and segment `p1 -> p2`.
pub fn point_to_segment_distance_sq(
    p: impl Into<Point>,
    p1: impl Into<Point>,
    p2: impl Into<Point>,
) -> f64 {
    let (p1, p2): (Point, Point) = (p1.into(), p2.into());
    Segment(&p1, &p2).distance_to_point_sq(&p.into())
}

/// Point of segment `p1 -> p2` closest to `p`.
pub fn closest_point_on_segment(
    p: impl Into<Point>,
    p1: impl Into<Point>,
    p2: impl Into<Point>,
) -> Point {
    let (p1, p2): (Point, Point) = (p1.into(), p2.into());
    Segment(&p1, &p2).closest_point(&p.into())
}

/// Returns true if the point is closer than `tolerance` to any segment of the polyline parts.
pub fn polyline_contains_point(parts: &Shape<Point>, point: impl Into<Point>, tolerance: f64) -> bool {
    let point: Point = point.into();
    parts.rings().any(|part| {
        part.windows(2)
            .any(|s| Segment(&s[0], &s[1]).distance_to_point(&point) <= tolerance)
    })
}

/// Geographic point in the middle of the polyline length.
///
/// The length is measured in pixel coordinates of the `crs` at the given zoom. Shapes that are not flat are reduced
/// to their first ring with a warning.
pub fn polyline_center(latlngs: &Shape<LatLng>, crs: &Crs, zoom: f64) -> Result<LatLng> {
    let ring = latlngs.center_ring("polyline_center")?;
    let offset = center_offset(ring)?;
    let points: Vec<Point> = ring
        .iter()
        .map(|p| crs.lat_lng_to_point([p.lat - offset.lat, p.lng - offset.lng], zoom))
        .collect();

    let half_dist: f64 = points
        .windows(2)
        .map(|s| s[0].distance_to(s[1]) / 2.0)
        .sum();

    let mut center = points[0];
    if half_dist > 0.0 {
        let mut dist = 0.0;
        for s in points.windows(2) {
            let (p1, p2) = (s[0], s[1]);
            let segment_dist = p1.distance_to(p2);
            dist += segment_dist;

            if dist > half_dist {
                let ratio = (dist - half_dist) / segment_dist;
                center = Point::new(p2.x - ratio * (p2.x - p1.x), p2.y - ratio * (p2.y - p1.y));
                break;
            }
        }
    }

    let lat_lng = crs.point_to_lat_lng(center, zoom);
    Ok(LatLng::new(lat_lng.lat + offset.lat, lat_lng.lng + offset.lng))
}

/// Offset to subtract from coordinates before calculating their center.
///
/// For very small areas the coordinates are moved close to the origin, where projection has better precision.
pub(crate) fn center_offset(ring: &[LatLng]) -> Result<LatLng> {
    let Some(bounds) = LatLngBounds::from_lat_lngs(ring) else {
        return Ok(LatLng::default());
    };

    let area = bounds.north_west().distance_to(bounds.south_west())
        * bounds.north_east().distance_to(bounds.north_west());
    if area < SMALL_AREA {
        centroid(ring)
    } else {
        Ok(LatLng::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use crate::test_log;
    use approx::assert_abs_diff_eq;

    fn bounds() -> Bounds {
        Bounds::new([0.0, 0.0], [10.0, 10.0])
    }

    fn points(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn out_codes() {
        let b = bounds();
        assert_eq!(OutCode::of(&Point::new(5.0, 5.0), &b), OutCode::INSIDE);
        assert_eq!(OutCode::of(&Point::new(10.0, 0.0), &b), OutCode::INSIDE);
        assert_eq!(OutCode::of(&Point::new(-1.0, 5.0), &b), OutCode::LEFT);
        assert_eq!(OutCode::of(&Point::new(11.0, 5.0), &b), OutCode::RIGHT);
        assert_eq!(OutCode::of(&Point::new(5.0, -1.0), &b), OutCode::BOTTOM);
        assert_eq!(OutCode::of(&Point::new(5.0, 11.0), &b), OutCode::TOP);
        assert_eq!(
            OutCode::of(&Point::new(-1.0, 11.0), &b),
            OutCode::LEFT | OutCode::TOP
        );
        assert_eq!((OutCode::LEFT | OutCode::TOP).bits(), 9);
    }

    #[test]
    fn clip_segment_inside() {
        let segment = clip_segment([1.0, 1.0], [9.0, 9.0], &bounds(), false).unwrap();
        assert_eq!(segment.a, Point::new(1.0, 1.0));
        assert_eq!(segment.b, Point::new(9.0, 9.0));
        assert!(!segment.enters());
        assert!(!segment.exits());
    }

    #[test]
    fn clip_segment_crossing() {
        let segment = clip_segment([-5.0, 5.0], [15.0, 5.0], &bounds(), false).unwrap();
        assert_eq!(segment.a, Point::new(0.0, 5.0));
        assert_eq!(segment.b, Point::new(10.0, 5.0));
        assert_eq!(segment.code_a, OutCode::LEFT);
        assert_eq!(segment.code_b, OutCode::RIGHT);

        let segment = clip_segment([5.0, 5.0], [15.0, 20.0], &bounds(), false).unwrap();
        assert_eq!(segment.a, Point::new(5.0, 5.0));
        assert_abs_diff_eq!(segment.b, Point::new(25.0 / 3.0, 10.0), epsilon = 1e-12);
        assert!(segment.exits());
    }

    #[test]
    fn clip_segment_rounded() {
        let segment = clip_segment([5.0, 5.0], [15.0, 10.0], &bounds(), true).unwrap();
        assert_eq!(segment.b, Point::new(10.0, 8.0));

        let bounds = Bounds::new([-10.0, 0.0], [10.0, 10.0]);
        let segment = clip_segment([-5.0, 5.0], [0.0, 15.0], &bounds, true).unwrap();
        assert_eq!(segment.b, Point::new(-2.0, 10.0));
    }

    #[test]
    fn clip_segment_rejects_when_outcodes_share_side() {
        let b = bounds();
        let cases = [
            ([-5.0, 1.0], [-1.0, 9.0]),
            ([11.0, -3.0], [20.0, 5.0]),
            ([1.0, 11.0], [20.0, 15.0]),
            ([-1.0, -1.0], [5.0, -5.0]),
        ];
        for (a, c) in cases {
            let code_a = OutCode::of(&Point::from(a), &b);
            let code_c = OutCode::of(&Point::from(c), &b);
            assert!(code_a.intersects(code_c));
            assert_eq!(clip_segment(a, c, &b, false), None);
        }
    }

    #[test]
    fn clip_segment_results_are_inside() {
        let b = bounds();
        let cases = [
            ([-5.0, -5.0], [15.0, 15.0]),
            ([-5.0, 12.0], [12.0, -5.0]),
            ([5.0, -20.0], [5.0, 30.0]),
            ([3.0, 3.0], [30.0, 4.0]),
            ([-3.0, 8.0], [4.0, 12.0]),
        ];
        for (a, c) in cases {
            let segment = clip_segment(a, c, &b, false).unwrap();
            assert!(b.contains(&segment.a), "{a:?} -> {c:?}");
            assert!(b.contains(&segment.b), "{a:?} -> {c:?}");
        }
    }

    #[test]
    fn clip_segment_misses_corner() {
        assert_eq!(clip_segment([-5.0, 8.0], [2.0, 20.0], &bounds(), false), None);
    }

    #[test]
    fn clipper_reuses_last_code() {
        let mut clipper = SegmentClipper::new(bounds(), false);
        assert_eq!(clipper.last_code(), None);

        let first = clipper.clip([5.0, 5.0], [15.0, 5.0], false).unwrap();
        assert_eq!(first.code_b, OutCode::RIGHT);
        assert_eq!(clipper.last_code(), Some(OutCode::RIGHT));

        assert_eq!(clipper.clip([15.0, 5.0], [15.0, 8.0], true), None);
        let third = clipper.clip([15.0, 8.0], [5.0, 8.0], true).unwrap();
        assert_eq!(third.code_a, OutCode::RIGHT);
        assert_eq!(third.a, Point::new(10.0, 8.0));
    }

    #[test]
    fn clip_polyline_splits_parts() {
        let b = bounds();
        assert_eq!(
            clip_polyline(&points(&[[-5.0, 5.0], [5.0, 5.0], [15.0, 5.0]]), &b, false),
            vec![points(&[[0.0, 5.0], [5.0, 5.0], [10.0, 5.0]])]
        );
        assert_eq!(
            clip_polyline(
                &points(&[[5.0, 5.0], [15.0, 5.0], [15.0, 8.0], [5.0, 8.0]]),
                &b,
                false
            ),
            vec![
                points(&[[5.0, 5.0], [10.0, 5.0]]),
                points(&[[10.0, 8.0], [5.0, 8.0]])
            ]
        );
        assert!(clip_polyline(&points(&[[20.0, 20.0], [30.0, 30.0]]), &b, false).is_empty());
        assert!(clip_polyline(&points(&[[5.0, 5.0]]), &b, false).is_empty());
    }

    #[test]
    fn simplify_keeps_shape() {
        let input = points(&[
            [0.0, 0.0],
            [1.0, 0.1],
            [2.0, -0.1],
            [3.0, 5.0],
            [4.0, 6.0],
            [5.0, 7.0],
            [6.0, 8.1],
            [7.0, 9.0],
            [8.0, 9.0],
            [9.0, 9.0],
        ]);
        let simplified = simplify(&input, 1.0);
        assert_eq!(
            simplified,
            points(&[[0.0, 0.0], [2.0, -0.1], [3.0, 5.0], [7.0, 9.0], [9.0, 9.0]])
        );
        assert_eq!(simplify(&simplified, 1.0), simplified);
    }

    #[test]
    fn simplify_tolerance() {
        let input = points(&[[0.0, 0.0], [0.5, 0.5], [1.0, 0.0], [1.2, 0.1], [10.0, 0.0]]);
        assert_eq!(simplify(&input, 1.0), points(&[[0.0, 0.0], [10.0, 0.0]]));
        assert_eq!(
            simplify(&input, 0.1),
            points(&[[0.0, 0.0], [0.5, 0.5], [1.0, 0.0], [10.0, 0.0]])
        );
    }

    #[test]
    fn simplify_degenerate_input() {
        let input = points(&[[0.0, 0.0], [0.5, 0.5], [1.0, 0.0]]);
        assert_eq!(simplify(&input, 0.0), input);
        assert!(simplify(Vec::<Point>::new(), 1.0).is_empty());
        assert_eq!(simplify(&input[..1], 1.0), input[..1].to_vec());
        assert_eq!(
            simplify(&points(&[[1.0, 1.0], [1.0, 1.0]]), 1.0),
            points(&[[1.0, 1.0], [1.0, 1.0]])
        );
    }

    #[test]
    fn sequence_functions_take_literals() {
        assert_eq!(
            simplify([[0.0, 0.0], [0.5, 0.1], [10.0, 0.0]], 1.0),
            points(&[[0.0, 0.0], [10.0, 0.0]])
        );
        assert_eq!(
            clip_polyline([[-5.0, 5.0], [15.0, 5.0]], &bounds(), false),
            vec![points(&[[0.0, 5.0], [10.0, 5.0]])]
        );
    }

    #[test]
    fn segment_distance() {
        assert_eq!(
            point_to_segment_distance([5.0, 3.0], [0.0, 0.0], [10.0, 0.0]),
            3.0
        );
        assert_eq!(
            point_to_segment_distance_sq([13.0, 4.0], [0.0, 0.0], [10.0, 0.0]),
            25.0
        );
        assert_eq!(
            closest_point_on_segment([0.0, 10.0], [0.0, 0.0], [10.0, 10.0]),
            Point::new(5.0, 5.0)
        );
    }

    #[test]
    fn polyline_hit_test() {
        let parts = Shape::Polygon(vec![
            points(&[[0.0, 0.0], [10.0, 0.0]]),
            points(&[[0.0, 10.0], [10.0, 10.0], [10.0, 20.0]]),
        ]);
        assert!(polyline_contains_point(&parts, [5.0, 2.0], 3.0));
        assert!(polyline_contains_point(&parts, [12.0, 15.0], 3.0));
        assert!(!polyline_contains_point(&parts, [5.0, 5.0], 3.0));
        assert!(!polyline_contains_point(
            &Shape::Ring(points(&[[0.0, 0.0]])),
            [0.0, 0.0],
            3.0
        ));
    }

    #[test]
    fn polyline_center_of_line() {
        let line = Shape::Ring(vec![LatLng::new(80.0, 0.0), LatLng::new(80.0, 90.0)]);
        let center = polyline_center(&line, &Crs::EPSG3857, 0.0).unwrap();
        assert_abs_diff_eq!(center, LatLng::new(80.0, 45.0), epsilon = 1e-9);
    }

    #[test]
    fn polyline_center_of_path() {
        let line = Shape::Ring(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(10.0, 0.0),
            LatLng::new(10.0, 10.0),
            LatLng::new(0.0, 10.0),
        ]);
        for zoom in [0.0, 5.0] {
            let center = polyline_center(&line, &Crs::EPSG3857, zoom).unwrap();
            assert_abs_diff_eq!(center, LatLng::new(10.0, 5.0), epsilon = 1e-9);
        }
    }

    #[test]
    fn polyline_center_of_small_line() {
        let line = Shape::Ring(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 0.0001)]);
        let center = polyline_center(&line, &Crs::EPSG3857, 0.0).unwrap();
        assert_abs_diff_eq!(center, LatLng::new(0.0, 0.00005), epsilon = 1e-12);
    }

    #[test]
    fn polyline_center_of_single_point() {
        let line = Shape::Ring(vec![LatLng::new(20.0, 30.0)]);
        let center = polyline_center(&line, &Crs::EPSG3857, 0.0).unwrap();
        assert_abs_diff_eq!(center, LatLng::new(20.0, 30.0), epsilon = 1e-9);
    }

    #[test]
    fn polyline_center_of_nested_line() {
        let line = Shape::Polygon(vec![
            vec![LatLng::new(80.0, 0.0), LatLng::new(80.0, 90.0)],
            vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)],
        ]);
        let (center, records) =
            test_log::capture(|| polyline_center(&line, &Crs::EPSG3857, 0.0));
        assert_abs_diff_eq!(center.unwrap(), LatLng::new(80.0, 45.0), epsilon = 1e-9);

        let warnings = records
            .iter()
            .filter(|(level, _)| *level == log::Level::Warn)
            .count();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn polyline_center_of_empty_line() {
        assert_eq!(
            polyline_center(&Shape::Ring(vec![]), &Crs::EPSG3857, 0.0),
            Err(GeoError::EmptyCoordinates)
        );
    }
}
