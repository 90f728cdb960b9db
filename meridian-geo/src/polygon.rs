//! Algorithms on polygons: clipping against a rectangle, center calculation and hit testing.

use crate::cartesian::{Bounds, Point};
use crate::error::{GeoError, Result};
use crate::geo::{Crs, LatLng};
use crate::line::{center_offset, edge_intersection, OutCode};
use crate::shape::Shape;

/// Order in which the polygon is clipped by the bounds sides.
const CLIP_EDGES: [OutCode; 4] = [OutCode::LEFT, OutCode::BOTTOM, OutCode::RIGHT, OutCode::TOP];

/// Clips a polygon ring by the bounds with the Sutherland-Hodgman algorithm.
///
/// The ring is clipped by one side of the bounds at a time, each pass taking the result of the previous one. If
/// `round` is set, the points added at the bounds sides are rounded to integers. Returns an empty vector if the
/// polygon is outside of the bounds.
pub fn clip_polygon(
    points: impl IntoIterator<Item = impl Into<Point>>,
    bounds: &Bounds,
    round: bool,
) -> Vec<Point> {
    let mut coded: Vec<(Point, OutCode)> = points
        .into_iter()
        .map(|p| {
            let p: Point = p.into();
            (p, OutCode::of(&p, bounds))
        })
        .collect();

    for edge in CLIP_EDGES {
        let mut clipped = Vec::with_capacity(coded.len() + 1);
        let Some(&last) = coded.last() else {
            break;
        };

        let mut prev = last;
        for &(a, code_a) in &coded {
            let (b, code_b) = prev;
            if !code_a.intersects(edge) {
                if code_b.intersects(edge) {
                    let p = edge_intersection(&b, &a, edge, bounds, round);
                    clipped.push((p, OutCode::of(&p, bounds)));
                }
                clipped.push((a, code_a));
            } else if !code_b.intersects(edge) {
                let p = edge_intersection(&b, &a, edge, bounds, round);
                clipped.push((p, OutCode::of(&p, bounds)));
            }

            prev = (a, code_a);
        }

        coded = clipped;
    }

    coded.into_iter().map(|(p, _)| p).collect()
}

/// Vertex average of the points.
pub fn centroid(latlngs: impl IntoIterator<Item = impl Into<LatLng>>) -> Result<LatLng> {
    let latlngs: Vec<LatLng> = latlngs.into_iter().map(Into::into).collect();
    if latlngs.is_empty() {
        return Err(GeoError::EmptyCoordinates);
    }

    let (lat_sum, lng_sum) = latlngs
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    let len = latlngs.len() as f64;

    Ok(LatLng::new(lat_sum / len, lng_sum / len))
}

/// Area-weighted center of the polygon.
///
/// The center is calculated in pixel coordinates of the `crs` at the given zoom and then converted back to
/// geographic coordinates. Shapes that are not flat are reduced to their first ring with a warning. If the polygon
/// has zero area, its first point is returned.
pub fn polygon_center(latlngs: &Shape<LatLng>, crs: &Crs, zoom: f64) -> Result<LatLng> {
    let ring = latlngs.center_ring("polygon_center")?;
    let offset = center_offset(ring)?;
    let points: Vec<Point> = ring
        .iter()
        .map(|p| crs.lat_lng_to_point([p.lat - offset.lat, p.lng - offset.lng], zoom))
        .collect();

    // Pixel coordinates carry a large translation. Summing relative to the first vertex keeps the
    // products small so that they do not cancel out.
    let origin = points[0];
    let mut area = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;

    let mut p2 = points[points.len() - 1] - origin;
    for &p in &points {
        let p1 = p - origin;
        let f = p1.y * p2.x - p2.y * p1.x;
        x += (p1.x + p2.x) * f;
        y += (p1.y + p2.y) * f;
        area += f * 3.0;
        p2 = p1;
    }

    let center = if area == 0.0 {
        origin
    } else {
        origin + Point::new(x / area, y / area)
    };

    let lat_lng = crs.point_to_lat_lng(center, zoom);
    Ok(LatLng::new(lat_lng.lat + offset.lat, lat_lng.lng + offset.lng))
}

/// Returns true if the point is inside the polygon, using the even-odd rule over all the rings.
///
/// Holes are excluded, because a point inside a hole crosses the borders an even number of times.
pub fn polygon_contains_point(rings: &Shape<Point>, point: impl Into<Point>) -> bool {
    let p: Point = point.into();
    let mut inside = false;

    for ring in rings.rings() {
        let Some(&last) = ring.last() else {
            continue;
        };

        let mut p2 = last;
        for &p1 in ring {
            if (p1.y > p.y) != (p2.y > p.y)
                && p.x < (p2.x - p1.x) * (p.y - p1.y) / (p2.y - p1.y) + p1.x
            {
                inside = !inside;
            }

            p2 = p1;
        }
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use log::Level;

    use crate::test_log;

    fn points(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|&c| c.into()).collect()
    }

    fn square_lat_lngs() -> Vec<LatLng> {
        vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(10.0, 0.0),
            LatLng::new(10.0, 10.0),
            LatLng::new(0.0, 10.0),
        ]
    }

    #[test]
    fn clip_polygon_fixture() {
        let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
        let polygon = points(&[[5.0, 5.0], [15.0, 10.0], [10.0, 15.0]]);

        assert_eq!(
            clip_polygon(&polygon, &bounds, false),
            points(&[[7.5, 10.0], [5.0, 5.0], [10.0, 7.5], [10.0, 10.0]])
        );
        assert_eq!(
            clip_polygon(&polygon, &bounds, true),
            points(&[[8.0, 10.0], [5.0, 5.0], [10.0, 8.0], [10.0, 10.0]])
        );
    }

    #[test]
    fn clip_polygon_of_literals() {
        let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
        assert_eq!(
            clip_polygon([[5.0, 5.0], [15.0, 10.0], [10.0, 15.0]], &bounds, true),
            points(&[[8.0, 10.0], [5.0, 5.0], [10.0, 8.0], [10.0, 10.0]])
        );
    }

    #[test]
    fn clip_polygon_inside() {
        let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
        let polygon = points(&[[1.0, 1.0], [9.0, 1.0], [5.0, 9.0]]);
        assert_eq!(clip_polygon(&polygon, &bounds, false), polygon);
    }

    #[test]
    fn clip_polygon_outside() {
        let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
        let polygon = points(&[[20.0, 20.0], [30.0, 20.0], [25.0, 30.0]]);
        assert!(clip_polygon(&polygon, &bounds, false).is_empty());
        assert!(clip_polygon(Vec::<Point>::new(), &bounds, false).is_empty());
    }

    #[test]
    fn clip_polygon_covering_bounds() {
        let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
        let polygon = points(&[[-5.0, -5.0], [15.0, -5.0], [15.0, 15.0], [-5.0, 15.0]]);
        let clipped = clip_polygon(&polygon, &bounds, false);

        assert_eq!(clipped.len(), 4);
        for corner in bounds.into_quadrangle() {
            assert!(clipped.contains(&corner), "{corner} is missing");
        }
    }

    #[test]
    fn centroid_is_vertex_average() {
        assert_eq!(centroid(&square_lat_lngs()), Ok(LatLng::new(5.0, 5.0)));
        assert_eq!(centroid([[0.0, 0.0], [2.0, 4.0]]), Ok(LatLng::new(1.0, 2.0)));
        assert_eq!(centroid(Vec::<LatLng>::new()), Err(GeoError::EmptyCoordinates));
    }

    #[test]
    fn polygon_center_of_big_polygon() {
        let polygon = Shape::Ring(square_lat_lngs());
        for zoom in [0.0, 3.0, 10.5] {
            let center = polygon_center(&polygon, &Crs::EPSG3857, zoom).unwrap();
            assert_abs_diff_eq!(
                center,
                LatLng::new(5.019148099025293, 5.0),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn polygon_center_of_small_polygon() {
        let polygon = Shape::Ring(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.01, 0.0),
            LatLng::new(0.01, 0.01),
            LatLng::new(0.0, 0.01),
        ]);
        let center = polygon_center(&polygon, &Crs::EPSG3857, 0.0).unwrap();
        assert_abs_diff_eq!(center, LatLng::new(0.005, 0.005), epsilon = 1e-9);
    }

    #[test]
    fn polygon_center_of_small_polygon_far_from_origin() {
        let polygon = Shape::Ring(vec![
            LatLng::new(42.87097909758862, -81.12594320566181),
            LatLng::new(42.87108302016597, -81.12594320566181),
            LatLng::new(42.87108302016597, -81.12576504805303),
            LatLng::new(42.87097909758862, -81.12576504805303),
        ]);
        for zoom in [0.0, 6.0, 18.0] {
            let center = polygon_center(&polygon, &Crs::EPSG3857, zoom).unwrap();
            assert_abs_diff_eq!(
                center,
                LatLng::new(42.87103105887729, -81.12585412685742),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn polygon_center_of_world() {
        let polygon = Shape::Ring(vec![
            LatLng::new(90.0, -180.0),
            LatLng::new(90.0, 180.0),
            LatLng::new(-90.0, 180.0),
            LatLng::new(-90.0, -180.0),
        ]);
        let center = polygon_center(&polygon, &Crs::EPSG3857, 0.0).unwrap();
        assert_abs_diff_eq!(center, LatLng::new(0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn polygon_center_of_degenerate_polygon() {
        let point = Shape::Ring(vec![LatLng::new(1.0, 1.0)]);
        let center = polygon_center(&point, &Crs::EPSG3857, 0.0).unwrap();
        assert_abs_diff_eq!(center, LatLng::new(1.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn polygon_center_of_nested_polygon() {
        let polygon = Shape::Polygon(vec![
            square_lat_lngs(),
            vec![
                LatLng::new(2.0, 2.0),
                LatLng::new(3.0, 2.0),
                LatLng::new(3.0, 3.0),
            ],
        ]);
        let (center, records) =
            test_log::capture(|| polygon_center(&polygon, &Crs::EPSG3857, 0.0));
        assert_abs_diff_eq!(
            center.unwrap(),
            LatLng::new(5.019148099025293, 5.0),
            epsilon = 1e-6
        );

        let warnings: Vec<_> = records.iter().filter(|(level, _)| *level == Level::Warn).collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].1.contains("polygon_center"));
    }

    #[test]
    fn polygon_center_of_flat_polygon_does_not_warn() {
        let polygon = Shape::Ring(square_lat_lngs());
        let (_, records) = test_log::capture(|| polygon_center(&polygon, &Crs::EPSG3857, 0.0));
        assert!(records.iter().all(|(level, _)| *level != Level::Warn));
    }

    #[test]
    fn polygon_center_of_empty_polygon() {
        assert_matches!(
            polygon_center(&Shape::Ring(vec![]), &Crs::EPSG3857, 0.0),
            Err(GeoError::EmptyCoordinates)
        );
        assert_matches!(
            polygon_center(&Shape::MultiPolygon(vec![]), &Crs::EPSG3857, 0.0),
            Err(GeoError::EmptyCoordinates)
        );
    }

    #[test]
    fn polygon_center_in_other_crs() {
        let polygon = Shape::Ring(square_lat_lngs());
        let center = polygon_center(&polygon, &Crs::EPSG4326, 2.0).unwrap();
        assert_abs_diff_eq!(center, LatLng::new(5.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn contains_point() {
        let polygon = Shape::Ring(points(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]));
        assert!(polygon_contains_point(&polygon, [5.0, 5.0]));
        assert!(!polygon_contains_point(&polygon, [15.0, 5.0]));
        assert!(!polygon_contains_point(&polygon, [-1.0, 5.0]));
    }

    #[test]
    fn contains_point_with_hole() {
        let polygon = Shape::Polygon(vec![
            points(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]),
            points(&[[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0]]),
        ]);
        assert!(polygon_contains_point(&polygon, [2.0, 2.0]));
        assert!(!polygon_contains_point(&polygon, [5.0, 5.0]));
    }

    #[test]
    fn contains_point_in_multipolygon() {
        let polygon = Shape::MultiPolygon(vec![
            vec![points(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]])],
            vec![points(&[[10.0, 10.0], [12.0, 10.0], [12.0, 12.0], [10.0, 12.0]])],
        ]);
        assert!(polygon_contains_point(&polygon, [1.5, 0.5]));
        assert!(polygon_contains_point(&polygon, [11.0, 11.0]));
        assert!(!polygon_contains_point(&polygon, [5.0, 5.0]));
    }
}
