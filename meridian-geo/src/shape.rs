//! Nested coordinate sequences used by polylines and polygons.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};

/// Coordinate sequence of a polyline or a polygon, with the nesting level made explicit.
///
/// Literal nested arrays are deserialized into the least nested variant that fits them:
///
/// ```
/// use meridian_geo::{geo::LatLng, Shape};
///
/// let shape: Shape<LatLng> = serde_json::from_str("[[[0, 0], [10, 0], [10, 10]]]").unwrap();
/// assert!(matches!(shape, Shape::Polygon(_)));
/// assert!(!shape.is_flat());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shape<P> {
    /// Single sequence of points: a polyline or a polygon ring.
    Ring(Vec<P>),
    /// List of rings: outer ring followed by holes, or parts of a multi-polyline.
    Polygon(Vec<Vec<P>>),
    /// List of polygons.
    MultiPolygon(Vec<Vec<Vec<P>>>),
}

impl<P> Shape<P> {
    /// Returns true if the shape is a plain sequence of points.
    pub fn is_flat(&self) -> bool {
        matches!(self, Shape::Ring(_))
    }

    /// Returns true if the shape has no elements at the top nesting level.
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Ring(points) => points.is_empty(),
            Shape::Polygon(rings) => rings.is_empty(),
            Shape::MultiPolygon(polygons) => polygons.is_empty(),
        }
    }

    /// The first ring of the shape. For a [`Shape::MultiPolygon`] it's the first ring of the first polygon.
    pub fn first_ring(&self) -> &[P] {
        match self {
            Shape::Ring(points) => points,
            Shape::Polygon(rings) => rings.first().map_or(&[], |r| r.as_slice()),
            Shape::MultiPolygon(polygons) => polygons
                .first()
                .and_then(|rings| rings.first())
                .map_or(&[], |r| r.as_slice()),
        }
    }

    /// Iterates over all the rings of the shape, in order.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &[P]> + '_> {
        match self {
            Shape::Ring(points) => Box::new(std::iter::once(points.as_slice())),
            Shape::Polygon(rings) => Box::new(rings.iter().map(|r| r.as_slice())),
            Shape::MultiPolygon(polygons) => Box::new(
                polygons
                    .iter()
                    .flat_map(|rings| rings.iter().map(|r| r.as_slice())),
            ),
        }
    }

    /// Iterates over all the points of the shape.
    pub fn points(&self) -> impl Iterator<Item = &P> + '_ {
        self.rings().flatten()
    }

    /// Creates a shape with the same structure, converting every point with `f`.
    pub fn map<Q>(&self, mut f: impl FnMut(&P) -> Q) -> Shape<Q> {
        let mut map_ring = |ring: &Vec<P>| ring.iter().map(&mut f).collect::<Vec<_>>();
        match self {
            Shape::Ring(points) => Shape::Ring(map_ring(points)),
            Shape::Polygon(rings) => Shape::Polygon(rings.iter().map(&mut map_ring).collect()),
            Shape::MultiPolygon(polygons) => Shape::MultiPolygon(
                polygons
                    .iter()
                    .map(|rings| rings.iter().map(&mut map_ring).collect())
                    .collect(),
            ),
        }
    }

    /// Ring that a center of the shape is calculated for.
    ///
    /// Shapes that are not flat are not expected here. They are reduced to their first ring with a warning.
    pub(crate) fn center_ring(&self, operation: &str) -> Result<&[P]> {
        if self.is_empty() {
            return Err(GeoError::EmptyCoordinates);
        }

        if !self.is_flat() {
            log::warn!("latlngs are not flat! Only the first ring will be used by {operation}");
        }

        let ring = self.first_ring();
        if ring.is_empty() {
            return Err(GeoError::EmptyCoordinates);
        }

        Ok(ring)
    }
}

impl<P> From<Vec<P>> for Shape<P> {
    fn from(value: Vec<P>) -> Self {
        Shape::Ring(value)
    }
}

impl<P> Default for Shape<P> {
    fn default() -> Self {
        Shape::Ring(Vec::new())
    }
}
