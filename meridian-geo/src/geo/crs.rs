use std::f64::consts::PI;

use crate::cartesian::{Bounds, Point, Transformation};
use crate::geo::lat_lng::LatLng;
use crate::geo::lat_lng_bounds::LatLngBounds;
use crate::geo::projection::{
    EllipticalMercator, LonLat, Projection, ProjectionType, SphericalMercator,
};
use crate::util::wrap_num;

/// Mean earth radius used for great-circle distances.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Scale of the Mercator transformations, maps the projected world width onto one unit.
const MERCATOR_SCALE: f64 = 0.5 / (PI * 6_378_137.0);

/// Size of a tile in pixels. Tile based CRSs have the world `TILE_SIZE` pixels wide at zoom 0.
const TILE_SIZE: f64 = 256.0;

/// Way of measuring distance between two geographic points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DistanceMetric {
    /// Great-circle distance on a sphere with the given radius, in meters.
    Haversine {
        /// Radius of the sphere.
        radius: f64,
    },
    /// Planar distance between `(lng, lat)` treated as cartesian coordinates.
    Euclidean,
}

/// Coordinate reference system.
///
/// Combines a [`Projection`] converting geographic coordinates into projected ones, and a [`Transformation`]
/// converting projected coordinates into pixel coordinates at the given zoom level. Besides that, CRS knows how to
/// measure distances and how to wrap coordinates around the world.
///
/// Named systems are available as constants:
///
/// ```
/// use meridian_geo::geo::{Crs, LatLng};
///
/// let point = Crs::EPSG3857.lat_lng_to_point(LatLng::new(0.0, 0.0), 0.0);
/// assert_eq!(point.x, 128.0);
/// assert_eq!(point.y, 128.0);
/// ```
///
/// Other systems can be derived from them with the `with_*` methods.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Crs {
    code: &'static str,
    projection: ProjectionType,
    transformation: Transformation,
    scale_base: f64,
    distance: DistanceMetric,
    wrap_lng: Option<[f64; 2]>,
    wrap_lat: Option<[f64; 2]>,
    infinite: bool,
}

impl Crs {
    /// Base for the CRSs on the earth surface.
    ///
    /// Uses haversine distance and wraps longitude into `[-180, 180]`. The projection is plain longitude/latitude
    /// without any scaling, so derived systems are expected to replace both the projection and the transformation.
    pub const EARTH: Crs = Crs {
        code: "",
        projection: ProjectionType::LonLat(LonLat),
        transformation: Transformation::new(1.0, 0.0, 1.0, 0.0),
        scale_base: TILE_SIZE,
        distance: DistanceMetric::Haversine {
            radius: EARTH_RADIUS,
        },
        wrap_lng: Some([-180.0, 180.0]),
        wrap_lat: None,
        infinite: false,
    };

    /// Spherical Mercator, the most common CRS for online maps.
    pub const EPSG3857: Crs = Crs::EARTH
        .with_code("EPSG:3857")
        .with_projection(ProjectionType::SphericalMercator(SphericalMercator::WGS84))
        .with_transformation(Transformation::new(
            MERCATOR_SCALE,
            0.5,
            -MERCATOR_SCALE,
            0.5,
        ));

    /// Legacy code of [`Crs::EPSG3857`].
    pub const EPSG900913: Crs = Crs::EPSG3857.with_code("EPSG:900913");

    /// Plate carrée. The world is twice as wide as it is high, so at zoom 0 it takes two tiles.
    pub const EPSG4326: Crs = Crs::EARTH
        .with_code("EPSG:4326")
        .with_projection(ProjectionType::LonLat(LonLat))
        .with_transformation(Transformation::new(1.0 / 180.0, 1.0, -1.0 / 180.0, 0.5));

    /// Elliptical Mercator.
    pub const EPSG3395: Crs = Crs::EARTH
        .with_code("EPSG:3395")
        .with_projection(ProjectionType::EllipticalMercator(
            EllipticalMercator::WGS84,
        ))
        .with_transformation(Transformation::new(
            MERCATOR_SCALE,
            0.5,
            -MERCATOR_SCALE,
            0.5,
        ));

    /// Flat CRS mapping longitude and latitude directly onto `x` and `y` (with `y` axis pointing down).
    ///
    /// Can be used for maps of non-geographic content, like floor plans or game maps. One unit equals one pixel
    /// at zoom 0. The world has no bounds, and the coordinates are never wrapped.
    pub const SIMPLE: Crs = Crs {
        code: "",
        projection: ProjectionType::LonLat(LonLat),
        transformation: Transformation::new(1.0, 0.0, -1.0, 0.0),
        scale_base: 1.0,
        distance: DistanceMetric::Euclidean,
        wrap_lng: None,
        wrap_lat: None,
        infinite: true,
    };

    /// Returns a copy of the CRS with the given code.
    pub const fn with_code(self, code: &'static str) -> Self {
        Self { code, ..self }
    }

    /// Returns a copy of the CRS with the given projection.
    pub const fn with_projection(self, projection: ProjectionType) -> Self {
        Self { projection, ..self }
    }

    /// Returns a copy of the CRS with the given transformation.
    pub const fn with_transformation(self, transformation: Transformation) -> Self {
        Self {
            transformation,
            ..self
        }
    }

    /// Returns a copy of the CRS with the given scale at zoom level 0.
    pub const fn with_scale_base(self, scale_base: f64) -> Self {
        Self { scale_base, ..self }
    }

    /// Returns a copy of the CRS with the given distance metric.
    pub const fn with_distance(self, distance: DistanceMetric) -> Self {
        Self { distance, ..self }
    }

    /// Returns a copy of the CRS with the given longitude wrapping range.
    pub const fn with_wrap_lng(self, wrap_lng: Option<[f64; 2]>) -> Self {
        Self { wrap_lng, ..self }
    }

    /// Returns a copy of the CRS with the given latitude wrapping range.
    pub const fn with_wrap_lat(self, wrap_lat: Option<[f64; 2]>) -> Self {
        Self { wrap_lat, ..self }
    }

    /// Returns a copy of the CRS that is (or is not) bounded.
    pub const fn with_infinite(self, infinite: bool) -> Self {
        Self { infinite, ..self }
    }

    /// Identifier of the CRS, e.g. `EPSG:3857`. Empty for CRSs without a code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Projection of the CRS.
    pub fn projection(&self) -> &ProjectionType {
        &self.projection
    }

    /// Transformation from projected to pixel coordinates at scale 1.
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    /// Distance metric used by [`Crs::distance`].
    pub fn distance_metric(&self) -> DistanceMetric {
        self.distance
    }

    /// Longitude range the coordinates are wrapped into, if any.
    pub fn wrap_lng(&self) -> Option<[f64; 2]> {
        self.wrap_lng
    }

    /// Latitude range the coordinates are wrapped into, if any.
    pub fn wrap_lat(&self) -> Option<[f64; 2]> {
        self.wrap_lat
    }

    /// Returns true if the CRS has no bounds.
    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// Projects the geographic point into the pixel coordinates at the given zoom level.
    pub fn lat_lng_to_point(&self, lat_lng: impl Into<LatLng>, zoom: f64) -> Point {
        let projected = self.project(lat_lng);
        self.transformation.transform(projected, self.scale(zoom))
    }

    /// Inverse of [`Crs::lat_lng_to_point`].
    pub fn point_to_lat_lng(&self, point: impl Into<Point>, zoom: f64) -> LatLng {
        let untransformed = self.transformation.untransform(point, self.scale(zoom));
        self.unproject(untransformed)
    }

    /// Projects the geographic point with the CRS projection.
    pub fn project(&self, lat_lng: impl Into<LatLng>) -> Point {
        self.projection.project(&lat_lng.into())
    }

    /// Unprojects the projected point with the CRS projection.
    pub fn unproject(&self, point: impl Into<Point>) -> LatLng {
        self.projection.unproject(&point.into())
    }

    /// Scale factor between projected and pixel coordinates at the given zoom level.
    ///
    /// Each zoom level doubles the scale. Fractional zoom levels are allowed.
    pub fn scale(&self, zoom: f64) -> f64 {
        self.scale_base * 2f64.powf(zoom)
    }

    /// Zoom level corresponding to the scale, inverse of [`Crs::scale`].
    pub fn zoom(&self, scale: f64) -> f64 {
        (scale / self.scale_base).log2()
    }

    /// Bounds of the projected world in pixel coordinates at the given zoom level.
    ///
    /// Returns `None` for infinite CRSs.
    pub fn projected_bounds(&self, zoom: f64) -> Option<Bounds> {
        if self.infinite {
            return None;
        }

        let bounds = self.projection.bounds();
        let scale = self.scale(zoom);
        Some(Bounds::new(
            self.transformation.transform(bounds.min(), scale),
            self.transformation.transform(bounds.max(), scale),
        ))
    }

    /// Distance between two geographic points.
    ///
    /// For CRSs on the earth surface the result is in meters.
    pub fn distance(&self, a: impl Into<LatLng>, b: impl Into<LatLng>) -> f64 {
        let (a, b): (LatLng, LatLng) = (a.into(), b.into());
        match self.distance {
            DistanceMetric::Haversine { radius } => {
                let lat1 = a.lat.to_radians();
                let lat2 = b.lat.to_radians();
                let sin_d_lat = ((b.lat - a.lat).to_radians() / 2.0).sin();
                let sin_d_lng = ((b.lng - a.lng).to_radians() / 2.0).sin();
                let h = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lng * sin_d_lng;
                let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
                radius * c
            }
            DistanceMetric::Euclidean => {
                let dx = b.lng - a.lng;
                let dy = b.lat - a.lat;
                (dx * dx + dy * dy).sqrt()
            }
        }
    }

    /// Returns the point with the coordinates wrapped into the CRS wrapping ranges. Altitude is kept as is.
    pub fn wrap_lat_lng(&self, lat_lng: impl Into<LatLng>) -> LatLng {
        let lat_lng: LatLng = lat_lng.into();
        let lng = match self.wrap_lng {
            Some(range) => wrap_num(lat_lng.lng, range, true),
            None => lat_lng.lng,
        };
        let lat = match self.wrap_lat {
            Some(range) => wrap_num(lat_lng.lat, range, true),
            None => lat_lng.lat,
        };

        LatLng {
            lat,
            lng,
            alt: lat_lng.alt,
        }
    }

    /// Moves the bounds so that their center is inside the wrapping ranges, keeping their size.
    ///
    /// The resulting bounds can still stick out of the wrapping range on one side, see
    /// [`LatLngBounds::crosses_antimeridian`].
    pub fn wrap_lat_lng_bounds(&self, bounds: &LatLngBounds) -> LatLngBounds {
        let center = bounds.center();
        let wrapped = self.wrap_lat_lng(center);
        let lat_shift = center.lat - wrapped.lat;
        let lng_shift = center.lng - wrapped.lng;

        if lat_shift == 0.0 && lng_shift == 0.0 {
            return *bounds;
        }

        let sw = bounds.south_west();
        let ne = bounds.north_east();
        LatLngBounds::new(
            [sw.lat - lat_shift, sw.lng - lng_shift],
            [ne.lat - lat_shift, ne.lng - lng_shift],
        )
    }
}

impl Default for Crs {
    fn default() -> Self {
        Self::EPSG3857
    }
}
