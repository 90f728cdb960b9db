use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::cartesian::{Bounds, Point};
use crate::geo::datum::Datum;
use crate::geo::lat_lng::LatLng;
use crate::geo::projection::Projection;

/// Maximum number of iterations of the inverse latitude calculation.
pub const MAX_UNPROJECT_ITERATIONS: usize = 15;

/// The inverse latitude iteration stops once the latitude changes by less than this value (in radians).
pub const UNPROJECT_TOLERANCE: f64 = 1.0e-12;

/// Lower limit of the isometric latitude function, keeps the projection finite near the poles.
const MIN_TS: f64 = 1.0e-10;

/// Ellipsoidal (true) Mercator projection (EPSG:3395).
///
/// Unlike [`SphericalMercator`](super::SphericalMercator), this projection takes flattening of the earth into
/// account. Projecting is done in a closed form, but there is no closed form for the inverse, so unprojected
/// latitude is found by a fixed-point iteration, limited to [`MAX_UNPROJECT_ITERATIONS`] steps and stopped early
/// when the step is not larger than [`UNPROJECT_TOLERANCE`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllipticalMercator {
    datum: Datum,
}

impl EllipticalMercator {
    /// Latitude at which the projected world (with WGS84 datum) becomes a square.
    ///
    /// Latitudes are clamped to this value, which projects to `y ≈ 20037508`. That is outside of
    /// [`Projection::bounds`], which end at `y = 18764656.23138`, so projected points are not guaranteed to lie
    /// within the bounds.
    pub const MAX_LATITUDE: f64 = 85.0840591556;

    /// Elliptical Mercator with WGS84 datum.
    pub const WGS84: Self = Self::new(Datum::WGS84);

    /// Creates a new projection using the given datum.
    pub const fn new(datum: Datum) -> Self {
        Self { datum }
    }

    /// Equatorial radius.
    pub fn radius(&self) -> f64 {
        self.datum.semimajor()
    }

    /// Polar radius.
    pub fn minor_radius(&self) -> f64 {
        self.datum.semiminor()
    }
}

impl Default for EllipticalMercator {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Projection for EllipticalMercator {
    fn project(&self, lat_lng: &LatLng) -> Point {
        let r = self.radius();
        let e = self.datum.eccentricity();

        let phi = lat_lng
            .lat
            .clamp(-Self::MAX_LATITUDE, Self::MAX_LATITUDE)
            .to_radians();
        let con = e * phi.sin();
        let ts = (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - con) / (1.0 + con)).powf(e / 2.0);

        Point::new(lat_lng.lng.to_radians() * r, -r * ts.max(MIN_TS).ln())
    }

    fn unproject(&self, point: &Point) -> LatLng {
        let r = self.radius();
        let e = self.datum.eccentricity();

        let ts = (-point.y / r).exp();
        let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
        for _ in 0..MAX_UNPROJECT_ITERATIONS {
            let con = e * phi.sin();
            let con = ((1.0 - con) / (1.0 + con)).powf(e / 2.0);
            let d_phi = FRAC_PI_2 - 2.0 * (ts * con).atan() - phi;
            phi += d_phi;

            if d_phi.abs() <= UNPROJECT_TOLERANCE {
                break;
            }
        }

        LatLng::new(phi.to_degrees(), (point.x / r).to_degrees())
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(
            [-20037508.34279, -15496570.73972],
            [20037508.34279, 18764656.23138],
        )
    }
}
