/// Reference ellipsoid of a celestial body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Creates a new datum from the semi-major axis (in meters) and inverse flattening.
    pub const fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Self {
            semimajor,
            inv_flattening,
        }
    }

    /// Equatorial radius.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Polar radius.
    pub fn semiminor(&self) -> f64 {
        self.semimajor * (1.0 - 1.0 / self.inv_flattening)
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// First eccentricity.
    pub fn eccentricity(&self) -> f64 {
        let ratio = self.semiminor() / self.semimajor;
        (1.0 - ratio * ratio).sqrt()
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wgs84_constants() {
        assert_relative_eq!(Datum::WGS84.semiminor(), 6_356_752.314_245_179, epsilon = 1e-6);
        assert_relative_eq!(
            Datum::WGS84.eccentricity(),
            0.081_819_190_842_622,
            epsilon = 1e-12
        );
    }
}
