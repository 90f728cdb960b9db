//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    /// A coordinate list was required but none (or an empty one) was given.
    #[error("latlngs not passed")]
    EmptyCoordinates,
    /// Latitude or longitude is not a number.
    #[error("invalid LatLng object: ({lat}, {lng})")]
    InvalidLatLng {
        /// Latitude value that was given.
        lat: f64,
        /// Longitude value that was given.
        lng: f64,
    },
    /// Transformation coefficients cannot be built from the given input.
    #[error("invalid transformation coefficients: {0}")]
    InvalidTransformation(String),
}

/// Result type with [`GeoError`] as the error.
pub type Result<T> = std::result::Result<T, GeoError>;
