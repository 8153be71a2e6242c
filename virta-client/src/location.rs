//! Device location seam.
//!
//! Permission prompts and continuous updates belong to the platform; the
//! list screen only reads a best-effort last-known fix, once per load.

use crate::domain::{Coordinate, CoordinateError};

/// Error returned when parsing a `"lat,lon"` location string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    /// Input is not two comma-separated numbers
    #[error("malformed location {0:?}: expected \"lat,lon\"")]
    Malformed(String),

    /// Numbers parsed but are not a valid coordinate
    #[error(transparent)]
    Invalid(#[from] CoordinateError),
}

/// Trait for reading the device's last known position.
pub trait LocationProvider: Send + Sync {
    /// The most recent cached fix, which may be stale or absent.
    fn last_known(&self) -> Option<Coordinate>;
}

/// A location provider that always reports the same fix (or none).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedLocation(Option<Coordinate>);

impl FixedLocation {
    pub fn at(position: Coordinate) -> Self {
        Self(Some(position))
    }

    pub fn unknown() -> Self {
        Self(None)
    }
}

impl From<Option<Coordinate>> for FixedLocation {
    fn from(position: Option<Coordinate>) -> Self {
        Self(position)
    }
}

impl LocationProvider for FixedLocation {
    fn last_known(&self) -> Option<Coordinate> {
        self.0
    }
}

/// Parse a `"lat,lon"` pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use virta_client::location::parse_lat_lon;
///
/// let p = parse_lat_lon("60.1699, 24.9384").unwrap();
/// assert_eq!(p.longitude(), 24.9384);
///
/// assert!(parse_lat_lon("60.1699").is_err());
/// assert!(parse_lat_lon("95,0").is_err());
/// ```
pub fn parse_lat_lon(s: &str) -> Result<Coordinate, LocationError> {
    let malformed = || LocationError::Malformed(s.to_string());

    let (lat, lon) = s.split_once(',').ok_or_else(malformed)?;
    let lat: f64 = lat.trim().parse().map_err(|_| malformed())?;
    let lon: f64 = lon.trim().parse().map_err(|_| malformed())?;

    Ok(Coordinate::new(lat, lon)?)
}
