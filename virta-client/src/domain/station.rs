//! Charging station records.

use super::Coordinate;

/// A charging station snapshot as listed to the user.
///
/// Immutable once built; the presenter owns a list of these for the
/// lifetime of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub city: String,
    pub position: Coordinate,
    /// Number of EVSEs (charge points) at the station.
    pub connector_count: usize,
}

impl Station {
    /// Create a new station.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        position: Coordinate,
        connector_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            position,
            connector_count,
        }
    }

    /// Distance in meters from `location`, or 0 when the location is unknown.
    pub fn distance_from(&self, location: Option<&Coordinate>) -> f64 {
        location.map_or(0.0, |here| here.distance_to(&self.position))
    }
}
