//! Station list presentation: distance sort and row view-data.

use tracing::info;

use crate::domain::{Coordinate, Station};
use crate::location::LocationProvider;

use super::error::StationError;
use super::format::DistanceFormat;
use super::source::StationSource;

/// Display data for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRow {
    pub name: String,
    pub city: String,
    /// Distance with unit, e.g. `"1250 m"`.
    pub formatted_distance: String,
    pub connector_count: usize,
}

/// Sort stations by great-circle distance from `location`.
///
/// Returns each station paired with its distance in meters, nearest first.
/// The sort is stable, so with no location (every distance 0) the input
/// order is kept.
pub fn sort_by_distance(
    stations: Vec<Station>,
    location: Option<&Coordinate>,
) -> Vec<(Station, f64)> {
    let mut ranked: Vec<(Station, f64)> = stations
        .into_iter()
        .map(|station| {
            let distance = station.distance_from(location);
            (station, distance)
        })
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}

/// State behind the station list screen.
///
/// Holds the stations in the order they were supplied, the location used
/// for the last sort, and the derived rows. Rows are rebuilt whenever the
/// station list or the location changes.
#[derive(Debug, Clone, Default)]
pub struct StationListPresenter {
    format: DistanceFormat,
    stations: Vec<Station>,
    location: Option<Coordinate>,
    rows: Vec<StationRow>,
}

impl StationListPresenter {
    /// Create an empty presenter using the given distance format.
    pub fn new(format: DistanceFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Replace the station list, sort it against `location` and rebuild rows.
    pub fn load_and_sort(
        &mut self,
        stations: Vec<Station>,
        location: Option<Coordinate>,
    ) -> &[StationRow] {
        self.stations = stations;
        self.location = location;
        self.rebuild();
        &self.rows
    }

    /// Re-sort the current stations for a new location.
    pub fn relocate(&mut self, location: Option<Coordinate>) -> &[StationRow] {
        self.location = location;
        self.rebuild();
        &self.rows
    }

    /// Fetch stations, take one location snapshot, then sort.
    ///
    /// On a fetch error the previous rows are kept.
    pub async fn load<S, L>(&mut self, source: &S, locator: &L) -> Result<&[StationRow], StationError>
    where
        S: StationSource + ?Sized,
        L: LocationProvider + ?Sized,
    {
        let stations = source.fetch_stations().await?;
        let location = locator.last_known();

        info!(
            stations = stations.len(),
            located = location.is_some(),
            "loaded station list"
        );

        Ok(self.load_and_sort(stations, location))
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Row at `index`, nearest station first.
    pub fn row_at(&self, index: usize) -> Result<&StationRow, StationError> {
        self.rows.get(index).ok_or(StationError::RowOutOfBounds {
            index,
            count: self.rows.len(),
        })
    }

    /// All rows, nearest station first.
    pub fn rows(&self) -> &[StationRow] {
        &self.rows
    }

    /// Location used for the current order.
    pub fn location(&self) -> Option<&Coordinate> {
        self.location.as_ref()
    }

    pub fn format(&self) -> DistanceFormat {
        self.format
    }

    fn rebuild(&mut self) {
        let ranked = sort_by_distance(self.stations.clone(), self.location.as_ref());
        self.rows = ranked
            .into_iter()
            .map(|(station, distance)| StationRow {
                formatted_distance: self.format.format_meters(distance),
                name: station.name,
                city: station.city,
                connector_count: station.connector_count,
            })
            .collect();
    }
}
