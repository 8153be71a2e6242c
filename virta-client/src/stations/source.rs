//! Station data sources.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use crate::domain::{Coordinate, CoordinateError, Station};

use super::error::StationError;

/// Trait for providing the station list.
///
/// The fetch protocol lives behind this seam; the presenter only sees
/// validated [`Station`] values.
#[async_trait]
pub trait StationSource: Send + Sync {
    /// Fetch the current station list.
    async fn fetch_stations(&self) -> Result<Vec<Station>, StationError>;
}

/// A fixed, already-fetched list.
#[async_trait]
impl StationSource for Vec<Station> {
    async fn fetch_stations(&self) -> Result<Vec<Station>, StationError> {
        Ok(self.clone())
    }
}

/// Station record as delivered by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub name: String,
    #[serde(default)]
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Charge points; only their count is used.
    #[serde(default)]
    pub evses: Vec<IgnoredAny>,
}

impl StationDto {
    /// Validate into a domain station.
    pub fn into_station(self) -> Result<Station, CoordinateError> {
        let position = Coordinate::new(self.latitude, self.longitude)?;
        Ok(Station::new(self.name, self.city, position, self.evses.len()))
    }
}

/// Convert DTOs to stations, dropping records with invalid coordinates.
pub fn build_stations(dtos: Vec<StationDto>) -> Vec<Station> {
    dtos.into_iter()
        .filter_map(|dto| {
            let name = dto.name.clone();
            dto.into_station()
                .inspect_err(|e| warn!(station = %name, error = %e, "skipping station"))
                .ok()
        })
        .collect()
}

/// Station list read from a JSON file holding an array of station records.
#[derive(Debug, Clone)]
pub struct JsonFileStationSource {
    path: PathBuf,
}

impl JsonFileStationSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StationSource for JsonFileStationSource {
    async fn fetch_stations(&self) -> Result<Vec<Station>, StationError> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| StationError::Io {
                    path: self.path.clone(),
                    source,
                })?;

        let dtos: Vec<StationDto> =
            serde_json::from_str(&contents).map_err(|e| StationError::Json {
                message: e.to_string(),
            })?;

        let total = dtos.len();
        let stations = build_stations(dtos);
        debug!(
            path = %self.path.display(),
            loaded = stations.len(),
            skipped = total - stations.len(),
            "read station file"
        );

        Ok(stations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"[
        {"name": "Kamppi", "city": "Helsinki", "latitude": 60.1687, "longitude": 24.9316,
         "evses": [{"id": 1}, {"id": 2}]},
        {"name": "Broken", "city": "Nowhere", "latitude": 123.0, "longitude": 0.0},
        {"name": "Ratina", "latitude": 61.4935, "longitude": 23.7695, "evses": [{"id": 3}],
         "provider": "Virta"}
    ]"#;

    #[test]
    fn build_stations_filters_invalid_coordinates() {
        let dtos: Vec<StationDto> = serde_json::from_str(SAMPLE).unwrap();
        let stations = build_stations(dtos);

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Kamppi");
        assert_eq!(stations[0].connector_count, 2);
        assert_eq!(stations[1].name, "Ratina");
        assert_eq!(stations[1].city, "");
        assert_eq!(stations[1].connector_count, 1);
    }

    #[test]
    fn missing_evses_means_zero_connectors() {
        let dto: StationDto =
            serde_json::from_str(r#"{"name": "A", "city": "B", "latitude": 0, "longitude": 0}"#)
                .unwrap();
        assert_eq!(dto.into_station().unwrap().connector_count, 0);
    }

    #[tokio::test]
    async fn reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let source = JsonFileStationSource::new(&path);
        let stations = source.fetch_stations().await.unwrap();

        assert_eq!(stations.len(), 2);
        assert_eq!(source.path(), path.as_path());
    }

    #[tokio::test]
    async fn bundled_sample_file() {
        let source = JsonFileStationSource::new("data/stations.json");
        let stations = source.fetch_stations().await.unwrap();

        assert_eq!(stations.len(), 4);
        assert_eq!(stations[0].connector_count, 4);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = JsonFileStationSource::new("/nonexistent/stations.json");
        let result = source.fetch_stations().await;
        assert!(matches!(result, Err(StationError::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, r#"{"stations": []}"#).unwrap();

        let result = JsonFileStationSource::new(&path).fetch_stations().await;
        assert!(matches!(result, Err(StationError::Json { .. })));
    }

    #[tokio::test]
    async fn vec_source_returns_its_stations() {
        let station = Station::new("A", "B", Coordinate::new(0.0, 0.0).unwrap(), 1);
        let source = vec![station.clone()];
        assert_eq!(source.fetch_stations().await.unwrap(), vec![station]);
    }
}
