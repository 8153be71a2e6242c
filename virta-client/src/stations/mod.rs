//! Nearby charging station list.
//!
//! Stations come from a [`StationSource`], the device position from a
//! [`LocationProvider`](crate::location::LocationProvider). The presenter
//! sorts by great-circle distance and exposes one row of display data per
//! station.

mod error;
mod format;
mod presenter;
mod source;

pub use error::StationError;
pub use format::DistanceFormat;
pub use presenter::{StationListPresenter, StationRow, sort_by_distance};
pub use source::{JsonFileStationSource, StationDto, StationSource, build_stations};
