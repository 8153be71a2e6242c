//! Domain types for the charging-station client.
//!
//! Types here enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod coordinate;
mod station;

pub use coordinate::{Coordinate, CoordinateError, EARTH_RADIUS_METERS};
pub use station::Station;
