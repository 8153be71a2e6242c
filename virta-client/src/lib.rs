//! Charging station client core.
//!
//! Logs in against the charging API and persists the session, and lists
//! nearby charging stations sorted by distance from the device.

pub mod auth;
pub mod config;
pub mod domain;
pub mod location;
pub mod stations;
pub mod store;
