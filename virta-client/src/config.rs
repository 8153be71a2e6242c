//! Application configuration from environment variables.

use std::path::PathBuf;

use crate::auth::AuthClientConfig;
use crate::domain::Coordinate;
use crate::location::{LocationError, parse_lat_lon};
use crate::stations::DistanceFormat;
use crate::store::FileStoreConfig;

/// Default station file path.
const DEFAULT_STATIONS_PATH: &str = "data/stations.json";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `VIRTA_LOCATION` is not a valid `"lat,lon"` pair
    #[error("VIRTA_LOCATION: {0}")]
    Location(#[from] LocationError),

    /// A numeric setting did not parse
    #[error("{name}: expected a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    /// A single-character setting had another length
    #[error("{name}: expected a single character, got {value:?}")]
    InvalidChar { name: &'static str, value: String },
}

/// Login email and code.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginConfig {
    pub email: String,
    pub code: String,
}

impl std::fmt::Debug for LoginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginConfig")
            .field("email", &self.email)
            .field("code", &"<redacted>")
            .finish()
    }
}

/// Everything the binary needs to run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Login API client settings
    pub api: AuthClientConfig,
    /// Where the session is persisted
    pub store: FileStoreConfig,
    /// Station list file
    pub stations_path: PathBuf,
    /// Fixed device location, if any
    pub location: Option<Coordinate>,
    /// Credentials to log in with, if any
    pub login: Option<LoginConfig>,
    /// Row distance format
    pub distance_format: DistanceFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: AuthClientConfig::default(),
            store: FileStoreConfig::default(),
            stations_path: PathBuf::from(DEFAULT_STATIONS_PATH),
            location: None,
            login: None,
            distance_format: DistanceFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    ///
    /// Recognised variables: `VIRTA_API_URL`, `VIRTA_TIMEOUT_SECS`,
    /// `VIRTA_SESSION_PATH`, `VIRTA_STATIONS_PATH`, `VIRTA_LOCATION`,
    /// `VIRTA_EMAIL`, `VIRTA_CODE`, `VIRTA_DISTANCE_DIGITS` and
    /// `VIRTA_DECIMAL_SEPARATOR`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("VIRTA_API_URL") {
            config.api = config.api.with_base_url(url);
        }
        if let Some(secs) = get("VIRTA_TIMEOUT_SECS") {
            config.api = config.api.with_timeout(parse_number("VIRTA_TIMEOUT_SECS", &secs)?);
        }
        if let Some(path) = get("VIRTA_SESSION_PATH") {
            config.store = FileStoreConfig::new(path);
        }
        if let Some(path) = get("VIRTA_STATIONS_PATH") {
            config.stations_path = PathBuf::from(path);
        }
        if let Some(location) = get("VIRTA_LOCATION") {
            config.location = Some(parse_lat_lon(&location)?);
        }
        if let (Some(email), Some(code)) = (get("VIRTA_EMAIL"), get("VIRTA_CODE")) {
            config.login = Some(LoginConfig { email, code });
        }
        if let Some(digits) = get("VIRTA_DISTANCE_DIGITS") {
            let digits = parse_number("VIRTA_DISTANCE_DIGITS", &digits)?;
            config.distance_format =
                DistanceFormat::new(digits, config.distance_format.decimal_separator);
        }
        if let Some(sep) = get("VIRTA_DECIMAL_SEPARATOR") {
            let mut chars = sep.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    config.distance_format = config.distance_format.with_separator(c);
                }
                _ => {
                    return Err(ConfigError::InvalidChar {
                        name: "VIRTA_DECIMAL_SEPARATOR",
                        value: sep,
                    });
                }
            }
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}
