use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use virta_client::auth::{AuthSession, HttpAuthClient};
use virta_client::config::AppConfig;
use virta_client::location::FixedLocation;
use virta_client::stations::{JsonFileStationSource, StationListPresenter};
use virta_client::store::{FileStore, SessionRecord};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let store = Arc::new(FileStore::new(config.store.clone()));

    // Log in if credentials were given, otherwise report the stored session
    if let Some(login) = &config.login {
        let client = HttpAuthClient::new(config.api.clone()).expect("Failed to create login client");
        let session = AuthSession::new(client, store.clone());

        match session.authenticate(&login.email, &login.code).await {
            Ok(_) => info!(path = %store.path().display(), "session saved"),
            Err(e) => error!(error = %e, "login failed"),
        }
    } else {
        match SessionRecord::load(store.as_ref()) {
            Ok(Some(record)) if record.is_logged_in => info!("using stored session"),
            Ok(_) => info!("not logged in (set VIRTA_EMAIL and VIRTA_CODE)"),
            Err(e) => error!(error = %e, "failed to read stored session"),
        }
    }

    let source = JsonFileStationSource::new(&config.stations_path);
    let locator = FixedLocation::from(config.location);
    let mut presenter = StationListPresenter::new(config.distance_format);

    if let Err(e) = presenter.load(&source, &locator).await {
        eprintln!("Failed to load stations: {e}");
        std::process::exit(1);
    }

    if presenter.location().is_none() {
        println!("Location unknown (set VIRTA_LOCATION=lat,lon); showing stations unsorted.");
    }

    for row in presenter.rows() {
        println!(
            "{:>10}  {}, {}  ({} connectors)",
            row.formatted_distance, row.name, row.city, row.connector_count
        );
    }
}
