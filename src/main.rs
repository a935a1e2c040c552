use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use tokio::time::sleep;
use tracing::{error, info};

use constants::{API_PORT, REFRESH_INTERVAL, SOURCE_URL};
use error::FetchError;
use fetch::HttpsClient;
use server::AppState;
use store::StatsStore;

mod constants;
mod error;
mod fetch;
mod logging;
mod model;
mod scrape;
mod server;
mod store;

/// Fetch the source page and replace the worldwide counters.
async fn refresh_global(client: &HttpsClient, store: &StatsStore) -> Result<(), FetchError> {
    let page = fetch::fetch_page(client, SOURCE_URL).await?;
    let stats = scrape::parse_global(&page);
    store.set_global(stats).await;
    info!("worldwide counters updated");
    Ok(())
}

/// Fetch the source page and replace the country list.
async fn refresh_countries(client: &HttpsClient, store: &StatsStore) -> Result<(), FetchError> {
    let page = fetch::fetch_page(client, SOURCE_URL).await?;
    let list = scrape::parse_countries(&page);
    let count = list.len();
    store.set_countries(list).await;
    info!(countries = count, "country records updated");
    Ok(())
}

/// One detached job per data set, each re-scraping on the fixed interval.
/// A failed refresh is fatal: the process exits rather than serving data
/// of unknown age.
fn spawn_refresh_jobs(state: &AppState) {
    let (client, store) = (state.client.clone(), Arc::clone(&state.store));
    tokio::spawn(async move {
        loop {
            sleep(REFRESH_INTERVAL).await;
            if let Err(e) = refresh_global(&client, &store).await {
                error!(error = %e, "worldwide refresh failed");
                process::exit(1);
            }
        }
    });

    let (client, store) = (state.client.clone(), Arc::clone(&state.store));
    tokio::spawn(async move {
        loop {
            sleep(REFRESH_INTERVAL).await;
            if let Err(e) = refresh_countries(&client, &store).await {
                error!(error = %e, "country refresh failed");
                process::exit(1);
            }
        }
    });
}

#[tokio::main]
async fn main() {
    logging::init();

    let state = AppState {
        client: fetch::build_client(),
        store: Arc::new(StatsStore::default()),
    };

    // Both data sets are populated once before the listener binds, so the
    // API never serves an empty startup snapshot.
    if let Err(e) = refresh_global(&state.client, &state.store).await {
        error!(error = %e, "initial worldwide refresh failed");
        process::exit(1);
    }
    if let Err(e) = refresh_countries(&state.client, &state.store).await {
        error!(error = %e, "initial country refresh failed");
        process::exit(1);
    }

    spawn_refresh_jobs(&state);

    let app = server::router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], API_PORT));
    info!(address = %addr, "listening");

    if let Err(e) = axum::Server::bind(&addr).serve(app.into_make_service()).await {
        error!(error = %e, "server error");
        process::exit(1);
    }
}
