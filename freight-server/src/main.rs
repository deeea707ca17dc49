use std::net::SocketAddr;
use std::path::PathBuf;

use freight_server::cache::{CachedDistance, DistanceCacheConfig};
use freight_server::distance::{DistanceService, GreatCircleDistance, MatrixClient, MatrixConfig};
use freight_server::loader::load_reference_data;
use freight_server::store::MemoryStore;
use freight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freight_server=debug,info".into()),
        )
        .init();

    // Load reference data (fail fast on malformed files)
    let data_dir = std::env::var("FREIGHT_DATA_DIR").unwrap_or_else(|_| "data".into());
    let store = MemoryStore::new();
    load_reference_data(&PathBuf::from(&data_dir), &store)
        .expect("Failed to load reference data");

    let (airports, flights, trucking, airport_rates, airline_rates) = store
        .table_counts()
        .expect("Failed to read reference tables");
    tracing::info!(
        airports,
        flights,
        trucking_rates = trucking,
        airport_rates,
        airline_rates,
        "reference data loaded from {data_dir}"
    );

    // Pick a road-distance provider. The great-circle estimator needs no
    // network and is meant for local runs and demos.
    let provider = match std::env::var("FREIGHT_DISTANCE").as_deref() {
        Ok("great-circle") => DistanceService::GreatCircle(GreatCircleDistance::default()),
        _ => {
            let mut config = MatrixConfig::new();
            if let Ok(url) = std::env::var("OSRM_BASE_URL") {
                config = config.with_base_url(url);
            }
            let client = MatrixClient::new(config).expect("Failed to create distance client");
            DistanceService::Matrix(client)
        }
    };
    let distance = CachedDistance::new(provider, &DistanceCacheConfig::default());

    let state = AppState::new(store, distance);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("Freight quote server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
