use std::net::SocketAddr;

use flight_server::data::{load_airports, load_routes};
use flight_server::graph::{CodeIndex, FlightGraph};
use flight_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Data file locations and port from the environment
    let airport_data =
        std::env::var("AIRPORT_DATA").unwrap_or_else(|_| "data/airports.dat".to_string());
    let route_data = std::env::var("ROUTE_DATA").unwrap_or_else(|_| "data/routes.dat".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // Load the datasets and build the graph (fail fast if unavailable)
    let airports = load_airports(&airport_data).expect("failed to load airport data");
    let records = load_routes(&route_data).expect("failed to load route data");
    info!(airports = airports.len(), records = records.len(), "datasets loaded");

    let graph = FlightGraph::build(airports, &records);
    let codes = CodeIndex::new(graph.airports());
    info!(
        airports = graph.airport_count(),
        routes = graph.route_count(),
        codes = codes.len(),
        "flight graph ready"
    );

    let app = create_router(AppState::new(graph, codes));

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("flight route server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
