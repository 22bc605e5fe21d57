//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::search::{self, SearchError};

use super::dto::{AirportBody, ErrorResponse, RouteBody, RouteSearchBody};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/airports/:code", get(get_airport))
        .route("/routes", get(list_routes))
        .route("/routes/:source", get(routes_from))
        .route("/routes/:source/:destination", get(search_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe.
async fn health() -> &'static str {
    "OK"
}

/// Look up a single airport by IATA/ICAO code.
async fn get_airport(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<AirportBody>, AppError> {
    let code = require_param(&code, "airport code")?;

    let airport = state.codes.lookup(code).ok_or_else(AppError::unknown_airport)?;
    Ok(Json(AirportBody::from_airport(airport)))
}

/// List every deduplicated direct route.
async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteBody>> {
    Json(state.graph.routes().iter().map(RouteBody::from_route).collect())
}

/// List the direct routes departing one airport.
async fn routes_from(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> Result<Json<Vec<RouteBody>>, AppError> {
    let source = require_param(&source, "source airport")?;

    // The source must resolve before filtering; an unknown code is 404,
    // never an unresolved pass-through.
    let airport = state
        .codes
        .lookup(source)
        .ok_or_else(AppError::unknown_airport)?;

    let routes: Vec<RouteBody> = state
        .graph
        .routes_from(&airport.id)
        .map(RouteBody::from_route)
        .collect();
    Ok(Json(routes))
}

/// Find the shortest sequence of direct legs between two airports.
async fn search_route(
    State(state): State<AppState>,
    Path((source, destination)): Path<(String, String)>,
) -> Result<Json<RouteSearchBody>, AppError> {
    let source = require_param(&source, "source airport")?;
    let destination = require_param(&destination, "destination airport")?;

    let (Some(source), Some(destination)) = (
        state.codes.lookup(source),
        state.codes.lookup(destination),
    ) else {
        return Err(AppError::unknown_airport());
    };

    let found = search::find_route(&state.graph, source, destination)?.ok_or_else(|| {
        AppError::NotFound {
            message: format!(
                "no route found between {} and {}",
                source.code_or_id(),
                destination.code_or_id()
            ),
        }
    })?;

    Ok(Json(RouteSearchBody::from_found(source, destination, &found)))
}

/// Reject blank path parameters before touching the graph.
fn require_param<'a>(value: &'a str, what: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest {
            message: format!("must provide {what}"),
        });
    }
    Ok(trimmed)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn unknown_airport() -> Self {
        AppError::NotFound {
            message: "no such airport, please provide a valid IATA/ICAO code".to_string(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            // Only the internal-consistency fault lands here; client errors
            // are ordinary traffic already covered by the trace layer.
            tracing::error!(%status, %message, "request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RouteRecord;
    use crate::domain::{Airport, Location};
    use crate::graph::{CodeIndex, FlightGraph};

    fn airport(id: &str, iata: &str, lat: f64, lon: f64) -> Airport {
        Airport {
            id: id.to_string(),
            iata: Some(iata.to_string()),
            icao: None,
            name: format!("{iata} Airport"),
            location: Location {
                latitude: lat,
                longitude: lon,
            },
        }
    }

    fn record(source: &str, destination: &str) -> RouteRecord {
        RouteRecord {
            source_id: source.to_string(),
            destination_id: destination.to_string(),
            stops: 0,
        }
    }

    /// TLL -> STN -> LHR chain plus an unreachable island airport.
    fn state() -> AppState {
        let airports = vec![
            airport("415", "TLL", 59.413300, 24.832800),
            airport("548", "STN", 51.885000, 0.235000),
            airport("507", "LHR", 51.470600, -0.594100),
            airport("3728", "IPC", -27.164800, -109.421997),
        ];
        let graph = FlightGraph::build(
            airports,
            &[record("415", "548"), record("548", "507")],
        );
        let codes = CodeIndex::new(graph.airports());
        AppState::new(graph, codes)
    }

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[tokio::test]
    async fn health_says_ok() {
        assert_eq!(health().await, "OK");
    }

    #[tokio::test]
    async fn airport_lookup_is_case_insensitive() {
        let body = get_airport(State(state()), Path("tll".to_string()))
            .await
            .unwrap();
        assert_eq!(body.0.iata.as_deref(), Some("TLL"));
        assert_eq!(body.0.id, "415");
    }

    #[tokio::test]
    async fn unknown_airport_is_not_found() {
        let err = get_airport(State(state()), Path("ZZZ".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_airport_code_is_a_bad_request() {
        let err = get_airport(State(state()), Path("  ".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn all_routes_are_listed() {
        let body = list_routes(State(state())).await;
        assert_eq!(body.0.len(), 2);
    }

    #[tokio::test]
    async fn routes_from_filters_by_resolved_source() {
        let body = routes_from(State(state()), Path("TLL".to_string()))
            .await
            .unwrap();
        assert_eq!(body.0.len(), 1);
        assert_eq!(body.0[0].destination.iata.as_deref(), Some("STN"));

        let body = routes_from(State(state()), Path("lhr".to_string()))
            .await
            .unwrap();
        assert!(body.0.is_empty());
    }

    #[tokio::test]
    async fn routes_from_unknown_source_is_not_found() {
        let err = routes_from(State(state()), Path("ZZZ".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn route_search_returns_hops_and_legs() {
        let body = search_route(State(state()), Path(("TLL".to_string(), "lhr".to_string())))
            .await
            .unwrap();

        assert_eq!(body.0.source, "TLL");
        assert_eq!(body.0.destination, "LHR");
        assert_eq!(body.0.hops, ["TLL", "STN", "LHR"]);
        assert_eq!(body.0.routes.len(), 2);
        assert!(
            (1810.0..=1820.0).contains(&body.0.distance),
            "distance was {}",
            body.0.distance
        );
    }

    #[tokio::test]
    async fn route_search_with_unknown_code_is_not_found() {
        let err = search_route(State(state()), Path(("TLL".to_string(), "ZZZ".to_string())))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn route_search_without_connectivity_is_not_found() {
        let err = search_route(State(state()), Path(("TLL".to_string(), "IPC".to_string())))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn route_search_to_self_is_already_there() {
        let body = search_route(State(state()), Path(("TLL".to_string(), "TLL".to_string())))
            .await
            .unwrap();

        assert_eq!(body.0.distance, 0.0);
        assert_eq!(body.0.hops, ["TLL"]);
        assert!(body.0.routes.is_empty());
    }

    #[tokio::test]
    async fn blank_search_params_are_bad_requests() {
        let err = search_route(State(state()), Path((" ".to_string(), "LHR".to_string())))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }
}
