//! Direct flight legs between airports.

use std::sync::Arc;

use super::Airport;

/// A direct (non-stop) flight leg between two airports.
///
/// The distance is computed once when the graph is built and never
/// recomputed per query. For any ordered (source id, destination id) pair
/// at most one `Route` exists in the built graph.
#[derive(Debug, Clone)]
pub struct Route {
    pub source: Arc<Airport>,
    pub destination: Arc<Airport>,

    /// Great-circle distance between the endpoints, in kilometers.
    pub distance: f64,
}
