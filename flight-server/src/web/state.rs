//! Application state for the web layer.

use std::sync::Arc;

use crate::graph::{CodeIndex, FlightGraph};

/// Shared application state.
///
/// The graph and code index are built once at startup and never mutated, so
/// handlers share them read-only; no locking is needed for queries.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<FlightGraph>,
    pub codes: Arc<CodeIndex>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: FlightGraph, codes: CodeIndex) -> Self {
        Self {
            graph: Arc::new(graph),
            codes: Arc::new(codes),
        }
    }
}
