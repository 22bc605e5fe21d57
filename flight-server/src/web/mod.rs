//! Web layer for the flight route server.
//!
//! Thin plumbing over the immutable graph: parameter validation, code
//! resolution, and status-code mapping around the search core.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
