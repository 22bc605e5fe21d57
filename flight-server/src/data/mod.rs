//! Dataset loading.
//!
//! Reads the two flat record files (airports, routes) once at startup; the
//! only part of the system that performs I/O. Everything downstream works on
//! immutable in-memory values.

mod error;
mod loader;

pub use error::DataError;
pub use loader::{RouteRecord, load_airports, load_routes};
