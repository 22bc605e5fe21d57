//! Core domain types for the flight route server.
//!
//! All entities here are created once during startup from the loaded
//! datasets and are read-only for the rest of the process lifetime.

mod airport;
mod route;

pub use airport::{Airport, Location};
pub use route::Route;
