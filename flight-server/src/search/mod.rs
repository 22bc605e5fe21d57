//! Shortest-route search over the flight graph.
//!
//! This is the algorithmic core of the server: a single-source
//! shortest-path search run once per query against the immutable
//! [`FlightGraph`](crate::graph::FlightGraph), followed by explicit path
//! reconstruction.

mod dijkstra;

pub use dijkstra::{FoundRoute, SearchError, find_route};
