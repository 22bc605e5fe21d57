//! The immutable flight graph.
//!
//! Built once at startup from the loaded records; strictly read-only
//! afterwards, so concurrent queries share it without locking.

mod codes;

pub use codes::CodeIndex;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::data::RouteRecord;
use crate::domain::{Airport, Route};
use crate::geo;

/// The directed graph of airports and deduplicated direct routes.
///
/// Outgoing routes are indexed by source airport id, and a secondary
/// (source id, destination id) index serves edge lookup during path
/// reconstruction.
#[derive(Debug)]
pub struct FlightGraph {
    airports: Vec<Arc<Airport>>,
    by_id: HashMap<String, usize>,
    routes: Vec<Route>,
    outgoing: HashMap<String, Vec<usize>>,
    by_pair: HashMap<(String, String), usize>,
}

impl FlightGraph {
    /// Build the graph from loaded airports and raw route records.
    ///
    /// Only non-stop records (stops == 0) become routes. Records whose
    /// source or destination id does not resolve to a loaded airport are
    /// silently dropped: the dataset is known to contain orphans and they
    /// are a data-quality tolerance, not an error. Parallel records for the
    /// same ordered (source, destination) pair are deduplicated first-seen
    /// wins, preserving input order as the tie-break.
    pub fn build(airports: Vec<Airport>, records: &[RouteRecord]) -> Self {
        let airports: Vec<Arc<Airport>> = airports.into_iter().map(Arc::new).collect();
        let by_id: HashMap<String, usize> = airports
            .iter()
            .enumerate()
            .map(|(idx, airport)| (airport.id.clone(), idx))
            .collect();

        let mut routes = Vec::new();
        let mut outgoing: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_pair: HashMap<(String, String), usize> = HashMap::new();
        let mut indirect = 0usize;
        let mut dangling = 0usize;
        let mut duplicates = 0usize;

        for record in records {
            if record.stops != 0 {
                indirect += 1;
                continue;
            }
            let (Some(&source_idx), Some(&destination_idx)) = (
                by_id.get(&record.source_id),
                by_id.get(&record.destination_id),
            ) else {
                dangling += 1;
                continue;
            };

            let source = Arc::clone(&airports[source_idx]);
            let destination = Arc::clone(&airports[destination_idx]);
            let pair = (source.id.clone(), destination.id.clone());
            if by_pair.contains_key(&pair) {
                duplicates += 1;
                continue;
            }

            let distance = geo::distance_km(
                source.location.latitude,
                source.location.longitude,
                destination.location.latitude,
                destination.location.longitude,
            );

            let idx = routes.len();
            outgoing.entry(pair.0.clone()).or_default().push(idx);
            by_pair.insert(pair, idx);
            routes.push(Route {
                source,
                destination,
                distance,
            });
        }

        if indirect + dangling + duplicates > 0 {
            debug!(indirect, dangling, duplicates, "dropped route records");
        }

        Self {
            airports,
            by_id,
            routes,
            outgoing,
            by_pair,
        }
    }

    /// All loaded airports, in dataset order.
    pub fn airports(&self) -> &[Arc<Airport>] {
        &self.airports
    }

    /// All deduplicated routes, in first-seen order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Position of an airport in [`FlightGraph::airports`], by id.
    pub fn index_of(&self, airport_id: &str) -> Option<usize> {
        self.by_id.get(airport_id).copied()
    }

    /// Routes departing the given airport.
    pub fn routes_from(&self, source_id: &str) -> impl Iterator<Item = &Route> {
        let routes = &self.routes;
        self.outgoing
            .get(source_id)
            .into_iter()
            .flatten()
            .map(move |&idx| &routes[idx])
    }

    /// The unique route for an ordered (source, destination) pair, if any.
    pub fn route_between(&self, source_id: &str, destination_id: &str) -> Option<&Route> {
        self.by_pair
            .get(&(source_id.to_string(), destination_id.to_string()))
            .map(|&idx| &self.routes[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    fn airport(id: &str, lat: f64, lon: f64) -> Airport {
        Airport {
            id: id.to_string(),
            iata: Some(id.to_string()),
            icao: None,
            name: format!("{id} Airport"),
            location: Location {
                latitude: lat,
                longitude: lon,
            },
        }
    }

    fn record(source: &str, destination: &str, stops: u32) -> RouteRecord {
        RouteRecord {
            source_id: source.to_string(),
            destination_id: destination.to_string(),
            stops,
        }
    }

    fn fixture_airports() -> Vec<Airport> {
        vec![
            airport("AAA", 0.0, 0.0),
            airport("BBB", 0.0, 10.0),
            airport("CCC", 10.0, 10.0),
        ]
    }

    #[test]
    fn resolves_records_into_weighted_routes() {
        let graph = FlightGraph::build(
            fixture_airports(),
            &[record("AAA", "BBB", 0), record("BBB", "CCC", 0)],
        );

        assert_eq!(graph.airport_count(), 3);
        assert_eq!(graph.route_count(), 2);

        let route = graph.route_between("AAA", "BBB").unwrap();
        assert_eq!(route.source.id, "AAA");
        assert_eq!(route.destination.id, "BBB");
        // 10 degrees of longitude on the equator
        assert!((route.distance - 1111.95).abs() < 0.5, "was {}", route.distance);
    }

    #[test]
    fn keeps_only_non_stop_records() {
        let graph = FlightGraph::build(
            fixture_airports(),
            &[record("AAA", "BBB", 1), record("BBB", "CCC", 0)],
        );

        assert_eq!(graph.route_count(), 1);
        assert!(graph.route_between("AAA", "BBB").is_none());
        assert!(graph.route_between("BBB", "CCC").is_some());
    }

    #[test]
    fn drops_records_with_dangling_references() {
        let graph = FlightGraph::build(
            fixture_airports(),
            &[
                record("AAA", "ZZZ", 0),
                record("ZZZ", "BBB", 0),
                record("AAA", "BBB", 0),
            ],
        );

        assert_eq!(graph.route_count(), 1);
    }

    #[test]
    fn deduplicates_parallel_routes_first_seen_wins() {
        let graph = FlightGraph::build(
            fixture_airports(),
            &[
                record("AAA", "BBB", 0),
                record("AAA", "BBB", 0),
                record("BBB", "AAA", 0),
            ],
        );

        // The reverse direction is a distinct ordered pair, not a duplicate.
        assert_eq!(graph.route_count(), 2);
        assert!(graph.route_between("AAA", "BBB").is_some());
        assert!(graph.route_between("BBB", "AAA").is_some());
    }

    #[test]
    fn builds_are_deterministic() {
        let records = [
            record("AAA", "BBB", 0),
            record("AAA", "BBB", 0),
            record("BBB", "CCC", 0),
            record("AAA", "ZZZ", 0),
        ];

        let first = FlightGraph::build(fixture_airports(), &records);
        let second = FlightGraph::build(fixture_airports(), &records);

        let pairs = |graph: &FlightGraph| {
            graph
                .routes()
                .iter()
                .map(|r| (r.source.id.clone(), r.destination.id.clone(), r.distance))
                .collect::<Vec<_>>()
        };
        assert_eq!(pairs(&first), pairs(&second));
    }

    #[test]
    fn routes_from_lists_outgoing_only() {
        let graph = FlightGraph::build(
            fixture_airports(),
            &[
                record("AAA", "BBB", 0),
                record("AAA", "CCC", 0),
                record("BBB", "AAA", 0),
            ],
        );

        let destinations: Vec<&str> = graph
            .routes_from("AAA")
            .map(|r| r.destination.id.as_str())
            .collect();
        assert_eq!(destinations, ["BBB", "CCC"]);
        assert_eq!(graph.routes_from("CCC").count(), 0);
        assert_eq!(graph.routes_from("ZZZ").count(), 0);
    }
}
