//! Single-source shortest-path search with path reconstruction.
//!
//! Classic Dijkstra over the non-negative-weight route graph. Extraction is
//! a linear scan over the unfinalized set: O(V) per pick, O(V²) overall,
//! which is fine at this dataset's scale and simpler than a heap. The
//! search owns its label and predecessor vectors, so it never touches the
//! shared graph mutably and queries can run concurrently.

use crate::domain::{Airport, Route};
use crate::graph::FlightGraph;

/// Internal-consistency failure during path reconstruction.
///
/// Predecessors are only ever set while relaxing a stored route, so a
/// predecessor pair without a matching route means the graph violated its
/// build invariants. The web layer maps this to a 500; it is never a
/// user-facing condition.
#[derive(Debug, Clone)]
pub enum SearchError {
    MissingLeg { source: String, destination: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::MissingLeg {
                source,
                destination,
            } => write!(
                f,
                "no route stored from {source} to {destination} while rebuilding path"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// A found route: the ordered legs and their summed distance.
///
/// The legs are empty for a self-query ("already there"), with distance 0.
/// Callers deriving display hops must not assume a last leg exists.
#[derive(Debug, Clone)]
pub struct FoundRoute {
    pub legs: Vec<Route>,

    /// Total distance in kilometers, summed as ordinary floating-point.
    pub distance: f64,
}

/// Find the lowest-total-distance sequence of direct legs from `source` to
/// `destination`.
///
/// Returns `Ok(None)` when no sequence of routes connects the pair; an
/// unreachable destination is a normal result, not an error. Both airports
/// are assumed to be members of `graph` (the caller resolves codes against
/// the same airport set first). Ties between equal-distance candidates are
/// broken arbitrarily, so any one of several equally short routes may be
/// returned.
pub fn find_route(
    graph: &FlightGraph,
    source: &Airport,
    destination: &Airport,
) -> Result<Option<FoundRoute>, SearchError> {
    let airports = graph.airports();
    let (Some(start), Some(goal)) = (graph.index_of(&source.id), graph.index_of(&destination.id))
    else {
        return Ok(None);
    };

    // Every airport gets a label up front; relaxation never adds nodes.
    let mut distance = vec![f64::INFINITY; airports.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; airports.len()];
    let mut unfinalized = vec![true; airports.len()];
    distance[start] = 0.0;

    loop {
        let current = distance
            .iter()
            .enumerate()
            .filter(|&(idx, d)| unfinalized[idx] && d.is_finite())
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(idx, _)| idx);

        // Only unreachable airports remain, so neither can the destination
        // be reached.
        let Some(current) = current else {
            return Ok(None);
        };

        if current == goal {
            return reconstruct(graph, &predecessor, goal).map(Some);
        }

        unfinalized[current] = false;
        let reached = distance[current];
        for route in graph.routes_from(&airports[current].id) {
            let Some(neighbor) = graph.index_of(&route.destination.id) else {
                continue;
            };
            let candidate = reached + route.distance;
            if candidate < distance[neighbor] {
                distance[neighbor] = candidate;
                predecessor[neighbor] = Some(current);
            }
        }
    }
}

/// Walk predecessor links back from the goal, re-looking up the connecting
/// route for each consecutive pair, and reverse into source→destination
/// order. Kept separate from the search loop so the loop's termination
/// condition stays trivial.
fn reconstruct(
    graph: &FlightGraph,
    predecessor: &[Option<usize>],
    goal: usize,
) -> Result<FoundRoute, SearchError> {
    let airports = graph.airports();
    let mut legs = Vec::new();

    let mut current = goal;
    while let Some(previous) = predecessor[current] {
        let from = &airports[previous];
        let to = &airports[current];
        let route =
            graph
                .route_between(&from.id, &to.id)
                .ok_or_else(|| SearchError::MissingLeg {
                    source: from.id.clone(),
                    destination: to.id.clone(),
                })?;
        legs.push(route.clone());
        current = previous;
    }

    legs.reverse();
    let distance = legs.iter().map(|leg| leg.distance).sum();
    Ok(FoundRoute { legs, distance })
}
