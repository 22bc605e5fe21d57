//! Response bodies for the HTTP endpoints.

use serde::Serialize;

use crate::domain::{Airport, Route};
use crate::search::FoundRoute;

/// An airport record as served to clients.
#[derive(Debug, Serialize)]
pub struct AirportBody {
    pub id: String,

    /// IATA code; `null` when the airport has none.
    pub iata: Option<String>,

    /// ICAO code; `null` when the airport has none.
    pub icao: Option<String>,

    pub name: String,
    pub location: LocationBody,
}

/// Coordinates in degrees.
#[derive(Debug, Serialize)]
pub struct LocationBody {
    pub latitude: f64,
    pub longitude: f64,
}

impl AirportBody {
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            id: airport.id.clone(),
            iata: airport.iata.clone(),
            icao: airport.icao.clone(),
            name: airport.name.clone(),
            location: LocationBody {
                latitude: airport.location.latitude,
                longitude: airport.location.longitude,
            },
        }
    }
}

/// A direct route as served to clients.
#[derive(Debug, Serialize)]
pub struct RouteBody {
    pub source: AirportBody,
    pub destination: AirportBody,

    /// Great-circle distance in kilometers.
    pub distance: f64,
}

impl RouteBody {
    pub fn from_route(route: &Route) -> Self {
        Self {
            source: AirportBody::from_airport(&route.source),
            destination: AirportBody::from_airport(&route.destination),
            distance: route.distance,
        }
    }
}

/// Successful route-search response.
#[derive(Debug, Serialize)]
pub struct RouteSearchBody {
    /// Display code of the resolved source airport.
    pub source: String,

    /// Display code of the resolved destination airport.
    pub destination: String,

    /// Total distance in kilometers.
    pub distance: f64,

    /// Airport codes along the route, source first.
    pub hops: Vec<String>,

    /// The legs flown, in order.
    pub routes: Vec<RouteBody>,
}

impl RouteSearchBody {
    /// Hops are the source code followed by each leg's destination code, so
    /// the "already there" result (no legs) yields just the source code.
    pub fn from_found(source: &Airport, destination: &Airport, found: &FoundRoute) -> Self {
        let mut hops = Vec::with_capacity(found.legs.len() + 1);
        hops.push(source.code_or_id().to_string());
        hops.extend(
            found
                .legs
                .iter()
                .map(|leg| leg.destination.code_or_id().to_string()),
        );

        Self {
            source: source.code_or_id().to_string(),
            destination: destination.code_or_id().to_string(),
            distance: found.distance,
            hops,
            routes: found.legs.iter().map(RouteBody::from_route).collect(),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
