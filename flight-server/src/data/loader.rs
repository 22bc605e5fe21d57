//! Loaders for the two flat record files.
//!
//! Both files are headerless CSV in the OpenFlights column layout, with a
//! varying number of trailing columns we never look at. Rows that cannot
//! yield a usable record are dropped, not fatal: the datasets are known to
//! contain gaps, and tolerating them here mirrors the graph builder's
//! treatment of dangling route references.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::domain::{Airport, Location};

use super::error::DataError;

/// Marker the dataset uses for an absent field.
const ABSENT: &str = "\\N";

/// A raw route row, before foreign-key resolution.
///
/// `source_id` and `destination_id` reference [`Airport::id`] values and may
/// dangle; the graph builder resolves them and drops orphans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub source_id: String,
    pub destination_id: String,

    /// Number of intermediate stops; only `0` (direct) rows make it into
    /// the graph.
    pub stops: u32,
}

/// Load airport records.
///
/// Columns: id, name, city, country, IATA, ICAO, latitude, longitude, …
/// (city, country, and everything past the longitude are ignored).
pub fn load_airports(path: impl AsRef<Path>) -> Result<Vec<Airport>, DataError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| DataError::csv(path, e))?;

    let mut airports = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| DataError::csv(path, e))?;
        match parse_airport(&record) {
            Some(airport) => airports.push(airport),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, path = %path.display(), "skipped unusable airport rows");
    }
    Ok(airports)
}

/// Load raw route records.
///
/// Columns: airline, airline id, source code, source id, destination code,
/// destination id, codeshare, stops, … (only the ids and the stop count are
/// kept; codes on route rows are redundant with the airport records).
pub fn load_routes(path: impl AsRef<Path>) -> Result<Vec<RouteRecord>, DataError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| DataError::csv(path, e))?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| DataError::csv(path, e))?;
        match parse_route(&record) {
            Some(route) => records.push(route),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, path = %path.display(), "skipped unusable route rows");
    }
    Ok(records)
}

fn parse_airport(record: &StringRecord) -> Option<Airport> {
    let id = required(record.get(0)?)?;
    let name = record.get(1)?.trim();
    let iata = optional(record.get(4)?);
    let icao = optional(record.get(5)?);
    let latitude = coordinate(record.get(6)?)?;
    let longitude = coordinate(record.get(7)?)?;

    Some(Airport {
        id: id.to_string(),
        iata,
        icao,
        name: name.to_string(),
        location: Location {
            latitude,
            longitude,
        },
    })
}

fn parse_route(record: &StringRecord) -> Option<RouteRecord> {
    let source_id = required(record.get(3)?)?;
    let destination_id = required(record.get(5)?)?;
    let stops = record.get(7)?.trim().parse().ok()?;

    Some(RouteRecord {
        source_id: source_id.to_string(),
        destination_id: destination_id.to_string(),
        stops,
    })
}

/// A field that must carry a real value for the row to be usable.
fn required(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    (!raw.is_empty() && raw != ABSENT).then_some(raw)
}

/// A field where the dataset's `\N` (or blank) means "not assigned".
fn optional(raw: &str) -> Option<String> {
    required(raw).map(str::to_string)
}

fn coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse().ok().filter(|v: &f64| v.is_finite())
}
