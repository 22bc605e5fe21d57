//! Case-insensitive IATA/ICAO code lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::Airport;

/// Lookup from lowercase airport code to airport.
///
/// An airport contributes one entry per assigned code field, so one with
/// both an IATA and an ICAO code is reachable under either. Should two
/// airports ever share a code the later one in iteration order wins; that
/// is a data-quality assumption about the source dataset, not a runtime
/// error.
#[derive(Debug, Default)]
pub struct CodeIndex {
    by_code: HashMap<String, Arc<Airport>>,
}

impl CodeIndex {
    /// Build the index over the graph's airport set.
    pub fn new(airports: &[Arc<Airport>]) -> Self {
        let mut by_code = HashMap::new();
        for airport in airports {
            for code in [&airport.iata, &airport.icao].into_iter().flatten() {
                by_code.insert(code.to_lowercase(), Arc::clone(airport));
            }
        }
        Self { by_code }
    }

    /// Look up an airport by IATA or ICAO code, case-insensitively.
    pub fn lookup(&self, code: &str) -> Option<&Arc<Airport>> {
        self.by_code.get(&code.to_lowercase())
    }

    /// Number of code entries (not airports: dual-coded airports count twice).
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
