//! Airport records from the source dataset.

/// Geographic position of an airport, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// An airport as loaded from the source dataset.
///
/// `id` is the dataset's stable identifier and is unique across the loaded
/// set; either code field may be absent. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// Stable identifier from the source data.
    pub id: String,

    /// IATA code (3 letters), if assigned.
    pub iata: Option<String>,

    /// ICAO code (4 letters), if assigned.
    pub icao: Option<String>,

    /// Display name.
    pub name: String,

    /// Position used for distance computation.
    pub location: Location,
}

impl Airport {
    /// The code shown to clients: IATA, falling back to ICAO.
    pub fn code(&self) -> Option<&str> {
        self.iata.as_deref().or(self.icao.as_deref())
    }

    /// Like [`Airport::code`], but total: falls back to the raw dataset id
    /// for airports carrying neither code.
    pub fn code_or_id(&self) -> &str {
        self.code().unwrap_or(&self.id)
    }
}
