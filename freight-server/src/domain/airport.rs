//! Airport reference data.

use serde::{Deserialize, Serialize};

use super::{Coordinates, IataCode};

/// A known airport, as populated by the external import process.
///
/// Immutable reference data; the core only ever reads these rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Unique 3-letter station code.
    pub code: IataCode,

    /// Display name, e.g. "Frankfurt am Main Airport".
    pub name: String,

    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,

    /// Stored coordinates for proximity search.
    pub coordinates: Coordinates,

    /// External geocoding place identifier, if known.
    #[serde(default)]
    pub place_id: Option<String>,

    /// Region tag from the rate sheets, if any.
    #[serde(default)]
    pub region: Option<String>,
}
