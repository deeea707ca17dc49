//! Carrier rate tables.
//!
//! Strict typed read models for the tables the external rate-sheet importer
//! populates. The importer's loose row shapes stop at its own boundary; the
//! core only ever sees these records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Currency, IataCode};

/// Which side of an air leg an airport rate's fees apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Fees charged at the origin airport.
    Export,
    /// Fees charged at the destination airport.
    Import,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceType::Export => f.write_str("export"),
            ServiceType::Import => f.write_str("import"),
        }
    }
}

/// A trucking rate row.
///
/// Lookup is by origin country name only; the destination column exists in
/// the data but is not used when matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckingRate {
    /// Origin region or country name, e.g. "Germany".
    pub origin: String,

    /// Destination region or country name.
    pub destination: String,

    pub base_price: f64,
    pub km_price: f64,
    pub currency: Currency,
}

/// Airport handling/customs fees, keyed by (station, airline, service type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRate {
    pub station: IataCode,
    pub country_code: String,
    pub airline: String,
    pub service_type: ServiceType,

    #[serde(default)]
    pub handling: Option<f64>,
    #[serde(default)]
    pub customs: Option<f64>,

    pub currency: Currency,
}

impl AirportRate {
    /// Handling plus customs, missing components counting as zero.
    pub fn total_fee(&self) -> f64 {
        self.handling.unwrap_or(0.0) + self.customs.unwrap_or(0.0)
    }
}

/// An airline's tiered per-kg rate ladder for one station/country pair.
///
/// `over_1000kg` is carried from the rate sheets but is not read by the
/// pricing path; cargo above every breakpoint prices its weight component
/// at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineRate {
    pub station: IataCode,
    pub origin_country_code: String,
    pub destination_country_code: String,
    pub airline: String,

    pub fuel_charge_per_kg: f64,
    pub base_price: f64,

    #[serde(default)]
    pub price_under_45kg: Option<f64>,
    #[serde(default)]
    pub price_under_100kg: Option<f64>,
    #[serde(default)]
    pub price_under_250kg: Option<f64>,
    #[serde(default)]
    pub price_under_300kg: Option<f64>,
    #[serde(default)]
    pub price_under_500kg: Option<f64>,
    #[serde(default)]
    pub price_under_1000kg: Option<f64>,
    #[serde(default)]
    pub over_1000kg: Option<f64>,

    pub currency: Currency,
}

impl AirlineRate {
    /// The weight-tier ladder in ascending breakpoint order.
    pub fn tiers(&self) -> [(f64, Option<f64>); 6] {
        [
            (45.0, self.price_under_45kg),
            (100.0, self.price_under_100kg),
            (250.0, self.price_under_250kg),
            (300.0, self.price_under_300kg),
            (500.0, self.price_under_500kg),
            (1000.0, self.price_under_1000kg),
        ]
    }
}
