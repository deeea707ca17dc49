//! Scheduled flight reference data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::IataCode;

/// Identifier for a scheduled flight row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightId(pub u64);

/// A concrete, dated flight instance.
///
/// Generated in bulk from weekly patterns or specific-date schedules by an
/// external importer; read-only to the core. Many instances share the same
/// airline and airport pair. Timestamps are absolute and timezone-naive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledFlight {
    pub id: FlightId,

    /// Airline code, e.g. "LH".
    pub airline: String,

    /// Flight number, e.g. "LH498".
    pub flight_number: String,

    pub origin: IataCode,
    pub destination: IataCode,

    pub departure_at: NaiveDateTime,
    pub arrival_at: NaiveDateTime,

    /// Link back to the weekly-pattern template this instance was
    /// generated from, if any.
    #[serde(default)]
    pub pattern_id: Option<u64>,
}

impl ScheduledFlight {
    /// Scheduled block time in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        let mins = (self.arrival_at - self.departure_at).num_minutes();
        mins as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn flight(departure: &str, arrival: &str) -> ScheduledFlight {
        ScheduledFlight {
            id: FlightId(1),
            airline: "LH".into(),
            flight_number: "LH498".into(),
            origin: IataCode::parse("FRA").unwrap(),
            destination: IataCode::parse("MEX").unwrap(),
            departure_at: dt(departure),
            arrival_at: dt(arrival),
            pattern_id: None,
        }
    }

    #[test]
    fn duration_in_fractional_hours() {
        let f = flight("2025-06-01 10:00", "2025-06-01 22:30");
        assert_eq!(f.duration_hours(), 12.5);
    }

    #[test]
    fn duration_spanning_midnight() {
        let f = flight("2025-06-01 22:00", "2025-06-02 07:15");
        assert_eq!(f.duration_hours(), 9.25);
    }

    #[test]
    fn serde_round_trip() {
        let f = flight("2025-06-01 10:00", "2025-06-01 22:30");
        let json = serde_json::to_string(&f).unwrap();
        let back: ScheduledFlight = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
        // Verify the date helper agrees with chrono's serde format.
        assert_eq!(
            back.departure_at.date(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }
}
