//! Airport proximity search.

use crate::domain::{Airport, Coordinates};
use crate::store::{AirportStore, StoreError};

/// Find the `limit` airports closest to a point, ascending by
/// great-circle distance.
///
/// Ties keep the stored table order. An empty airport table yields an
/// empty list, not an error. Pure query, no side effects.
pub fn find_closest_airports<S: AirportStore>(
    store: &S,
    point: Coordinates,
    limit: usize,
) -> Result<Vec<Airport>, StoreError> {
    let mut by_distance: Vec<(f64, Airport)> = store
        .airports()?
        .into_iter()
        .map(|airport| (point.haversine_km(&airport.coordinates), airport))
        .collect();

    by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));
    by_distance.truncate(limit);

    Ok(by_distance.into_iter().map(|(_, airport)| airport).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IataCode;
    use crate::store::MemoryStore;

    fn airport(code: &str, lat: f64, lon: f64) -> Airport {
        Airport {
            code: IataCode::parse(code).unwrap(),
            name: format!("{code} Airport"),
            country_code: "DE".into(),
            coordinates: Coordinates::new(lat, lon),
            place_id: None,
            region: None,
        }
    }

    fn store_with(airports: Vec<Airport>) -> MemoryStore {
        let store = MemoryStore::new();
        store.add_airports(airports).unwrap();
        store
    }

    #[test]
    fn empty_table_yields_empty_list() {
        let store = MemoryStore::new();
        let result = find_closest_airports(&store, Coordinates::new(50.0, 8.0), 3).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn nearest_first() {
        // Query point is Mainz; FRA is much closer than MUC or HAM.
        let store = store_with(vec![
            airport("MUC", 48.353, 11.786),
            airport("FRA", 50.033, 8.570),
            airport("HAM", 53.630, 9.988),
        ]);

        let result = find_closest_airports(&store, Coordinates::new(50.0, 8.27), 3).unwrap();
        let codes: Vec<&str> = result.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, vec!["FRA", "MUC", "HAM"]);
    }

    #[test]
    fn respects_limit() {
        let store = store_with(vec![
            airport("MUC", 48.353, 11.786),
            airport("FRA", 50.033, 8.570),
            airport("HAM", 53.630, 9.988),
            airport("STR", 48.690, 9.222),
        ]);

        let result = find_closest_airports(&store, Coordinates::new(50.0, 8.27), 2).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].code.as_str(), "FRA");
    }

    #[test]
    fn limit_larger_than_table() {
        let store = store_with(vec![airport("FRA", 50.033, 8.570)]);
        let result = find_closest_airports(&store, Coordinates::new(50.0, 8.27), 5).unwrap();
        assert_eq!(result.len(), 1);
    }
}
