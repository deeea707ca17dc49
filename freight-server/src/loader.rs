//! Reference-data loading.
//!
//! Airports, scheduled flights and the carrier rate tables are read from
//! JSON files in a data directory at startup. A missing file is not fatal;
//! the corresponding table just starts empty, which the route builder and
//! pricing engine already tolerate.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::store::{MemoryStore, StoreError};

/// Error from reference-data loading.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read one JSON array file, treating a missing file as empty.
fn load_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, LoaderError> {
    let path = dir.join(file);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(file, "reference data file not found, table starts empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(LoaderError::Io {
                file: file.to_string(),
                source: e,
            });
        }
    };

    serde_json::from_str(&contents).map_err(|e| LoaderError::Parse {
        file: file.to_string(),
        source: e,
    })
}

/// Populate a store from the JSON files in `dir`.
pub fn load_reference_data(dir: &Path, store: &MemoryStore) -> Result<(), LoaderError> {
    store.add_airports(load_table(dir, "airports.json")?)?;
    store.add_flights(load_table(dir, "scheduled_flights.json")?)?;
    store.add_trucking_rates(load_table(dir, "trucking_rates.json")?)?;
    store.add_airport_rates(load_table(dir, "airport_rates.json")?)?;
    store.add_airline_rates(load_table(dir, "airline_rates.json")?)?;
    Ok(())
}
