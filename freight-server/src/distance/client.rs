//! HTTP client for an OSRM-compatible routing service.

use serde::Deserialize;

use crate::domain::Coordinates;

use super::DistanceError;
use super::DistanceProvider;

/// Default base URL for the routing service.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Configuration for the routing-service client.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Base URL of the OSRM-compatible service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MatrixConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Road-distance client backed by an OSRM-compatible `/route` endpoint.
#[derive(Debug, Clone)]
pub struct MatrixClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    /// Route length in metres.
    distance: f64,
}

impl MatrixClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MatrixConfig) -> Result<Self, DistanceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl DistanceProvider for MatrixClient {
    async fn distance_km(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError> {
        // OSRM takes lon,lat pairs.
        let url = format!(
            "{}/route/v1/driving/{:.6},{:.6};{:.6},{:.6}?overview=false",
            self.base_url, from.longitude, from.latitude, to.longitude, to.latitude,
        );

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DistanceError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: RouteResponse = response
            .json()
            .await
            .map_err(|e| DistanceError::Decode(e.to_string()))?;

        if body.code != "Ok" {
            return Err(DistanceError::NoRoute);
        }

        body.routes
            .first()
            .map(|r| r.distance / 1000.0)
            .ok_or(DistanceError::NoRoute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builders() {
        let config = MatrixConfig::new()
            .with_base_url("http://localhost:5000")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn decodes_route_response() {
        let json = r#"{"code":"Ok","routes":[{"distance":104213.5,"duration":4200.0}]}"#;
        let body: RouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.code, "Ok");
        assert_eq!(body.routes[0].distance, 104213.5);
    }

    #[test]
    fn decodes_no_route_response() {
        let json = r#"{"code":"NoRoute","message":"Impossible route"}"#;
        let body: RouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.code, "NoRoute");
        assert!(body.routes.is_empty());
    }
}
