//! Distance provider errors.

/// Error from a road-distance lookup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DistanceError {
    /// The segment lacks one or both coordinate pairs
    #[error("segment coordinates are missing")]
    MissingCoordinates,

    /// Transport-level failure talking to the routing service
    #[error("distance request failed: {0}")]
    Http(String),

    /// The routing service answered with a non-success status
    #[error("distance provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    /// The routing service found no road route between the points
    #[error("no road route between the given points")]
    NoRoute,

    /// The response body could not be decoded
    #[error("failed to decode distance response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for DistanceError {
    fn from(err: reqwest::Error) -> Self {
        DistanceError::Http(err.to_string())
    }
}
