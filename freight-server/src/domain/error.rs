//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from storage/provider errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route segment shape violates the trucking/air/trucking invariant
    #[error("invalid route shape: {0}")]
    InvalidRouteShape(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidRouteShape("interior legs must be air");
        assert_eq!(err.to_string(), "invalid route shape: interior legs must be air");
    }
}
