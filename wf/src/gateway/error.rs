//! Gateway error types

use std::time::Duration;
use thiserror::Error;

/// External service a credential gates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Generation,
    FlightSearch,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generation => write!(f, "generation"),
            Self::FlightSearch => write!(f, "flight search"),
        }
    }
}

/// Errors that can occur during gateway operations
///
/// Nothing here is retried automatically; every failure surfaces to the
/// initiating command and the session stays usable.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{service} API key is not configured")]
    MissingCredential { service: Service },

    #[error("Travel plan generation failed: {0}")]
    GenerationFailed(String),

    #[error("Flight lookup failed: {0}")]
    LookupFailed(String),

    #[error("API request failed with status: {status}")]
    RequestFailed { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl GatewayError {
    /// Check if this failure happened before any network attempt
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, GatewayError::MissingCredential { .. })
    }

    /// Get the upstream HTTP status if one was observed
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::RequestFailed { status } => Some(*status),
            GatewayError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing_credential() {
        let err = GatewayError::MissingCredential {
            service: Service::Generation,
        };
        assert!(err.is_missing_credential());

        let err = GatewayError::RequestFailed { status: 503 };
        assert!(!err.is_missing_credential());
    }

    #[test]
    fn test_status() {
        let err = GatewayError::RequestFailed { status: 429 };
        assert_eq!(err.status(), Some(429));

        let err = GatewayError::GenerationFailed("boom".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display_names_the_service() {
        let err = GatewayError::MissingCredential {
            service: Service::FlightSearch,
        };
        assert_eq!(err.to_string(), "flight search API key is not configured");
    }
}
