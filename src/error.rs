//! Error types for the AirVisual client

use thiserror::Error;

use crate::transport::TransportError;

/// Status string the API uses when the daily or monthly quota is exhausted
pub const CALL_LIMIT_REACHED: &str = "call_limit_reached";

/// Main error type for the AirVisual client
///
/// `endpoint` fields hold the request path (for example `/v2/city`), never
/// the full URL, so the API key does not leak into logs or error reports.
#[derive(Error, Debug)]
pub enum AirVisualError {
    /// The transport could not complete the request (DNS, TLS, connection, timeout)
    #[error("Failed to fetch {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: TransportError,
    },

    /// The server answered with a non-2xx HTTP status
    #[error("Unexpected HTTP status {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    /// The body was not valid JSON or did not match the expected shape
    #[error("Cannot decode JSON from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed response whose `status` is not `success`
    #[error("API rejected request to {endpoint}: {status}")]
    ApiStatus {
        endpoint: String,
        status: String,
        message: Option<String>,
    },

    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AirVisualError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The API status string, if this error came from a rejected request
    #[must_use]
    pub fn api_status(&self) -> Option<&str> {
        match self {
            Self::ApiStatus { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Whether the API rejected the request because the quota is used up
    #[must_use]
    pub fn is_call_limit_reached(&self) -> bool {
        self.api_status() == Some(CALL_LIMIT_REACHED)
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { .. } => {
                "Unable to reach the AirVisual API. Please check your internet connection."
                    .to_string()
            }
            Self::HttpStatus { status, .. } => {
                format!("The AirVisual API answered with HTTP status {status}.")
            }
            Self::Decode { .. } => "The AirVisual API sent a response that could not be read."
                .to_string(),
            Self::ApiStatus {
                status, message, ..
            } => match status.as_str() {
                CALL_LIMIT_REACHED => "API call limit reached. Try again later.".to_string(),
                "api_key_expired" | "incorrect_api_key" => {
                    "The AirVisual API key is invalid or expired.".to_string()
                }
                _ => match message {
                    Some(message) => format!("Request rejected ({status}): {message}"),
                    None => format!("Request rejected: {status}"),
                },
            },
            Self::Config { message } => format!("Configuration error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_accessors() {
        let err = AirVisualError::ApiStatus {
            endpoint: "/v2/countries".to_string(),
            status: CALL_LIMIT_REACHED.to_string(),
            message: None,
        };
        assert_eq!(err.api_status(), Some("call_limit_reached"));
        assert!(err.is_call_limit_reached());
        assert!(err.to_string().contains("call_limit_reached"));

        let config_err = AirVisualError::config("missing API key");
        assert!(config_err.api_status().is_none());
        assert!(!config_err.is_call_limit_reached());
    }

    #[test]
    fn test_user_messages() {
        let limit = AirVisualError::ApiStatus {
            endpoint: "/v2/city".to_string(),
            status: CALL_LIMIT_REACHED.to_string(),
            message: None,
        };
        assert!(limit.user_message().contains("call limit"));

        let not_found = AirVisualError::ApiStatus {
            endpoint: "/v2/city".to_string(),
            status: "fail".to_string(),
            message: Some("city_not_found".to_string()),
        };
        assert_eq!(
            not_found.user_message(),
            "Request rejected (fail): city_not_found"
        );

        let status = AirVisualError::HttpStatus {
            endpoint: "/v2/city".to_string(),
            status: 502,
        };
        assert!(status.user_message().contains("502"));
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let source: TransportError = "connection reset".into();
        let err = AirVisualError::Transport {
            endpoint: "/v2/station".to_string(),
            source,
        };
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("connection reset"));
    }
}
