//! Client error types
//!
//! Every API operation fails in one of two ways: the server answered with a
//! non-2xx status, or no usable answer arrived at all.

use thiserror::Error;

/// Errors returned by [`crate::api::ApiClient`] operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server responded with a non-2xx status
    #[error("API error ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: u16,
        /// The `detail` field of the error body, when there was one
        detail: Option<String>,
    },

    /// The request did not complete, or the response could not be decoded
    #[error("Network error: {0}")]
    Network(String),
}

impl ClientError {
    /// Server-provided detail, or `fallback` when there is none.
    ///
    /// Network errors always produce `fallback`: their text is internal and
    /// never shown to the user.
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ClientError::Api {
                detail: Some(detail),
                ..
            } => detail,
            _ => fallback,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

impl From<crate::api::TransportError> for ClientError {
    fn from(err: crate::api::TransportError) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Network(format!("invalid response body: {}", err))
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Api {
            status: 401,
            detail: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.to_string(), "API error (401): Invalid credentials");

        let err = ClientError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "API error (500): no detail");
    }

    #[test]
    fn test_detail_or_fallback() {
        let err = ClientError::Api {
            status: 400,
            detail: Some("Email already registered".to_string()),
        };
        assert_eq!(err.detail_or("Registration failed"), "Email already registered");

        let err = ClientError::Api {
            status: 400,
            detail: None,
        };
        assert_eq!(err.detail_or("Registration failed"), "Registration failed");

        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.detail_or("Registration failed"), "Registration failed");
        assert!(err.is_network());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(err.is_network());
    }
}
