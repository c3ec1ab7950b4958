//! Error types for the posts service client.

use thiserror::Error;

/// Errors that can occur while talking to the posts service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Base address could not be turned into a request URL
    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never produced a response (DNS, connect, TLS, reset)
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-2xx status
    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status when the service responded with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short message for the footer.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Client(_) => "HTTP client unavailable".to_string(),
            ApiError::InvalidUrl { .. } => "Service address is invalid".to_string(),
            ApiError::Connection { .. } => "Could not reach the posts service".to_string(),
            ApiError::Status { status, .. } => format!("Posts service returned {}", status),
            ApiError::Decode { .. } => "Unexpected response from the posts service".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_for_status_errors_only() {
        let err = ApiError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(), "Posts service returned 404");

        let err = ApiError::InvalidUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(err.status(), None);
    }
}
