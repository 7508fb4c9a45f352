// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the Luotain request pipeline
//!
//! Validation errors block dispatch entirely; transport errors are converted
//! into a [`ResultEnvelope`](crate::response::ResultEnvelope) at the
//! dispatcher/normalizer boundary and never propagate out of a submission.

use thiserror::Error;

/// Result type alias for Luotain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the request pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// URL field was empty or whitespace
    #[error("missing URL: enter a request URL before sending")]
    MissingUrl,

    /// Headers field was not valid JSON object text
    #[error("invalid JSON in headers: {reason}")]
    HeaderParse { reason: String },

    /// Body field was not valid JSON text
    #[error("invalid JSON in request body: {reason}")]
    BodyParse { reason: String },

    /// No response was received (DNS, connection, timeout, malformed URL)
    #[error("network error: {0}")]
    Network(String),

    /// A response was received but the transport classified it as an error
    #[error("HTTP {status}: {reason}")]
    Http {
        status: u16,
        reason: String,
        body: Option<String>,
    },

    /// Client construction or configuration failure
    #[error("configuration error: {0}")]
    Config(String),

    /// Message delivery to the host surface failed
    #[error("channel error: {0}")]
    Channel(String),
}

impl Error {
    /// Create a header validation error from a parse failure
    pub fn header_parse(reason: impl Into<String>) -> Self {
        Error::HeaderParse {
            reason: reason.into(),
        }
    }

    /// Create a body validation error from a parse failure
    pub fn body_parse(reason: impl Into<String>) -> Self {
        Error::BodyParse {
            reason: reason.into(),
        }
    }

    /// Create a network error
    pub fn network(reason: impl Into<String>) -> Self {
        Error::Network(reason.into())
    }

    /// Create an HTTP error carrying the received status
    pub fn http(status: u16, reason: impl Into<String>, body: Option<String>) -> Self {
        Error::Http {
            status,
            reason: reason.into(),
            body,
        }
    }

    /// Check if this error was raised before any dispatch happened
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingUrl | Error::HeaderParse { .. } | Error::BodyParse { .. }
        )
    }

    /// Check if this is a transport failure with no response
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Get the HTTP status code if a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_predicate() {
        assert!(Error::MissingUrl.is_validation());
        assert!(Error::header_parse("expected object").is_validation());
        assert!(Error::body_parse("trailing comma").is_validation());
        assert!(!Error::network("connection refused").is_validation());
    }

    #[test]
    fn test_status_code() {
        let err = Error::http(503, "service unavailable", None);
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(Error::MissingUrl.status_code(), None);
    }

    #[test]
    fn test_display_messages() {
        let err = Error::header_parse("expected value at line 1 column 2");
        assert!(err.to_string().contains("invalid JSON in headers"));

        let err = Error::network("dns error");
        assert!(err.to_string().starts_with("network error"));
    }
}
