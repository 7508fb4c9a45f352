// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! The uniform result shape delivered to the surface

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Status position of an envelope: a received code, or `"Unknown"` when no
/// response ever arrived
///
/// Serializes as a JSON number or the literal string `"Unknown"`, which is
/// what the wire protocol carries in `statusCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusValue {
    /// A status code the transport actually received
    Code(u16),
    /// No response was received
    Unknown,
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusValue::Code(code) => write!(f, "{code}"),
            StatusValue::Unknown => f.write_str("Unknown"),
        }
    }
}

impl Serialize for StatusValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatusValue::Code(code) => serializer.serialize_u16(*code),
            StatusValue::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for StatusValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(u16),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Ok(StatusValue::Code(code)),
            Raw::Text(text) if text == "Unknown" => Ok(StatusValue::Unknown),
            Raw::Text(other) => Err(D::Error::custom(format!(
                "statusCode must be a number or \"Unknown\", got \"{other}\""
            ))),
        }
    }
}

/// Normalized result of one dispatch
///
/// Created once per submission, consumed once by the renderer, then
/// discarded - there is no retained history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Whether a response was received
    pub success: bool,
    /// Received status, or `Unknown`
    #[serde(rename = "statusCode")]
    pub status: StatusValue,
    /// Response payload, or the server's error body on failure
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Value>,
    /// Human-readable failure message
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ResultEnvelope {
    /// Envelope for a received response, whatever its status
    pub fn received(status: u16, data: Value) -> Self {
        Self {
            success: true,
            status: StatusValue::Code(status),
            data: Some(data),
            error: None,
        }
    }

    /// Envelope for a failure with no response at all
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            status: StatusValue::Unknown,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Envelope for a failure that still carries a received status
    pub fn failure_with_status(status: u16, error: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            success: false,
            status: StatusValue::Code(status),
            data,
            error: Some(error.into()),
        }
    }

    /// Check whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization() {
        let envelope = ResultEnvelope::received(200, json!({"id": 1}));
        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(wire["success"], json!(true));
        assert_eq!(wire["statusCode"], json!(200));
        assert_eq!(wire["data"], json!({"id": 1}));
        assert!(wire.get("error").is_none());
    }

    #[test]
    fn test_unknown_status_serialization() {
        let envelope = ResultEnvelope::failure("network error: refused");
        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(wire["statusCode"], json!("Unknown"));
        assert_eq!(wire["error"], json!("network error: refused"));
        assert!(wire.get("data").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let envelope = ResultEnvelope::failure_with_status(503, "HTTP 503", Some(json!("busy")));
        let wire = serde_json::to_string(&envelope).unwrap();
        let back: ResultEnvelope = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, envelope);
    }

    #[test]
    fn test_rejects_other_status_strings() {
        let result: Result<StatusValue, _> = serde_json::from_str("\"Timeout\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StatusValue::Code(404).to_string(), "404");
        assert_eq!(StatusValue::Unknown.to_string(), "Unknown");
    }
}
