// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport outcome to envelope conversion

use serde_json::Value;

use crate::dispatch::Outcome;
use crate::error::Error;

use super::envelope::ResultEnvelope;

/// Normalize a transport outcome into the uniform envelope
///
/// A received response is a success whatever its status; the surface shows
/// the status and lets the user judge it. Only the absence of a response is
/// a failure, reported with `statusCode: "Unknown"` - unless the transport
/// attached the status it did receive, which is then preserved.
pub fn normalize(outcome: Outcome) -> ResultEnvelope {
    match outcome {
        Ok(response) => {
            ResultEnvelope::received(response.status_code(), payload(&response.text_lossy()))
        }
        Err(Error::Http {
            status,
            reason,
            body,
        }) => {
            let data = body.filter(|b| !b.is_empty()).map(|b| payload(&b));
            ResultEnvelope::failure_with_status(status, format!("HTTP {status}: {reason}"), data)
        }
        Err(err) => ResultEnvelope::failure(err.to_string()),
    }
}

/// Interpret a body as a JSON payload
///
/// A body that is not valid JSON is carried as a JSON string and an empty
/// body as `null`; the received status is never discarded over an
/// unparseable body.
fn payload(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
