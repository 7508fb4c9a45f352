// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Draft validation and descriptor construction

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, Result};

use super::auth::AuthSpec;
use super::draft::{Method, RequestDraft};
use super::{headers, DEFAULT_TIMEOUT};

/// Validated, fully resolved outbound request
///
/// URL *syntax* is deliberately not validated here; a malformed URL surfaces
/// as a transport failure at dispatch, the same way an unreachable host does.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Target URL, trimmed and non-empty
    pub url: String,
    /// Request method
    pub method: Method,
    /// Resolved headers, including any injected `Authorization` and
    /// `Content-Type`
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON body, present only for body-carrying methods
    pub body: Option<Value>,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Parse raw JSON text
///
/// The one parsing entry point for everything the form submits; keeps the
/// validation contract testable away from dispatch.
pub fn parse_json(text: &str) -> std::result::Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// Validate a draft and resolve it into a dispatchable descriptor
///
/// Failure modes, in order: [`Error::MissingUrl`] for an empty or whitespace
/// URL, [`Error::HeaderParse`] for header text that is not a JSON object,
/// [`Error::BodyParse`] for body text that is not valid JSON. For GET and
/// DELETE any body text is silently ignored, matching the form's historical
/// behavior, and no `Content-Type` is added.
pub fn build(draft: &RequestDraft) -> Result<RequestDescriptor> {
    let url = draft.url.trim();
    if url.is_empty() {
        return Err(Error::MissingUrl);
    }

    let mut resolved = parse_headers(&draft.headers_text)?;

    if let Some(value) = AuthSpec::resolve(draft).header_value() {
        insert_overwriting(&mut resolved, headers::AUTHORIZATION, value);
    }

    let body = if draft.method.allows_body() && !draft.body_text.is_empty() {
        let value = parse_json(&draft.body_text).map_err(|e| Error::body_parse(e.to_string()))?;
        insert_overwriting(
            &mut resolved,
            headers::CONTENT_TYPE,
            "application/json".to_string(),
        );
        Some(value)
    } else {
        None
    };

    Ok(RequestDescriptor {
        url: url.to_string(),
        method: draft.method,
        headers: resolved,
        body,
        timeout: DEFAULT_TIMEOUT,
    })
}

/// Parse the raw header text into a name/value map
///
/// Empty text means no extra headers. Values that are JSON strings are taken
/// verbatim; anything else keeps its compact JSON rendering.
fn parse_headers(text: &str) -> Result<BTreeMap<String, String>> {
    if text.is_empty() {
        return Ok(BTreeMap::new());
    }

    let value = parse_json(text).map_err(|e| Error::header_parse(e.to_string()))?;
    let object = match value {
        Value::Object(map) => map,
        _ => return Err(Error::header_parse("expected a JSON object")),
    };

    Ok(object
        .into_iter()
        .map(|(name, value)| (name, header_value_text(value)))
        .collect())
}

fn header_value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Insert a header, replacing any existing entry under any letter case
///
/// Header names compare case-insensitively on the wire; the map must never
/// carry both `authorization` and `Authorization`.
fn insert_overwriting(map: &mut BTreeMap<String, String>, name: &str, value: String) {
    map.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
    map.insert(name.to_string(), value);
}
