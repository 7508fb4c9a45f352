// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Raw form input for one request

use serde::{Deserialize, Serialize};

/// Request methods offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Whether this method carries a request body
    ///
    /// GET and DELETE never do; any body text on the form is ignored for
    /// them rather than rejected.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }

    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(format!("unsupported method: {other}")),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Raw, unvalidated form input for one request
///
/// Field names follow the wire protocol: `headers` and `body` arrive as raw
/// JSON text exactly as typed, and an empty string means the field was left
/// blank. One draft is created per submission and handed to
/// [`build`](crate::request::build).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestDraft {
    /// Target URL as typed
    #[serde(default)]
    pub url: String,
    /// Request method
    #[serde(default)]
    pub method: Method,
    /// Raw JSON object text for extra headers, or empty
    #[serde(rename = "headers", default)]
    pub headers_text: String,
    /// Raw JSON text for the request body, or empty
    #[serde(rename = "body", default)]
    pub body_text: String,
    /// Bearer token; when non-empty it wins over basic credentials
    #[serde(rename = "token", default)]
    pub bearer_token: String,
    /// Basic-auth username
    #[serde(default)]
    pub username: String,
    /// Basic-auth password
    #[serde(default)]
    pub password: String,
}

impl RequestDraft {
    /// Create a draft for a URL with everything else blank
    pub fn new(url: impl Into<String>, method: Method) -> Self {
        Self {
            url: url.into(),
            method,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serde_names() {
        assert_eq!(serde_json::to_string(&Method::Get).unwrap(), "\"GET\"");
        assert_eq!(
            serde_json::from_str::<Method>("\"DELETE\"").unwrap(),
            Method::Delete
        );
    }

    #[test]
    fn test_method_allows_body() {
        assert!(!Method::Get.allows_body());
        assert!(!Method::Delete.allows_body());
        assert!(Method::Post.allows_body());
        assert!(Method::Put.allows_body());
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert!("PATCH".parse::<Method>().is_err());
    }

    #[test]
    fn test_draft_wire_names() {
        let draft = RequestDraft {
            url: "https://api.example.com".to_string(),
            method: Method::Post,
            headers_text: "{\"X-Trace\": \"1\"}".to_string(),
            body_text: "{\"a\": 1}".to_string(),
            bearer_token: "tok".to_string(),
            username: String::new(),
            password: String::new(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["headers"], "{\"X-Trace\": \"1\"}");
        assert_eq!(json["body"], "{\"a\": 1}");
        assert_eq!(json["token"], "tok");

        let back: RequestDraft = serde_json::from_value(json).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_draft_defaults_for_missing_fields() {
        let draft: RequestDraft =
            serde_json::from_str("{\"url\": \"https://example.com\"}").unwrap();
        assert_eq!(draft.method, Method::Get);
        assert!(draft.headers_text.is_empty());
        assert!(draft.bearer_token.is_empty());
    }
}
