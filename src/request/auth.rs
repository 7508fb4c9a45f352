// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Authentication resolution
//!
//! Two mutually exclusive schemes: a bearer token always wins when present,
//! basic credentials apply only when both username and password were given.

use super::RequestDraft;

/// Resolved authentication scheme for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSpec {
    /// `Authorization: Bearer <token>`
    Bearer(String),
    /// `Authorization: Basic <base64(username:password)>`
    Basic { username: String, password: String },
    /// No `Authorization` header
    None,
}

impl AuthSpec {
    /// Resolve the scheme from a draft's credential fields
    pub fn resolve(draft: &RequestDraft) -> Self {
        if !draft.bearer_token.is_empty() {
            AuthSpec::Bearer(draft.bearer_token.clone())
        } else if !draft.username.is_empty() && !draft.password.is_empty() {
            AuthSpec::Basic {
                username: draft.username.clone(),
                password: draft.password.clone(),
            }
        } else {
            AuthSpec::None
        }
    }

    /// Render the `Authorization` header value, if any
    pub fn header_value(&self) -> Option<String> {
        match self {
            AuthSpec::Bearer(token) => Some(format!("Bearer {}", token)),
            AuthSpec::Basic { username, password } => {
                let encoded = base64::Engine::encode(
                    &base64::engine::general_purpose::STANDARD,
                    format!("{}:{}", username, password),
                );
                Some(format!("Basic {}", encoded))
            }
            AuthSpec::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    fn draft_with(token: &str, username: &str, password: &str) -> RequestDraft {
        RequestDraft {
            bearer_token: token.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            ..RequestDraft::new("https://example.com", Method::Get)
        }
    }

    #[test]
    fn test_bearer_wins_over_basic() {
        let draft = draft_with("secret", "user", "pass");
        let auth = AuthSpec::resolve(&draft);
        assert_eq!(auth, AuthSpec::Bearer("secret".to_string()));
        assert_eq!(auth.header_value().unwrap(), "Bearer secret");
    }

    #[test]
    fn test_basic_requires_both_fields() {
        let auth = AuthSpec::resolve(&draft_with("", "user", ""));
        assert_eq!(auth, AuthSpec::None);
        assert_eq!(auth.header_value(), None);

        let auth = AuthSpec::resolve(&draft_with("", "", "pass"));
        assert_eq!(auth, AuthSpec::None);
    }

    #[test]
    fn test_basic_encoding() {
        let auth = AuthSpec::resolve(&draft_with("", "user", "pass"));
        // base64("user:pass")
        assert_eq!(auth.header_value().unwrap(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_no_credentials() {
        let auth = AuthSpec::resolve(&draft_with("", "", ""));
        assert_eq!(auth, AuthSpec::None);
    }
}
