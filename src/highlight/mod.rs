// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JSON syntax highlighting for the result surface
//!
//! Pure text-in, markup-out. The input is HTML-escaped exactly once, here,
//! before tokenization - response payloads must never reach the surface as
//! live markup. Callers therefore pass raw JSON text, not pre-escaped text.

mod lexer;

pub use lexer::{tokenize, Segment, Token, TokenClass};

use crate::response::ResultEnvelope;

/// Escape `&`, `<`, and `>` to their HTML entities
///
/// Runs exactly once per rendering, inside [`highlight`]. Applying it to
/// already-escaped text would double-escape the ampersands.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Highlight serialized JSON text as class-annotated markup
///
/// Every classified token is wrapped in a `<span class="...">`; structural
/// characters and whitespace pass through unchanged, so stripping the span
/// tags reproduces the escaped input byte for byte.
pub fn highlight(json: &str) -> String {
    let escaped = escape_html(json);
    let mut out = String::with_capacity(escaped.len() + escaped.len() / 2);

    for segment in tokenize(&escaped) {
        match segment {
            Segment::Raw(text) => out.push_str(text),
            Segment::Token(token) => {
                out.push_str("<span class=\"");
                out.push_str(token.class.css_class());
                out.push_str("\">");
                out.push_str(token.text);
                out.push_str("</span>");
            }
        }
    }

    out
}

/// Render a result envelope as display markup
///
/// Success: a status heading plus the highlighted payload. Failure: the
/// error message (escaped), plus the highlighted server error body when the
/// transport attached one.
pub fn render_result(envelope: &ResultEnvelope) -> String {
    let mut out = String::new();

    if envelope.success {
        out.push_str(&format!(
            "<h3 class=\"status ok\">Response: {}</h3>",
            envelope.status
        ));
        if let Some(data) = &envelope.data {
            out.push_str("<pre class=\"json\">");
            out.push_str(&highlight(&pretty(data)));
            out.push_str("</pre>");
        }
    } else {
        let message = envelope.error.as_deref().unwrap_or("request failed");
        out.push_str(&format!(
            "<span class=\"status error\">Error ({}): {}</span>",
            envelope.status,
            escape_html(message)
        ));
        if let Some(data) = &envelope.data {
            out.push_str("<pre class=\"json\">");
            out.push_str(&highlight(&pretty(data)));
            out.push_str("</pre>");
        }
    }

    out
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
