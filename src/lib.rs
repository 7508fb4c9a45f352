// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Luotain - Embeddable HTTP Request Tester
//!
//! A pure Rust pipeline for interactive API testing: a host surface hands
//! over raw form fields, Luotain validates and dispatches the request, and
//! returns a uniform, syntax-highlighted rendering of the result.
//!
//! ## Features
//!
//! - Typed validation: missing URL, malformed header/body JSON caught before
//!   any network traffic
//! - Bearer and basic auth with a fixed precedence (bearer always wins)
//! - One dispatch per submission, 15 s timeout, no retries
//! - Uniform result envelope: any received status is a result, only the
//!   absence of a response is an error
//! - HTML-safe JSON highlighting via a hand-rolled lexical scanner
//! - Submission ids: overlapping submissions cannot overwrite each other's
//!   rendering out of order
//! - Last-draft persistence through a pluggable single-slot store
//!
//! ## Example
//!
//! ```rust,no_run
//! use luotain::{Method, Pipeline, RequestDraft};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::with_defaults()?;
//!
//!     let mut draft = RequestDraft::new("https://api.example.com/items", Method::Post);
//!     draft.body_text = r#"{"name": "widget"}"#.to_string();
//!     draft.bearer_token = "secret".to_string();
//!
//!     let submission = pipeline.handle_submit(&draft).await;
//!     if pipeline.is_latest(submission.id) {
//!         println!("{}", luotain::highlight::render_result(&submission.envelope));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod dispatch;
pub mod error;
pub mod highlight;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod store;

// Re-exports for convenience

// Request construction
pub use request::{build, parse_json, AuthSpec, Method, RequestDescriptor, RequestDraft};

// Dispatch
pub use dispatch::{Dispatcher, DispatcherConfig, Outcome, RawResponse};

// Normalization
pub use response::{normalize, ResultEnvelope, StatusValue};

// Highlighting
pub use highlight::{escape_html, highlight as highlight_json, render_result, TokenClass};

// Pipeline and protocol
pub use pipeline::{Pipeline, Submission, SubmissionId, ViewChannel, ViewMessage};

// Persistence
pub use store::{MemoryStore, StateStore};

// Errors
pub use error::{Error, Result};

/// Luotain version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
