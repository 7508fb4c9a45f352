// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request construction layer
//!
//! Turns raw form fields into a validated, fully resolved request
//! descriptor. Everything in this module is pure: same draft in, same
//! descriptor or same failure out.

mod auth;
mod builder;
mod draft;

pub use auth::AuthSpec;
pub use builder::{build, parse_json, RequestDescriptor};
pub use draft::{Method, RequestDraft};

use std::time::Duration;

/// Default per-request timeout applied to every descriptor
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Headers the builder itself manages
pub mod headers {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
}
