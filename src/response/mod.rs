// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response normalization layer
//!
//! Collapses every transport outcome into one uniform envelope shape so the
//! surface renders success and failure the same way.

mod envelope;
mod normalizer;

pub use envelope::{ResultEnvelope, StatusValue};
pub use normalizer::normalize;
