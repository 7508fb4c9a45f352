// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Wire protocol between the host surface and the pipeline

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::request::RequestDraft;
use crate::response::ResultEnvelope;

/// One message on the surface/pipeline channel
///
/// Request/response, asynchronous, single-shot per submission. The tag is
/// the `command` field, exactly as the surface scripts expect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ViewMessage {
    /// Surface to pipeline: submit the form
    SendRequest { data: RequestDraft },
    /// Pipeline to surface: the normalized result
    Response { response: ResultEnvelope },
}

/// Transport the host surface owns
///
/// The pipeline never renders anything itself; it posts a
/// [`ViewMessage::Response`] through this trait and the surface decides what
/// to do with it.
#[async_trait]
pub trait ViewChannel: Send + Sync {
    /// Deliver a message to the surface
    async fn post(&self, message: ViewMessage) -> Result<()>;
}
