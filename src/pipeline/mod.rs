// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! The assembled request pipeline
//!
//! One explicitly constructed value per surface - no process-wide singleton.
//! The host owns its lifecycle and calls [`Pipeline::handle_submit`] (or
//! feeds [`ViewMessage`]s through [`Pipeline::handle_message`]) for each
//! form submission.
//!
//! Overlapping submissions are allowed. Every submission gets a
//! monotonically increasing id, and the rendering gate
//! ([`Pipeline::is_latest`]) discards any result that is no longer the most
//! recently issued one, so a slow early request can never overwrite the
//! result of a later one.

mod message;

pub use message::{ViewChannel, ViewMessage};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::request::{build, RequestDraft};
use crate::response::{normalize, ResultEnvelope};
use crate::store::{MemoryStore, StateStore};

/// Monotonic identity of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of one submission, tagged with its id
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: SubmissionId,
    pub envelope: ResultEnvelope,
}

/// The request pipeline: validation, dispatch, normalization, persistence
pub struct Pipeline<S: StateStore = MemoryStore> {
    dispatcher: Dispatcher,
    store: S,
    /// Id of the most recently issued submission
    latest: AtomicU64,
}

impl Pipeline<MemoryStore> {
    /// Pipeline with a fresh dispatcher and an in-memory store
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(Dispatcher::new()?, MemoryStore::new()))
    }
}

impl<S: StateStore> Pipeline<S> {
    /// Assemble a pipeline from its parts
    pub fn new(dispatcher: Dispatcher, store: S) -> Self {
        Self {
            dispatcher,
            store,
            latest: AtomicU64::new(0),
        }
    }

    /// Run one submission end to end
    ///
    /// Validation failures become an envelope directly and never reach the
    /// dispatcher; the draft is saved only once it is actually about to go
    /// out, so the store always replays the last draft that was dispatched.
    pub async fn handle_submit(&self, draft: &RequestDraft) -> Submission {
        let id = self.issue_id();
        tracing::debug!(id = %id, url = %draft.url, method = %draft.method, "submission");

        let envelope = match build(draft) {
            Ok(descriptor) => {
                self.store.save(draft);
                normalize(self.dispatcher.send(&descriptor).await)
            }
            Err(err) => {
                tracing::debug!(id = %id, error = %err, "validation failed");
                ResultEnvelope::failure(err.to_string())
            }
        };

        Submission { id, envelope }
    }

    /// Route one protocol message
    ///
    /// `sendRequest` runs the submission and posts the result back - unless
    /// a newer submission was issued meanwhile, in which case the stale
    /// result is dropped. Inbound `response` messages are not ours to
    /// handle and are ignored.
    pub async fn handle_message<C: ViewChannel>(
        &self,
        message: ViewMessage,
        channel: &C,
    ) -> Result<()> {
        match message {
            ViewMessage::SendRequest { data } => {
                let submission = self.handle_submit(&data).await;
                if self.is_latest(submission.id) {
                    channel
                        .post(ViewMessage::Response {
                            response: submission.envelope,
                        })
                        .await
                } else {
                    tracing::debug!(id = %submission.id, "discarding stale result");
                    Ok(())
                }
            }
            ViewMessage::Response { .. } => Ok(()),
        }
    }

    /// Whether this id is still the most recently issued submission
    pub fn is_latest(&self, id: SubmissionId) -> bool {
        self.latest.load(Ordering::SeqCst) == id.0
    }

    /// Replay the last dispatched draft for view initialization
    pub fn restore(&self) -> Option<RequestDraft> {
        self.store.load()
    }

    fn issue_id(&self) -> SubmissionId {
        SubmissionId(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
