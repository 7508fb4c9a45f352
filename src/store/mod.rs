// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Last-submission persistence
//!
//! One slot, last write wins. The pipeline saves the draft that is about to
//! be dispatched and replays it when the view reinitializes; there is no
//! history, merging, or versioning.

use parking_lot::RwLock;

use crate::request::RequestDraft;

/// Storage contract the host surface provides
///
/// Implementations must be cheap to call on every submission; `save`
/// overwrites unconditionally and `load` returns the most recent save, if
/// any.
pub trait StateStore: Send + Sync {
    /// Persist the draft, replacing any previous one
    fn save(&self, draft: &RequestDraft);

    /// Return the last saved draft
    fn load(&self) -> Option<RequestDraft>;
}

/// In-memory single-slot store
///
/// The default store when the host has nothing durable to offer; state lives
/// as long as the pipeline does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<RequestDraft>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn save(&self, draft: &RequestDraft) {
        *self.slot.write() = Some(draft.clone());
    }

    fn load(&self) -> Option<RequestDraft> {
        self.slot.read().clone()
    }
}
