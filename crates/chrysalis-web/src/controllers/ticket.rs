//! Load tickets
//!
//! Each load takes a ticket; only the newest ticket may apply its result.
//! Issuing a new ticket or cancelling the sequence invalidates every older
//! one. The request itself keeps running; its result is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of load tickets for one controller instance
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes all earlier ones
    pub fn issue(&self) -> LoadTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            id,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Invalidate every outstanding ticket
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// Permission to apply one load result
#[derive(Debug, Clone)]
pub struct LoadTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl LoadTicket {
    /// Whether no newer ticket was issued and the sequence was not cancelled
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }

    /// Sequence number, for logging
    pub const fn id(&self) -> u64 {
        self.id
    }
}
