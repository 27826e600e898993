//! In-memory receipt storage with sequential identifier assignment.

use chrono::Utc;
use std::sync::{Arc, RwLock};
use tally_types::{Receipt, ReceiptData, ReceiptId};

/// In-memory store for accepted receipts with direct-index lookup.
///
/// Identifiers are dense — `receipt.id - 1` is the vector index — because
/// ids start at 1, are assigned in submission order and receipts are never
/// removed. That makes lookup an O(1) index instead of a scan.
///
/// # Concurrency
/// - Identifier assignment and insertion happen under a single write lock,
///   so two concurrent submissions never receive the same identifier and a
///   lookup never observes a partially written receipt.
/// - Reads take a shared lock; any number of lookups proceed concurrently.
///
/// # Lifetime
/// State is process-wide and never persisted; restarting the service starts
/// the identifier sequence over at 1.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<Vec<Receipt>>,
}

impl ReceiptStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self { receipts: RwLock::new(Vec::new()) }
    }

    /// Creates a store with pre-allocated capacity for the expected number
    /// of receipts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { receipts: RwLock::new(Vec::with_capacity(capacity)) }
    }

    /// Creates a store wrapped in an `Arc` for sharing across request
    /// handlers.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Accepts the raw field set for a new receipt, assigns the next
    /// sequential identifier and stores an immutable snapshot.
    ///
    /// Never fails under normal input; field semantics are not validated
    /// here — malformed values surface when the receipt is scored.
    pub fn submit(&self, data: ReceiptData) -> ReceiptId {
        let mut receipts = self.receipts.write().unwrap();
        let id = receipts.len() as ReceiptId + 1;
        receipts.push(Receipt { id, submitted_at: Utc::now(), data });
        id
    }

    /// Returns the stored receipt matching `id`, or `None` if no such
    /// identifier was ever assigned.
    pub fn get(&self, id: ReceiptId) -> Option<Receipt> {
        if id == 0 {
            return None;
        }
        self.receipts.read().unwrap().get((id - 1) as usize).cloned()
    }

    /// Number of receipts stored so far.
    pub fn len(&self) -> usize {
        self.receipts.read().unwrap().len()
    }

    /// `true` when no receipt has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
