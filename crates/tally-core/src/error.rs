//! Error handling for the Tally core engine.
//!
//! Two error kinds exist and both are local to the operation that detects
//! them: a lookup for an identifier that was never assigned, and a stored
//! receipt whose fields cannot be interpreted for scoring. Neither leaves
//! the store in an inconsistent state.

use tally_calculator::ScoreError;
use tally_types::ReceiptId;
use thiserror::Error;

/// Error type for core engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// Lookup of an identifier that was never assigned. Distinct from a
    /// valid zero-point score.
    #[error("receipt not found: {receipt_id}")]
    ReceiptNotFound {
        /// The identifier that was looked up.
        receipt_id: ReceiptId,
    },

    /// A stored receipt's fields cannot be interpreted as the types the
    /// calculator requires.
    #[error(
        "malformed receipt {receipt_id}: field '{field}' value '{value}' cannot be interpreted ({message})"
    )]
    MalformedReceipt {
        /// Identifier of the stored receipt that failed to score.
        receipt_id: ReceiptId,
        /// Name of the offending field.
        field: String,
        /// The raw value as submitted.
        value: String,
        /// What the parser objected to.
        message: String,
    },
}

impl TallyError {
    /// Get the error category for logging and metrics.
    pub fn category(&self) -> &'static str {
        match self {
            TallyError::ReceiptNotFound { .. } => "not_found",
            TallyError::MalformedReceipt { .. } => "malformed_receipt",
        }
    }

    /// Create a not-found error for an identifier.
    pub fn not_found(receipt_id: ReceiptId) -> Self {
        Self::ReceiptNotFound { receipt_id }
    }

    /// Attach the stored receipt's identifier to a scoring failure.
    pub fn malformed(receipt_id: ReceiptId, error: ScoreError) -> Self {
        match error {
            ScoreError::MalformedReceipt { field, value, message } => {
                Self::MalformedReceipt { receipt_id, field, value, message }
            }
        }
    }
}

/// Result type alias for core engine operations.
pub type TallyResult<T> = Result<T, TallyError>;
