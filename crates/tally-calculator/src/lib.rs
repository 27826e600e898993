#![deny(warnings)]
//! The scoring rule ecosystem for the Tally receipt points service.
//!
//! This crate provides the `ScoringRule` trait, the `ScoringInput` view over
//! a parsed receipt, and the `Scorer` that registers the seven built-in
//! rules and sums their contributions into a point total.

use thiserror::Error;

mod input;
mod scorer;

pub mod built_in;
pub mod plugin;

pub use input::{ScoredItem, ScoringInput};
pub use plugin::ScoringRule;
pub use scorer::Scorer;

/// Error produced when a stored receipt's fields cannot be interpreted as
/// the types scoring requires (non-numeric total or price, unparseable date
/// or time). Detected before any rule runs, so a failed score has no partial
/// result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// A field value could not be parsed into its scoring type.
    #[error("malformed receipt: field '{field}' value '{value}' cannot be interpreted ({message})")]
    MalformedReceipt {
        /// Name of the offending field, e.g. `total` or `items[2].price`.
        field: String,
        /// The raw value as submitted.
        value: String,
        /// What the parser objected to.
        message: String,
    },
}

impl ScoreError {
    /// Create a malformed-receipt error for a specific field.
    pub fn malformed(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedReceipt {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed to parse.
    pub fn field(&self) -> &str {
        match self {
            ScoreError::MalformedReceipt { field, .. } => field,
        }
    }
}
