//! Tally Types
//!
//! This crate defines the shared types and data structures used throughout the
//! Tally ecosystem (`tally-calculator`, `tally-core` and `tally-api`). It
//! provides the receipt data model and the fixed-point `Money` type, and
//! eliminates circular dependencies between crates.

#![deny(warnings)]
#![deny(missing_docs)]

mod types;

pub use types::{Item, Money, MoneyParseError, Receipt, ReceiptData, ReceiptId};
