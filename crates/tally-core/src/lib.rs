#![deny(warnings)]
//! Tally Core
//!
//! The receipt store and engine façade for the Tally receipt points service.
//! `ReceiptStore` assigns sequential identifiers and retains immutable
//! receipt snapshots in memory; `TallyEngine` pairs the store with the
//! scoring rules from `tally-calculator`.

pub mod engine;
pub mod error;
pub mod receipt_store;

pub use engine::TallyEngine;
pub use error::{TallyError, TallyResult};
pub use receipt_store::ReceiptStore;
