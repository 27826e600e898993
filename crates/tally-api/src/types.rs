//! Response types for the receipts API.
//!
//! The create-receipt request body is `tally_types::ReceiptData` itself; its
//! serde representation already matches the wire format (camelCase field
//! names, raw string amounts).

use serde::{Deserialize, Serialize};
use tally_types::ReceiptId;

/// Response to a successful receipt submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReceiptResponse {
    /// The newly assigned identifier.
    pub id: ReceiptId,
}

/// Response carrying the computed point total for a receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    /// Reward points earned by the receipt.
    pub points: u64,
}

/// Service health summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Fixed `"healthy"` while the process is serving.
    pub status: String,
    /// Seconds since the service started.
    pub uptime_seconds: u64,
    /// Receipts accepted since startup.
    pub receipts_stored: usize,
}
