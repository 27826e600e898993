use crate::error::{TallyError, TallyResult};
use crate::receipt_store::ReceiptStore;
use tally_calculator::Scorer;
use tally_types::{Receipt, ReceiptData, ReceiptId};
use tracing::{debug, info, instrument};

/// Main engine pairing the receipt store with the scoring rules.
///
/// All methods take `&self`; the store handles its own locking and the
/// scorer is stateless, so one engine instance serves any number of
/// concurrent requests.
pub struct TallyEngine {
    store: ReceiptStore,
    scorer: Scorer,
}

impl Default for TallyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyEngine {
    /// Create a new engine instance.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new Tally engine");
        Self { store: ReceiptStore::new(), scorer: Scorer::new() }
    }

    /// Create an engine with a capacity hint for the receipt store.
    #[instrument]
    pub fn with_capacity(receipt_count_hint: usize) -> Self {
        info!(receipt_count_hint, "Creating Tally engine with capacity hint");
        Self { store: ReceiptStore::with_capacity(receipt_count_hint), scorer: Scorer::new() }
    }

    /// Accept a receipt and return its newly assigned identifier.
    #[instrument(skip(self, data))]
    pub fn submit_receipt(&self, data: ReceiptData) -> ReceiptId {
        let receipt_id = self.store.submit(data);
        info!(receipt_id, "Receipt accepted");
        receipt_id
    }

    /// Compute the point total for a previously stored receipt.
    #[instrument(skip(self))]
    pub fn score_receipt(&self, receipt_id: ReceiptId) -> TallyResult<u64> {
        let receipt =
            self.store.get(receipt_id).ok_or_else(|| TallyError::not_found(receipt_id))?;

        match self.scorer.score(&receipt.data) {
            Ok(points) => {
                debug!(receipt_id, points, "Scored receipt");
                Ok(points)
            }
            Err(error) => Err(TallyError::malformed(receipt_id, error)),
        }
    }

    /// Per-rule contributions for a stored receipt, in rule order.
    #[instrument(skip(self))]
    pub fn score_breakdown(&self, receipt_id: ReceiptId) -> TallyResult<Vec<(&str, u64)>> {
        let receipt =
            self.store.get(receipt_id).ok_or_else(|| TallyError::not_found(receipt_id))?;

        self.scorer
            .score_breakdown(&receipt.data)
            .map_err(|error| TallyError::malformed(receipt_id, error))
    }

    /// Fetch a stored receipt snapshot.
    pub fn receipt(&self, receipt_id: ReceiptId) -> Option<Receipt> {
        self.store.get(receipt_id)
    }

    /// Number of receipts accepted so far.
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}

impl std::fmt::Debug for TallyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TallyEngine").field("receipts", &self.store.len()).finish()
    }
}
