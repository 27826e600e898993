use crate::ScoreError;
use crate::built_in::{
    afternoon_window::AfternoonWindow, description_length::DescriptionLength,
    item_pairs::ItemPairs, odd_day::OddPurchaseDay, quarter_multiple::QuarterMultipleTotal,
    retailer_alphanumeric::RetailerAlphanumeric, round_dollar::RoundDollarTotal,
};
use crate::input::ScoringInput;
use crate::plugin::ScoringRule;
use tally_types::ReceiptData;

/// Applies the registered scoring rules to a receipt.
///
/// `Scorer` is stateless apart from its rule registry and is safe for
/// unlimited concurrent use. Scoring is deterministic: the same receipt
/// always produces the same total.
pub struct Scorer {
    rules: Vec<Box<dyn ScoringRule>>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    /// Creates a scorer with the seven built-in rules registered in the
    /// rewards programme order.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn ScoringRule>> = vec![
            Box::new(RetailerAlphanumeric),
            Box::new(RoundDollarTotal),
            Box::new(QuarterMultipleTotal),
            Box::new(ItemPairs),
            Box::new(DescriptionLength),
            Box::new(OddPurchaseDay),
            Box::new(AfternoonWindow),
        ];
        Self { rules }
    }

    /// Computes the point total for a receipt.
    ///
    /// Malformed numeric, date or time fields fail with
    /// `ScoreError::MalformedReceipt` before any rule runs.
    pub fn score(&self, data: &ReceiptData) -> Result<u64, ScoreError> {
        let input = ScoringInput::from_receipt(data)?;
        Ok(self.rules.iter().map(|rule| rule.points(&input)).sum())
    }

    /// Computes per-rule contributions, in registration order.
    ///
    /// The sum of the breakdown equals `score` for the same receipt. Useful
    /// for diagnostics and audit logs.
    pub fn score_breakdown(&self, data: &ReceiptData) -> Result<Vec<(&str, u64)>, ScoreError> {
        let input = ScoringInput::from_receipt(data)?;
        Ok(self.rules.iter().map(|rule| (rule.name(), rule.points(&input))).collect())
    }
}
