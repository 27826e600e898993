//! Six points when the day of the purchase date is odd.

use crate::input::ScoringInput;
use crate::plugin::ScoringRule;
use chrono::Datelike;

/// Rule 6: `+6` if the day-of-month is odd.
#[derive(Debug, Default)]
pub struct OddPurchaseDay;

impl ScoringRule for OddPurchaseDay {
    fn name(&self) -> &str {
        "odd_purchase_day"
    }

    fn points(&self, input: &ScoringInput) -> u64 {
        if input.purchase_date.day() % 2 == 1 { 6 } else { 0 }
    }
}
