//! Fifty points when the total is a round dollar amount with no cents.

use crate::input::ScoringInput;
use crate::plugin::ScoringRule;

/// Rule 2: `+50` if the total has zero fractional cents.
#[derive(Debug, Default)]
pub struct RoundDollarTotal;

impl ScoringRule for RoundDollarTotal {
    fn name(&self) -> &str {
        "round_dollar_total"
    }

    fn points(&self, input: &ScoringInput) -> u64 {
        if input.total.is_round_dollar() { 50 } else { 0 }
    }
}
