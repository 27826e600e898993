//! Twenty-five points when the total is an exact multiple of 0.25.
//!
//! A round dollar total always satisfies this check too, so this bonus
//! stacks with the round-dollar bonus.

use crate::input::ScoringInput;
use crate::plugin::ScoringRule;

/// Rule 3: `+25` if the total is a multiple of 0.25.
#[derive(Debug, Default)]
pub struct QuarterMultipleTotal;

impl ScoringRule for QuarterMultipleTotal {
    fn name(&self) -> &str {
        "quarter_multiple_total"
    }

    fn points(&self, input: &ScoringInput) -> u64 {
        if input.total.is_quarter_multiple() { 25 } else { 0 }
    }
}
