//! One point for every alphanumeric character in the retailer name.
//!
//! Spaces, punctuation and every other non-alphanumeric character contribute
//! nothing; an empty retailer scores zero without failing.

use crate::input::ScoringInput;
use crate::plugin::ScoringRule;

/// Rule 1: `+1` per letter or digit in the retailer name.
#[derive(Debug, Default)]
pub struct RetailerAlphanumeric;

impl ScoringRule for RetailerAlphanumeric {
    fn name(&self) -> &str {
        "retailer_alphanumeric"
    }

    fn points(&self, input: &ScoringInput) -> u64 {
        input.retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
    }
}
