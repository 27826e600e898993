//! Five points for every two items on the receipt.
//!
//! An odd item out contributes nothing; an empty item list scores zero.

use crate::input::ScoringInput;
use crate::plugin::ScoringRule;

/// Rule 4: `+5` per full pair of items, `5 * floor(count / 2)`.
#[derive(Debug, Default)]
pub struct ItemPairs;

impl ScoringRule for ItemPairs {
    fn name(&self) -> &str {
        "item_pairs"
    }

    fn points(&self, input: &ScoringInput) -> u64 {
        5 * (input.items.len() as u64 / 2)
    }
}
