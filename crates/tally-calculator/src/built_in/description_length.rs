//! Price-based bonus for items whose trimmed description length is a
//! positive multiple of 3.
//!
//! For each qualifying item the bonus is `ceil(price * 0.2)`, computed
//! exactly in cents so no float rounding can change a boundary case. A
//! trimmed length of 0 does not qualify.

use crate::input::ScoringInput;
use crate::plugin::ScoringRule;
use tally_types::Money;

/// Rule 5: per qualifying item, `+ceil(price * 0.2)`.
#[derive(Debug, Default)]
pub struct DescriptionLength;

/// `ceil(price * 0.2)` in whole points: one fifth of the price is
/// `cents / 500` dollars, rounded up.
fn ceil_fifth(price: Money) -> u64 {
    let cents = price.cents().max(0);
    ((cents + 499) / 500) as u64
}

impl ScoringRule for DescriptionLength {
    fn name(&self) -> &str {
        "description_length"
    }

    fn points(&self, input: &ScoringInput) -> u64 {
        input
            .items
            .iter()
            .filter(|item| {
                let len = item.trimmed_description.chars().count();
                len > 0 && len % 3 == 0
            })
            .map(|item| ceil_fifth(item.price))
            .sum()
    }
}
