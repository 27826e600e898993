//! Built-in scoring rules.
//!
//! One module per rule, registered by `Scorer::new` in the order listed in
//! the rewards programme definition.

pub mod afternoon_window;
pub mod description_length;
pub mod item_pairs;
pub mod odd_day;
pub mod quarter_multiple;
pub mod retailer_alphanumeric;
pub mod round_dollar;
