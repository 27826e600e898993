//! Ten points when the purchase falls in the 14:00–16:00 afternoon window.
//!
//! The boundaries are exact: 14:00 itself does not qualify (the minute must
//! be nonzero at hour 14), every minute of hour 15 qualifies, and 16:00 is
//! out.

use crate::input::ScoringInput;
use crate::plugin::ScoringRule;
use chrono::Timelike;

/// Rule 7: `+10` when `hour == 14 && minute != 0`, or `hour == 15`.
#[derive(Debug, Default)]
pub struct AfternoonWindow;

impl ScoringRule for AfternoonWindow {
    fn name(&self) -> &str {
        "afternoon_window"
    }

    fn points(&self, input: &ScoringInput) -> u64 {
        let hour = input.purchase_time.hour();
        let minute = input.purchase_time.minute();
        if (hour == 14 && minute != 0) || hour == 15 { 10 } else { 0 }
    }
}
