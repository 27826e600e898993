use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier assigned to a receipt at submission time.
///
/// Identifiers form a strictly increasing sequence starting at 1, assigned in
/// submission order, and are never reused.
pub type ReceiptId = u64;

/// A single line entry on a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description of the purchased product. Leading and trailing
    /// whitespace is insignificant for scoring.
    pub short_description: String,
    /// Price of the item as submitted, e.g. `"6.49"`. Kept as the raw string;
    /// interpretation is deferred to scoring time.
    pub price: String,
}

/// The field set submitted for a new receipt.
///
/// Raw strings are retained as-is. The store does not validate field
/// semantics; malformed values surface when the receipt is scored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptData {
    /// Merchant name. An absent or empty retailer is accepted and simply
    /// earns no retailer points.
    #[serde(default)]
    pub retailer: String,
    /// Calendar date of purchase in `YYYY-MM-DD` form.
    pub purchase_date: String,
    /// Time of day of purchase in 24-hour `HH:MM` form.
    pub purchase_time: String,
    /// Ordered sequence of line items.
    pub items: Vec<Item>,
    /// Receipt total as submitted, e.g. `"35.35"`.
    pub total: String,
}

/// A stored receipt: the submitted field set plus the identity the store
/// assigned to it. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store-assigned identifier, unique for the process lifetime.
    pub id: ReceiptId,
    /// When the store accepted the submission.
    pub submitted_at: DateTime<Utc>,
    /// The submitted fields.
    pub data: ReceiptData,
}

/// Error returned when a string cannot be interpreted as a monetary amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid monetary amount")]
pub struct MoneyParseError {
    /// The offending input string.
    pub value: String,
}

/// A monetary amount held as an exact integer number of cents.
///
/// Fixed-point arithmetic keeps the round-dollar and quarter-multiple checks
/// exact; a float representation of `"35.35"` would misclassify both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Creates an amount from a raw cent count.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// The amount as an integer number of cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// `true` when the amount is an integral number of dollars.
    pub const fn is_round_dollar(&self) -> bool {
        self.cents % 100 == 0
    }

    /// `true` when the amount is an exact multiple of 0.25. Every round
    /// dollar amount is also a quarter multiple.
    pub const fn is_quarter_multiple(&self) -> bool {
        self.cents % 25 == 0
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parses decimal amounts such as `"35.35"`, `"9"` or `"9.5"`. At most
    /// two fraction digits are accepted; anything else is rejected rather
    /// than rounded.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parse_error = || MoneyParseError { value: raw.to_string() };

        let s = raw.trim();
        let (dollars, fraction) = match s.split_once('.') {
            Some((d, f)) => (d, f),
            None => (s, ""),
        };

        if dollars.is_empty() && fraction.is_empty() {
            return Err(parse_error());
        }
        if !dollars.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(parse_error());
        }

        let whole: i64 =
            if dollars.is_empty() { 0 } else { dollars.parse().map_err(|_| parse_error())? };
        let cents_part: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| parse_error())? * 10,
            2 => fraction.parse().map_err(|_| parse_error())?,
            _ => return Err(parse_error()),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .map(Money::from_cents)
            .ok_or_else(parse_error)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
