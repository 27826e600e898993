use crate::ScoreError;
use chrono::{NaiveDate, NaiveTime};
use tally_types::{Money, ReceiptData};

/// A line item with its fields parsed into scoring form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredItem {
    /// Description with leading/trailing whitespace removed.
    pub trimmed_description: String,
    /// Exact item price.
    pub price: Money,
}

/// Provides a typed, validated view over a receipt for scoring rules.
///
/// All parsing happens once here, up front. Rules operating on a
/// `ScoringInput` are infallible, which keeps the scorer a pure sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringInput {
    /// Merchant name as submitted. May be empty.
    pub retailer: String,
    /// Exact receipt total.
    pub total: Money,
    /// Parsed line items, in submission order.
    pub items: Vec<ScoredItem>,
    /// Calendar date of the purchase.
    pub purchase_date: NaiveDate,
    /// Time of day of the purchase, minute precision.
    pub purchase_time: NaiveTime,
}

impl ScoringInput {
    /// Parses the raw field set into scoring form.
    ///
    /// Any unparseable field yields `ScoreError::MalformedReceipt` naming the
    /// field; an empty retailer or an empty item list is not an error.
    pub fn from_receipt(data: &ReceiptData) -> Result<Self, ScoreError> {
        let total = data
            .total
            .parse::<Money>()
            .map_err(|e| ScoreError::malformed("total", &data.total, e.to_string()))?;

        let purchase_date = NaiveDate::parse_from_str(&data.purchase_date, "%Y-%m-%d")
            .map_err(|e| ScoreError::malformed("purchaseDate", &data.purchase_date, e.to_string()))?;

        let purchase_time = NaiveTime::parse_from_str(&data.purchase_time, "%H:%M")
            .map_err(|e| ScoreError::malformed("purchaseTime", &data.purchase_time, e.to_string()))?;

        let items = data
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let price = item.price.parse::<Money>().map_err(|e| {
                    ScoreError::malformed(
                        format!("items[{index}].price"),
                        &item.price,
                        e.to_string(),
                    )
                })?;
                Ok(ScoredItem {
                    trimmed_description: item.short_description.trim().to_string(),
                    price,
                })
            })
            .collect::<Result<Vec<_>, ScoreError>>()?;

        Ok(Self { retailer: data.retailer.clone(), total, items, purchase_date, purchase_time })
    }
}
