use tally_core::{TallyEngine, TallyError};
use tally_types::{Item, ReceiptData};

fn receipt(
    retailer: &str,
    date: &str,
    time: &str,
    total: &str,
    items: &[(&str, &str)],
) -> ReceiptData {
    ReceiptData {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        items: items
            .iter()
            .map(|(description, price)| Item {
                short_description: description.to_string(),
                price: price.to_string(),
            })
            .collect(),
        total: total.to_string(),
    }
}

#[test]
fn submit_then_score_round_trips_through_the_engine() {
    let engine = TallyEngine::new();
    let id = engine.submit_receipt(receipt(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        &[
            ("Mountain Dew 12PK", "6.49"),
            ("Emils Cheese Pizza", "12.25"),
            ("Knorr Creamy Chicken", "1.26"),
            ("Doritos Nacho Cheese", "3.35"),
            ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    ));

    assert_eq!(id, 1);
    assert_eq!(engine.score_receipt(id).unwrap(), 28);
    // Scoring is repeatable against the same stored receipt.
    assert_eq!(engine.score_receipt(id).unwrap(), 28);
}

#[test]
fn scoring_an_unknown_identifier_is_not_found() {
    let engine = TallyEngine::new();
    assert_eq!(engine.score_receipt(42), Err(TallyError::not_found(42)));

    engine.submit_receipt(receipt("Target", "2022-01-01", "13:01", "1.00", &[]));
    assert_eq!(engine.score_receipt(2), Err(TallyError::not_found(2)));
}

#[test]
fn zero_point_receipt_is_distinct_from_not_found() {
    let engine = TallyEngine::new();
    // Non-alphanumeric retailer, even day, morning, non-quarter total.
    let id = engine.submit_receipt(receipt("&&&", "2022-01-02", "09:00", "1.01", &[]));
    assert_eq!(engine.score_receipt(id), Ok(0));
}

#[test]
fn malformed_stored_receipt_fails_scoring_without_corrupting_the_store() {
    let engine = TallyEngine::new();
    let good = engine.submit_receipt(receipt("Shop", "2022-03-20", "14:33", "9.00", &[]));
    let bad = engine.submit_receipt(receipt("Shop", "not-a-date", "14:33", "9.00", &[]));

    match engine.score_receipt(bad) {
        Err(TallyError::MalformedReceipt { receipt_id, field, .. }) => {
            assert_eq!(receipt_id, bad);
            assert_eq!(field, "purchaseDate");
        }
        other => panic!("expected malformed receipt error, got {other:?}"),
    }

    // The failure is local to the malformed receipt.
    assert!(engine.score_receipt(good).is_ok());
    assert_eq!(engine.receipt_count(), 2);
}

#[test]
fn breakdown_names_every_rule_in_order() {
    let engine = TallyEngine::new();
    let id = engine.submit_receipt(receipt(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        "9.00",
        &[("Gatorade", "2.25"), ("Gatorade", "2.25")],
    ));

    let breakdown = engine.score_breakdown(id).unwrap();
    let names: Vec<&str> = breakdown.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        [
            "retailer_alphanumeric",
            "round_dollar_total",
            "quarter_multiple_total",
            "item_pairs",
            "description_length",
            "odd_purchase_day",
            "afternoon_window",
        ]
    );
}

#[test]
fn stored_receipts_are_immutable_snapshots() {
    let engine = TallyEngine::new();
    let data = receipt("Target", "2022-01-01", "13:01", "1.00", &[("Soda", "1.00")]);
    let id = engine.submit_receipt(data.clone());

    let first = engine.receipt(id).unwrap();
    let second = engine.receipt(id).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.data, data);
}
