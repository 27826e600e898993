use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use tally_api::create_app;

fn server() -> TestServer {
    TestServer::new(create_app()).unwrap()
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

#[tokio::test]
async fn create_returns_created_with_sequential_ids() {
    let server = server();

    let response = server.post("/receipts").json(&target_receipt()).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 1);

    let response = server.post("/receipts").json(&corner_market_receipt()).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 2);
}

#[tokio::test]
async fn points_for_stored_receipts() {
    let server = server();
    server.post("/receipts").json(&target_receipt()).await.assert_status(StatusCode::CREATED);
    server
        .post("/receipts")
        .json(&corner_market_receipt())
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/receipts/1/points").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["points"], 28);

    let response = server.get("/receipts/2/points").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["points"], 109);
}

#[tokio::test]
async fn unknown_receipt_id_is_not_found() {
    let server = server();

    let response = server.get("/receipts/99/points").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], "NOT_FOUND");
}

#[tokio::test]
async fn zero_points_is_a_valid_response_distinct_from_not_found() {
    let server = server();
    let body = json!({
        "retailer": "&&&",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "09:00",
        "items": [],
        "total": "1.01"
    });
    server.post("/receipts").json(&body).await.assert_status(StatusCode::CREATED);

    let response = server.get("/receipts/1/points").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["points"], 0);
}

#[tokio::test]
async fn malformed_stored_receipt_fails_at_scoring_time() {
    let server = server();
    let body = json!({
        "retailer": "Target",
        "purchaseDate": "not-a-date",
        "purchaseTime": "13:01",
        "items": [],
        "total": "1.00"
    });

    // Submission succeeds; validation is deferred to scoring.
    server.post("/receipts").json(&body).await.assert_status(StatusCode::CREATED);

    let response = server.get("/receipts/1/points").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "MALFORMED_RECEIPT");
    assert_eq!(body["details"]["field"], "purchaseDate");
}

#[tokio::test]
async fn non_numeric_identifier_is_rejected() {
    let server = server();
    let response = server.get("/receipts/abc/points").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_receipt_count() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["receiptsStored"], 0);

    server.post("/receipts").json(&target_receipt()).await.assert_status(StatusCode::CREATED);
    let body = server.get("/health").await.json::<Value>();
    assert_eq!(body["receiptsStored"], 1);
}

#[tokio::test]
async fn missing_retailer_is_accepted_and_earns_no_retailer_points() {
    let server = server();
    let body = json!({
        "purchaseDate": "2022-01-02",
        "purchaseTime": "09:00",
        "items": [],
        "total": "1.01"
    });
    server.post("/receipts").json(&body).await.assert_status(StatusCode::CREATED);

    let response = server.get("/receipts/1/points").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["points"], 0);
}
