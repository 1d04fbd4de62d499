mod common;

use std::collections::HashMap;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::json;

use common::spawn_server;
use nutriview::api::{set_silent, FeedClient, FeedResponse, FeedSource, FetchError};
use nutriview::models::ProductQuery;
use nutriview::pipeline;
use nutriview::view::{NewsContainer, StatusLine, TableBody};

fn client(base_url: &str) -> FeedClient {
    set_silent(true);
    FeedClient::new(base_url, Some(Duration::from_secs(5))).unwrap()
}

/// Echoes the submitted form back as a single product so tests can see it.
fn echo_backend() -> Router {
    Router::new()
        .route(
            "/fetch_data",
            post(|Form(form): Form<HashMap<String, String>>| async move {
                Json(json!({
                    "status": "success",
                    "data": [{
                        "product_name": form.get("page"),
                        "brands": form.get("limit"),
                        "ingredients_text": form.get("language"),
                        "quantity": form.get("brand"),
                        "code": form.len(),
                        "energy-kcal_100g": 250.0,
                        "salt_100g": 0
                    }]
                }))
            }),
        )
        .route(
            "/fetch_news",
            get(|| async {
                Json(json!({
                    "status": "success",
                    "articles": [
                        {"title": "Harvest report", "description": "Good year for oats"},
                        {"title": "Label update"}
                    ]
                }))
            }),
        )
}

#[tokio::test]
async fn test_fetch_products_posts_form_fields() {
    let base = spawn_server(echo_backend()).await;
    let query = ProductQuery {
        page: "2".into(),
        limit: "50".into(),
        language: "fr".into(),
        brand: Some("Bonne Maman".into()),
        product_name: None,
        category: None,
    };

    let response = client(&base).fetch_products(&query).await.unwrap();

    let records = match response {
        FeedResponse::Success(records) => records,
        other => panic!("expected success, got {:?}", other),
    };
    let cells = records[0].cells();
    assert_eq!(cells[0], "2");
    assert_eq!(cells[1], "50");
    assert_eq!(cells[2], "fr");
    assert_eq!(cells[3], "Bonne Maman");
    assert_eq!(cells[4], "4");
    assert_eq!(cells[5], "250");
    assert_eq!(cells[10], "0");
}

#[tokio::test]
async fn test_fetch_news_end_to_end_render() {
    let base = spawn_server(echo_backend()).await;
    let mut news = NewsContainer::default();

    let state = pipeline::news::load_news(&client(&base), &mut news).await;

    assert_eq!(state, pipeline::FeedState::Rendered);
    let cards: Vec<_> = news.articles().collect();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].description, "Good year for oats");
    assert_eq!(cards[1].description, "No description available.");
}

#[tokio::test]
async fn test_error_envelope_with_http_400_is_business_error() {
    let backend = Router::new().route(
        "/fetch_data",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"status": "error", "message": "Page and limit must be positive integers."})),
            )
        }),
    );
    let base = spawn_server(backend).await;
    let mut table = TableBody::default();
    let mut status = StatusLine::default();

    pipeline::products::load_products(&client(&base), &ProductQuery::default(), &mut table, &mut status).await;

    assert_eq!(status.text(), "Error: Page and limit must be positive integers.");
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let backend = Router::new().route(
        "/fetch_news",
        get(|| async { (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>") }),
    );
    let base = spawn_server(backend).await;

    let err = client(&base).fetch_news().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_missing_endpoint_is_transport_error() {
    let base = spawn_server(Router::new()).await;
    let mut news = NewsContainer::default();

    pipeline::news::load_news(&client(&base), &mut news).await;

    let messages: Vec<_> = news.nodes().to_vec();
    assert_eq!(messages, vec![nutriview::view::NewsNode::Message(pipeline::news::TRANSPORT_FAILURE.into())]);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr)).fetch_news().await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_request_timeout_is_network_error() {
    let backend = Router::new().route(
        "/fetch_news",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"status": "success", "articles": []}))
        }),
    );
    let base = spawn_server(backend).await;
    set_silent(true);
    let client = FeedClient::new(base, Some(Duration::from_millis(200))).unwrap();

    let err = client.fetch_news().await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}
