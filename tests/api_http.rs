use axum::{
    body::{to_bytes, Body},
    Router,
};
use http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use views_predictor::scoring::ViewPredictor;
use views_predictor::server::router;

fn test_app() -> Router {
    router(Arc::new(ViewPredictor::default()))
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(request).await
}

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(request).await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

#[tokio::test]
async fn health_is_ok() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn engagement_coerces_bad_input_to_zero() {
    let payload = json!({"likes": "abc", "comments": 20});
    let (status, body) = post_json("/api/engagement", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["engagement"].as_f64(), Some(0.4));
    assert_eq!(body["formatted"], "0.40");

    let (_, body) = post_json("/api/engagement", json!({})).await;
    assert_eq!(body["engagement"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn predict_returns_full_estimate() {
    let payload = json!({
        "likes": 100,
        "comments": "20",
        "category_id": 10,
        "publish_hour": 15,
        "day_of_week": 6,
        "seed": "fixture",
    });
    let (status, body) = post_json("/api/predict", payload).await;

    assert_eq!(status, StatusCode::OK);
    let value = body["prediction"].as_u64().unwrap();
    assert!((773..=2273).contains(&value));
    assert_eq!(body["lower_bound"].as_u64(), Some((value as f64 * 0.7).round() as u64));
    assert_eq!(body["upper_bound"].as_u64(), Some((value as f64 * 1.3).round() as u64));
    assert_eq!(body["category_name"], "Music");
    assert_eq!(body["weekday_name"], "Sunday");
    assert_eq!(body["timing"], "Strong boost");
    assert_eq!(body["summary"]["likes"], "100");
    assert_eq!(body["summary"]["engagement"], "1.40");
    assert_eq!(body["summary"]["hour"], "15:00");
    assert_eq!(body["summary"]["day"], "Sunday");
    assert!(body["insight"]
        .as_str()
        .unwrap()
        .ends_with("gives you a powerful timing advantage."));
    assert!(body["range_text"]
        .as_str()
        .unwrap()
        .starts_with("Estimated range: "));
}

#[tokio::test]
async fn predict_with_same_seed_is_stable() {
    let payload = json!({"likes": 5000, "comments": 300, "category_id": 20, "seed": "abc"});
    let (_, first) = post_json("/api/predict", payload.clone()).await;
    let (_, second) = post_json("/api/predict", payload).await;

    assert_eq!(first["prediction"], second["prediction"]);
}

#[tokio::test]
async fn predict_tolerates_unknown_category() {
    let payload = json!({"likes": 10, "comments": 1, "category_id": "999"});
    let (status, body) = post_json("/api/predict", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category_name"], "Unknown");
    assert_eq!(body["category_boost"].as_f64(), Some(1.0));

    let (_, body) = post_json("/api/predict", json!({"category_id": null})).await;
    assert_eq!(body["category_name"], "Unknown");
    assert_eq!(body["summary"]["day"], "Monday");
    assert_eq!(body["timing"], "Neutral");
}

#[tokio::test]
async fn predict_rejects_out_of_range_time() {
    let (status, body) = post_json("/api/predict", json!({"publish_hour": 24})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.as_str().unwrap().contains("publish_hour"));

    let (status, _) = post_json("/api/predict", json!({"day_of_week": "7"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tables_are_exposed_for_dropdowns() {
    let (status, categories) = get_json("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let categories = categories.as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0]["id"], 1);
    assert_eq!(categories[0]["name"], "Film & Animation");
    assert_eq!(categories[0]["boost"].as_f64(), Some(1.15));

    let (status, weekdays) = get_json("/api/weekdays").await;
    assert_eq!(status, StatusCode::OK);
    let weekdays = weekdays.as_array().unwrap();
    assert_eq!(weekdays.len(), 7);
    assert_eq!(weekdays[6], json!({"index": 6, "name": "Sunday"}));
}

#[tokio::test]
async fn predict_accepts_numeric_seed() {
    let payload = json!({"likes": 100, "seed": 42});
    let (status, first) = post_json("/api/predict", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = post_json("/api/predict", payload).await;
    assert_eq!(first["prediction"], second["prediction"]);

    let (_, text_seed) = post_json("/api/predict", json!({"likes": 100, "seed": "42"})).await;
    assert_eq!(first["prediction"], text_seed["prediction"]);
}

#[tokio::test]
async fn predict_rejects_non_scalar_seed() {
    let (status, body) = post_json("/api/predict", json!({"likes": 100, "seed": true})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.as_str().unwrap().contains("seed"));

    let (status, _) = post_json("/api/predict", json!({"seed": {"value": 1}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
