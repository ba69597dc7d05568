//! API integration tests
//!
//! Builds the real router against a stub model and drives it with
//! `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shared::models::DailyForecast;
use washday_predictor_backend::{
    config::{AdjustmentConfig, Config, DataConfig, ModelConfig, ServerConfig},
    create_app,
    external::model::StubModel,
    services::{Adjuster, CategoryEncoder, PredictionService},
    AppState,
};

fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        data: DataConfig {
            history_path: "data/history.csv".to_string(),
        },
        model: ModelConfig {
            artifact_path: "data/model.json".to_string(),
        },
        adjustment: AdjustmentConfig::default(),
    }
}

/// Router wired to a stub model with a fixed raw prediction.
fn test_app(raw_prediction: f64) -> Router {
    let encoder = Arc::new(CategoryEncoder::fit([
        "Overcast",
        "Partially Cloudy",
        "Rain",
        "Rain, Overcast",
        "Rain, Partially Cloudy",
        "Sunny",
    ]));
    let prediction = PredictionService::new(
        encoder,
        Arc::new(StubModel::returning(raw_prediction)),
        Arc::new(Adjuster::default()),
    );

    create_app(AppState {
        config: Arc::new(test_config()),
        prediction,
    })
}

fn predict_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/predict")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn sample_payload() -> Value {
    json!({
        "temp": 75.0,
        "humidity": 50.0,
        "precip": 0.1,
        "precip_cover": 10.0,
        "cloud_cover": 50.0,
        "uv_index": 5.0,
        "day_of_week": 2,
        "condition": "Sunny",
        "aqi": 30.0,
        "prev_day_count": 500
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app(500.0);
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"], "loaded");
    assert_eq!(body["known_conditions"], 6);
}

#[tokio::test]
async fn test_conditions_lists_fitted_labels() {
    let app = test_app(500.0);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/conditions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let conditions: Vec<String> = serde_json::from_value(body["conditions"].clone()).unwrap();
    assert_eq!(conditions.first().map(String::as_str), Some("Overcast"));
    assert!(conditions.contains(&"Sunny".to_string()));
    assert_eq!(conditions.len(), 6);
}

#[tokio::test]
async fn test_model_info_exposes_schema() {
    let app = test_app(500.0);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/model")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["feature_count"], 17);
    assert_eq!(body["feature_names"][0], "temp");
    assert_eq!(body["feature_names"][7], "AQI");
}

#[tokio::test]
async fn test_predict_clear_wednesday() {
    let app = test_app(500.0);
    let response = app.oneshot(predict_request(&sample_payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let forecast: DailyForecast = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(forecast.raw_prediction, 500.0);
    assert_eq!(forecast.multiplier, 1.0);
    assert_eq!(forecast.fs_multiplier, 0.09);
    assert_eq!(forecast.fs_washes, 45);
    assert_eq!(forecast.expected_cars, 500);
    assert_eq!(forecast.potential_members, 300.0);
    assert_eq!(forecast.conversion_goal, 30);
    assert_eq!(forecast.staffing.opening_greeter, 15);
    assert_eq!(forecast.staffing.sales_supervisor, 0);
}

#[tokio::test]
async fn test_predict_rainy_day_applies_penalty() {
    let app = test_app(500.0);
    let mut payload = sample_payload();
    payload["condition"] = json!("Rain");
    payload["precip_cover"] = json!(50.0);

    let response = app.oneshot(predict_request(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let forecast: DailyForecast = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(forecast.multiplier, 0.4);
    assert_eq!(forecast.expected_cars, 200);
}

#[tokio::test]
async fn test_predict_unknown_condition_is_422() {
    let app = test_app(500.0);
    let mut payload = sample_payload();
    payload["condition"] = json!("Thundersnow");

    let response = app.oneshot(predict_request(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNKNOWN_CATEGORY");
    assert_eq!(body["error"]["field"], "condition");
}

#[tokio::test]
async fn test_predict_out_of_range_input_is_400() {
    let app = test_app(500.0);
    let mut payload = sample_payload();
    payload["humidity"] = json!(150.0);

    let response = app.oneshot(predict_request(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_predict_friday_uses_weekend_fs_bucket() {
    let app = test_app(500.0);
    let mut payload = sample_payload();
    payload["day_of_week"] = json!(4);

    let response = app.oneshot(predict_request(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let forecast: DailyForecast = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(forecast.fs_multiplier, 0.16);
    assert_eq!(forecast.fs_washes, 80); // trunc(500 * 0.16)
}
