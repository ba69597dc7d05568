//! HTTP handlers for prediction endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use shared::models::{DailyForecast, WeatherInput};

use crate::error::AppResult;
use crate::AppState;

/// Run one prediction from user-entered weather and traffic inputs
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<WeatherInput>,
) -> AppResult<Json<DailyForecast>> {
    let forecast = state.prediction.predict(&input)?;
    Ok(Json(forecast))
}

/// Known weather condition labels
#[derive(Debug, Serialize)]
pub struct ConditionsResponse {
    pub conditions: Vec<String>,
}

/// List the condition labels the encoder was fitted with.
///
/// Input surfaces should restrict their condition choice to this list;
/// anything else is rejected at predict time.
pub async fn list_conditions(State(state): State<AppState>) -> Json<ConditionsResponse> {
    Json(ConditionsResponse {
        conditions: state.prediction.known_conditions().to_vec(),
    })
}

/// Loaded model metadata
#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub feature_names: Vec<String>,
    pub feature_count: usize,
}

/// Describe the feature schema the loaded model expects.
pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    let feature_names = state.prediction.model_features().to_vec();
    let feature_count = feature_names.len();

    Json(ModelInfoResponse {
        feature_names,
        feature_count,
    })
}
