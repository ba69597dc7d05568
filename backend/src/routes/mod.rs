//! Route definitions for the Wash-Day Predictor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Prediction
        .route("/predict", post(handlers::predict))
        // Valid condition labels for the input surface
        .route("/conditions", get(handlers::list_conditions))
        // Loaded model metadata
        .route("/model", get(handlers::model_info))
}
