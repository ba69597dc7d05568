//! Error handling for the Wash-Day Predictor
//!
//! Provides consistent JSON error responses with stable error codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("Unknown weather condition: {0}")]
    UnknownCategory(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // Model errors
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Model artifact error: {0}")]
    ModelArtifact(String),

    // Data errors
    #[error("Historical data error: {0}")]
    HistoricalData(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::HistoricalData(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let detail = errors
                    .first()
                    .and_then(|err| err.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "out of range".to_string());
                format!("{}: {}", field, detail)
            })
            .collect::<Vec<_>>()
            .join("; ");
        AppError::ValidationError(message)
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::UnknownCategory(label) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "UNKNOWN_CATEGORY".to_string(),
                    message: format!(
                        "Weather condition '{}' was not present in the historical dataset",
                        label
                    ),
                    field: Some("condition".to_string()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_INPUT".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::SchemaMismatch(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "SCHEMA_MISMATCH".to_string(),
                    message: format!("Feature schema mismatch: {}", msg),
                    field: None,
                },
            ),
            AppError::ModelArtifact(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "MODEL_ARTIFACT_ERROR".to_string(),
                    message: format!("Model artifact error: {}", msg),
                    field: None,
                },
            ),
            AppError::HistoricalData(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "HISTORICAL_DATA_ERROR".to_string(),
                    message: format!("Historical data error: {}", msg),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
