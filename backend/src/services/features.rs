//! Feature vector assembly
//!
//! Builds the model input row from user-entered weather and traffic data.
//! The layout must match the training schema exactly; see
//! `shared::models::FEATURE_COLUMNS`.

use shared::models::{FeatureVector, WeatherInput, FEATURE_COLUMNS};
use shared::types::DayOfWeek;

use crate::error::{AppError, AppResult};

/// Placeholder year carried over from the training pipeline.
const PLACEHOLDER_YEAR: f64 = 2024.0;

/// Placeholder week-of-year carried over from the training pipeline.
const PLACEHOLDER_WEEK_OF_YEAR: f64 = 10.0;

/// Assemble the 17-field feature vector for one prediction.
///
/// Several fields are deliberate approximations of historical aggregates:
/// the year and week-of-year are fixed literals, and the previous-day and
/// rolling rain windows are all set to the current precipitation. These
/// match the values the original pipeline fed the model and must not be
/// "corrected" independently of retraining.
pub fn assemble(input: &WeatherInput, encoded_condition: i64) -> FeatureVector {
    let is_weekend = if DayOfWeek(input.day_of_week).is_weekend() {
        1.0
    } else {
        0.0
    };

    FeatureVector {
        temp: input.temp,
        humidity: input.humidity,
        precip: input.precip,
        precipcover: input.precip_cover,
        cloudcover: input.cloud_cover,
        uvindex: input.uv_index,
        conditions: encoded_condition as f64,
        aqi: input.aqi,
        year: PLACEHOLDER_YEAR,
        dayofweek: input.day_of_week as f64,
        weekofyear: PLACEHOLDER_WEEK_OF_YEAR,
        is_weekend,
        prev_day_rain: input.precip,
        prev_day_count: input.prev_day_count as f64,
        rolling_rain_2: input.precip,
        rolling_rain_3: input.precip,
        rolling_rain_7: input.precip,
    }
}

/// Verify an externally supplied feature schema against the fixed layout.
///
/// The model artifact declares the column names it was trained with; any
/// difference in order, count, or naming is a schema mismatch.
pub fn check_schema(model_columns: &[String]) -> AppResult<()> {
    if model_columns.len() != FEATURE_COLUMNS.len() {
        return Err(AppError::SchemaMismatch(format!(
            "model expects {} features, this service produces {}",
            model_columns.len(),
            FEATURE_COLUMNS.len()
        )));
    }

    for (index, (ours, theirs)) in FEATURE_COLUMNS.iter().zip(model_columns).enumerate() {
        if *ours != theirs.as_str() {
            return Err(AppError::SchemaMismatch(format!(
                "feature {} is '{}' here but '{}' in the model artifact",
                index, ours, theirs
            )));
        }
    }

    Ok(())
}
