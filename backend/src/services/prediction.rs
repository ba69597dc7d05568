//! Prediction orchestration
//!
//! Encode the condition, assemble the feature vector, run the model, and
//! post-process the raw output into the daily forecast. Each prediction
//! is a pure function of the request inputs plus the immutable state
//! fitted at startup.

use std::sync::Arc;

use shared::models::{DailyForecast, WeatherInput};
use shared::types::DayOfWeek;
use validator::Validate;

use crate::error::AppResult;
use crate::external::model::DailyCountModel;
use crate::services::adjuster::Adjuster;
use crate::services::encoder::CategoryEncoder;
use crate::services::features;

/// Prediction service holding the process-wide immutable collaborators.
#[derive(Clone)]
pub struct PredictionService {
    encoder: Arc<CategoryEncoder>,
    model: Arc<dyn DailyCountModel>,
    adjuster: Arc<Adjuster>,
}

impl PredictionService {
    pub fn new(
        encoder: Arc<CategoryEncoder>,
        model: Arc<dyn DailyCountModel>,
        adjuster: Arc<Adjuster>,
    ) -> Self {
        Self {
            encoder,
            model,
            adjuster,
        }
    }

    /// Known condition labels, for restricting the input surface.
    pub fn known_conditions(&self) -> &[String] {
        self.encoder.classes()
    }

    /// Feature names the loaded model expects.
    pub fn model_features(&self) -> &[String] {
        self.model.feature_names()
    }

    /// Run one prediction end to end.
    pub fn predict(&self, input: &WeatherInput) -> AppResult<DailyForecast> {
        input.validate()?;

        let encoded = self.encoder.encode(&input.condition)?;
        let features = features::assemble(input, encoded);
        let raw_prediction = self.model.predict(&features)?;

        let adjusted = self.adjuster.adjust(
            raw_prediction,
            input.day_of_week,
            input.precip_cover,
            &input.condition,
        );

        tracing::debug!(
            raw = raw_prediction,
            multiplier = adjusted.multiplier,
            adjusted = adjusted.adjusted_count,
            condition = %input.condition,
            day = %DayOfWeek(input.day_of_week),
            "Prediction computed"
        );

        Ok(DailyForecast {
            expected_cars: adjusted.adjusted_count.trunc() as i64,
            raw_prediction: adjusted.raw_prediction,
            multiplier: adjusted.multiplier,
            fs_multiplier: adjusted.fs_multiplier,
            fs_washes: adjusted.fs_washes,
            potential_members: adjusted.members,
            conversion_goal: adjusted.conversion_goal,
            staffing: adjusted.staffing,
        })
    }
}
