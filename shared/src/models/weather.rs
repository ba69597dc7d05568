//! Weather and traffic input models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User-entered weather and traffic inputs for a single prediction.
///
/// Ranges mirror the original dashboard's input widgets. The weather
/// condition must be one of the labels the category encoder was fitted
/// with; that check happens at encode time, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WeatherInput {
    /// Temperature in °F
    #[validate(range(min = -30.0, max = 130.0))]
    pub temp: f64,

    /// Relative humidity (%)
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,

    /// Precipitation (inches)
    #[validate(range(min = 0.0, max = 20.0))]
    pub precip: f64,

    /// Chance of rain (%)
    #[validate(range(min = 0.0, max = 100.0))]
    pub precip_cover: f64,

    /// Cloud cover (%)
    #[validate(range(min = 0.0, max = 100.0))]
    pub cloud_cover: f64,

    /// UV index
    #[validate(range(min = 0.0, max = 12.0))]
    pub uv_index: f64,

    /// Day of the week, Monday = 0 through Sunday = 6
    #[validate(range(min = 0, max = 6))]
    pub day_of_week: u8,

    /// Weather condition label from the fitted label set
    #[validate(length(min = 1))]
    pub condition: String,

    /// Air Quality Index
    #[validate(range(min = 0.0, max = 100.0))]
    pub aqi: f64,

    /// Previous day's car count (can be approximate)
    #[validate(range(min = 0, max = 1000))]
    pub prev_day_count: u32,
}
