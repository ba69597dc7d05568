//! Feature vector and daily forecast models

use serde::{Deserialize, Serialize};

use crate::models::StaffingSplit;

/// Number of features the regression model expects.
pub const FEATURE_COUNT: usize = 17;

/// Column names in the exact order the trained model was fitted with.
///
/// Any externally supplied model artifact must declare this same schema;
/// a different order or set of names is a schema mismatch.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "temp",
    "humidity",
    "precip",
    "precipcover",
    "cloudcover",
    "uvindex",
    "conditions",
    "AQI",
    "year",
    "dayofweek",
    "weekofyear",
    "is_weekend",
    "prev_day_rain",
    "prev_day_count",
    "rolling_rain_2",
    "rolling_rain_3",
    "rolling_rain_7",
];

/// Model input row matching the training schema.
///
/// Field order follows `FEATURE_COLUMNS`. Everything is `f64` because that
/// is what the regression model consumes; categorical fields carry their
/// integer encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temp: f64,
    pub humidity: f64,
    pub precip: f64,
    pub precipcover: f64,
    pub cloudcover: f64,
    pub uvindex: f64,
    /// Encoded weather condition
    pub conditions: f64,
    pub aqi: f64,
    pub year: f64,
    pub dayofweek: f64,
    pub weekofyear: f64,
    pub is_weekend: f64,
    pub prev_day_rain: f64,
    pub prev_day_count: f64,
    pub rolling_rain_2: f64,
    pub rolling_rain_3: f64,
    pub rolling_rain_7: f64,
}

impl FeatureVector {
    /// Flatten into the column order of `FEATURE_COLUMNS`.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temp,
            self.humidity,
            self.precip,
            self.precipcover,
            self.cloudcover,
            self.uvindex,
            self.conditions,
            self.aqi,
            self.year,
            self.dayofweek,
            self.weekofyear,
            self.is_weekend,
            self.prev_day_rain,
            self.prev_day_count,
            self.rolling_rain_2,
            self.rolling_rain_3,
            self.rolling_rain_7,
        ]
    }
}

/// Final prediction response with all derived business metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Expected car count for the day (retail and members), after adjustment
    pub expected_cars: i64,
    /// Raw model output before the weather adjustment
    pub raw_prediction: f64,
    /// Rain-penalty multiplier that was applied
    pub multiplier: f64,
    /// Full-service ratio used for the day-of-week bucket
    pub fs_multiplier: f64,
    /// Predicted full-service washes
    pub fs_washes: i64,
    /// Predicted potential members
    pub potential_members: f64,
    /// Membership conversion goal for the day
    pub conversion_goal: i64,
    /// Greeter shift split for the conversion goal
    pub staffing: StaffingSplit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_column_order() {
        assert_eq!(FEATURE_COLUMNS.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_COLUMNS[0], "temp");
        assert_eq!(FEATURE_COLUMNS[6], "conditions");
        assert_eq!(FEATURE_COLUMNS[7], "AQI");
        assert_eq!(FEATURE_COLUMNS[16], "rolling_rain_7");
    }

    #[test]
    fn test_as_array_follows_column_order() {
        let features = FeatureVector {
            temp: 1.0,
            humidity: 2.0,
            precip: 3.0,
            precipcover: 4.0,
            cloudcover: 5.0,
            uvindex: 6.0,
            conditions: 7.0,
            aqi: 8.0,
            year: 9.0,
            dayofweek: 10.0,
            weekofyear: 11.0,
            is_weekend: 12.0,
            prev_day_rain: 13.0,
            prev_day_count: 14.0,
            rolling_rain_2: 15.0,
            rolling_rain_3: 16.0,
            rolling_rain_7: 17.0,
        };

        let array = features.as_array();
        for (i, value) in array.iter().enumerate() {
            assert_eq!(*value, (i + 1) as f64);
        }
    }
}
