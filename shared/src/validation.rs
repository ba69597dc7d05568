//! Validation utilities for the Wash-Day Predictor
//!
//! Range checks for the declared input surface. The `validator` derive on
//! `WeatherInput` covers the HTTP path; these helpers exist for callers
//! constructing inputs programmatically.

/// Validate a percentage field (0-100)
pub fn validate_percent(value: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate a day-of-week index (Monday = 0 through Sunday = 6)
pub fn validate_day_of_week(day: u8) -> Result<(), &'static str> {
    if day > 6 {
        return Err("Day of week must be between 0 (Monday) and 6 (Sunday)");
    }
    Ok(())
}

/// Validate a UV index reading (0-12)
pub fn validate_uv_index(uv: f64) -> Result<(), &'static str> {
    if !(0.0..=12.0).contains(&uv) {
        return Err("UV index must be between 0 and 12");
    }
    Ok(())
}

/// Validate precipitation in inches (non-negative, sane upper bound)
pub fn validate_precip_inches(precip: f64) -> Result<(), &'static str> {
    if !(0.0..=20.0).contains(&precip) {
        return Err("Precipitation must be between 0 and 20 inches");
    }
    Ok(())
}

/// Validate a previous-day car count (matches the dashboard's 0-1000 widget)
pub fn validate_car_count(count: u32) -> Result<(), &'static str> {
    if count > 1000 {
        return Err("Car count must be at most 1000");
    }
    Ok(())
}
