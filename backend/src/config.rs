//! Configuration management for the Wash-Day Predictor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WASHDAY_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Historical dataset configuration
    pub data: DataConfig,

    /// Regression model configuration
    pub model: ModelConfig,

    /// Post-processing adjustment configuration
    pub adjustment: AdjustmentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path to the historical dataset CSV used to fit the category encoder
    pub history_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the serialized gradient-boosting model artifact
    pub artifact_path: String,
}

/// Hand-tuned constants for the prediction adjuster.
///
/// The rule table itself lives in `services::adjuster`; these are the
/// scalar ratios that operators occasionally retune.
#[derive(Debug, Deserialize, Clone)]
pub struct AdjustmentConfig {
    /// Full-service ratio for Monday-Thursday (day_of_week < 4)
    pub fs_weekday_multiplier: f64,

    /// Full-service ratio for Friday-Sunday
    pub fs_weekend_multiplier: f64,

    /// Share of the adjusted count expected to be members
    pub member_ratio: f64,

    /// Share of predicted members targeted for new sign-ups
    pub conversion_ratio: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WASHDAY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("data.history_path", "data/history.csv")?
            .set_default("model.artifact_path", "data/model.json")?
            .set_default("adjustment.fs_weekday_multiplier", 0.09)?
            .set_default("adjustment.fs_weekend_multiplier", 0.16)?
            .set_default("adjustment.member_ratio", 0.60)?
            .set_default("adjustment.conversion_ratio", 0.10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WASHDAY_ prefix)
            .add_source(
                Environment::with_prefix("WASHDAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            fs_weekday_multiplier: 0.09,
            fs_weekend_multiplier: 0.16,
            member_ratio: 0.60,
            conversion_ratio: 0.10,
        }
    }
}
