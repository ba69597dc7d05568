//! Business logic services for the Wash-Day Predictor

pub mod adjuster;
pub mod encoder;
pub mod features;
pub mod history;
pub mod prediction;

pub use adjuster::Adjuster;
pub use encoder::CategoryEncoder;
pub use history::HistoricalDataset;
pub use prediction::PredictionService;
