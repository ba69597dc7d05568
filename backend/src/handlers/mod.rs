//! HTTP handlers for the Wash-Day Predictor

pub mod forecast;
pub mod health;

pub use forecast::*;
pub use health::*;
