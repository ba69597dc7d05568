//! Domain models for the Wash-Day Predictor

mod forecast;
mod staffing;
mod weather;

pub use forecast::*;
pub use staffing::*;
pub use weather::*;
