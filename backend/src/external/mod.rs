//! External collaborators

pub mod model;

pub use model::{DailyCountModel, GradientBoostedModel};
