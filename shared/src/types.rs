//! Common types used across the predictor

use serde::{Deserialize, Serialize};

/// Day of the week, Monday = 0 through Sunday = 6.
///
/// The historical dataset and the trained model both use this numbering,
/// so it is kept as the wire representation as well.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DayOfWeek(pub u8);

impl DayOfWeek {
    pub const MONDAY: DayOfWeek = DayOfWeek(0);
    pub const FRIDAY: DayOfWeek = DayOfWeek(4);
    pub const SATURDAY: DayOfWeek = DayOfWeek(5);
    pub const SUNDAY: DayOfWeek = DayOfWeek(6);

    /// Saturday or Sunday, matching the training pipeline's weekend flag.
    pub fn is_weekend(&self) -> bool {
        self.0 >= 5
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "Monday",
            1 => "Tuesday",
            2 => "Wednesday",
            3 => "Thursday",
            4 => "Friday",
            5 => "Saturday",
            6 => "Sunday",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
