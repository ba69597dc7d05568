//! Rule-based prediction adjustment
//!
//! Post-processes the raw model output with hand-tuned multipliers keyed
//! on weather state and day of week, then derives the staffing metrics.
//!
//! The rain penalty is an ordered rule table folded left to right over a
//! starting multiplier of 1.0; the last matching rule wins outright
//! (later rules overwrite, they do not combine). Keeping the table as
//! data makes the precedence auditable.

use serde::{Deserialize, Serialize};
use shared::models::StaffingSplit;

use crate::config::AdjustmentConfig;

/// One row of the rain-penalty rule table.
///
/// A rule matches when the coverage gate passes (no gate means any
/// coverage) and the condition label is in the rule's label set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRule {
    /// Exclusive lower bound on precipitation coverage, if any
    pub min_precip_cover: Option<f64>,
    /// Condition labels this rule applies to
    pub conditions: Vec<String>,
    /// Multiplier written when the rule matches
    pub multiplier: f64,
}

impl AdjustmentRule {
    fn matches(&self, precip_cover: f64, condition: &str) -> bool {
        let cover_ok = match self.min_precip_cover {
            Some(threshold) => precip_cover > threshold,
            None => true,
        };
        cover_ok && self.conditions.iter().any(|c| c == condition)
    }
}

/// Adjusted prediction plus all derived staffing metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedForecast {
    /// Raw model output, untouched
    pub raw_prediction: f64,
    /// Rain-penalty multiplier that won the fold
    pub multiplier: f64,
    /// Full-service ratio for the day-of-week bucket
    pub fs_multiplier: f64,
    /// `raw_prediction * multiplier`
    pub adjusted_count: f64,
    /// Predicted potential members
    pub members: f64,
    /// Membership sign-up target (fractional, pre-rounding)
    pub conversion: f64,
    /// Full-service washes, truncated to a whole count
    pub fs_washes: i64,
    /// Conversion goal rounded to a whole number of sign-ups
    pub conversion_goal: i64,
    /// Greeter shift split for the conversion goal
    pub staffing: StaffingSplit,
}

/// Prediction adjuster holding the rule table and tuned ratios.
#[derive(Debug, Clone)]
pub struct Adjuster {
    rules: Vec<AdjustmentRule>,
    config: AdjustmentConfig,
}

impl Adjuster {
    pub fn new(config: AdjustmentConfig) -> Self {
        Self {
            rules: default_rules(),
            config,
        }
    }

    /// Replace the rule table (rules are evaluated in the given order).
    pub fn with_rules(config: AdjustmentConfig, rules: Vec<AdjustmentRule>) -> Self {
        Self { rules, config }
    }

    pub fn rules(&self) -> &[AdjustmentRule] {
        &self.rules
    }

    /// Resolve the rain-penalty multiplier for the given weather state.
    ///
    /// Left fold over the ordered rule table: start at 1.0, every matching
    /// rule overwrites the accumulator, final value wins.
    pub fn resolve_multiplier(&self, precip_cover: f64, condition: &str) -> f64 {
        self.rules
            .iter()
            .fold(1.0, |current, rule| {
                if rule.matches(precip_cover, condition) {
                    rule.multiplier
                } else {
                    current
                }
            })
    }

    /// Full-service ratio for the day.
    ///
    /// The `< 4` boundary is carried verbatim from the tuned source even
    /// though it puts Friday in the weekend bucket: Monday-Thursday get
    /// the weekday constant, Friday-Sunday the weekend constant.
    pub fn fs_multiplier(&self, day_of_week: u8) -> f64 {
        if day_of_week < 4 {
            self.config.fs_weekday_multiplier
        } else {
            self.config.fs_weekend_multiplier
        }
    }

    /// Adjust a raw model prediction and derive the staffing metrics.
    ///
    /// The rain multiplier applies once, to the raw count; members and the
    /// conversion goal derive from the adjusted count. The model can
    /// extrapolate below zero, so the adjusted count clamps at zero and
    /// every derived count stays non-negative. Pure arithmetic.
    pub fn adjust(
        &self,
        raw_prediction: f64,
        day_of_week: u8,
        precip_cover: f64,
        condition: &str,
    ) -> AdjustedForecast {
        let multiplier = self.resolve_multiplier(precip_cover, condition);
        let fs_multiplier = self.fs_multiplier(day_of_week);

        let adjusted_count = (raw_prediction * multiplier).max(0.0);
        let members = adjusted_count * self.config.member_ratio;
        let conversion = members * self.config.conversion_ratio;

        let fs_washes = (adjusted_count * fs_multiplier).trunc() as i64;
        let conversion_goal = conversion.round() as i64;
        let staffing = StaffingSplit::from_conversion_goal(conversion_goal);

        AdjustedForecast {
            raw_prediction,
            multiplier,
            fs_multiplier,
            adjusted_count,
            members,
            conversion,
            fs_washes,
            conversion_goal,
            staffing,
        }
    }
}

impl Default for Adjuster {
    fn default() -> Self {
        Self::new(AdjustmentConfig::default())
    }
}

/// The tuned rain-penalty rule table, in evaluation order.
pub fn default_rules() -> Vec<AdjustmentRule> {
    vec![
        AdjustmentRule {
            min_precip_cover: Some(40.0),
            conditions: vec!["Rain, Partially Cloudy".into(), "Rain".into()],
            multiplier: 0.4,
        },
        AdjustmentRule {
            min_precip_cover: Some(20.0),
            conditions: vec![
                "Partially Cloudy".into(),
                "Overcast".into(),
                "Rain, Overcast".into(),
            ],
            multiplier: 0.625,
        },
        AdjustmentRule {
            min_precip_cover: None,
            conditions: vec![
                "Rain".into(),
                "Rain, Overcast".into(),
                "Rain, Partially Cloudy".into(),
            ],
            multiplier: 0.4,
        },
        AdjustmentRule {
            min_precip_cover: None,
            conditions: vec!["Overcast".into(), "Partially Cloudy".into()],
            multiplier: 0.7,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_weather_keeps_multiplier_at_one() {
        let adjuster = Adjuster::default();
        assert_eq!(adjuster.resolve_multiplier(10.0, "Sunny"), 1.0);
        assert_eq!(adjuster.resolve_multiplier(90.0, "Sunny"), 1.0);
    }

    #[test]
    fn test_rain_at_high_coverage_resolves_last_match() {
        // Rules 1 and 3 both match; rule 3 is evaluated later and wins.
        let adjuster = Adjuster::default();
        assert_eq!(adjuster.resolve_multiplier(50.0, "Rain"), 0.4);
    }

    #[test]
    fn test_overcast_overwrites_earlier_rule() {
        // Rule 2 writes 0.625, rule 4 overwrites with 0.7.
        let adjuster = Adjuster::default();
        assert_eq!(adjuster.resolve_multiplier(25.0, "Overcast"), 0.7);
    }

    #[test]
    fn test_rain_overcast_takes_rain_penalty() {
        let adjuster = Adjuster::default();
        assert_eq!(adjuster.resolve_multiplier(25.0, "Rain, Overcast"), 0.4);
        assert_eq!(adjuster.resolve_multiplier(0.0, "Rain, Overcast"), 0.4);
    }

    #[test]
    fn test_partially_cloudy_any_coverage() {
        let adjuster = Adjuster::default();
        assert_eq!(adjuster.resolve_multiplier(0.0, "Partially Cloudy"), 0.7);
        assert_eq!(adjuster.resolve_multiplier(100.0, "Partially Cloudy"), 0.7);
    }

    #[test]
    fn test_coverage_gate_is_exclusive() {
        let adjuster = Adjuster::default();
        // Exactly at the threshold the gated rules do not fire, but the
        // ungated rain rule still does.
        assert_eq!(adjuster.resolve_multiplier(40.0, "Rain"), 0.4);
        assert_eq!(adjuster.resolve_multiplier(20.0, "Overcast"), 0.7);
    }

    #[test]
    fn test_fs_boundary_puts_friday_in_weekend_bucket() {
        let adjuster = Adjuster::default();
        for day in 0..4 {
            assert_eq!(adjuster.fs_multiplier(day), 0.09);
        }
        // Friday (4) lands in the weekend bucket under the literal < 4 rule.
        for day in 4..7 {
            assert_eq!(adjuster.fs_multiplier(day), 0.16);
        }
    }

    #[test]
    fn test_adjust_applies_multiplier_once() {
        let adjuster = Adjuster::default();
        let result = adjuster.adjust(500.0, 2, 50.0, "Rain");

        assert_eq!(result.multiplier, 0.4);
        assert_eq!(result.adjusted_count, 200.0);
        assert_eq!(result.members, 120.0);
        assert_eq!(result.conversion, 12.0);
        assert_eq!(result.conversion_goal, 12);
    }

    #[test]
    fn test_adjust_clear_midweek_baseline() {
        let adjuster = Adjuster::default();
        let result = adjuster.adjust(500.0, 2, 10.0, "Sunny");

        assert_eq!(result.multiplier, 1.0);
        assert_eq!(result.fs_multiplier, 0.09);
        assert_eq!(result.fs_washes, 45);
        assert_eq!(result.adjusted_count, 500.0);
    }

    #[test]
    fn test_fs_washes_truncate() {
        let adjuster = Adjuster::default();
        // 305 * 0.09 = 27.45 -> 27
        let result = adjuster.adjust(305.0, 0, 0.0, "Sunny");
        assert_eq!(result.fs_washes, 27);
    }

    #[test]
    fn test_negative_raw_prediction_clamps_derived_counts() {
        let adjuster = Adjuster::default();
        let result = adjuster.adjust(-50.0, 2, 10.0, "Sunny");

        assert_eq!(result.raw_prediction, -50.0);
        assert_eq!(result.adjusted_count, 0.0);
        assert_eq!(result.fs_washes, 0);
        assert_eq!(result.conversion_goal, 0);
        assert_eq!(result.staffing.total(), 0);
    }

    #[test]
    fn test_adjust_is_pure() {
        let adjuster = Adjuster::default();
        let first = adjuster.adjust(437.5, 6, 33.0, "Rain, Partially Cloudy");
        let second = adjuster.adjust(437.5, 6, 33.0, "Rain, Partially Cloudy");
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_rule_order_matters() {
        let rules = vec![
            AdjustmentRule {
                min_precip_cover: None,
                conditions: vec!["Rain".into()],
                multiplier: 0.5,
            },
            AdjustmentRule {
                min_precip_cover: None,
                conditions: vec!["Rain".into()],
                multiplier: 0.9,
            },
        ];
        let adjuster = Adjuster::with_rules(AdjustmentConfig::default(), rules);
        assert_eq!(adjuster.resolve_multiplier(0.0, "Rain"), 0.9);
    }
}
