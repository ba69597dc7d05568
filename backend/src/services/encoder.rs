//! Category encoder for weather condition labels
//!
//! Fitted once at startup from the historical dataset and held immutably
//! for the process lifetime. Codes are assigned by the sort order of the
//! distinct labels, so they are stable for a given dataset snapshot.

use std::collections::{BTreeSet, HashMap};

use crate::error::{AppError, AppResult};

/// Immutable label-to-code mapping for categorical weather conditions.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    classes: Vec<String>,
    codes: HashMap<String, i64>,
}

impl CategoryEncoder {
    /// Fit the encoder from raw historical labels.
    ///
    /// Duplicates are collapsed; distinct labels are sorted and numbered
    /// from zero in sort order.
    pub fn fit<I>(labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let distinct: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        let classes: Vec<String> = distinct.into_iter().collect();
        let codes = classes
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code as i64))
            .collect();

        Self { classes, codes }
    }

    /// Encode a label into its integer code.
    ///
    /// Labels absent from the fitting set are an error condition; the
    /// input surface is expected to restrict choices to `classes()`.
    pub fn encode(&self, label: &str) -> AppResult<i64> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| AppError::UnknownCategory(label.to_string()))
    }

    /// Ordered list of known labels, for presenting valid choices.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}
