//! Historical dataset loading and feature engineering
//!
//! The CSV is consumed once at startup to fit the category encoder. The
//! calendar features derived here mirror the preprocessing the model was
//! trained with: `year`, `dayofweek` (Monday = 0), ISO `weekofyear`, and
//! an `is_weekend` flag.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::encoder::CategoryEncoder;

/// Raw CSV row. Only `Date` and `conditions` are required; other columns
/// in the file are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: String,
    conditions: String,
}

/// One historical observation after feature engineering.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub conditions: String,
    pub year: i32,
    /// Monday = 0 through Sunday = 6
    pub dayofweek: u8,
    pub weekofyear: u32,
    pub is_weekend: bool,
}

impl DailyRecord {
    fn from_raw(raw: RawRecord) -> AppResult<Self> {
        let date = NaiveDate::parse_from_str(&raw.date, "%m/%d/%y").map_err(|e| {
            AppError::HistoricalData(format!("unparseable date '{}': {}", raw.date, e))
        })?;

        let dayofweek = date.weekday().num_days_from_monday() as u8;

        Ok(Self {
            date,
            conditions: raw.conditions,
            year: date.year(),
            dayofweek,
            weekofyear: date.iso_week().week(),
            is_weekend: dayofweek >= 5,
        })
    }
}

/// The fitted historical dataset.
#[derive(Debug, Clone)]
pub struct HistoricalDataset {
    records: Vec<DailyRecord>,
}

impl HistoricalDataset {
    /// Load and preprocess the historical CSV.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            AppError::HistoricalData(format!("cannot open {}: {}", path.display(), e))
        })?;

        let mut records = Vec::new();
        for row in reader.deserialize::<RawRecord>() {
            records.push(DailyRecord::from_raw(row?)?);
        }

        if records.is_empty() {
            return Err(AppError::HistoricalData(format!(
                "{} contains no usable rows",
                path.display()
            )));
        }

        tracing::info!(rows = records.len(), "Historical dataset loaded");
        Ok(Self { records })
    }

    /// Build a dataset from already-parsed records (used by tests).
    pub fn from_records(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Fit the category encoder from this dataset's condition labels.
    pub fn fit_encoder(&self) -> CategoryEncoder {
        CategoryEncoder::fit(self.records.iter().map(|r| r.conditions.clone()))
    }
}
