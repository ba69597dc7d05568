//! Externally supplied regression model
//!
//! The model is a black box to this service: a pure function from the
//! 17-field feature vector to a scalar car count, loaded once at startup.
//! Training happens elsewhere; the artifact arrives as a JSON-serialized
//! gradient-boosted tree ensemble.

use std::path::Path;

use serde::Deserialize;
use shared::models::FeatureVector;

use crate::error::{AppError, AppResult};
use crate::services::features;

/// Seam for the regression model, so tests can stub the inference step.
pub trait DailyCountModel: Send + Sync {
    /// Predict the raw car count for one feature vector.
    fn predict(&self, features: &FeatureVector) -> AppResult<f64>;

    /// Feature names the model was trained with, in input order.
    fn feature_names(&self) -> &[String];
}

/// Gradient-boosted tree ensemble loaded from a JSON artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct GradientBoostedModel {
    feature_names: Vec<String>,
    base_score: f64,
    trees: Vec<DecisionTree>,
}

#[derive(Debug, Clone, Deserialize)]
struct DecisionTree {
    nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl DecisionTree {
    /// Walk from the root to a leaf. Feature values below the threshold
    /// go left, everything else goes right. An acyclic walk visits each
    /// node at most once, so more steps than nodes means a cycle in the
    /// artifact.
    fn evaluate(&self, row: &[f64]) -> AppResult<f64> {
        let mut index = 0;
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = row.get(*feature).ok_or_else(|| {
                        AppError::ModelArtifact(format!(
                            "split references feature {} outside the input row",
                            feature
                        ))
                    })?;
                    index = if *value < *threshold { *left } else { *right };
                }
                None => {
                    return Err(AppError::ModelArtifact(format!(
                        "tree walk reached missing node {}",
                        index
                    )))
                }
            }
        }

        Err(AppError::ModelArtifact(format!(
            "tree walk revisited a node after {} steps, artifact has a cycle",
            self.nodes.len() + 1
        )))
    }
}

impl GradientBoostedModel {
    /// Load the artifact and validate its feature schema against the
    /// fixed layout this service produces.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::ModelArtifact(format!("cannot read {}: {}", path.display(), e))
        })?;

        let model: GradientBoostedModel = serde_json::from_str(&raw).map_err(|e| {
            AppError::ModelArtifact(format!("cannot parse {}: {}", path.display(), e))
        })?;

        features::check_schema(&model.feature_names)?;

        if model.trees.is_empty() {
            return Err(AppError::ModelArtifact(
                "artifact contains no trees".to_string(),
            ));
        }

        tracing::info!(
            trees = model.trees.len(),
            features = model.feature_names.len(),
            "Model artifact loaded"
        );
        Ok(model)
    }

    /// Parse an artifact from raw JSON (used by tests).
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let model: GradientBoostedModel = serde_json::from_str(raw)
            .map_err(|e| AppError::ModelArtifact(format!("cannot parse artifact: {}", e)))?;
        features::check_schema(&model.feature_names)?;
        Ok(model)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl DailyCountModel for GradientBoostedModel {
    fn predict(&self, features: &FeatureVector) -> AppResult<f64> {
        let row = features.as_array();
        let mut score = self.base_score;
        for tree in &self.trees {
            score += tree.evaluate(&row)?;
        }
        Ok(score)
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

/// Fixed-output model for tests.
pub struct StubModel {
    prediction: f64,
    feature_names: Vec<String>,
}

impl StubModel {
    pub fn returning(prediction: f64) -> Self {
        Self {
            prediction,
            feature_names: shared::models::FEATURE_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl DailyCountModel for StubModel {
    fn predict(&self, _features: &FeatureVector) -> AppResult<f64> {
        Ok(self.prediction)
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}
