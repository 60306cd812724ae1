//! Model loading and single-row scoring.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use immoval_core::error::{ImmovalError, Result};
use immoval_core::models::{FeatureValue, ModelInputVector};

use crate::artifact::{ModelArtifact, Node};

/// A single input row partitioned for scoring.
///
/// The categorical/numeric split is decided purely by membership in the
/// supplied field-name list, never by inspecting the runtime value. A field
/// the list names categorical will refuse to answer a numeric test, and the
/// split's default-direction rule takes over.
pub struct ScoringPool<'a> {
    input: &'a ModelInputVector,
    categorical: HashSet<&'a str>,
}

impl<'a> ScoringPool<'a> {
    pub fn new(input: &'a ModelInputVector, categorical_fields: &'a [&'a str]) -> Self {
        Self {
            input,
            categorical: categorical_fields.iter().copied().collect(),
        }
    }

    fn numeric(&self, name: &str) -> Option<f64> {
        if self.categorical.contains(name) {
            return None;
        }
        match self.input.feature(name)? {
            FeatureValue::Numeric(value) => Some(value),
            FeatureValue::Categorical(_) => None,
        }
    }

    fn category(&self, name: &str) -> Option<&str> {
        if !self.categorical.contains(name) {
            return None;
        }
        match self.input.feature(name)? {
            FeatureValue::Categorical(value) => Some(value),
            FeatureValue::Numeric(_) => None,
        }
    }
}

/// The loaded price model. Immutable after load; scoring is pure.
#[derive(Debug, Clone)]
pub struct PriceModel {
    artifact: ModelArtifact,
}

impl PriceModel {
    /// Deserialize and validate the model artifact. Absent, corrupt, or
    /// structurally invalid artifacts are a `ModelLoad` error, fatal to
    /// startup.
    pub fn load(path: &Path) -> Result<Self> {
        let model_load = |reason: String| ImmovalError::ModelLoad {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| model_load(e.to_string()))?;

        let artifact: ModelArtifact =
            serde_json::from_str(&content).map_err(|e| model_load(e.to_string()))?;

        artifact.validate().map_err(model_load)?;

        tracing::info!(
            path = %path.display(),
            trees = artifact.trees.len(),
            trained_at = %artifact.metadata.trained_at,
            "Loaded price model"
        );

        Ok(Self { artifact })
    }

    /// Build a predictor from an in-memory artifact. Test and fixture use.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate().map_err(|reason| ImmovalError::ModelLoad {
            path: "<in-memory>".into(),
            reason,
        })?;
        Ok(Self { artifact })
    }

    /// Calibrated MAE recorded by the training run, in EUR.
    pub fn mae(&self) -> f64 {
        self.artifact.metadata.mae
    }

    pub fn trained_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.artifact.metadata.trained_at
    }

    pub fn tree_count(&self) -> usize {
        self.artifact.trees.len()
    }

    /// Score one assembled input row and return the price estimate in EUR.
    ///
    /// The model was trained on a log-price target: the returned value is
    /// `exp(raw score)`, and the inverse transform lives here and nowhere
    /// else. Pure and idempotent; repeated calls return identical output.
    pub fn predict(&self, input: &ModelInputVector, categorical_fields: &[&str]) -> f64 {
        self.raw_score(input, categorical_fields).exp()
    }

    /// The untransformed log-space score: bias plus the leaf value of every
    /// tree in the forest.
    pub fn raw_score(&self, input: &ModelInputVector, categorical_fields: &[&str]) -> f64 {
        let pool = ScoringPool::new(input, categorical_fields);

        self.artifact.bias
            + self.artifact.trees.iter().map(|tree| walk(&tree.nodes, &pool)).sum::<f64>()
    }
}

/// Walk one tree from the root to a leaf. Validation guarantees children
/// descend, so this terminates.
fn walk(nodes: &[Node], pool: &ScoringPool<'_>) -> f64 {
    let mut idx = 0;
    loop {
        match &nodes[idx] {
            Node::Leaf { value } => return *value,
            Node::NumericSplit { feature, threshold, left, right } => {
                idx = match pool.numeric(feature) {
                    Some(value) if value > *threshold => *right,
                    _ => *left,
                };
            }
            Node::CategorySplit { feature, categories, left, right } => {
                idx = match pool.category(feature) {
                    Some(value) if categories.iter().any(|c| c == value) => *right,
                    _ => *left,
                };
            }
        }
    }
}
