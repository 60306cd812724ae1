//! On-disk schema of the pretrained price model.
//!
//! The artifact is a JSON-serialized gradient-boosted ensemble exported from
//! the offline training pipeline: a bias term plus a forest of regression
//! trees whose split nodes test either a numeric threshold or membership in
//! a category set. Node layout invariants:
//!
//! - Node 0 is each tree's root.
//! - Child indices always point at a strictly greater node index, so a
//!   well-formed tree is acyclic by construction.
//! - A split whose feature is missing from the scoring pool, or whose
//!   representation does not match the pool's (numeric test against a
//!   categorical field or vice versa), routes to the left child.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artifact schema version this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// The full deserialized model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: u32,
    /// Raw-score offset added before the tree sum
    pub bias: f64,
    pub trees: Vec<Tree>,
    pub metadata: ModelMetadata,
}

/// Offline training metadata carried alongside the forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub trained_at: DateTime<Utc>,
    /// Mean absolute error on the held-out split, in EUR
    pub mae: f64,
}

/// One regression tree, stored as a flat node arena rooted at index 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Numeric test: value > threshold routes right, otherwise left.
    NumericSplit {
        feature: String,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Category test: membership in `categories` routes right, otherwise left.
    CategorySplit {
        feature: String,
        categories: Vec<String>,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl ModelArtifact {
    /// Structural validation beyond what serde enforces. Returns the first
    /// problem found, phrased for the `ModelLoad` error reason.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.version != SUPPORTED_VERSION {
            return Err(format!(
                "unsupported artifact version {} (supported: {})",
                self.version, SUPPORTED_VERSION
            ));
        }

        if !self.bias.is_finite() {
            return Err("bias is not finite".to_string());
        }

        if self.trees.is_empty() {
            return Err("artifact contains no trees".to_string());
        }

        for (tree_idx, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(format!("tree {} has no nodes", tree_idx));
            }

            for (node_idx, node) in tree.nodes.iter().enumerate() {
                match node {
                    Node::NumericSplit { left, right, .. }
                    | Node::CategorySplit { left, right, .. } => {
                        for child in [left, right] {
                            if *child >= tree.nodes.len() {
                                return Err(format!(
                                    "tree {} node {} child {} out of range",
                                    tree_idx, node_idx, child
                                ));
                            }
                            if *child <= node_idx {
                                return Err(format!(
                                    "tree {} node {} child {} does not descend",
                                    tree_idx, node_idx, child
                                ));
                            }
                        }
                    }
                    Node::Leaf { value } => {
                        if !value.is_finite() {
                            return Err(format!(
                                "tree {} node {} leaf value is not finite",
                                tree_idx, node_idx
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_only_artifact() -> ModelArtifact {
        ModelArtifact {
            version: SUPPORTED_VERSION,
            bias: 12.0,
            trees: vec![Tree { nodes: vec![Node::Leaf { value: 0.25 }] }],
            metadata: ModelMetadata { trained_at: Utc::now(), mae: 48_726.73 },
        }
    }

    #[test]
    fn test_valid_artifact_passes() {
        assert!(leaf_only_artifact().validate().is_ok());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut artifact = leaf_only_artifact();
        artifact.version = 2;
        assert!(artifact.validate().unwrap_err().contains("version"));
    }

    #[test]
    fn test_empty_forest_rejected() {
        let mut artifact = leaf_only_artifact();
        artifact.trees.clear();
        assert!(artifact.validate().unwrap_err().contains("no trees"));
    }

    #[test]
    fn test_non_descending_child_rejected() {
        let artifact = ModelArtifact {
            trees: vec![Tree {
                nodes: vec![
                    Node::NumericSplit {
                        feature: "Living_Area".to_string(),
                        threshold: 90.0,
                        left: 0, // points back at itself
                        right: 1,
                    },
                    Node::Leaf { value: 0.1 },
                ],
            }],
            ..leaf_only_artifact()
        };
        assert!(artifact.validate().unwrap_err().contains("descend"));
    }

    #[test]
    fn test_out_of_range_child_rejected() {
        let artifact = ModelArtifact {
            trees: vec![Tree {
                nodes: vec![
                    Node::CategorySplit {
                        feature: "Province".to_string(),
                        categories: vec!["Antwerp".to_string()],
                        left: 1,
                        right: 7,
                    },
                    Node::Leaf { value: 0.1 },
                ],
            }],
            ..leaf_only_artifact()
        };
        assert!(artifact.validate().unwrap_err().contains("out of range"));
    }

    #[test]
    fn test_artifact_json_shape() {
        let artifact = ModelArtifact {
            trees: vec![Tree {
                nodes: vec![
                    Node::NumericSplit {
                        feature: "Living_Area".to_string(),
                        threshold: 90.0,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf { value: -0.05 },
                    Node::Leaf { value: 0.07 },
                ],
            }],
            ..leaf_only_artifact()
        };

        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["trees"][0]["nodes"][0]["kind"], "numeric_split");
        assert_eq!(json["trees"][0]["nodes"][1]["kind"], "leaf");

        let back: ModelArtifact = serde_json::from_value(json).unwrap();
        assert!(back.validate().is_ok());
        assert_eq!(back.trees[0].nodes.len(), 3);
    }
}
