//! Integration tests for model artifact loading from disk.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use immoval_core::ImmovalError;
use immoval_model::PriceModel;

fn artifact_json() -> &'static str {
    r#"{
        "version": 1,
        "bias": 12.1,
        "trees": [
            {
                "nodes": [
                    { "kind": "numeric_split", "feature": "Living_Area", "threshold": 90.0, "left": 1, "right": 2 },
                    { "kind": "leaf", "value": -0.05 },
                    { "kind": "leaf", "value": 0.07 }
                ]
            },
            {
                "nodes": [
                    { "kind": "category_split", "feature": "Province", "categories": ["Brussels-Capital"], "left": 1, "right": 2 },
                    { "kind": "leaf", "value": 0.0 },
                    { "kind": "leaf", "value": 0.12 }
                ]
            }
        ],
        "metadata": { "trained_at": "2024-11-02T09:30:00Z", "mae": 48726.73 }
    }"#
}

#[test]
fn test_load_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(artifact_json().as_bytes()).unwrap();

    let model = PriceModel::load(file.path()).unwrap();
    assert_eq!(model.tree_count(), 2);
    assert_eq!(model.mae(), 48726.73);
    assert_eq!(model.trained_at().to_rfc3339(), "2024-11-02T09:30:00+00:00");
}

#[test]
fn test_absent_artifact_is_model_load_error() {
    let err = PriceModel::load(Path::new("/nonexistent/price_model.json")).unwrap_err();
    match err {
        ImmovalError::ModelLoad { path, .. } => {
            assert_eq!(path, Path::new("/nonexistent/price_model.json"));
        }
        other => panic!("expected ModelLoad, got {:?}", other),
    }
}

#[test]
fn test_corrupt_artifact_is_model_load_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    let err = PriceModel::load(file.path()).unwrap_err();
    assert!(matches!(err, ImmovalError::ModelLoad { .. }));
}

#[test]
fn test_structurally_invalid_artifact_is_model_load_error() {
    // Valid JSON, but the split's child index escapes the node arena
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "version": 1,
            "bias": 0.0,
            "trees": [
                {
                    "nodes": [
                        { "kind": "numeric_split", "feature": "Living_Area", "threshold": 1.0, "left": 1, "right": 9 },
                        { "kind": "leaf", "value": 0.0 }
                    ]
                }
            ],
            "metadata": { "trained_at": "2024-11-02T09:30:00Z", "mae": 1.0 }
        }"#,
    )
    .unwrap();

    let err = PriceModel::load(file.path()).unwrap_err();
    match err {
        ImmovalError::ModelLoad { reason, .. } => assert!(reason.contains("out of range")),
        other => panic!("expected ModelLoad, got {:?}", other),
    }
}
