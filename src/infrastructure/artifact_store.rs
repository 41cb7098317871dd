use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Envelope version understood by this build. Bumped whenever the feature
/// registry changes, so stale artifacts are rejected at load instead of
/// producing silently wrong prices.
pub const ARTIFACT_SCHEMA_VERSION: u32 = 1;

/// On-disk model envelope: the serialized forest plus the ordered input
/// schema it was trained against.
#[derive(Debug, Serialize, Deserialize)]
pub struct PricingArtifact {
    pub schema_version: u32,
    pub feature_names: Vec<String>,
    pub forest: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

/// Reads and deserializes the artifact. Any failure here maps to
/// `ModelUnavailable`; callers treat that as fatal at startup.
pub fn read_artifact(path: &Path) -> Result<PricingArtifact, PredictionError> {
    let unavailable = |reason: String| PredictionError::ModelUnavailable {
        path: path.display().to_string(),
        reason,
    };

    if !path.exists() {
        return Err(unavailable("file not found".to_string()));
    }

    let file = File::open(path).map_err(|e| unavailable(format!("failed to open: {}", e)))?;
    let artifact: PricingArtifact = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| unavailable(format!("failed to deserialize: {}", e)))?;

    if artifact.schema_version != ARTIFACT_SCHEMA_VERSION {
        return Err(unavailable(format!(
            "schema version {} not supported (expected {})",
            artifact.schema_version, ARTIFACT_SCHEMA_VERSION
        )));
    }

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("farecast_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_artifact_is_model_unavailable() {
        let err = read_artifact(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, PredictionError::ModelUnavailable { .. }));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_corrupt_artifact_is_model_unavailable() {
        let path = scratch_path("corrupt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"not json at all {{{").unwrap();

        let err = read_artifact(&path).unwrap_err();
        assert!(matches!(err, PredictionError::ModelUnavailable { .. }));
        assert!(err.to_string().contains("failed to deserialize"));

        let _ = std::fs::remove_file(&path);
    }
}
