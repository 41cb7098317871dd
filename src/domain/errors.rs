use thiserror::Error;

/// Errors raised along the predict path.
///
/// `ModelUnavailable` is fatal at startup; the other two abort the single
/// request that triggered them and leave the process serviceable.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("model artifact unavailable at {path}: {reason}")]
    ModelUnavailable { path: String, reason: String },

    #[error("assembled record does not match model schema: {reason}")]
    SchemaMismatch { reason: String },

    #[error("inference failed: {reason}")]
    InferenceError { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_unavailable_formatting() {
        let err = PredictionError::ModelUnavailable {
            path: "models/dynamic_pricing_small.json".to_string(),
            reason: "file not found".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("models/dynamic_pricing_small.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_schema_mismatch_formatting() {
        let err = PredictionError::SchemaMismatch {
            reason: "missing fields: [\"season\"]".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("does not match model schema"));
        assert!(msg.contains("season"));
    }
}
