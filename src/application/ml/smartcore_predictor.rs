use super::predictor::PricePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::pricing::feature_registry;
use crate::domain::pricing::types::FeatureRecord;
use crate::infrastructure::artifact_store;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::path::PathBuf;
use tracing::info;

/// Random-forest price model deserialized from a local artifact.
///
/// Loading happens once at startup; a missing or corrupt artifact is fatal
/// and the process refuses to serve any request.
#[derive(Debug)]
pub struct SmartCorePredictor {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
    feature_names: Vec<String>,
    version: String,
}

impl SmartCorePredictor {
    pub fn load(model_path: PathBuf) -> Result<Self, PredictionError> {
        let artifact = artifact_store::read_artifact(&model_path)?;

        info!(
            path = %model_path.display(),
            features = artifact.feature_names.len(),
            "Successfully loaded pricing model"
        );

        Ok(Self {
            model: artifact.forest,
            feature_names: artifact.feature_names,
            version: format!("schema v{}", artifact.schema_version),
        })
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        feature_registry::check_schema(&self.feature_names)?;

        let input_vec = feature_registry::record_to_f64_vector(record);
        let input_matrix = DenseMatrix::from_2d_vec(&vec![input_vec]).map_err(|e| {
            PredictionError::InferenceError {
                reason: format!("matrix creation failed: {}", e),
            }
        })?;

        let predictions =
            self.model
                .predict(&input_matrix)
                .map_err(|e| PredictionError::InferenceError {
                    reason: format!("forest prediction failed: {}", e),
                })?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::InferenceError {
                reason: "no prediction returned".to_string(),
            })
    }

    fn schema(&self) -> &[String] {
        &self.feature_names
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        &self.version
    }
}
