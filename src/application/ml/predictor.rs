use crate::domain::errors::PredictionError;
use crate::domain::pricing::types::FeatureRecord;

/// Interface for pricing models.
pub trait PricePredictor: Send + Sync {
    /// Predict the ticket price (₹) for one assembled record.
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError>;

    /// Ordered input schema the model expects.
    fn schema(&self) -> &[String];

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
