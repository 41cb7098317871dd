use crate::application::assembler::assemble_record;
use crate::application::ml::predictor::PricePredictor;
use crate::config::DefaultFeatureValues;
use crate::domain::errors::PredictionError;
use crate::domain::pricing::comparison::PriceComparison;
use crate::domain::pricing::feature_registry;
use crate::domain::pricing::types::{FeatureRecord, TripInputs};
use std::sync::Arc;
use tracing::info;

/// Everything the results panel needs for one request.
#[derive(Debug, Clone)]
pub struct PriceQuote {
    pub record: FeatureRecord,
    pub comparison: PriceComparison,
}

/// Orchestrates one request: assemble, check schema, run inference.
///
/// Stateless between requests; the predictor is process-wide, read-only.
pub struct PriceEstimator {
    predictor: Arc<dyn PricePredictor>,
    defaults: DefaultFeatureValues,
}

impl PriceEstimator {
    pub fn new(predictor: Arc<dyn PricePredictor>, defaults: DefaultFeatureValues) -> Self {
        Self {
            predictor,
            defaults,
        }
    }

    pub fn quote(&self, inputs: &TripInputs) -> Result<PriceQuote, PredictionError> {
        let record = assemble_record(inputs, &self.defaults);

        feature_registry::check_schema(self.predictor.schema())?;

        let predicted = self.predictor.predict(&record)?;
        info!(
            predicted,
            competitor = inputs.competitor_avg_price,
            model = self.predictor.name(),
            "prediction served"
        );

        Ok(PriceQuote {
            record,
            comparison: PriceComparison::new(predicted, inputs.competitor_avg_price),
        })
    }
}
