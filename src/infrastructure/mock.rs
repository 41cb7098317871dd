use crate::application::ml::predictor::PricePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::pricing::feature_registry::FEATURE_NAMES;
use crate::domain::pricing::types::{CabinClass, FeatureRecord, Season};

/// Deterministic fare heuristic for running the app without an artifact.
///
/// The numbers are synthetic; they only need to move in plausible directions
/// (class, season, urgency, holidays) so the UI and tests have something
/// stable to render.
pub struct MockPricePredictor {
    schema: Vec<String>,
}

impl MockPricePredictor {
    pub fn new() -> Self {
        Self {
            schema: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for MockPricePredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl PricePredictor for MockPricePredictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let base = match record.travel_class {
            CabinClass::Economy => 4200.0,
            CabinClass::Business => 11500.0,
        };

        let season_adj = match record.season {
            Season::Winter => 650.0,
            Season::Summer => 420.0,
            Season::Monsoon => -380.0,
            Season::Autumn => 150.0,
        };

        // Fares climb as departure approaches.
        let urgency = (60.0 - record.days_left as f64) / 60.0 * 1800.0;
        let holiday = if record.is_holiday { 900.0 } else { 0.0 };
        let route = (record.airline.code() as f64) * 75.0
            + (record.source_city.code() as i16 - record.destination_city.code() as i16).abs()
                as f64
                * 160.0;

        Ok((base + season_adj + urgency + holiday + route).max(1200.0))
    }

    fn schema(&self) -> &[String] {
        &self.schema
    }

    fn name(&self) -> &str {
        "Mock Heuristic"
    }

    fn version(&self) -> &str {
        "v0"
    }
}
