use farecast::application::estimator::PriceEstimator;
use farecast::application::ml::predictor::PricePredictor;
use farecast::config::DefaultFeatureValues;
use farecast::domain::errors::PredictionError;
use farecast::domain::pricing::comparison::PriceVerdict;
use farecast::domain::pricing::feature_registry::FEATURE_NAMES;
use farecast::domain::pricing::types::{
    Airline, CabinClass, City, FeatureRecord, Season, TripInputs, COMPETITOR_PRICE_MIN,
};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Stub model that records every record it is asked to price.
struct RecordingPredictor {
    price: f64,
    schema: Vec<String>,
    calls: AtomicUsize,
    last_record: Mutex<Option<FeatureRecord>>,
}

impl RecordingPredictor {
    fn new(price: f64) -> Self {
        Self {
            price,
            schema: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            calls: AtomicUsize::new(0),
            last_record: Mutex::new(None),
        }
    }
}

impl PricePredictor for RecordingPredictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_record.lock().unwrap() = Some(record.clone());
        Ok(self.price)
    }

    fn schema(&self) -> &[String] {
        &self.schema
    }

    fn name(&self) -> &str {
        "Recording"
    }

    fn version(&self) -> &str {
        "test"
    }
}

fn scenario_one_inputs() -> TripInputs {
    TripInputs {
        airline: Airline::Indigo,
        source_city: City::Delhi,
        destination_city: City::Mumbai,
        travel_class: CabinClass::Economy,
        season: Season::Winter,
        days_left: 30,
        is_holiday: false,
        competitor_avg_price: 5000.0,
    }
}

#[test]
fn test_predict_called_exactly_once_with_full_record() {
    let predictor = Arc::new(RecordingPredictor::new(6200.0));
    let estimator = PriceEstimator::new(predictor.clone(), DefaultFeatureValues::default());

    let quote = estimator.quote(&scenario_one_inputs()).unwrap();

    assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);

    let seen = predictor.last_record.lock().unwrap().clone().unwrap();
    assert_eq!(seen, quote.record);

    let named = seen.to_named_values();
    assert_eq!(named.len(), 19);

    // The eight user fields...
    assert_eq!(seen.airline, Airline::Indigo);
    assert_eq!(seen.source_city, City::Delhi);
    assert_eq!(seen.destination_city, City::Mumbai);
    assert_eq!(seen.travel_class, CabinClass::Economy);
    assert_eq!(seen.season, Season::Winter);
    assert_eq!(seen.days_left, 30);
    assert!(!seen.is_holiday);
    assert_eq!(seen.competitor_avg_price, 5000.0);

    // ...plus the eleven fixed defaults.
    assert_eq!(seen.stops, 1);
    assert_eq!(seen.weekday, 2);
    assert!(!seen.is_weekend);
    assert_eq!(seen.load_factor, 0.85);
    assert_eq!(seen.duration_minutes, 120);
    assert_eq!(seen.demand_score, 0.5);
    assert_eq!(seen.total_revenue, 100000.0);
    assert!(!seen.last_minute_booking);
}

#[test]
fn test_high_prediction_against_lower_bound_competitor() {
    let estimator = PriceEstimator::new(
        Arc::new(RecordingPredictor::new(8000.0)),
        DefaultFeatureValues::default(),
    );

    let inputs = TripInputs {
        competitor_avg_price: COMPETITOR_PRICE_MIN,
        ..scenario_one_inputs()
    };
    let quote = estimator.quote(&inputs).unwrap();

    assert_eq!(quote.comparison.diff(), 7000.0);
    assert_eq!(
        quote.comparison.verdict(),
        PriceVerdict::HigherThanCompetitor
    );
    assert!(quote.comparison.message().contains("higher than competitor"));
}

#[test]
fn test_exact_tie_reads_as_aligned() {
    let estimator = PriceEstimator::new(
        Arc::new(RecordingPredictor::new(5000.0)),
        DefaultFeatureValues::default(),
    );

    let quote = estimator.quote(&scenario_one_inputs()).unwrap();

    assert_eq!(quote.comparison.diff(), 0.0);
    assert_eq!(quote.comparison.verdict(), PriceVerdict::Aligned);

    let msg = quote.comparison.message();
    assert_eq!(msg, "Price is aligned with competitors.");
    assert!(!msg.contains("higher") && !msg.contains("lower"));
}

#[test]
fn test_every_enumerated_combination_yields_a_complete_record() {
    let predictor = Arc::new(RecordingPredictor::new(5500.0));
    let estimator = PriceEstimator::new(predictor.clone(), DefaultFeatureValues::default());

    for airline in Airline::ALL {
        for class in CabinClass::ALL {
            for season in Season::ALL {
                let inputs = TripInputs {
                    airline,
                    travel_class: class,
                    season,
                    ..scenario_one_inputs()
                };
                let quote = estimator.quote(&inputs).unwrap();
                assert_eq!(quote.record.to_named_values().len(), 19);
            }
        }
    }

    let expected_calls = Airline::ALL.len() * CabinClass::ALL.len() * Season::ALL.len();
    assert_eq!(predictor.calls.load(Ordering::SeqCst), expected_calls);
}
