use crate::domain::errors::PredictionError;
use crate::domain::pricing::types::FeatureRecord;

/// Ordered list of feature names.
/// This order MUST match exactly with the order used when the pricing model
/// was trained. Any change here is a breaking change for deployed artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "airline",
    "source_city",
    "destination_city",
    "class",
    "days_left",
    "is_holiday",
    "season",
    "competitor_avg_price",
    "stops",
    "weekday",
    "is_weekend",
    "load_factor",
    "duration",
    "departure_time",
    "arrival_time",
    "price_category",
    "demand_score",
    "total_revenue",
    "last_minute_booking",
];

/// Converts a record into the numeric row the regressor consumes.
/// Categorical fields use their fixed ordinal codes.
pub fn record_to_f64_vector(record: &FeatureRecord) -> Vec<f64> {
    vec![
        record.airline.code() as f64,
        record.source_city.code() as f64,
        record.destination_city.code() as f64,
        record.travel_class.code() as f64,
        record.days_left as f64,
        record.is_holiday as u8 as f64,
        record.season.code() as f64,
        record.competitor_avg_price,
        record.stops as f64,
        record.weekday as f64,
        record.is_weekend as u8 as f64,
        record.load_factor,
        record.duration_minutes as f64,
        record.departure_time.code() as f64,
        record.arrival_time.code() as f64,
        record.price_category.code() as f64,
        record.demand_score,
        record.total_revenue,
        record.last_minute_booking as u8 as f64,
    ]
}

/// Verifies the model's declared input schema against the canonical field
/// set, reporting missing and unexpected names. Runs before every inference
/// call; order differences are also a mismatch since encoding is positional.
pub fn check_schema(model_features: &[String]) -> Result<(), PredictionError> {
    if model_features.len() != FEATURE_NAMES.len() {
        return Err(PredictionError::SchemaMismatch {
            reason: format!(
                "model expects {} features, assembler produces {}",
                model_features.len(),
                FEATURE_NAMES.len()
            ),
        });
    }

    let missing: Vec<&&str> = FEATURE_NAMES
        .iter()
        .filter(|name| !model_features.iter().any(|f| f == **name))
        .collect();
    let unexpected: Vec<&String> = model_features
        .iter()
        .filter(|f| !FEATURE_NAMES.contains(&f.as_str()))
        .collect();

    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(PredictionError::SchemaMismatch {
            reason: format!("missing fields: {:?}, unexpected fields: {:?}", missing, unexpected),
        });
    }

    for (position, (ours, theirs)) in FEATURE_NAMES.iter().zip(model_features).enumerate() {
        if *ours != theirs {
            return Err(PredictionError::SchemaMismatch {
                reason: format!(
                    "field order diverges at position {}: expected '{}', model has '{}'",
                    position, ours, theirs
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::types::{
        Airline, CabinClass, City, FeatureRecord, PriceCategory, Season, TimeOfDay,
    };

    fn sample_record() -> FeatureRecord {
        FeatureRecord {
            airline: Airline::Vistara,
            source_city: City::Delhi,
            destination_city: City::Chennai,
            travel_class: CabinClass::Business,
            days_left: 12,
            is_holiday: true,
            season: Season::Monsoon,
            competitor_avg_price: 7500.0,
            stops: 1,
            weekday: 2,
            is_weekend: false,
            load_factor: 0.85,
            duration_minutes: 120,
            departure_time: TimeOfDay::Morning,
            arrival_time: TimeOfDay::Afternoon,
            price_category: PriceCategory::Medium,
            demand_score: 0.5,
            total_revenue: 100000.0,
            last_minute_booking: false,
        }
    }

    #[test]
    fn test_vector_length_matches_registry() {
        let vec = record_to_f64_vector(&sample_record());
        assert_eq!(vec.len(), FEATURE_NAMES.len());
        assert_eq!(vec.len(), 19);
    }

    #[test]
    fn test_vector_encoding_consistency() {
        let vec = record_to_f64_vector(&sample_record());
        // airline is index 0, Vistara encodes to 3
        assert_eq!(vec[0], 3.0);
        // competitor_avg_price is index 7, passed through unscaled
        assert_eq!(vec[7], 7500.0);
        // last_minute_booking is the final index (18)
        assert_eq!(vec[18], 0.0);
    }

    #[test]
    fn test_named_values_follow_registry_order() {
        let names: Vec<&str> = sample_record()
            .to_named_values()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, FEATURE_NAMES);
    }

    #[test]
    fn test_check_schema_accepts_canonical_order() {
        let model_features: Vec<String> = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        assert!(check_schema(&model_features).is_ok());
    }

    #[test]
    fn test_check_schema_rejects_missing_field() {
        let model_features: Vec<String> = FEATURE_NAMES
            .iter()
            .filter(|name| **name != "season")
            .map(|s| s.to_string())
            .collect();

        let err = check_schema(&model_features).unwrap_err();
        assert!(matches!(err, PredictionError::SchemaMismatch { .. }));
        assert!(err.to_string().contains("18 features"));
    }

    #[test]
    fn test_check_schema_rejects_reordered_fields() {
        let mut model_features: Vec<String> =
            FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        model_features.swap(0, 1);

        let err = check_schema(&model_features).unwrap_err();
        assert!(err.to_string().contains("order diverges"));
    }

    #[test]
    fn test_check_schema_rejects_renamed_field() {
        let mut model_features: Vec<String> =
            FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        model_features[6] = "quarter".to_string();

        let err = check_schema(&model_features).unwrap_err();
        assert!(err.to_string().contains("season"));
        assert!(err.to_string().contains("quarter"));
    }
}
