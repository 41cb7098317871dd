use crate::config::DefaultFeatureValues;
use crate::domain::pricing::types::{FeatureRecord, TripInputs};

/// Merges the collected trip inputs with the fixed default values into the
/// flat record one inference call consumes. Pure; no validation beyond what
/// the input widgets already constrain.
pub fn assemble_record(inputs: &TripInputs, defaults: &DefaultFeatureValues) -> FeatureRecord {
    FeatureRecord {
        airline: inputs.airline,
        source_city: inputs.source_city,
        destination_city: inputs.destination_city,
        travel_class: inputs.travel_class,
        days_left: inputs.days_left,
        is_holiday: inputs.is_holiday,
        season: inputs.season,
        competitor_avg_price: inputs.competitor_avg_price,
        stops: defaults.stops,
        weekday: defaults.weekday,
        is_weekend: defaults.is_weekend,
        load_factor: defaults.load_factor,
        duration_minutes: defaults.duration_minutes,
        departure_time: defaults.departure_time,
        arrival_time: defaults.arrival_time,
        price_category: defaults.price_category,
        demand_score: defaults.demand_score,
        total_revenue: defaults.total_revenue,
        last_minute_booking: defaults.last_minute_booking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::feature_registry::FEATURE_NAMES;
    use crate::domain::pricing::types::{
        Airline, CabinClass, City, FeatureValue, Season, TimeOfDay,
    };

    #[test]
    fn test_assembled_record_has_all_registry_fields() {
        let record = assemble_record(&TripInputs::default(), &DefaultFeatureValues::default());
        let named = record.to_named_values();

        assert_eq!(named.len(), 19);
        for (name, _) in &named {
            assert!(FEATURE_NAMES.contains(name), "unknown field {}", name);
        }
    }

    #[test]
    fn test_assembles_user_inputs_and_defaults() {
        let inputs = TripInputs {
            airline: Airline::Indigo,
            source_city: City::Delhi,
            destination_city: City::Mumbai,
            travel_class: CabinClass::Economy,
            season: Season::Winter,
            days_left: 30,
            is_holiday: false,
            competitor_avg_price: 5000.0,
        };

        let record = assemble_record(&inputs, &DefaultFeatureValues::default());

        assert_eq!(record.airline, Airline::Indigo);
        assert_eq!(record.days_left, 30);
        assert_eq!(record.competitor_avg_price, 5000.0);
        assert_eq!(record.stops, 1);
        assert_eq!(record.weekday, 2);
        assert_eq!(record.departure_time, TimeOfDay::Morning);
        assert_eq!(record.total_revenue, 100000.0);

        let named = record.to_named_values();
        assert!(named.contains(&("class", FeatureValue::Text("Economy"))));
        assert!(named.contains(&("is_holiday", FeatureValue::Int(0))));
    }

    #[test]
    fn test_default_overrides_flow_through() {
        let defaults = DefaultFeatureValues {
            stops: 2,
            load_factor: 0.6,
            ..DefaultFeatureValues::default()
        };

        let record = assemble_record(&TripInputs::default(), &defaults);
        assert_eq!(record.stops, 2);
        assert_eq!(record.load_factor, 0.6);
        // Untouched defaults keep their fixed values
        assert_eq!(record.duration_minutes, 120);
    }
}
