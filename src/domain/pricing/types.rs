use serde::{Deserialize, Serialize};
use std::fmt;

/// Bounds enforced by the input widgets and mirrored by the assembler.
pub const DAYS_LEFT_MIN: u32 = 0;
pub const DAYS_LEFT_MAX: u32 = 60;
pub const DAYS_LEFT_DEFAULT: u32 = 30;

pub const COMPETITOR_PRICE_MIN: f64 = 1000.0;
pub const COMPETITOR_PRICE_MAX: f64 = 20000.0;
pub const COMPETITOR_PRICE_DEFAULT: f64 = 5000.0;

/// Carriers the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Airline {
    Indigo,
    AirIndia,
    SpiceJet,
    Vistara,
    GoFirst,
}

impl Airline {
    pub const ALL: [Airline; 5] = [
        Airline::Indigo,
        Airline::AirIndia,
        Airline::SpiceJet,
        Airline::Vistara,
        Airline::GoFirst,
    ];

    /// Dataset spelling, used in the feature record verbatim.
    pub fn label(&self) -> &'static str {
        match self {
            Airline::Indigo => "Indigo",
            Airline::AirIndia => "Air_India",
            Airline::SpiceJet => "SpiceJet",
            Airline::Vistara => "Vistara",
            Airline::GoFirst => "GO_FIRST",
        }
    }

    /// Ordinal code matching the training-time label encoding.
    pub fn code(&self) -> u8 {
        match self {
            Airline::Indigo => 0,
            Airline::AirIndia => 1,
            Airline::SpiceJet => 2,
            Airline::Vistara => 3,
            Airline::GoFirst => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    Delhi,
    Mumbai,
    Bangalore,
    Kolkata,
    Chennai,
}

impl City {
    pub const ALL: [City; 5] = [
        City::Delhi,
        City::Mumbai,
        City::Bangalore,
        City::Kolkata,
        City::Chennai,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            City::Delhi => "Delhi",
            City::Mumbai => "Mumbai",
            City::Bangalore => "Bangalore",
            City::Kolkata => "Kolkata",
            City::Chennai => "Chennai",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            City::Delhi => 0,
            City::Mumbai => 1,
            City::Bangalore => 2,
            City::Kolkata => 3,
            City::Chennai => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    Business,
}

impl CabinClass {
    pub const ALL: [CabinClass; 2] = [CabinClass::Economy, CabinClass::Business];

    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::Business => "Business",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            CabinClass::Economy => 0,
            CabinClass::Business => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Winter,
        Season::Summer,
        Season::Monsoon,
        Season::Autumn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Autumn => "Autumn",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Season::Winter => 0,
            Season::Summer => 1,
            Season::Monsoon => 2,
            Season::Autumn => 3,
        }
    }
}

/// Departure/arrival time buckets from the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
    LateNight,
}

impl TimeOfDay {
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::EarlyMorning => "Early_Morning",
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
            TimeOfDay::LateNight => "Late_Night",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            TimeOfDay::EarlyMorning => 0,
            TimeOfDay::Morning => 1,
            TimeOfDay::Afternoon => 2,
            TimeOfDay::Evening => 3,
            TimeOfDay::Night => 4,
            TimeOfDay::LateNight => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceCategory {
    Low,
    Medium,
    High,
}

impl PriceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PriceCategory::Low => "Low",
            PriceCategory::Medium => "Medium",
            PriceCategory::High => "High",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            PriceCategory::Low => 0,
            PriceCategory::Medium => 1,
            PriceCategory::High => 2,
        }
    }
}

/// The eight user-settable trip attributes collected by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInputs {
    pub airline: Airline,
    pub source_city: City,
    pub destination_city: City,
    pub travel_class: CabinClass,
    pub season: Season,
    pub days_left: u32,
    pub is_holiday: bool,
    pub competitor_avg_price: f64,
}

impl Default for TripInputs {
    fn default() -> Self {
        Self {
            airline: Airline::Indigo,
            source_city: City::Delhi,
            destination_city: City::Mumbai,
            travel_class: CabinClass::Economy,
            season: Season::Winter,
            days_left: DAYS_LEFT_DEFAULT,
            is_holiday: false,
            competitor_avg_price: COMPETITOR_PRICE_DEFAULT,
        }
    }
}

/// One scalar cell of the assembled record, kept typed for the data preview.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(v) => write!(f, "{}", v),
            FeatureValue::Float(v) => write!(f, "{}", v),
            FeatureValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// The flat 19-field record one inference call consumes.
///
/// Built fresh per request by the assembler; never mutated afterwards.
/// Field order in `to_named_values` follows the feature registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub airline: Airline,
    pub source_city: City,
    pub destination_city: City,
    pub travel_class: CabinClass,
    pub days_left: u32,
    pub is_holiday: bool,
    pub season: Season,
    pub competitor_avg_price: f64,
    pub stops: u32,
    pub weekday: u32,
    pub is_weekend: bool,
    pub load_factor: f64,
    pub duration_minutes: u32,
    pub departure_time: TimeOfDay,
    pub arrival_time: TimeOfDay,
    pub price_category: PriceCategory,
    pub demand_score: f64,
    pub total_revenue: f64,
    pub last_minute_booking: bool,
}

impl FeatureRecord {
    /// Named view of the record in canonical order, for the preview table
    /// and for schema checks against the loaded model.
    pub fn to_named_values(&self) -> Vec<(&'static str, FeatureValue)> {
        vec![
            ("airline", FeatureValue::Text(self.airline.label())),
            ("source_city", FeatureValue::Text(self.source_city.label())),
            (
                "destination_city",
                FeatureValue::Text(self.destination_city.label()),
            ),
            ("class", FeatureValue::Text(self.travel_class.label())),
            ("days_left", FeatureValue::Int(self.days_left as i64)),
            ("is_holiday", FeatureValue::Int(self.is_holiday as i64)),
            ("season", FeatureValue::Text(self.season.label())),
            (
                "competitor_avg_price",
                FeatureValue::Float(self.competitor_avg_price),
            ),
            ("stops", FeatureValue::Int(self.stops as i64)),
            ("weekday", FeatureValue::Int(self.weekday as i64)),
            ("is_weekend", FeatureValue::Int(self.is_weekend as i64)),
            ("load_factor", FeatureValue::Float(self.load_factor)),
            ("duration", FeatureValue::Int(self.duration_minutes as i64)),
            (
                "departure_time",
                FeatureValue::Text(self.departure_time.label()),
            ),
            ("arrival_time", FeatureValue::Text(self.arrival_time.label())),
            (
                "price_category",
                FeatureValue::Text(self.price_category.label()),
            ),
            ("demand_score", FeatureValue::Float(self.demand_score)),
            ("total_revenue", FeatureValue::Float(self.total_revenue)),
            (
                "last_minute_booking",
                FeatureValue::Int(self.last_minute_booking as i64),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_codes_match_declaration_order() {
        for (i, airline) in Airline::ALL.iter().enumerate() {
            assert_eq!(airline.code() as usize, i);
        }
        for (i, city) in City::ALL.iter().enumerate() {
            assert_eq!(city.code() as usize, i);
        }
        for (i, season) in Season::ALL.iter().enumerate() {
            assert_eq!(season.code() as usize, i);
        }
    }

    #[test]
    fn test_trip_input_defaults_within_bounds() {
        let inputs = TripInputs::default();
        assert!(inputs.days_left >= DAYS_LEFT_MIN && inputs.days_left <= DAYS_LEFT_MAX);
        assert!(
            inputs.competitor_avg_price >= COMPETITOR_PRICE_MIN
                && inputs.competitor_avg_price <= COMPETITOR_PRICE_MAX
        );
    }

    #[test]
    fn test_feature_value_display() {
        assert_eq!(FeatureValue::Int(1).to_string(), "1");
        assert_eq!(FeatureValue::Float(0.85).to_string(), "0.85");
        assert_eq!(FeatureValue::Text("Morning").to_string(), "Morning");
    }
}
