pub mod comparison;
pub mod feature_registry;
pub mod types;
