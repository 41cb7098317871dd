//! Configuration module for Farecast.
//!
//! Settings come from environment variables (with `.env` support) so the
//! desktop binary needs no flags: predictor mode and the artifact path.

use crate::domain::pricing::types::{PriceCategory, TimeOfDay};
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which predictor backs the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Load the serialized random-forest artifact at startup (default).
    Artifact,
    /// Deterministic heuristic fares, no artifact required.
    Mock,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "artifact" => Ok(Mode::Artifact),
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'artifact' or 'mock'", s),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub model_path: PathBuf,
}

impl Config {
    pub const DEFAULT_MODEL_PATH: &'static str = "models/dynamic_pricing_small.json";

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "artifact".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(Self::DEFAULT_MODEL_PATH));

        Ok(Self { mode, model_path })
    }
}

/// The eleven record fields the form does not expose.
///
/// Injected into the assembler rather than inlined so tests can override
/// individual values.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultFeatureValues {
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

impl Default for DefaultFeatureValues {
    fn default() -> Self {
        Self {
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
}
