use farecast::application::estimator::PriceEstimator;
use farecast::application::ml::predictor::PricePredictor;
use farecast::application::ml::smartcore_predictor::SmartCorePredictor;
use farecast::config::{Config, DefaultFeatureValues, Mode};
use farecast::infrastructure::mock::MockPricePredictor;
use farecast::interfaces::app::PricingApp;

use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Initializing Farecast...");

    // 2. Load Config
    let config = Config::from_env()?;

    // 3. Load the model once; without it no request is servable.
    let predictor: Arc<dyn PricePredictor> = match config.mode {
        Mode::Mock => {
            info!("Running with the mock heuristic predictor (MODE=mock)");
            Arc::new(MockPricePredictor::new())
        }
        Mode::Artifact => {
            let predictor = SmartCorePredictor::load(config.model_path.clone()).map_err(|e| {
                error!("Cannot serve predictions: {}", e);
                anyhow::anyhow!(e)
            })?;
            Arc::new(predictor)
        }
    };

    let model_label = format!("{} ({})", predictor.name(), predictor.version());
    info!(model = %model_label, "Model ready. Launching UI.");

    let estimator = PriceEstimator::new(predictor, DefaultFeatureValues::default());
    let app = PricingApp::new(estimator, model_label);

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Dynamic Airline Price Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Farecast",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
