use crate::application::estimator::{PriceEstimator, PriceQuote};
use crate::domain::pricing::types::TripInputs;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::panels::{input_panel, results_panel};
use eframe::egui;
use tracing::{error, warn};

/// The single-window pricing desk.
///
/// Holds transient UI state only; the estimator (and the model behind it)
/// is read-only for the life of the process.
pub struct PricingApp {
    estimator: PriceEstimator,
    model_label: String,

    // UI State
    pub form: TripInputs,
    pub feedback_text: String,
    pub last_result: Option<Result<PriceQuote, String>>,
    pub predict_requested: bool,
}

impl PricingApp {
    pub fn new(estimator: PriceEstimator, model_label: String) -> Self {
        Self {
            estimator,
            model_label,
            form: TripInputs::default(),
            feedback_text: String::new(),
            last_result: None,
            predict_requested: false,
        }
    }

    /// Runs one request: assemble, predict, keep the outcome for rendering.
    fn run_prediction(&mut self) {
        if !self.feedback_text.trim().is_empty() {
            // Known gap: feedback is collected but there is no capture store.
            warn!(
                chars = self.feedback_text.trim().len(),
                "feedback collected but not persisted"
            );
        }

        self.last_result = Some(match self.estimator.quote(&self.form) {
            Ok(quote) => Ok(quote),
            Err(e) => {
                error!("prediction request failed: {}", e);
                Err(e.to_string())
            }
        });
    }
}

impl eframe::App for PricingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("✈ Dynamic Airline Price Predictor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.model_label)
                            .small()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
            });
        });

        egui::SidePanel::left("input_panel")
            .default_width(380.0)
            .min_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                input_panel::render_input_panel(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            results_panel::render_results_panel(ui, self);
        });

        if self.predict_requested {
            self.predict_requested = false;
            self.run_prediction();
        }
    }
}
