use crate::application::estimator::PriceQuote;
use crate::domain::pricing::comparison::PriceVerdict;
use crate::interfaces::app::PricingApp;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::charts;
use crate::interfaces::components::metrics::{render_metric_card, render_status_pill};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders the right-hand side: preview table, price readout, chart, verdict.
pub fn render_results_panel(ui: &mut egui::Ui, app: &mut PricingApp) {
    ui.add_space(DesignSystem::SPACING_SMALL);

    match &app.last_result {
        None => {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(
                        "Enter travel details and press 'Predict Price' to get an estimate.",
                    )
                    .italics()
                    .color(DesignSystem::TEXT_MUTED),
                );
            });
        }
        Some(Err(message)) => {
            Card::new().title("Prediction Failed").show(ui, |ui| {
                ui.label(
                    egui::RichText::new(message)
                        .color(DesignSystem::DANGER)
                        .strong(),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(
                    egui::RichText::new("Adjust the inputs and trigger the prediction again.")
                        .small()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
        }
        Some(Ok(quote)) => render_quote(ui, quote),
    }
}

fn render_quote(ui: &mut egui::Ui, quote: &PriceQuote) {
    egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .show(ui, |ui| {
            // --- Input data preview ---
            Card::new().title("Input Data Preview").show(ui, |ui| {
                egui::Grid::new("record_preview_grid")
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for (name, value) in quote.record.to_named_values() {
                            ui.label(
                                egui::RichText::new(name)
                                    .color(DesignSystem::TEXT_SECONDARY)
                                    .size(12.0),
                            );
                            ui.label(
                                egui::RichText::new(value.to_string())
                                    .color(DesignSystem::TEXT_PRIMARY)
                                    .size(12.0),
                            );
                            ui.end_row();
                        }
                    });
            });
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            // --- Price readout ---
            render_metric_card(
                ui,
                "💰 Estimated Ticket Price",
                &charts::value_label(quote.comparison.predicted),
                DesignSystem::PRICE_PREDICTED,
                Some("per ticket, current inputs"),
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            // --- Comparison chart ---
            Card::new()
                .title("📊 Predicted vs Competitor Price")
                .show(ui, |ui| {
                    charts::render_comparison_chart(
                        ui,
                        quote.comparison.predicted,
                        quote.comparison.competitor,
                    );
                });
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            // --- Verdict ---
            let color = match quote.comparison.verdict() {
                PriceVerdict::HigherThanCompetitor => DesignSystem::DANGER,
                PriceVerdict::LowerThanCompetitor => DesignSystem::SUCCESS,
                PriceVerdict::Aligned => DesignSystem::INFO,
            };
            render_status_pill(ui, &quote.comparison.message(), color);
        });
}
