use crate::domain::pricing::types::{
    Airline, CabinClass, City, Season, COMPETITOR_PRICE_MAX, COMPETITOR_PRICE_MIN, DAYS_LEFT_MAX,
    DAYS_LEFT_MIN,
};
use crate::interfaces::app::PricingApp;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders the travel-details form and the trigger button.
pub fn render_input_panel(ui: &mut egui::Ui, app: &mut PricingApp) {
    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.heading("Input Travel Details");
    ui.separator();
    ui.add_space(DesignSystem::SPACING_SMALL);

    egui::ScrollArea::vertical()
        .id_salt("input_scroll")
        .show(ui, |ui| {
            let form = &mut app.form;

            egui::ComboBox::from_label("Airline")
                .selected_text(form.airline.label())
                .show_ui(ui, |ui| {
                    for airline in Airline::ALL {
                        ui.selectable_value(&mut form.airline, airline, airline.label());
                    }
                });
            ui.add_space(DesignSystem::SPACING_SMALL);

            egui::ComboBox::from_label("Source City")
                .selected_text(form.source_city.label())
                .show_ui(ui, |ui| {
                    for city in City::ALL {
                        ui.selectable_value(&mut form.source_city, city, city.label());
                    }
                });
            ui.add_space(DesignSystem::SPACING_SMALL);

            egui::ComboBox::from_label("Destination City")
                .selected_text(form.destination_city.label())
                .show_ui(ui, |ui| {
                    for city in City::ALL {
                        ui.selectable_value(&mut form.destination_city, city, city.label());
                    }
                });
            ui.add_space(DesignSystem::SPACING_SMALL);

            egui::ComboBox::from_label("Class")
                .selected_text(form.travel_class.label())
                .show_ui(ui, |ui| {
                    for class in CabinClass::ALL {
                        ui.selectable_value(&mut form.travel_class, class, class.label());
                    }
                });
            ui.add_space(DesignSystem::SPACING_SMALL);

            egui::ComboBox::from_label("Season")
                .selected_text(form.season.label())
                .show_ui(ui, |ui| {
                    for season in Season::ALL {
                        ui.selectable_value(&mut form.season, season, season.label());
                    }
                });
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            ui.label("Days Left to Departure");
            ui.add(egui::Slider::new(
                &mut form.days_left,
                DAYS_LEFT_MIN..=DAYS_LEFT_MAX,
            ));
            ui.add_space(DesignSystem::SPACING_SMALL);

            ui.checkbox(&mut form.is_holiday, "Holiday travel");
            ui.add_space(DesignSystem::SPACING_SMALL);

            ui.label("Competitor Avg Price (₹)");
            ui.add(
                egui::DragValue::new(&mut form.competitor_avg_price)
                    .range(COMPETITOR_PRICE_MIN..=COMPETITOR_PRICE_MAX)
                    .speed(50.0)
                    .prefix("₹"),
            );
            ui.add_space(DesignSystem::SPACING_LARGE);

            let predict_button = egui::Button::new(
                egui::RichText::new("Predict Price")
                    .size(16.0)
                    .color(DesignSystem::TEXT_PRIMARY),
            )
            .fill(DesignSystem::ACCENT_PRIMARY)
            .min_size(egui::vec2(ui.available_width(), 36.0));

            if ui.add(predict_button).clicked() {
                app.predict_requested = true;
            }

            ui.add_space(DesignSystem::SPACING_LARGE);
            ui.separator();

            ui.label(egui::RichText::new("💬 Feedback").strong());
            ui.label(
                egui::RichText::new("What do you think about this prediction?")
                    .small()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.text_edit_multiline(&mut app.feedback_text);
            ui.label(
                egui::RichText::new("Feedback is not stored yet.")
                    .small()
                    .color(DesignSystem::TEXT_MUTED),
            );
        });
}
