use crate::domain::pricing::comparison::group_thousands;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};

const BAR_WIDTH: f64 = 0.5;
/// Headroom above the taller bar so the value labels stay inside the plot.
const Y_PADDING: f64 = 10000.0;

/// The two bars of the comparison chart, predicted first.
pub fn comparison_bars(predicted: f64, competitor: f64) -> Vec<Bar> {
    vec![
        Bar::new(0.0, predicted)
            .name("Predicted Price")
            .fill(DesignSystem::PRICE_PREDICTED)
            .width(BAR_WIDTH),
        Bar::new(1.0, competitor)
            .name("Competitor Price")
            .fill(DesignSystem::PRICE_COMPETITOR)
            .width(BAR_WIDTH),
    ]
}

/// Annotation above a bar: the rounded integer value, e.g. "₹8,000".
pub fn value_label(price: f64) -> String {
    format!("₹{}", group_thousands(price.round() as i64))
}

/// Renders the predicted-vs-competitor bar chart with value labels.
pub fn render_comparison_chart(ui: &mut egui::Ui, predicted: f64, competitor: f64) {
    let bars = comparison_bars(predicted, competitor);
    let y_max = predicted.max(competitor) + Y_PADDING;
    let label_offset = y_max * 0.03;

    Plot::new("price_comparison_plot")
        .height(260.0)
        .include_y(0.0)
        .include_y(y_max)
        .include_x(-0.7)
        .include_x(1.7)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_axes([false, true])
        .show_grid([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Price Comparison", bars));

            plot_ui.text(Text::new(
                "predicted_value_label",
                PlotPoint::new(0.0, predicted + label_offset),
                egui::RichText::new(value_label(predicted))
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            ));
            plot_ui.text(Text::new(
                "competitor_value_label",
                PlotPoint::new(1.0, competitor + label_offset),
                egui::RichText::new(value_label(competitor))
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_two_bars_with_given_heights() {
        let bars = comparison_bars(8000.0, 5000.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].value, 8000.0);
        assert_eq!(bars[1].value, 5000.0);
        assert_ne!(bars[0].argument, bars[1].argument);
    }

    #[test]
    fn test_value_labels_are_rounded_integers() {
        assert_eq!(value_label(8000.0), "₹8,000");
        assert_eq!(value_label(7999.6), "₹8,000");
        assert_eq!(value_label(1000.0), "₹1,000");
    }
}
