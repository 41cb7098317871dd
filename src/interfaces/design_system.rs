use eframe::egui;

/// Dark design system for the pricing desk.
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(12, 14, 18);
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(12, 14, 18);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(24, 28, 35);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(16, 19, 25);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(76, 120, 168); // #4C78A8

    // The two bars of the comparison chart
    pub const PRICE_PREDICTED: egui::Color32 = egui::Color32::from_rgb(76, 120, 168); // #4C78A8
    pub const PRICE_COMPETITOR: egui::Color32 = egui::Color32::from_rgb(245, 133, 24); // #F58518

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(46, 204, 113);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(231, 76, 60);
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(93, 156, 236);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(238, 242, 248);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(165);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(105);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(50, 56, 64);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: u8 = 8;
    pub const ROUNDING_PILL: u8 = 12;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }
}
