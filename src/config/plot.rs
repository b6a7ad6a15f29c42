//! Scatter plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Call contracts
    pub ce_color: Color32,
    /// Put contracts
    pub pe_color: Color32,
    pub marker_radius: f32,
    /// Screen-space distance within which a point counts as hovered
    pub pick_radius_px: f32,

    pub color_error: Color32,
    pub color_placeholder: Color32,
    pub color_summary: Color32,
    pub color_status: Color32,
    pub color_tooltip_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    ce_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    pe_color: Color32::from_rgb(239, 83, 80),  // TradingView Red

    marker_radius: 3.5,
    pick_radius_px: 12.0,

    color_error: Color32::from_rgb(255, 100, 100),
    color_placeholder: Color32::GRAY,
    color_summary: Color32::LIGHT_GRAY,
    color_status: Color32::GRAY,
    color_tooltip_subdued: Color32::GRAY,
};
