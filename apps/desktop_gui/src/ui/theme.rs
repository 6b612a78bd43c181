use std::collections::BTreeMap;

use eframe::egui;

pub const RESULT_BACKGROUND: egui::Color32 = egui::Color32::YELLOW;
pub const RESULT_TEXT: egui::Color32 = egui::Color32::BLACK;

/// Every text style at the same large size, so the window reads well on a projector.
pub fn uniform_text_styles(font_size: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size = font_size;
    }
    styles
}

pub fn apply_demo_style(ctx: &egui::Context, font_size: f32) {
    ctx.style_mut(|style| {
        style.text_styles = uniform_text_styles(font_size);
        style.spacing.item_spacing = egui::vec2(10.0, 15.0);
        style.spacing.button_padding = egui::vec2(16.0, 8.0);
    });
}
