use eframe::egui::{self, Color32, RichText, Rounding};

use crate::ui_constants::card::BADGE_ROUNDING;

/// Maps a dataset color tag to its accent color. Unknown tags fall back to gray.
pub fn accent_color(tag: &str) -> Color32 {
    match tag {
        "pmbok" => Color32::from_rgb(66, 133, 244),
        "prince2" => Color32::from_rgb(156, 89, 209),
        "iso" => Color32::from_rgb(52, 168, 120),
        _ => Color32::from_gray(110),
    }
}

/// Filled pill with the accent as background.
pub fn badge(ui: &mut egui::Ui, text: &str, fill: Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(Rounding::same(BADGE_ROUNDING))
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    RichText::new(text)
                        .small()
                        .strong()
                        .color(Color32::from_rgb(245, 245, 245)),
                )
                .selectable(false),
            );
        });
}

/// Subtle outlined pill used for topic chips.
pub fn outline_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(Color32::from_rgb(44, 44, 44))
        .stroke(egui::Stroke::new(1.0, Color32::from_gray(70)))
        .rounding(Rounding::same(BADGE_ROUNDING))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(RichText::new(text).small().color(Color32::from_rgb(190, 190, 190)))
                    .selectable(false),
            );
        });
}
