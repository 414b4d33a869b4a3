use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use crate::standards::Standard;
use crate::ui_constants::{card, spacing, TOPIC_PREVIEW_COUNT};

use super::badge::{accent_color, badge, outline_badge};

/// Fixed-width Library card: accent badge, full name, description, key points
/// and a preview of the topic list. Strictly constrained to `width` so rows
/// form a proper grid.
pub fn standard_card(ui: &mut egui::Ui, s: &Standard, width: f32) {
    let rounding = Rounding::same(card::ROUNDING);
    let fill = Color32::from_rgb(36, 36, 36);
    let stroke = Stroke::new(1.0, Color32::from_rgb(64, 64, 64));
    let accent = accent_color(&s.color);

    // Hard limit the card width inside the row.
    ui.set_min_width(width);
    ui.set_max_width(width);

    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(rounding)
        .inner_margin(egui::Margin::symmetric(card::INNER_MARGIN, card::INNER_MARGIN))
        .show(ui, |ui| {
            // Constrain inner content to card width minus inner margins.
            let inner_w = width - 2.0 * card::INNER_MARGIN;
            ui.set_width(inner_w);

            // Header: accent badge left, book glyph right
            ui.horizontal(|ui| {
                badge(ui, &s.name, accent);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("📖").weak());
                });
            });

            ui.add_space(spacing::MEDIUM);
            ui.label(
                RichText::new(&s.full_name)
                    .heading()
                    .color(Color32::from_rgb(230, 230, 230)),
            );

            ui.add_space(spacing::SMALL);
            ui.label(RichText::new(&s.description).color(Color32::from_rgb(180, 180, 180)));

            ui.add_space(spacing::MEDIUM);
            ui.label(RichText::new("Key Points:").small().strong());
            ui.add_space(spacing::SMALL);
            for point in &s.key_points {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("•").small().color(accent));
                    ui.label(RichText::new(point).small().color(Color32::from_rgb(180, 180, 180)));
                });
            }

            ui.add_space(spacing::MEDIUM);
            ui.label(RichText::new("Main Topics:").small().strong());
            ui.add_space(spacing::SMALL);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(spacing::SMALL, spacing::SMALL);
                for topic in s.topics.iter().take(TOPIC_PREVIEW_COUNT) {
                    outline_badge(ui, topic);
                }
                let hidden = s.topics.len().saturating_sub(TOPIC_PREVIEW_COUNT);
                if hidden > 0 {
                    outline_badge(ui, &format!("+{hidden} more"));
                }
            });
        });
}
