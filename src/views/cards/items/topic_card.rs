use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use crate::standards::{ComparisonTopic, MethodologyNotes, Similarity};
use crate::ui_constants::{card, spacing};

use super::badge::{accent_color, badge};

fn similarity_color(similarity: Similarity) -> Color32 {
    match similarity {
        Similarity::High => Color32::from_rgb(95, 190, 125),
        Similarity::Medium => Color32::from_rgb(235, 200, 80),
        Similarity::Low => Color32::from_rgb(220, 80, 80),
    }
}

/// Full-width Compare card: topic name, similarity marker, and one tinted
/// column per methodology with its approach and emphasis.
pub fn topic_card(ui: &mut egui::Ui, t: &ComparisonTopic) {
    let fill = Color32::from_rgb(36, 36, 36);
    let stroke = Stroke::new(1.0, Color32::from_rgb(64, 64, 64));

    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(card::ROUNDING))
        .inner_margin(egui::Margin::symmetric(card::INNER_MARGIN, card::INNER_MARGIN))
        .show(ui, |ui| {
            // Header: topic name left, similarity marker right
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&t.name)
                        .heading()
                        .color(Color32::from_rgb(230, 230, 230)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let col = similarity_color(t.similarity);
                    ui.label(
                        RichText::new(t.similarity.label())
                            .small()
                            .color(Color32::from_rgb(170, 170, 170)),
                    );
                    ui.label(RichText::new(t.similarity.glyph()).color(col));
                });
            });

            ui.add_space(spacing::MEDIUM);

            ui.columns(3, |cols| {
                methodology_column(&mut cols[0], "PMBOK 7", accent_color("pmbok"), &t.pmbok);
                methodology_column(&mut cols[1], "PRINCE2", accent_color("prince2"), &t.prince2);
                methodology_column(&mut cols[2], "ISO 21500", accent_color("iso"), &t.iso);
            });
        });
}

fn methodology_column(
    ui: &mut egui::Ui,
    name: &str,
    accent: Color32,
    notes: &MethodologyNotes,
) {
    egui::Frame::none()
        .fill(accent.gamma_multiply(0.12))
        .stroke(Stroke::new(1.0, accent.gamma_multiply(0.4)))
        .rounding(Rounding::same(card::BADGE_ROUNDING))
        .inner_margin(egui::Margin::symmetric(spacing::MEDIUM, spacing::MEDIUM))
        .show(ui, |ui| {
            badge(ui, name, accent);

            ui.add_space(spacing::MEDIUM);
            ui.label(RichText::new("APPROACH").weak().small());
            ui.label(RichText::new(&notes.approach).small().color(Color32::from_rgb(210, 210, 210)));

            ui.add_space(spacing::SMALL);
            ui.label(RichText::new("EMPHASIS").weak().small());
            ui.label(RichText::new(&notes.emphasis).small().color(Color32::from_rgb(210, 210, 210)));
        });
}
