use eframe::egui;

use crate::standards::Standard;
use crate::ui_constants::{CARD_GAP, CARD_WIDTH};
use crate::views::cards::standard_card;

/// Centered fixed-width card grid: column count derived from the available
/// width, rows padded left so the grid sits in the middle of the panel.
pub(super) fn draw_standards_grid(ui: &mut egui::Ui, standards: &[&Standard]) {
    if standards.is_empty() {
        return;
    }

    let avail_w = ui.available_width().floor();
    let card_w = CARD_WIDTH;
    let gap = CARD_GAP;

    let mut cols = ((avail_w + gap) / (card_w + gap)).floor() as usize;
    if cols == 0 {
        cols = 1;
    }
    let cols = cols.min(standards.len());
    let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
    let left_pad = ((avail_w - row_w) / 2.0).max(0.0);

    for row in standards.chunks(cols) {
        ui.horizontal(|ui| {
            ui.add_space(left_pad);
            for (c, s) in row.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.set_min_width(card_w);
                    ui.set_max_width(card_w);
                    standard_card(ui, s, card_w);
                });
                if c + 1 < cols {
                    ui.add_space(gap);
                }
            }
        });
        ui.add_space(gap);
    }
}
