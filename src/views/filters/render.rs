use eframe::egui::{self, Layout, RichText};

use crate::types::{CompareFilter, View};
use crate::views::filters::items::{
    mode_switch::mode_switch, search_box::search_box, segmented_panel::segmented_panel,
};

/// Draws the right-side controls panel: view switcher on top, then the active
/// view's controls, utility buttons pinned to the bottom.
/// Selection state is passed in by mutable references and updated in-place.
/// Returns (switched_view, settings_clicked, logs_clicked, about_clicked).
pub fn draw_controls_panel(
    ctx: &egui::Context,
    current_view: View,
    query: &mut String,
    filter: &mut CompareFilter,
) -> (Option<View>, bool, bool, bool) {
    let mut switched: Option<View> = None;
    let mut settings_clicked = false;
    let mut logs_clicked = false;
    let mut about_clicked = false;

    egui::SidePanel::right("controls_panel")
        .frame(
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(30, 30, 30))
                .inner_margin(10.0),
        )
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new("Standards Hub").strong());
            ui.separator();

            // VIEW
            if let Some(new_view) = mode_switch(ui, "VIEW", &current_view) {
                switched = Some(new_view);
            }

            ui.separator();

            match current_view {
                View::Library => {
                    ui.label(RichText::new("SEARCH").weak());
                    let _ = search_box(ui, query);
                }
                View::Compare => {
                    if segmented_panel(ui, "TOPICS", filter) {
                        log::debug!("compare filter set to {filter:?}");
                    }
                }
            }

            ui.add_space(8.0);
            ui.with_layout(Layout::bottom_up(egui::Align::LEFT), |ui| {
                if ui.button("Logs").clicked() {
                    logs_clicked = true;
                }
                if ui.button("Settings").clicked() {
                    settings_clicked = true;
                }
                if ui.button("About").clicked() {
                    about_clicked = true;
                }
            });
        });

    (switched, settings_clicked, logs_clicked, about_clicked)
}
