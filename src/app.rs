// App shell: holds the current view plus each view's private selection state
// and drives the frame. Controls live in the right panel, records in the
// central panel; secondary windows (settings/logs/about) draw at the end.

use eframe::egui::RichText;
use eframe::{egui, App};

use crate::standards::{filter_standards, filter_topics, COMPARISON_TOPICS, STANDARDS};
use crate::types::View;
use crate::ui_constants::spacing;
use crate::views::cards::topic_card;
use crate::views::filters::draw_controls_panel;

mod about_ui;
mod grid;
mod logs_ui;
pub mod settings;
mod state;

use state::{CompareState, LibraryState};

pub struct StandardsHubApp {
    view: View,
    library: LibraryState,
    compare: CompareState,
}

impl Default for StandardsHubApp {
    fn default() -> Self {
        let view = { settings::APP_SETTINGS.read().unwrap().startup_view };
        Self {
            view,
            library: LibraryState::default(),
            compare: CompareState::default(),
        }
    }
}

impl App for StandardsHubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the Logs window fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        // Right panel: view switcher and the active view's controls
        let (switched, open_settings, open_logs, open_about) = draw_controls_panel(
            ctx,
            self.view,
            &mut self.library.query,
            &mut self.compare.filter,
        );

        if let Some(next) = switched {
            if next != self.view {
                // A view's selection starts fresh every time it is entered.
                match next {
                    View::Library => self.library = LibraryState::default(),
                    View::Compare => self.compare = CompareState::default(),
                }
                self.view = next;
                log::debug!("switched to {next} view");
            }
        }
        if open_settings {
            settings::open_settings();
            ctx.request_repaint();
        }
        if open_logs {
            logs_ui::open_logs();
            ctx.request_repaint();
        }
        if open_about {
            about_ui::open_about();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.view {
                    View::Library => self.draw_library(ui),
                    View::Compare => self.draw_compare(ui),
                });
        });

        // Secondary windows (separate OS viewports)
        logs_ui::draw_logs_viewport(ctx);
        about_ui::draw_about_viewport(ctx);
        settings::draw_settings_viewport(ctx);
    }
}

impl StandardsHubApp {
    fn draw_library(&mut self, ui: &mut egui::Ui) {
        ui.add_space(spacing::MEDIUM);
        ui.heading("Standards Library");
        ui.label(
            RichText::new("Explore the three major project management standards and their key concepts")
                .weak(),
        );
        ui.add_space(spacing::LARGE);

        let matches = filter_standards(&STANDARDS, &self.library.query);
        if matches.is_empty() {
            // Normal empty state, not an error.
            ui.add_space(spacing::XLARGE);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No standards found matching your search.").weak());
            });
        } else {
            grid::draw_standards_grid(ui, &matches);
        }
    }

    fn draw_compare(&mut self, ui: &mut egui::Ui) {
        ui.add_space(spacing::MEDIUM);
        ui.heading("Compare Topics");
        ui.label(
            RichText::new("See how PMBOK 7, PRINCE2, and ISO 21500 address key project management topics")
                .weak(),
        );
        ui.add_space(spacing::LARGE);

        for topic in filter_topics(&COMPARISON_TOPICS, self.compare.filter) {
            topic_card(ui, topic);
            ui.add_space(spacing::LARGE);
        }
    }
}
