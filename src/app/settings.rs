// Settings store and viewport: UI zoom and the view shown at startup.
// Stored as pretty JSON next to the executable's working directory, loaded once
// at startup; missing or unreadable files keep the defaults.

use eframe::egui;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;
use strum::IntoEnumIterator;

use crate::types::View;

fn default_zoom() -> f32 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default = "default_zoom")]
    pub zoom: f32,
    // View shown when the app starts; per-view selections are never persisted.
    #[serde(default)]
    pub startup_view: View,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            startup_view: View::default(),
        }
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
    static ref SETTINGS_OPEN: RwLock<bool> = RwLock::new(false);
    // Staged inputs so Cancel can discard edits.
    static ref ZOOM_INPUT: RwLock<f32> = RwLock::new(default_zoom());
    static ref STARTUP_VIEW_INPUT: RwLock<View> = RwLock::new(View::Library);
}

fn settings_file_path() -> PathBuf {
    // Store settings in current working directory to avoid extra deps
    PathBuf::from("app_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let s: AppSettings = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(s)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            *APP_SETTINGS.write().unwrap() = s;
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default settings; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = APP_SETTINGS.read().unwrap().clone();
    if let Err(e) = st.save_to_file(&path) {
        log::error!("Failed to save settings to {}: {}", path.to_string_lossy(), e);
    } else {
        log::info!("Saved settings to {}", path.to_string_lossy());
    }
}

pub fn open_settings() {
    {
        let s = APP_SETTINGS.read().unwrap();
        *ZOOM_INPUT.write().unwrap() = s.zoom;
        *STARTUP_VIEW_INPUT.write().unwrap() = s.startup_view;
    }
    *SETTINGS_OPEN.write().unwrap() = true;
}

pub fn draw_settings_viewport(ctx: &egui::Context) {
    if !*SETTINGS_OPEN.read().unwrap() {
        return;
    }
    let viewport_id = egui::ViewportId::from_hash_of("settings_window");
    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title("Settings")
            .with_inner_size([420.0, 220.0])
            .with_resizable(false),
        move |ctx, _class| {
            // If user clicked the OS close (X), discard staged edits.
            if ctx.input(|i| i.viewport().close_requested()) {
                *SETTINGS_OPEN.write().unwrap() = false;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                ctx.request_repaint();
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("UI zoom:");
                    let mut zoom = *ZOOM_INPUT.read().unwrap();
                    if ui
                        .add(egui::Slider::new(&mut zoom, 0.75..=1.5).step_by(0.05))
                        .changed()
                    {
                        *ZOOM_INPUT.write().unwrap() = zoom;
                    }
                });

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label("Startup view:");
                    let mut staged = *STARTUP_VIEW_INPUT.read().unwrap();
                    let mut changed = false;
                    for v in View::iter() {
                        changed |= ui.radio_value(&mut staged, v, v.to_string()).changed();
                    }
                    if changed {
                        *STARTUP_VIEW_INPUT.write().unwrap() = staged;
                    }
                });

                ui.add_space(8.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        let zoom = *ZOOM_INPUT.read().unwrap();
                        {
                            let mut st = APP_SETTINGS.write().unwrap();
                            st.zoom = zoom;
                            st.startup_view = *STARTUP_VIEW_INPUT.read().unwrap();
                        }
                        save_settings_to_disk();
                        ctx.set_zoom_factor(zoom);
                        *SETTINGS_OPEN.write().unwrap() = false;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("Cancel").clicked() {
                        *SETTINGS_OPEN.write().unwrap() = false;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let path = std::env::temp_dir().join("standards-hub-settings-roundtrip.json");
        let settings = AppSettings {
            zoom: 1.25,
            startup_view: View::Compare,
        };
        settings.save_to_file(&path).expect("save settings");
        let loaded = AppSettings::load_from_file(&path).expect("load settings");
        assert_eq!(loaded, settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn loading_missing_file_errors() {
        let path = std::env::temp_dir().join("standards-hub-settings-missing.json");
        let _ = std::fs::remove_file(&path);
        assert!(AppSettings::load_from_file(&path).is_err());
    }
}
