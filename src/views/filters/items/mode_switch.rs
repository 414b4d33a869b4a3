use eframe::egui::{
    self, text::LayoutJob, Color32, FontId, PointerButton, RichText, Sense, TextFormat, Ui,
};
use strum::{EnumCount, IntoEnumIterator};

/// Stateless header-like mode switcher:
/// - Left: title (weak)
/// - Right: clickable enum variants in uppercase, separated by " / "
/// Returns Some(new_mode) if user changed it this frame.
pub fn mode_switch<T>(ui: &mut Ui, name: &str, current: &T) -> Option<T>
where
    T: IntoEnumIterator + EnumCount + PartialEq + Clone + ToString,
{
    let mut changed_to: Option<T> = None;

    ui.horizontal(|ui| {
        ui.add(egui::Label::new(RichText::new(name).weak()).selectable(false));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let variants: Vec<T> = T::iter().collect();
            if variants.is_empty() {
                return;
            }

            let accent = Color32::from_rgb(210, 85, 85);
            let inactive = Color32::from_gray(140);
            let slash_col = Color32::from_rgb(214, 120, 120);
            let font = FontId::proportional(14.0);

            // Build multi-style text: "LIBRARY / COMPARE"
            let mut job = LayoutJob::default();
            for (i, v) in variants.iter().enumerate() {
                let is_active = *v == *current;
                let color = if is_active { accent } else { inactive };

                job.append(
                    &v.to_string().to_uppercase(),
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color,
                        ..Default::default()
                    },
                );
                if i + 1 < variants.len() {
                    job.append(
                        " / ",
                        0.0,
                        TextFormat {
                            font_id: font.clone(),
                            color: slash_col,
                            ..Default::default()
                        },
                    );
                }
            }

            let response = ui
                .add(egui::Label::new(job).sense(Sense::click()).selectable(false))
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            // Click to cycle (primary forward, secondary backward)
            if response.clicked_by(PointerButton::Primary) {
                let idx = variants.iter().position(|x| x == current).unwrap_or(0);
                changed_to = Some(variants[(idx + 1) % variants.len()].clone());
            } else if response.clicked_by(PointerButton::Secondary) {
                let idx = variants.iter().position(|x| x == current).unwrap_or(0);
                changed_to = Some(variants[(idx + variants.len() - 1) % variants.len()].clone());
            }
        });
    });

    changed_to
}
