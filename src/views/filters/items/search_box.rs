use eframe::egui::{TextEdit, Ui};

/// Full-width search input. Returns true if the text changed this frame.
pub fn search_box(ui: &mut Ui, text: &mut String) -> bool {
    let w = ui.available_width();
    let resp = ui.add_sized(
        [w, 0.0],
        TextEdit::singleline(text).hint_text("Search standards, topics, or keywords..."),
    );
    resp.changed()
}
