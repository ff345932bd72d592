// src/ui/helpers.rs
use crate::app::UiState;
use crate::model::DifficultyLevel;
use egui::{Button, RichText, Spinner, TextEdit, Ui, Vec2};

pub fn topic_input(ui: &mut Ui, id: &str, hint: &str, topic: &mut String) {
    ui.add(
        TextEdit::multiline(topic)
            .id_salt(id)
            .hint_text(hint)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
}

/// One button per offered level; the selected one is highlighted.
pub fn difficulty_selector(ui: &mut Ui, state: &mut UiState, levels: &[DifficultyLevel]) {
    ui.horizontal(|ui| {
        ui.label("Difficulty:");
        for &level in levels {
            let active = state.is_difficulty_active(level);
            if ui.selectable_label(active, level.label()).clicked() {
                state.set_difficulty(level);
            }
        }
    });
}

/// Submit button, disabled while a request is in flight.
pub fn submit_button(ui: &mut Ui, label: &str, busy: bool) -> bool {
    ui.add_space(8.0);
    ui.add_enabled(!busy, Button::new(label).min_size(Vec2::new(180.0, 36.0)))
        .clicked()
}

pub fn busy_indicator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.add(Spinner::new());
        ui.label(RichText::new("Generating...").italics());
    });
}
