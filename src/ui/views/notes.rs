use crate::app::EduApp;
use crate::ui::helpers::{submit_button, topic_input};
use egui::{Context, DragValue, Ui};

pub fn ui_notes(app: &mut EduApp, ctx: &Context, ui: &mut Ui) {
    ui.heading("Teaching notes");
    ui.add_space(8.0);

    topic_input(
        ui,
        "notes-input",
        "Enter the lesson topic...",
        &mut app.forms.notes.topic,
    );

    ui.add_space(6.0);
    let range = app.presets.duration_minutes;
    ui.horizontal(|ui| {
        ui.label("Lesson duration:");
        ui.add(
            DragValue::new(&mut app.forms.notes.duration_minutes)
                .range(range.min..=range.max)
                .speed(5)
                .suffix(" minutes"),
        );
    });

    if submit_button(ui, "✨ Generate Notes", app.is_busy()) {
        app.submit_active(ctx);
    }
}
