use crate::app::EduApp;
use crate::ui::helpers::{submit_button, topic_input};
use egui::{ComboBox, Context, Ui};

pub fn ui_explain(app: &mut EduApp, ctx: &Context, ui: &mut Ui) {
    ui.heading("Explain a topic");
    ui.add_space(8.0);

    topic_input(
        ui,
        "explain-input",
        "Enter a topic to explain...",
        &mut app.forms.explain.topic,
    );

    ui.add_space(6.0);
    let form = &mut app.forms.explain;
    ComboBox::from_label("Grade level")
        .selected_text(form.grade_level.as_str())
        .show_ui(ui, |ui| {
            for grade in &app.presets.grade_levels {
                ui.selectable_value(&mut form.grade_level, grade.clone(), grade.as_str());
            }
        });

    if submit_button(ui, "✨ Generate Explanation", app.is_busy()) {
        app.submit_active(ctx);
    }
}
