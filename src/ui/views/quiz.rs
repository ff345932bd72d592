use crate::app::EduApp;
use crate::ui::helpers::{difficulty_selector, submit_button, topic_input};
use egui::{ComboBox, Context, Slider, Ui};

pub fn ui_quiz_form(app: &mut EduApp, ctx: &Context, ui: &mut Ui) {
    ui.heading("Generate a quiz");
    ui.add_space(8.0);

    topic_input(
        ui,
        "quiz-input",
        "Enter a topic for the quiz...",
        &mut app.forms.quiz.topic,
    );

    ui.add_space(6.0);
    difficulty_selector(ui, &mut app.ui, &app.presets.difficulties);

    let range = app.presets.num_questions;
    ui.add(
        Slider::new(&mut app.forms.quiz.num_questions, range.min..=range.max)
            .text("questions"),
    );

    if !app.presets.question_types.is_empty() {
        let form = &mut app.forms.quiz;
        let selected = form
            .question_types
            .and_then(|id| app.presets.question_types.iter().find(|o| o.id == id))
            .map_or("Server default", |o| o.label.as_str());
        ComboBox::from_label("Question types")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut form.question_types, None, "Server default");
                for option in &app.presets.question_types {
                    ui.selectable_value(
                        &mut form.question_types,
                        Some(option.id),
                        option.label.as_str(),
                    );
                }
            });
    }

    if submit_button(ui, "✨ Generate Quiz", app.is_busy()) {
        app.submit_active(ctx);
    }
}
