use crate::app::EduApp;
use crate::render::DisplayMarkup;
use crate::ui::layout::two_button_row;
use crate::view_models::{AnswerAffordance, QuestionId, QuizView, toggle_label_for};
use egui::{Align, Context, Frame, Margin, RichText, TextEdit, Ui};
use egui_commonmark::CommonMarkViewer;

pub fn ui_response(app: &mut EduApp, ctx: &Context, ui: &mut Ui) {
    let Some(panel) = app.response.as_mut() else {
        return;
    };

    ui.add_space(16.0);
    ui.separator();

    let header = ui.heading(format!("{} result", panel.mode.label()));
    if panel.scroll_pending {
        header.scroll_to_me(Some(Align::Min));
        panel.scroll_pending = false;
    }
    if let Some(meta) = panel.metadata {
        ui.label(RichText::new(format!("{} questions", meta.question_count)).weak());
    }

    let (copy, download) = two_button_row(ui, 320.0, "📋 Copy", "💾 Download");

    ui.add_space(8.0);
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            match &mut panel.markup {
                DisplayMarkup::Markdown(source) => {
                    CommonMarkViewer::new().show(ui, &mut app.cm_cache, source);
                }
                DisplayMarkup::Quiz(view) => quiz_view(ui, view),
            }
        });

    if copy {
        app.copy_response(ctx);
    }
    if download {
        app.download_response();
    }
}

fn quiz_view(ui: &mut Ui, view: &mut QuizView) {
    if view.questions.is_empty() {
        ui.label("The quiz has no questions.");
        return;
    }

    let shown: Vec<bool> = view
        .questions
        .iter()
        .map(|q| view.is_explanation_visible(&q.id))
        .collect();
    let mut toggled: Option<QuestionId> = None;

    for (q, visible) in view.questions.iter_mut().zip(shown) {
        let key = q.id.clone();
        ui.push_id(key.as_str(), |ui| {
            ui.label(RichText::new(q.label()).strong());
            ui.label(&q.prompt);
            ui.add_space(4.0);

            let mut picked = None;
            match &mut q.affordance {
                AnswerAffordance::Choices { options, selected } => {
                    for (i, option) in options.iter().enumerate() {
                        if ui.radio(*selected == Some(i), option.as_str()).clicked() {
                            picked = Some(i);
                        }
                    }
                }
                AnswerAffordance::FreeText { input } => {
                    ui.add(
                        TextEdit::singleline(input)
                            .hint_text("Your answer")
                            .desired_width(f32::INFINITY),
                    );
                }
            }
            if let Some(choice) = picked {
                q.select(choice);
            }

            ui.add_space(4.0);
            if ui.button(toggle_label_for(visible)).clicked() {
                toggled = Some(key.clone());
            }
            if visible {
                Frame::NONE
                    .fill(ui.visuals().faint_bg_color)
                    .inner_margin(Margin::same(8))
                    .show(ui, |ui| {
                        ui.label(format!("Explanation: {}", q.explanation));
                        ui.label(
                            RichText::new(format!("Correct answer: {}", q.correct_answer))
                                .strong(),
                        );
                    });
            }
        });
        ui.add_space(12.0);
    }

    if let Some(id) = toggled {
        view.toggle_explanation_by_id(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    fn draw(view: &mut QuizView) {
        let ctx = Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| quiz_view(ui, view));
        });
    }

    #[test]
    fn idle_frame_leaves_quiz_state_untouched() {
        let DisplayMarkup::Quiz(mut view) = render(
            r#"{"questions":[
                {"id":1,"question":"Pick one","type":"multiple_choice","options":["A","B"]},
                {"question":"Explain","type":"short_answer"}
            ]}"#,
        ) else {
            panic!("expected quiz markup");
        };
        view.questions[0].select(1);

        draw(&mut view);
        draw(&mut view);

        assert!(matches!(
            view.questions[0].affordance,
            AnswerAffordance::Choices { selected: Some(1), .. }
        ));
        assert!(view.questions.iter().all(|q| !view.is_explanation_visible(&q.id)));
    }
}
