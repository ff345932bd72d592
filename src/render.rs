//! Response classification: a raw backend answer is either a structured quiz
//! or free-form markdown.

use crate::model::Quiz;
use crate::view_models::{QuizView, render_quiz};
use serde_json::Value;

/// What the response panel shows.
#[derive(Clone, Debug)]
pub enum DisplayMarkup {
    /// Markdown source, drawn by `egui_commonmark` at paint time.
    Markdown(String),
    Quiz(QuizView),
}

impl DisplayMarkup {
    pub fn is_quiz(&self) -> bool {
        matches!(self, DisplayMarkup::Quiz(_))
    }

    /// The displayed response as plain text.
    pub fn plain_text(&self) -> String {
        match self {
            DisplayMarkup::Markdown(source) => source.clone(),
            DisplayMarkup::Quiz(view) => view.plain_text(),
        }
    }
}

pub fn render_markdown(text: &str) -> DisplayMarkup {
    DisplayMarkup::Markdown(text.to_string())
}

/// True when `value` is an object with a non-null `questions` field.
pub fn has_questions(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|obj| obj.get("questions"))
        .is_some_and(|q| !q.is_null())
}

/// Classifies `raw` structurally, regardless of which mode produced it.
pub fn render(raw: &str) -> DisplayMarkup {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => return render_markdown(raw),
    };

    if !has_questions(&value) {
        log::debug!("Structured response without questions, rendering as text");
        return render_markdown(raw);
    }

    match serde_json::from_value::<Quiz>(value) {
        Ok(quiz) => DisplayMarkup::Quiz(render_quiz(&quiz)),
        Err(e) => {
            log::warn!("Malformed questions in quiz payload, rendering as text: {e}");
            render_markdown(raw)
        }
    }
}
