// src/view_models.rs

use crate::model::{AnswerKind, Question, Quiz};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// Stable key of a rendered question. Explanation visibility is keyed by this,
/// not by position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerAffordance {
    /// Radio group: at most one option selected per question.
    Choices {
        options: Vec<String>,
        selected: Option<usize>,
    },
    FreeText { input: String },
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub id: QuestionId,
    pub number: usize, // 1-based label
    pub prompt: String,
    pub affordance: AnswerAffordance,
    pub explanation: String,
    pub correct_answer: String,
}

impl QuestionView {
    pub fn kind(&self) -> AnswerKind {
        match self.affordance {
            AnswerAffordance::Choices { .. } => AnswerKind::MultipleChoice,
            AnswerAffordance::FreeText { .. } => AnswerKind::ShortAnswer,
        }
    }

    pub fn label(&self) -> String {
        format!("Question {}", self.number)
    }

    /// Selects option `choice`, replacing any previous selection.
    pub fn select(&mut self, choice: usize) -> bool {
        match &mut self.affordance {
            AnswerAffordance::Choices { options, selected } if choice < options.len() => {
                *selected = Some(choice);
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct QuizView {
    pub questions: Vec<QuestionView>,
    shown: HashMap<QuestionId, bool>,
}

pub const SHOW_EXPLANATION: &str = "Show Explanation";
pub const HIDE_EXPLANATION: &str = "Hide Explanation";

pub fn toggle_label_for(shown: bool) -> &'static str {
    if shown { HIDE_EXPLANATION } else { SHOW_EXPLANATION }
}

/// Builds the interactive view for a quiz, one block per question in input
/// order. Every explanation starts hidden.
pub fn render_quiz(quiz: &Quiz) -> QuizView {
    let mut seen = HashSet::new();
    let questions: Vec<QuestionView> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| question_view(i + 1, q, &mut seen))
        .collect();
    let shown = questions.iter().map(|q| (q.id.clone(), false)).collect();
    QuizView { questions, shown }
}

fn question_view(number: usize, q: &Question, seen: &mut HashSet<QuestionId>) -> QuestionView {
    let affordance = match q.answer_kind() {
        AnswerKind::MultipleChoice => AnswerAffordance::Choices {
            options: q.choice_options(),
            selected: None,
        },
        AnswerKind::ShortAnswer => AnswerAffordance::FreeText {
            input: String::new(),
        },
    };
    QuestionView {
        id: unique_id(base_id(q), seen),
        number,
        prompt: q.question.clone(),
        affordance,
        explanation: q.explanation.clone(),
        correct_answer: q.correct_answer.clone(),
    }
}

fn base_id(q: &Question) -> String {
    match q.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let mut hasher = DefaultHasher::new();
            q.question.hash(&mut hasher);
            format!("q-{:016x}", hasher.finish())
        }
    }
}

// Repeated ids get an occurrence suffix: "x", "x#2", "x#3".
fn unique_id(base: String, seen: &mut HashSet<QuestionId>) -> QuestionId {
    let mut candidate = QuestionId(base.clone());
    let mut n = 1;
    while seen.contains(&candidate) {
        n += 1;
        candidate = QuestionId(format!("{base}#{n}"));
    }
    seen.insert(candidate.clone());
    candidate
}

impl QuizView {
    pub fn is_explanation_visible(&self, id: &QuestionId) -> bool {
        self.shown.get(id).copied().unwrap_or(false)
    }

    pub fn toggle_label(&self, id: &QuestionId) -> &'static str {
        toggle_label_for(self.is_explanation_visible(id))
    }

    pub fn id_at(&self, index: usize) -> Option<&QuestionId> {
        self.questions.get(index).map(|q| &q.id)
    }

    /// Flips the explanation of the question at 0-based `index` only.
    /// Returns false when there is no such question.
    pub fn toggle_explanation(&mut self, index: usize) -> bool {
        match self.id_at(index).cloned() {
            Some(id) => self.toggle_explanation_by_id(&id),
            None => false,
        }
    }

    pub fn toggle_explanation_by_id(&mut self, id: &QuestionId) -> bool {
        match self.shown.get_mut(id) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    /// Text listing of the quiz, for copy and download.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for q in &self.questions {
            out.push_str(&format!("{}\n{}\n", q.label(), q.prompt));
            if let AnswerAffordance::Choices { options, .. } = &q.affordance {
                for option in options {
                    out.push_str(&format!("  - {option}\n"));
                }
            }
            out.push_str(&format!(
                "Explanation: {}\nCorrect answer: {}\n\n",
                q.explanation, q.correct_answer
            ));
        }
        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(json: &str) -> Quiz {
        serde_json::from_str(json).unwrap()
    }

    fn sample() -> QuizView {
        render_quiz(&quiz(
            r#"{"questions":[
                {"question":"Capital of France?","type":"multiple_choice","options":["Paris","Rome"],"explanation":"It is Paris.","correct_answer":"Paris"},
                {"question":"Define osmosis","type":"short_answer","explanation":"Water movement","correct_answer":"Diffusion of water"},
                {"question":"The sun is a star","type":"true_false","explanation":"G-type","correct_answer":"True"}
            ]}"#,
        ))
    }

    #[test]
    fn questions_keep_input_order_with_one_based_labels() {
        let view = sample();
        let prompts: Vec<_> = view.questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, ["Capital of France?", "Define osmosis", "The sun is a star"]);
        assert_eq!(view.questions[0].label(), "Question 1");
        assert_eq!(view.questions[2].label(), "Question 3");
    }

    #[test]
    fn affordances_follow_answer_mode() {
        let view = sample();
        assert_eq!(
            view.questions[0].affordance,
            AnswerAffordance::Choices {
                options: vec!["Paris".into(), "Rome".into()],
                selected: None
            }
        );
        assert_eq!(view.questions[1].kind(), AnswerKind::ShortAnswer);
        assert_eq!(view.questions[2].kind(), AnswerKind::MultipleChoice);
    }

    #[test]
    fn explanations_start_hidden() {
        let view = sample();
        for q in &view.questions {
            assert!(!view.is_explanation_visible(&q.id));
            assert_eq!(view.toggle_label(&q.id), SHOW_EXPLANATION);
        }
    }

    #[test]
    fn toggle_flips_only_the_addressed_question() {
        let mut view = sample();
        assert!(view.toggle_explanation(1));

        let ids: Vec<_> = view.questions.iter().map(|q| q.id.clone()).collect();
        assert!(!view.is_explanation_visible(&ids[0]));
        assert!(view.is_explanation_visible(&ids[1]));
        assert_eq!(view.toggle_label(&ids[1]), HIDE_EXPLANATION);
        assert!(!view.is_explanation_visible(&ids[2]));

        assert!(view.toggle_explanation(1));
        assert!(!view.is_explanation_visible(&ids[1]));
        assert_eq!(view.toggle_label(&ids[1]), SHOW_EXPLANATION);
    }

    #[test]
    fn toggle_out_of_range_is_rejected() {
        let mut view = sample();
        assert!(!view.toggle_explanation(3));
        assert!(view.questions.iter().all(|q| !view.is_explanation_visible(&q.id)));
    }

    #[test]
    fn duplicate_questions_get_distinct_ids() {
        let view = render_quiz(&quiz(
            r#"{"questions":[{"question":"Same?"},{"question":"Same?"},{"id":"k","question":"x"},{"id":"k","question":"y"}]}"#,
        ));
        assert_ne!(view.questions[0].id, view.questions[1].id);
        assert_eq!(view.questions[2].id.as_str(), "k");
        assert_eq!(view.questions[3].id.as_str(), "k#2");

        let mut view = view;
        view.toggle_explanation(1);
        assert!(!view.is_explanation_visible(&view.questions[0].id.clone()));
        assert!(view.is_explanation_visible(&view.questions[1].id.clone()));
    }

    #[test]
    fn state_survives_reordering_of_blocks() {
        let mut view = sample();
        let osmosis = view.questions[1].id.clone();
        view.toggle_explanation_by_id(&osmosis);
        view.questions.reverse();
        assert!(view.is_explanation_visible(&osmosis));
        assert_eq!(view.id_at(1), Some(&osmosis));
    }

    #[test]
    fn selecting_replaces_previous_choice() {
        let mut view = sample();
        let q = &mut view.questions[0];
        assert!(q.select(0));
        assert!(q.select(1));
        assert!(!q.select(5));
        assert!(matches!(
            q.affordance,
            AnswerAffordance::Choices { selected: Some(1), .. }
        ));
        assert!(!view.questions[1].select(0));
    }

    #[test]
    fn plain_text_lists_questions_and_answers() {
        let text = sample().plain_text();
        assert!(text.starts_with("Question 1\nCapital of France?\n  - Paris\n  - Rome\n"));
        assert!(text.contains("Correct answer: Diffusion of water"));
    }
}
