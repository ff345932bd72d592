use crate::api::{ModeFields, RawResponse, SubmissionRequest};
use crate::config::ApiConfig;
use crate::data::{FormPresets, form_presets_or_default};
use crate::dispatch::BusyFlag;
use crate::error::SubmitError;
use crate::model::{DifficultyLevel, Mode, QuestionTypes, QuizMetadata};
use crate::render::DisplayMarkup;
use egui_commonmark::CommonMarkCache;
use std::sync::mpsc::Receiver;

// Handlers
pub mod actions;
pub mod navigation;

/// Tab and difficulty selection. Handlers in `navigation` take it explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Mode,
    pub difficulty: DifficultyLevel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainForm {
    pub topic: String,
    pub grade_level: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizForm {
    pub topic: String,
    pub num_questions: u32,
    pub question_types: Option<QuestionTypes>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesForm {
    pub topic: String,
    pub duration_minutes: u32,
}

/// Inputs of the three tabs. Each tab keeps its own topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forms {
    pub explain: ExplainForm,
    pub quiz: QuizForm,
    pub notes: NotesForm,
}

impl Forms {
    pub fn from_presets(presets: &FormPresets) -> Self {
        Self {
            explain: ExplainForm {
                topic: String::new(),
                grade_level: presets.default_grade_level.clone(),
            },
            quiz: QuizForm {
                topic: String::new(),
                num_questions: presets.num_questions.clamp(presets.num_questions.default),
                question_types: None,
            },
            notes: NotesForm {
                topic: String::new(),
                duration_minutes: presets
                    .duration_minutes
                    .clamp(presets.duration_minutes.default),
            },
        }
    }

    /// Snapshot of the active form as a request. Not validated yet.
    pub fn request_for(&self, state: UiState) -> SubmissionRequest {
        match state.active_tab {
            Mode::Explanation => SubmissionRequest::new(
                self.explain.topic.clone(),
                ModeFields::Explanation {
                    grade_level: self.explain.grade_level.clone(),
                },
            ),
            Mode::Quiz => SubmissionRequest::new(
                self.quiz.topic.clone(),
                ModeFields::Quiz {
                    difficulty: state.difficulty,
                    num_questions: self.quiz.num_questions,
                    question_types: self.quiz.question_types,
                },
            ),
            Mode::TeachingNotes => SubmissionRequest::new(
                self.notes.topic.clone(),
                ModeFields::TeachingNotes {
                    duration_minutes: self.notes.duration_minutes,
                },
            ),
        }
    }
}

/// Rendered answer of the last successful submission. Present means visible.
#[derive(Clone, Debug)]
pub struct ResponsePanel {
    pub mode: Mode,
    pub markup: DisplayMarkup,
    pub metadata: Option<QuizMetadata>,
    pub scroll_pending: bool,
}

/// Blocking notification, dismissed with OK.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

pub type SubmissionResult = Result<RawResponse, SubmitError>;

pub struct PendingSubmission {
    pub mode: Mode,
    pub rx: Receiver<SubmissionResult>,
}

pub struct EduApp {
    pub ui: UiState,
    pub forms: Forms,
    pub presets: FormPresets,
    pub api: ApiConfig,
    pub busy: BusyFlag,
    pub pending: Option<PendingSubmission>,
    pub response: Option<ResponsePanel>,
    pub notice: Option<Notice>,
    pub message: String,
    pub cm_cache: CommonMarkCache,
}

impl EduApp {
    pub fn new() -> Self {
        Self::with_config(ApiConfig::resolve(), form_presets_or_default())
    }

    pub fn with_config(api: ApiConfig, presets: FormPresets) -> Self {
        let ui = UiState {
            active_tab: Mode::default(),
            difficulty: presets.difficulties.first().copied().unwrap_or_default(),
        };
        Self {
            ui,
            forms: Forms::from_presets(&presets),
            presets,
            api,
            busy: BusyFlag::new(),
            pending: None,
            response: None,
            notice: None,
            message: String::new(),
            cm_cache: CommonMarkCache::default(),
        }
    }

    /// Spinner visibility. Also covers the moment between dispatch and the
    /// worker raising the flag.
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy() || self.pending.is_some()
    }
}

impl Default for EduApp {
    fn default() -> Self {
        Self::new()
    }
}
