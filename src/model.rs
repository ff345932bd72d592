use serde::{Deserialize, Deserializer, Serialize};

/// Content-generation task the user is invoking. One tab per mode.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Explanation,
    Quiz,
    TeachingNotes,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Explanation, Mode::Quiz, Mode::TeachingNotes];

    /// Tab identifier, also used in the download file name.
    pub fn tab_id(self) -> &'static str {
        match self {
            Mode::Explanation => "explain",
            Mode::Quiz => "quiz",
            Mode::TeachingNotes => "notes",
        }
    }

    pub fn from_tab_id(tab_id: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|m| m.tab_id() == tab_id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Explanation => "📖 Explain Topic",
            Mode::Quiz => "❓ Generate Quiz",
            Mode::TeachingNotes => "📝 Teaching Notes",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::Explanation => "/api/explain",
            Mode::Quiz => "/api/generate-quiz",
            Mode::TeachingNotes => "/api/teaching-notes",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
        }
    }
}

/// Optional question-type preference for quizzes. The backend falls back to
/// its own default when the field is omitted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTypes {
    TrueFalse,
    MultipleChoice,
    OpenEnded,
    Mixed,
}

/// `type` tag of a generated question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionTag {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    OpenEnded,
    Unknown,
}

impl QuestionTag {
    pub fn parse(tag: &str) -> QuestionTag {
        match tag.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "multiple_choice" => QuestionTag::MultipleChoice,
            "true_false" => QuestionTag::TrueFalse,
            "short_answer" => QuestionTag::ShortAnswer,
            "open_ended" => QuestionTag::OpenEnded,
            _ => QuestionTag::Unknown,
        }
    }
}

/// How a question is answered once rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerKind {
    MultipleChoice,
    ShortAnswer,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Question {
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_optional_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub explanation: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub correct_answer: String,
}

impl Question {
    pub fn tag(&self) -> Option<QuestionTag> {
        self.kind.as_deref().map(QuestionTag::parse)
    }

    pub fn answer_kind(&self) -> AnswerKind {
        match self.tag() {
            Some(QuestionTag::MultipleChoice) if !self.options.is_empty() => {
                AnswerKind::MultipleChoice
            }
            Some(QuestionTag::TrueFalse) => AnswerKind::MultipleChoice,
            None if !self.options.is_empty() => AnswerKind::MultipleChoice,
            _ => AnswerKind::ShortAnswer,
        }
    }

    /// Options to offer for a choice question. True/false questions without
    /// explicit options get the two canonical ones.
    pub fn choice_options(&self) -> Vec<String> {
        if self.options.is_empty() && self.tag() == Some(QuestionTag::TrueFalse) {
            vec!["True".to_string(), "False".to_string()]
        } else {
            self.options.clone()
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizMetadata {
    pub question_count: usize,
}

// Model output is not always well typed: answers come back as `true` or `4`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| scalar_to_string(&value)))
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items.iter().map(scalar_to_string).collect(),
        serde_json::Value::Null => Vec::new(),
        other => vec![scalar_to_string(&other)],
    })
}

fn scalar_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_ids_round_trip_to_modes() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_tab_id(mode.tab_id()), Some(mode));
        }
        assert_eq!(Mode::from_tab_id("settings"), None);
    }

    #[test]
    fn defaults_match_initial_page_state() {
        assert_eq!(Mode::default(), Mode::Explanation);
        assert_eq!(DifficultyLevel::default(), DifficultyLevel::Easy);
    }

    #[test]
    fn question_decodes_scalar_answers_and_options() {
        let q: Question = serde_json::from_str(
            r#"{"question":"2+2?","type":"multiple_choice","options":[3,4,5],"correct_answer":4}"#,
        )
        .unwrap();
        assert_eq!(q.options, vec!["3", "4", "5"]);
        assert_eq!(q.correct_answer, "4");
        assert_eq!(q.explanation, "");
        assert_eq!(q.answer_kind(), AnswerKind::MultipleChoice);
    }

    #[test]
    fn true_false_without_options_offers_both_choices() {
        let q: Question =
            serde_json::from_str(r#"{"question":"Sky is blue","type":"true_false","correct_answer":true}"#)
                .unwrap();
        assert_eq!(q.answer_kind(), AnswerKind::MultipleChoice);
        assert_eq!(q.choice_options(), vec!["True", "False"]);
        assert_eq!(q.correct_answer, "true");
    }

    #[test]
    fn numeric_ids_and_tags_are_stringified() {
        let q: Question =
            serde_json::from_str(r#"{"id":7,"question":"Q","type":null,"options":["a","b"]}"#)
                .unwrap();
        assert_eq!(q.id.as_deref(), Some("7"));
        assert_eq!(q.kind, None);
        assert_eq!(q.answer_kind(), AnswerKind::MultipleChoice);

        let odd: Question = serde_json::from_str(r#"{"id":null,"type":3}"#).unwrap();
        assert_eq!(odd.id, None);
        assert_eq!(odd.tag(), Some(QuestionTag::Unknown));
    }

    #[test]
    fn unknown_or_open_tags_are_free_text() {
        let open: Question = serde_json::from_str(r#"{"type":"open_ended"}"#).unwrap();
        let odd: Question = serde_json::from_str(r#"{"type":"essay"}"#).unwrap();
        let bare_choice: Question = serde_json::from_str(r#"{"type":"multiple_choice"}"#).unwrap();
        assert_eq!(open.answer_kind(), AnswerKind::ShortAnswer);
        assert_eq!(odd.tag(), Some(QuestionTag::Unknown));
        assert_eq!(odd.answer_kind(), AnswerKind::ShortAnswer);
        assert_eq!(bare_choice.answer_kind(), AnswerKind::ShortAnswer);
    }
}
