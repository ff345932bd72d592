// src/data.rs

use crate::model::{DifficultyLevel, QuestionTypes};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Range {
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionTypeOption {
    pub id: QuestionTypes,
    pub label: String,
}

/// Choices offered by the three forms.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FormPresets {
    pub grade_levels: Vec<String>,
    pub default_grade_level: String,
    pub difficulties: Vec<DifficultyLevel>,
    pub num_questions: Range,
    pub duration_minutes: Range,
    #[serde(default)]
    pub question_types: Vec<QuestionTypeOption>,
}

impl Default for FormPresets {
    fn default() -> Self {
        Self {
            grade_levels: vec!["General".to_string()],
            default_grade_level: "General".to_string(),
            difficulties: vec![
                DifficultyLevel::Easy,
                DifficultyLevel::Medium,
                DifficultyLevel::Hard,
            ],
            num_questions: Range { min: 1, max: 20, default: 5 },
            duration_minutes: Range { min: 15, max: 180, default: 60 },
            question_types: Vec::new(),
        }
    }
}

/// Loads the form presets embedded at build time.
pub fn read_form_presets() -> Result<FormPresets, serde_yaml::Error> {
    let file_content = include_str!("data/form_presets.yaml");
    serde_yaml::from_str(file_content)
}

/// Same as [`read_form_presets`], falling back to built-in defaults.
pub fn form_presets_or_default() -> FormPresets {
    read_form_presets().unwrap_or_else(|e| {
        log::error!("Embedded form presets are invalid, using defaults: {e}");
        FormPresets::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_presets_parse() {
        let presets = read_form_presets().unwrap();
        assert!(presets.grade_levels.contains(&presets.default_grade_level));
        assert_eq!(presets.difficulties.first(), Some(&DifficultyLevel::Easy));
        assert_eq!(presets.num_questions.default, 5);
        assert_eq!(presets.duration_minutes.default, 60);
        assert!(
            presets
                .question_types
                .iter()
                .any(|q| q.id == QuestionTypes::TrueFalse)
        );
    }

    #[test]
    fn range_clamps_out_of_bounds_values() {
        let r = Range { min: 1, max: 20, default: 5 };
        assert_eq!(r.clamp(0), 1);
        assert_eq!(r.clamp(50), 20);
        assert_eq!(r.clamp(7), 7);
    }
}
