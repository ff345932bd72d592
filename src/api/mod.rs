//! Wire contract with the content-generation backend.
//!
//! Three POST endpoints share one response envelope, `{"response": "..."}`.
//! Failures come back as `{"error": "..."}` with a non-success status.

use crate::error::{RequestError, ValidationError};
use crate::model::{DifficultyLevel, Mode, QuestionTypes, QuizMetadata};
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

/// Parameters that depend on the selected mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModeFields {
    Explanation {
        grade_level: String,
    },
    Quiz {
        difficulty: DifficultyLevel,
        num_questions: u32,
        question_types: Option<QuestionTypes>,
    },
    TeachingNotes {
        duration_minutes: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub topic: String,
    pub fields: ModeFields,
}

#[derive(Serialize)]
struct ExplainPayload<'a> {
    text: &'a str,
    grade_level: &'a str,
}

#[derive(Serialize)]
struct QuizPayload<'a> {
    text: &'a str,
    difficulty: DifficultyLevel,
    num_questions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    question_types: Option<QuestionTypes>,
}

#[derive(Serialize)]
struct NotesPayload<'a> {
    text: &'a str,
    duration: String,
}

impl SubmissionRequest {
    pub fn new(topic: impl Into<String>, fields: ModeFields) -> Self {
        Self {
            topic: topic.into(),
            fields,
        }
    }

    pub fn mode(&self) -> Mode {
        match self.fields {
            ModeFields::Explanation { .. } => Mode::Explanation,
            ModeFields::Quiz { .. } => Mode::Quiz,
            ModeFields::TeachingNotes { .. } => Mode::TeachingNotes,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.mode().endpoint()
    }

    /// The topic must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic.trim().is_empty() {
            Err(ValidationError::EmptyTopic)
        } else {
            Ok(())
        }
    }

    /// JSON body for the mode's endpoint. The topic goes out trimmed.
    pub fn payload(&self) -> Result<serde_json::Value, RequestError> {
        let text = self.topic.trim();
        let value = match &self.fields {
            ModeFields::Explanation { grade_level } => {
                serde_json::to_value(ExplainPayload { text, grade_level })
            }
            ModeFields::Quiz {
                difficulty,
                num_questions,
                question_types,
            } => serde_json::to_value(QuizPayload {
                text,
                difficulty: *difficulty,
                num_questions: num_questions.to_string(),
                question_types: *question_types,
            }),
            ModeFields::TeachingNotes { duration_minutes } => {
                serde_json::to_value(NotesPayload {
                    text,
                    duration: format!("{duration_minutes} minutes"),
                })
            }
        };
        value.map_err(|e| RequestError::Encode {
            endpoint: self.endpoint().to_string(),
            message: e.to_string(),
        })
    }
}

/// Status and body of one HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One POST with a JSON body. Implementations must not retry.
pub trait Transport {
    fn post_json(&self, endpoint: &str, body: &serde_json::Value)
    -> Result<HttpReply, RequestError>;
}

/// The backend's answer for a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub text: String,
    pub metadata: Option<QuizMetadata>,
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    response: String,
    #[serde(default)]
    metadata: Option<QuizMetadata>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Turns an HTTP exchange into a [`RawResponse`]. Any non-success status is a
/// failure regardless of the body.
pub fn decode_reply(endpoint: &str, reply: HttpReply) -> Result<RawResponse, RequestError> {
    if !reply.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(&reply.body)
            .map(|e| e.error)
            .ok()
            .or_else(|| {
                let body = reply.body.trim();
                (!body.is_empty()).then(|| body.to_string())
            });
        return Err(RequestError::Status {
            endpoint: endpoint.to_string(),
            status: reply.status,
            message,
        });
    }

    let envelope: ResponseEnvelope =
        serde_json::from_str(&reply.body).map_err(|e| RequestError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

    Ok(RawResponse {
        text: envelope.response,
        metadata: envelope.metadata,
    })
}
