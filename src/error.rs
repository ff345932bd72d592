//! Error types for submissions and exports.

use thiserror::Error;

/// Input rejected before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a topic")]
    EmptyTopic,
}

/// Failure of the single outbound call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Network or fetch failure, no HTTP status available
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// Backend answered with a non-success status
    #[error("{endpoint} returned HTTP {status}{}", detail_suffix(.message))]
    Status {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },

    /// Request body could not be serialized
    #[error("could not encode request for {endpoint}: {message}")]
    Encode { endpoint: String, message: String },

    /// Success status but the body is not a response envelope
    #[error("invalid response body from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl SubmitError {
    /// Text for the blocking notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(e) => e.to_string(),
            SubmitError::Request(_) => "An error occurred. Please try again.".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("could not write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser download failed: {0}")]
    Browser(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_hide_details_from_the_user() {
        let err = SubmitError::from(RequestError::Status {
            endpoint: "/api/explain".into(),
            status: 500,
            message: Some("quota exceeded".into()),
        });
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
        assert_eq!(
            err.to_string(),
            "/api/explain returned HTTP 500: quota exceeded"
        );
    }

    #[test]
    fn encode_failures_surface_as_request_errors() {
        let err = SubmitError::from(RequestError::Encode {
            endpoint: "/api/teaching-notes".into(),
            message: "key must be a string".into(),
        });
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
        assert!(err.to_string().starts_with("could not encode request for /api/teaching-notes"));
    }

    #[test]
    fn validation_message_prompts_for_topic() {
        let err = SubmitError::from(ValidationError::EmptyTopic);
        assert_eq!(err.user_message(), "Please enter a topic");
    }
}
