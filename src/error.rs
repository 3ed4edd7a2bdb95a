use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Api {
        status: u16,
        body: Option<ErrorResponse>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    InvalidInput(String),

    /// A page action failed; the message is the banner already shown to the user.
    #[error("{0}")]
    Action(String),
}

/// Error body sent by the backend. Depending on the endpoint either field may be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AppError {
    pub fn api(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<ErrorResponse>(raw_body).ok();
        AppError::Api { status, body }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

/// Reduces any error to the single line shown in a page banner.
///
/// Order of preference: the backend's `error` field, then its `message` field, then the
/// error's own message. `None` or an empty message yields `fallback`.
pub fn error_message(error: Option<&AppError>, fallback: &str) -> String {
    let Some(error) = error else {
        return fallback.to_string();
    };

    if let AppError::Api { body: Some(body), .. } = error {
        if let Some(msg) = non_empty(body.error.as_deref()) {
            return msg.to_string();
        }
        if let Some(msg) = non_empty(body.message.as_deref()) {
            return msg.to_string();
        }
    }

    let own = error.to_string();
    if own.trim().is_empty() {
        fallback.to_string()
    } else {
        own
    }
}

/// Joins a banner prefix with the extracted message; an empty message leaves the prefix alone.
pub fn banner(prefix: &str, error: &AppError) -> String {
    let detail = error_message(Some(error), "");
    if detail.is_empty() {
        prefix.to_string()
    } else {
        format!("{} {}", prefix, detail)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
