use std::env;

use crate::error::AppError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleConfig {
    pub api_base_url: String,
}

impl ConsoleConfig {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, AppError> {
        let raw = api_base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AppError::InvalidInput(format!(
                "API base URL must start with http:// or https://, got {:?}",
                raw
            )));
        }
        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    /// Reads `COURSE_API_BASE_URL`, falling back to the local backend.
    pub fn new_from_env() -> Result<Self, AppError> {
        let base = env::var("COURSE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(base)
    }

    /// Applies the `--api-url` override on top of the environment.
    pub fn with_override(self, api_url: Option<String>) -> Result<Self, AppError> {
        match api_url {
            Some(url) => Self::new(url),
            None => Ok(self),
        }
    }
}
