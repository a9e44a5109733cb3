use thiserror::Error;

/// Errors raised while fetching suggestions from the places API
#[derive(Debug, Clone, Error)]
pub enum SuggestError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API returned status {code}")]
    Status { code: u16 },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SuggestError::Status {
                code: status.as_u16(),
            },
            None if err.is_decode() => SuggestError::Parse(err.to_string()),
            None => SuggestError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SuggestError {
    fn from(err: serde_json::Error) -> Self {
        SuggestError::Parse(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
