use thiserror::Error;

/// Everything a search can fail with. Both variants carry a message meant to
/// be shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("iTunes API request failed: {0}")]
    Network(String),
}

impl SearchError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        SearchError::InvalidInput(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SearchError::InvalidInput(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, SearchError::Network(_))
    }
}

// Transport failures, non-2xx statuses (via error_for_status) and body decode
// errors all arrive as reqwest::Error.
impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Network(e.to_string())
    }
}
