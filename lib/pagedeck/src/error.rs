use thiserror::Error;

pub type Result<T> = std::result::Result<T, PageApiError>;

#[derive(Debug, Error)]
pub enum PageApiError {
    #[error("page API base URL is not configured")]
    NotConfigured,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PageApiError {
    /// Text suitable for the alert toast. For API errors this is the message
    /// the server put in the response body.
    pub fn user_message(&self) -> String {
        match self {
            PageApiError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            PageApiError::Api { status, .. } => Some(*status),
            PageApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_shows_server_message_only() {
        let err = PageApiError::Api {
            status: 403,
            message: "You are the owner".into(),
        };
        assert_eq!(err.user_message(), "You are the owner");
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "API error (403): You are the owner");
    }

    #[test]
    fn other_errors_use_display() {
        let err = PageApiError::NotConfigured;
        assert_eq!(err.user_message(), "page API base URL is not configured");
        assert_eq!(err.status(), None);
    }
}
