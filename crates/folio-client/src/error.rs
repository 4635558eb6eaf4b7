//! Client errors.

/// Failures surfaced by [`BlogApiClient`](crate::BlogApiClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API answered 404.
    #[error("{0}")]
    NotFound(String),

    /// Any other failed envelope.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NotFound(_) => Some(404),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Decode(_) | ClientError::InvalidUrl(_) => None,
        }
    }
}
