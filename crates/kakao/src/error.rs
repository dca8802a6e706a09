use thiserror::Error;

/// Status codes worth retrying after a backoff
pub const RETRYABLE_STATUS: [u16; 5] = [429, 500, 502, 503, 504];

/// Kakao API errors
#[derive(Debug, Error)]
pub enum KakaoError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Access token expired or invalid (HTTP 401)
    #[error("401 Unauthorized")]
    Unauthorized,

    /// Kakao API returned a non-success status
    #[error("Kakao API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl KakaoError {
    /// Rate limiting or a transient server fault
    pub fn is_retryable(&self) -> bool {
        match self {
            KakaoError::Api { status_code, .. } => RETRYABLE_STATUS.contains(status_code),
            _ => false,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            KakaoError::Unauthorized => Some(401),
            KakaoError::Api { status_code, .. } => Some(*status_code),
            KakaoError::Http(e) => e.status().map(|s| s.as_u16()),
            KakaoError::InvalidResponse(_) => None,
        }
    }
}
