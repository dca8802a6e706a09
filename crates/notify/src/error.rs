use thiserror::Error;

/// Classified failure of a single send call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// Credential expired or invalid; recoverable by one refresh
    #[error("unauthorized")]
    Unauthorized,

    /// Rate limit or transient server fault; recoverable by backoff
    #[error("retryable HTTP {status}: {message}")]
    Retryable { status: u16, message: String },

    /// Anything else; never retried
    #[error("{0}")]
    Fatal(String),
}

/// Why a message ended up undelivered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("401 even after credential refresh")]
    UnauthorizedAfterRefresh,

    #[error("credential refresh failed: {0}")]
    RefreshFailed(String),

    #[error("HTTP {status} after {attempts} attempts")]
    RetriesExhausted { status: u16, attempts: u32 },

    #[error("rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to access token file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid token file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token refresh failed: {0}")]
    Refresh(#[from] kakao::KakaoError),
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Nothing after the header is meaningful without it
    #[error("header delivery failed: {0}")]
    HeaderFailed(FailureReason),
}
