use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translation API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("Translation endpoint returned no text")]
    Empty,
}
