//! Kakao REST API client library.
//!
//! Covers the two endpoints a self-addressed briefing needs: sending a text
//! memo to the authenticated user and refreshing the OAuth access token.
//!
//! # Example
//!
//! ```rust,ignore
//! use kakao::KakaoClient;
//!
//! let client = KakaoClient::new(reqwest::Client::new(), "REST_API_KEY", None);
//! let token = client.refresh_access_token("REFRESH_TOKEN").await?;
//! client.send_memo(&token.access_token, "Hello").await?;
//! ```

mod client;
mod error;
pub mod models;

pub use client::{KakaoClient, DEFAULT_BUTTON_TITLE, DEFAULT_WEB_URL};
pub use error::{KakaoError, RETRYABLE_STATUS};
pub use models::{TextTemplate, TokenResponse};

pub type Result<T> = std::result::Result<T, KakaoError>;
