use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::TranslateError;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText", default)]
    translated_text: String,
}

/// LibreTranslate-compatible `/translate` endpoint client
pub struct LibreTranslateClient {
    client: Client,
    url: String,
}

impl LibreTranslateClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Translate `text` into `target`, letting the server detect the source
    pub async fn translate(&self, text: &str, target: &str) -> crate::Result<String> {
        let response = self
            .client
            .post(&self.url)
            .timeout(Duration::from_secs(8))
            .json(&TranslateRequest {
                q: text,
                source: "auto",
                target,
                format: "text",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response.json().await?;
        if body.translated_text.trim().is_empty() {
            return Err(TranslateError::Empty);
        }
        Ok(body.translated_text)
    }
}
