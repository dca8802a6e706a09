use reqwest::{Client, StatusCode};

use crate::models::{TextTemplate, TokenResponse};
use crate::KakaoError;

const TOKEN_URL: &str = "https://kauth.kakao.com/oauth/token";
const SEND_URL: &str = "https://kapi.kakao.com/v2/api/talk/memo/default/send";

/// "More info" link attached to every memo
pub const DEFAULT_WEB_URL: &str = "https://news.google.com/?hl=ko&gl=KR";
pub const DEFAULT_BUTTON_TITLE: &str = "더 보기";

/// Kakao REST API client
pub struct KakaoClient {
    client: Client,
    rest_api_key: String,
    client_secret: Option<String>,
}

impl KakaoClient {
    /// Create a new Kakao client
    pub fn new(
        client: Client,
        rest_api_key: impl Into<String>,
        client_secret: Option<String>,
    ) -> Self {
        Self {
            client,
            rest_api_key: rest_api_key.into(),
            client_secret: client_secret.filter(|s| !s.is_empty()),
        }
    }

    /// Send a text memo to the token owner
    /// POST /v2/api/talk/memo/default/send
    pub async fn send_memo(&self, access_token: &str, text: &str) -> crate::Result<()> {
        let template = TextTemplate::new(text, DEFAULT_WEB_URL, DEFAULT_BUTTON_TITLE);
        let template_object = serde_json::to_string(&template)
            .map_err(|e| KakaoError::InvalidResponse(e.to_string()))?;

        let response = self
            .client
            .post(SEND_URL)
            .bearer_auth(access_token)
            .form(&[("template_object", template_object)])
            .send()
            .await?;

        Self::handle_response(response).await.map(|_| ())
    }

    /// Exchange a refresh token for a new access token
    /// POST /oauth/token (grant_type=refresh_token)
    pub async fn refresh_access_token(&self, refresh_token: &str) -> crate::Result<TokenResponse> {
        let mut params = vec![
            ("grant_type", "refresh_token"),
            ("client_id", self.rest_api_key.as_str()),
            ("refresh_token", refresh_token),
        ];
        if let Some(secret) = &self.client_secret {
            params.push(("client_secret", secret.as_str()));
        }

        let response = self.client.post(TOKEN_URL).form(&params).send().await?;
        let response = Self::handle_response(response).await?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| KakaoError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Refreshed Kakao access token");
        Ok(token)
    }

    async fn handle_response(response: reqwest::Response) -> crate::Result<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(KakaoError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(KakaoError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
