use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use kakao::{KakaoClient, TokenResponse};

use crate::error::CredentialError;
use crate::token::DeliveryToken;
use crate::transport::CredentialStore;

/// Merge a refresh response into the current credential.
///
/// Kakao only returns a refresh token when it rotated it.
pub fn apply_refresh(current: &DeliveryToken, response: TokenResponse) -> DeliveryToken {
    DeliveryToken {
        access_token: response.access_token,
        refresh_token: response
            .refresh_token
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| current.refresh_token.clone()),
    }
}

/// Credential persisted in a local JSON file, rewritten after every refresh
pub struct FileTokenStore {
    client: Arc<KakaoClient>,
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(client: Arc<KakaoClient>, path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Write the token atomically via a temp file and rename
    pub async fn save(&self, token: &DeliveryToken) -> Result<(), CredentialError> {
        let json = serde_json::to_string_pretty(token)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!("Saved token to {}", self.path.display());
        Ok(())
    }

    /// Persist a freshly refreshed token. A failed write only costs the next
    /// run a refresh, so the token is returned either way.
    async fn keep_refreshed(&self, token: DeliveryToken) -> DeliveryToken {
        if let Err(e) = self.save(&token).await {
            tracing::warn!(
                "Failed to save refreshed token to {}: {}",
                self.path.display(),
                e
            );
        }
        token
    }
}

#[async_trait]
impl CredentialStore for FileTokenStore {
    async fn load(&self) -> Result<DeliveryToken, CredentialError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let token: DeliveryToken = serde_json::from_str(&content)?;
        tracing::debug!("Loaded token from {}", self.path.display());
        Ok(token)
    }

    async fn refresh(&self, current: &DeliveryToken) -> Result<DeliveryToken, CredentialError> {
        let response = self.client.refresh_access_token(&current.refresh_token).await?;
        Ok(self.keep_refreshed(apply_refresh(current, response)).await)
    }
}

/// Credential derived from a refresh token in the environment.
///
/// Nothing is persisted; a rotated refresh token is only reported so the
/// operator can update the stored secret.
pub struct EnvCredential {
    client: Arc<KakaoClient>,
    refresh_token: String,
}

impl EnvCredential {
    pub fn new(client: Arc<KakaoClient>, refresh_token: impl Into<String>) -> Self {
        Self {
            client,
            refresh_token: refresh_token.into(),
        }
    }

    async fn exchange(&self, refresh_token: &str) -> Result<DeliveryToken, CredentialError> {
        let response = self.client.refresh_access_token(refresh_token).await?;
        if response.refresh_token.as_deref().is_some_and(|t| !t.is_empty()) {
            tracing::info!(
                "Kakao returned a new refresh token; update KAKAO_REFRESH_TOKEN in your secrets"
            );
        }
        Ok(apply_refresh(
            &DeliveryToken::new(String::new(), refresh_token),
            response,
        ))
    }
}

#[async_trait]
impl CredentialStore for EnvCredential {
    /// Every run starts with a fresh exchange
    async fn load(&self) -> Result<DeliveryToken, CredentialError> {
        self.exchange(&self.refresh_token).await
    }

    async fn refresh(&self, current: &DeliveryToken) -> Result<DeliveryToken, CredentialError> {
        self.exchange(&current.refresh_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Arc<KakaoClient> {
        Arc::new(KakaoClient::new(reqwest::Client::new(), "rest-key", None))
    }

    fn response(access: &str, refresh: Option<&str>) -> TokenResponse {
        TokenResponse {
            access_token: access.to_string(),
            refresh_token: refresh.map(str::to_string),
            expires_in: Some(21599),
        }
    }

    #[test]
    fn test_apply_refresh_keeps_refresh_token_unless_rotated() {
        let current = DeliveryToken::new("old", "r1");

        let kept = apply_refresh(&current, response("new", None));
        assert_eq!(kept, DeliveryToken::new("new", "r1"));

        let empty = apply_refresh(&current, response("new", Some("")));
        assert_eq!(empty.refresh_token, "r1");

        let rotated = apply_refresh(&current, response("new", Some("r2")));
        assert_eq!(rotated, DeliveryToken::new("new", "r2"));
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        let store = FileTokenStore::new(client(), &path);

        let token = DeliveryToken::new("access", "refresh");
        store.save(&token).await.unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        assert_eq!(store.load().await.unwrap(), token);
    }

    #[tokio::test]
    async fn test_refreshed_token_survives_failed_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("token.json");
        let store = FileTokenStore::new(client(), &path);

        let token = DeliveryToken::new("fresh", "rotated");
        assert!(store.save(&token).await.is_err());
        assert_eq!(store.keep_refreshed(token.clone()).await, token);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_refreshed_token_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        let store = FileTokenStore::new(client(), &path);

        let token = DeliveryToken::new("fresh", "rotated");
        assert_eq!(store.keep_refreshed(token.clone()).await, token);
        assert_eq!(store.load().await.unwrap(), token);
    }

    #[tokio::test]
    async fn test_file_store_ignores_extra_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(
            &path,
            r#"{"access_token":"a","refresh_token":"r","token_type":"bearer","expires_in":21599}"#,
        )
        .unwrap();

        let store = FileTokenStore::new(client(), &path);
        assert_eq!(store.load().await.unwrap(), DeliveryToken::new("a", "r"));
    }

    #[tokio::test]
    async fn test_file_store_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = FileTokenStore::new(client(), dir.path().join("missing.json"));
        assert!(matches!(missing.load().await, Err(CredentialError::Io(_))));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let broken = FileTokenStore::new(client(), &path);
        assert!(matches!(broken.load().await, Err(CredentialError::Json(_))));
    }
}
