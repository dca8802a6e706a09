use async_trait::async_trait;

use crate::error::{CredentialError, SendError};
use crate::token::DeliveryToken;

/// Sends one text message with a bearer credential
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, access_token: &str, text: &str) -> Result<(), SendError>;
}

/// Source of the delivery credential
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Credential to start the run with
    async fn load(&self) -> Result<DeliveryToken, CredentialError>;

    /// Exchange the refresh token for a new access token
    async fn refresh(&self, current: &DeliveryToken) -> Result<DeliveryToken, CredentialError>;
}
