use std::sync::Arc;

use async_trait::async_trait;
use kakao::{KakaoClient, KakaoError};

use crate::error::SendError;
use crate::transport::Transport;

/// Sends "memo to self" messages through the Kakao REST API
pub struct KakaoTransport {
    client: Arc<KakaoClient>,
}

impl KakaoTransport {
    pub fn new(client: Arc<KakaoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for KakaoTransport {
    async fn send(&self, access_token: &str, text: &str) -> Result<(), SendError> {
        self.client
            .send_memo(access_token, text)
            .await
            .map_err(classify)
    }
}

/// Sort an API failure into the three delivery outcomes
pub fn classify(error: KakaoError) -> SendError {
    match error {
        KakaoError::Unauthorized => SendError::Unauthorized,
        e if e.is_retryable() => SendError::Retryable {
            status: e.status_code().unwrap_or_default(),
            message: e.to_string(),
        },
        other => SendError::Fatal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(KakaoError::Unauthorized), SendError::Unauthorized);
        for status in kakao::RETRYABLE_STATUS {
            let classified = classify(KakaoError::Api {
                status_code: status,
                message: "busy".into(),
            });
            let SendError::Retryable { status: code, message } = classified else {
                panic!("{} should be retryable", status);
            };
            assert_eq!(code, status);
            assert!(message.contains("busy"));
        }
        assert!(matches!(
            classify(KakaoError::Api {
                status_code: 400,
                message: "bad template".into()
            }),
            SendError::Fatal(m) if m.contains("400")
        ));
        assert!(matches!(
            classify(KakaoError::InvalidResponse("eof".into())),
            SendError::Fatal(_)
        ));
    }
}
