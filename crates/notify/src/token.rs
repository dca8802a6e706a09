use serde::{Deserialize, Serialize};
use std::fmt;

/// OAuth credential used for every send, replaced in place on refresh
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryToken {
    pub access_token: String,
    pub refresh_token: String,
}

impl DeliveryToken {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl fmt::Debug for DeliveryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryToken")
            .field("access_token", &"***")
            .field("refresh_token", &"***")
            .finish()
    }
}
