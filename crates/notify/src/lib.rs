//! Sequential message delivery with credential refresh, bounded retries
//! and pacing.

mod credential;
mod engine;
mod error;
mod memo;
mod policy;
mod state;
mod token;
mod transport;

pub use credential::{apply_refresh, EnvCredential, FileTokenStore};
pub use engine::{DeliveryEngine, MessageReport, RunReport};
pub use error::{CredentialError, DeliveryError, FailureReason, SendError};
pub use memo::{classify, KakaoTransport};
pub use policy::DeliveryPolicy;
pub use state::{DeliveryState, MessageAttempt};
pub use token::DeliveryToken;
pub use transport::{CredentialStore, Transport};
