use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, warn};

use crate::error::{DeliveryError, FailureReason};
use crate::policy::DeliveryPolicy;
use crate::state::{DeliveryState, MessageAttempt};
use crate::token::DeliveryToken;
use crate::transport::{CredentialStore, Transport};

/// Outcome of delivering one message
#[derive(Debug, Clone, PartialEq)]
pub struct MessageReport {
    pub state: DeliveryState,
    pub attempts: u32,
    pub refreshes: u32,
    /// Backoff waits slept, in order
    pub waits: Vec<Duration>,
}

impl MessageReport {
    pub fn is_delivered(&self) -> bool {
        self.state == DeliveryState::Delivered
    }

    pub fn failure(&self) -> Option<&FailureReason> {
        match &self.state {
            DeliveryState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Outcome of a whole run: header plus items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub delivered: usize,
    /// 1-based item index and why it was dropped
    pub skipped: Vec<(usize, FailureReason)>,
}

/// Sequential sender with refresh-once, bounded backoff and pacing
pub struct DeliveryEngine<T, C> {
    transport: T,
    credentials: C,
    policy: DeliveryPolicy,
    rng: StdRng,
}

impl<T: Transport, C: CredentialStore> DeliveryEngine<T, C> {
    pub fn new(transport: T, credentials: C, policy: DeliveryPolicy) -> Self {
        Self {
            transport,
            credentials,
            policy: policy.normalized(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the jitter random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Drive one message to `Delivered` or `Failed`.
    ///
    /// `token` is replaced in place when a refresh succeeds so later
    /// messages reuse the new credential.
    pub async fn deliver(&mut self, token: &mut DeliveryToken, text: &str) -> MessageReport {
        let mut attempt = MessageAttempt::new(self.policy.clone());
        let mut refreshes = 0;
        attempt.begin();

        loop {
            match attempt.state().clone() {
                DeliveryState::Idle => {
                    attempt.begin();
                }
                DeliveryState::Sending => {
                    let result = self.transport.send(&token.access_token, text).await;
                    if let Err(e) = &result {
                        debug!("Send attempt {} failed: {}", attempt.attempts() + 1, e);
                    }
                    let jitter = self.jitter();
                    attempt.record_send(result, jitter);
                }
                DeliveryState::RefreshingCredential => {
                    info!("Access token rejected, refreshing");
                    match self.credentials.refresh(token).await {
                        Ok(fresh) => {
                            *token = fresh;
                            refreshes += 1;
                            attempt.record_refresh(Ok(()));
                        }
                        Err(e) => {
                            attempt.record_refresh(Err(e.to_string()));
                        }
                    }
                }
                DeliveryState::Retrying { wait } => {
                    warn!("Retrying in {:.1}s", wait.as_secs_f64());
                    tokio::time::sleep(wait).await;
                    attempt.begin();
                }
                DeliveryState::Delivered | DeliveryState::Failed(_) => break,
            }
        }

        MessageReport {
            state: attempt.state().clone(),
            attempts: attempt.attempts(),
            refreshes,
            waits: attempt.waits().to_vec(),
        }
    }

    /// Send the header, then every item in order.
    ///
    /// A header failure aborts before any item is sent. Item failures are
    /// logged and skipped, and the pacing delay follows every item.
    pub async fn run(
        &mut self,
        token: &mut DeliveryToken,
        header: &str,
        items: &[String],
    ) -> Result<RunReport, DeliveryError> {
        let report = self.deliver(token, header).await;
        if let DeliveryState::Failed(reason) = report.state {
            error!("Cannot send header, aborting: {}", reason);
            return Err(DeliveryError::HeaderFailed(reason));
        }
        info!("Header delivered, sending {} items", items.len());

        let mut run = RunReport::default();
        for (i, text) in items.iter().enumerate() {
            let index = i + 1;
            let report = self.deliver(token, text).await;
            match report.state {
                DeliveryState::Delivered => run.delivered += 1,
                DeliveryState::Failed(reason) => {
                    error!("Item {}: {}; skipping", index, reason);
                    run.skipped.push((index, reason));
                }
                _ => {}
            }
            tokio::time::sleep(self.policy.pacing).await;
        }

        info!(
            "Delivery finished: {} delivered, {} skipped",
            run.delivered,
            run.skipped.len()
        );
        Ok(run)
    }

    fn jitter(&mut self) -> Duration {
        let max = self.policy.max_jitter.as_millis() as u64;
        if max == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.rng.gen_range(0..=max))
    }
}
