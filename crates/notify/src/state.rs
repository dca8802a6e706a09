//! Per-message delivery state machine.
//!
//! Pure bookkeeping: the engine performs the I/O a state asks for and feeds
//! the outcome back in, so retry budgets can be tested without a network.

use std::time::Duration;

use crate::error::{FailureReason, SendError};
use crate::policy::DeliveryPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryState {
    Idle,
    Sending,
    /// Waiting for a new access token before resending
    RefreshingCredential,
    /// Waiting `wait` before resending
    Retrying { wait: Duration },
    Delivered,
    Failed(FailureReason),
}

impl DeliveryState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryState::Delivered | DeliveryState::Failed(_))
    }
}

/// Attempt accounting for one message
#[derive(Debug, Clone)]
pub struct MessageAttempt {
    policy: DeliveryPolicy,
    state: DeliveryState,
    attempts: u32,
    refreshed: bool,
    waits: Vec<Duration>,
}

impl MessageAttempt {
    pub fn new(policy: DeliveryPolicy) -> Self {
        Self {
            policy,
            state: DeliveryState::Idle,
            attempts: 0,
            refreshed: false,
            waits: Vec::new(),
        }
    }

    pub fn state(&self) -> &DeliveryState {
        &self.state
    }

    /// Sends made so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn refreshed(&self) -> bool {
        self.refreshed
    }

    /// Backoff waits requested so far, in order
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }

    /// `Idle` or `Retrying` → `Sending`
    pub fn begin(&mut self) -> &DeliveryState {
        if matches!(self.state, DeliveryState::Idle | DeliveryState::Retrying { .. }) {
            self.state = DeliveryState::Sending;
        }
        &self.state
    }

    /// Record the outcome of a send made in `Sending`.
    ///
    /// `jitter` is added to the backoff when the failure is retryable.
    pub fn record_send(
        &mut self,
        result: Result<(), SendError>,
        jitter: Duration,
    ) -> &DeliveryState {
        if self.state != DeliveryState::Sending {
            return &self.state;
        }
        self.attempts += 1;
        let budget_spent = self.attempts >= self.policy.max_attempts;

        self.state = match result {
            Ok(()) => DeliveryState::Delivered,
            Err(SendError::Unauthorized) if self.refreshed => {
                DeliveryState::Failed(FailureReason::UnauthorizedAfterRefresh)
            }
            Err(SendError::Unauthorized) if budget_spent => {
                DeliveryState::Failed(FailureReason::RetriesExhausted {
                    status: 401,
                    attempts: self.attempts,
                })
            }
            Err(SendError::Unauthorized) => DeliveryState::RefreshingCredential,
            Err(SendError::Retryable { status, .. }) if budget_spent => {
                DeliveryState::Failed(FailureReason::RetriesExhausted {
                    status,
                    attempts: self.attempts,
                })
            }
            Err(SendError::Retryable { .. }) => {
                let wait = self.policy.backoff(self.attempts) + jitter;
                self.waits.push(wait);
                DeliveryState::Retrying { wait }
            }
            Err(SendError::Fatal(message)) => {
                DeliveryState::Failed(FailureReason::Rejected(message))
            }
        };
        &self.state
    }

    /// Record the outcome of a refresh made in `RefreshingCredential`
    pub fn record_refresh(&mut self, result: Result<(), String>) -> &DeliveryState {
        if self.state != DeliveryState::RefreshingCredential {
            return &self.state;
        }
        self.state = match result {
            Ok(()) => {
                self.refreshed = true;
                DeliveryState::Sending
            }
            Err(e) => DeliveryState::Failed(FailureReason::RefreshFailed(e)),
        };
        &self.state
    }
}
