//! Retry policy and the per-command retry state machine.
//!
//! Each command owns a [`RetryTracker`] that turns attempt outcomes into
//! transitions. Backoff is exponential per command, so one throttled
//! command never delays the others.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use megaverse_client::StatusOutcome;

use crate::report::FailureReason;

/// Exponential backoff: `base_delay * 2^(retry-1)`, capped at `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    pub base_delay: Duration,
    pub max_delay: Duration,
    /// Draw each delay uniformly from `[d/2, d]`.
    pub jitter: bool,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            jitter: true,
        }
    }
}

impl BackoffPolicy {
    /// Un-jittered delay before the `retry`-th retry (1-based).
    pub fn delay(&self, retry: u32) -> Duration {
        let factor = 1u32
            .checked_shl(retry.saturating_sub(1))
            .unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// Delay before the `retry`-th retry, jittered if enabled.
    pub fn next_delay(&self, retry: u32) -> Duration {
        let delay = self.delay(retry);
        if !self.jitter || delay.is_zero() {
            return delay;
        }
        let floor = delay / 2;
        let spread = (delay - floor).as_millis() as u64;
        floor + Duration::from_millis(rand::thread_rng().gen_range(0..=spread))
    }
}

/// Retry limits applied to every command of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub backoff: BackoffPolicy,
    /// Total attempts allowed to end in a transient failure.
    pub max_transient_attempts: u32,
    /// Rate-limit retries allowed per command; `None` retries forever.
    pub max_rate_limit_retries: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            backoff: BackoffPolicy::default(),
            max_transient_attempts: 5,
            max_rate_limit_retries: None,
        }
    }
}

/// What the scheduler should do with a command after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Succeeded,
    Retry(Duration),
    Failed(FailureReason),
}

/// Tracks attempts for a single command.
#[derive(Debug)]
pub struct RetryTracker {
    policy: RetryPolicy,
    attempts: u32,
    retries: u32,
    rate_limited: u32,
    transient_failures: u32,
}

impl RetryTracker {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            attempts: 0,
            retries: 0,
            rate_limited: 0,
            transient_failures: 0,
        }
    }

    /// Record one attempt's outcome and return the next transition.
    pub fn record(&mut self, outcome: StatusOutcome) -> Transition {
        self.attempts += 1;

        match outcome {
            StatusOutcome::Ok => Transition::Succeeded,
            StatusOutcome::RateLimited => {
                self.rate_limited += 1;
                if let Some(max) = self.policy.max_rate_limit_retries {
                    if self.rate_limited > max {
                        return Transition::Failed(FailureReason::RateLimitExhausted {
                            retries: max,
                        });
                    }
                }
                self.schedule_retry()
            }
            StatusOutcome::TransientFailure(last_error) => {
                self.transient_failures += 1;
                if self.transient_failures >= self.policy.max_transient_attempts {
                    return Transition::Failed(FailureReason::TransientFailure {
                        attempts: self.transient_failures,
                        last_error,
                    });
                }
                self.schedule_retry()
            }
            StatusOutcome::PermanentFailure(reason) => {
                Transition::Failed(FailureReason::PermanentFailure { reason })
            }
        }
    }

    fn schedule_retry(&mut self) -> Transition {
        self.retries += 1;
        let delay = self.policy.backoff.next_delay(self.retries);
        debug!(
            retry = self.retries,
            delay_ms = delay.as_millis() as u64,
            "retry scheduled"
        );
        Transition::Retry(delay)
    }

    /// Attempts recorded so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Retries scheduled so far.
    pub fn retries(&self) -> u32 {
        self.retries
    }
}
