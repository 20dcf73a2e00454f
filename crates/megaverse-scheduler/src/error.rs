//! Scheduler error types.

use thiserror::Error;

/// Errors raised while setting up a placement run.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("invalid scheduler options: {0}")]
    InvalidOptions(String),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
