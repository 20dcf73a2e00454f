//! megaverse-scheduler — drives placement commands to completion.
//!
//! Takes the decoded goal grid and issues one creation call per command
//! through an [`EntityClient`](megaverse_client::EntityClient), with:
//!
//! - A bounded number of calls in flight (`max_concurrency`)
//! - Per-command exponential backoff with jitter on 429 and transient errors
//! - Immediate failure on permanent rejections
//! - Cooperative cancellation through a `watch` channel
//!
//! # Architecture
//!
//! ```text
//! PlacementScheduler::run
//!   ├── queue        Pending commands, row-major
//!   ├── in_flight    JoinSet of create() calls (≤ max_concurrency)
//!   ├── waiting      JoinSet of backoff timers (hold no slot)
//!   └── Slot[i]      RetryTracker + PlacementState + result
//! ```
//!
//! Command lifecycle: `Pending → InFlight → {Succeeded | RetryScheduled | Failed}`,
//! with `RetryScheduled → Pending` once the backoff delay elapses.

pub mod error;
pub mod report;
pub mod retry;
pub mod scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use report::{FailureReason, PlacementRecord, PlacementResult, RunReport};
pub use retry::{BackoffPolicy, RetryPolicy, RetryTracker, Transition};
pub use scheduler::{PlacementScheduler, PlacementState, SchedulerOptions};
