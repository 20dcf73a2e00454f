//! Placement scheduler — drives every command of a grid to a final state.
//!
//! A single coordinator loop owns all per-command state. Creation attempts
//! and backoff timers run as tokio tasks whose results flow back to the
//! coordinator, so results are written at one point without locking.
//! Backoff timers do not hold a concurrency slot.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use megaverse_client::{EntityClient, StatusOutcome};
use megaverse_core::config::SchedulerConfig;
use megaverse_core::{Grid, PlacementCommand, decode_grid};

use crate::error::{SchedulerError, SchedulerResult};
use crate::report::{FailureReason, PlacementRecord, PlacementResult, RunReport};
use crate::retry::{BackoffPolicy, RetryPolicy, RetryTracker, Transition};

/// Lifecycle of a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    Pending,
    InFlight,
    RetryScheduled,
    Succeeded,
    Failed,
}

/// Scheduler tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerOptions {
    /// Maximum creation calls in flight at once.
    pub max_concurrency: usize,
    pub retry: RetryPolicy,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            retry: RetryPolicy::default(),
        }
    }
}

impl SchedulerOptions {
    /// Build options from the `[scheduler]` config table, filling defaults.
    pub fn from_config(config: &SchedulerConfig) -> SchedulerResult<Self> {
        let defaults = Self::default();
        let invalid = |e: anyhow::Error| SchedulerError::InvalidOptions(format!("{e:#}"));

        let options = Self {
            max_concurrency: config.max_concurrency.unwrap_or(defaults.max_concurrency),
            retry: RetryPolicy {
                backoff: BackoffPolicy {
                    base_delay: config.base_delay().map_err(invalid)?,
                    max_delay: config.max_delay().map_err(invalid)?,
                    jitter: config.jitter.unwrap_or(defaults.retry.backoff.jitter),
                },
                max_transient_attempts: config
                    .max_transient_attempts
                    .unwrap_or(defaults.retry.max_transient_attempts),
                max_rate_limit_retries: config.max_rate_limit_retries,
            },
        };
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> SchedulerResult<()> {
        if self.max_concurrency == 0 {
            return Err(SchedulerError::InvalidOptions(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.retry.max_transient_attempts == 0 {
            return Err(SchedulerError::InvalidOptions(
                "max_transient_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-command state held by the coordinator.
struct Slot {
    command: PlacementCommand,
    state: PlacementState,
    tracker: RetryTracker,
    result: Option<PlacementResult>,
}

/// Drives placement commands against an [`EntityClient`].
pub struct PlacementScheduler {
    client: Arc<dyn EntityClient>,
    options: SchedulerOptions,
}

impl PlacementScheduler {
    pub fn new(client: Arc<dyn EntityClient>, options: SchedulerOptions) -> SchedulerResult<Self> {
        options.validate()?;
        Ok(Self { client, options })
    }

    pub fn options(&self) -> &SchedulerOptions {
        &self.options
    }

    /// Decode `grid` and place every non-empty cell.
    ///
    /// Undecodable cells are skipped and listed in the report.
    pub async fn reconstruct(&self, grid: &Grid, shutdown: watch::Receiver<bool>) -> RunReport {
        let decoded = decode_grid(grid);
        for (coordinate, e) in &decoded.errors {
            warn!(
                row = coordinate.row,
                column = coordinate.column,
                error = %e,
                "skipping undecodable cell"
            );
        }

        let mut report = self.run(decoded.commands, shutdown).await;
        report.skipped = decoded.errors;
        report
    }

    /// Run `commands` to completion, failure, or cancellation.
    ///
    /// Setting the shutdown signal to `true` stops dispatching; in-flight
    /// calls finish and every unfinished command is reported `Cancelled`.
    pub async fn run(
        &self,
        commands: Vec<PlacementCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) -> RunReport {
        let mut slots: Vec<Slot> = commands
            .into_iter()
            .map(|command| Slot {
                command,
                state: PlacementState::Pending,
                tracker: RetryTracker::new(self.options.retry),
                result: None,
            })
            .collect();

        let mut queue: VecDeque<usize> = (0..slots.len()).collect();
        let mut in_flight: JoinSet<(usize, StatusOutcome)> = JoinSet::new();
        let mut waiting: JoinSet<usize> = JoinSet::new();
        let mut cancelled = *shutdown.borrow();
        let mut shutdown_open = true;

        info!(
            commands = slots.len(),
            max_concurrency = self.options.max_concurrency,
            "placement run starting"
        );

        loop {
            if !cancelled {
                while in_flight.len() < self.options.max_concurrency {
                    let Some(idx) = queue.pop_front() else {
                        break;
                    };
                    self.dispatch(&mut slots[idx], idx, &mut in_flight);
                }
            }

            let idle = waiting.is_empty() && queue.is_empty();
            if in_flight.is_empty() && (cancelled || idle) {
                break;
            }

            tokio::select! {
                Some(joined) = in_flight.join_next() => match joined {
                    Ok((idx, outcome)) => {
                        if let Some(delay) = settle(&mut slots[idx], outcome) {
                            if !cancelled {
                                waiting.spawn(async move {
                                    tokio::time::sleep(delay).await;
                                    idx
                                });
                            }
                        }
                    }
                    Err(e) => error!(error = %e, "placement task failed"),
                },
                Some(joined) = waiting.join_next(), if !cancelled => {
                    if let Ok(idx) = joined {
                        slots[idx].state = PlacementState::Pending;
                        queue.push_back(idx);
                    }
                }
                changed = shutdown.changed(), if !cancelled && shutdown_open => {
                    if changed.is_err() {
                        shutdown_open = false;
                    } else if *shutdown.borrow() {
                        info!(
                            in_flight = in_flight.len(),
                            "cancellation requested; draining in-flight placements"
                        );
                        cancelled = true;
                        waiting.abort_all();
                    }
                }
                else => break,
            }
        }

        let records: Vec<PlacementRecord> = slots
            .into_iter()
            .map(|slot| {
                let result = slot.result.unwrap_or_else(|| {
                    if cancelled {
                        PlacementResult::Failed(FailureReason::Cancelled)
                    } else {
                        PlacementResult::Failed(FailureReason::TransientFailure {
                            attempts: slot.tracker.attempts(),
                            last_error: "placement task aborted".to_string(),
                        })
                    }
                });
                PlacementRecord {
                    command: slot.command,
                    result,
                    attempts: slot.tracker.attempts(),
                }
            })
            .collect();

        let report = RunReport {
            records,
            skipped: Vec::new(),
        };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            requests = report.attempts(),
            "placement run finished"
        );
        report
    }

    fn dispatch(
        &self,
        slot: &mut Slot,
        idx: usize,
        in_flight: &mut JoinSet<(usize, StatusOutcome)>,
    ) {
        debug_assert_eq!(slot.state, PlacementState::Pending);
        slot.state = PlacementState::InFlight;
        let client = Arc::clone(&self.client);
        let command = slot.command;
        debug!(
            row = command.coordinate.row,
            column = command.coordinate.column,
            kind = %command.kind(),
            attempt = slot.tracker.attempts() + 1,
            "dispatching placement"
        );
        in_flight.spawn(async move {
            let outcome = client.create(&command).await;
            (idx, outcome)
        });
    }
}

/// Apply an attempt outcome to its slot. Returns the backoff delay when the
/// command should be retried.
fn settle(slot: &mut Slot, outcome: StatusOutcome) -> Option<std::time::Duration> {
    let coordinate = slot.command.coordinate;
    let kind = slot.command.kind();

    match slot.tracker.record(outcome) {
        Transition::Succeeded => {
            info!(
                row = coordinate.row,
                column = coordinate.column,
                %kind,
                attempts = slot.tracker.attempts(),
                "placement succeeded"
            );
            slot.state = PlacementState::Succeeded;
            slot.result = Some(PlacementResult::Succeeded);
            None
        }
        Transition::Retry(delay) => {
            debug!(
                row = coordinate.row,
                column = coordinate.column,
                %kind,
                attempt = slot.tracker.attempts(),
                delay_ms = delay.as_millis() as u64,
                "placement will be retried"
            );
            slot.state = PlacementState::RetryScheduled;
            Some(delay)
        }
        Transition::Failed(reason) => {
            warn!(
                row = coordinate.row,
                column = coordinate.column,
                %kind,
                attempts = slot.tracker.attempts(),
                %reason,
                "placement failed"
            );
            slot.state = PlacementState::Failed;
            slot.result = Some(PlacementResult::Failed(reason));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use megaverse_client::CreateFuture;
    use megaverse_core::{Color, Coordinate, Direction, Entity};

    /// Answers from a per-coordinate script (then `Ok`), records every call,
    /// and tracks peak concurrency.
    #[derive(Default)]
    struct ScriptedClient {
        scripts: Mutex<HashMap<Coordinate, VecDeque<StatusOutcome>>>,
        always: Mutex<HashMap<Coordinate, StatusOutcome>>,
        calls: Mutex<Vec<Coordinate>>,
        current: AtomicUsize,
        peak: AtomicUsize,
        latency: Duration,
    }

    impl ScriptedClient {
        fn with_latency(latency: Duration) -> Self {
            Self {
                latency,
                ..Self::default()
            }
        }

        fn script(self, coordinate: Coordinate, outcomes: Vec<StatusOutcome>) -> Self {
            self.scripts
                .lock()
                .unwrap()
                .insert(coordinate, outcomes.into());
            self
        }

        fn always(self, coordinate: Coordinate, outcome: StatusOutcome) -> Self {
            self.always.lock().unwrap().insert(coordinate, outcome);
            self
        }

        fn calls(&self) -> Vec<Coordinate> {
            self.calls.lock().unwrap().clone()
        }

        fn calls_at(&self, coordinate: Coordinate) -> usize {
            self.calls().iter().filter(|c| **c == coordinate).count()
        }
    }

    impl EntityClient for ScriptedClient {
        fn create<'a>(&'a self, command: &'a PlacementCommand) -> CreateFuture<'a> {
            Box::pin(async move {
                let coordinate = command.coordinate;
                self.calls.lock().unwrap().push(coordinate);
                let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
                self.peak.fetch_max(now, Ordering::SeqCst);

                if !self.latency.is_zero() {
                    tokio::time::sleep(self.latency).await;
                }

                let scripted = self
                    .scripts
                    .lock()
                    .unwrap()
                    .get_mut(&coordinate)
                    .and_then(VecDeque::pop_front);
                let fixed = self.always.lock().unwrap().get(&coordinate).cloned();

                self.current.fetch_sub(1, Ordering::SeqCst);
                scripted.or(fixed).unwrap_or(StatusOutcome::Ok)
            })
        }
    }

    fn options(max_concurrency: usize) -> SchedulerOptions {
        SchedulerOptions {
            max_concurrency,
            retry: RetryPolicy {
                backoff: BackoffPolicy {
                    base_delay: Duration::from_secs(1),
                    max_delay: Duration::from_secs(30),
                    jitter: false,
                },
                max_transient_attempts: 5,
                max_rate_limit_retries: None,
            },
        }
    }

    fn scheduler(client: &Arc<ScriptedClient>, options: SchedulerOptions) -> PlacementScheduler {
        let client: Arc<dyn EntityClient> = client.clone();
        PlacementScheduler::new(client, options).unwrap()
    }

    fn polyanet(row: u32, column: u32) -> PlacementCommand {
        PlacementCommand::new(Coordinate::new(row, column), Entity::Polyanet)
    }

    fn no_shutdown() -> watch::Receiver<bool> {
        watch::channel(false).1
    }

    fn labels(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limited_twice_then_succeeds_after_three_calls() {
        let at = Coordinate::new(0, 0);
        let client = Arc::new(
            ScriptedClient::default()
                .script(at, vec![StatusOutcome::RateLimited, StatusOutcome::RateLimited]),
        );
        let started = tokio::time::Instant::now();

        let report = scheduler(&client, options(4))
            .run(vec![polyanet(0, 0)], no_shutdown())
            .await;

        let record = report.result_at(at).unwrap();
        assert_eq!(record.result, PlacementResult::Succeeded);
        assert_eq!(record.attempts, 3);
        assert_eq!(client.calls_at(at), 3);
        // 1s then 2s of backoff.
        assert!(started.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test]
    async fn bad_request_fails_after_one_call() {
        let at = Coordinate::new(2, 3);
        let client = Arc::new(ScriptedClient::default().always(
            at,
            StatusOutcome::PermanentFailure("400 Bad Request".to_string()),
        ));

        let report = scheduler(&client, options(4))
            .run(vec![polyanet(2, 3)], no_shutdown())
            .await;

        assert_eq!(
            report.result_at(at).unwrap().result,
            PlacementResult::Failed(FailureReason::PermanentFailure {
                reason: "400 Bad Request".to_string()
            })
        );
        assert_eq!(client.calls_at(at), 1);
        assert!(!report.is_success());
    }

    #[tokio::test]
    async fn single_polyanet_in_four_by_four_grid_issues_one_call() {
        let grid = labels(&[
            &["SPACE", "SPACE", "SPACE", "SPACE"],
            &["SPACE", "SPACE", "SPACE", "SPACE"],
            &["SPACE", "SPACE", "POLYANET", "SPACE"],
            &["SPACE", "SPACE", "SPACE", "SPACE"],
        ]);
        let client = Arc::new(ScriptedClient::default());

        let report = scheduler(&client, options(4))
            .reconstruct(&grid, no_shutdown())
            .await;

        assert_eq!(client.calls(), vec![Coordinate::new(2, 2)]);
        assert_eq!(report.records.len(), 1);
        assert!(report.is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn in_flight_calls_never_exceed_max_concurrency() {
        let client = Arc::new(ScriptedClient::with_latency(Duration::from_millis(10)));
        let commands: Vec<_> = (0..5)
            .flat_map(|row| (0..4).map(move |column| polyanet(row, column)))
            .collect();

        let report = scheduler(&client, options(3))
            .run(commands, no_shutdown())
            .await;

        assert_eq!(report.succeeded(), 20);
        assert_eq!(client.calls().len(), 20);
        assert_eq!(client.peak.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrency_bound_holds_across_retries() {
        let mut client = ScriptedClient::with_latency(Duration::from_millis(5));
        for column in 0..10 {
            client = client.script(
                Coordinate::new(0, column),
                vec![
                    StatusOutcome::RateLimited,
                    StatusOutcome::TransientFailure("503".to_string()),
                ],
            );
        }
        let client = Arc::new(client);
        let commands: Vec<_> = (0..10).map(|column| polyanet(0, column)).collect();

        let report = scheduler(&client, options(2))
            .run(commands, no_shutdown())
            .await;

        assert_eq!(report.succeeded(), 10);
        assert_eq!(client.calls().len(), 30);
        assert!(client.peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn transient_failures_are_bounded() {
        let at = Coordinate::new(1, 1);
        let client = Arc::new(ScriptedClient::default().always(
            at,
            StatusOutcome::TransientFailure("connection reset".to_string()),
        ));
        let mut opts = options(2);
        opts.retry.max_transient_attempts = 3;

        let report = scheduler(&client, opts)
            .run(vec![polyanet(1, 1)], no_shutdown())
            .await;

        assert_eq!(
            report.result_at(at).unwrap().result,
            PlacementResult::Failed(FailureReason::TransientFailure {
                attempts: 3,
                last_error: "connection reset".to_string(),
            })
        );
        assert_eq!(client.calls_at(at), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_cap_bounds_runtime() {
        let at = Coordinate::new(0, 0);
        let client = Arc::new(ScriptedClient::default().always(at, StatusOutcome::RateLimited));
        let mut opts = options(1);
        opts.retry.max_rate_limit_retries = Some(4);

        let report = scheduler(&client, opts)
            .run(vec![polyanet(0, 0)], no_shutdown())
            .await;

        assert_eq!(
            report.result_at(at).unwrap().result,
            PlacementResult::Failed(FailureReason::RateLimitExhausted { retries: 4 })
        );
        assert_eq!(client.calls_at(at), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn throttled_command_does_not_hold_a_slot_during_backoff() {
        let slow = Coordinate::new(0, 0);
        let fast = Coordinate::new(0, 1);
        let client = Arc::new(ScriptedClient::default().script(
            slow,
            vec![
                StatusOutcome::RateLimited,
                StatusOutcome::RateLimited,
                StatusOutcome::RateLimited,
            ],
        ));

        let report = scheduler(&client, options(1))
            .run(vec![polyanet(0, 0), polyanet(0, 1)], no_shutdown())
            .await;

        assert!(report.is_success());
        assert_eq!(client.calls(), vec![slow, fast, slow, slow, slow]);
    }

    #[tokio::test]
    async fn failures_do_not_stop_other_cells() {
        let bad = Coordinate::new(0, 1);
        let client = Arc::new(
            ScriptedClient::default()
                .always(bad, StatusOutcome::PermanentFailure("422".to_string())),
        );
        let commands = vec![
            polyanet(0, 0),
            polyanet(0, 1),
            PlacementCommand::new(Coordinate::new(0, 2), Entity::Soloon(Color::Red)),
            PlacementCommand::new(Coordinate::new(0, 3), Entity::Cometh(Direction::Down)),
        ];

        let report = scheduler(&client, options(2)).run(commands, no_shutdown()).await;

        assert_eq!(report.succeeded(), 3);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures().next().unwrap().command.coordinate, bad);
    }

    #[tokio::test]
    async fn report_keeps_row_major_order() {
        let client = Arc::new(ScriptedClient::default());
        let grid = labels(&[&["POLYANET", "SPACE"], &["LEFT_COMETH", "PURPLE_SOLOON"]]);

        let report = scheduler(&client, options(8))
            .reconstruct(&grid, no_shutdown())
            .await;

        let coords: Vec<_> = report.records.iter().map(|r| r.command.coordinate).collect();
        assert_eq!(
            coords,
            vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(1, 1)]
        );
    }

    #[tokio::test]
    async fn undecodable_cells_are_skipped_and_reported() {
        let client = Arc::new(ScriptedClient::default());
        let grid = labels(&[&["POLYANET", "GREEN_SOLOON"], &["ASTEROID", "SPACE"]]);

        let report = scheduler(&client, options(2))
            .reconstruct(&grid, no_shutdown())
            .await;

        assert_eq!(client.calls(), vec![Coordinate::new(0, 0)]);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].0, Coordinate::new(0, 1));
        assert_eq!(report.skipped[1].0, Coordinate::new(1, 0));
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn empty_run_finishes_immediately() {
        let client = Arc::new(ScriptedClient::default());
        let report = scheduler(&client, options(2)).run(Vec::new(), no_shutdown()).await;
        assert!(report.records.is_empty());
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn cancelled_before_start_dispatches_nothing() {
        let client = Arc::new(ScriptedClient::default());
        let (_tx, rx) = watch::channel(true);

        let report = scheduler(&client, options(2))
            .run(vec![polyanet(0, 0), polyanet(0, 1)], rx)
            .await;

        assert!(client.calls().is_empty());
        assert_eq!(report.failed(), 2);
        assert!(report.records.iter().all(|r| {
            r.result == PlacementResult::Failed(FailureReason::Cancelled) && r.attempts == 0
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_stops_retries_and_reports_cancelled() {
        let throttled = Coordinate::new(0, 0);
        let client = Arc::new(ScriptedClient::default().always(throttled, StatusOutcome::RateLimited));
        let (tx, rx) = watch::channel(false);
        let sched = scheduler(&client, options(1));

        let run = tokio::spawn(async move { sched.run(vec![polyanet(0, 0)], rx).await });

        // Attempts at t=0, 1s and 3s; cancel while waiting for the 7s retry.
        tokio::time::sleep(Duration::from_secs(4)).await;
        tx.send(true).unwrap();
        let report = run.await.unwrap();

        let record = report.result_at(throttled).unwrap();
        assert_eq!(record.result, PlacementResult::Failed(FailureReason::Cancelled));
        assert_eq!(client.calls_at(throttled), 3);
        assert_eq!(record.attempts, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_lets_in_flight_calls_finish() {
        let client = Arc::new(ScriptedClient::with_latency(Duration::from_secs(2)));
        let (tx, rx) = watch::channel(false);
        let sched = scheduler(&client, options(2));
        let commands: Vec<_> = (0..6).map(|column| polyanet(0, column)).collect();

        let run = tokio::spawn(async move { sched.run(commands, rx).await });

        tokio::time::sleep(Duration::from_millis(500)).await;
        tx.send(true).unwrap();
        let report = run.await.unwrap();

        // The two calls in flight at cancellation complete; the rest never start.
        assert_eq!(report.succeeded(), 2);
        assert_eq!(client.calls().len(), 2);
        assert_eq!(
            report
                .records
                .iter()
                .filter(|r| r.result == PlacementResult::Failed(FailureReason::Cancelled))
                .count(),
            4
        );
    }

    #[tokio::test]
    async fn dropped_shutdown_sender_does_not_cancel() {
        let client = Arc::new(ScriptedClient::with_latency(Duration::from_millis(5)));
        let (tx, rx) = watch::channel(false);
        drop(tx);

        let report = scheduler(&client, options(1))
            .run(vec![polyanet(0, 0), polyanet(0, 1)], rx)
            .await;

        assert_eq!(report.succeeded(), 2);
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let client: Arc<dyn EntityClient> = Arc::new(ScriptedClient::default());
        assert!(matches!(
            PlacementScheduler::new(client, options(0)),
            Err(SchedulerError::InvalidOptions(_))
        ));
    }

    #[test]
    fn options_from_config() {
        let config: SchedulerConfig = SchedulerConfig {
            max_concurrency: Some(6),
            base_delay: Some("200ms".to_string()),
            max_delay: Some("5s".to_string()),
            max_transient_attempts: None,
            max_rate_limit_retries: Some(50),
            jitter: Some(false),
        };
        let opts = SchedulerOptions::from_config(&config).unwrap();
        assert_eq!(opts.max_concurrency, 6);
        assert_eq!(opts.retry.backoff.base_delay, Duration::from_millis(200));
        assert_eq!(opts.retry.backoff.max_delay, Duration::from_secs(5));
        assert!(!opts.retry.backoff.jitter);
        assert_eq!(opts.retry.max_transient_attempts, 5);
        assert_eq!(opts.retry.max_rate_limit_retries, Some(50));
    }

    #[test]
    fn options_from_config_rejects_bad_values() {
        let config = SchedulerConfig {
            base_delay: Some("whenever".to_string()),
            ..SchedulerConfig::default()
        };
        assert!(SchedulerOptions::from_config(&config).is_err());

        let config = SchedulerConfig {
            max_concurrency: Some(0),
            ..SchedulerConfig::default()
        };
        assert!(SchedulerOptions::from_config(&config).is_err());
    }
}
