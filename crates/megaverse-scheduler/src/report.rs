//! Per-command results and the end-of-run report.

use std::fmt;

use megaverse_core::{Coordinate, DecodeError, PlacementCommand};

/// Why a command ended without being placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The service rejected the request; not retried.
    PermanentFailure { reason: String },
    /// Transient failures exhausted the attempt budget.
    TransientFailure { attempts: u32, last_error: String },
    /// Still throttled after the configured number of retries.
    RateLimitExhausted { retries: u32 },
    /// The run was cancelled before the command finished.
    Cancelled,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::PermanentFailure { reason } => {
                write!(f, "rejected by service: {reason}")
            }
            FailureReason::TransientFailure {
                attempts,
                last_error,
            } => write!(f, "gave up after {attempts} failed attempts: {last_error}"),
            FailureReason::RateLimitExhausted { retries } => {
                write!(f, "still rate limited after {retries} retries")
            }
            FailureReason::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementResult {
    Succeeded,
    Failed(FailureReason),
}

impl PlacementResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PlacementResult::Succeeded)
    }
}

/// Final state of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRecord {
    pub command: PlacementCommand,
    pub result: PlacementResult,
    pub attempts: u32,
}

/// Everything a run produced, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub records: Vec<PlacementRecord>,
    /// Cells skipped because their label did not decode.
    pub skipped: Vec<(Coordinate, DecodeError)>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.result.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.records.iter().filter(|r| !r.result.is_success())
    }

    /// Total creation attempts issued.
    pub fn attempts(&self) -> u32 {
        self.records.iter().map(|r| r.attempts).sum()
    }

    /// True when no placement ended `Failed`.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Result for the command at `coordinate`, if one was scheduled.
    pub fn result_at(&self, coordinate: Coordinate) -> Option<&PlacementRecord> {
        self.records
            .iter()
            .find(|r| r.command.coordinate == coordinate)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} placed, {} failed, {} skipped ({} requests)",
            self.succeeded(),
            self.failed(),
            self.skipped.len(),
            self.attempts()
        )?;
        for record in self.failures() {
            let PlacementResult::Failed(reason) = &record.result else {
                continue;
            };
            writeln!(
                f,
                "  failed {} at {}: {reason}",
                record.command.kind(),
                record.command.coordinate
            )?;
        }
        for (coordinate, error) in &self.skipped {
            writeln!(f, "  skipped {coordinate}: {error}")?;
        }
        Ok(())
    }
}
