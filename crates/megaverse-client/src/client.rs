//! Remote client — one creation request per placement command.
//!
//! The client never retries. It classifies each attempt into a
//! [`StatusOutcome`] and leaves retry policy to the caller.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use http::{Method, StatusCode};
use serde::Serialize;
use tracing::debug;

use megaverse_core::{Attribute, Color, Direction, PlacementCommand};

use crate::error::TransportError;
use crate::transport::Transport;

/// Longest response body excerpt kept in a failure reason.
const REASON_BODY_LIMIT: usize = 200;

/// Classified result of a single creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The service acknowledged the creation (2xx).
    Ok,
    /// The service is throttling (429).
    RateLimited,
    /// Network error, timeout, or 5xx.
    TransientFailure(String),
    /// Any other rejection; retrying will not help.
    PermanentFailure(String),
}

impl StatusOutcome {
    /// Classify an HTTP status, using `body` to describe failures.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if status.is_success() {
            return StatusOutcome::Ok;
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return StatusOutcome::RateLimited;
        }

        let reason = describe(status, body);
        if status.is_server_error() {
            StatusOutcome::TransientFailure(reason)
        } else {
            StatusOutcome::PermanentFailure(reason)
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, StatusOutcome::Ok)
    }
}

impl From<TransportError> for StatusOutcome {
    fn from(e: TransportError) -> Self {
        match e {
            // A URL we cannot even build a request for will never succeed.
            TransportError::InvalidUrl { .. }
            | TransportError::UnsupportedScheme(_)
            | TransportError::Request(_) => StatusOutcome::PermanentFailure(e.to_string()),
            _ => StatusOutcome::TransientFailure(e.to_string()),
        }
    }
}

fn describe(status: StatusCode, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return status.to_string();
    }
    let excerpt: String = text.chars().take(REASON_BODY_LIMIT).collect();
    format!("{status}: {excerpt}")
}

/// Boxed future returned by [`EntityClient::create`].
pub type CreateFuture<'a> = Pin<Box<dyn Future<Output = StatusOutcome> + Send + 'a>>;

/// Issues creation requests — injected into the scheduler for testability.
pub trait EntityClient: Send + Sync {
    /// Make exactly one creation attempt for `command`.
    fn create<'a>(&'a self, command: &'a PlacementCommand) -> CreateFuture<'a>;
}

/// JSON body of a creation request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody<'a> {
    row: u32,
    column: u32,
    candidate_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
}

impl<'a> CreateBody<'a> {
    fn new(command: &PlacementCommand, candidate_id: &'a str) -> Self {
        let (color, direction) = match command.attribute() {
            Some(Attribute::Color(c)) => (Some(c), None),
            Some(Attribute::Direction(d)) => (None, Some(d)),
            None => (None, None),
        };
        Self {
            row: command.coordinate.row,
            column: command.coordinate.column,
            candidate_id,
            color,
            direction,
        }
    }
}

/// Client for the Megaverse REST service.
#[derive(Clone)]
pub struct MegaverseClient {
    base_url: String,
    candidate_id: String,
    pub(crate) transport: Transport,
}

impl MegaverseClient {
    /// Create a client for `base_url` (e.g. `https://host/api`).
    pub fn new(
        base_url: &str,
        candidate_id: &str,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            candidate_id: candidate_id.to_string(),
            transport: Transport::new(timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Serialized request body for `command`.
    pub fn create_body(&self, command: &PlacementCommand) -> serde_json::Result<Bytes> {
        serde_json::to_vec(&CreateBody::new(command, &self.candidate_id)).map(Bytes::from)
    }

    /// POST one entity to its kind's endpoint.
    pub async fn create_entity(&self, command: &PlacementCommand) -> StatusOutcome {
        let url = self.url(command.kind().endpoint());
        let body = match self.create_body(command) {
            Ok(body) => body,
            Err(e) => return StatusOutcome::PermanentFailure(format!("encoding body: {e}")),
        };

        let outcome = match self.transport.send(Method::POST, &url, Some(body)).await {
            Ok(resp) => StatusOutcome::from_response(resp.status, &resp.body),
            Err(e) => StatusOutcome::from(e),
        };

        debug!(
            row = command.coordinate.row,
            column = command.coordinate.column,
            kind = %command.kind(),
            ?outcome,
            "create attempt finished"
        );
        outcome
    }
}

impl EntityClient for MegaverseClient {
    fn create<'a>(&'a self, command: &'a PlacementCommand) -> CreateFuture<'a> {
        Box::pin(self.create_entity(command))
    }
}
