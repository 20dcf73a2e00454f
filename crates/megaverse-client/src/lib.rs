//! megaverse-client — REST client for the Megaverse service.
//!
//! Provides the goal fetcher and the per-entity creation call. Every
//! request is a single HTTP/1.1 exchange (plain TCP or rustls) whose
//! status is classified into a [`StatusOutcome`].
//!
//! # Architecture
//!
//! ```text
//! MegaverseClient
//!   ├── fetch_goal()     GET  {base}/map/{candidateId}/goal → Grid
//!   ├── create_entity()  POST {base}/{polyanets|soloons|comeths} → StatusOutcome
//!   └── Transport        hyper http1 + tokio-rustls, per-request timeout
//! ```
//!
//! The [`EntityClient`] trait is the seam the scheduler drives; tests plug
//! in stub implementations.

pub mod client;
pub mod error;
pub mod goal;
pub mod transport;

pub use client::{CreateFuture, EntityClient, MegaverseClient, StatusOutcome};
pub use error::{FetchError, TransportError};
pub use goal::parse_goal;
