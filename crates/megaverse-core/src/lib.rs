//! megaverse-core — grid types, label decoding, and configuration.
//!
//! Everything here is free of I/O except [`config::MegaverseConfig::from_file`].

pub mod config;
pub mod decode;
pub mod error;
pub mod render;
pub mod types;

pub use config::MegaverseConfig;
pub use decode::{DecodedGrid, decode, decode_grid};
pub use error::DecodeError;
pub use render::render;
pub use types::*;
