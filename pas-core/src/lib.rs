//! Core types for the PAS5211 OLT bring-up protocol
//!
//! This crate provides the error type and the fixed protocol constants
//! shared by every layer of the workspace.

pub mod constants;
pub mod error;

pub use constants::{
    CHANNELS, CHANNEL_COUNT, ChannelId, HANDSHAKE_TIMEOUT, INITIAL_RETRY_BUDGET,
    KEEPALIVE_INTERVAL, PROVISIONING_TIMEOUT,
};
pub use error::{PasError, PasResult};
