use thiserror::Error;

use crate::constants::ChannelId;

/// Main error type for PAS5211 OLT operations
#[derive(Error, Debug)]
pub enum PasError {
    #[error("link error: {0}")]
    Link(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("unexpected response during handshake: {0}")]
    UnexpectedResponse(String),

    #[error("channel id {0} is outside the configured channel set")]
    InvalidChannel(ChannelId),

    #[error("handshake retries exhausted")]
    RetriesExhausted,

    #[error("timed out waiting for {0}")]
    PhaseTimeout(&'static str),

    #[error("downstream transmit is disabled on channel {0}")]
    TransmitDisabled(ChannelId),

    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for PAS5211 OLT operations
pub type PasResult<T> = Result<T, PasError>;
