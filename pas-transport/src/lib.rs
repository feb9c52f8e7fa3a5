//! Link layer module for the PAS5211 OLT bring-up protocol
//!
//! This crate provides the raw frame type, link-layer addressing, the
//! [`OltLink`] trait used by the sequencer to talk to one target device on
//! one interface, and an in-memory channel-backed implementation.

pub mod channel;
pub mod frame;
pub mod link;

pub use channel::{ChannelLink, LinkPeer};
pub use frame::{MacAddress, PonFrame};
pub use link::OltLink;
