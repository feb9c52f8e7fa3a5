//! Bring-up sequencer for PAS5211-based OLT line cards
//!
//! This crate drives one optical line terminal from first contact to
//! steady-state supervision: a retried two-step version handshake, four
//! per-channel provisioning barriers (optics, IO pin control,
//! transmit-enable verification, channel registration), the alarm arming
//! phase and finally a recurring keepalive.
//!
//! The transition rules live in [`sequencer::transition`] as a pure
//! function over [`SessionContext`] and [`Event`]; [`OltSequencer`] wraps
//! them with the link I/O and timers. Construct one through
//! [`SequencerBuilder`] and call [`OltSequencer::run`].

pub mod builder;
pub mod context;
pub mod event;
pub mod sequencer;
pub mod state;
pub mod tracker;

pub use builder::SequencerBuilder;
pub use context::{DEFAULT_IFACE, SessionContext};
pub use event::Event;
pub use sequencer::{Action, OltSequencer, Step, transition};
pub use state::OltState;
pub use tracker::ChannelTracker;
