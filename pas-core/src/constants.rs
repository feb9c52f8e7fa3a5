//! Fixed protocol constants
//!
//! These values are part of the device's compatibility surface and must not
//! be made configurable: the line card exposes exactly four PON channels and
//! the firmware expects the handshake/provisioning cadence below.

use std::time::Duration;

/// Identifier of one PON channel on the line card
pub type ChannelId = u8;

/// The fixed channel set of the line card
///
/// Every multi-channel provisioning phase fans out one command per entry,
/// in increasing channel-id order.
pub const CHANNELS: [ChannelId; 4] = [0, 1, 2, 3];

/// Number of PON channels
pub const CHANNEL_COUNT: usize = CHANNELS.len();

/// Timeout for the protocol-version and OLT-version handshake waits
pub const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(1);

/// Timeout for every provisioning wait (optics, IO-optics, query, add, alarm)
pub const PROVISIONING_TIMEOUT: Duration = Duration::from_secs(3);

/// Interval of the steady-state keepalive request once operational
pub const KEEPALIVE_INTERVAL: Duration = Duration::from_secs(1);

/// Initial handshake retry budget
///
/// Decremented on each handshake timeout; a decrement below zero is fatal.
/// The budget is shared between the protocol-version and OLT-version waits.
pub const INITIAL_RETRY_BUDGET: i8 = 3;
