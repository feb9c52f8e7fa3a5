//! Bring-up state machine states
//!
//! This module defines the states of one OLT bring-up session, from the
//! initial version handshake through the per-channel provisioning barriers
//! to steady-state supervision.

use std::fmt::{self, Display};
use std::time::Duration;

use pas_core::{HANDSHAKE_TIMEOUT, KEEPALIVE_INTERVAL, PROVISIONING_TIMEOUT};

/// State of one OLT bring-up session
///
/// # State Transitions
///
/// ```text
/// Disconnected -> WaitProtoVersion -> GotProtoVersion -> WaitOltVersion
///   -> GotOltVersion -> WaitOltOptics -> GotOltOptics -> WaitOltIoOptics
///   -> GotOltIoOptics -> WaitQueryResponse -> GotQueryResponse
///   -> WaitOltAdd -> GotOltAdd -> WaitAlarmSet -> GotAlarmSet (operational)
/// ```
///
/// `Got*` states fire their outbound commands as synchronous entry actions
/// and immediately hand over to the next `Wait*` state. `Wait*` states race
/// a timeout against the next inbound response. Handshake timeouts restart
/// from `Disconnected` while the retry budget lasts; provisioning timeouts
/// go straight to `Error`. `GotAlarmSet` is the operational steady state
/// with a recurring keepalive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OltState {
    /// No contact with the device yet, or handshake restarted after a
    /// retryable timeout
    Disconnected,
    /// Protocol-version request sent, waiting for the response
    WaitProtoVersion,
    /// Protocol version confirmed
    GotProtoVersion,
    /// OLT-version request sent, waiting for the response
    WaitOltVersion,
    /// OLT version confirmed, handshake complete
    GotOltVersion,
    /// Optics configuration fanned out, collecting per-channel acks
    WaitOltOptics,
    /// Every channel acknowledged the optics configuration
    GotOltOptics,
    /// IO pin control fanned out, collecting per-channel acks
    WaitOltIoOptics,
    /// Every channel acknowledged the IO pin control
    GotOltIoOptics,
    /// Transmit-enable query fanned out, collecting per-channel results
    WaitQueryResponse,
    /// Every channel reported downstream transmit enabled
    GotQueryResponse,
    /// Add-channel command fanned out, collecting per-channel acks
    WaitOltAdd,
    /// Every channel was added
    GotOltAdd,
    /// Alarm configuration fanned out, collecting per-channel acks
    WaitAlarmSet,
    /// Operational steady state: loss-of-signal alarms armed on every
    /// channel, keepalive running
    GotAlarmSet,
    /// Declared terminal success state
    ///
    /// No transition reaches it; `GotAlarmSet` is the de facto operational
    /// state and the session stays there for its whole lifetime.
    Initialized,
    /// Terminal failure sink, no transition leaves it
    Error,
}

impl OltState {
    /// Whether entering this state fires outbound commands immediately,
    /// with no external event required
    #[must_use]
    pub const fn has_entry_action(&self) -> bool {
        matches!(
            self,
            Self::Disconnected
                | Self::GotProtoVersion
                | Self::GotOltVersion
                | Self::GotOltOptics
                | Self::GotOltIoOptics
                | Self::GotQueryResponse
                | Self::GotOltAdd
        )
    }

    /// Whether this is one of the two handshake waits sharing the retry
    /// budget
    #[must_use]
    pub const fn is_handshake_wait(&self) -> bool {
        matches!(self, Self::WaitProtoVersion | Self::WaitOltVersion)
    }

    /// Whether this state collects per-channel acknowledgments behind the
    /// completion barrier
    #[must_use]
    pub const fn is_provisioning_wait(&self) -> bool {
        matches!(
            self,
            Self::WaitOltOptics
                | Self::WaitOltIoOptics
                | Self::WaitQueryResponse
                | Self::WaitOltAdd
                | Self::WaitAlarmSet
        )
    }

    /// Whether the session reached steady-state supervision
    #[must_use]
    pub const fn is_operational(&self) -> bool {
        matches!(self, Self::GotAlarmSet)
    }

    /// Whether no transition leaves this state
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Error | Self::Initialized)
    }

    /// Timer armed while waiting in this state
    ///
    /// Re-armed from scratch on every (re-)entry, including the self-loop
    /// taken while a barrier is partially complete. `None` for states that
    /// never wait.
    #[must_use]
    pub fn wait_timeout(&self) -> Option<Duration> {
        if self.is_handshake_wait() {
            Some(HANDSHAKE_TIMEOUT)
        } else if self.is_provisioning_wait() {
            Some(PROVISIONING_TIMEOUT)
        } else if self.is_operational() {
            Some(KEEPALIVE_INTERVAL)
        } else {
            None
        }
    }

    /// Human-readable name of the phase, used in timeout diagnostics
    #[must_use]
    pub const fn phase_name(&self) -> &'static str {
        match self {
            Self::WaitProtoVersion => "protocol version",
            Self::WaitOltVersion => "olt version",
            Self::WaitOltOptics => "olt optics acks",
            Self::WaitOltIoOptics => "olt io optics acks",
            Self::WaitQueryResponse => "transmit-enable query",
            Self::WaitOltAdd => "add olt channel acks",
            Self::WaitAlarmSet => "alarm config acks",
            Self::GotAlarmSet => "keepalive",
            _ => "no wait",
        }
    }
}

impl Default for OltState {
    fn default() -> Self {
        Self::Disconnected
    }
}

impl Display for OltState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "Disconnected",
            Self::WaitProtoVersion => "WaitProtoVersion",
            Self::GotProtoVersion => "GotProtoVersion",
            Self::WaitOltVersion => "WaitOltVersion",
            Self::GotOltVersion => "GotOltVersion",
            Self::WaitOltOptics => "WaitOltOptics",
            Self::GotOltOptics => "GotOltOptics",
            Self::WaitOltIoOptics => "WaitOltIoOptics",
            Self::GotOltIoOptics => "GotOltIoOptics",
            Self::WaitQueryResponse => "WaitQueryResponse",
            Self::GotQueryResponse => "GotQueryResponse",
            Self::WaitOltAdd => "WaitOltAdd",
            Self::GotOltAdd => "GotOltAdd",
            Self::WaitAlarmSet => "WaitAlarmSet",
            Self::GotAlarmSet => "GotAlarmSet",
            Self::Initialized => "Initialized",
            Self::Error => "Error",
        };
        f.write_str(name)
    }
}
