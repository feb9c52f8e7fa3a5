//! Session context: the single source of truth for one device's bring-up

use pas_core::INITIAL_RETRY_BUDGET;
use pas_transport::MacAddress;

use crate::state::OltState;
use crate::tracker::ChannelTracker;

/// Default interface binding
pub const DEFAULT_IFACE: &str = "eth0";

/// Mutable state of one bring-up session
///
/// Exactly one sequencer owns one context; nothing here is shared between
/// sessions, so bringing up several line cards concurrently just means
/// several independent contexts. The context lives from construction
/// through the indefinite operational phase and is discarded after a
/// terminal failure; there is no automatic restart out of `Error`.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Link-layer address of the device under bring-up
    target: MacAddress,
    /// Name of the interface the link is bound to
    iface: String,
    /// Remaining handshake retries; decremented on handshake timeouts
    /// only, fatal once negative
    retry_budget: i8,
    /// Active state
    state: OltState,
    /// Completion barrier of the in-flight multi-channel phase
    tracker: ChannelTracker,
    /// Surface per-frame diagnostics
    verbose: bool,
    /// Threshold for informational events; observational only
    debug_level: u8,
}

impl SessionContext {
    /// Create a fresh context in `Disconnected` with a full retry budget
    #[must_use]
    pub fn new(target: MacAddress, iface: String) -> Self {
        Self {
            target,
            iface,
            retry_budget: INITIAL_RETRY_BUDGET,
            state: OltState::Disconnected,
            tracker: ChannelTracker::new(),
            verbose: false,
            debug_level: 0,
        }
    }

    /// Set the diagnostic options
    #[must_use]
    pub fn with_diagnostics(mut self, verbose: bool, debug_level: u8) -> Self {
        self.verbose = verbose;
        self.debug_level = debug_level;
        self
    }

    /// Address of the device
    #[must_use]
    pub const fn target(&self) -> MacAddress {
        self.target
    }

    /// Interface the session is bound to
    #[must_use]
    pub fn iface(&self) -> &str {
        &self.iface
    }

    /// Active state
    #[must_use]
    pub const fn state(&self) -> OltState {
        self.state
    }

    /// Remaining handshake retries
    #[must_use]
    pub const fn retry_budget(&self) -> i8 {
        self.retry_budget
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub const fn debug_level(&self) -> u8 {
        self.debug_level
    }

    /// Completion barrier of the in-flight phase
    #[must_use]
    pub const fn tracker(&self) -> &ChannelTracker {
        &self.tracker
    }

    pub(crate) fn tracker_mut(&mut self) -> &mut ChannelTracker {
        &mut self.tracker
    }

    pub(crate) fn set_state(&mut self, state: OltState) {
        self.state = state;
    }

    /// Spend one handshake retry, returning the remaining budget
    pub(crate) fn consume_retry(&mut self) -> i8 {
        self.retry_budget -= 1;
        self.retry_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SessionContext {
        SessionContext::new(MacAddress::new([1; 6]), DEFAULT_IFACE.to_string())
    }

    #[test]
    fn test_fresh_context() {
        let ctx = context();
        assert_eq!(ctx.state(), OltState::Disconnected);
        assert_eq!(ctx.retry_budget(), 3);
        assert!(!ctx.tracker().is_active());
        assert_eq!(ctx.iface(), "eth0");
    }

    #[test]
    fn test_retry_budget_goes_negative() {
        let mut ctx = context();
        assert_eq!(ctx.consume_retry(), 2);
        assert_eq!(ctx.consume_retry(), 1);
        assert_eq!(ctx.consume_retry(), 0);
        assert_eq!(ctx.consume_retry(), -1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = context();
        let second = context();
        first.consume_retry();
        first.set_state(OltState::Error);
        assert_eq!(second.retry_budget(), 3);
        assert_eq!(second.state(), OltState::Disconnected);
    }
}
