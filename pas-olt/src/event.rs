//! Events driving the bring-up state machine

use pas_codec::OltResponse;

/// One event consumed by the transition function
///
/// `Entered` is fed synchronously right after a transition into a state
/// with an entry action; the other variants are the two outcomes of the
/// wait race plus the explicit decode-failure case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A state with an entry action was just entered
    Entered,
    /// The wait timer expired before any frame arrived
    TimerFired,
    /// A filter-passing frame arrived and decoded into a response
    Response(OltResponse),
    /// A filter-passing frame arrived but could not be decoded
    ///
    /// Treated exactly like a non-matching response by the waiting state.
    DecodeFailed,
}

impl Event {
    /// Whether the event was produced by the wait race (as opposed to
    /// being fed synchronously on entry)
    #[must_use]
    pub const fn is_external(&self) -> bool {
        !matches!(self, Self::Entered)
    }
}
