//! Per-phase channel completion barrier

use pas_core::{ChannelId, PasError, PasResult};

/// Reusable completion barrier over the fixed channel set
///
/// Each multi-channel provisioning phase begins a fresh round of flags,
/// one per channel, all false. Acknowledgments mark their channel's flag;
/// the phase advances only once every flag is true. Flags only ever go
/// false to true, so the barrier is invariant under the arrival order of
/// the acknowledgments. After a completed round the tracker is reset so
/// the next phase can reuse it; phases never overlap within one session.
#[derive(Debug, Clone, Default)]
pub struct ChannelTracker {
    flags: Vec<bool>,
}

impl ChannelTracker {
    /// Create an idle tracker with no round in flight
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new round with `count` unacknowledged channels
    pub fn begin(&mut self, count: usize) {
        debug_assert!(self.flags.is_empty(), "tracker round already in flight");
        self.flags.clear();
        self.flags.resize(count, false);
    }

    /// Mark one channel as acknowledged
    ///
    /// Marking an already-acknowledged channel is a no-op. A channel id
    /// outside the round is an error that the caller must escalate, never
    /// swallow: a device answering on a channel we do not have is a fault.
    pub fn mark(&mut self, channel: ChannelId) -> PasResult<()> {
        let slot = self
            .flags
            .get_mut(channel as usize)
            .ok_or(PasError::InvalidChannel(channel))?;
        *slot = true;
        Ok(())
    }

    /// Whether every channel of the current round has acknowledged
    ///
    /// False while no round is in flight.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.flags.is_empty() && self.flags.iter().all(|&acked| acked)
    }

    /// Whether a round is in flight
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.flags.is_empty()
    }

    /// Clear the round
    pub fn reset(&mut self) {
        self.flags.clear();
    }
}
