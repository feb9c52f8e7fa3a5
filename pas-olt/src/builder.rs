//! Sequencer construction with build-time validation

use pas_codec::{Pas5211Codec, PasCodec};
use pas_core::{PasError, PasResult};
use pas_transport::{MacAddress, OltLink};

use crate::context::{DEFAULT_IFACE, SessionContext};
use crate::sequencer::OltSequencer;

/// Builder of an [`OltSequencer`]
///
/// The target address and the link are mandatory; everything else has a
/// default. Validation happens in [`build`](Self::build) so a
/// half-configured builder can be passed around freely.
///
/// # Example
/// ```no_run
/// use pas_olt::SequencerBuilder;
/// use pas_transport::{ChannelLink, MacAddress};
///
/// # fn main() -> pas_core::PasResult<()> {
/// let target: MacAddress = "00:0c:d5:00:01:00".parse()?;
/// let (link, _peer) = ChannelLink::pair(MacAddress::new([0; 6]), target);
/// let sequencer = SequencerBuilder::new()
///     .target(target)
///     .link(link)
///     .verbose(true)
///     .build()?;
/// # let _ = sequencer;
/// # Ok(())
/// # }
/// ```
pub struct SequencerBuilder<L: OltLink> {
    target: Option<MacAddress>,
    link: Option<L>,
    iface: String,
    verbose: bool,
    debug_level: u8,
}

impl<L: OltLink> Default for SequencerBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: OltLink> SequencerBuilder<L> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: None,
            link: None,
            iface: DEFAULT_IFACE.to_string(),
            verbose: false,
            debug_level: 0,
        }
    }

    /// Address of the device to bring up
    #[must_use]
    pub fn target(mut self, target: MacAddress) -> Self {
        self.target = Some(target);
        self
    }

    /// Link carrying the session's frames
    #[must_use]
    pub fn link(mut self, link: L) -> Self {
        self.link = Some(link);
        self
    }

    /// Interface name recorded in the session context
    #[must_use]
    pub fn iface(mut self, iface: impl Into<String>) -> Self {
        self.iface = iface.into();
        self
    }

    /// Surface per-frame diagnostics
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Threshold for informational events
    #[must_use]
    pub fn debug_level(mut self, debug_level: u8) -> Self {
        self.debug_level = debug_level;
        self
    }

    /// Build with the standard PAS5211 codec
    ///
    /// # Errors
    /// Returns [`PasError::MissingConfig`] when the target or the link was
    /// never set.
    pub fn build(self) -> PasResult<OltSequencer<L, Pas5211Codec>> {
        self.build_with_codec(Pas5211Codec)
    }

    /// Build with a custom codec
    pub fn build_with_codec<C: PasCodec>(self, codec: C) -> PasResult<OltSequencer<L, C>> {
        let target = self.target.ok_or(PasError::MissingConfig("target"))?;
        let link = self.link.ok_or(PasError::MissingConfig("link"))?;
        let ctx = SessionContext::new(target, self.iface)
            .with_diagnostics(self.verbose, self.debug_level);
        Ok(OltSequencer::new(ctx, link, codec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pas_transport::ChannelLink;

    fn addrs() -> (MacAddress, MacAddress) {
        (MacAddress::new([1; 6]), MacAddress::new([2; 6]))
    }

    #[test]
    fn test_build_requires_target() {
        let (local, target) = addrs();
        let (link, _peer) = ChannelLink::pair(local, target);
        let result = SequencerBuilder::new().link(link).build();
        assert!(matches!(result, Err(PasError::MissingConfig("target"))));
    }

    #[test]
    fn test_build_requires_link() {
        let (_, target) = addrs();
        let result = SequencerBuilder::<ChannelLink>::new().target(target).build();
        assert!(matches!(result, Err(PasError::MissingConfig("link"))));
    }

    #[test]
    fn test_build_applies_defaults() {
        let (local, target) = addrs();
        let (link, _peer) = ChannelLink::pair(local, target);
        let sequencer = SequencerBuilder::new()
            .target(target)
            .link(link)
            .build()
            .unwrap();
        let ctx = sequencer.context();
        assert_eq!(ctx.target(), target);
        assert_eq!(ctx.iface(), "eth0");
        assert!(!ctx.verbose());
        assert_eq!(ctx.debug_level(), 0);
    }

    #[test]
    fn test_build_with_options() {
        let (local, target) = addrs();
        let (link, _peer) = ChannelLink::pair(local, target);
        let sequencer = SequencerBuilder::new()
            .target(target)
            .link(link)
            .iface("pon0")
            .verbose(true)
            .debug_level(3)
            .build()
            .unwrap();
        let ctx = sequencer.context();
        assert_eq!(ctx.iface(), "pon0");
        assert!(ctx.verbose());
        assert_eq!(ctx.debug_level(), 3);
    }
}
