//! Link trait used by the sequencer to reach one target device

use async_trait::async_trait;
use bytes::Bytes;
use pas_core::{ChannelId, PasResult};

use crate::frame::PonFrame;

/// Link to one target device on one interface
///
/// The sequencer owns exactly one link per session. Outbound payloads are
/// framed and addressed to the configured target; inbound frames are only
/// delivered when their link-layer source equals the target (all other
/// traffic on the interface is dropped by the link, not by the sequencer).
#[async_trait]
pub trait OltLink: Send {
    /// Link-layer address of the target device
    fn target(&self) -> crate::frame::MacAddress;

    /// Whether a frame passes the inbound address filter
    ///
    /// True iff the frame's source address equals the target.
    fn accepts(&self, frame: &PonFrame) -> bool {
        frame.src == self.target()
    }

    /// Transmit one framed payload to the target
    ///
    /// # Arguments
    /// * `payload` - Encoded command payload
    /// * `channel` - PON channel tag, `None` for channel-less commands
    async fn send(&mut self, payload: Bytes, channel: Option<ChannelId>) -> PasResult<()>;

    /// Receive the next frame that passes the address filter
    ///
    /// Pends until a filter-passing frame arrives. Frames from other
    /// sources are consumed and discarded. Returns an error only when the
    /// underlying medium is gone.
    async fn recv(&mut self) -> PasResult<PonFrame>;
}
