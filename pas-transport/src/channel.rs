//! In-memory channel-backed link
//!
//! [`ChannelLink`] carries frames over a pair of tokio mpsc channels. It is
//! the loopback implementation of [`OltLink`]: integration tests and local
//! tooling stand in for the device on the [`LinkPeer`] side, while the
//! sequencer drives the link exactly as it would a raw interface.

use async_trait::async_trait;
use bytes::Bytes;
use pas_core::{ChannelId, PasError, PasResult};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::frame::{MacAddress, PonFrame};
use crate::link::OltLink;

/// Channel-backed link to a simulated device
pub struct ChannelLink {
    local: MacAddress,
    target: MacAddress,
    tx: UnboundedSender<PonFrame>,
    rx: UnboundedReceiver<PonFrame>,
}

/// Device side of a [`ChannelLink`]
///
/// Frames the sequencer transmits arrive on `rx`; frames pushed into `tx`
/// are delivered to the sequencer's receive path (subject to its address
/// filter).
pub struct LinkPeer {
    /// Frames sent by the sequencer
    pub rx: UnboundedReceiver<PonFrame>,
    /// Inject frames toward the sequencer
    pub tx: UnboundedSender<PonFrame>,
}

impl ChannelLink {
    /// Create a connected link/peer pair
    ///
    /// # Arguments
    /// * `local` - Address the link stamps as frame source on send
    /// * `target` - Address of the simulated device
    #[must_use]
    pub fn pair(local: MacAddress, target: MacAddress) -> (Self, LinkPeer) {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let (in_tx, in_rx) = mpsc::unbounded_channel();
        (
            Self {
                local,
                target,
                tx: out_tx,
                rx: in_rx,
            },
            LinkPeer {
                rx: out_rx,
                tx: in_tx,
            },
        )
    }

    fn closed() -> PasError {
        PasError::Link(std::io::Error::new(
            std::io::ErrorKind::ConnectionAborted,
            "link peer is gone",
        ))
    }
}

#[async_trait]
impl OltLink for ChannelLink {
    fn target(&self) -> MacAddress {
        self.target
    }

    async fn send(&mut self, payload: Bytes, channel: Option<ChannelId>) -> PasResult<()> {
        let frame = PonFrame::new(self.local, self.target, channel, payload);
        self.tx.send(frame).map_err(|_| Self::closed())
    }

    async fn recv(&mut self) -> PasResult<PonFrame> {
        loop {
            let frame = self.rx.recv().await.ok_or_else(Self::closed)?;
            if self.accepts(&frame) {
                return Ok(frame);
            }
            log::debug!("dropping frame from foreign source {}", frame.src);
        }
    }
}
