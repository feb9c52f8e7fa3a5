//! Raw frame and link-layer addressing

use std::fmt::{self, Display};
use std::str::FromStr;

use bytes::Bytes;
use pas_core::{ChannelId, PasError};

/// 6-byte link-layer (MAC) address of a device
///
/// The sequencer filters inbound frames by comparing their source address
/// against the configured target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Create an address from raw bytes
    #[must_use]
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Get the raw address bytes
    #[must_use]
    pub const fn bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl FromStr for MacAddress {
    type Err = PasError;

    /// Parse a colon-separated address such as `"00:0c:d5:00:01:02"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut count = 0;
        for part in s.split(':') {
            if count == 6 {
                return Err(PasError::InvalidData(format!("MAC address too long: {s}")));
            }
            bytes[count] = u8::from_str_radix(part, 16)
                .map_err(|_| PasError::InvalidData(format!("invalid MAC octet: {part}")))?;
            count += 1;
        }
        if count != 6 {
            return Err(PasError::InvalidData(format!("MAC address too short: {s}")));
        }
        Ok(Self(bytes))
    }
}

impl Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// One raw frame on the PON management link
///
/// A frame carries the encoded command or response payload plus a channel
/// tag. Single-shot commands (version requests, keepalive) carry no channel
/// tag; per-channel provisioning commands and their acknowledgments tag the
/// PON channel they address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PonFrame {
    /// Link-layer source address
    pub src: MacAddress,
    /// Link-layer destination address
    pub dst: MacAddress,
    /// PON channel tag, `None` for channel-less commands
    pub channel: Option<ChannelId>,
    /// Encoded command or response payload
    pub payload: Bytes,
}

impl PonFrame {
    /// Create a new frame
    #[must_use]
    pub fn new(
        src: MacAddress,
        dst: MacAddress,
        channel: Option<ChannelId>,
        payload: Bytes,
    ) -> Self {
        Self {
            src,
            dst,
            channel,
            payload,
        }
    }
}
