//! Closed command and response enumerations

use std::fmt::{self, Display};

use pas_core::ChannelId;

use crate::params::{AlarmConfig, GeneralParamId, OltOpticsConfig, OpticsIoControl};

/// Bit set on every response opcode
pub const RESPONSE_FLAG: u16 = 0x8000;

pub(crate) const OPCODE_GET_PROTOCOL_VERSION: u16 = 0x0001;
pub(crate) const OPCODE_GET_OLT_VERSION: u16 = 0x0002;
pub(crate) const OPCODE_SET_OLT_OPTICS: u16 = 0x0003;
pub(crate) const OPCODE_SET_OPTICS_IO_CONTROL: u16 = 0x0004;
pub(crate) const OPCODE_GET_GENERAL_PARAM: u16 = 0x0005;
pub(crate) const OPCODE_ADD_OLT_CHANNEL: u16 = 0x0006;
pub(crate) const OPCODE_SET_ALARM_CONFIG: u16 = 0x0007;

/// Outbound command kinds
///
/// Commands that configure hardware carry their opaque parameter bundle;
/// the query command carries the parameter id it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OltCommand {
    /// Protocol-version handshake request
    GetProtocolVersion,
    /// OLT firmware version request, also used as the steady-state keepalive
    GetOltVersion,
    /// Optics configuration for one channel
    SetOltOptics(OltOpticsConfig),
    /// Optics IO pin control for one channel
    SetOpticsIoControl(OpticsIoControl),
    /// Query of a general parameter on one channel
    GetGeneralParam(GeneralParamId),
    /// Register one OLT channel
    AddOltChannel,
    /// Alarm configuration for one channel
    SetAlarmConfig(AlarmConfig),
}

impl OltCommand {
    /// Wire opcode of the command
    #[must_use]
    pub const fn opcode(&self) -> u16 {
        match self {
            Self::GetProtocolVersion => OPCODE_GET_PROTOCOL_VERSION,
            Self::GetOltVersion => OPCODE_GET_OLT_VERSION,
            Self::SetOltOptics(_) => OPCODE_SET_OLT_OPTICS,
            Self::SetOpticsIoControl(_) => OPCODE_SET_OPTICS_IO_CONTROL,
            Self::GetGeneralParam(_) => OPCODE_GET_GENERAL_PARAM,
            Self::AddOltChannel => OPCODE_ADD_OLT_CHANNEL,
            Self::SetAlarmConfig(_) => OPCODE_SET_ALARM_CONFIG,
        }
    }

    /// Short command name for diagnostics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetProtocolVersion => "GetProtocolVersion",
            Self::GetOltVersion => "GetOltVersion",
            Self::SetOltOptics(_) => "SetOltOptics",
            Self::SetOpticsIoControl(_) => "SetOpticsIoControl",
            Self::GetGeneralParam(_) => "GetGeneralParam",
            Self::AddOltChannel => "AddOltChannel",
            Self::SetAlarmConfig(_) => "SetAlarmConfig",
        }
    }
}

impl Display for OltCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inbound response kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    ProtocolVersion,
    OltVersion,
    SetOltOpticsAck,
    SetOpticsIoControlAck,
    GeneralParam,
    AddOltChannelAck,
    SetAlarmConfigAck,
}

impl ResponseKind {
    /// Wire opcode of the response
    #[must_use]
    pub const fn opcode(&self) -> u16 {
        let request = match self {
            Self::ProtocolVersion => OPCODE_GET_PROTOCOL_VERSION,
            Self::OltVersion => OPCODE_GET_OLT_VERSION,
            Self::SetOltOpticsAck => OPCODE_SET_OLT_OPTICS,
            Self::SetOpticsIoControlAck => OPCODE_SET_OPTICS_IO_CONTROL,
            Self::GeneralParam => OPCODE_GET_GENERAL_PARAM,
            Self::AddOltChannelAck => OPCODE_ADD_OLT_CHANNEL,
            Self::SetAlarmConfigAck => OPCODE_SET_ALARM_CONFIG,
        };
        request | RESPONSE_FLAG
    }

    /// Classify a wire opcode, `None` for opcodes outside the closed set
    #[must_use]
    pub const fn from_opcode(opcode: u16) -> Option<Self> {
        if opcode & RESPONSE_FLAG == 0 {
            return None;
        }
        match opcode & !RESPONSE_FLAG {
            OPCODE_GET_PROTOCOL_VERSION => Some(Self::ProtocolVersion),
            OPCODE_GET_OLT_VERSION => Some(Self::OltVersion),
            OPCODE_SET_OLT_OPTICS => Some(Self::SetOltOpticsAck),
            OPCODE_SET_OPTICS_IO_CONTROL => Some(Self::SetOpticsIoControlAck),
            OPCODE_GET_GENERAL_PARAM => Some(Self::GeneralParam),
            OPCODE_ADD_OLT_CHANNEL => Some(Self::AddOltChannelAck),
            OPCODE_SET_ALARM_CONFIG => Some(Self::SetAlarmConfigAck),
            _ => None,
        }
    }
}

impl Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ProtocolVersion => "ProtocolVersion",
            Self::OltVersion => "OltVersion",
            Self::SetOltOpticsAck => "SetOltOpticsAck",
            Self::SetOpticsIoControlAck => "SetOpticsIoControlAck",
            Self::GeneralParam => "GeneralParam",
            Self::AddOltChannelAck => "AddOltChannelAck",
            Self::SetAlarmConfigAck => "SetAlarmConfigAck",
        };
        f.write_str(name)
    }
}

/// One decoded inbound response
///
/// The channel tag is taken from the frame, the kind and value from the
/// payload. The sequencer matches on kind and channel only; the value is
/// inspected solely during the transmit-enable query phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OltResponse {
    pub kind: ResponseKind,
    pub channel: Option<ChannelId>,
    pub value: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_roundtrip() {
        for kind in [
            ResponseKind::ProtocolVersion,
            ResponseKind::OltVersion,
            ResponseKind::SetOltOpticsAck,
            ResponseKind::SetOpticsIoControlAck,
            ResponseKind::GeneralParam,
            ResponseKind::AddOltChannelAck,
            ResponseKind::SetAlarmConfigAck,
        ] {
            assert_eq!(ResponseKind::from_opcode(kind.opcode()), Some(kind));
        }
    }

    #[test]
    fn test_request_opcodes_are_not_responses() {
        assert_eq!(ResponseKind::from_opcode(OPCODE_GET_OLT_VERSION), None);
        assert_eq!(ResponseKind::from_opcode(0x7fff), None);
        assert_eq!(ResponseKind::from_opcode(RESPONSE_FLAG | 0x0500), None);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(OltCommand::GetProtocolVersion.name(), "GetProtocolVersion");
        assert_eq!(OltCommand::AddOltChannel.to_string(), "AddOltChannel");
    }
}
