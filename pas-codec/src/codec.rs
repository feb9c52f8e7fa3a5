//! Binary codec between commands/responses and frame payloads
//!
//! # Wire format
//! Every payload starts with a big-endian u16 opcode. Command payloads
//! append the parameter bundle fields in declaration order; response
//! payloads append a big-endian i32 value. The channel tag travels in the
//! frame header, not in the payload.

use bytes::Bytes;
use pas_core::{PasError, PasResult};
use pas_transport::PonFrame;

use crate::message::{OltCommand, OltResponse, ResponseKind};
use crate::params::{
    BurstTimingCtrl, GeneralOpticsParams, OltOpticsConfig, PreambleParams, ResetTimingCtrl,
    ResetValues,
};

/// Codec between protocol messages and raw frame payloads
pub trait PasCodec: Send {
    /// Encode one outbound command into a frame payload
    fn encode(&self, command: &OltCommand) -> PasResult<Bytes>;

    /// Decode and classify one inbound frame
    ///
    /// A frame whose opcode is outside the closed response set, or whose
    /// payload is truncated, is a decode failure. The caller decides
    /// whether that is fatal for the phase it is waiting on.
    fn decode(&self, frame: &PonFrame) -> PasResult<OltResponse>;
}

/// The PAS5211 binary codec
#[derive(Debug, Clone, Copy, Default)]
pub struct Pas5211Codec;

impl Pas5211Codec {
    /// Encode a response payload
    ///
    /// The inverse of `decode` for the payload part; device simulators and
    /// tests use it to fabricate inbound traffic.
    #[must_use]
    pub fn encode_response(kind: ResponseKind, value: i32) -> Bytes {
        let mut out = Vec::with_capacity(6);
        out.extend_from_slice(&kind.opcode().to_be_bytes());
        out.extend_from_slice(&value.to_be_bytes());
        Bytes::from(out)
    }
}

impl PasCodec for Pas5211Codec {
    fn encode(&self, command: &OltCommand) -> PasResult<Bytes> {
        let mut out = Vec::with_capacity(8);
        out.extend_from_slice(&command.opcode().to_be_bytes());
        match command {
            OltCommand::GetProtocolVersion
            | OltCommand::GetOltVersion
            | OltCommand::AddOltChannel => {}
            OltCommand::SetOltOptics(cfg) => write_optics_config(cfg, &mut out),
            OltCommand::SetOpticsIoControl(io) => {
                out.extend_from_slice(&[io.i2c_clk, io.i2c_data, io.tx_enable, io.tx_alarm]);
            }
            OltCommand::GetGeneralParam(param) => {
                out.extend_from_slice(&(*param as u16).to_be_bytes());
            }
            OltCommand::SetAlarmConfig(alarm) => {
                out.push(alarm.alarm as u8);
                out.push(alarm.state as u8);
            }
        }
        Ok(Bytes::from(out))
    }

    fn decode(&self, frame: &PonFrame) -> PasResult<OltResponse> {
        let payload = &frame.payload;
        if payload.len() < 2 {
            return Err(PasError::Decode(format!(
                "payload too short for an opcode: {} bytes",
                payload.len()
            )));
        }
        let opcode = u16::from_be_bytes([payload[0], payload[1]]);
        let kind = ResponseKind::from_opcode(opcode)
            .ok_or_else(|| PasError::Decode(format!("unknown response opcode 0x{opcode:04x}")))?;
        if payload.len() < 6 {
            return Err(PasError::Decode(format!(
                "truncated {kind} response: {} bytes",
                payload.len()
            )));
        }
        let value = i32::from_be_bytes([payload[2], payload[3], payload[4], payload[5]]);
        Ok(OltResponse {
            kind,
            channel: frame.channel,
            value,
        })
    }
}

fn write_optics_config(cfg: &OltOpticsConfig, out: &mut Vec<u8>) {
    out.push(cfg.voltage_if as u8);
    write_burst_timing(&cfg.burst, out);
    write_general_optics(&cfg.general, out);
    write_reset_timing(&cfg.reset, out);
    write_preamble(&cfg.preamble, out);
}

fn write_burst_timing(burst: &BurstTimingCtrl, out: &mut Vec<u8>) {
    out.push(burst.control);
    out.push(burst.timer);
    out.extend_from_slice(&burst.snr_burst.timer_delay.to_be_bytes());
    out.extend_from_slice(&burst.snr_burst.preamble_delay.to_be_bytes());
    out.extend_from_slice(&burst.snr_burst.delimiter_delay.to_be_bytes());
    out.extend_from_slice(&burst.snr_burst.burst_delay.to_be_bytes());
    out.extend_from_slice(&burst.rng_burst.timer_delay.to_be_bytes());
    out.extend_from_slice(&burst.rng_burst.preamble_delay.to_be_bytes());
    out.extend_from_slice(&burst.rng_burst.delimiter_delay.to_be_bytes());
}

fn write_general_optics(general: &GeneralOpticsParams, out: &mut Vec<u8>) {
    out.extend_from_slice(&[
        general.laser_reset_polarity as u8,
        general.laser_sd_polarity as u8,
        general.sd_source as u8,
        general.sd_hold_snr_ranging as u8,
        general.sd_hold_normal as u8,
        general.reset_type_snr_ranging as u8,
        general.reset_type_normal as u8,
        general.laser_reset_enable as u8,
    ]);
}

fn write_reset_values(values: &ResetValues, out: &mut Vec<u8>) {
    out.extend_from_slice(&[
        values.bcdr_reset_d2,
        values.bcdr_reset_d1,
        values.laser_reset_d2,
        values.laser_reset_d1,
    ]);
}

fn write_reset_timing(reset: &ResetTimingCtrl, out: &mut Vec<u8>) {
    write_reset_values(&reset.reset_data_burst, out);
    write_reset_values(&reset.reset_snr_burst, out);
    write_reset_values(&reset.reset_rng_burst, out);
    write_reset_values(&reset.single_reset, out);
    write_reset_values(&reset.double_reset, out);
}

fn write_preamble(preamble: &PreambleParams, out: &mut Vec<u8>) {
    out.extend_from_slice(&[
        preamble.correlation_preamble_length,
        preamble.preamble_length_snr_rng,
        preamble.guard_time_data_mode,
        preamble.type1_size_data,
        preamble.type2_size_data,
        preamble.type3_size_data,
        preamble.type3_pattern,
        preamble.delimiter_size,
        preamble.delimiter_byte1,
        preamble.delimiter_byte2,
        preamble.delimiter_byte3,
    ]);
}
