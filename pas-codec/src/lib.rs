//! Command/response codec for the PAS5211 OLT management protocol
//!
//! This crate owns the closed command and response enumerations, the fixed
//! hardware parameter bundles sent during optics setup, and the binary
//! codec that maps between them and raw frame payloads.

pub mod codec;
pub mod message;
pub mod params;

pub use codec::{Pas5211Codec, PasCodec};
pub use message::{OltCommand, OltResponse, ResponseKind};
pub use params::{
    AlarmConfig, AlarmType, BurstTimingCtrl, GeneralOpticsParams, GeneralParamId, OltOpticsConfig,
    OpticsIoControl, OpticsVoltage, PonPolarity, PonToggle, PreambleParams, ResetTimingCtrl,
    ResetType, ResetValues, RngBurstDelay, SdSource, SnrBurstDelay,
};
