//! Fixed hardware parameter bundles
//!
//! The values in this module are the firmware-mandated timing, optics,
//! reset and preamble constants for the line card. From the sequencer's
//! point of view they are opaque payload bundles: it never inspects them,
//! it only sends them during the provisioning phases. The `Default` impls
//! carry the one supported configuration.

use pas_core::{CHANNEL_COUNT, ChannelId};

/// Signal polarity toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PonPolarity {
    ActiveLow = 0,
    ActiveHigh = 1,
}

/// Generic enable/disable toggle used across PON parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PonToggle {
    Disable = 0,
    Enable = 1,
}

/// Source of the signal-detect indication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SdSource {
    LaserSd = 0,
    Receiver = 1,
}

/// Laser reset strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ResetType {
    DelayBased = 0,
    NormalStartBurstBased = 1,
}

/// Optics voltage interface level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpticsVoltage {
    Lvpecl = 0,
    Lvds = 1,
}

/// Alarm kind selectable in the alarm configuration command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AlarmType {
    /// Loss-of-signal alarm
    LossOfSignal = 1,
}

/// Identifier of a queryable general parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum GeneralParamId {
    /// Default downstream transmit-enable state of a channel
    TxEnableDefault = 0,
}

/// Burst delay applied during SNR measurement windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnrBurstDelay {
    pub timer_delay: u16,
    pub preamble_delay: u16,
    pub delimiter_delay: u16,
    pub burst_delay: u16,
}

impl Default for SnrBurstDelay {
    fn default() -> Self {
        Self {
            timer_delay: 8,
            preamble_delay: 32,
            delimiter_delay: 128,
            burst_delay: 128,
        }
    }
}

/// Burst delay applied during ranging windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngBurstDelay {
    pub timer_delay: u16,
    pub preamble_delay: u16,
    pub delimiter_delay: u16,
}

impl Default for RngBurstDelay {
    fn default() -> Self {
        Self {
            timer_delay: 8,
            preamble_delay: 32,
            delimiter_delay: 128,
        }
    }
}

/// Burst timing control block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstTimingCtrl {
    pub control: u8,
    pub timer: u8,
    pub snr_burst: SnrBurstDelay,
    pub rng_burst: RngBurstDelay,
}

impl Default for BurstTimingCtrl {
    fn default() -> Self {
        Self {
            control: 1,
            timer: 1,
            snr_burst: SnrBurstDelay::default(),
            rng_burst: RngBurstDelay::default(),
        }
    }
}

/// General optics behavior parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralOpticsParams {
    pub laser_reset_polarity: PonPolarity,
    pub laser_sd_polarity: PonPolarity,
    pub sd_source: SdSource,
    pub sd_hold_snr_ranging: PonToggle,
    pub sd_hold_normal: PonToggle,
    pub reset_type_snr_ranging: ResetType,
    pub reset_type_normal: ResetType,
    pub laser_reset_enable: PonToggle,
}

impl Default for GeneralOpticsParams {
    fn default() -> Self {
        Self {
            laser_reset_polarity: PonPolarity::ActiveHigh,
            laser_sd_polarity: PonPolarity::ActiveHigh,
            sd_source: SdSource::LaserSd,
            sd_hold_snr_ranging: PonToggle::Disable,
            sd_hold_normal: PonToggle::Disable,
            reset_type_snr_ranging: ResetType::DelayBased,
            reset_type_normal: ResetType::NormalStartBurstBased,
            laser_reset_enable: PonToggle::Enable,
        }
    }
}

/// One group of BCDR/laser reset delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetValues {
    pub bcdr_reset_d2: u8,
    pub bcdr_reset_d1: u8,
    pub laser_reset_d2: u8,
    pub laser_reset_d1: u8,
}

impl ResetValues {
    #[must_use]
    pub const fn new(bcdr_reset_d2: u8, bcdr_reset_d1: u8, laser_reset_d2: u8, laser_reset_d1: u8) -> Self {
        Self {
            bcdr_reset_d2,
            bcdr_reset_d1,
            laser_reset_d2,
            laser_reset_d1,
        }
    }
}

/// Reset timing control block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimingCtrl {
    pub reset_data_burst: ResetValues,
    pub reset_snr_burst: ResetValues,
    pub reset_rng_burst: ResetValues,
    pub single_reset: ResetValues,
    pub double_reset: ResetValues,
}

impl Default for ResetTimingCtrl {
    fn default() -> Self {
        Self {
            reset_data_burst: ResetValues::new(1, 11, 2, 5),
            reset_snr_burst: ResetValues::new(2, 9, 2, 1),
            reset_rng_burst: ResetValues::new(2, 9, 2, 1),
            single_reset: ResetValues::new(1, 1, 1, 1),
            double_reset: ResetValues::new(1, 1, 1, 1),
        }
    }
}

/// Upstream preamble and delimiter parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreambleParams {
    pub correlation_preamble_length: u8,
    pub preamble_length_snr_rng: u8,
    pub guard_time_data_mode: u8,
    pub type1_size_data: u8,
    pub type2_size_data: u8,
    pub type3_size_data: u8,
    pub type3_pattern: u8,
    pub delimiter_size: u8,
    pub delimiter_byte1: u8,
    pub delimiter_byte2: u8,
    pub delimiter_byte3: u8,
}

impl Default for PreambleParams {
    fn default() -> Self {
        Self {
            correlation_preamble_length: 8,
            preamble_length_snr_rng: 119,
            guard_time_data_mode: 32,
            type1_size_data: 0,
            type2_size_data: 0,
            type3_size_data: 5,
            type3_pattern: 170,
            delimiter_size: 20,
            delimiter_byte1: 171,
            delimiter_byte2: 89,
            delimiter_byte3: 131,
        }
    }
}

/// Complete optics configuration sent to every channel during optics setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OltOpticsConfig {
    pub voltage_if: OpticsVoltage,
    pub burst: BurstTimingCtrl,
    pub general: GeneralOpticsParams,
    pub reset: ResetTimingCtrl,
    pub preamble: PreambleParams,
}

impl Default for OltOpticsConfig {
    fn default() -> Self {
        Self {
            voltage_if: OpticsVoltage::Lvpecl,
            burst: BurstTimingCtrl::default(),
            general: GeneralOpticsParams::default(),
            reset: ResetTimingCtrl::default(),
            preamble: PreambleParams::default(),
        }
    }
}

/// Optics IO pin control for one channel
///
/// Unlike the other bundles the pin assignment differs per channel; the
/// fixed mapping lives in [`IO_CONTROL_PINS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpticsIoControl {
    pub i2c_clk: u8,
    pub i2c_data: u8,
    pub tx_enable: u8,
    pub tx_alarm: u8,
}

impl OpticsIoControl {
    #[must_use]
    pub const fn new(i2c_clk: u8, i2c_data: u8, tx_enable: u8, tx_alarm: u8) -> Self {
        Self {
            i2c_clk,
            i2c_data,
            tx_enable,
            tx_alarm,
        }
    }

    /// Pin assignment for one channel of the fixed channel set
    ///
    /// # Panics
    /// Panics if `channel` is outside the channel set. Callers take channel
    /// ids from [`pas_core::CHANNELS`], never from the wire.
    #[must_use]
    pub fn for_channel(channel: ChannelId) -> Self {
        IO_CONTROL_PINS[channel as usize]
    }
}

/// Per-channel optics IO pin assignments
pub const IO_CONTROL_PINS: [OpticsIoControl; CHANNEL_COUNT] = [
    OpticsIoControl::new(1, 0, 6, 14),
    OpticsIoControl::new(3, 2, 7, 15),
    OpticsIoControl::new(11, 10, 8, 16),
    OpticsIoControl::new(13, 12, 9, 17),
];

/// Alarm configuration payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmConfig {
    pub alarm: AlarmType,
    pub state: PonToggle,
}

impl AlarmConfig {
    /// Enable the loss-of-signal alarm
    #[must_use]
    pub const fn los_enabled() -> Self {
        Self {
            alarm: AlarmType::LossOfSignal,
            state: PonToggle::Enable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_control_pins_per_channel() {
        assert_eq!(OpticsIoControl::for_channel(0), OpticsIoControl::new(1, 0, 6, 14));
        assert_eq!(OpticsIoControl::for_channel(3), OpticsIoControl::new(13, 12, 9, 17));
    }

    #[test]
    fn test_optics_config_defaults() {
        let cfg = OltOpticsConfig::default();
        assert_eq!(cfg.burst.snr_burst.burst_delay, 128);
        assert_eq!(cfg.reset.reset_data_burst, ResetValues::new(1, 11, 2, 5));
        assert_eq!(cfg.preamble.preamble_length_snr_rng, 119);
        assert_eq!(cfg.general.laser_reset_enable, PonToggle::Enable);
    }

    #[test]
    fn test_alarm_config() {
        let alarm = AlarmConfig::los_enabled();
        assert_eq!(alarm.alarm, AlarmType::LossOfSignal);
        assert_eq!(alarm.state, PonToggle::Enable);
    }
}
