//! Sampling configuration for [`PinDecoder`](crate::PinDecoder).
//!
//! Only the pin driver is configurable. The decoding rules themselves have
//! no knobs beyond the reset and enable inputs.

use crate::registers::{DEFAULT_CLOCK_HZ, DEFAULT_RESET_CYCLES, DEFAULT_SETTLE_CYCLES};

/// Timing of the pin-sampling clock and the reset/settle protocol.
///
/// [`DecoderConfig::default()`] samples at 100 kHz, holds reset for 10
/// cycles and settles for 8 cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderConfig {
    /// Sampling clock frequency in Hz. Default: 100 000. Must be non-zero.
    pub clock_hz: u32,
    /// Cycles to wait after an input change before trusting outputs. Default: 8.
    pub settle_cycles: u32,
    /// Cycles the decoder is held in reset by [`PinDecoder::reset`](crate::PinDecoder::reset). Default: 10.
    pub reset_cycles: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            settle_cycles: DEFAULT_SETTLE_CYCLES,
            reset_cycles: DEFAULT_RESET_CYCLES,
        }
    }
}

impl DecoderConfig {
    /// Clock period in microseconds, rounded down, never below 1.
    ///
    /// Returns `None` for a zero `clock_hz`.
    pub fn clock_period_us(&self) -> Option<u64> {
        if self.clock_hz == 0 {
            return None;
        }
        Some((1_000_000 / u64::from(self.clock_hz)).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_harness_timing() {
        let config = DecoderConfig::default();
        assert_eq!(config.clock_hz, 100_000);
        assert_eq!(config.settle_cycles, 8);
        assert_eq!(config.reset_cycles, 10);
        assert_eq!(config.clock_period_us(), Some(10));
    }

    #[test]
    fn zero_clock_has_no_period() {
        let config = DecoderConfig {
            clock_hz: 0,
            ..DecoderConfig::default()
        };
        assert_eq!(config.clock_period_us(), None);
    }

    #[test]
    fn fast_clock_clamps_to_one_microsecond() {
        let config = DecoderConfig {
            clock_hz: 4_000_000,
            ..DecoderConfig::default()
        };
        assert_eq!(config.clock_period_us(), Some(1));
    }
}
