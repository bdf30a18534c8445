//! Failures surfaced by [`PinDecoder`](crate::PinDecoder).
//!
//! [`QuadratureDecoder::tick`](crate::QuadratureDecoder::tick) is total:
//! glitches are absorbed and the counter wraps, so nothing here comes from
//! decoding. A [`DecoderError`] means either a GPIO read (or clock-edge
//! wait) failed, in which case the sample is dropped and the count is not
//! touched, or the driver was configured with a clock it cannot pace.

use core::fmt;

/// Why a pin-driven tick did not happen.
///
/// `E` is the error type shared by the A, B, reset, enable and clock pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderError<E> {
    /// A pin read or clock-edge wait returned `E`.
    Pin(E),

    /// [`DecoderConfig::clock_hz`](crate::DecoderConfig::clock_hz) is zero,
    /// so a ticker period cannot be derived.
    InvalidConfig,
}

// Pin reads use `?` directly.
impl<E> From<E> for DecoderError<E> {
    fn from(error: E) -> Self {
        DecoderError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for DecoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecoderError::Pin(e) => write!(f, "Pin error: {:?}", e),
            DecoderError::InvalidConfig => write!(f, "Invalid config (clock_hz must be non-zero)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for DecoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DecoderError::Pin(e) => defmt::write!(f, "Pin error: {}", e),
            DecoderError::InvalidConfig => defmt::write!(f, "Invalid config"),
        }
    }
}
