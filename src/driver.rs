//! Low-level pin sampling.
//!
//! Reads the four decoder input lines through `embedded-hal` and packs them
//! into a [`TickInput`]. All four pins share one error type, which holds for
//! the GPIO inputs of a single HAL.
//!
//! This module is crate-private; consumers use [`PinDecoder`](crate::PinDecoder).

use embedded_hal::digital::InputPin;

use crate::decoder::TickInput;
use crate::error::DecoderError;

/// Owns the A, B, reset and enable input pins.
pub(crate) struct PinSampler<A, B, RST, EN> {
    a: A,
    b: B,
    reset_n: RST,
    enable: EN,
}

impl<A, B, RST, EN> PinSampler<A, B, RST, EN>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
    RST: InputPin<Error = A::Error>,
    EN: InputPin<Error = A::Error>,
{
    /// Take ownership of the four input pins.
    pub fn new(a: A, b: B, reset_n: RST, enable: EN) -> Self {
        Self {
            a,
            b,
            reset_n,
            enable,
        }
    }

    /// Read every line once.
    ///
    /// The reset line is read first. While it is held low no other line is
    /// read, so a faulty channel or enable pin cannot fail a reset sample.
    pub fn sample(&mut self) -> Result<TickInput, DecoderError<A::Error>> {
        let reset_n = self.reset_n.is_high()?;
        if !reset_n {
            return Ok(TickInput::reset());
        }

        let enable = self.enable.is_high()?;
        let a = self.a.is_high()?;
        let b = self.b.is_high()?;

        Ok(TickInput {
            enable,
            reset_n,
            a,
            b,
        })
    }

    /// Give the pins back.
    pub fn release(self) -> (A, B, RST, EN) {
        (self.a, self.b, self.reset_n, self.enable)
    }
}
