//! Pin-level interface for the quadrature decoder.
//!
//! [`PinDecoder`] reads A, B, reset and enable from `embedded-hal` input
//! pins and advances a [`QuadratureDecoder`] once per clock: on demand, on
//! the rising edge of an external clock pin, or on an internal
//! `embassy-time` ticker.

use embassy_time::{Duration, Ticker};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::config::DecoderConfig;
use crate::decoder::{QuadratureDecoder, TickInput};
use crate::driver::PinSampler;
use crate::error::DecoderError;
use crate::frame::OutputFrame;

/// Quadrature decoder driven from GPIO input pins.
///
/// # Example
///
/// ```ignore
/// use quadrature_decoder::PinDecoder;
///
/// // `a`, `b`, `rst_n` and `ena` are any `embedded-hal` input pins
/// let mut decoder = PinDecoder::new(a, b, rst_n, ena);
///
/// // Hold the decoder in reset, then sample on every rising clock edge
/// decoder.reset();
/// loop {
///     let frame = decoder.tick_on_edge(&mut clk).await?;
/// }
/// ```
pub struct PinDecoder<A, B, RST, EN> {
    sampler: PinSampler<A, B, RST, EN>,
    decoder: QuadratureDecoder,
    config: DecoderConfig,
}

impl<A, B, RST, EN> PinDecoder<A, B, RST, EN>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
    RST: InputPin<Error = A::Error>,
    EN: InputPin<Error = A::Error>,
{
    /// Create a decoder with [`DecoderConfig::default()`].
    ///
    /// # Arguments
    /// * `a`, `b`: quadrature channel inputs
    /// * `reset_n`: active-low reset input
    /// * `enable`: active-high count enable input
    pub fn new(a: A, b: B, reset_n: RST, enable: EN) -> Self {
        Self::with_config(a, b, reset_n, enable, DecoderConfig::default())
    }

    /// Create a decoder with explicit sampling timing.
    pub fn with_config(a: A, b: B, reset_n: RST, enable: EN, config: DecoderConfig) -> Self {
        Self {
            sampler: PinSampler::new(a, b, reset_n, enable),
            decoder: QuadratureDecoder::new(),
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Clocking
    // -----------------------------------------------------------------------

    /// Read all input pins without advancing the decoder.
    ///
    /// # Errors
    /// * [`DecoderError::Pin`] if any pin read fails
    pub fn sample(&mut self) -> Result<TickInput, DecoderError<A::Error>> {
        self.sampler.sample()
    }

    /// Sample the pins and advance the decoder by one clock edge.
    ///
    /// # Errors
    /// * [`DecoderError::Pin`] if any pin read fails; the decoder is left
    ///   untouched so a failed sample never counts.
    pub fn tick(&mut self) -> Result<OutputFrame, DecoderError<A::Error>> {
        let input = match self.sampler.sample() {
            Ok(input) => input,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Decoder pin sample failed");
                return Err(e);
            }
        };

        self.decoder.tick(input);
        Ok(self.decoder.output())
    }

    /// Wait for a rising edge on `clk`, then [`tick`](Self::tick).
    ///
    /// # Errors
    /// * [`DecoderError::Pin`] if waiting on the clock or reading a pin fails
    pub async fn tick_on_edge<CLK>(
        &mut self,
        clk: &mut CLK,
    ) -> Result<OutputFrame, DecoderError<A::Error>>
    where
        CLK: Wait<Error = A::Error>,
    {
        clk.wait_for_rising_edge().await?;
        self.tick()
    }

    /// Tick `cycles` times at the configured clock rate.
    ///
    /// Returns the output frame after the last tick (the current frame if
    /// `cycles` is zero).
    ///
    /// # Errors
    /// * [`DecoderError::InvalidConfig`] if `clock_hz` is zero
    /// * [`DecoderError::Pin`] on the first failed pin read
    pub async fn run_cycles(
        &mut self,
        cycles: u32,
    ) -> Result<OutputFrame, DecoderError<A::Error>> {
        let period_us = self
            .config
            .clock_period_us()
            .ok_or(DecoderError::InvalidConfig)?;
        let mut ticker = Ticker::every(Duration::from_micros(period_us));

        for _ in 0..cycles {
            ticker.next().await;
            self.tick()?;
        }

        Ok(self.decoder.output())
    }

    /// Run for `config.settle_cycles`, the hold time after an input change
    /// before the outputs are trusted.
    ///
    /// # Errors
    /// Same as [`run_cycles`](Self::run_cycles).
    pub async fn settle(&mut self) -> Result<OutputFrame, DecoderError<A::Error>> {
        self.run_cycles(self.config.settle_cycles).await
    }

    /// Hold the decoder in reset for `config.reset_cycles`, regardless of
    /// the reset pin. Returns the initial output frame.
    pub fn reset(&mut self) -> OutputFrame {
        for _ in 0..self.config.reset_cycles.max(1) {
            self.decoder.tick(TickInput::reset());
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Decoder reset for {} cycles", self.config.reset_cycles);

        self.decoder.output()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The decoder state.
    pub fn decoder(&self) -> &QuadratureDecoder {
        &self.decoder
    }

    /// Output bytes for the current state.
    pub fn output(&self) -> OutputFrame {
        self.decoder.output()
    }

    /// The sampling configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Consume the decoder and give the pins back as `(a, b, reset_n, enable)`.
    pub fn release(self) -> (A, B, RST, EN) {
        self.sampler.release()
    }
}
