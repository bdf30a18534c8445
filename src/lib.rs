//! Quadrature decoder and 15-bit position counter.
//!
//! This crate decodes the two phase-shifted A/B signals of an incremental
//! encoder into a direction flag and a wrapping position count, one clock
//! edge at a time.
//!
//! # Architecture
//!
//! - **[`QuadratureDecoder`]**: the state machine. A plain `Copy` value the
//!   caller owns and advances with [`tick`](QuadratureDecoder::tick). Legal
//!   Gray-code steps count ±1, two-bit jumps are rejected as glitches, and
//!   the count wraps modulo `2^15`.
//! - **[`PinDecoder`]**: drives a decoder from `embedded-hal` input pins,
//!   clocked on demand, by an external clock pin, or by an `embassy-time`
//!   ticker.
//!
//! # Quick start
//!
//! ```
//! use quadrature_decoder::{Direction, QuadratureDecoder, TickInput};
//!
//! let mut decoder = QuadratureDecoder::new();
//! decoder.tick(TickInput::running(true, false)); // 00 -> 10: one step back
//!
//! assert_eq!(decoder.direction(), Direction::Backward);
//! assert_eq!(decoder.count().value(), 0x7FFF);
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable [`defmt::Format`] implementations on public types
//!   and decoder logging for embedded targets.

#![no_std]

pub use config::DecoderConfig;
pub use count::Count;
pub use decoder::{Direction, QuadratureDecoder, TickInput, TickOutcome};
pub use error::DecoderError;
pub use frame::OutputFrame;
pub use phase::{classify, PhaseState, Transition, TRANSITION_TABLE};
pub use pin_decoder::PinDecoder;

mod config;
mod count;
mod decoder;
mod driver;
mod error;
mod frame;
mod phase;
mod pin_decoder;
pub mod registers;
