//! Quadrature decoding state machine.
//!
//! [`QuadratureDecoder`] is a caller-owned value advanced once per clock
//! edge with [`tick`](QuadratureDecoder::tick). It holds no references and
//! never allocates; one instance per physical channel.

use crate::count::Count;
use crate::frame::OutputFrame;
use crate::phase::{classify, PhaseState, Transition};
use crate::registers::{INPUT_A_BIT, INPUT_B_BIT};

/// Direction of the most recent legal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Stepping along `00 → 01 → 11 → 10`. Output bit `1`.
    #[default]
    Forward,
    /// Stepping along `00 → 10 → 11 → 01`. Output bit `0`.
    Backward,
}

impl Direction {
    /// Level of the direction output bit.
    pub const fn bit(self) -> bool {
        matches!(self, Direction::Forward)
    }

    /// Direction encoded by an output bit level.
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Levels sampled on one clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInput {
    /// Count enable. `false` freezes the decoder.
    pub enable: bool,
    /// Active-low reset. `false` forces the initial state.
    pub reset_n: bool,
    /// Channel A level.
    pub a: bool,
    /// Channel B level.
    pub b: bool,
}

impl TickInput {
    /// Enabled, reset released, with the given channel levels.
    pub const fn running(a: bool, b: bool) -> Self {
        Self {
            enable: true,
            reset_n: true,
            a,
            b,
        }
    }

    /// Reset asserted. Channel levels are ignored while in reset.
    pub const fn reset() -> Self {
        Self {
            enable: true,
            reset_n: false,
            a: false,
            b: false,
        }
    }

    /// Decode the pin-level input vector: A on bit 0, B on bit 1, other
    /// bits ignored.
    ///
    /// ```
    /// use quadrature_decoder::TickInput;
    ///
    /// let input = TickInput::from_pins(0b10, true, true);
    /// assert!(!input.a);
    /// assert!(input.b);
    /// ```
    pub const fn from_pins(ui_in: u8, reset_n: bool, enable: bool) -> Self {
        Self {
            enable,
            reset_n,
            a: (ui_in >> INPUT_A_BIT) & 1 == 1,
            b: (ui_in >> INPUT_B_BIT) & 1 == 1,
        }
    }

    /// Phase formed by the channel levels.
    pub const fn phase(self) -> PhaseState {
        PhaseState::new(self.a, self.b)
    }
}

/// What a single [`tick`](QuadratureDecoder::tick) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Reset was asserted; the decoder is in its initial state.
    Reset,
    /// Enable was low; nothing changed.
    Disabled,
    /// The phase step was classified and applied.
    Step(Transition),
}

/// Quadrature decoder with a 15-bit wrapping position counter.
///
/// # Example
///
/// ```
/// use quadrature_decoder::{Direction, QuadratureDecoder, TickInput};
///
/// let mut decoder = QuadratureDecoder::new();
///
/// // One forward cycle: 00 -> 01 -> 11 -> 10 -> 00
/// for (a, b) in [(false, true), (true, true), (true, false), (false, false)] {
///     decoder.tick(TickInput::running(a, b));
/// }
/// assert_eq!(decoder.count().value(), 4);
/// assert_eq!(decoder.direction(), Direction::Forward);
///
/// let frame = decoder.output();
/// assert_eq!(frame.primary, 0x84);
/// assert_eq!(frame.secondary, 0x00);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    counter: Count,
    direction: Direction,
    prev_phase: PhaseState,
}

impl QuadratureDecoder {
    /// Decoder in its initial state: count 0, forward, phase `00`.
    pub const fn new() -> Self {
        Self {
            counter: Count::ZERO,
            direction: Direction::Forward,
            prev_phase: PhaseState::S00,
        }
    }

    /// Decoder positioned at `count`, otherwise in its initial state.
    pub const fn with_count(count: Count) -> Self {
        Self {
            counter: count,
            direction: Direction::Forward,
            prev_phase: PhaseState::S00,
        }
    }

    // -----------------------------------------------------------------------
    // State transition
    // -----------------------------------------------------------------------

    /// Pure form of [`tick`](Self::tick): the state after one clock edge.
    #[must_use]
    pub fn next(mut self, input: TickInput) -> Self {
        self.tick(input);
        self
    }

    /// Advance by one clock edge.
    ///
    /// Reset takes priority over enable, and enable over classification.
    /// Invalid two-bit jumps leave count and direction untouched but still
    /// resynchronize the tracked phase.
    pub fn tick(&mut self, input: TickInput) -> TickOutcome {
        if !input.reset_n {
            #[cfg(feature = "defmt")]
            if !self.is_reset_state() {
                defmt::debug!("decoder reset at count {}", self.counter.value());
            }
            *self = Self::new();
            return TickOutcome::Reset;
        }

        if !input.enable {
            return TickOutcome::Disabled;
        }

        let curr = input.phase();
        let transition = classify(self.prev_phase, curr);
        match transition {
            Transition::Hold => {}
            Transition::Forward => {
                self.direction = Direction::Forward;
                self.counter = self.counter.increment();
            }
            Transition::Backward => {
                self.direction = Direction::Backward;
                self.counter = self.counter.decrement();
            }
            Transition::Invalid => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "glitch rejected: {=u8:b} -> {=u8:b}",
                    self.prev_phase.code(),
                    curr.code()
                );
            }
        }

        #[cfg(feature = "defmt")]
        if matches!(transition, Transition::Forward | Transition::Backward) {
            defmt::trace!("{} -> count {}", self.direction, self.counter.value());
        }

        self.prev_phase = curr;
        TickOutcome::Step(transition)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Current 15-bit count.
    pub const fn count(&self) -> Count {
        self.counter
    }

    /// Direction of the last legal step (forward until one occurs).
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Phase sampled on the last enabled tick.
    pub const fn phase(&self) -> PhaseState {
        self.prev_phase
    }

    /// Output bytes for the current state.
    pub const fn output(&self) -> OutputFrame {
        OutputFrame::new(self.counter, self.direction)
    }

    /// `true` when count, direction and phase all hold their reset values.
    pub fn is_reset_state(&self) -> bool {
        *self == Self::new()
    }
}
