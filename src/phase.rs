//! Quadrature phase states and transition classification.
//!
//! The A/B pair walks the Gray cycle `00 → 01 → 11 → 10 → 00` when moving
//! forward and the reverse when moving backward (notation is `AB`). Every
//! pair of consecutive samples falls into exactly one [`Transition`] class,
//! looked up in a 16-entry table keyed by `prev << 2 | curr`.

/// Sampled level of the A/B channel pair.
///
/// Stored as the two-bit code `A << 1 | B`, so `PhaseState::new(false, true)`
/// is state `01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseState(u8);

impl PhaseState {
    /// `A = 0, B = 0`. Also the phase assumed after reset.
    pub const S00: PhaseState = PhaseState(0b00);
    /// `A = 0, B = 1`.
    pub const S01: PhaseState = PhaseState(0b01);
    /// `A = 1, B = 1`.
    pub const S11: PhaseState = PhaseState(0b11);
    /// `A = 1, B = 0`.
    pub const S10: PhaseState = PhaseState(0b10);

    /// The forward Gray cycle, starting from `00`.
    pub const FORWARD_CYCLE: [PhaseState; 4] = [Self::S00, Self::S01, Self::S11, Self::S10];

    /// Build a phase from the two channel levels.
    pub const fn new(a: bool, b: bool) -> Self {
        PhaseState(((a as u8) << 1) | b as u8)
    }

    /// Level of channel A.
    pub const fn a(self) -> bool {
        self.0 & 0b10 != 0
    }

    /// Level of channel B.
    pub const fn b(self) -> bool {
        self.0 & 0b01 != 0
    }

    /// The two-bit `AB` code (0..=3).
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Phase one forward step after this one.
    pub const fn next_forward(self) -> Self {
        match self.0 {
            0b00 => Self::S01,
            0b01 => Self::S11,
            0b11 => Self::S10,
            _ => Self::S00,
        }
    }

    /// Phase one backward step after this one.
    pub const fn next_backward(self) -> Self {
        match self.0 {
            0b00 => Self::S10,
            0b10 => Self::S11,
            0b11 => Self::S01,
            _ => Self::S00,
        }
    }
}

/// Classification of one `prev → curr` phase step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Inputs unchanged since the previous sample.
    Hold,
    /// Legal single-bit step along the forward cycle.
    Forward,
    /// Legal single-bit step along the backward cycle.
    Backward,
    /// Both bits changed in one sample. Rejected as a glitch.
    Invalid,
}

use Transition::{Backward as B, Forward as F, Hold as H, Invalid as X};

/// Transition classes indexed by `prev.code() << 2 | curr.code()`.
///
/// ```text
///            curr: 00  01  10  11
/// prev 00:         H   F   B   X
/// prev 01:         B   H   X   F
/// prev 10:         F   X   H   B
/// prev 11:         X   B   F   H
/// ```
pub const TRANSITION_TABLE: [Transition; 16] = [
    H, F, B, X, //
    B, H, X, F, //
    F, X, H, B, //
    X, B, F, H, //
];

/// Classify the step from `prev` to `curr`.
pub const fn classify(prev: PhaseState, curr: PhaseState) -> Transition {
    TRANSITION_TABLE[((prev.code() << 2) | curr.code()) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PhaseState; 4] = [
        PhaseState::S00,
        PhaseState::S01,
        PhaseState::S10,
        PhaseState::S11,
    ];

    #[test]
    fn new_packs_a_high_b_low() {
        assert_eq!(PhaseState::new(false, false), PhaseState::S00);
        assert_eq!(PhaseState::new(false, true), PhaseState::S01);
        assert_eq!(PhaseState::new(true, true), PhaseState::S11);
        assert_eq!(PhaseState::new(true, false), PhaseState::S10);

        let s = PhaseState::new(true, false);
        assert!(s.a());
        assert!(!s.b());
    }

    #[test]
    fn forward_cycle_edges_are_forward() {
        for i in 0..4 {
            let prev = PhaseState::FORWARD_CYCLE[i];
            let curr = PhaseState::FORWARD_CYCLE[(i + 1) % 4];
            assert_eq!(classify(prev, curr), Transition::Forward);
            assert_eq!(prev.next_forward(), curr);
        }
    }

    #[test]
    fn backward_cycle_edges_are_backward() {
        for i in 0..4 {
            let prev = PhaseState::FORWARD_CYCLE[(i + 1) % 4];
            let curr = PhaseState::FORWARD_CYCLE[i];
            assert_eq!(classify(prev, curr), Transition::Backward);
            assert_eq!(prev.next_backward(), curr);
        }
    }

    #[test]
    fn unchanged_phase_is_hold() {
        for s in ALL {
            assert_eq!(classify(s, s), Transition::Hold);
        }
    }

    #[test]
    fn two_bit_jumps_are_invalid() {
        assert_eq!(classify(PhaseState::S00, PhaseState::S11), Transition::Invalid);
        assert_eq!(classify(PhaseState::S11, PhaseState::S00), Transition::Invalid);
        assert_eq!(classify(PhaseState::S01, PhaseState::S10), Transition::Invalid);
        assert_eq!(classify(PhaseState::S10, PhaseState::S01), Transition::Invalid);
    }

    #[test]
    fn table_agrees_with_bit_distance() {
        // One-bit changes are always legal, two-bit changes never are.
        for prev in ALL {
            for curr in ALL {
                let changed = (prev.code() ^ curr.code()).count_ones();
                let class = classify(prev, curr);
                match changed {
                    0 => assert_eq!(class, Transition::Hold),
                    1 => assert!(matches!(class, Transition::Forward | Transition::Backward)),
                    _ => assert_eq!(class, Transition::Invalid),
                }
            }
        }
    }
}
