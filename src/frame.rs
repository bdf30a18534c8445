//! Externally visible output bytes.
//!
//! [`OutputFrame`] is a projection of decoder state, never stored by the
//! decoder itself. It can also be rebuilt from raw bytes read back off the
//! output pins, which is how a driver checks the counter.

use crate::count::Count;
use crate::decoder::Direction;
use crate::registers::{DIRECTION_BIT, PRIMARY_COUNT_BITS, PRIMARY_COUNT_MASK};

/// The two output bytes of the decoder.
///
/// | Byte        | Bits                               |
/// |-------------|------------------------------------|
/// | `primary`   | `{direction, counter[6:0]}`        |
/// | `secondary` | `counter[14:7]`                    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputFrame {
    /// Direction flag in bit 7, low counter bits in bits 6..0.
    pub primary: u8,
    /// High counter bits.
    pub secondary: u8,
}

impl OutputFrame {
    /// Project a count and direction onto the output bytes.
    pub const fn new(count: Count, direction: Direction) -> Self {
        Self {
            primary: ((direction.bit() as u8) << DIRECTION_BIT) | count.low_bits(),
            secondary: count.high_bits(),
        }
    }

    /// Rebuild a frame from bytes sampled on the output pins.
    pub const fn from_bytes(primary: u8, secondary: u8) -> Self {
        Self { primary, secondary }
    }

    /// Low seven counter bits as carried by the primary byte.
    pub const fn primary_count(self) -> u8 {
        self.primary & PRIMARY_COUNT_MASK
    }

    /// Direction flag carried by bit 7 of the primary byte.
    pub const fn direction(self) -> Direction {
        Direction::from_bit((self.primary >> DIRECTION_BIT) & 1 == 1)
    }

    /// Full 15-bit count reassembled from both bytes.
    pub const fn count(self) -> Count {
        Count::new(((self.secondary as u16) << PRIMARY_COUNT_BITS) | self.primary_count() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_frame_is_forward_zero() {
        let frame = OutputFrame::new(Count::ZERO, Direction::Forward);
        assert_eq!(frame.primary, 0x80);
        assert_eq!(frame.secondary, 0x00);
    }

    #[test]
    fn backward_clears_direction_bit() {
        let frame = OutputFrame::new(Count::new(5), Direction::Backward);
        assert_eq!(frame.primary, 0x05);
        assert_eq!(frame.direction(), Direction::Backward);
    }

    #[test]
    fn count_spans_both_bytes() {
        let frame = OutputFrame::new(Count::new(0x1234), Direction::Forward);
        // low 7 bits = 0x34, high 8 bits = 0x24
        assert_eq!(frame.primary, 0x80 | 0x34);
        assert_eq!(frame.secondary, 0x24);
        assert_eq!(frame.count(), Count::new(0x1234));
        assert_eq!(frame.primary_count(), 0x34);
    }

    #[test]
    fn max_count_fills_every_counter_bit() {
        let frame = OutputFrame::new(Count::MAX, Direction::Backward);
        assert_eq!(frame.primary, 0x7F);
        assert_eq!(frame.secondary, 0xFF);
    }

    #[test]
    fn from_bytes_reads_back_pins() {
        let frame = OutputFrame::from_bytes(0xFF, 0x01);
        assert_eq!(frame.direction(), Direction::Forward);
        assert_eq!(frame.count().value(), 0xFF);
    }
}
