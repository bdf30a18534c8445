use crate::registers::{COUNTER_MASK, PRIMARY_COUNT_BITS, PRIMARY_COUNT_MASK};

/// 15-bit position count that wraps modulo `2^15`.
///
/// Overflow and underflow are not errors: `0x7FFF + 1 == 0` and
/// `0 - 1 == 0x7FFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Count(u16);

impl Count {
    /// Zero count, the value after reset.
    pub const ZERO: Count = Count(0);

    /// Largest representable count (`2^15 - 1`).
    pub const MAX: Count = Count(COUNTER_MASK);

    /// Build a count, discarding any bits above bit 14.
    pub const fn new(value: u16) -> Self {
        Count(value & COUNTER_MASK)
    }

    /// Build a count from a signed position, reduced modulo `2^15`.
    pub const fn from_i32(value: i32) -> Self {
        Count((value as u16) & COUNTER_MASK)
    }

    /// Raw 15-bit value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// One step forward, wrapping.
    #[must_use]
    pub const fn increment(self) -> Self {
        Count(self.0.wrapping_add(1) & COUNTER_MASK)
    }

    /// One step backward, wrapping.
    #[must_use]
    pub const fn decrement(self) -> Self {
        Count(self.0.wrapping_sub(1) & COUNTER_MASK)
    }

    /// Add a signed number of steps, wrapping.
    #[must_use]
    pub const fn wrapping_add(self, steps: i32) -> Self {
        Count((self.0 as i32).wrapping_add(steps) as u16 & COUNTER_MASK)
    }

    /// Forward distance travelled since `start`, modulo `2^15`.
    ///
    /// ```
    /// use quadrature_decoder::Count;
    ///
    /// let start = Count::new(0x7F80);
    /// let end = start.wrapping_add(256);
    /// assert_eq!(end.distance_from(start), 256);
    /// ```
    pub const fn distance_from(self, start: Count) -> u16 {
        self.0.wrapping_sub(start.0) & COUNTER_MASK
    }

    /// Low seven bits (`counter[6:0]`).
    pub const fn low_bits(self) -> u8 {
        (self.0 as u8) & PRIMARY_COUNT_MASK
    }

    /// High eight bits (`counter[14:7]`).
    pub const fn high_bits(self) -> u8 {
        (self.0 >> PRIMARY_COUNT_BITS) as u8
    }
}

impl From<Count> for u16 {
    fn from(count: Count) -> Self {
        count.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_masks_to_fifteen_bits() {
        assert_eq!(Count::new(0xFFFF).value(), 0x7FFF);
        assert_eq!(Count::new(0x8001).value(), 1);
    }

    #[test]
    fn increment_wraps_at_max() {
        assert_eq!(Count::MAX.increment(), Count::ZERO);
        assert_eq!(Count::new(41).increment().value(), 42);
    }

    #[test]
    fn decrement_wraps_at_zero() {
        assert_eq!(Count::ZERO.decrement(), Count::MAX);
        assert_eq!(Count::new(42).decrement().value(), 41);
    }

    #[test]
    fn signed_construction_reduces_modulo() {
        assert_eq!(Count::from_i32(-1), Count::MAX);
        assert_eq!(Count::from_i32(32_768), Count::ZERO);
        assert_eq!(Count::from_i32(-32_769), Count::MAX);
    }

    #[test]
    fn wrapping_add_handles_both_signs() {
        assert_eq!(Count::new(10).wrapping_add(-11), Count::MAX);
        assert_eq!(Count::MAX.wrapping_add(2).value(), 1);
        assert_eq!(Count::new(5).wrapping_add(0).value(), 5);
    }

    #[test]
    fn distance_wraps_past_zero() {
        let start = Count::new(0x7FFE);
        let end = Count::new(3);
        assert_eq!(end.distance_from(start), 5);
        assert_eq!(start.distance_from(end), 0x7FFB);
    }

    #[test]
    fn split_into_output_fields() {
        let count = Count::new(0b101_1100_1101_0011);
        assert_eq!(count.low_bits(), 0b101_0011);
        assert_eq!(count.high_bits(), 0b1011_1001);
    }
}
