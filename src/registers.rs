//! Pin-level bit layout of the quadrature decoder.
//!
//! The decoder reads an 8-bit input vector and drives two 8-bit output
//! bytes:
//! - Input vector: bit 0 = A, bit 1 = B, remaining bits ignored.
//! - Primary output: bit 7 = direction, bits 6..0 = `counter[6:0]`.
//! - Secondary output: `counter[14:7]`.

// ---------------------------------------------------------------------------
// Input vector
// ---------------------------------------------------------------------------

/// Bit position of the A channel in the input vector.
pub const INPUT_A_BIT: u8 = 0;

/// Bit position of the B channel in the input vector.
pub const INPUT_B_BIT: u8 = 1;

// ---------------------------------------------------------------------------
// Output bytes
// ---------------------------------------------------------------------------

/// Bit position of the direction flag in the primary output byte.
/// `1` = forward, `0` = backward.
pub const DIRECTION_BIT: u8 = 7;

/// Mask of the counter bits carried by the primary output byte.
pub const PRIMARY_COUNT_MASK: u8 = 0x7F;

/// Number of counter bits carried by the primary output byte.
pub const PRIMARY_COUNT_BITS: u32 = 7;

// ---------------------------------------------------------------------------
// Counter geometry
// ---------------------------------------------------------------------------

/// Width of the position counter in bits.
pub const COUNTER_BITS: u32 = 15;

/// Mask selecting the valid counter bits.
pub const COUNTER_MASK: u16 = (1 << COUNTER_BITS) - 1;

/// Number of distinct counter values (`2^15`).
pub const COUNTER_MODULUS: u32 = 1 << COUNTER_BITS;

// ---------------------------------------------------------------------------
// Driver protocol defaults
// ---------------------------------------------------------------------------

/// Default sampling clock in Hz (10 µs period).
pub const DEFAULT_CLOCK_HZ: u32 = 100_000;

/// Default number of clock cycles to hold inputs stable before trusting
/// the outputs.
pub const DEFAULT_SETTLE_CYCLES: u32 = 8;

/// Default number of clock cycles the reset line is held asserted.
pub const DEFAULT_RESET_CYCLES: u32 = 10;
