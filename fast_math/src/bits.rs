//! Raw bit reinterpretation between `f32` and `u32`.
//!
//! Every approximation in this crate does integer arithmetic directly on the IEEE-754 bit
//! pattern, so the cast must preserve the pattern exactly with no numeric conversion.  These wrap
//! `f32::to_bits`/`f32::from_bits` (a register move, same as `fastapprox::bits`) rather than any
//! pointer aliasing.  Defined for every 32-bit pattern, NaN and Inf encodings included.

/// Returns the raw bit pattern of `x`.
#[inline]
pub fn to_bits(x: f32) -> u32 { x.to_bits() }

/// Returns the `f32` whose bit pattern is `i`.
#[inline]
pub fn from_bits(i: u32) -> f32 { f32::from_bits(i) }

#[test]
fn round_trips_exactly() {
  for x in [0.0f32, -0.0, 1.0, -1.5, 3.4e38, 1.2e-40, f32::NAN, f32::INFINITY] {
    assert_eq!(from_bits(to_bits(x)).to_bits(), x.to_bits());
  }
  assert_eq!(to_bits(1.0), 0x3f80_0000);
}
