//! Fast approximate `f32` math built on integer arithmetic over the IEEE-754 bit pattern.
//!
//! Every function here is a single pass: bit-cast the input, a couple of integer ops against a
//! precomputed magic constant, bit-cast back.  No Newton-Raphson polish, no lookup tables, no
//! branches.  The payoff is a few percent worst-case relative error in exchange for never touching
//! the hardware/libm sqrt, log, or exp routines, which is a good trade in tight DSP loops.
//!
//! Magic constants taken from https://github.com/ncruces/fastmath; they are part of the contract
//! of each function and shouldn't be "improved" independently of it.
//!
//! Domain preconditions (positive/finite inputs for the root and log families, nonzero for
//! [`recip`]) are checked with `debug_assert!` only.  In release builds an out-of-domain input
//! silently yields a meaningless bit pattern, which may look like an ordinary finite float.  All
//! functions are pure and allocation-free, so calling them from any number of threads is fine.

pub mod bits;
pub mod log;
pub mod pow;
pub mod roots;

pub use self::log::{ln, log, log10, log2};
pub use self::pow::{exp, exp10, pow, pow2};
pub use self::roots::{cbrt, rcbrt, rsqrt, sqrt};

use self::bits::{from_bits, to_bits};

/// Bit pattern of `1.0f32`; the exponent bias term shared by the log and pow families.
pub(crate) const ONE_BITS: i32 = 0x3f80_0000;

/// Approximates `1/x` for positive finite nonzero `x`.
///
/// Negating the integer view of a float negates its exponent-field log proxy, which
/// reciprocates the value; the magic constant restores the doubled bias and corrects the
/// first-order mantissa error.  Worst-case relative error is just over 5%.
#[inline]
pub fn recip(x: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  from_bits(0x7ef3_11c2_u32.wrapping_sub(to_bits(x)))
}

#[test]
fn recip_across_exponent_ranges() {
  for x in [2.0f32, 1024., 1e-3] {
    let prod = recip(x) * x;
    assert!((prod - 1.).abs() < 0.07, "recip({}) * {} = {}", x, x, prod);
  }
}

#[test]
fn deterministic_bit_for_bit() {
  for x in [3.7f32, 1e-20, 8.5e24] {
    assert_eq!(recip(x).to_bits(), recip(x).to_bits());
    assert_eq!(rsqrt(x).to_bits(), rsqrt(x).to_bits());
    assert_eq!(log2(x).to_bits(), log2(x).to_bits());
    assert_eq!(pow2(x.ln()).to_bits(), pow2(x.ln()).to_bits());
  }
}
