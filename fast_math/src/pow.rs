//! Power and exponential approximations: the algebraic inverses of the log family.
//!
//! Where the logs extract the exponent-field proxy, these rebuild a bit pattern from one.
//! [`pow`] scales a proxy by `p` and re-biases; [`pow2`] runs [`crate::log2`]'s two passes in
//! reverse; [`exp`] and [`exp10`] fold the base conversion into a single multiply.
//!
//! No preconditions beyond finiteness: a result overflowing the exponent field comes back as
//! Inf/NaN bit patterns or wraparound garbage, never a panic.

use crate::bits::{from_bits, to_bits};
use crate::ONE_BITS;

/// `2^23 / ln(2)`: turns `x` into a base-2 exponent-field offset.
const EXP_SCALE: f32 = 0xb8_aa3b as f32;
/// `2^23 * log2(10)`.
const EXP10_SCALE: f32 = 0x01a9_34f0 as f32;

/// Approximates `x^p` for positive finite `x`.
///
/// Scales the log proxy by `p` (the float multiply truncates back to an integer) and restores
/// the bias.  Exact when both the proxy and the result land on clean powers of two, a few
/// percent per unit of `p` otherwise.
#[inline]
pub fn pow(x: f32, p: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  let scaled = ((to_bits(x) as i32).wrapping_sub(ONE_BITS) as f32 * p) as i32;
  from_bits(scaled.wrapping_add(ONE_BITS) as u32)
}

/// Approximates `2^x` for finite `x`.
///
/// Mirrors `log2` in reverse: offset the bit pattern, read it as a float, and convert that
/// float's numeric value back to the integer domain before re-biasing.  The middle step is a
/// numeric conversion, not a reinterpretation; it undoes the int-to-float pass inside `log2`,
/// so `pow2(log2(x))` round-trips to within float conversion error.
#[inline]
pub fn pow2(x: f32) -> f32 {
  debug_assert!(x.is_finite());
  let v = from_bits((to_bits(x) as i32).wrapping_add(0x0b80_0000) as u32);
  from_bits((v as i32).wrapping_add(ONE_BITS) as u32)
}

/// Approximates `e^x` for finite `x`: single-pass inverse of `ln`.
#[inline]
pub fn exp(x: f32) -> f32 {
  debug_assert!(x.is_finite());
  from_bits(((EXP_SCALE * x).round() as i32).wrapping_add(ONE_BITS) as u32)
}

/// Approximates `10^x` for finite `x`: single-pass inverse of `log10`.
#[inline]
pub fn exp10(x: f32) -> f32 {
  debug_assert!(x.is_finite());
  from_bits(((EXP10_SCALE * x).round() as i32).wrapping_add(ONE_BITS) as u32)
}

#[test]
fn pow_exact_at_powers_of_two() {
  assert_eq!(pow(2., 3.), 8.);
  assert_eq!(pow(4., 0.5), 2.);
  assert_eq!(pow(2., -1.), 0.5);
}

#[test]
fn pow2_exact_at_integer_exponents() {
  assert_eq!(pow2(0.), 1.);
  assert_eq!(pow2(2.), 4.);
  assert_eq!(pow2(-1.), 0.5);
  assert_eq!(pow2(0.5), 1.5);
}

#[test]
fn exp_of_one() { assert!((exp(1.) - core::f32::consts::E).abs() < 0.2); }

#[test]
fn exp10_of_one() { assert!((exp10(1.) - 10.).abs() < 0.6); }
