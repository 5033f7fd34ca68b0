//! Root approximations: the halve-the-exponent (or third-the-exponent) family.
//!
//! Shifting the integer view of a positive float right by one approximately halves its base-2
//! logarithm, and dividing it by three approximately thirds it; subtracting instead of adding
//! reciprocates.  Each magic constant re-centers the exponent bias and minimizes the worst-case
//! relative error for its operation, which lands between 3.1% and 3.5% across the positive
//! normal range.
//!
//! All integer arithmetic wraps so that out-of-domain bit patterns (negative sign bit, NaN)
//! degrade into garbage floats instead of overflow panics.

use crate::bits::{from_bits, to_bits};

/// Approximates `1/sqrt(x)` for positive finite `x`.
///
/// The Quake III inverse square root, without the refinement iteration and with the constant
/// re-optimized for the unrefined single pass.
#[inline]
pub fn rsqrt(x: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  from_bits(0x5f37_642f_u32.wrapping_sub(to_bits(x) >> 1))
}

/// Approximates `sqrt(x)` for positive finite `x`.
#[inline]
pub fn sqrt(x: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  from_bits(0x1fbb_4f2e_u32.wrapping_add(to_bits(x) >> 1))
}

/// Approximates `cbrt(x)` for positive finite `x`.  The `i/3` truncates, same as the shift
/// in [`sqrt`] floors.
#[inline]
pub fn cbrt(x: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  from_bits(0x2a51_067f_u32.wrapping_add(to_bits(x) / 3))
}

/// Approximates `1/cbrt(x)` for positive finite `x`.
#[inline]
pub fn rcbrt(x: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  from_bits(0x54a2_32a3_u32.wrapping_sub(to_bits(x) / 3))
}

#[test]
fn rsqrt_of_four() { assert!((rsqrt(4.) - 0.5).abs() < 0.035); }

#[test]
fn sqrt_of_nine() { assert!((sqrt(9.) - 3.).abs() < 0.21); }

#[test]
fn cbrt_of_twenty_seven() { assert!((cbrt(27.) - 3.).abs() < 0.3); }

#[test]
fn rcbrt_of_eight() { assert!((rcbrt(8.) - 0.5).abs() < 0.035); }
