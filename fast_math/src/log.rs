//! Logarithm approximations built on the exponent-field log proxy.
//!
//! The integer distance between a positive float's bit pattern and `1.0`'s is, to first order,
//! `2^23 * log2(x)`.  [`ln`] and [`log10`] scale that proxy straight to a float; [`log2`] rebases
//! the proxy through a second bit-cast pass; [`log`] divides two proxies as a change of base.
//! Absolute error stays under ~0.09 for [`log2`] (proportionally less for the scaled variants);
//! the arbitrary-base [`log`] is rougher since both proxies carry error.

use crate::bits::{from_bits, to_bits};
use crate::ONE_BITS;

/// `2^-23 * ln(2)`: scales the log proxy to a natural log.
const LN_SCALE: f32 = 8.262958e-8;
/// `2^-23 * log10(2)`: scales the log proxy to a common log.
const LOG10_SCALE: f32 = 3.5885572e-8;

/// Integer distance of `x`'s bit pattern from `1.0`'s, a linear proxy for `2^23 * log2(x)`.
#[inline]
fn log_proxy(x: f32) -> i32 { (to_bits(x) as i32).wrapping_sub(ONE_BITS) }

/// Approximates `log_base(x)` as a change of base over the two log proxies.
///
/// `base == 1.0` is a pole: its proxy is exactly zero and the division yields Inf/NaN.  Both
/// arguments must be positive and finite.
#[inline]
pub fn log(x: f32, base: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  debug_assert!(base > 0. && base != 1. && base.is_finite());
  log_proxy(x) as f32 / log_proxy(base) as f32
}

/// Approximates `log2(x)` for positive finite `x`.
///
/// Two bit-cast passes: the log proxy is converted to a float, and that float's own bit pattern
/// is rebased by a fixed offset.  At exactly `x == 1.0` the zero proxy falls outside the
/// normalized encoding and the result is garbage, the same pole as `log(x, 1.0)`.
#[inline]
pub fn log2(x: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  let v = log_proxy(x) as f32;
  from_bits((to_bits(v) as i32).wrapping_sub(0x0b80_0000) as u32)
}

/// Approximates `ln(x)` for positive finite `x`.  Single pass: no second bit-cast, just the
/// proxy scaled to nats.
#[inline]
pub fn ln(x: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  log_proxy(x) as f32 * LN_SCALE
}

/// Approximates `log10(x)` for positive finite `x`.
#[inline]
pub fn log10(x: f32) -> f32 {
  debug_assert!(x > 0. && x.is_finite());
  log_proxy(x) as f32 * LOG10_SCALE
}

#[test]
fn ln_of_e() { assert!((ln(core::f32::consts::E) - 1.).abs() < 0.1); }

#[test]
fn log2_exact_at_powers_of_two() {
  assert_eq!(log2(8.), 3.);
  assert_eq!(log2(0.5), -1.);
}

#[test]
fn log10_of_a_thousand() { assert!((log10(1000.) - 3.).abs() < 0.1); }

#[test]
fn change_of_base() {
  assert_eq!(log(8., 2.), 3.);
  assert!((log(100., 10.) - 2.).abs() < 0.25);
}
