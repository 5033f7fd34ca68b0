//! Randomized accuracy sweeps over the full positive range, checked against `std` and against
//! `fastapprox`'s independent approximations of the same functions.  The RNG is seeded so
//! failures reproduce.

use fast_math::*;
use rand::prelude::*;
use rand_pcg::Pcg32;

fn mkrng() -> Pcg32 { Pcg32::seed_from_u64(0x5f37_642f) }

/// Log-uniform positive sample spanning roughly (8e-28, 6e29).
fn gen_positive(rng: &mut Pcg32) -> f32 { 2.0f32.powf(rng.gen_range(-90.0f32..99.)) }

fn assert_rel(approx: f32, exact: f32, bound: f32, ctx: &str) {
  let rel = ((approx - exact) / exact).abs();
  assert!(rel < bound, "{}: approx={} exact={} rel={}", ctx, approx, exact, rel);
}

#[test]
fn root_family_relative_error() {
  let mut rng = mkrng();
  for _ in 0..10_000 {
    let x = gen_positive(&mut rng);
    assert_rel(rsqrt(x), 1. / x.sqrt(), 0.04, "rsqrt");
    assert_rel(sqrt(x), x.sqrt(), 0.04, "sqrt");
    assert_rel(cbrt(x), x.cbrt(), 0.04, "cbrt");
    assert_rel(rcbrt(x), 1. / x.cbrt(), 0.04, "rcbrt");
  }
}

#[test]
fn rsqrt_against_exact_sqrt() {
  let mut rng = mkrng();
  for _ in 0..10_000 {
    let x = gen_positive(&mut rng);
    let prod = rsqrt(x) * x.sqrt();
    assert!((prod - 1.).abs() < 0.07, "rsqrt({}) * sqrt = {}", x, prod);
  }
}

#[test]
fn sqrt_squared_recovers_input() {
  let mut rng = mkrng();
  for _ in 0..10_000 {
    // The one-pass sqrt is good to ~3.5%, so squaring it lands within ~7.1% of x.
    let x = gen_positive(&mut rng);
    assert_rel(sqrt(x) * sqrt(x), x, 0.075, "sqrt^2");
  }
}

#[test]
fn recip_times_input_is_near_one() {
  let mut rng = mkrng();
  for _ in 0..10_000 {
    let x = gen_positive(&mut rng);
    let prod = recip(x) * x;
    assert!((prod - 1.).abs() < 0.07, "recip({}) * x = {}", x, prod);
  }
}

#[test]
fn log_family_absolute_error() {
  let mut rng = mkrng();
  for _ in 0..10_000 {
    let x = gen_positive(&mut rng);
    assert!((log2(x) - x.log2()).abs() < 0.09, "log2({})", x);
    assert!((ln(x) - x.ln()).abs() < 0.07, "ln({})", x);
    assert!((log10(x) - x.log10()).abs() < 0.03, "log10({})", x);
    assert!((log(x, 2.) - x.log2()).abs() < 0.09, "log({}, 2)", x);
    // Arbitrary base divides two proxies, so both errors compound.
    assert!((log(x, 10.) - x.log10()).abs() < 0.8, "log({}, 10)", x);
  }
}

#[test]
fn log2_is_monotonic() {
  let mut rng = mkrng();
  let mut xs: Vec<f32> = (0..4096).map(|_| gen_positive(&mut rng)).collect();
  xs.retain(|&x| x != 1.); // the zero log-proxy at exactly 1.0 is a known pole
  xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
  for pair in xs.windows(2) {
    assert!(log2(pair[0]) <= log2(pair[1]), "log2 not monotonic at {:?}", pair);
  }
}

#[test]
fn pow2_inverts_log2() {
  let mut rng = mkrng();
  for _ in 0..10_000 {
    let x = gen_positive(&mut rng);
    assert_rel(pow2(log2(x)), x, 0.1, "pow2(log2(x))");
  }
}

#[test]
fn pow_moderate_exponents() {
  let mut rng = mkrng();
  for _ in 0..2_000 {
    let x = 2.0f32.powf(rng.gen_range(-5.0f32..5.));
    for p in [-1.0f32, 0.5, 1.5, 2., 3.] {
      assert_rel(pow(x, p), x.powf(p), 0.2, "pow");
    }
  }
}

#[test]
fn exp_family_relative_error() {
  let mut rng = mkrng();
  for _ in 0..10_000 {
    let x = rng.gen_range(-20.0f32..20.);
    assert_rel(exp(x), x.exp(), 0.07, "exp");
    let x = rng.gen_range(-8.0f32..8.);
    assert_rel(exp10(x), 10.0f32.powf(x), 0.07, "exp10");
  }
}

#[test]
fn agrees_with_fastapprox() {
  let mut rng = mkrng();
  for _ in 0..10_000 {
    let x = gen_positive(&mut rng);
    assert!(
      (log2(x) - fastapprox::faster::log2(x)).abs() < 0.2,
      "log2({}) diverges from fastapprox",
      x
    );
    assert!(
      (ln(x) - fastapprox::fast::ln(x)).abs() < 0.07,
      "ln({}) diverges from fastapprox",
      x
    );
    let p = rng.gen_range(-10.0f32..10.);
    assert_rel(exp(p), fastapprox::fast::exp(p), 0.08, "exp vs fastapprox");
  }
}
