//! Provides the [error function](https://en.wikipedia.org/wiki/Error_function)
//! and its complement

use std::f64::consts::FRAC_2_SQRT_PI;

// below this the power series converges quickly, above it the continued
// fraction does
const SERIES_LIMIT: f64 = 2.5;
const CONTINUED_FRACTION_TERMS: u32 = 60;

/// Computes the error function at `x`
///
/// # Examples
///
/// ```
/// use statfit::function::erf::erf;
///
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.8427007929497149).abs() < 1e-15);
/// assert_eq!(erf(f64::INFINITY), 1.0);
/// ```
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x.abs() < SERIES_LIMIT {
        erf_series(x)
    } else {
        (1.0 - erfc_continued_fraction(x.abs())).copysign(x)
    }
}

/// Computes the complementary error function `1 - erf(x)` at `x`, without
/// the cancellation of the subtraction for large `x`
///
/// # Examples
///
/// ```
/// use statfit::function::erf::erfc;
///
/// assert_eq!(erfc(0.0), 1.0);
/// assert!((erfc(5.0) / 1.5374597944280349e-12 - 1.0).abs() < 1e-14);
/// ```
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x < 0.0 {
        2.0 - erfc(-x)
    } else if x < SERIES_LIMIT {
        1.0 - erf_series(x)
    } else {
        erfc_continued_fraction(x)
    }
}

/// `2/√π · Σ (-1)^n x^(2n+1) / (n! (2n+1))`
fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = 0.0;
    let mut n = 0.0;
    loop {
        let t = term / (2.0 * n + 1.0);
        sum += t;
        if t.abs() <= f64::EPSILON * 1e-2 * sum.abs() || n > 200.0 {
            break;
        }
        n += 1.0;
        term *= -x2 / n;
    }
    FRAC_2_SQRT_PI * sum
}

/// Laplace's continued fraction
/// `erfc(x) = e^(-x²)/√π · 1/(x + (1/2)/(x + 1/(x + (3/2)/(x + ...))))`,
/// evaluated from the tail for `x > 0`
fn erfc_continued_fraction(x: f64) -> f64 {
    let k = (1..=CONTINUED_FRACTION_TERMS)
        .rev()
        .fold(x, |k, n| x + 0.5 * n as f64 / k);
    0.5 * FRAC_2_SQRT_PI * (-x * x).exp() / k
}
