use super::least_squares::{refine, LocationScale, Params};
use super::{sorted_points, validate, Fit, FitError, FitOptions};
use crate::distribution::Cauchy;
use log::debug;
use std::f64::consts::FRAC_1_PI;

/// Fits a [`Cauchy`] distribution to sampled density values `y[i] = pdf(x[i])`.
///
/// The location is seeded at the sample with the largest density and the
/// scale at half the interquartile range of the sampled mass (the
/// interquartile range of a cauchy distribution is `2γ`). Both are then
/// refined by Gauss-Newton on `Σ (y_i - pdf(x_i; x0, γ))²`, damped in the
/// manner of Levenberg-Marquardt: a step is taken only if it lowers the
/// residual and keeps `γ > 0`, otherwise the damping grows and the step
/// shrinks toward gradient descent.
///
/// Refinement ends once the residual and the last parameter step are both
/// below `options.epsilon`, after `options.max_iter` steps, or when no
/// damped step improves the residual. The best parameters found are
/// returned in every case; check [`Fit::converged`].
///
/// # Errors
///
/// Returns an error if `x` and `y` differ in length, are empty or contain
/// non-finite values, or if `options` are out of range
///
/// # Examples
///
/// ```
/// use statfit::distribution::{Cauchy, Continuous};
/// use statfit::fit::{fit_cauchy, FitOptions};
///
/// let truth = Cauchy::new(2.0, 3.0).unwrap();
/// let x: Vec<f64> = (0..=88).map(|i| -20.0 + 0.5 * i as f64).collect();
/// let y: Vec<f64> = x.iter().map(|&x| truth.pdf(x)).collect();
///
/// let fit = fit_cauchy(&x, &y, &FitOptions::default()).unwrap();
/// assert!(fit.converged());
/// assert!((fit.distribution().location() - 2.0).abs() < 1e-6);
/// assert!((fit.distribution().scale() - 3.0).abs() < 1e-6);
/// ```
pub fn fit_cauchy(x: &[f64], y: &[f64], options: &FitOptions) -> Result<Fit<Cauchy>, FitError> {
    validate(x, y, options)?;
    let points = sorted_points(x, y);

    let guess = initial_guess(&points);
    debug!(
        "Cauchy fit on {} points, initial guess: x0 = {}, gamma = {}",
        points.len(),
        guess.location,
        guess.scale
    );

    refine(&points, guess, options)
}

impl LocationScale for Cauchy {
    const NAME: &'static str = "Cauchy";

    fn from_params(params: Params) -> Result<Self, FitError> {
        Cauchy::new(params.location, params.scale).map_err(|_| FitError::Degenerate)
    }

    fn pdf_with_gradient(params: Params, x: f64) -> (f64, [f64; 2]) {
        let inv_gamma = 1.0 / params.scale;
        let z = (x - params.location) * inv_gamma;
        let q = 1.0 + z * z;
        let pdf = FRAC_1_PI * inv_gamma / q;
        // common factor of both partial derivatives
        let base = FRAC_1_PI * inv_gamma * inv_gamma / (q * q);
        (pdf, [2.0 * z * base, (z * z - 1.0) * base])
    }
}

/// Seeds `x0` at the empirical mode and `gamma` at half the interquartile
/// range of the trapezoidal mass under the samples. `points` is sorted by
/// `x` and non-empty.
fn initial_guess(points: &[(f64, f64)]) -> Params {
    let location = points
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(0.0, |p| p.0);

    let scale = [interquartile_mass(points), interquartile_index(points)]
        .into_iter()
        .map(|iqr| iqr / 2.0)
        .find(|gamma| gamma.is_finite() && *gamma > 0.0)
        .unwrap_or(1.0);

    Params { location, scale }
}

/// Distance between the positions where the cumulative mass crosses a
/// quarter and three quarters of the total. Negative densities count as
/// zero mass.
fn interquartile_mass(points: &[(f64, f64)]) -> f64 {
    let mut cumulative = Vec::with_capacity(points.len());
    let mut mass = 0.0;
    cumulative.push(mass);
    for w in points.windows(2) {
        let (x1, y1) = w[0];
        let (x2, y2) = w[1];
        mass += 0.5 * (y1.max(0.0) + y2.max(0.0)) * (x2 - x1);
        cumulative.push(mass);
    }

    if mass <= 0.0 {
        return f64::NAN;
    }

    let crossing = |target: f64| {
        // cumulative[0] == 0 < target, so i >= 1
        let i = cumulative.partition_point(|&c| c < target).min(points.len() - 1);
        let (lo, hi) = (cumulative[i - 1], cumulative[i]);
        let frac = if hi > lo { (target - lo) / (hi - lo) } else { 0.0 };
        points[i - 1].0 + frac * (points[i].0 - points[i - 1].0)
    };

    crossing(0.75 * mass) - crossing(0.25 * mass)
}

/// Spread between the samples a quarter and three quarters of the way
/// through the sorted positions.
fn interquartile_index(points: &[(f64, f64)]) -> f64 {
    let n = points.len();
    let at = |q: f64| points[((q * n as f64).round() as usize).min(n - 1)].0;
    at(0.75) - at(0.25)
}
