use super::least_squares::{refine, LocationScale, Params};
use super::{sorted_points, validate, Fit, FitError, FitOptions};
use crate::distribution::Gaussian;
use crate::statistics::{MaxReductor, MinReductor, Reducible, Reductor};
use log::debug;

// sqrt(2π)
const SQRT_2PI: f64 = 2.5066282746310002;

/// Fits a [`Gaussian`] distribution to sampled density values
/// `y[i] = pdf(x[i])`.
///
/// The mean and standard deviation are seeded from the first two moments of
/// the trapezoidal mass under the samples, then refined by the same damped
/// Gauss-Newton iteration as [`fit_cauchy`](super::fit_cauchy) on
/// `Σ (y_i - pdf(x_i; μ, σ))²`. Without any mass to take moments of, the
/// seed falls back to the sample with the largest density and a sixth of
/// the sampled range.
///
/// # Errors
///
/// Returns an error if `x` and `y` differ in length, are empty or contain
/// non-finite values, or if `options` are out of range
///
/// # Examples
///
/// ```
/// use statfit::distribution::{Continuous, Gaussian};
/// use statfit::fit::{fit_gaussian, FitOptions};
///
/// let truth = Gaussian::new(1.5, 2.0).unwrap();
/// let x: Vec<f64> = (0..=44).map(|i| -10.0 + 0.5 * i as f64).collect();
/// let y: Vec<f64> = x.iter().map(|&x| truth.pdf(x)).collect();
///
/// let fit = fit_gaussian(&x, &y, &FitOptions::default()).unwrap();
/// assert!(fit.converged());
/// assert!((fit.distribution().mean() - 1.5).abs() < 1e-6);
/// assert!((fit.distribution().std_dev() - 2.0).abs() < 1e-6);
/// ```
pub fn fit_gaussian(
    x: &[f64],
    y: &[f64],
    options: &FitOptions,
) -> Result<Fit<Gaussian>, FitError> {
    validate(x, y, options)?;
    let points = sorted_points(x, y);

    let guess = initial_guess(&points);
    debug!(
        "Gaussian fit on {} points, initial guess: mean = {}, std_dev = {}",
        points.len(),
        guess.location,
        guess.scale
    );

    refine(&points, guess, options)
}

impl LocationScale for Gaussian {
    const NAME: &'static str = "Gaussian";

    fn from_params(params: Params) -> Result<Self, FitError> {
        Gaussian::new(params.location, params.scale).map_err(|_| FitError::Degenerate)
    }

    fn pdf_with_gradient(params: Params, x: f64) -> (f64, [f64; 2]) {
        let inv_sigma = 1.0 / params.scale;
        let z = (x - params.location) * inv_sigma;
        let pdf = (-0.5 * z * z).exp() * inv_sigma / SQRT_2PI;
        (pdf, [z * inv_sigma * pdf, (z * z - 1.0) * inv_sigma * pdf])
    }
}

/// `points` is sorted by `x` and non-empty.
fn initial_guess(points: &[(f64, f64)]) -> Params {
    moments(points).unwrap_or_else(|| {
        let location = points
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(0.0, |p| p.0);

        let chain = MinReductor::<f64>::default().with::<MaxReductor<f64>>();
        let (min, max) = (chain, points.iter().map(|p| p.0)).reduce();
        let spread = (max - min) / 6.0;
        let scale = if spread > 0.0 { spread } else { 1.0 };

        Params { location, scale }
    })
}

/// Mean and standard deviation of the trapezoidal mass, each segment
/// weighted at its midpoint. Negative densities count as zero mass.
fn moments(points: &[(f64, f64)]) -> Option<Params> {
    let segments: Vec<(f64, f64)> = points
        .windows(2)
        .map(|w| {
            let (x1, y1) = w[0];
            let (x2, y2) = w[1];
            (0.5 * (y1.max(0.0) + y2.max(0.0)) * (x2 - x1), 0.5 * (x1 + x2))
        })
        .collect();

    let mass: f64 = segments.iter().map(|s| s.0).sum();
    if mass <= 0.0 {
        return None;
    }

    let mean = segments.iter().map(|&(w, x)| w * x).sum::<f64>() / mass;
    let variance = segments
        .iter()
        .map(|&(w, x)| w * (x - mean) * (x - mean))
        .sum::<f64>()
        / mass;

    Params {
        location: mean,
        scale: variance.sqrt(),
    }
    .validated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Continuous;

    fn grid(from: f64, to: f64, step: f64) -> Vec<f64> {
        let n = ((to - from) / step).round() as usize;
        (0..=n).map(|i| from + step * i as f64).collect()
    }

    fn sample_pdf(dist: &Gaussian, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&x| dist.pdf(x)).collect()
    }

    #[test]
    fn test_default_options_reach_parameter_precision() {
        let cases = [
            (1.5, 2.0, grid(-10.0, 12.0, 0.5)),
            (-3.0, 0.2, grid(-5.0, 5.0, 0.05)),
            (20.0, 5.0, grid(0.0, 40.0, 1.0)),
        ];
        for (mean, std_dev, x) in cases {
            let truth = Gaussian::new(mean, std_dev).unwrap();
            let y = sample_pdf(&truth, &x);

            let fit = fit_gaussian(&x, &y, &FitOptions::default()).unwrap();
            assert!(fit.converged(), "{truth}");
            assert!(fit.residual() < 1e-6);
            assert_abs_diff_eq!(fit.distribution().mean(), mean, epsilon = 1e-6);
            assert_abs_diff_eq!(fit.distribution().std_dev(), std_dev, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_truncated_grid() {
        // the grid misses most of the left tail, so the moments are biased
        let truth = Gaussian::new(0.0, 3.0).unwrap();
        let mut x = grid(-2.0, 6.0, 0.25);
        x.reverse();
        let y = sample_pdf(&truth, &x);

        let fit = fit_gaussian(&x, &y, &FitOptions::default().with_epsilon(1e-20)).unwrap();
        assert!(fit.converged());
        assert_abs_diff_eq!(fit.distribution().mean(), 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(fit.distribution().std_dev(), 3.0, epsilon = 1e-8);
    }

    #[test]
    fn test_iteration_limit() {
        let truth = Gaussian::new(1.5, 2.0).unwrap();
        let x = grid(-10.0, 12.0, 0.5);
        let y = sample_pdf(&truth, &x);

        let options = FitOptions::default().with_max_iter(1).with_epsilon(1e-300);
        let fit = fit_gaussian(&x, &y, &options).unwrap();
        assert!(!fit.converged());
        assert_eq!(fit.iterations(), 1);
        assert!(fit.distribution().std_dev() > 0.0);
    }

    #[test]
    fn test_single_point() {
        // the peak height alone pins the width: pdf(μ) = 1 / (σ sqrt(2π))
        let fit = fit_gaussian(&[1.0], &[0.3], &FitOptions::default()).unwrap();
        assert!(fit.converged());
        assert_eq!(fit.distribution().mean(), 1.0);
        assert_abs_diff_eq!(fit.distribution().std_dev(), 1.0 / (0.3 * SQRT_2PI), epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_input() {
        let options = FitOptions::default();
        assert_eq!(
            fit_gaussian(&[1.0, 2.0], &[0.1], &options),
            Err(FitError::LengthMismatch { x: 2, y: 1 })
        );
        assert_eq!(fit_gaussian(&[], &[], &options), Err(FitError::Empty));
        assert_eq!(
            fit_gaussian(&[1.0], &[0.1], &options.with_epsilon(-1.0)),
            Err(FitError::OptionsInvalid)
        );
        assert_eq!(
            fit_gaussian(&[f64::INFINITY], &[0.1], &options),
            Err(FitError::NonFinite)
        );
    }

    #[test]
    fn test_gradient() {
        let params = Params { location: 1.0, scale: 2.0 };
        let h = 1e-6;
        for x in [-5.0, -1.0, 1.0, 2.5, 7.0] {
            let (pdf, [d_location, d_scale]) = Gaussian::pdf_with_gradient(params, x);
            let at = |mean, std_dev| Gaussian::new(mean, std_dev).unwrap().pdf(x);
            assert_abs_diff_eq!(pdf, at(1.0, 2.0), epsilon = 1e-16);
            let numeric_location = (at(1.0 + h, 2.0) - at(1.0 - h, 2.0)) / (2.0 * h);
            let numeric_scale = (at(1.0, 2.0 + h) - at(1.0, 2.0 - h)) / (2.0 * h);
            assert_abs_diff_eq!(d_location, numeric_location, epsilon = 1e-9);
            assert_abs_diff_eq!(d_scale, numeric_scale, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_initial_guess() {
        let truth = Gaussian::new(1.5, 2.0).unwrap();
        let x = grid(-10.0, 12.0, 0.5);
        let y = sample_pdf(&truth, &x);

        let guess = initial_guess(&sorted_points(&x, &y));
        assert_abs_diff_eq!(guess.location, 1.5, epsilon = 1e-3);
        // midpoint weighting adds the segment width to the spread
        assert!(guess.scale > 2.0 && guess.scale < 2.05, "sigma = {}", guess.scale);
    }

    #[test]
    fn test_initial_guess_fallbacks() {
        // no mass at all: a sixth of the sampled range
        let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (4.0, 0.0)];
        assert_abs_diff_eq!(initial_guess(&points).scale, 4.0 / 6.0, epsilon = 1e-15);

        // repeated positions: no range either
        let points = [(1.0, 0.2), (1.0, 0.3)];
        let guess = initial_guess(&points);
        assert_eq!(guess.location, 1.0);
        assert_eq!(guess.scale, 1.0);
    }
}
