use super::{sorted_points, sum_squared_residuals, validate, Fit, FitError, FitOptions};
use crate::distribution::Exponential;
use crate::statistics::{MeanReductor, Reducible};
use log::{debug, warn};

// densities at or below this carry no usable log
const MIN_DENSITY: f64 = 1e-12;

/// Fits an [`Exponential`] distribution to sampled density values
/// `y[i] = pdf(x[i])`.
///
/// Above the location the log density is linear in `x`,
/// `ln y = ln λ + λ·x0 - λ·x`, so the rate and location follow from a least
/// squares line through `(x, ln y)` over the samples with positive density.
/// Samples at zero density mark the region below the location; the fitted
/// location never exceeds the smallest sample with positive density.
///
/// The fit is closed-form: [`Fit::iterations`] is `1` and
/// [`Fit::converged`] reports whether the residual over all samples is below
/// `options.epsilon`.
///
/// # Errors
///
/// Returns an error if `x` and `y` differ in length, are empty or contain
/// non-finite values, if `options` are out of range, or if fewer than two
/// distinct positions carry positive density or the density does not decay
///
/// # Examples
///
/// ```
/// use statfit::distribution::{Continuous, Exponential};
/// use statfit::fit::{fit_exponential, FitOptions};
///
/// let truth = Exponential::new(1.5, 2.0).unwrap();
/// let x: Vec<f64> = (0..=40).map(|i| 0.25 * i as f64).collect();
/// let y: Vec<f64> = x.iter().map(|&x| truth.pdf(x)).collect();
///
/// let fit = fit_exponential(&x, &y, &FitOptions::default()).unwrap();
/// assert!(fit.converged());
/// assert!((fit.distribution().rate() - 1.5).abs() < 1e-9);
/// ```
pub fn fit_exponential(
    x: &[f64],
    y: &[f64],
    options: &FitOptions,
) -> Result<Fit<Exponential>, FitError> {
    validate(x, y, options)?;
    let points = sorted_points(x, y);

    let support: Vec<(f64, f64)> = points
        .iter()
        .filter(|p| p.1 > MIN_DENSITY)
        .map(|&(x, y)| (x, y.ln()))
        .collect();
    if support.len() < 2 {
        return Err(FitError::Degenerate);
    }

    let mean_x = (MeanReductor::<f64>::default(), support.iter().map(|p| p.0)).reduce();
    let mean_z = (MeanReductor::<f64>::default(), support.iter().map(|p| p.1)).reduce();
    let (sxx, sxz) = support.iter().fold((0.0, 0.0), |(sxx, sxz), &(x, z)| {
        let dx = x - mean_x;
        (sxx + dx * dx, sxz + dx * (z - mean_z))
    });
    if sxx <= 0.0 {
        return Err(FitError::Degenerate);
    }

    let slope = sxz / sxx;
    if !slope.is_finite() || slope >= 0.0 {
        debug!("Exponential fit rejected: log density slope {slope} does not decay");
        return Err(FitError::Degenerate);
    }

    let rate = -slope;
    let intercept = mean_z - slope * mean_x;
    let first = support[0].0;
    let x0 = ((intercept - rate.ln()) / rate).min(first);

    let distribution = Exponential::new(rate, x0).map_err(|_| FitError::Degenerate)?;
    let residual = sum_squared_residuals(&distribution, &points);
    let converged = residual < options.epsilon;
    if converged {
        debug!("Exponential fit on {} points: {distribution}, residual {residual:.3e}", points.len());
    } else {
        warn!(
            "Exponential fit residual {residual:.3e} is above epsilon = {:e}",
            options.epsilon
        );
    }

    Ok(Fit {
        distribution,
        iterations: 1,
        residual,
        converged,
    })
}
