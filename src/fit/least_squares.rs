use super::{sum_squared_residuals, Fit, FitError, FitOptions};
use crate::distribution::Continuous;
use log::{debug, trace, warn};

// Marquardt damping schedule
const LAMBDA_INIT: f64 = 1e-3;
const LAMBDA_FACTOR: f64 = 10.0;
const LAMBDA_MIN: f64 = 1e-12;
const LAMBDA_MAX: f64 = 1e12;

/// Location and scale of a two-parameter density, `scale > 0`
#[derive(Copy, Clone, PartialEq, Debug)]
pub(super) struct Params {
    pub location: f64,
    pub scale: f64,
}

impl Params {
    pub(super) fn validated(self) -> Option<Params> {
        (self.location.is_finite() && self.scale.is_finite() && self.scale > 0.0).then_some(self)
    }
}

/// A location-scale density whose parameters can be refined against
/// sampled density values
pub(super) trait LocationScale: Continuous<f64, f64> + std::fmt::Display + Sized {
    const NAME: &'static str;

    fn from_params(params: Params) -> Result<Self, FitError>;

    /// Returns the density at `x` together with its partial derivatives
    /// with respect to location and scale
    fn pdf_with_gradient(params: Params, x: f64) -> (f64, [f64; 2]);
}

fn residual_at<D: LocationScale>(params: Params, points: &[(f64, f64)]) -> Result<f64, FitError> {
    Ok(sum_squared_residuals(&D::from_params(params)?, points))
}

/// Minimizes `Σ (y_i - pdf(x_i))²` over location and scale by Gauss-Newton,
/// damped in the manner of Levenberg-Marquardt.
///
/// A step is taken only if it lowers the residual and keeps the scale
/// positive; accepted steps shrink the damping, rejected ones grow it.
/// Refinement stops once both the residual and the largest component of the
/// last accepted step are below `options.epsilon`, after `options.max_iter`
/// attempts, or when the damping saturates because no step improves the
/// residual. A saturated fit counts as converged if its residual is below
/// `options.epsilon`.
pub(super) fn refine<D: LocationScale>(
    points: &[(f64, f64)],
    initial: Params,
    options: &FitOptions,
) -> Result<Fit<D>, FitError> {
    let mut params = initial;
    let mut residual = residual_at::<D>(params, points)?;
    let mut lambda = LAMBDA_INIT;
    let mut iterations = 0;
    let mut last_step = f64::INFINITY;
    let mut stalled = false;

    while iterations < options.max_iter
        && !(residual < options.epsilon && last_step < options.epsilon)
    {
        iterations += 1;

        let candidate = NormalEquations::accumulate::<D>(points, params)
            .solve(lambda)
            .and_then(|(d_location, d_scale)| {
                Params {
                    location: params.location + d_location,
                    scale: params.scale + d_scale,
                }
                .validated()
                .map(|next| (next, d_location.abs().max(d_scale.abs())))
            });
        let candidate_residual = candidate
            .and_then(|(next, _)| residual_at::<D>(next, points).ok())
            .unwrap_or(f64::INFINITY);

        match candidate {
            Some((next, step)) if candidate_residual < residual => {
                trace!(
                    "[{iterations}/{}] accepted location = {}, scale = {}, residual {residual:.3e} -> {candidate_residual:.3e}",
                    options.max_iter,
                    next.location,
                    next.scale
                );
                params = next;
                residual = candidate_residual;
                last_step = step;
                lambda = (lambda / LAMBDA_FACTOR).max(LAMBDA_MIN);
            }
            _ => {
                lambda *= LAMBDA_FACTOR;
                trace!("[{iterations}/{}] step rejected, lambda = {lambda:e}", options.max_iter);
                if lambda > LAMBDA_MAX {
                    debug!(
                        "{} fit stalled after {iterations} iterations: no damped step lowers the residual",
                        D::NAME
                    );
                    stalled = true;
                    break;
                }
            }
        }
    }

    let converged = residual < options.epsilon && (last_step < options.epsilon || stalled);
    let distribution = D::from_params(params)?;
    if converged {
        debug!(
            "{} fit converged in {iterations} iterations: {distribution}, residual {residual:.3e}",
            D::NAME
        );
    } else {
        warn!(
            "{} fit did not reach epsilon = {:e} after {iterations} iterations: {distribution}, residual {residual:.3e}, last step {last_step:.3e}",
            D::NAME,
            options.epsilon
        );
    }

    Ok(Fit {
        distribution,
        iterations,
        residual,
        converged,
    })
}

/// `JᵀJ` and `Jᵀr` of the density with respect to location and scale
struct NormalEquations {
    jtj: [[f64; 2]; 2],
    jtr: [f64; 2],
}

impl NormalEquations {
    fn accumulate<D: LocationScale>(points: &[(f64, f64)], params: Params) -> NormalEquations {
        let mut jtj = [[0.0; 2]; 2];
        let mut jtr = [0.0; 2];

        for &(x, y) in points {
            let (pdf, [d_location, d_scale]) = D::pdf_with_gradient(params, x);
            let r = y - pdf;

            jtj[0][0] += d_location * d_location;
            jtj[0][1] += d_location * d_scale;
            jtj[1][1] += d_scale * d_scale;
            jtr[0] += d_location * r;
            jtr[1] += d_scale * r;
        }
        jtj[1][0] = jtj[0][1];

        NormalEquations { jtj, jtr }
    }

    /// Solves `(JᵀJ + λ·D) Δ = Jᵀr` with the closed-form 2×2 inverse, where
    /// `D` is the diagonal of `JᵀJ` floored away from zero. Returns `None`
    /// when the damped system is still numerically singular.
    fn solve(&self, lambda: f64) -> Option<(f64, f64)> {
        let [[s00, s01], [_, s11]] = self.jtj;
        let floor = 1e-12 * s00.max(s11).max(f64::MIN_POSITIVE);
        let a = s00 + lambda * s00.max(floor);
        let d = s11 + lambda * s11.max(floor);
        let b = s01;

        let det = a * d - b * b;
        if !det.is_finite() || det <= f64::EPSILON * a * d {
            return None;
        }

        let [g0, g1] = self.jtr;
        let d0 = (d * g0 - b * g1) / det;
        let d1 = (a * g1 - b * g0) / det;
        (d0.is_finite() && d1.is_finite()).then_some((d0, d1))
    }
}
