//! Recovers distribution parameters from sampled density data.
//!
//! Every fitter takes paired slices `x` and `y`, where `y[i]` is an observed
//! density at `x[i]`, and returns a [`Fit`] holding the fitted distribution
//! together with the state of the solver when it stopped. A fit that does
//! not reach the requested tolerance is still returned; inspect
//! [`Fit::converged`] to tell the two apart.

use crate::distribution::Continuous;

pub use self::cauchy::fit_cauchy;
pub use self::exponential::fit_exponential;
pub use self::gaussian::fit_gaussian;

mod cauchy;
mod exponential;
mod gaussian;
mod least_squares;

/// Tunable limits shared by the fitters
///
/// # Examples
///
/// ```
/// use statfit::fit::FitOptions;
///
/// let options = FitOptions::default().with_epsilon(1e-12);
/// assert_eq!(options.max_iter, 10_000);
/// assert_eq!(options.epsilon, 1e-12);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FitOptions {
    /// Upper bound on refinement steps, at least `1`
    pub max_iter: usize,
    /// Iterative fits have converged once both the sum of squared residuals
    /// and the last parameter step fall below this value, must be positive
    pub epsilon: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            max_iter: 10_000,
            epsilon: 1e-6,
        }
    }
}

impl FitOptions {
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// A fitted distribution and how the solver got there
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Fit<D> {
    distribution: D,
    iterations: usize,
    residual: f64,
    converged: bool,
}

impl<D> Fit<D> {
    /// Returns the fitted distribution
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Consumes the fit, keeping only the distribution
    pub fn into_distribution(self) -> D {
        self.distribution
    }

    /// Returns the number of refinement steps attempted
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the sum of squared residuals `Σ (y_i - pdf(x_i))²` at the
    /// fitted parameters
    pub fn residual(&self) -> f64 {
        self.residual
    }

    /// Returns `true` if the fit met the stopping rule of its fitter for the
    /// requested `epsilon`
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Represents the errors that can occur when fitting a distribution.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[non_exhaustive]
pub enum FitError {
    /// `x` and `y` have different lengths.
    LengthMismatch { x: usize, y: usize },

    /// No sample points were given.
    Empty,

    /// A sample coordinate is NaN or infinite.
    NonFinite,

    /// `max_iter` is zero or `epsilon` is not positive.
    OptionsInvalid,

    /// The samples do not determine the parameters of the family.
    Degenerate,
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FitError::LengthMismatch { x, y } => write!(
                f,
                "Number of x-coordinates ({x}) and y-coordinates ({y}) do not match"
            ),
            FitError::Empty => write!(f, "No sample points to fit"),
            FitError::NonFinite => write!(f, "Sample point is NaN or infinite"),
            FitError::OptionsInvalid => {
                write!(f, "max_iter is zero or epsilon is not positive")
            }
            FitError::Degenerate => {
                write!(f, "Sample points do not determine the distribution parameters")
            }
        }
    }
}

impl std::error::Error for FitError {}

fn validate(x: &[f64], y: &[f64], options: &FitOptions) -> Result<(), FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(FitError::Empty);
    }
    if options.max_iter == 0 || options.epsilon.is_nan() || options.epsilon <= 0.0 {
        return Err(FitError::OptionsInvalid);
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite);
    }
    Ok(())
}

/// Pairs up the samples in order of increasing `x`
fn sorted_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

fn sum_squared_residuals<D>(dist: &D, points: &[(f64, f64)]) -> f64
where
    D: Continuous<f64, f64>,
{
    points
        .iter()
        .map(|&(x, y)| {
            let r = y - dist.pdf(x);
            r * r
        })
        .sum()
}
