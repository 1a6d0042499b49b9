use crate::distribution::{Discrete, DiscreteCDF, InverseTransform};
use crate::statistics::*;

/// Implements the
/// [Geometric](https://en.wikipedia.org/wiki/Geometric_distribution)
/// distribution, counting the trials up to and including the first success
///
/// # Examples
///
/// ```
/// use statfit::distribution::{Discrete, Geometric, InverseTransform};
/// use statfit::statistics::Distribution;
///
/// let n = Geometric::new(0.5).unwrap();
/// assert_eq!(n.expectation(), 2.0);
/// assert_eq!(n.pmf(0), 0.0);
/// assert_eq!(n.pmf(2), 0.25);
/// assert_eq!(n.sample(0.4), 1);
/// assert_eq!(n.sample(0.6), 2);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Geometric {
    p: f64,
}

/// Represents the errors that can occur when creating a [`Geometric`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[non_exhaustive]
pub enum GeometricError {
    /// The probability is NaN or not in `(0, 1]`.
    ProbabilityInvalid,
}

impl std::fmt::Display for GeometricError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeometricError::ProbabilityInvalid => write!(f, "Probability is NaN or not in (0, 1]"),
        }
    }
}

impl std::error::Error for GeometricError {}

impl Geometric {
    /// Constructs a new geometric distribution with a probability
    /// of success of `p`
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not in `(0, 1]`
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Geometric;
    ///
    /// let mut result = Geometric::new(0.5);
    /// assert!(result.is_ok());
    ///
    /// result = Geometric::new(0.0);
    /// assert!(result.is_err());
    /// ```
    pub fn new(p: f64) -> Result<Geometric, GeometricError> {
        if p.is_nan() || p <= 0.0 || p > 1.0 {
            Err(GeometricError::ProbabilityInvalid)
        } else {
            Ok(Geometric { p })
        }
    }

    /// Returns the probability of success `p`
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl std::fmt::Display for Geometric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Geom({})", self.p)
    }
}

impl InverseTransform<i64> for Geometric {
    /// Returns the smallest `k >= 1` with `cdf(k) >= r`
    ///
    /// The closed form is corrected by one step against `cdf` where rounding
    /// lands it in a neighbouring bin. `NaN` and draws at or below `0` map to
    /// `1`, draws at or above `1` map to `i64::MAX`.
    ///
    /// # Formula
    ///
    /// ```text
    /// ceil(ln(1 - r) / ln(1 - p))
    /// ```
    fn sample(&self, r: f64) -> i64 {
        if r.is_nan() || r <= 0.0 || self.p == 1.0 {
            return 1;
        } else if r >= 1.0 {
            return i64::MAX;
        }

        let k = ((-r).ln_1p() / (-self.p).ln_1p()).ceil().max(1.0) as i64;
        if k > 1 && self.cdf(k - 1) >= r {
            k - 1
        } else if self.cdf(k) < r {
            k.saturating_add(1)
        } else {
            k
        }
    }
}

impl ::rand::distributions::Distribution<i64> for Geometric {
    fn sample<R: ::rand::Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        InverseTransform::sample(self, rng.gen::<f64>())
    }
}

impl DiscreteCDF<i64, f64> for Geometric {
    /// Calculates the cumulative distribution function for the geometric
    /// distribution at `x`
    ///
    /// # Formula
    ///
    /// ```text
    /// 1 - (1 - p)^x
    /// ```
    fn cdf(&self, x: i64) -> f64 {
        if x < 1 {
            0.0
        } else if self.p == 1.0 {
            1.0
        } else {
            -(x as f64 * (-self.p).ln_1p()).exp_m1()
        }
    }
}

impl Min<i64> for Geometric {
    /// Returns the minimum value in the domain of the geometric
    /// distribution, `1`
    fn min(&self) -> i64 {
        1
    }
}

impl Max<i64> for Geometric {
    /// Returns the maximum value in the domain of the geometric
    /// distribution representable as an `i64`
    fn max(&self) -> i64 {
        i64::MAX
    }
}

impl Distribution<f64> for Geometric {
    /// Returns the mean of the geometric distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// 1 / p
    /// ```
    fn expectation(&self) -> f64 {
        1.0 / self.p
    }

    /// Returns the variance of the geometric distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// (1 - p) / p^2
    /// ```
    fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }
}

impl Discrete<i64, f64> for Geometric {
    /// Calculates the probability mass function for the geometric
    /// distribution at `x`
    ///
    /// # Formula
    ///
    /// ```text
    /// (1 - p)^(x - 1) * p
    /// ```
    fn pmf(&self, x: i64) -> f64 {
        if x < 1 {
            0.0
        } else {
            (1.0 - self.p).powf(x as f64 - 1.0) * self.p
        }
    }
}
