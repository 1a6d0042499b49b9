use crate::distribution::{Discrete, DiscreteCDF, InverseTransform};
use crate::function::factorial;
use crate::statistics::*;

/// Implements the
/// [Binomial](https://en.wikipedia.org/wiki/Binomial_distribution)
/// distribution
///
/// The probability mass and cumulative mass of every outcome in `0..=n`
/// are tabulated once at construction. Sampling is inverse transform by
/// binary search over the cumulative table, and `pmf`/`cdf` are lookups.
///
/// # Examples
///
/// ```
/// use statfit::distribution::{Binomial, Discrete, InverseTransform};
/// use statfit::statistics::Distribution;
///
/// let n = Binomial::new(5, 0.5).unwrap();
/// assert_eq!(n.expectation(), 2.5);
/// assert!((n.pmf(0) - 0.03125).abs() < 1e-15);
/// assert!((n.pmf(3) - 0.3125).abs() < 1e-15);
/// assert_eq!(n.sample(0.0), 0);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Binomial {
    n: u64,
    p: f64,
    pmf_table: Vec<f64>,
    // non-decreasing, last entry is exactly 1.0
    cdf_table: Vec<f64>,
}

/// Represents the errors that can occur when creating a [`Binomial`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[non_exhaustive]
pub enum BinomialError {
    /// The number of trials is negative.
    TrialsInvalid,

    /// The probability is NaN or not in `[0, 1]`.
    ProbabilityInvalid,
}

impl std::fmt::Display for BinomialError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BinomialError::TrialsInvalid => write!(f, "Number of trials is negative"),
            BinomialError::ProbabilityInvalid => write!(f, "Probability is NaN or not in [0, 1]"),
        }
    }
}

impl std::error::Error for BinomialError {}

impl Binomial {
    /// Constructs a new binomial distribution with `n` trials, each
    /// succeeding with probability `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is less than `0`, or if `p` is `NaN`, less
    /// than `0.0` or greater than `1.0`
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Binomial;
    ///
    /// let mut result = Binomial::new(5, 0.5);
    /// assert!(result.is_ok());
    ///
    /// result = Binomial::new(5, -0.5);
    /// assert!(result.is_err());
    ///
    /// result = Binomial::new(-1, 0.5);
    /// assert!(result.is_err());
    /// ```
    pub fn new(n: i64, p: f64) -> Result<Binomial, BinomialError> {
        let n = u64::try_from(n).map_err(|_| BinomialError::TrialsInvalid)?;
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return Err(BinomialError::ProbabilityInvalid);
        }

        let pmf_table = pmf_table(n, p);

        let mut cdf_table: Vec<f64> = pmf_table
            .iter()
            .scan(0.0, |acc, &x| {
                *acc += x;
                Some(acc.min(1.0))
            })
            .collect();
        // absorb the rounding drift of the running sum
        if let Some(last) = cdf_table.last_mut() {
            *last = 1.0;
        }

        Ok(Binomial {
            n,
            p,
            pmf_table,
            cdf_table,
        })
    }

    /// Returns the probability of success `p` of
    /// the binomial distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Binomial;
    ///
    /// let n = Binomial::new(5, 0.5).unwrap();
    /// assert_eq!(n.p(), 0.5);
    /// ```
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns the number of trials `n` of the
    /// binomial distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Binomial;
    ///
    /// let n = Binomial::new(5, 0.5).unwrap();
    /// assert_eq!(n.n(), 5);
    /// ```
    pub fn n(&self) -> u64 {
        self.n
    }
}

/// `(n choose k) * p^k * (1 - p)^(n - k)` for `k = 0..=n`, with the
/// degenerate probabilities placing all mass on a single outcome.
fn pmf_table(n: u64, p: f64) -> Vec<f64> {
    let point_mass = |at: u64| -> Vec<f64> {
        (0..=n).map(|k| if k == at { 1.0 } else { 0.0 }).collect()
    };

    if p == 0.0 {
        point_mass(0)
    } else if ulps_eq!(p, 1.0) {
        point_mass(n)
    } else {
        let ln_p = p.ln();
        let ln_q = (1.0 - p).ln();
        factorial::ln_binomial_row(n)
            .into_iter()
            .zip(0u64..)
            .map(|(ln_c, k)| (ln_c + k as f64 * ln_p + (n - k) as f64 * ln_q).exp())
            .collect()
    }
}

impl std::fmt::Display for Binomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bin({},{})", self.n, self.p)
    }
}

impl InverseTransform<i64> for Binomial {
    /// Returns the smallest `k` with `cdf(k) >= r`
    ///
    /// The cumulative table splits `[0, 1)` into `n + 1` contiguous bins
    /// whose widths are the outcome probabilities; a binary search finds the
    /// bin containing `r`. Draws above `1` map to `n`, `NaN` maps to `0`.
    fn sample(&self, r: f64) -> i64 {
        let k = self.cdf_table.partition_point(|&c| c < r);
        k.min(self.n as usize) as i64
    }
}

impl ::rand::distributions::Distribution<i64> for Binomial {
    fn sample<R: ::rand::Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        InverseTransform::sample(self, rng.gen::<f64>())
    }
}

impl DiscreteCDF<i64, f64> for Binomial {
    /// Returns the tabulated cumulative probability `P(X <= x)`
    ///
    /// # Formula
    ///
    /// ```text
    /// sum_{k = 0}^{x} pmf(k)
    /// ```
    fn cdf(&self, x: i64) -> f64 {
        if x < 0 {
            0.0
        } else if x as u64 >= self.n {
            1.0
        } else {
            self.cdf_table[x as usize]
        }
    }
}

impl Min<i64> for Binomial {
    /// Returns the minimum value in the domain of the
    /// binomial distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// 0
    /// ```
    fn min(&self) -> i64 {
        0
    }
}

impl Max<i64> for Binomial {
    /// Returns the maximum value in the domain of the
    /// binomial distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// n
    /// ```
    fn max(&self) -> i64 {
        self.n as i64
    }
}

impl Distribution<f64> for Binomial {
    /// Returns the mean of the binomial distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// p * n
    /// ```
    fn expectation(&self) -> f64 {
        self.p * self.n as f64
    }

    /// Returns the variance of the binomial distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// n * p * (1 - p)
    /// ```
    fn variance(&self) -> f64 {
        self.p * (1.0 - self.p) * self.n as f64
    }
}

impl Discrete<i64, f64> for Binomial {
    /// Returns the tabulated probability mass at `x`, `0` outside `[0, n]`
    ///
    /// # Formula
    ///
    /// ```text
    /// (n choose k) * p^k * (1 - p)^(n - k)
    /// ```
    fn pmf(&self, x: i64) -> f64 {
        usize::try_from(x)
            .ok()
            .and_then(|k| self.pmf_table.get(k))
            .copied()
            .unwrap_or(0.0)
    }
}
