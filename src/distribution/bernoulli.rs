use crate::distribution::{Binomial, BinomialError, Discrete, DiscreteCDF, InverseTransform};
use crate::statistics::*;

/// Implements the
/// [Bernoulli](https://en.wikipedia.org/wiki/Bernoulli_distribution)
/// distribution which is a special case of the
/// [Binomial](https://en.wikipedia.org/wiki/Binomial_distribution)
/// distribution where `n = 1` (referenced [Here](./struct.Binomial.html))
///
/// # Examples
///
/// ```
/// use statfit::distribution::{Bernoulli, Discrete, InverseTransform};
/// use statfit::statistics::Distribution;
///
/// let n = Bernoulli::new(0.5).unwrap();
/// assert_eq!(n.expectation(), 0.5);
/// assert!((n.pmf(0) - 0.5).abs() < 1e-15);
/// assert!((n.pmf(1) - 0.5).abs() < 1e-15);
/// assert_eq!(n.sample(0.25), 0);
/// assert_eq!(n.sample(0.75), 1);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Bernoulli {
    b: Binomial,
}

impl Bernoulli {
    /// Constructs a new bernoulli distribution with
    /// the given `p` probability of success.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is `NaN`, less than `0.0`
    /// or greater than `1.0`
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Bernoulli;
    ///
    /// let mut result = Bernoulli::new(0.5);
    /// assert!(result.is_ok());
    ///
    /// result = Bernoulli::new(-0.5);
    /// assert!(result.is_err());
    /// ```
    pub fn new(p: f64) -> Result<Bernoulli, BinomialError> {
        Binomial::new(1, p).map(|b| Bernoulli { b })
    }

    /// Returns the probability of success `p` of the
    /// bernoulli distribution.
    pub fn p(&self) -> f64 {
        self.b.p()
    }
}

impl std::fmt::Display for Bernoulli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bernoulli({})", self.p())
    }
}

impl InverseTransform<i64> for Bernoulli {
    /// Returns `0` for `r <= 1 - p`, otherwise `1`
    fn sample(&self, r: f64) -> i64 {
        self.b.sample(r)
    }
}

impl ::rand::distributions::Distribution<i64> for Bernoulli {
    fn sample<R: ::rand::Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        InverseTransform::sample(self, rng.gen::<f64>())
    }
}

impl DiscreteCDF<i64, f64> for Bernoulli {
    /// Calculates the cumulative distribution
    /// function for the bernoulli distribution at `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// if x < 0 { 0 }
    /// else if x >= 1 { 1 }
    /// else { 1 - p }
    /// ```
    fn cdf(&self, x: i64) -> f64 {
        self.b.cdf(x)
    }
}

impl Min<i64> for Bernoulli {
    fn min(&self) -> i64 {
        0
    }
}

impl Max<i64> for Bernoulli {
    fn max(&self) -> i64 {
        1
    }
}

impl Distribution<f64> for Bernoulli {
    /// Returns the mean of the bernoulli
    /// distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// p
    /// ```
    fn expectation(&self) -> f64 {
        self.b.expectation()
    }

    /// Returns the variance of the bernoulli
    /// distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// p * (1 - p)
    /// ```
    fn variance(&self) -> f64 {
        self.b.variance()
    }
}

impl Discrete<i64, f64> for Bernoulli {
    /// Calculates the probability mass function for the
    /// bernoulli distribution at `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// if x == 0 { 1 - p }
    /// else { p }
    /// ```
    fn pmf(&self, x: i64) -> f64 {
        self.b.pmf(x)
    }
}
