//! Defines common interfaces for interacting with statistical distributions
//! and provides concrete implementations for a variety of distributions.
use super::statistics::{Max, Min};

pub use self::bernoulli::Bernoulli;
pub use self::binomial::{Binomial, BinomialError};
pub use self::cauchy::{Cauchy, CauchyError};
pub use self::exponential::{Exponential, ExponentialError};
pub use self::gaussian::{Gaussian, GaussianError};
pub use self::geometric::{Geometric, GeometricError};

mod bernoulli;
mod binomial;
mod cauchy;
mod exponential;
mod gaussian;
mod geometric;
#[cfg(test)]
mod internal;

/// The `InverseTransform` trait maps a uniform draw onto the support of a
/// distribution.
///
/// `r` is expected in the half-open interval `[0, 1)`. The mapping is total:
/// inputs outside that interval still produce a value in the domain type,
/// clamped to the support where the support is bounded.
pub trait InverseTransform<K> {
    /// Returns the value of the random variable that corresponds to the
    /// uniform draw `r`
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::{Cauchy, InverseTransform};
    ///
    /// let n = Cauchy::new(0.0, 1.0).unwrap();
    /// assert_eq!(n.sample(0.5), 0.0);
    /// ```
    fn sample(&self, r: f64) -> K;
}

/// The `ContinuousCDF` trait is used to specify an interface for univariate
/// distributions for which cdf float arguments are sensible.
pub trait ContinuousCDF<K, T>: Min<K> + Max<K> {
    /// Returns the cumulative distribution function calculated
    /// at `x` for a given distribution. May panic depending
    /// on the implementor.
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::{ContinuousCDF, Cauchy};
    ///
    /// let n = Cauchy::new(0.0, 1.0).unwrap();
    /// assert_eq!(0.5, n.cdf(0.0));
    /// ```
    fn cdf(&self, x: K) -> T;
}

/// The `DiscreteCDF` trait is used to specify an interface for univariate
/// discrete distributions.
pub trait DiscreteCDF<K, T>: Min<K> + Max<K> {
    /// Returns the cumulative distribution function calculated
    /// at `x` for a given distribution.
    ///
    /// Values below the support yield `0` and values at or above the upper
    /// end of the support yield `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::{DiscreteCDF, Binomial};
    ///
    /// let n = Binomial::new(10, 0.5).unwrap();
    /// assert_eq!(0.0, n.cdf(-1));
    /// assert_eq!(1.0, n.cdf(10));
    /// ```
    fn cdf(&self, x: K) -> T;
}

/// The `Continuous` trait  provides an interface for interacting with
/// continuous statistical distributions
///
/// # Remarks
///
/// All methods provided by the `Continuous` trait are unchecked, meaning
/// they can panic if in an invalid state or encountering invalid input
/// depending on the implementing distribution.
pub trait Continuous<K, T> {
    /// Returns the probability density function calculated at `x` for a given
    /// distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::{Continuous, Cauchy};
    ///
    /// let n = Cauchy::new(0.0, 1.0).unwrap();
    /// assert!((n.pdf(0.0) - std::f64::consts::FRAC_1_PI).abs() < 1e-15);
    /// ```
    fn pdf(&self, x: K) -> T;
}

/// The `Discrete` trait provides an interface for interacting with discrete
/// statistical distributions
pub trait Discrete<K, T> {
    /// Returns the probability mass function calculated at `x` for a given
    /// distribution, `0` outside of the support.
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::{Discrete, Binomial};
    ///
    /// let n = Binomial::new(5, 0.5).unwrap();
    /// assert!((n.pmf(1) - 0.15625).abs() < 1e-15);
    /// assert_eq!(n.pmf(6), 0.0);
    /// ```
    fn pmf(&self, x: K) -> T;
}
