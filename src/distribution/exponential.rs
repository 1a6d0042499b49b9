use crate::distribution::{Continuous, ContinuousCDF, InverseTransform};
use crate::statistics::*;

/// Implements the
/// [Exp](https://en.wikipedia.org/wiki/Exponential_distribution)
/// distribution with rate `λ`, shifted so that its support starts at a
/// location `x0`.
///
/// # Examples
///
/// ```
/// use statfit::distribution::{Continuous, Exponential};
/// use statfit::statistics::Distribution;
///
/// let n = Exponential::new(1.0, 0.0).unwrap();
/// assert_eq!(n.expectation(), 1.0);
/// assert_eq!(n.pdf(1.0), 0.36787944117144233);
/// assert_eq!(n.pdf(-1.0), 0.0);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Exponential {
    rate: f64,
    location: f64,
}

/// Represents the errors that can occur when creating a [`Exponential`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[non_exhaustive]
pub enum ExponentialError {
    /// The rate is NaN, infinite, zero or less than zero.
    RateInvalid,

    /// The location is NaN or infinite.
    LocationInvalid,
}

impl std::fmt::Display for ExponentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExponentialError::RateInvalid => write!(f, "Rate is NaN, infinite, zero or less than zero"),
            ExponentialError::LocationInvalid => write!(f, "Location is NaN or infinite"),
        }
    }
}

impl std::error::Error for ExponentialError {}

impl Exponential {
    /// Constructs a new exponential distribution with a
    /// rate (λ) of `rate`, starting at `x0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is `NaN`, infinite or `rate <= 0.0`, or if
    /// `x0` is `NaN` or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Exponential;
    ///
    /// let mut result = Exponential::new(1.0, 0.0);
    /// assert!(result.is_ok());
    ///
    /// result = Exponential::new(-1.0, 0.0);
    /// assert!(result.is_err());
    /// ```
    pub fn new(rate: f64, x0: f64) -> Result<Exponential, ExponentialError> {
        if rate.is_nan() || rate.is_infinite() || rate <= 0.0 {
            Err(ExponentialError::RateInvalid)
        } else if !x0.is_finite() {
            Err(ExponentialError::LocationInvalid)
        } else {
            Ok(Exponential {
                rate,
                location: x0,
            })
        }
    }

    /// Returns the rate of the exponential distribution
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Exponential;
    ///
    /// let n = Exponential::new(1.0, 0.0).unwrap();
    /// assert_eq!(n.rate(), 1.0);
    /// ```
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the location `x0`, the lower end of the support
    pub fn location(&self) -> f64 {
        self.location
    }
}

impl std::fmt::Display for Exponential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Exp({}, {})", self.rate, self.location)
    }
}

impl InverseTransform<f64> for Exponential {
    /// # Formula
    ///
    /// ```text
    /// x0 - ln(1 - r) / λ
    /// ```
    fn sample(&self, r: f64) -> f64 {
        self.location - (-r).ln_1p() / self.rate
    }
}

impl ::rand::distributions::Distribution<f64> for Exponential {
    fn sample<R: ::rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        InverseTransform::sample(self, rng.gen::<f64>())
    }
}

impl ContinuousCDF<f64, f64> for Exponential {
    /// Calculates the cumulative distribution function for the
    /// exponential distribution at `x`
    ///
    /// # Formula
    ///
    /// ```text
    /// 1 - e^(-λ * (x - x0))
    /// ```
    fn cdf(&self, x: f64) -> f64 {
        if x < self.location {
            0.0
        } else {
            -(-self.rate * (x - self.location)).exp_m1()
        }
    }
}

impl Min<f64> for Exponential {
    /// Returns the minimum value in the domain of the exponential
    /// distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// x0
    /// ```
    fn min(&self) -> f64 {
        self.location
    }
}

impl Max<f64> for Exponential {
    fn max(&self) -> f64 {
        f64::INFINITY
    }
}

impl Distribution<f64> for Exponential {
    /// Returns the mean of the exponential distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// x0 + 1 / λ
    /// ```
    fn expectation(&self) -> f64 {
        self.location + 1.0 / self.rate
    }

    /// Returns the variance of the exponential distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// 1 / λ^2
    /// ```
    fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }
}

impl Continuous<f64, f64> for Exponential {
    /// Calculates the probability density function for the exponential
    /// distribution at `x`, `0` below `x0`
    ///
    /// # Formula
    ///
    /// ```text
    /// λ * e^(-λ * (x - x0))
    /// ```
    fn pdf(&self, x: f64) -> f64 {
        if x < self.location {
            0.0
        } else {
            self.rate * (-self.rate * (x - self.location)).exp()
        }
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::internal::*;
    use crate::testing_boiler;

    testing_boiler!(rate: f64, x0: f64; Exponential; ExponentialError);

    #[test]
    fn test_create() {
        create_ok(0.1, 0.0);
        create_ok(1.0, -3.0);
        create_ok(10.0, 2.5);
    }

    #[test]
    fn test_bad_create() {
        assert_eq!(create_err(f64::NAN, 0.0), ExponentialError::RateInvalid);
        assert_eq!(create_err(0.0, 0.0), ExponentialError::RateInvalid);
        assert_eq!(create_err(-1.0, 0.0), ExponentialError::RateInvalid);
        assert_eq!(create_err(f64::INFINITY, 0.0), ExponentialError::RateInvalid);
        assert_eq!(create_err(1.0, f64::NAN), ExponentialError::LocationInvalid);
        assert_eq!(create_err(1.0, f64::NEG_INFINITY), ExponentialError::LocationInvalid);
    }

    #[test]
    fn test_moments() {
        test_exact(0.1, 0.0, 10.0, |x| x.expectation());
        test_exact(2.0, 3.0, 3.5, |x| x.expectation());
        test_absolute(0.1, 0.0, 100.0, 1e-12, |x| x.variance());
        test_exact(2.0, 3.0, 0.25, |x| x.variance());
    }

    #[test]
    fn test_min_max() {
        test_exact(2.0, 3.0, 3.0, |x| x.min());
        test_exact(2.0, 3.0, f64::INFINITY, |x| x.max());
    }

    #[test]
    fn test_pdf() {
        let pdf = |arg: f64| move |x: Exponential| x.pdf(arg);
        test_exact(1.0, 0.0, 1.0, pdf(0.0));
        test_exact(1.0, 0.0, 0.0, pdf(-0.5));
        test_absolute(1.0, 0.0, 0.36787944117144233, 1e-16, pdf(1.0));
        test_absolute(2.0, 3.0, 2.0 * (-2.0f64).exp(), 1e-16, pdf(4.0));
        test_exact(2.0, 3.0, 0.0, pdf(2.999));
    }

    #[test]
    fn test_cdf() {
        let cdf = |arg: f64| move |x: Exponential| x.cdf(arg);
        test_exact(1.0, 0.0, 0.0, cdf(0.0));
        test_exact(1.0, 0.0, 0.0, cdf(-1.0));
        test_absolute(1.0, 0.0, 0.6321205588285577, 1e-16, cdf(1.0));
        test_absolute(2.0, 3.0, 1.0 - (-2.0f64).exp(), 1e-16, cdf(4.0));
        test_exact(1.0, 0.0, 1.0, cdf(f64::INFINITY));
    }

    #[test]
    fn test_sample() {
        let sample = |arg: f64| move |x: Exponential| x.sample(arg);
        test_exact(1.0, 0.0, 0.0, sample(0.0));
        test_exact(2.0, 3.0, 3.0, sample(0.0));
        test_absolute(1.0, 0.0, std::f64::consts::LN_2, 1e-16, sample(0.5));
        test_absolute(2.0, 3.0, 3.0 + std::f64::consts::LN_2 / 2.0, 1e-15, sample(0.5));
    }

    #[test]
    fn test_continuous() {
        test::check_continuous_distribution(&create_ok(1.0, 0.0), 0.0, 20.0);
        test::check_continuous_distribution(&create_ok(0.5, -2.0), -2.0, 40.0);
    }

    #[test]
    fn test_inverse_transform() {
        test::check_continuous_inverse_transform(&create_ok(1.0, 0.0), 1e-12);
        test::check_continuous_inverse_transform(&create_ok(3.0, 1.5), 1e-12);
    }
}
