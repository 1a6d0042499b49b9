use crate::distribution::{Continuous, ContinuousCDF, InverseTransform};
use crate::statistics::*;
use std::f64::consts::{FRAC_1_PI, PI};

/// Implements the [Cauchy](https://en.wikipedia.org/wiki/Cauchy_distribution)
/// distribution, also known as the Lorentz distribution.
///
/// # Examples
///
/// ```
/// use statfit::distribution::{Cauchy, Continuous, InverseTransform};
/// use statfit::statistics::Distribution;
///
/// let n = Cauchy::new(0.0, 1.0).unwrap();
/// assert!(n.expectation().is_nan());
/// assert!((n.pdf(0.0) - 0.3183098861837907).abs() < 1e-15);
/// assert_eq!(n.sample(0.5), 0.0);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Cauchy {
    location: f64,
    scale: f64,
    inv_scale: f64,
}

/// Represents the errors that can occur when creating a [`Cauchy`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[non_exhaustive]
pub enum CauchyError {
    /// The location is NaN or infinite.
    LocationInvalid,

    /// The scale is NaN, infinite, zero, less than zero or too small to
    /// invert.
    ScaleInvalid,
}

impl std::fmt::Display for CauchyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CauchyError::LocationInvalid => write!(f, "Location is NaN or infinite"),
            CauchyError::ScaleInvalid => write!(f, "Scale is NaN, infinite, zero or less than zero"),
        }
    }
}

impl std::error::Error for CauchyError {}

impl Cauchy {
    /// Constructs a new cauchy distribution with the given
    /// location `x0` and scale `gamma`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` is `NaN` or infinite, or if `gamma` is
    /// `NaN`, infinite, `gamma <= 0.0` or so small that `1 / gamma`
    /// overflows
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Cauchy;
    ///
    /// let mut result = Cauchy::new(0.0, 1.0);
    /// assert!(result.is_ok());
    ///
    /// result = Cauchy::new(0.0, -1.0);
    /// assert!(result.is_err());
    /// ```
    pub fn new(x0: f64, gamma: f64) -> Result<Cauchy, CauchyError> {
        if !x0.is_finite() {
            return Err(CauchyError::LocationInvalid);
        }

        let inv_scale = 1.0 / gamma;
        if !gamma.is_finite() || gamma <= 0.0 || !inv_scale.is_finite() {
            return Err(CauchyError::ScaleInvalid);
        }

        Ok(Cauchy {
            location: x0,
            scale: gamma,
            inv_scale,
        })
    }

    /// Returns the location `x0` of the cauchy distribution
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Cauchy;
    ///
    /// let n = Cauchy::new(2.0, 3.0).unwrap();
    /// assert_eq!(n.location(), 2.0);
    /// ```
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Returns the scale `gamma` of the cauchy distribution
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::distribution::Cauchy;
    ///
    /// let n = Cauchy::new(2.0, 3.0).unwrap();
    /// assert_eq!(n.scale(), 3.0);
    /// ```
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for Cauchy {
    /// The standard cauchy distribution, `x0 = 0` and `gamma = 1`
    fn default() -> Self {
        Cauchy {
            location: 0.0,
            scale: 1.0,
            inv_scale: 1.0,
        }
    }
}

impl std::fmt::Display for Cauchy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cauchy({}, {})", self.location, self.scale)
    }
}

impl InverseTransform<f64> for Cauchy {
    /// Maps `r` through the inverse cdf
    ///
    /// # Formula
    ///
    /// ```text
    /// x0 + γ * tan(π * (r - 0.5))
    /// ```
    fn sample(&self, r: f64) -> f64 {
        self.location + self.scale * (PI * (r - 0.5)).tan()
    }
}

impl ::rand::distributions::Distribution<f64> for Cauchy {
    fn sample<R: ::rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        InverseTransform::sample(self, rng.gen::<f64>())
    }
}

impl ContinuousCDF<f64, f64> for Cauchy {
    /// Calculates the cumulative distribution function for the
    /// cauchy distribution at `x`
    ///
    /// # Formula
    ///
    /// ```text
    /// (1 / π) * arctan((x - x_0) / γ) + 0.5
    /// ```
    fn cdf(&self, x: f64) -> f64 {
        FRAC_1_PI * ((x - self.location) * self.inv_scale).atan() + 0.5
    }
}

impl Min<f64> for Cauchy {
    /// Returns the minimum value in the domain of the cauchy
    /// distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// -∞
    /// ```
    fn min(&self) -> f64 {
        f64::NEG_INFINITY
    }
}

impl Max<f64> for Cauchy {
    /// Returns the maximum value in the domain of the cauchy
    /// distribution
    ///
    /// # Formula
    ///
    /// ```text
    /// ∞
    /// ```
    fn max(&self) -> f64 {
        f64::INFINITY
    }
}

impl Distribution<f64> for Cauchy {
    /// The cauchy distribution has no mean, this returns `NaN`
    fn expectation(&self) -> f64 {
        f64::NAN
    }

    /// The cauchy distribution has no variance, this returns `NaN`
    fn variance(&self) -> f64 {
        f64::NAN
    }
}

impl Continuous<f64, f64> for Cauchy {
    /// Calculates the probability density function for the cauchy
    /// distribution at `x`
    ///
    /// # Formula
    ///
    /// ```text
    /// 1 / (πγ * (1 + ((x - x_0) / γ)^2))
    /// ```
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.location) * self.inv_scale;
        FRAC_1_PI * self.inv_scale / (1.0 + z * z)
    }
}
