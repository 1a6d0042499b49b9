/// The `Min` trait specifies that an object has a minimum value
pub trait Min<T> {
    /// Returns the minimum value in the domain of a given distribution
    /// if it exists, otherwise the smallest value representable by `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::statistics::Min;
    /// use statfit::distribution::Binomial;
    ///
    /// let n = Binomial::new(4, 0.5).unwrap();
    /// assert_eq!(0, n.min());
    /// ```
    fn min(&self) -> T;
}

/// The `Max` trait specifies that an object has a maximum value
pub trait Max<T> {
    /// Returns the maximum value in the domain of a given distribution
    /// if it exists, otherwise the largest value representable by `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::statistics::Max;
    /// use statfit::distribution::Binomial;
    ///
    /// let n = Binomial::new(4, 0.5).unwrap();
    /// assert_eq!(4, n.max());
    /// ```
    fn max(&self) -> T;
}

/// The `Distribution` trait exposes the theoretical moments of a
/// distribution.
///
/// Moments that are undefined for a family are reported as `NaN` rather
/// than as an error, so callers should test with `is_nan` before use.
pub trait Distribution<T> {
    /// Returns the expected value of the distribution
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::statistics::Distribution;
    /// use statfit::distribution::Binomial;
    ///
    /// let n = Binomial::new(10, 0.3).unwrap();
    /// assert!((n.expectation() - 3.0).abs() < 1e-15);
    /// ```
    fn expectation(&self) -> T;

    /// Returns the variance of the distribution
    ///
    /// # Examples
    ///
    /// ```
    /// use statfit::statistics::Distribution;
    /// use statfit::distribution::Cauchy;
    ///
    /// let n = Cauchy::new(0.0, 1.0).unwrap();
    /// assert!(n.variance().is_nan());
    /// ```
    fn variance(&self) -> T;
}
