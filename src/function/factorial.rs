//! Provides functions related to binomial coefficients

/// Returns `ln(n choose k)` for every `k` in `0..=n`.
///
/// The row is built with the recurrence
/// `C(n, k + 1) = C(n, k) * (n - k) / (k + 1)` in log space, which stays
/// finite for trial counts where the coefficients themselves overflow.
///
/// # Examples
///
/// ```
/// use statfit::function::factorial::ln_binomial_row;
///
/// let row = ln_binomial_row(4);
/// assert_eq!(row.len(), 5);
/// assert_eq!(row[0], 0.0);
/// assert!((row[2] - 6f64.ln()).abs() < 1e-15);
/// ```
pub fn ln_binomial_row(n: u64) -> Vec<f64> {
    let mut row = Vec::with_capacity(n as usize + 1);
    let mut ln_c = 0.0;
    row.push(ln_c);
    for k in 0..n {
        ln_c += ((n - k) as f64).ln() - ((k + 1) as f64).ln();
        row.push(ln_c);
    }
    row
}
