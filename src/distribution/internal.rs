/// Generates the constructor and assertion helpers used by the unit tests of
/// a distribution.
///
/// `testing_boiler!(n: i64, p: f64; Binomial; BinomialError);` produces
/// `create_ok`, `create_err`, `test_exact`, `test_absolute` and `test_nan`,
/// each taking the constructor arguments first.
#[macro_export]
macro_rules! testing_boiler {
    ($($arg_name:ident: $arg_ty:ty),+; $dist:ty; $dist_err:ty) => {
        fn make_param_text($($arg_name: $arg_ty),+) -> String {
            let params = [$(format!("{}: {:?}", stringify!($arg_name), $arg_name)),+];
            format!("({})", params.join(", "))
        }

        /// Creates and returns a distribution with the given parameters,
        /// panicking if `::new` fails.
        #[allow(dead_code)]
        fn create_ok($($arg_name: $arg_ty),+) -> $dist {
            match <$dist>::new($($arg_name),+) {
                Ok(d) => d,
                Err(e) => panic!(
                    "{}::new was expected to succeed, but failed for {} with error: '{}'",
                    stringify!($dist),
                    make_param_text($($arg_name),+),
                    e
                ),
            }
        }

        /// Returns the error when creating a distribution with the given
        /// parameters, panicking if `::new` succeeds.
        #[allow(dead_code)]
        fn create_err($($arg_name: $arg_ty),+) -> $dist_err {
            match <$dist>::new($($arg_name),+) {
                Err(e) => e,
                Ok(d) => panic!(
                    "{}::new was expected to fail, but succeeded for {} with result: {:?}",
                    stringify!($dist),
                    make_param_text($($arg_name),+),
                    d
                ),
            }
        }

        #[allow(dead_code)]
        fn test_exact<F, T>($($arg_name: $arg_ty),+, expected: T, eval: F)
        where
            F: Fn($dist) -> T,
            T: ::core::fmt::Debug + PartialEq,
        {
            let x = create_ok($($arg_name),+);
            let v = eval(x);
            assert_eq!(
                expected,
                v,
                "exact comparison failed for {}",
                make_param_text($($arg_name),+)
            );
        }

        #[allow(dead_code)]
        fn test_absolute<F>($($arg_name: $arg_ty),+, expected: f64, acc: f64, eval: F)
        where
            F: Fn($dist) -> f64,
        {
            let x = create_ok($($arg_name),+);
            let v = eval(x);
            assert!(
                (v - expected).abs() <= acc,
                "absolute comparison failed for {}: expected {:?}, got {:?} (acc {:?})",
                make_param_text($($arg_name),+),
                expected,
                v,
                acc
            );
        }

        #[allow(dead_code)]
        fn test_nan<F>($($arg_name: $arg_ty),+, eval: F)
        where
            F: Fn($dist) -> f64,
        {
            let x = create_ok($($arg_name),+);
            let v = eval(x);
            assert!(
                v.is_nan(),
                "expected NaN for {}, got {:?}",
                make_param_text($($arg_name),+),
                v
            );
        }
    };
}

pub mod test {
    use crate::distribution::{
        Continuous, ContinuousCDF, Discrete, DiscreteCDF, InverseTransform,
    };

    /// Uniform draws spread over `[0, 1)`, including both ends of the
    /// interval and values close to them.
    pub fn uniform_grid() -> Vec<f64> {
        let mut grid: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        grid.extend_from_slice(&[1e-12, 0.5 - 1e-12, 1.0 - 1e-12, 1.0 - f64::EPSILON]);
        grid
    }

    /// Checks that the pmf sums to the cdf across the support, that the cdf
    /// is non-decreasing, and that the total mass up to `x_max` is one.
    pub fn check_discrete_distribution<D>(dist: &D, x_max: i64)
    where
        D: Discrete<i64, f64> + DiscreteCDF<i64, f64>,
    {
        let min = dist.min();
        assert_eq!(dist.cdf(min - 1), 0.0);
        assert_eq!(dist.pmf(min - 1), 0.0);

        let mut sum = 0.0;
        let mut prev_cdf = 0.0;
        for x in min..=x_max {
            let pmf = dist.pmf(x);
            assert!((0.0..=1.0).contains(&pmf), "pmf({x}) = {pmf} out of range");
            sum += pmf;

            let cdf = dist.cdf(x);
            assert!(
                (sum - cdf).abs() <= 1e-12,
                "cdf({x}) = {cdf} does not match running pmf sum {sum}"
            );
            assert!(cdf >= prev_cdf, "cdf decreased at {x}");
            prev_cdf = cdf;
        }

        assert!((sum - 1.0).abs() <= 1e-12, "pmf sums to {sum}");
        assert_eq!(dist.cdf(x_max), 1.0);
        assert_eq!(dist.pmf(x_max + 1), 0.0);
    }

    /// Checks that integrating the pdf over `[x_min, x_max]` with the
    /// trapezoid rule reproduces the increase of the cdf, and that the cdf is
    /// non-decreasing.
    pub fn check_continuous_distribution<D>(dist: &D, x_min: f64, x_max: f64)
    where
        D: Continuous<f64, f64> + ContinuousCDF<f64, f64>,
    {
        const STEPS: usize = 200_000;
        let step = (x_max - x_min) / STEPS as f64;

        let base = dist.cdf(x_min);
        let mut integral = 0.0;
        let mut prev_x = x_min;
        let mut prev_pdf = dist.pdf(x_min);
        let mut prev_cdf = base;
        for i in 1..=STEPS {
            let x = x_min + i as f64 * step;
            let pdf = dist.pdf(x);
            assert!(pdf >= 0.0, "pdf({x}) = {pdf} is negative");
            integral += 0.5 * (pdf + prev_pdf) * (x - prev_x);

            let cdf = dist.cdf(x);
            assert!(cdf >= prev_cdf, "cdf decreased at {x}");
            if i % 1000 == 0 {
                assert!(
                    (integral - (cdf - base)).abs() <= 1e-6,
                    "integral of pdf up to {x} is {integral}, cdf gives {}",
                    cdf - base
                );
            }

            prev_x = x;
            prev_pdf = pdf;
            prev_cdf = cdf;
        }
    }

    /// Checks that each sampled value lands in the cdf bin of its uniform
    /// draw: `cdf(k - 1) < r <= cdf(k)`.
    pub fn check_discrete_inverse_transform<D>(dist: &D)
    where
        D: DiscreteCDF<i64, f64> + InverseTransform<i64>,
    {
        for r in uniform_grid() {
            let k = dist.sample(r);
            assert!(k >= dist.min() && k <= dist.max(), "sample({r}) = {k}");
            assert!(dist.cdf(k) >= r, "cdf({k}) < {r}");
            if k > dist.min() {
                assert!(dist.cdf(k - 1) < r, "sample({r}) = {k} is not minimal");
            }
        }
    }

    /// Checks that `cdf(sample(r))` returns `r` for draws away from the
    /// ends of the unit interval.
    pub fn check_continuous_inverse_transform<D>(dist: &D, acc: f64)
    where
        D: ContinuousCDF<f64, f64> + InverseTransform<f64>,
    {
        for r in uniform_grid().into_iter().filter(|&r| r > 1e-6 && r < 1.0 - 1e-6) {
            let x = dist.sample(r);
            let back = dist.cdf(x);
            assert!(
                (back - r).abs() <= acc,
                "cdf(sample({r})) = {back}"
            );
        }
    }
}
