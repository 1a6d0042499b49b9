use num_traits::Float;

/// A single-pass accumulator over a stream of values.
///
/// Reductors can be chained with [`Reductor::with`] so that several
/// statistics are computed in one traversal of the data; the output of a
/// chain is a nested tuple in the order the reductors were added.
///
/// # Examples
///
/// ```
/// use statfit::statistics::{MaxReductor, MeanReductor, Reducible, Reductor, VarianceReductor};
///
/// let data = [5.0, 2.5, 3.0, 10.0, 5.0];
/// let chain = MeanReductor::<f64>::default()
///     .with::<VarianceReductor<f64>>()
///     .with::<MaxReductor<f64>>();
///
/// let ((mean, variance), max) = (chain, data.iter().copied()).reduce();
/// assert!((mean - 5.1).abs() < 1e-12);
/// assert!((variance - 8.8).abs() < 1e-12);
/// assert_eq!(max, 10.0);
/// ```
pub trait Reductor: Sized {
    type Item;
    type Output;

    /// Appends an existing reductor to the chain
    fn with_val<IR>(self, r: IR) -> CompositeReductor<Self, IR>
    where
        IR: Reductor<Item = Self::Item>,
    {
        CompositeReductor { r1: self, r2: r }
    }

    /// Appends a default-constructed reductor to the chain
    fn with<IR>(self) -> CompositeReductor<Self, IR>
    where
        IR: Reductor<Item = Self::Item> + Default,
    {
        self.with_val(IR::default())
    }

    /// Receives the `size_hint` of the source iterator before the first
    /// value arrives
    fn apply_size_hint(&mut self, _hint: (usize, Option<usize>)) {}

    /// Feeds the next value of the stream
    fn signal_next(&mut self, item: &Self::Item);

    /// Consumes the reductor once the stream is exhausted
    fn finish(self) -> Self::Output;
}

/// Two reductors driven by the same stream
pub struct CompositeReductor<R1, R2> {
    r1: R1,
    r2: R2,
}

impl<RI, R1, R2> Reductor for CompositeReductor<R1, R2>
where
    R1: Reductor<Item = RI>,
    R2: Reductor<Item = RI>,
{
    type Item = RI;
    type Output = (R1::Output, R2::Output);

    fn apply_size_hint(&mut self, hint: (usize, Option<usize>)) {
        self.r1.apply_size_hint(hint);
        self.r2.apply_size_hint(hint);
    }

    fn signal_next(&mut self, item: &Self::Item) {
        self.r1.signal_next(item);
        self.r2.signal_next(item);
    }

    fn finish(self) -> Self::Output {
        (self.r1.finish(), self.r2.finish())
    }
}

/// Smallest value seen, `+inf` for an empty stream
pub struct MinReductor<T> {
    min: T,
}

impl<T: Float> Default for MinReductor<T> {
    fn default() -> Self {
        MinReductor { min: T::infinity() }
    }
}

impl<T: Float> Reductor for MinReductor<T> {
    type Item = T;
    type Output = T;

    fn signal_next(&mut self, item: &T) {
        self.min = self.min.min(*item);
    }

    fn finish(self) -> T {
        self.min
    }
}

/// Largest value seen, `-inf` for an empty stream
pub struct MaxReductor<T> {
    max: T,
}

impl<T: Float> Default for MaxReductor<T> {
    fn default() -> Self {
        MaxReductor {
            max: T::neg_infinity(),
        }
    }
}

impl<T: Float> Reductor for MaxReductor<T> {
    type Item = T;
    type Output = T;

    fn signal_next(&mut self, item: &T) {
        self.max = self.max.max(*item);
    }

    fn finish(self) -> T {
        self.max
    }
}

/// Arithmetic mean, `NaN` for an empty stream
pub struct MeanReductor<T> {
    count: T,
    mean: T,
}

impl<T: Float> Default for MeanReductor<T> {
    fn default() -> Self {
        MeanReductor {
            count: T::zero(),
            mean: T::zero(),
        }
    }
}

impl<T: Float> Reductor for MeanReductor<T> {
    type Item = T;
    type Output = T;

    fn signal_next(&mut self, item: &T) {
        self.count = self.count + T::one();
        self.mean = self.mean + (*item - self.mean) / self.count;
    }

    fn finish(self) -> T {
        if self.count > T::zero() {
            self.mean
        } else {
            T::nan()
        }
    }
}

/// Unbiased sample variance (Welford's update), `NaN` for fewer than
/// two values
pub struct VarianceReductor<T> {
    count: T,
    mean: T,
    m2: T,
}

impl<T: Float> Default for VarianceReductor<T> {
    fn default() -> Self {
        VarianceReductor {
            count: T::zero(),
            mean: T::zero(),
            m2: T::zero(),
        }
    }
}

impl<T: Float> Reductor for VarianceReductor<T> {
    type Item = T;
    type Output = T;

    fn signal_next(&mut self, item: &T) {
        self.count = self.count + T::one();
        let delta = *item - self.mean;
        self.mean = self.mean + delta / self.count;
        self.m2 = self.m2 + delta * (*item - self.mean);
    }

    fn finish(self) -> T {
        if self.count > T::one() {
            self.m2 / (self.count - T::one())
        } else {
            T::nan()
        }
    }
}

/// Drives a reductor over an iterator
pub trait Reducible {
    type Output;

    fn reduce(self) -> Self::Output;
}

impl<T, R, I> Reducible for (R, I)
where
    R: Reductor<Item = T>,
    I: Iterator<Item = T>,
{
    type Output = R::Output;

    fn reduce(self) -> Self::Output {
        let (mut r, i) = self;

        r.apply_size_hint(i.size_hint());
        for x in i {
            r.signal_next(&x);
        }

        r.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain() {
        let data = [5.0, 2.5, 3.0, 10.0, 5.0];

        let reductor = MinReductor::<f64>::default()
            .with::<MeanReductor<f64>>()
            .with::<MaxReductor<f64>>()
            .with::<VarianceReductor<f64>>();

        let (((min, mean), max), variance) = (reductor, data.iter().copied()).reduce();

        assert_eq!(min, 2.5);
        assert_abs_diff_eq!(mean, 5.1, epsilon = 1e-12);
        assert_eq!(max, 10.0);
        assert_abs_diff_eq!(variance, 8.8, epsilon = 1e-12);
    }

    #[test]
    fn test_empty() {
        let reductor = MinReductor::<f64>::default()
            .with::<MaxReductor<f64>>()
            .with::<MeanReductor<f64>>()
            .with::<VarianceReductor<f64>>();

        let (((min, max), mean), variance) = (reductor, std::iter::empty::<f64>()).reduce();

        assert_eq!(min, f64::INFINITY);
        assert_eq!(max, f64::NEG_INFINITY);
        assert!(mean.is_nan());
        assert!(variance.is_nan());
    }

    #[test]
    fn test_single_value() {
        let reductor = MeanReductor::<f32>::default().with::<VarianceReductor<f32>>();
        let (mean, variance) = (reductor, std::iter::once(4.0f32)).reduce();
        assert_eq!(mean, 4.0);
        assert!(variance.is_nan());
    }

    #[test]
    fn test_with_val() {
        let reductor = MeanReductor::<f64>::default().with_val(MinReductor::default());
        let (mean, min) = (reductor, [1.0, 2.0, 3.0, 6.0].into_iter()).reduce();
        assert_eq!(mean, 3.0);
        assert_eq!(min, 1.0);
    }
}
