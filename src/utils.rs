//! Convenience methods for building node sets from sampled functions.
use num_traits::Float;

use crate::compare::Less;
use crate::interpolating_map::InterpolatingMap;
use crate::node::Node;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// A single point is `start`; zero points is an empty vec.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let steps = T::from(n.saturating_sub(1).max(1)).unwrap_or_else(T::one);
    let dx: T = (stop - start) / steps;
    (0..n)
        .map(|i| match T::from(i) {
            Some(i) => start + i * dx,
            None => T::nan(),
        })
        .collect()
}

/// Tabulate `f` at `n` evenly spaced keys from start to stop, including the
/// endpoint, into an interpolating map with strategy `I`.
///
/// ```rust
/// use interpmap::{utils::sample, PiecewiseLinear};
///
/// let sq = sample::<PiecewiseLinear, _, _>(0.0_f64, 4.0, 5, |x| x * x);
/// assert_eq!(sq.len(), 5);
/// assert_eq!(sq.eval_one(&2.5), 6.5);
/// ```
pub fn sample<I, T, V>(start: T, stop: T, n: usize, f: impl Fn(T) -> V) -> InterpolatingMap<T, V, I>
where
    I: Default,
    T: Float,
{
    linspace(start, stop, n)
        .into_iter()
        .map(|x| Node::new(x, f(x)))
        .collect::<InterpolatingMap<T, V, I, Less>>()
}

#[cfg(test)]
mod test {
    use super::{linspace, sample};
    use crate::gradient::Gradient;
    use crate::interpolator::{PiecewiseConstant, PiecewiseLogLinear};

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0_f64, 1.0, 5), [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0_f32, -2.0, 3), [2.0, 0.0, -2.0]);
        assert_eq!(linspace(3.0_f64, 9.0, 1), [3.0]);
        assert!(linspace(3.0_f64, 9.0, 0).is_empty());
    }

    #[test]
    fn test_sample() {
        let step = sample::<PiecewiseConstant, _, _>(0.0_f64, 1.0, 3, |x| 10.0 * x);
        assert_eq!(step.keys().copied().collect::<Vec<_>>(), [0.0, 0.5, 1.0]);
        assert_eq!(step.eval_one(&0.7), 5.0);
        assert_eq!(step.max_value(), Some(10.0));

        // Log-linear interpolation of a log-sampled curve is exact
        let log = sample::<PiecewiseLogLinear, _, _>(1.0_f64, 100.0, 12, |x| 3.0 * x.ln());
        for x in [2.0_f64, 7.5, 50.0, 250.0] {
            assert!((log.eval_one(&x) - 3.0 * x.ln()).abs() < 1e-12);
        }
    }
}
