//! Gradients: interpolating functions of a numeric argument, usually in `[0, 1]`,
//! in the sense of a color gradient.
//!
//! Any [`InterpolatingMap`] is a gradient, and gradients with different
//! strategies can be used interchangeably behind `dyn Gradient`.
//!
//! ```rust
//! use interpmap::{Gradient, LinearGradient, StepGradient};
//!
//! let ramps: Vec<Box<dyn Gradient<f64, Output = f64>>> = vec![
//!     Box::new(LinearGradient::from([(0.0_f64, 0.0_f64), (1.0, 255.0)])),
//!     Box::new(StepGradient::from([(0.0_f64, 0.0_f64), (0.5, 128.0), (1.0, 255.0)])),
//! ];
//!
//! assert_eq!(ramps[0].value_at(&0.5), 127.5);
//! assert_eq!(ramps[1].value_at(&0.75), 128.0);
//! assert_eq!(ramps[1].max_value(), Some(255.0));
//! ```

use crate::compare::{KeyCompare, Less};
use crate::interpolating_map::InterpolatingMap;
use crate::interpolator::{Interpolator, PiecewiseConstant, PiecewiseLinear};

/// An interpolating function with known values at the ends of its domain.
pub trait Gradient<K> {
    type Output;

    /// Evaluate the gradient at `x`.
    fn value_at(&self, x: &K) -> Self::Output;

    /// Value at the lowest key, or `None` if there are no nodes.
    fn min_value(&self) -> Option<Self::Output>;

    /// Value at the highest key, or `None` if there are no nodes.
    fn max_value(&self) -> Option<Self::Output>;
}

impl<K, V, I, C> Gradient<K> for InterpolatingMap<K, V, I, C>
where
    I: Interpolator<K, V>,
    C: KeyCompare<K>,
{
    type Output = I::Output;

    #[inline]
    fn value_at(&self, x: &K) -> I::Output {
        self.eval_one(x)
    }

    fn min_value(&self) -> Option<I::Output> {
        self.first().map(|n| self.interpolator().convert(&n.value))
    }

    fn max_value(&self) -> Option<I::Output> {
        self.last().map(|n| self.interpolator().convert(&n.value))
    }
}

/// Gradient with linear blending between stops
pub type LinearGradient<K, V, C = Less> = InterpolatingMap<K, V, PiecewiseLinear, C>;

/// Gradient holding each stop's value until the next stop
pub type StepGradient<K, V, C = Less> = InterpolatingMap<K, V, PiecewiseConstant, C>;

#[cfg(test)]
mod test {
    use super::{Gradient, LinearGradient, StepGradient};
    use crate::interpolating_map::InterpolatingMap;

    #[test]
    fn test_gradient_ends() {
        let g = LinearGradient::from([(1.0_f64, 3_i32), (0.0, -1)]);

        assert_eq!(g.min_value(), Some(-1.0));
        assert_eq!(g.max_value(), Some(3.0));
        assert_eq!(g.value_at(&0.5), 1.0);

        let empty: StepGradient<f64, f64> = InterpolatingMap::new();
        assert_eq!(empty.min_value(), None);
        assert_eq!(empty.max_value(), None);
        assert_eq!(empty.value_at(&0.5), 0.0);
    }

    #[test]
    fn test_gradient_objects() {
        fn sample(g: &dyn Gradient<f64, Output = f64>, n: usize) -> Vec<f64> {
            (0..=n).map(|i| g.value_at(&(i as f64 / n as f64))).collect()
        }

        let lin = LinearGradient::from([(0.0_f64, 0.0_f64), (1.0, 1.0)]);
        let step = StepGradient::from([(0.0_f64, 0.0_f64), (0.5, 1.0)]);

        assert_eq!(sample(&lin, 4), [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(sample(&step, 4), [0.0, 0.0, 1.0, 1.0, 1.0]);
    }
}
