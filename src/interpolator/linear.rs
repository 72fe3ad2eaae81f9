//! Piecewise-linear interpolation / extrapolation

use core::marker::PhantomData;

use num_traits::Float;
use tracing::trace;

use super::{segment, Interpolator};
use crate::compare::KeyCompare;
use crate::node::Node;
use crate::promote::Promote;

/// Linear interpolation between adjacent nodes, and linear extrapolation
/// along the first or last segment outside the domain.
///
/// `F` is the minimum floating precision of the result.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PiecewiseLinear<F = f64> {
    precision: PhantomData<F>,
}

impl<F> PiecewiseLinear<F> {
    pub fn new() -> Self {
        Self {
            precision: PhantomData,
        }
    }
}

impl<K, V, F, W> Interpolator<K, V> for PiecewiseLinear<F>
where
    F: Float,
    W: Float,
    K: Promote<F, Output = W>,
    V: Promote<F, Output = W>,
{
    type Output = W;

    #[inline]
    fn interpolate<C: KeyCompare<K>>(&self, nodes: &[Node<K, V>], x: &K, cmp: &C) -> W {
        let Some((lo, hi)) = segment(nodes, x, cmp) else {
            return match nodes.first() {
                Some(only) => only.value.promote(),
                None => {
                    trace!("linear interpolation over empty node range");
                    W::zero()
                }
            };
        };

        let (x0, y0) = (lo.key.promote(), lo.value.promote());
        let (x1, y1) = (hi.key.promote(), hi.value.promote());

        let slope = (y1 - y0) / (x1 - x0);
        let dx = x.promote() - x0;

        y0 + slope * dx
    }

    #[inline]
    fn convert(&self, value: &V) -> W {
        value.promote()
    }
}

#[cfg(test)]
mod test {
    use super::PiecewiseLinear;
    use crate::compare::Less;
    use crate::interpolator::Interpolator;
    use crate::node::Node;
    use crate::testing::{randn, rng_fixed_seed};
    use crate::utils::linspace;

    fn nodes<K: Copy, V: Copy>(pairs: &[(K, V)]) -> Vec<Node<K, V>> {
        pairs.iter().map(|&p| Node::from(p)).collect()
    }

    #[test]
    fn test_linear_edges() {
        let ipl = PiecewiseLinear::<f64>::new();

        let empty: Vec<Node<f64, f64>> = Vec::new();
        assert_eq!(ipl.interpolate(&empty, &3.0, &Less), 0.0);

        let one = nodes(&[(1.0, 1.0)]);
        for x in [-1000.123, -1.4, 0.0, 1.0, 1.5, 1123.54] {
            assert_eq!(ipl.interpolate(&one, &x, &Less), 1.0);
        }

        // Identity line, inside and outside the domain
        let two = nodes(&[(1.0, 1.0), (10.0, 10.0)]);
        for x in [
            -1000.123, -1.4, 0.0, 1.0, 1.5, 2.5, 5.0, 9.5, 9.9, 10.0, 20.12, 1123.54,
        ] {
            let y: f64 = ipl.interpolate(&two, &x, &Less);
            assert!((y - x).abs() < 1e-9, "f({x}) = {y}");
        }
    }

    #[test]
    fn test_linear_promotes_integers() {
        // Integer keys and values never truncate the slope
        let ns = nodes(&[(0_i32, 0_i32), (3, 1)]);

        let y: f64 = PiecewiseLinear::<f64>::new().interpolate(&ns, &1, &Less);
        assert!((y - 1.0 / 3.0).abs() < 1e-15);

        let y: f32 = PiecewiseLinear::<f32>::new().interpolate(&ns, &2, &Less);
        assert!((y - 2.0 / 3.0).abs() < 1e-6);

        // f64 data stays f64 even with a lower requested precision
        let ns = nodes(&[(0.0_f64, 0.0_f64), (3.0, 1.0)]);
        let y: f64 = PiecewiseLinear::<f32>::new().interpolate(&ns, &1.0, &Less);
        assert!((y - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_linear_duplicated_end_keys() {
        let ipl = PiecewiseLinear::<f64>::new();

        let low = nodes(&[(1.0, 1.0), (1.0, 1.0), (10.0, 10.0)]);
        for x in [-5.0, 0.0, 1.0, 5.5, 10.0, 20.0] {
            let y: f64 = ipl.interpolate(&low, &x, &Less);
            assert!((y - x).abs() < 1e-12, "f({x}) = {y}");
        }

        let high = nodes(&[(1.0, 1.0), (10.0, 10.0), (10.0, 10.0)]);
        for x in [-5.0, 1.0, 10.0, 20.0] {
            let y: f64 = ipl.interpolate(&high, &x, &Less);
            assert!((y - x).abs() < 1e-12, "f({x}) = {y}");
        }

        // Every key the same: flat at the first value
        let flat = nodes(&[(2.0, 5.0), (2.0, 7.0)]);
        for x in [-1.0, 2.0, 3.0] {
            assert_eq!(ipl.interpolate(&flat, &x, &Less), 5.0);
        }
    }

    #[test]
    fn test_linear_1d() {
        let rng = &mut rng_fixed_seed();

        let n = 77;
        let vals = randn::<f64>(rng, n);

        // Uneven grid
        let (start, stop) = (-3.25, 314.0);
        let mut x = randn::<f64>(rng, n);
        x.sort_unstable_by(|a, b| a.total_cmp(b));
        x.iter_mut().for_each(|v| *v = (*v * (stop - start)) + start);

        let ns: Vec<Node<f64, f64>> = x
            .iter()
            .zip(vals.iter())
            .map(|(&k, &v)| Node::new(k, v))
            .collect();
        let ipl = PiecewiseLinear::<f64>::new();

        // Observations under both interpolation and extrapolation
        let mut locs = randn::<f64>(rng, 3 * n);
        locs.iter_mut()
            .for_each(|v| *v = (*v * 2.0 * (stop - start)) + 2.0 * start);

        for &loc in locs.iter() {
            let y: f64 = ipl.interpolate(&ns, &loc, &Less);
            let j: usize = ((x.partition_point(|v| v < &loc) as isize - 1).max(0) as usize)
                .min(x.len() - 2);

            let (xleft, xright) = (x[j], x[j + 1]);
            let (yleft, yright) = (vals[j], vals[j + 1]);

            if loc >= x[0] && loc <= x[n - 1] {
                assert!(y <= yleft.max(yright) + 1e-12 && y >= yleft.min(yright) - 1e-12);
            }

            let slope = (yright - yleft) / (xright - xleft);
            let y_expected = yleft + slope * (loc - xleft);
            assert!((y - y_expected).abs() <= 1e-10 * y_expected.abs().max(1.0));
        }

        // Exact at the nodes
        let grid = linspace(0.0, 10.0, 11);
        let sq: Vec<Node<f64, f64>> = grid.iter().map(|&k| Node::new(k, k * k)).collect();
        for node in sq.iter() {
            let y: f64 = ipl.interpolate(&sq, &node.key, &Less);
            assert!((y - node.value).abs() < 1e-12);
        }
    }
}
