//! Piecewise-linear interpolation in the logarithm of the key

use core::marker::PhantomData;

use num_traits::Float;
use tracing::trace;

use super::{segment, Interpolator};
use crate::compare::KeyCompare;
use crate::node::Node;
use crate::promote::Promote;

/// Linear interpolation / extrapolation against `ln(key)`.
///
/// Keys are expected to be strictly positive. Observation points at or below
/// zero, where the logarithm is undefined, evaluate to the first node's value.
///
/// `F` is the minimum floating precision of the result.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PiecewiseLogLinear<F = f64> {
    precision: PhantomData<F>,
}

impl<F> PiecewiseLogLinear<F> {
    pub fn new() -> Self {
        Self {
            precision: PhantomData,
        }
    }
}

impl<K, V, F, W> Interpolator<K, V> for PiecewiseLogLinear<F>
where
    F: Float,
    W: Float,
    K: Promote<F, Output = W>,
    V: Promote<F, Output = W>,
{
    type Output = W;

    #[inline]
    fn interpolate<C: KeyCompare<K>>(&self, nodes: &[Node<K, V>], x: &K, cmp: &C) -> W {
        let Some(first) = nodes.first() else {
            trace!("log-linear interpolation over empty node range");
            return W::zero();
        };

        let xf = x.promote();
        if xf <= W::zero() {
            trace!("non-positive observation point for log-linear interpolation");
            return first.value.promote();
        }

        let Some((lo, hi)) = segment(nodes, x, cmp) else {
            return first.value.promote();
        };

        let (x0, y0) = (lo.key.promote(), lo.value.promote());
        let (x1, y1) = (hi.key.promote(), hi.value.promote());

        let slope = (y1 - y0) / (x1 / x0).ln();
        let dx = (xf / x0).ln();

        y0 + slope * dx
    }

    #[inline]
    fn convert(&self, value: &V) -> W {
        value.promote()
    }
}
