//! Piecewise-constant interpolation

use num_traits::Zero;
use tracing::trace;

use super::Interpolator;
use crate::compare::KeyCompare;
use crate::node::Node;
use crate::search;

/// Hold-last piecewise-constant interpolation.
///
/// Returns the value of the node with the greatest key not greater than the
/// observation point, or the first node's value before the start of the domain.
///
/// Values are returned as stored, without promotion; an empty range gives `V::zero()`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecewiseConstant;

impl<K, V> Interpolator<K, V> for PiecewiseConstant
where
    V: Clone + Zero,
{
    type Output = V;

    #[inline]
    fn interpolate<C: KeyCompare<K>>(&self, nodes: &[Node<K, V>], x: &K, cmp: &C) -> V {
        match nodes {
            [] => {
                trace!("constant interpolation over empty node range");
                V::zero()
            }
            [only] => only.value.clone(),
            _ => {
                // First node whose key is greater than x
                let i = search::partition_point(nodes, |n| !cmp.less(x, &n.key));
                nodes[i.saturating_sub(1)].value.clone()
            }
        }
    }

    #[inline]
    fn convert(&self, value: &V) -> V {
        value.clone()
    }
}
