//! Interpolation strategies over a sorted node range.
//!
//! Each strategy is a stateless function of (sorted nodes, observation key).
//! They share one edge-case policy:
//!
//! * no nodes: the additive identity of the output type
//! * one node: that node's value, for any key
//! * two or more: bisection search for the bracketing pair, clamped to the
//!   first or last segment outside the domain, so extrapolation never errors
//! * two or more nodes that all share one key: that key's first value
//!
//! Linear and log-linear evaluation promote keys and values to a floating type
//! no narrower than `F` (see [`crate::promote`]) before dividing.

pub mod hold;
pub mod linear;
pub mod log_linear;

pub use hold::PiecewiseConstant;
pub use linear::PiecewiseLinear;
pub use log_linear::PiecewiseLogLinear;

use tracing::trace;

use crate::compare::KeyCompare;
use crate::node::Node;
use crate::search;

/// Extrapolation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// Two adjacent nodes around an observation point.
///
/// For observation points outside the domain, the nodes are the first or last
/// pair and do not surround the observation point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<'a, K, V> {
    pub lo: &'a Node<K, V>,
    pub hi: &'a Node<K, V>,
    pub extrap: Extrap,
}

/// The segment used to evaluate at `x`, as `(lo, hi)` nodes with distinct keys.
///
/// Returns `None` if there are fewer than two distinct keys.
///
/// The upper node is the first whose key is not less than `x`, clipped so that
/// it lies past the run of keys equivalent to the first key and no later than
/// the start of the run equivalent to the last key. Outside the domain this
/// gives the first or last segment of nonzero width.
#[inline]
pub fn segment<'a, K, V, C>(
    nodes: &'a [Node<K, V>],
    x: &K,
    cmp: &C,
) -> Option<(&'a Node<K, V>, &'a Node<K, V>)>
where
    C: KeyCompare<K>,
{
    let n = nodes.len();
    if n < 2 {
        return None;
    }
    let (first, last) = (&nodes[0].key, &nodes[n - 1].key);

    let mut i = search::partition_point(nodes, |node| cmp.less(&node.key, x));
    if i < n && !cmp.less(first, &nodes[i].key) {
        i = search::upper_bound(nodes, first, cmp);
    }
    if i > 0 && !cmp.less(&nodes[i - 1].key, last) {
        i = search::lower_bound(nodes, last, cmp);
    }

    if i == 0 || i == n {
        trace!(len = n, "all keys equivalent, no segment to interpolate along");
        return None;
    }

    Some((&nodes[i - 1], &nodes[i]))
}

/// [`segment`] together with where `x` falls relative to the domain.
pub fn bracket<'a, K, V, C>(nodes: &'a [Node<K, V>], x: &K, cmp: &C) -> Option<Bracket<'a, K, V>>
where
    C: KeyCompare<K>,
{
    let (lo, hi) = segment(nodes, x, cmp)?;
    let n = nodes.len();

    let extrap = match x {
        x if cmp.less(x, &nodes[0].key) => Extrap::OutsideLow,
        x if cmp.less(&nodes[n - 1].key, x) => Extrap::OutsideHigh,
        _ => Extrap::Inside,
    };

    Some(Bracket { lo, hi, extrap })
}

/// A one-dimensional interpolation strategy.
pub trait Interpolator<K, V> {
    /// Result of an evaluation
    type Output;

    /// Evaluate the interpolant defined by `nodes` at `x`.
    ///
    /// `nodes` must be sorted under `cmp`.
    fn interpolate<C: KeyCompare<K>>(&self, nodes: &[Node<K, V>], x: &K, cmp: &C) -> Self::Output;

    /// A stored value as this strategy reports it.
    fn convert(&self, value: &V) -> Self::Output;
}

#[cfg(test)]
mod test {
    use super::{bracket, segment, Extrap};
    use crate::compare::{Greater, Less};
    use crate::node::Node;

    #[test]
    fn test_bracket_clamps_to_edges() {
        let nodes: Vec<Node<f64, f64>> = [(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]
            .into_iter()
            .map(Node::from)
            .collect();

        let b = bracket(&nodes, &-5.0, &Less).unwrap();
        assert_eq!((b.lo.key, b.hi.key, b.extrap), (1.0, 2.0, Extrap::OutsideLow));

        let b = bracket(&nodes, &1.0, &Less).unwrap();
        assert_eq!((b.lo.key, b.hi.key, b.extrap), (1.0, 2.0, Extrap::Inside));

        let b = bracket(&nodes, &2.5, &Less).unwrap();
        assert_eq!((b.lo.key, b.hi.key, b.extrap), (2.0, 3.0, Extrap::Inside));

        let b = bracket(&nodes, &3.0, &Less).unwrap();
        assert_eq!((b.lo.key, b.hi.key, b.extrap), (2.0, 3.0, Extrap::Inside));

        let b = bracket(&nodes, &30.0, &Less).unwrap();
        assert_eq!((b.lo.key, b.hi.key, b.extrap), (2.0, 3.0, Extrap::OutsideHigh));

        assert!(bracket(&nodes[..1], &1.0, &Less).is_none());
        assert!(bracket(&nodes[..0], &1.0, &Less).is_none());
    }

    #[test]
    fn test_bracket_at_interior_node() {
        let nodes: Vec<Node<i32, i32>> = (0..5).map(|i| Node::new(i, i * i)).collect();

        // An observation exactly on a node uses the bracket ending at that node
        let b = bracket(&nodes, &2, &Less).unwrap();
        assert_eq!((b.lo.key, b.hi.key), (1, 2));
    }

    #[test]
    fn test_segment_skips_duplicated_end_keys() {
        let keyed = |keys: &[i32]| -> Vec<Node<i32, usize>> {
            keys.iter().enumerate().map(|(i, &k)| Node::new(k, i)).collect()
        };

        let ns = keyed(&[1, 1, 1, 4, 7, 7]);
        for x in [-3, 0, 1] {
            let (lo, hi) = segment(&ns, &x, &Less).unwrap();
            assert_eq!((lo.key, hi.key, lo.value), (1, 4, 2), "at {x}");
        }
        for x in [7, 8, 100] {
            let (lo, hi) = segment(&ns, &x, &Less).unwrap();
            assert_eq!((lo.key, hi.key, hi.value), (4, 7, 4), "at {x}");
        }
        let (lo, hi) = segment(&ns, &5, &Less).unwrap();
        assert_eq!((lo.key, hi.key), (4, 7));

        // Interior duplicates are left alone
        let ns = keyed(&[1, 3, 3, 5]);
        let (lo, hi) = segment(&ns, &3, &Less).unwrap();
        assert_eq!((lo.key, hi.key, hi.value), (1, 3, 1));

        // Descending order clips the same way
        let ns = keyed(&[9, 9, 4, 2, 2]);
        let (lo, hi) = segment(&ns, &10, &Greater).unwrap();
        assert_eq!((lo.key, hi.key), (9, 4));
        let (lo, hi) = segment(&ns, &0, &Greater).unwrap();
        assert_eq!((lo.key, hi.key), (4, 2));
    }

    #[test]
    fn test_segment_all_keys_equal() {
        let ns: Vec<Node<f64, f64>> = (0..4).map(|i| Node::new(2.0, i as f64)).collect();
        for x in [-1.0, 2.0, 5.0] {
            assert!(segment(&ns, &x, &Less).is_none());
            assert!(bracket(&ns, &x, &Less).is_none());
        }
    }
}
