//! Summaries over the stored values of a node range.
//!
//! These look only at the node values, never at the interpolated curve, and
//! take anything that iterates over node references: a [`VectorMap`],
//! an [`InterpolatingMap`], a slice of nodes, or a sub-range of one.
//!
//! [`VectorMap`]: crate::VectorMap
//! [`InterpolatingMap`]: crate::InterpolatingMap

use core::cmp::Ordering;
use core::ops::Div;

use num_traits::{NumCast, Zero};

use crate::node::Node;

/// First node holding the smallest value, or `None` for an empty range.
///
/// Values that are unordered against the running minimum (NaN) are skipped.
pub fn min<'a, K: 'a, V: PartialOrd + 'a>(
    nodes: impl IntoIterator<Item = &'a Node<K, V>>,
) -> Option<&'a Node<K, V>> {
    extremum(nodes, Ordering::Less)
}

/// First node holding the largest value, or `None` for an empty range.
pub fn max<'a, K: 'a, V: PartialOrd + 'a>(
    nodes: impl IntoIterator<Item = &'a Node<K, V>>,
) -> Option<&'a Node<K, V>> {
    extremum(nodes, Ordering::Greater)
}

/// Keep the running best unless a later value beats it strictly in `direction`.
fn extremum<'a, K: 'a, V: PartialOrd + 'a>(
    nodes: impl IntoIterator<Item = &'a Node<K, V>>,
    direction: Ordering,
) -> Option<&'a Node<K, V>> {
    let ordered = |v: &V| v.partial_cmp(v).is_some();
    nodes.into_iter().fold(None, |best: Option<&'a Node<K, V>>, n| match best {
        Some(b) if ordered(&b.value) && n.value.partial_cmp(&b.value) != Some(direction) => {
            Some(b)
        }
        _ => Some(n),
    })
}

/// First smallest and last largest node in a single pass.
#[cfg(feature = "std")]
pub fn minmax<'a, K: 'a, V: PartialOrd + 'a>(
    nodes: impl IntoIterator<Item = &'a Node<K, V>>,
) -> Option<(&'a Node<K, V>, &'a Node<K, V>)> {
    use itertools::{Itertools, MinMaxResult};

    let cmp = |a: &&Node<K, V>, b: &&Node<K, V>| {
        a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal)
    };
    match nodes.into_iter().minmax_by(cmp) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(n) => Some((n, n)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Sum of all values; zero for an empty range.
pub fn total<'a, K: 'a, V: Clone + Zero + 'a>(
    nodes: impl IntoIterator<Item = &'a Node<K, V>>,
) -> V {
    nodes
        .into_iter()
        .fold(V::zero(), |acc, n| acc + n.value.clone())
}

/// Arithmetic mean of all values, or `None` for an empty range.
///
/// The division is done in `V`, so integer values give a truncated mean.
pub fn mean<'a, K: 'a, V>(nodes: impl IntoIterator<Item = &'a Node<K, V>>) -> Option<V>
where
    V: Clone + Zero + Div<Output = V> + NumCast + 'a,
{
    let (sum, n) = nodes
        .into_iter()
        .fold((V::zero(), 0_usize), |(acc, n), node| {
            (acc + node.value.clone(), n + 1)
        });

    if n == 0 {
        return None;
    }
    let count: V = NumCast::from(n)?;
    Some(sum / count)
}
