//! Bisection searches over sorted node slices.
//!
//! These are written out as explicit loops instead of deferring to
//! `slice::partition_point` or `slice::binary_search_by` so that the exact
//! predicate for each search is visible at the call site, and so that nothing
//! here ever needs a placeholder node or a default-constructed value.
//!
//! All searches assume `nodes` is sorted under the comparator that is passed in.
//! Each takes a worst-case number of iterations of log2(nodes.len()) + 1.

use core::ops::Range;

use crate::compare::KeyCompare;
use crate::node::Node;

/// Index of the first element for which `pred` is `false`.
///
/// `pred` must be `true` for a (possibly empty) prefix of `items`
/// and `false` for the remainder.
#[inline]
pub fn partition_point<T, P>(items: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut first = 0;
    let mut count = items.len();

    while count > 0 {
        let step = count / 2;
        let mid = first + step;
        if pred(&items[mid]) {
            first = mid + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }

    first
}

/// First position whose key is not less than `key`.
#[inline]
pub fn lower_bound<K, V, C>(nodes: &[Node<K, V>], key: &K, cmp: &C) -> usize
where
    C: KeyCompare<K>,
{
    partition_point(nodes, |n| cmp.less(&n.key, key))
}

/// First position whose key is greater than `key`.
#[inline]
pub fn upper_bound<K, V, C>(nodes: &[Node<K, V>], key: &K, cmp: &C) -> usize
where
    C: KeyCompare<K>,
{
    partition_point(nodes, |n| !cmp.less(key, &n.key))
}

/// The span of positions whose keys are equivalent to `key`.
///
/// The upper search only covers the tail starting at the lower bound.
#[inline]
pub fn equal_range<K, V, C>(nodes: &[Node<K, V>], key: &K, cmp: &C) -> Range<usize>
where
    C: KeyCompare<K>,
{
    let lo = lower_bound(nodes, key, cmp);
    let hi = lo + upper_bound(&nodes[lo..], key, cmp);
    lo..hi
}
