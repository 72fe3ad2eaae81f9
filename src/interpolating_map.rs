//! An interpolating function with a sorted-map interface.
//!
//! Each key-value pair is a node (in the mathematical sense) of
//! (domain, co-domain) values, and evaluating the map between nodes defers to
//! an interpolation strategy chosen at the type level.
//!
//! ```rust
//! use interpmap::{PiecewiseConstantMap, PiecewiseLinearMap, PiecewiseLogLinearMap};
//!
//! let lin = PiecewiseLinearMap::from([(10.0_f64, 10.0_f64), (1.0, 1.0)]);
//! assert!((lin.eval_one(&20.12) - 20.12).abs() < 1e-12);
//! assert!((lin.eval_one(&-1.4) + 1.4).abs() < 1e-12);
//!
//! let step = PiecewiseConstantMap::from([(1.0_f64, 1.0_f64), (10.0, 10.0)]);
//! assert_eq!(step.eval_one(&9.9), 1.0);
//! assert_eq!(step.eval_one(&10.0), 10.0);
//!
//! let log = PiecewiseLogLinearMap::from([(1.0_f64, 1.0_f64), (10.0, 10.0)]);
//! assert!((log.eval_one(&1123.54) - 28.455297).abs() < 1e-5);
//! assert_eq!(log.eval_one(&-1.4), 1.0);
//! ```

#[cfg(feature = "std")]
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, Range, RangeBounds};
use core::slice;

use crate::compare::{KeyCompare, Less};
use crate::error::Error;
use crate::interpolator::{
    bracket, Bracket, Interpolator, PiecewiseConstant, PiecewiseLinear, PiecewiseLogLinear,
};
use crate::node::Node;
use crate::vector_map::VectorMap;

/// A [`VectorMap`] of nodes combined with an interpolation strategy `I`.
///
/// The strategy is fixed at construction. Swapping two maps swaps their
/// strategies along with their nodes. Comparisons between maps compare the
/// stored nodes, not the interpolated curves.
#[derive(Clone)]
pub struct InterpolatingMap<K, V, I, C = Less> {
    ipl: I,
    nodes: VectorMap<K, V, C>,
}

/// Hold-last step function
pub type PiecewiseConstantMap<K, V, C = Less> = InterpolatingMap<K, V, PiecewiseConstant, C>;

/// Linear interpolation / extrapolation in `f64` or wider
pub type PiecewiseLinearMap<K, V, C = Less> = InterpolatingMap<K, V, PiecewiseLinear, C>;

/// Linear interpolation / extrapolation against `ln(key)` in `f64` or wider
pub type PiecewiseLogLinearMap<K, V, C = Less> = InterpolatingMap<K, V, PiecewiseLogLinear, C>;

impl<K, V, I: Default> InterpolatingMap<K, V, I> {
    pub fn new() -> Self {
        Self::with_interpolator(I::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_nodes(VectorMap::with_capacity(capacity), I::default())
    }
}

impl<K, V, I> InterpolatingMap<K, V, I> {
    pub fn with_interpolator(ipl: I) -> Self {
        Self::from_nodes(VectorMap::new(), ipl)
    }
}

impl<K, V, I: Default, C> InterpolatingMap<K, V, I, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_parts(I::default(), cmp)
    }
}

impl<K, V, I, C> InterpolatingMap<K, V, I, C> {
    pub fn with_parts(ipl: I, cmp: C) -> Self {
        Self::from_nodes(VectorMap::with_comparator(cmp), ipl)
    }

    /// Wrap an existing node map, which is already sorted by construction.
    pub fn from_nodes(nodes: VectorMap<K, V, C>, ipl: I) -> Self {
        Self { ipl, nodes }
    }

    pub fn interpolator(&self) -> &I {
        &self.ipl
    }

    pub fn nodes(&self) -> &VectorMap<K, V, C> {
        &self.nodes
    }

    pub fn into_nodes(self) -> VectorMap<K, V, C> {
        self.nodes
    }

    pub fn key_comp(&self) -> &C {
        self.nodes.key_comp()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Bounds-checked positional access.
    ///
    /// # Errors
    /// * If `index >= self.len()`
    pub fn at(&self, index: usize) -> Result<&Node<K, V>, Error> {
        self.nodes.at(index)
    }

    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&Node<K, V>> {
        self.nodes.get_index(index)
    }

    pub fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        self.nodes.value_mut(index)
    }

    pub fn first(&self) -> Option<&Node<K, V>> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node<K, V>> {
        self.nodes.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Node<K, V>] {
        self.nodes.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Node<K, V>> {
        self.nodes.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.nodes.keys()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.nodes.values()
    }

    pub fn values_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator + '_ {
        self.nodes.values_mut()
    }

    /// # Panics
    /// * If `index >= self.len()`
    pub fn remove(&mut self, index: usize) -> Node<K, V> {
        self.nodes.remove(index)
    }

    /// # Panics
    /// * If the range is out of bounds
    pub fn drain<R>(&mut self, range: R) -> alloc::vec::Drain<'_, Node<K, V>>
    where
        R: RangeBounds<usize>,
    {
        self.nodes.drain(range)
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.nodes.retain(f);
    }

    /// Exchange nodes, comparators, and strategies with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<K, V, I, C> InterpolatingMap<K, V, I, C>
where
    C: KeyCompare<K>,
{
    #[inline]
    pub fn lower_bound(&self, key: &K) -> usize {
        self.nodes.lower_bound(key)
    }

    #[inline]
    pub fn upper_bound(&self, key: &K) -> usize {
        self.nodes.upper_bound(key)
    }

    #[inline]
    pub fn equal_range(&self, key: &K) -> Range<usize> {
        self.nodes.equal_range(key)
    }

    pub fn find(&self, key: &K) -> Option<usize> {
        self.nodes.find(key)
    }

    pub fn get_node(&self, key: &K) -> Option<&Node<K, V>> {
        self.nodes.get_node(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.nodes.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn count(&self, key: &K) -> usize {
        self.nodes.count(key)
    }

    /// Insert a node at the lower bound of its key and return its position.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        self.nodes.insert(key, value)
    }

    pub fn insert_node(&mut self, node: Node<K, V>) -> usize {
        self.nodes.insert_node(node)
    }

    /// Returns the position of the last inserted node, or `None` if `iter` was empty.
    pub fn insert_iter<It, T>(&mut self, iter: It) -> Option<usize>
    where
        It: IntoIterator<Item = T>,
        T: Into<Node<K, V>>,
    {
        self.nodes.insert_iter(iter)
    }

    /// Remove every node with a key equivalent to `key` and return how many were removed.
    pub fn erase(&mut self, key: &K) -> usize {
        self.nodes.erase(key)
    }

    pub fn assign<It, T>(&mut self, iter: It)
    where
        It: IntoIterator<Item = T>,
        T: Into<Node<K, V>>,
    {
        self.nodes.assign(iter);
    }

    /// The pair of nodes the linear strategies would use at `x`,
    /// or `None` with fewer than two nodes.
    pub fn bracket(&self, x: &K) -> Option<Bracket<'_, K, V>> {
        bracket(self.nodes.as_slice(), x, self.nodes.key_comp())
    }
}

impl<K, V, I, C> InterpolatingMap<K, V, I, C>
where
    I: Interpolator<K, V>,
    C: KeyCompare<K>,
{
    /// Evaluate the interpolant at an observation point.
    #[inline]
    pub fn eval_one(&self, x: &K) -> I::Output {
        self.ipl
            .interpolate(self.nodes.as_slice(), x, self.nodes.key_comp())
    }

    /// Evaluate at an observation point built from anything convertible to a key.
    #[inline]
    pub fn eval_from<Q: Into<K>>(&self, q: Q) -> I::Output {
        self.eval_one(&q.into())
    }

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// # Errors
    /// * If `locs` and `out` differ in length
    pub fn eval(&self, locs: &[K], out: &mut [I::Output]) -> Result<(), Error> {
        if locs.len() != out.len() {
            return Err(Error::LengthMismatch {
                expected: locs.len(),
                found: out.len(),
            });
        }

        for (y, x) in out.iter_mut().zip(locs.iter()) {
            *y = self.eval_one(x);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    pub fn eval_alloc(&self, locs: &[K]) -> Vec<I::Output> {
        locs.iter().map(|x| self.eval_one(x)).collect()
    }
}

impl<K, V, I: Default> Default for InterpolatingMap<K, V, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, I: fmt::Debug, C> fmt::Debug for InterpolatingMap<K, V, I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpolatingMap")
            .field("interpolator", &self.ipl)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<K, V, I, C> Index<usize> for InterpolatingMap<K, V, I, C> {
    type Output = Node<K, V>;

    /// Panics past the end; use [`InterpolatingMap::at`] for the checked variant.
    #[inline]
    fn index(&self, index: usize) -> &Node<K, V> {
        &self.nodes[index]
    }
}

impl<K: PartialEq, V: PartialEq, I, C> PartialEq for InterpolatingMap<K, V, I, C> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<K: Eq, V: Eq, I, C> Eq for InterpolatingMap<K, V, I, C> {}

impl<K: PartialOrd, V: PartialOrd, I, C> PartialOrd for InterpolatingMap<K, V, I, C> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.nodes.partial_cmp(&other.nodes)
    }
}

impl<K: Ord, V: Ord, I, C> Ord for InterpolatingMap<K, V, I, C> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.nodes.cmp(&other.nodes)
    }
}

impl<K: Hash, V: Hash, I, C> Hash for InterpolatingMap<K, V, I, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nodes.hash(state);
    }
}

impl<K, V, I, C, T> Extend<T> for InterpolatingMap<K, V, I, C>
where
    C: KeyCompare<K>,
    T: Into<Node<K, V>>,
{
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.nodes.insert_iter(iter);
    }
}

impl<K, V, I, C, T> FromIterator<T> for InterpolatingMap<K, V, I, C>
where
    I: Default,
    C: KeyCompare<K> + Default,
    T: Into<Node<K, V>>,
{
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from_nodes(iter.into_iter().collect(), I::default())
    }
}

impl<K, V, I, const N: usize> From<[(K, V); N]> for InterpolatingMap<K, V, I>
where
    K: PartialOrd,
    I: Default,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, K, V, I, C> IntoIterator for &'a InterpolatingMap<K, V, I, C> {
    type Item = &'a Node<K, V>;
    type IntoIter = slice::Iter<'a, Node<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<K, V, I, C> IntoIterator for InterpolatingMap<K, V, I, C> {
    type Item = Node<K, V>;
    type IntoIter = alloc::vec::IntoIter<Node<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
