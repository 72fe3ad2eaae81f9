//! Sorted key-value (multi)map backed by one contiguous buffer.
//!
//! All nodes live in a single `Vec`, which keeps positional access and
//! iteration cache-friendly at the cost of shifting on insert and erase.
//!
//! | Operation                     | Cost     |
//! |-------------------------------|----------|
//! | positional access             | O(1)     |
//! | find / bounds / equal range   | O(log n) |
//! | insert                        | O(n)     |
//! | erase                         | O(n)     |
//!
//! ```rust
//! use interpmap::VectorMap;
//!
//! let mut m = VectorMap::from([(3, "c"), (1, "a"), (2, "b")]);
//! m.insert(2, "B");
//!
//! assert_eq!(m.keys().copied().collect::<Vec<_>>(), [1, 2, 2, 3]);
//! assert_eq!(m.equal_range(&2), 1..3);
//! assert_eq!(m.erase(&2), 2);
//! assert_eq!(m.find(&2), None);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, Range, RangeBounds};
use core::slice;

use tracing::trace;

use crate::compare::{KeyCompare, Less};
use crate::error::Error;
use crate::node::Node;
use crate::search;

/// A key-value multimap that keeps its nodes sorted by key in contiguous storage.
///
/// Duplicate keys are allowed and are always adjacent. A new node is inserted
/// at the lower bound of its key, i.e. _before_ any nodes already holding an
/// equivalent key.
///
/// Keys are never handed out mutably, so the sort order cannot be broken
/// from outside; values may be mutated in place.
#[derive(Clone)]
pub struct VectorMap<K, V, C = Less> {
    cmp: C,
    nodes: Vec<Node<K, V>>,
}

impl<K, V> VectorMap<K, V> {
    /// An empty map in ascending key order.
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }

    /// An empty map in ascending key order with space for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Less)
    }
}

impl<K, V, C> VectorMap<K, V, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            cmp,
            nodes: Vec::new(),
        }
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            cmp,
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// The key ordering of this map.
    pub fn key_comp(&self) -> &C {
        &self.cmp
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
        self.nodes.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Positional access returning `None` past the end.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&Node<K, V>> {
        self.nodes.get(index)
    }

    /// Mutable access to the value stored at `index`.
    pub fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        self.nodes.get_mut(index).map(|n| &mut n.value)
    }

    /// Node with the lowest key.
    pub fn first(&self) -> Option<&Node<K, V>> {
        self.nodes.first()
    }

    /// Node with the highest key.
    pub fn last(&self) -> Option<&Node<K, V>> {
        self.nodes.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Node<K, V>] {
        &self.nodes
    }

    /// Nodes in key order. Reverse iteration is available through `.rev()`.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Node<K, V>> {
        self.nodes.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.nodes.iter().map(|n| &n.key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.nodes.iter().map(|n| &n.value)
    }

    pub fn values_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator + '_ {
        self.nodes.iter_mut().map(|n| &mut n.value)
    }

    /// Remove and return the node at `index`, shifting later nodes down.
    ///
    /// # Panics
    /// * If `index >= self.len()`
    pub fn remove(&mut self, index: usize) -> Node<K, V> {
        self.nodes.remove(index)
    }

    /// Remove exactly the nodes at positions in `range`.
    ///
    /// # Panics
    /// * If the range is out of bounds
    pub fn drain<R>(&mut self, range: R) -> alloc::vec::Drain<'_, Node<K, V>>
    where
        R: RangeBounds<usize>,
    {
        self.nodes.drain(range)
    }

    /// Keep only the nodes for which `f` returns `true`. Order is preserved.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.nodes.retain_mut(|n| f(&n.key, &mut n.value));
    }

    /// Exchange contents and comparators with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<K, V, C> VectorMap<K, V, C>
where
    C: KeyCompare<K>,
{
    /// First position whose key is not less than `key`.
    #[inline]
    pub fn lower_bound(&self, key: &K) -> usize {
        search::lower_bound(&self.nodes, key, &self.cmp)
    }

    /// First position whose key is greater than `key`.
    #[inline]
    pub fn upper_bound(&self, key: &K) -> usize {
        search::upper_bound(&self.nodes, key, &self.cmp)
    }

    /// Positions of all nodes whose key is equivalent to `key`; empty if there are none.
    #[inline]
    pub fn equal_range(&self, key: &K) -> Range<usize> {
        search::equal_range(&self.nodes, key, &self.cmp)
    }

    /// Position of the first node with a key equivalent to `key`.
    pub fn find(&self, key: &K) -> Option<usize> {
        let i = self.lower_bound(key);
        match self.nodes.get(i) {
            Some(n) if !self.cmp.less(key, &n.key) => Some(i),
            _ => None,
        }
    }

    pub fn get_node(&self, key: &K) -> Option<&Node<K, V>> {
        self.find(key).map(|i| &self.nodes[i])
    }

    /// Value of the first node with a key equivalent to `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_node(key).map(|n| &n.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Number of nodes with a key equivalent to `key`.
    pub fn count(&self, key: &K) -> usize {
        self.equal_range(key).len()
    }

    /// Insert a node at the lower bound of its key and return its position.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        self.insert_node(Node { key, value })
    }

    pub fn insert_node(&mut self, node: Node<K, V>) -> usize {
        let i = self.lower_bound(&node.key);
        self.nodes.insert(i, node);
        i
    }

    /// Insert every node from `iter`, in order.
    ///
    /// Returns the position of the last inserted node, or `None` if `iter` was empty.
    pub fn insert_iter<I, T>(&mut self, iter: I) -> Option<usize>
    where
        I: IntoIterator<Item = T>,
        T: Into<Node<K, V>>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.nodes.reserve(lower);

        let mut last = None;
        let mut inserted = 0_usize;
        for node in iter {
            last = Some(self.insert_node(node.into()));
            inserted += 1;
        }
        trace!(inserted, len = self.nodes.len(), "inserted nodes");

        last
    }

    /// Remove every node with a key equivalent to `key` and return how many were removed.
    pub fn erase(&mut self, key: &K) -> usize {
        let range = self.equal_range(key);
        let removed = range.len();
        if removed > 0 {
            self.nodes.drain(range);
        }
        trace!(removed, len = self.nodes.len(), "erased key");

        removed
    }

    /// Replace the contents with the nodes from `iter`.
    pub fn assign<I, T>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Node<K, V>>,
    {
        trace!(previous = self.nodes.len(), "assigning nodes");
        self.nodes.clear();
        self.insert_iter(iter);
    }
}

impl<K, V> Default for VectorMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for VectorMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.nodes.iter().map(|n| (&n.key, &n.value)))
            .finish()
    }
}

impl<K, V, C> Index<usize> for VectorMap<K, V, C> {
    type Output = Node<K, V>;

    /// Unchecked-contract positional access; panics past the end.
    /// Use [`VectorMap::at`] for the checked variant.
    #[inline]
    fn index(&self, index: usize) -> &Node<K, V> {
        &self.nodes[index]
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for VectorMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<K: Eq, V: Eq, C> Eq for VectorMap<K, V, C> {}

impl<K: PartialOrd, V: PartialOrd, C> PartialOrd for VectorMap<K, V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.nodes.partial_cmp(&other.nodes)
    }
}

impl<K: Ord, V: Ord, C> Ord for VectorMap<K, V, C> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.nodes.cmp(&other.nodes)
    }
}

impl<K: Hash, V: Hash, C> Hash for VectorMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nodes.hash(state);
    }
}

impl<K, V, C, T> Extend<T> for VectorMap<K, V, C>
where
    C: KeyCompare<K>,
    T: Into<Node<K, V>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_iter(iter);
    }
}

impl<K, V, C, T> FromIterator<T> for VectorMap<K, V, C>
where
    C: KeyCompare<K> + Default,
    T: Into<Node<K, V>>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut m = Self::with_comparator(C::default());
        m.insert_iter(iter);
        m
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for VectorMap<K, V>
where
    K: PartialOrd,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, K, V, C> IntoIterator for &'a VectorMap<K, V, C> {
    type Item = &'a Node<K, V>;
    type IntoIter = slice::Iter<'a, Node<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<K, V, C> IntoIterator for VectorMap<K, V, C> {
    type Item = Node<K, V>;
    type IntoIter = alloc::vec::IntoIter<Node<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
