//! Key-value nodes, in the mathematical sense of a sampled (domain, co-domain) pair.

/// A stored key-value pair.
///
/// Nodes compare lexicographically, by key and then by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Node<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<Node<K, V>> for (K, V) {
    #[inline]
    fn from(node: Node<K, V>) -> Self {
        node.into_pair()
    }
}
