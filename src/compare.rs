//! Key ordering relations.
//!
//! A comparator is a strict weak ordering expressed as a "less" predicate,
//! the same contract as the ordering of a sorted associative container.
//! Two keys are equivalent when neither is less than the other.

/// A strict weak ordering over keys.
pub trait KeyCompare<K: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    #[inline]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Ascending order by `PartialOrd`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Less;

impl<K: PartialOrd + ?Sized> KeyCompare<K> for Less {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Descending order by `PartialOrd`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greater;

impl<K: PartialOrd + ?Sized> KeyCompare<K> for Greater {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a > b
    }
}

impl<K: ?Sized, F> KeyCompare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::{Greater, KeyCompare, Less};

    #[test]
    fn test_orderings() {
        assert!(Less.less(&1, &2));
        assert!(!Less.less(&2, &2));
        assert!(Greater.less(&2, &1));
        assert!(Less.equivalent(&3.0, &3.0));
        assert!(!Greater.equivalent(&3.0, &4.0));

        // Order by magnitude only, so -2 and 2 are equivalent
        let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();
        assert!(by_abs.less(&-1, &2));
        assert!(by_abs.equivalent(&-2, &2));
    }
}
