use std::cmp::Ordering;

use crate::error::InvariantError;

use super::tree::AvlTree;

/// AVL tree set backed by [`AvlTree<K, ()>`].
pub struct AvlSet<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    inner: AvlTree<K, (), C>,
}

impl<K: Ord> AvlSet<K, fn(&K, &K) -> Ordering> {
    pub fn new() -> Self {
        Self {
            inner: AvlTree::new(),
        }
    }
}

impl<K: Ord> Default for AvlSet<K, fn(&K, &K) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlSet<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: AvlTree::with_comparator(comparator),
        }
    }

    /// Adds `value`. Returns `false` if it was already present.
    pub fn add(&mut self, value: K) -> bool {
        self.inner.insert(value, ()).is_none()
    }

    /// Removes `value`. Returns `false` if it was absent.
    pub fn del(&mut self, value: &K) -> bool {
        self.inner.remove(value).is_some()
    }

    pub fn has(&self, value: &K) -> bool {
        self.inner.contains_key(value)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn first(&self) -> Option<&K> {
        self.inner.first().map(|i| self.inner.key(i))
    }

    pub fn last(&self) -> Option<&K> {
        self.inner.last().map(|i| self.inner.key(i))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.inner.keys()
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        self.inner.assert_valid()
    }
}
