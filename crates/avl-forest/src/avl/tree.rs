use std::cmp::Ordering;
use std::fmt;

use crate::arena::Arena;
use crate::error::{InvariantError, KeyError};
use crate::types::{KvNode, Node};
use crate::util::{self, equal_paths, find, find_or_next_lower, first, height, last, next, prev};

use super::insert::{self, Inserted};
use super::remove;
use super::types::{AvlNode, AvlNodeLike};
use super::validate::assert_avl_tree;

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Ordered map backed by an arena-allocated AVL tree.
///
/// Entries are addressed by stable `u32` node ids as well as by key. An id
/// keeps naming the same entry until that entry is removed; afterwards the
/// slot may be reused by a later insert.
pub struct AvlTree<K, V, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    arena: Arena<AvlNode<K, V>>,
    root: Option<u32>,
    comparator: C,
}

impl<K: Ord, V> AvlTree<K, V, fn(&K, &K) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            comparator: default_comparator::<K>,
        }
    }
}

impl<K: Ord, V> Default for AvlTree<K, V, fn(&K, &K) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Inserts or overwrites `key`. Returns the previous value, if any.
    ///
    /// Overwriting leaves the tree shape and every balance factor untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.insert_entry(key, value) {
            Inserted::New(_) => None,
            Inserted::Replaced(_, old) => Some(old),
        }
    }

    /// Like [`insert`](Self::insert), but reports the node id as well.
    pub fn insert_entry(&mut self, key: K, value: V) -> Inserted<V> {
        let (root, inserted) = insert::insert(
            &mut self.arena,
            self.root,
            key,
            value,
            &self.comparator,
            AvlNode::new,
        );
        self.root = root;
        if matches!(inserted, Inserted::New(_)) {
            self.check_invariants();
        }
        inserted
    }

    /// Removes `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let n = self.find(key)?;
        let root = self.root?;
        let (root, node) = remove::remove(&mut self.arena, root, n);
        self.root = root;
        self.check_invariants();
        Some((node.k, node.v))
    }

    /// Node id holding `key`.
    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, |n| &n.k, &self.comparator)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena[i].value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena[idx].value_mut())
    }

    /// Lookup for callers that require the key to be present.
    pub fn try_get(&self, key: &K) -> Result<&V, KeyError> {
        self.get(key).ok_or(KeyError)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Greatest entry whose key is `<= key`.
    pub fn get_or_next_lower(&self, key: &K) -> Option<u32> {
        find_or_next_lower(&self.arena, self.root, key, |n| &n.k, &self.comparator)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        tracing::debug!(len = self.len(), "clear");
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        next(&self.arena, curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        prev(&self.arena, curr)
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
        &self.arena[idx]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.arena[idx].key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.arena[idx].value()
    }

    pub fn value_mut_by_index(&mut self, idx: u32) -> &mut V {
        self.arena[idx].value_mut()
    }

    pub fn balance(&self, idx: u32) -> i8 {
        self.arena[idx].bf()
    }

    pub fn parent(&self, idx: u32) -> Option<u32> {
        self.arena[idx].p()
    }

    pub fn left(&self, idx: u32) -> Option<u32> {
        self.arena[idx].l()
    }

    pub fn right(&self, idx: u32) -> Option<u32> {
        self.arena[idx].r()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            front: self.first(),
            back: self.last(),
            remaining: self.len(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    /// Whether every root-to-leaf path has the same length.
    pub fn has_equal_paths(&self) -> bool {
        equal_paths(&self.arena, self.root)
    }

    #[inline]
    fn check_invariants(&self) {
        if !cfg!(feature = "check-invariants") {
            return;
        }
        if let Err(err) = self.assert_valid() {
            panic!("AVL invariant broken: {err}");
        }
    }
}

impl<K, V, C> fmt::Debug for AvlTree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = util::print(&self.arena, self.root, "", &|i, n: &AvlNode<K, V>| {
            format!("Node[{i}] [bf={}] {{ {:?} = {:?} }}", n.bf, n.k, n.v)
        });
        f.write_str(&out)
    }
}

/// In-order iterator over an [`AvlTree`].
pub struct Iter<'a, K, V> {
    arena: &'a Arena<AvlNode<K, V>>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.remaining -= 1;
        self.front = next(self.arena, i);
        let n = &self.arena[i];
        Some((&n.k, &n.v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        self.remaining -= 1;
        self.back = prev(self.arena, i);
        let n = &self.arena[i];
        Some((&n.k, &n.v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V, C> IntoIterator for &'a AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_node_and_shape() {
        let mut tree = AvlTree::new();
        tree.insert(2, "a");
        tree.insert(1, "b");
        tree.insert(3, "c");
        let before: Vec<_> = [1, 2, 3].iter().map(|k| tree.find(k)).collect();
        let root = tree.root();

        assert_eq!(tree.insert(1, "z"), Some("b"));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root(), root);
        let after: Vec<_> = [1, 2, 3].iter().map(|k| tree.find(k)).collect();
        assert_eq!(before, after);
        assert_eq!(tree.get(&1), Some(&"z"));
    }

    #[test]
    fn try_get_reports_missing_key() {
        let mut tree = AvlTree::new();
        tree.insert("k", 1);
        assert_eq!(tree.try_get(&"k"), Ok(&1));
        assert_eq!(tree.try_get(&"x"), Err(KeyError));
        assert_eq!(KeyError.to_string(), "key not found");
    }

    #[test]
    fn iter_runs_both_ways() {
        let mut tree = AvlTree::new();
        for k in [5, 1, 4, 2, 3] {
            tree.insert(k, k * 10);
        }
        let fwd: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(fwd, vec![(1, 10), (2, 20), (3, 30), (4, 40), (5, 50)]);
        let back: Vec<_> = tree.keys().rev().copied().collect();
        assert_eq!(back, vec![5, 4, 3, 2, 1]);

        let mut it = tree.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next().map(|(k, _)| *k), Some(1));
        assert_eq!(it.next_back().map(|(k, _)| *k), Some(5));
        let mid: Vec<_> = it.map(|(k, _)| *k).collect();
        assert_eq!(mid, vec![2, 3, 4]);
    }

    #[test]
    fn debug_output_lists_balances() {
        let mut tree = AvlTree::new();
        tree.insert(1, ());
        tree.insert(2, ());
        let out = format!("{tree:?}");
        assert!(out.starts_with("Node[0] [bf=1] { 1 = () }"));
        assert!(out.contains("R=Node[1] [bf=0] { 2 = () }"));
    }
}
