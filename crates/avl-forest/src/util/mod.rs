//! Base binary-search-tree layer.
//!
//! Everything here is balance-agnostic and works for any [`Node`] stored in
//! an [`Arena`]: lookup, in-order navigation, measurement, the structural
//! node swap and the debug printer. The AVL layer builds on top of it.
//!
//! Key-based helpers take a `key_of` accessor closure so callers can use any
//! node layout.

pub mod print;
pub mod swap;

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::types::{Node, Side};

pub use print::print;
pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn get_child<N: Node>(arena: &Arena<N>, idx: u32, side: Side) -> Option<u32> {
    arena[idx].child(side)
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_p(v);
}

#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut Arena<N>, idx: u32, side: Side, v: Option<u32>) {
    arena[idx].set_child(side, v);
}

/// Side of `parent` that `child` hangs off.
#[inline]
pub(crate) fn side_of<N: Node>(arena: &Arena<N>, parent: u32, child: u32) -> Side {
    if get_l(arena, parent) == Some(child) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Points whatever referenced `old` (its parent's child slot, or the root) at
/// `new`, and sets `new`'s parent link. Returns the new root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut Arena<N>,
    root: Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    if let Some(new) = new {
        set_p(arena, new, parent);
    }
    match parent {
        None => new,
        Some(p) => {
            let side = side_of(arena, p, old);
            set_child(arena, p, side, new);
            root
        }
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &Arena<N>, mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &Arena<N>, mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &Arena<N>, root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes on the longest root-to-leaf path. Empty tree is 0.
pub fn height<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |r| {
        1 + height(arena, get_l(arena, r)).max(height(arena, get_r(arena, r)))
    })
}

fn leaf_depth<N: Node>(arena: &Arena<N>, node: u32) -> Option<usize> {
    let depth = match (get_l(arena, node), get_r(arena, node)) {
        (None, None) => 0,
        (Some(c), None) | (None, Some(c)) => leaf_depth(arena, c)?,
        (Some(l), Some(r)) => {
            let dl = leaf_depth(arena, l)?;
            let dr = leaf_depth(arena, r)?;
            if dl != dr {
                return None;
            }
            dl
        }
    };
    Some(depth + 1)
}

/// Whether every root-to-leaf path has the same number of nodes.
///
/// A missing child is not a leaf: only nodes without children end a path.
pub fn equal_paths<N: Node>(arena: &Arena<N>, root: Option<u32>) -> bool {
    root.map_or(true, |r| leaf_depth(arena, r).is_some())
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    K: ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, key_of(&arena[i])) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Finds node by key, or the next lower node if the exact key does not exist.
pub fn find_or_next_lower<N, K, F, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    K: ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    let mut result: Option<u32> = None;
    while let Some(i) = curr {
        match comparator(key_of(&arena[i]), key) {
            Ordering::Equal => return Some(i),
            Ordering::Greater => curr = get_l(arena, i),
            Ordering::Less => {
                result = Some(i);
                curr = get_r(arena, i);
            }
        }
    }
    result
}
