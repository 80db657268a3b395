use crate::arena::Arena;
use crate::types::Side;
use crate::util::{get_child, get_p, replace_child, set_child, set_p};

use super::types::AvlNodeLike;

/// Rotates the subtree at `n` in direction `dir` and returns the new root.
///
/// `Side::Left` promotes `n`'s right child, `Side::Right` its left child.
/// The promoted child's inner subtree (the one on `dir`) moves under `n`.
/// Only links change; balance factors are left to the caller.
pub fn rotate<N: AvlNodeLike>(arena: &mut Arena<N>, root: u32, n: u32, dir: Side) -> u32 {
    let up = dir.opposite();
    let c = get_child(arena, n, up).expect("rotation needs a child to promote");
    let inner = get_child(arena, c, dir);
    let p = get_p(arena, n);

    tracing::trace!(node = n, promoted = c, ?dir, "rotate");

    let root = replace_child(arena, Some(root), p, n, Some(c)).unwrap_or(c);

    set_child(arena, n, up, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(n));
    }
    set_child(arena, c, dir, Some(n));
    set_p(arena, n, Some(c));

    root
}

/// `rotateLeft`: promotes `n`'s right child.
#[inline]
pub fn rotate_left<N: AvlNodeLike>(arena: &mut Arena<N>, root: u32, n: u32) -> u32 {
    rotate(arena, root, n, Side::Left)
}

/// `rotateRight`: promotes `n`'s left child.
#[inline]
pub fn rotate_right<N: AvlNodeLike>(arena: &mut Arena<N>, root: u32, n: u32) -> u32 {
    rotate(arena, root, n, Side::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;
    use crate::util::{get_l, get_r};

    type N = AvlNode<i32, ()>;

    fn node(arena: &mut Arena<N>, k: i32) -> u32 {
        arena.alloc(AvlNode::new(k, ()))
    }

    fn link(arena: &mut Arena<N>, parent: u32, side: Side, child: u32) {
        set_child(arena, parent, side, Some(child));
        set_p(arena, child, Some(parent));
    }

    #[test]
    fn rotate_left_at_root() {
        // 1           2
        //  \         / \
        //   2   ->  1   3
        //  / \       \
        // 15  3       15
        let mut arena = Arena::new();
        let a = node(&mut arena, 1);
        let b = node(&mut arena, 2);
        let c = node(&mut arena, 3);
        let inner = node(&mut arena, 15);
        link(&mut arena, a, Side::Right, b);
        link(&mut arena, b, Side::Right, c);
        link(&mut arena, b, Side::Left, inner);

        let root = rotate_left(&mut arena, a, a);
        assert_eq!(root, b);
        assert_eq!(get_p(&arena, b), None);
        assert_eq!(get_l(&arena, b), Some(a));
        assert_eq!(get_r(&arena, b), Some(c));
        assert_eq!(get_r(&arena, a), Some(inner));
        assert_eq!(get_p(&arena, inner), Some(a));
        assert_eq!(get_p(&arena, a), Some(b));
    }

    #[test]
    fn rotate_right_below_root_keeps_root() {
        let mut arena = Arena::new();
        let top = node(&mut arena, 100);
        let n = node(&mut arena, 30);
        let l = node(&mut arena, 20);
        let ll = node(&mut arena, 10);
        link(&mut arena, top, Side::Left, n);
        link(&mut arena, n, Side::Left, l);
        link(&mut arena, l, Side::Left, ll);

        let root = rotate_right(&mut arena, top, n);
        assert_eq!(root, top);
        assert_eq!(get_l(&arena, top), Some(l));
        assert_eq!(get_p(&arena, l), Some(top));
        assert_eq!(get_r(&arena, l), Some(n));
        assert_eq!(get_l(&arena, l), Some(ll));
        assert_eq!(get_l(&arena, n), None);
        assert_eq!(arena[n].bf, 0);
    }
}
