use crate::arena::Arena;
use crate::types::Side;
use crate::util::{get_child, get_l, get_p, get_r, prev, replace_child, side_of, swap};

use super::rotate::rotate;
use super::types::AvlNodeLike;

/// Exchanges the tree positions of `a` and `b` together with their balance
/// factors, so each balance stays with the position it describes.
pub fn swap_nodes<N: AvlNodeLike>(arena: &mut Arena<N>, root: u32, a: u32, b: u32) -> u32 {
    let root = swap(arena, root, a, b);
    let abf = arena[a].bf();
    let bbf = arena[b].bf();
    arena[a].set_bf(bbf);
    arena[b].set_bf(abf);
    root
}

/// Unlinks node `n` from the tree at `root`, frees its slot and rebalances.
///
/// A node with two children first trades places with its in-order
/// predecessor, so the node actually spliced out has at most one child.
/// Returns the new root and the removed node.
pub fn remove<N: AvlNodeLike>(arena: &mut Arena<N>, mut root: u32, n: u32) -> (Option<u32>, N) {
    if get_l(arena, n).is_some() && get_r(arena, n).is_some() {
        let pred = prev(arena, n).expect("node with a left child has a predecessor");
        root = swap_nodes(arena, root, n, pred);
    }

    let child = get_r(arena, n).or(get_l(arena, n));
    let parent = get_p(arena, n);
    let shrunk = parent.map(|p| side_of(arena, p, n));
    let root = replace_child(arena, Some(root), parent, n, child);

    let mut node = arena.free(n).expect("removed node is live");
    node.set_p(None);
    node.set_l(None);
    node.set_r(None);
    tracing::debug!(node = n, ?parent, "remove");

    match (root, parent, shrunk) {
        (Some(root), Some(parent), Some(shrunk)) => {
            (Some(remove_fix(arena, root, parent, shrunk)), node)
        }
        (root, ..) => (root, node),
    }
}

/// Walks up from `node`, whose `shrunk` subtree just lost a level, until the
/// height loss is absorbed or the root is passed. Returns the new root.
pub fn remove_fix<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    mut root: u32,
    mut node: u32,
    mut shrunk: Side,
) -> u32 {
    loop {
        let heavy = shrunk.opposite();
        let parent = get_p(arena, node);
        let next_shrunk = parent.map(|p| side_of(arena, p, node));
        let nb = arena[node].bf() + heavy.sign();

        let propagate = if nb == 2 * heavy.sign() {
            let c = get_child(arena, node, heavy).expect("heavy side has a child");
            let cb = arena[c].bf();
            if cb == heavy.sign() {
                root = rotate(arena, root, node, shrunk);
                arena[node].set_bf(0);
                arena[c].set_bf(0);
                true
            } else if cb == 0 {
                root = rotate(arena, root, node, shrunk);
                arena[node].set_bf(heavy.sign());
                arena[c].set_bf(shrunk.sign());
                false
            } else {
                let g = get_child(arena, c, shrunk).expect("inner grandchild exists");
                let b = arena[g].bf();
                root = rotate(arena, root, c, heavy);
                root = rotate(arena, root, node, shrunk);
                let (nbf, cbf) = if b == shrunk.sign() {
                    (0, heavy.sign())
                } else if b == 0 {
                    (0, 0)
                } else {
                    (shrunk.sign(), 0)
                };
                arena[node].set_bf(nbf);
                arena[c].set_bf(cbf);
                arena[g].set_bf(0);
                true
            }
        } else if nb == heavy.sign() {
            arena[node].set_bf(nb);
            false
        } else {
            arena[node].set_bf(0);
            true
        };

        if !propagate {
            tracing::trace!(node, "remove fix absorbed");
            return root;
        }
        match (parent, next_shrunk) {
            (Some(p), Some(s)) => {
                node = p;
                shrunk = s;
            }
            _ => return root,
        }
    }
}
