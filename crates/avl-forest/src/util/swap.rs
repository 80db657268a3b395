use crate::arena::Arena;
use crate::types::{Node, Side};

use super::{get_child, get_p, set_child, set_p, side_of};

/// Swaps the tree positions of `x` and `y`.
///
/// Only links move: each node keeps its own payload and any other metadata.
/// Handles the root, parent/child adjacency and siblings. Returns the new
/// root.
pub fn swap<N: Node>(arena: &mut Arena<N>, mut root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }

    let xp = get_p(arena, x);
    let yp = get_p(arena, y);
    // Sides must be read before any link changes: for siblings, the first
    // parent rewrite would otherwise hide the second node's side.
    let x_side = xp.map(|p| side_of(arena, p, x));
    let y_side = yp.map(|p| side_of(arena, p, y));

    for side in [Side::Left, Side::Right] {
        let xc = get_child(arena, x, side);
        let yc = get_child(arena, y, side);

        if yc == Some(x) {
            set_child(arena, x, side, Some(y));
            set_p(arena, y, Some(x));
        } else {
            set_child(arena, x, side, yc);
            if let Some(yc) = yc {
                set_p(arena, yc, Some(x));
            }
        }

        if xc == Some(y) {
            set_child(arena, y, side, Some(x));
            set_p(arena, x, Some(y));
        } else {
            set_child(arena, y, side, xc);
            if let Some(xc) = xc {
                set_p(arena, xc, Some(y));
            }
        }
    }

    match (xp, x_side) {
        (Some(p), Some(side)) if p != y => {
            set_p(arena, y, Some(p));
            set_child(arena, p, side, Some(y));
        }
        (Some(_), _) => {}
        (None, _) => {
            root = y;
            set_p(arena, y, None);
        }
    }

    match (yp, y_side) {
        (Some(p), Some(side)) if p != x => {
            set_p(arena, x, Some(p));
            set_child(arena, p, side, Some(x));
        }
        (Some(_), _) => {}
        (None, _) => {
            root = x;
            set_p(arena, x, None);
        }
    }

    root
}
