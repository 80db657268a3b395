use std::cmp::Ordering;

use crate::arena::Arena;
use crate::types::{KvNode, Side};
use crate::util::{get_child, get_p, set_child, set_p, side_of};

use super::rotate::rotate;
use super::types::AvlNodeLike;

/// Outcome of [`insert`].
#[derive(Debug, PartialEq, Eq)]
pub enum Inserted<V> {
    /// A new node was allocated.
    New(u32),
    /// The key already existed; its value was replaced. Carries the old value.
    Replaced(u32, V),
}

impl<V> Inserted<V> {
    /// Id of the node holding the key.
    pub fn id(&self) -> u32 {
        match self {
            Inserted::New(id) | Inserted::Replaced(id, _) => *id,
        }
    }
}

/// Inserts `key`/`value` into the tree at `root`. Returns the new root.
///
/// An existing key only has its value overwritten: no allocation, no
/// balance change, no rotation.
pub fn insert<K, V, N, C, F>(
    arena: &mut Arena<N>,
    root: Option<u32>,
    key: K,
    value: V,
    comparator: &C,
    new_node: F,
) -> (Option<u32>, Inserted<V>)
where
    N: AvlNodeLike + KvNode<K, V>,
    C: Fn(&K, &K) -> Ordering,
    F: FnOnce(K, V) -> N,
{
    let Some(root) = root else {
        let n = arena.alloc(new_node(key, value));
        tracing::debug!(node = n, "insert root");
        return (Some(n), Inserted::New(n));
    };

    let mut curr = root;
    loop {
        let Some(side) = Side::of(comparator(&key, arena[curr].key())) else {
            let old = arena[curr].set_value(value);
            return (Some(root), Inserted::Replaced(curr, old));
        };
        match get_child(arena, curr, side) {
            Some(next) => curr = next,
            None => {
                let n = arena.alloc(new_node(key, value));
                tracing::debug!(node = n, parent = curr, ?side, "insert");
                let root = attach(arena, root, n, curr, side);
                return (Some(root), Inserted::New(n));
            }
        }
    }
}

/// Hangs the fresh leaf `n` on the empty `side` of `parent` and rebalances.
fn attach<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    root: u32,
    n: u32,
    parent: u32,
    side: Side,
) -> u32 {
    set_child(arena, parent, side, Some(n));
    set_p(arena, n, Some(parent));
    arena[n].set_bf(0);

    if arena[parent].bf() == 0 {
        arena[parent].set_bf(side.sign());
        insert_fix(arena, root, n, parent)
    } else {
        // The other side already held a child: height unchanged.
        arena[parent].set_bf(0);
        root
    }
}

/// Walks up from `parent`, whose subtree just grew through `node`, until the
/// growth is absorbed or fixed by a rotation. Returns the new root.
pub fn insert_fix<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    mut root: u32,
    mut node: u32,
    mut parent: u32,
) -> u32 {
    loop {
        let Some(grand) = get_p(arena, parent) else {
            return root;
        };
        let side = side_of(arena, grand, parent);
        let gbf = arena[grand].update_bf(side.sign());

        if gbf == 0 {
            tracing::trace!(node = grand, "insert fix absorbed");
            return root;
        }
        if gbf == side.sign() {
            node = parent;
            parent = grand;
            continue;
        }

        let node_side = side_of(arena, parent, node);
        if node_side == side {
            root = rotate(arena, root, grand, side.opposite());
            arena[grand].set_bf(0);
            arena[parent].set_bf(0);
        } else {
            let b = arena[node].bf();
            root = rotate(arena, root, parent, side);
            root = rotate(arena, root, grand, side.opposite());
            let (pbf, gbf) = if b == side.sign() {
                (0, -side.sign())
            } else if b == 0 {
                (0, 0)
            } else {
                (side.sign(), 0)
            };
            arena[parent].set_bf(pbf);
            arena[grand].set_bf(gbf);
            arena[node].set_bf(0);
        }
        return root;
    }
}
