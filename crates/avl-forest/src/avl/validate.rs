use std::cmp::Ordering;

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::types::KvNode;
use crate::util::{first, next};

use super::types::AvlNodeLike;

/// Checks links, balance factors and key order of the tree at `root`.
///
/// Every stored balance must equal the measured `height(right) -
/// height(left)` and lie in `-1..=1`; in-order keys must be strictly
/// increasing under `comparator`.
pub fn assert_avl_tree<K, V, N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    N: AvlNodeLike + KvNode<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root].p().is_some() {
        return Err(InvariantError::RootHasParent { node: root });
    }

    validate_links_and_bf(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev].key(), arena[i].key()) != Ordering::Less {
                return Err(InvariantError::OrderViolated { node: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Returns the subtree height so each node is measured once.
fn validate_links_and_bf<N: AvlNodeLike>(
    arena: &Arena<N>,
    node: u32,
) -> Result<i64, InvariantError> {
    let height = |child: Option<u32>| -> Result<i64, InvariantError> {
        let Some(child) = child else {
            return Ok(0);
        };
        if arena[child].p() != Some(node) {
            return Err(InvariantError::BrokenParentLink { node, child });
        }
        validate_links_and_bf(arena, child)
    };
    let lh = height(arena[node].l())?;
    let rh = height(arena[node].r())?;

    let expected = rh - lh;
    let actual = arena[node].bf();
    if i64::from(actual) != expected {
        return Err(InvariantError::BalanceMismatch {
            node,
            expected,
            actual,
        });
    }
    if !(-1..=1).contains(&actual) {
        return Err(InvariantError::Unbalanced {
            node,
            balance: actual,
        });
    }

    Ok(1 + lh.max(rh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;
    use crate::types::{Node, Side};

    type N = AvlNode<i32, ()>;

    fn link(arena: &mut Arena<N>, parent: u32, side: Side, child: u32) {
        arena[parent].set_child(side, Some(child));
        arena[child].set_p(Some(parent));
    }

    fn chain() -> (Arena<N>, u32, u32, u32) {
        let mut arena = Arena::new();
        let a = arena.alloc(AvlNode::new(1, ()));
        let b = arena.alloc(AvlNode::new(2, ()));
        let c = arena.alloc(AvlNode::new(3, ()));
        link(&mut arena, a, Side::Right, b);
        link(&mut arena, b, Side::Right, c);
        (arena, a, b, c)
    }

    #[test]
    fn detects_each_violation() {
        let cmp = i32::cmp;

        let (mut arena, a, b, _) = chain();
        arena[b].bf = 1;
        arena[a].bf = 2;
        assert_eq!(
            assert_avl_tree(&arena, Some(a), &cmp),
            Err(InvariantError::Unbalanced { node: a, balance: 2 })
        );

        arena[a].bf = 1;
        assert_eq!(
            assert_avl_tree(&arena, Some(a), &cmp),
            Err(InvariantError::BalanceMismatch {
                node: a,
                expected: 2,
                actual: 1
            })
        );

        let (mut arena, a, b, c) = chain();
        arena[c].p = Some(a);
        assert_eq!(
            assert_avl_tree(&arena, Some(a), &cmp),
            Err(InvariantError::BrokenParentLink { node: b, child: c })
        );

        let (arena, _, b, _) = chain();
        assert_eq!(
            assert_avl_tree(&arena, Some(b), &cmp),
            Err(InvariantError::RootHasParent { node: b })
        );
    }

    #[test]
    fn detects_order_violation() {
        let mut arena = Arena::new();
        let a = arena.alloc(AvlNode::new(5, ()));
        let b = arena.alloc(AvlNode::new(9, ()));
        link(&mut arena, a, Side::Left, b);
        arena[a].bf = -1;
        assert_eq!(
            assert_avl_tree(&arena, Some(a), &i32::cmp),
            Err(InvariantError::OrderViolated { node: a })
        );
        assert_eq!(assert_avl_tree::<i32, (), N, _>(&arena, None, &i32::cmp), Ok(()));
    }
}
