//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` id into an [`Arena`](crate::arena::Arena).
//! All tree-manipulation functions take the arena and work with ids.

use std::cmp::Ordering;

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Balance contribution of growing this side: `-1` for left, `+1` for right.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    /// Side a key belongs on relative to a node, given `cmp(key, node_key)`.
    ///
    /// `Equal` maps to `None`.
    #[inline]
    pub fn of(ordering: Ordering) -> Option<Side> {
        match ordering {
            Ordering::Less => Some(Side::Left),
            Ordering::Greater => Some(Side::Right),
            Ordering::Equal => None,
        }
    }
}

/// Tree links (`p`, `l`, `r`).
///
/// The parent link is a back-reference for upward traversal only; the tree
/// shape is carried by the child links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    #[inline]
    fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l(),
            Side::Right => self.r(),
        }
    }

    #[inline]
    fn set_child(&mut self, side: Side, v: Option<u32>) {
        match side {
            Side::Left => self.set_l(v),
            Side::Right => self.set_r(v),
        }
    }
}

/// Key/value node interface used by map-like structures.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V) -> V;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_sign_and_opposite() {
        assert_eq!(Side::Left.sign(), -1);
        assert_eq!(Side::Right.sign(), 1);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite().opposite(), Side::Right);
    }

    #[test]
    fn side_of_ordering() {
        assert_eq!(Side::of(1.cmp(&2)), Some(Side::Left));
        assert_eq!(Side::of(3.cmp(&2)), Some(Side::Right));
        assert_eq!(Side::of(2.cmp(&2)), None);
    }
}
