use crate::types::{KvNode, Node, Side};

/// AVL tree node.
///
/// Child links live in one array indexed by [`Side`].
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    pub p: Option<u32>,
    pub children: [Option<u32>; 2],
    pub k: K,
    pub v: V,
    /// Balance factor, `height(right) - height(left)`.
    pub bf: i8,
}

#[inline]
fn slot(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl<K, V> AvlNode<K, V> {
    /// Detached leaf holding `k`/`v`, balance 0.
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            children: [None; 2],
            k,
            v,
            bf: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children == [None; 2]
    }
}

impl<K, V> Node for AvlNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }
    fn l(&self) -> Option<u32> {
        self.child(Side::Left)
    }
    fn r(&self) -> Option<u32> {
        self.child(Side::Right)
    }
    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }
    fn set_l(&mut self, v: Option<u32>) {
        self.set_child(Side::Left, v);
    }
    fn set_r(&mut self, v: Option<u32>) {
        self.set_child(Side::Right, v);
    }

    #[inline]
    fn child(&self, side: Side) -> Option<u32> {
        self.children[slot(side)]
    }

    #[inline]
    fn set_child(&mut self, side: Side, v: Option<u32>) {
        self.children[slot(side)] = v;
    }
}

impl<K, V> KvNode<K, V> for AvlNode<K, V> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.v, value)
    }
}

/// AVL-specific node behavior: access to the balance factor.
pub trait AvlNodeLike: Node {
    fn bf(&self) -> i8;
    fn set_bf(&mut self, bf: i8);

    /// Adds `diff` to the balance factor and returns the result.
    #[inline]
    fn update_bf(&mut self, diff: i8) -> i8 {
        let bf = self.bf() + diff;
        self.set_bf(bf);
        bf
    }
}

impl<K, V> AvlNodeLike for AvlNode<K, V> {
    fn bf(&self) -> i8 {
        self.bf
    }

    fn set_bf(&mut self, bf: i8) {
        self.bf = bf;
    }
}
