//! AVL tree: insertion and removal with incremental balance-factor upkeep.
//!
//! Every node stores `bf = height(right) - height(left)`. Insert and remove
//! walk upward from the mutation point adjusting balances, rotating when a
//! node reaches ±2, and stop as soon as a subtree's height is unchanged.

pub mod insert;
pub mod remove;
pub mod rotate;
pub mod set;
pub mod tree;
pub mod types;
pub mod validate;

pub use insert::{insert, insert_fix, Inserted};
pub use remove::{remove, remove_fix, swap_nodes};
pub use rotate::{rotate, rotate_left, rotate_right};
pub use set::AvlSet;
pub use tree::{AvlTree, Iter};
pub use types::{AvlNode, AvlNodeLike};
pub use validate::assert_avl_tree;
