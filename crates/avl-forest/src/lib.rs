//! Arena-based AVL tree.
//!
//! Nodes live in an [`Arena`] and link to each other through `Option<u32>`
//! ids: `l`/`r` for children, `p` for the parent back-reference. Each node
//! carries a balance factor that is kept up to date incrementally on every
//! insert and remove.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KvNode`] traits, [`Side`] |
//! [`arena`] | Slot arena with free list |
//! [`util`] | Balance-agnostic BST helpers: `find`, `next`, `prev`, `swap`, … |
//! [`avl`] | Rotations, insert/remove fix-ups, [`AvlTree`], [`AvlSet`] |
//! [`error`] | [`KeyError`], [`InvariantError`] |
//!
//! # Example
//!
//! ```
//! use avl_forest::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for k in [10, 20, 30] {
//!     tree.insert(k, k.to_string());
//! }
//! let root = tree.root().unwrap();
//! assert_eq!(tree.key(root), &20);
//! assert_eq!(tree.remove(&20), Some("20".to_string()));
//! assert!(tree.assert_valid().is_ok());
//! ```

pub mod arena;
pub mod avl;
pub mod error;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use avl::{AvlNode, AvlNodeLike, AvlSet, AvlTree, Inserted};
pub use error::{InvariantError, KeyError};
pub use types::{KvNode, Node, Side};
