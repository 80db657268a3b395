use thiserror::Error;

/// Lookup of a key that must be present failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("key not found")]
pub struct KeyError;

/// A broken structural or balance invariant, reported by
/// [`assert_avl_tree`](crate::avl::assert_avl_tree).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node {node} has a parent")]
    RootHasParent { node: u32 },
    #[error("child {child} of node {node} does not link back to it")]
    BrokenParentLink { node: u32, child: u32 },
    #[error("balance factor mismatch at node {node}: expected {expected}, got {actual}")]
    BalanceMismatch { node: u32, expected: i64, actual: i8 },
    #[error("node {node} is out of balance: {balance}")]
    Unbalanced { node: u32, balance: i8 },
    #[error("node {node} breaks key order")]
    OrderViolated { node: u32 },
}
