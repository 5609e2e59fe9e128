//! AVL tree: node type, arena algorithms and the public tree engine.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::{AvlTree, NodeRef};
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, balance_factor, height, print};
