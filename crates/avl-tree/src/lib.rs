//! Height-balanced (AVL) binary search tree over an index arena.
//!
//! Keys are unique and ordered by their own [`Ord`] implementation. Every
//! insert and delete recomputes cached subtree heights on the way back to
//! the root and rotates any node whose children differ in height by two.
//!
//! Nodes live in a `Vec` owned by the tree; child "pointers" are
//! `Option<u32>` indices into it, and each index is held by exactly one
//! child slot or by the tree as its root.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyNode`] link traits |
//! [`avl`] | [`AvlTree`], [`AvlNode`], rotations, insert/remove, validator |
//! [`util`] | `first`, `last`, ordered and breadth-first search |
//! [`print`] | indented tree dumps |
//! [`error`] | [`AvlError`] |
//!
//! ```
//! use avl_tree::{AvlError, AvlTree};
//!
//! let mut tree = AvlTree::new();
//! for k in [10, 25, 50, 100, 40, 5] {
//!     tree.insert(k).unwrap();
//! }
//! assert_eq!(tree.insert(40), Err(AvlError::DuplicateKey));
//! assert_eq!(tree.delete(&25), Ok(25));
//! assert_eq!(tree.find(&25).unwrap_err(), AvlError::NotFound);
//! assert_eq!(*tree.find(&50).unwrap().key(), 50);
//! ```

pub mod avl;
pub mod error;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlTree, NodeRef};
pub use error::AvlError;
pub use types::{KeyNode, Node};
