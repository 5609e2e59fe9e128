//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena owned by the tree. Each child
//! "pointer" is an `Option<u32>` index into that arena, and every index is
//! held by at most one child slot (or by the tree as its root). All
//! tree-manipulation functions take the arena and work with indices.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Node carrying an ordered key.
///
/// Keys are never rewritten in place: nodes move between child slots
/// instead, so a node keeps its key for its whole lifetime.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}
