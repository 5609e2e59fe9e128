use std::fmt::{self, Debug};

use log::debug;

use crate::error::AvlError;
use crate::util::{find, find_breadth_first};

use super::types::AvlNode;
use super::util;

/// Read-only view of one tree node.
///
/// Exposes the node's key and its arena index. The index identifies the
/// node for as long as the tree is not mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeRef<'a, K> {
    index: u32,
    key: &'a K,
}

impl<'a, K> NodeRef<'a, K> {
    pub fn key(&self) -> &'a K {
        self.key
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Height-balanced binary search tree of unique keys.
///
/// Nodes live in an arena owned by the tree; links are `Option<u32>`
/// indices. Deleting a node moves the last arena node into its slot, so
/// the arena never holds dead entries.
pub struct AvlTree<K> {
    arena: Vec<AvlNode<K>>,
    root: Option<u32>,
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|i| self.node_ref(i))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn node_ref(&self, index: u32) -> NodeRef<'_, K> {
        NodeRef {
            index,
            key: &self.arena[index as usize].k,
        }
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> AvlTree<K> {
    /// Adds `key`, rebalancing every ancestor of the new leaf.
    pub fn insert(&mut self, key: K) -> Result<(), AvlError> {
        match util::insert(&mut self.arena, self.root, key, &AvlNode::new) {
            Ok(root) => {
                self.root = Some(root);
                Ok(())
            }
            Err(err) => {
                debug!("insert rejected: {err}");
                Err(err)
            }
        }
    }

    /// Removes `key` and returns it.
    ///
    /// An inner node is replaced by its in-order successor when it has a
    /// right subtree and by its in-order predecessor otherwise.
    pub fn delete(&mut self, key: &K) -> Result<K, AvlError> {
        let (root, removed) = util::remove(&mut self.arena, self.root, key).inspect_err(|err| {
            debug!("delete rejected: {err}");
        })?;
        self.root = root;
        let node = util::swap_remove(&mut self.arena, &mut self.root, removed);
        Ok(node.into_key())
    }

    pub fn find(&self, key: &K) -> Result<NodeRef<'_, K>, AvlError> {
        find(&self.arena, self.root, key)
            .map(|i| self.node_ref(i))
            .ok_or(AvlError::NotFound)
    }

    /// Same result as [`find`](Self::find), found by a level-order scan
    /// instead of an ordered descent.
    pub fn find_breadth_first(&self, key: &K) -> Result<NodeRef<'_, K>, AvlError> {
        find_breadth_first(&self.arena, self.root, key)
            .map(|i| self.node_ref(i))
            .ok_or(AvlError::NotFound)
    }

    pub fn contains(&self, key: &K) -> bool {
        find(&self.arena, self.root, key).is_some()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl_tree(&self.arena, self.root)
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.arena.len());
        crate::util::for_each_in_order(&self.arena, self.root, |i| {
            out.push(&self.arena[i as usize].k)
        });
        out
    }
}

impl<K: Debug> AvlTree<K> {
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}

impl<K: Debug> Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}
