//! Arena traversal helpers shared by the tree implementations.
//!
//! Nodes carry no parent links, so in-order walks keep an explicit stack of
//! pending ancestors.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::types::{KeyNode, Node};

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + size(arena, get_l(arena, i)) + size(arena, get_r(arena, i)),
    }
}

/// Visits every node under `root` in key order.
pub(crate) fn for_each_in_order<N: Node, G: FnMut(u32)>(arena: &[N], root: Option<u32>, mut f: G) {
    let mut stack: Vec<u32> = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = get_l(arena, i);
        }
        let Some(i) = stack.pop() else {
            return;
        };
        f(i);
        curr = get_r(arena, i);
    }
}

/// Ordered descent from `root`, one comparison per level.
pub fn find<K: Ord, N: KeyNode<K>>(arena: &[N], root: Option<u32>, key: &K) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(arena[i as usize].key()) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Level-order search from `root`, visiting every node at most once and
/// returning the first one whose key equals `key`.
pub fn find_breadth_first<K: Eq, N: KeyNode<K>>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
) -> Option<u32> {
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    while let Some(i) = queue.pop_front() {
        let node = &arena[i as usize];
        if node.key() == key {
            return Some(i);
        }
        queue.extend(node.l());
        queue.extend(node.r());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::AvlNode;

    // Arena indices:
    //      1
    //    /   \
    //   0     2
    //        /
    //       3
    fn sample() -> (Vec<AvlNode<i32>>, Option<u32>) {
        let mut arena: Vec<AvlNode<i32>> = [10, 20, 30, 25].into_iter().map(AvlNode::new).collect();
        arena[1].l = Some(0);
        arena[1].r = Some(2);
        arena[2].l = Some(3);
        (arena, Some(1))
    }

    #[test]
    fn first_and_last_follow_outer_edges() {
        let (arena, root) = sample();
        assert_eq!(first(&arena, root), Some(0));
        assert_eq!(last(&arena, root), Some(2));
        assert_eq!(first::<AvlNode<i32>>(&arena, None), None);
    }

    #[test]
    fn in_order_walk_yields_sorted_keys() {
        let (arena, root) = sample();
        let mut keys = Vec::new();
        for_each_in_order(&arena, root, |i| keys.push(arena[i as usize].k));
        assert_eq!(keys, vec![10, 20, 25, 30]);
        assert_eq!(size(&arena, root), 4);
    }

    #[test]
    fn both_searches_agree() {
        let (arena, root) = sample();
        for (idx, node) in arena.iter().enumerate() {
            assert_eq!(find(&arena, root, &node.k), Some(idx as u32));
            assert_eq!(find_breadth_first(&arena, root, &node.k), Some(idx as u32));
        }
        assert_eq!(find(&arena, root, &21), None);
        assert_eq!(find_breadth_first(&arena, root, &21), None);
    }
}
