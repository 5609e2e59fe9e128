//! Arena-level AVL algorithms.
//!
//! Every structural edit takes the index of a subtree root and returns the
//! index of the (possibly different) root of the same subtree after the
//! edit, so callers reattach the result to whatever slot held the old root.
//! Heights are fixed and rotations applied on the way back up.

use std::cmp::Ordering;
use std::fmt::Debug;

use log::trace;

use crate::error::AvlError;
use crate::print::{print_tree, PrintChild};
use crate::util::{for_each_in_order, get_l, get_r, set_l, set_r};

use super::types::AvlNodeLike;

/// Height of the subtree at `node`. An absent subtree has height `-1`, so a
/// leaf is `0` and every other case follows from `1 + max(l, r)`.
#[inline]
pub fn height<K, N>(arena: &[N], node: Option<u32>) -> i32
where
    N: AvlNodeLike<K>,
{
    match node {
        Some(i) => arena[i as usize].height(),
        None => -1,
    }
}

/// `height(left) - height(right)`.
#[inline]
pub fn balance_factor<K, N>(arena: &[N], node: u32) -> i32
where
    N: AvlNodeLike<K>,
{
    height(arena, get_l(arena, node)) - height(arena, get_r(arena, node))
}

/// Recomputes the cached height of `node` from its children.
#[inline]
pub fn update_height<K, N>(arena: &mut [N], node: u32)
where
    N: AvlNodeLike<K>,
{
    let h = 1 + height(arena, get_l(arena, node)).max(height(arena, get_r(arena, node)));
    arena[node as usize].set_height(h);
}

/// Single right rotation of left-heavy `n` around its left child `nl`.
///
/// ```text
///       n          nl
///      / \        /  \
///     nl  c  ->  a    n
///    /  \            / \
///   a   nlr        nlr  c
/// ```
fn ll_rotate<K, N>(arena: &mut [N], n: u32, nl: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    trace!("ll rotation: node {n} under {nl}");
    let nlr = get_r(arena, nl);
    set_l(arena, n, nlr);
    set_r(arena, nl, Some(n));
    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Single left rotation of right-heavy `n` around its right child `nr`.
fn rr_rotate<K, N>(arena: &mut [N], n: u32, nr: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    trace!("rr rotation: node {n} under {nr}");
    let nrl = get_l(arena, nr);
    set_r(arena, n, nrl);
    set_l(arena, nr, Some(n));
    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// `nlr` becomes the subtree root, with `nl` and `n` as its children.
fn lr_rotate<K, N>(arena: &mut [N], n: u32, nl: u32, nlr: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let nl = rr_rotate(arena, nl, nlr);
    set_l(arena, n, Some(nl));
    ll_rotate(arena, n, nl)
}

fn rl_rotate<K, N>(arena: &mut [N], n: u32, nr: u32, nrl: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let nr = ll_rotate(arena, nr, nrl);
    set_r(arena, n, Some(nr));
    rr_rotate(arena, n, nr)
}

/// Restores the AVL invariant at `n`, whose children are already valid AVL
/// trees with correct cached heights and whose balance factor is within
/// `-2..=2`. Returns the root of the rebalanced subtree.
pub fn rebalance<K, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    match balance_factor(arena, n) {
        2 => {
            let Some(nl) = get_l(arena, n) else {
                return n;
            };
            match get_r(arena, nl) {
                Some(nlr) if balance_factor(arena, nl) < 0 => lr_rotate(arena, n, nl, nlr),
                _ => ll_rotate(arena, n, nl),
            }
        }
        -2 => {
            let Some(nr) = get_r(arena, n) else {
                return n;
            };
            match get_l(arena, nr) {
                Some(nrl) if balance_factor(arena, nr) > 0 => rl_rotate(arena, n, nr, nrl),
                _ => rr_rotate(arena, n, nr),
            }
        }
        _ => n,
    }
}

/// Inserts `key` into the subtree at `root`, allocating its node with
/// `new_node` at the end of the arena.
///
/// Returns the new subtree root. The arena is only touched once the empty
/// slot for `key` has been reached, so [`AvlError::DuplicateKey`] leaves
/// everything as it was.
pub fn insert<K, N, F>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    key: K,
    new_node: &F,
) -> Result<u32, AvlError>
where
    K: Ord,
    N: AvlNodeLike<K>,
    F: Fn(K) -> N,
{
    let Some(n) = root else {
        arena.push(new_node(key));
        return Ok((arena.len() - 1) as u32);
    };

    match key.cmp(arena[n as usize].key()) {
        Ordering::Equal => return Err(AvlError::DuplicateKey),
        Ordering::Less => {
            let l = get_l(arena, n);
            let l = insert(arena, l, key, new_node)?;
            set_l(arena, n, Some(l));
        }
        Ordering::Greater => {
            let r = get_r(arena, n);
            let r = insert(arena, r, key, new_node)?;
            set_r(arena, n, Some(r));
        }
    }

    update_height(arena, n);
    Ok(rebalance(arena, n))
}

/// Unlinks the node holding `key` from the subtree at `root`.
///
/// Returns the new subtree root together with the index of the unlinked
/// node. The unlinked node keeps its arena slot (with both links cleared)
/// until the caller releases it. On [`AvlError::NotFound`] no link has been
/// changed.
pub fn remove<K, N>(
    arena: &mut [N],
    root: Option<u32>,
    key: &K,
) -> Result<(Option<u32>, u32), AvlError>
where
    K: Ord,
    N: AvlNodeLike<K>,
{
    let Some(n) = root else {
        return Err(AvlError::NotFound);
    };

    let removed = match key.cmp(arena[n as usize].key()) {
        Ordering::Equal => return Ok((resplice(arena, n), n)),
        Ordering::Less => {
            let l = get_l(arena, n);
            let (l, removed) = remove(arena, l, key)?;
            set_l(arena, n, l);
            removed
        }
        Ordering::Greater => {
            let r = get_r(arena, n);
            let (r, removed) = remove(arena, r, key)?;
            set_r(arena, n, r);
            removed
        }
    };

    update_height(arena, n);
    Ok((Some(rebalance(arena, n)), removed))
}

/// Detaches `n` from its children and returns the node that takes its
/// place.
///
/// With a right subtree the in-order successor is promoted; with only a
/// left subtree the in-order predecessor is promoted; a leaf leaves an
/// empty subtree behind.
pub fn resplice<K, N>(arena: &mut [N], n: u32) -> Option<u32>
where
    N: AvlNodeLike<K>,
{
    let l = get_l(arena, n);
    let r = get_r(arena, n);
    set_l(arena, n, None);
    set_r(arena, n, None);
    arena[n as usize].set_height(0);

    if let Some(r) = r {
        let (successor, rest) = detach_min(arena, r);
        trace!("resplice: node {n} replaced by successor {successor}");
        Some(graft(arena, successor, l, rest))
    } else if let Some(l) = l {
        let (predecessor, rest) = detach_max(arena, l);
        trace!("resplice: node {n} replaced by predecessor {predecessor}");
        Some(graft(arena, predecessor, rest, None))
    } else {
        trace!("resplice: leaf {n} removed");
        None
    }
}

/// Cuts the minimum node out of the subtree at `n`.
///
/// Returns the detached node (with no children) and the root of what
/// remains, rebalanced along the left spine.
pub fn detach_min<K, N>(arena: &mut [N], n: u32) -> (u32, Option<u32>)
where
    N: AvlNodeLike<K>,
{
    match get_l(arena, n) {
        None => {
            let r = get_r(arena, n);
            set_r(arena, n, None);
            arena[n as usize].set_height(0);
            (n, r)
        }
        Some(l) => {
            let (min, rest) = detach_min(arena, l);
            set_l(arena, n, rest);
            update_height(arena, n);
            (min, Some(rebalance(arena, n)))
        }
    }
}

/// Cuts the maximum node out of the subtree at `n`. Mirror of
/// [`detach_min`].
pub fn detach_max<K, N>(arena: &mut [N], n: u32) -> (u32, Option<u32>)
where
    N: AvlNodeLike<K>,
{
    match get_r(arena, n) {
        None => {
            let l = get_l(arena, n);
            set_l(arena, n, None);
            arena[n as usize].set_height(0);
            (n, l)
        }
        Some(r) => {
            let (max, rest) = detach_max(arena, r);
            set_r(arena, n, rest);
            update_height(arena, n);
            (max, Some(rebalance(arena, n)))
        }
    }
}

/// Hangs `l` and `r` under `n` and rebalances. Both subtrees must be valid
/// AVL trees whose heights differ by at most two.
pub fn graft<K, N>(arena: &mut [N], n: u32, l: Option<u32>, r: Option<u32>) -> u32
where
    N: AvlNodeLike<K>,
{
    set_l(arena, n, l);
    set_r(arena, n, r);
    update_height(arena, n);
    rebalance(arena, n)
}

/// Finds the node whose child slot holds `child`, by descending from
/// `root` along `child`'s key.
fn find_parent<K, N>(arena: &[N], root: Option<u32>, child: u32) -> Option<u32>
where
    K: Ord,
    N: AvlNodeLike<K>,
{
    let key = arena[child as usize].key();
    let mut curr = root?;
    loop {
        let next = match key.cmp(arena[curr as usize].key()) {
            Ordering::Less => get_l(arena, curr),
            Ordering::Greater => get_r(arena, curr),
            Ordering::Equal => return None,
        }?;
        if next == child {
            return Some(curr);
        }
        curr = next;
    }
}

/// Takes the already unlinked node at `idx` out of the arena.
///
/// The last arena node moves into the vacated slot and its one referrer,
/// either its parent's child link or `root`, is re-pointed at `idx`.
pub fn swap_remove<K, N>(arena: &mut Vec<N>, root: &mut Option<u32>, idx: u32) -> N
where
    K: Ord,
    N: AvlNodeLike<K>,
{
    let last = (arena.len() - 1) as u32;
    if idx != last {
        if *root == Some(last) {
            *root = Some(idx);
        } else if let Some(parent) = find_parent(arena, *root, last) {
            if get_l(arena, parent) == Some(last) {
                set_l(arena, parent, Some(idx));
            } else {
                set_r(arena, parent, Some(idx));
            }
        }
        trace!("arena: node {last} relocated to {idx}");
    }
    arena.swap_remove(idx as usize)
}

fn tree_height<K, N>(arena: &[N], node: Option<u32>) -> i32
where
    N: AvlNodeLike<K>,
{
    match node {
        None => -1,
        Some(i) => 1 + tree_height(arena, get_l(arena, i)).max(tree_height(arena, get_r(arena, i))),
    }
}

/// Checks ownership, cached heights, balance and key order of the tree at
/// `root`, which must own every node in `arena`.
pub fn assert_avl_tree<K, N>(arena: &[N], root: Option<u32>) -> Result<(), String>
where
    K: Ord,
    N: AvlNodeLike<K>,
{
    let mut seen = vec![false; arena.len()];
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        let Some(slot) = seen.get_mut(i as usize) else {
            return Err(format!("Link to node {i} points outside the arena"));
        };
        if *slot {
            return Err(format!("Node {i} is linked more than once"));
        }
        *slot = true;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    if let Some(orphan) = seen.iter().position(|s| !s) {
        return Err(format!("Node {orphan} is not reachable from the root"));
    }

    fn validate_heights<K, N>(arena: &[N], node: u32) -> Result<(), String>
    where
        N: AvlNodeLike<K>,
    {
        let l = get_l(arena, node);
        let r = get_r(arena, node);
        if let Some(l) = l {
            validate_heights(arena, l)?;
        }
        if let Some(r) = r {
            validate_heights(arena, r)?;
        }

        let expected = tree_height(arena, Some(node));
        let actual = arena[node as usize].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch at node {node}: expected {expected}, got {actual}"
            ));
        }
        let bf = tree_height(arena, l) - tree_height(arena, r);
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated at node {node}: bf={bf}"));
        }
        Ok(())
    }

    if let Some(root) = root {
        validate_heights(arena, root)?;
    }

    let mut prev: Option<u32> = None;
    let mut order = Ok(());
    for_each_in_order(arena, root, |i| {
        if let Some(p) = prev {
            if order.is_ok() && arena[p as usize].key() >= arena[i as usize].key() {
                order = Err(format!("Node order violated between nodes {p} and {i}"));
            }
        }
        prev = Some(i);
    });
    order
}

/// Debug printer for AVL trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike<K>,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i as usize];
    let (l, r) = (n.l(), n.r());
    let head = format!("Node[{i}] [h={}] {:?}", n.height(), n.key());
    if l.is_none() && r.is_none() {
        return head;
    }

    let left: &PrintChild = &|tab: &str| print::<K, N>(arena, l, tab);
    let right: &PrintChild = &|tab: &str| print::<K, N>(arena, r, tab);
    format!("{head}{}", print_tree(Some(tab), &[Some(left), Some(right)]))
}
