//! `avl-demo` — build a tree, delete one key, look another one up.
//!
//! Usage:
//!   avl-demo [KEY ...]
//!
//! Without arguments the keys `10 25 50 100 40 5 15 1 30 45 60 120` are
//! inserted. Then `25` is deleted, `60` is looked up and the tree is dumped.
//! Set `RUST_LOG=trace` to watch the rotations.

use avl_tree::AvlTree;

const DEFAULT_KEYS: [i64; 12] = [10, 25, 50, 100, 40, 5, 15, 1, 30, 45, 60, 120];

fn main() {
    env_logger::init();

    let keys: Vec<i64> = match std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<i64>().map_err(|e| format!("invalid key {arg:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(keys) if keys.is_empty() => DEFAULT_KEYS.to_vec(),
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut tree = AvlTree::new();
    for key in keys {
        if let Err(e) = tree.insert(key) {
            log::warn!("skipping {key}: {e}");
        }
    }

    match tree.delete(&25) {
        Ok(key) => println!("Node with value={key} has been deleted."),
        Err(e) => println!("Could not delete 25: {e}"),
    }

    match tree.find(&60) {
        Ok(node) => println!("Node with value={} has been found.", node.key()),
        Err(e) => println!("Could not find 60: {e}"),
    }

    println!("{tree:?}");
}
