use avl_tree::{AvlError, AvlTree};

const SAMPLE: [i32; 12] = [10, 25, 50, 100, 40, 5, 15, 1, 30, 45, 60, 120];

fn sample_tree() -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for k in SAMPLE {
        tree.insert(k).unwrap();
        tree.assert_valid().unwrap();
    }
    tree
}

#[test]
fn sample_insert_matrix() {
    let tree = sample_tree();
    assert_eq!(tree.len(), SAMPLE.len());
    // ceil(1.44 * log2(12)) rounds to 6; a 12-node AVL tree is at most 4 high.
    assert!(tree.height() <= 4, "height {}", tree.height());

    let mut sorted = SAMPLE;
    sorted.sort();
    for k in sorted {
        assert_eq!(*tree.find(&k).unwrap().key(), k);
    }
    for missing in [0, 2, 26, 59, 121] {
        assert_eq!(tree.find(&missing).unwrap_err(), AvlError::NotFound);
    }
}

#[test]
fn sample_delete_then_find_matrix() {
    let mut tree = sample_tree();
    assert_eq!(tree.delete(&25), Ok(25));
    tree.assert_valid().unwrap();
    assert_eq!(tree.find(&25).unwrap_err(), AvlError::NotFound);
    assert_eq!(tree.len(), SAMPLE.len() - 1);

    let found = tree.find(&60).unwrap();
    assert_eq!(*found.key(), 60);
    assert_eq!(tree.find_breadth_first(&60).unwrap(), found);
}

#[test]
fn duplicate_insert_matrix() {
    let mut tree = sample_tree();
    let before = format!("{tree:?}");
    for k in SAMPLE {
        assert_eq!(tree.insert(k), Err(AvlError::DuplicateKey));
    }
    assert_eq!(format!("{tree:?}"), before);
    assert_eq!(tree.len(), SAMPLE.len());
}

#[test]
fn delete_missing_matrix() {
    let mut empty = AvlTree::<i32>::new();
    assert_eq!(empty.delete(&1), Err(AvlError::NotFound));
    assert_eq!(empty.find(&1).unwrap_err(), AvlError::NotFound);
    assert!(empty.root().is_none());

    let mut tree = sample_tree();
    let before = format!("{tree:?}");
    assert_eq!(tree.delete(&26), Err(AvlError::NotFound));
    assert_eq!(format!("{tree:?}"), before);
}

#[test]
fn monotonic_insert_matrix() {
    let mut tree = AvlTree::new();
    for k in 0..6 {
        tree.insert(k).unwrap();
        tree.assert_valid().unwrap();
    }
    assert!(tree.height() <= 3);

    let mut tree = AvlTree::new();
    for k in (0..1000).rev() {
        tree.insert(k).unwrap();
    }
    tree.assert_valid().unwrap();
    // 1000 nodes: perfect height is 9, AVL stays below 1.44 * log2(1001).
    assert!(tree.height() <= 14, "height {}", tree.height());
}

#[test]
fn round_trip_matrix() {
    let mut tree = AvlTree::new();
    for k in ["m", "c", "x", "a", "e"] {
        tree.insert(k.to_string()).unwrap();
        assert_eq!(tree.find(&k.to_string()).unwrap().key(), k);
    }
    assert_eq!(tree.delete(&"c".to_string()), Ok("c".to_string()));
    assert_eq!(
        tree.find(&"c".to_string()).unwrap_err(),
        AvlError::NotFound
    );
    tree.assert_valid().unwrap();
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i).unwrap();
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);

    for i in (0..300).step_by(3) {
        assert_eq!(tree.delete(&i), Ok(i));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }
    assert_eq!(tree.len(), 200);
}

#[test]
fn error_display_matrix() {
    assert_eq!(AvlError::DuplicateKey.to_string(), "key already exists in tree");
    assert_eq!(AvlError::NotFound.to_string(), "key not found in tree");
}
