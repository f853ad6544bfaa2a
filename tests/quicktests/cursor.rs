use bstree::{BSTree, TreeError};

use quickcheck_macros::quickcheck;

/// Drains a cursor's worth of elements through the tree's `next`-style API.
macro_rules! drain {
    ($cursor:expr, $tree:expr) => {{
        let mut out = Vec::new();
        while $cursor.has_next() {
            out.push(*$cursor.next($tree).unwrap());
        }
        out
    }};
}

#[quickcheck]
fn cursors_agree_with_iterators(xs: Vec<i8>) -> bool {
    let tree: BSTree<_> = xs.into_iter().collect();

    let mut in_order = tree.in_order_cursor();
    let mut pre_order = tree.pre_order_cursor();

    drain!(in_order, &tree) == tree.iter().copied().collect::<Vec<_>>()
        && drain!(pre_order, &tree) == tree.pre_order_iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn any_change_invalidates(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: BSTree<_> = xs.into_iter().collect();
    let mut cursor = tree.in_order_cursor();

    let changed = if tree.contains(&x) {
        tree.remove(&x).is_ok()
    } else {
        tree.insert(x)
    };

    changed && cursor.next(&tree) == Err(TreeError::ConcurrentModification)
}

#[test]
fn pre_order_scenario() {
    let mut tree = BSTree::new();
    for x in [5, 3, 8, 1, 4] {
        tree.insert(x);
    }
    let mut cursor = tree.pre_order_cursor();

    assert_eq!(drain!(cursor, &tree), vec![5, 3, 1, 4, 8]);
    assert_eq!(cursor.next(&tree), Err(TreeError::Exhausted));
}

#[test]
fn cursor_remove_then_fresh_cursor() {
    let mut tree: BSTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    let mut cursor = tree.in_order_cursor();
    assert_eq!(cursor.remove(&mut tree), Err(TreeError::IllegalState));

    cursor.next(&tree).unwrap();
    assert_eq!(cursor.remove(&mut tree), Ok(5));

    let mut fresh = tree.in_order_cursor();
    assert_eq!(drain!(fresh, &tree), vec![1, 3, 4, 8]);
}
