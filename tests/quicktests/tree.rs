use bstree::{BSTree, TreeError};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BSTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                let _ = bst.remove(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BSTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: BSTree<_> = xs.into_iter().collect();

    tree.to_vec().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn duplicate_insert_is_a_no_op(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: BSTree<_> = xs.into_iter().collect();
    tree.insert(x);
    let (len, height, elements) = (tree.len(), tree.height(), tree.to_vec());

    !tree.insert(x) && tree.len() == len && tree.height() == height && tree.to_vec() == elements
}

#[quickcheck]
fn len_counts_successful_changes(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = BSTree::new();
    let inserted = xs.into_iter().filter(|x| tree.insert(*x)).count();
    let removed = removes
        .iter()
        .filter(|x| tree.remove(x).is_ok())
        .count();

    tree.len() == inserted - removed
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BSTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn remove_missing_leaves_tree_alone(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: BSTree<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let before = tree.to_vec();
    let height = tree.height();

    tree.remove(&missing) == Err(TreeError::ElementNotFound)
        && tree.to_vec() == before
        && tree.height() == height
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BSTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let len = tree.len();
        match tree.remove(delete) {
            Ok(removed) if removed == *delete && tree.len() == len - 1 => {}
            Err(TreeError::ElementNotFound) if tree.len() == len => {}
            _ => return false,
        }
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

    deletes.iter().all(|x| !tree.contains(x)) && still_present.into_iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn pre_order_rebuilds_the_same_shape(xs: Vec<i8>) -> bool {
    let tree: BSTree<_> = xs.into_iter().collect();
    let rebuilt: BSTree<_> = tree.pre_order_iter().copied().collect();

    rebuilt.pre_order_iter().eq(tree.pre_order_iter()) && rebuilt.height() == tree.height()
}

#[test]
fn sorted_input_degenerates_into_a_chain() {
    for k in 1..50 {
        let tree: BSTree<_> = (0..k).collect();
        assert_eq!(tree.height(), k as isize - 1);
    }
}
