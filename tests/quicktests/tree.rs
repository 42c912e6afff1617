use searchtree::{Shift, Tree, TreeError};

use std::collections::BTreeSet;
use std::fmt;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set. This way we can ensure that after a random
/// smattering of inserts, deletes and shifts we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], mut tree: Tree<T>, set: &mut BTreeSet<T>) -> Tree<T>
where
    T: Ord + Clone + fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                tree.remove(x);
                set.remove(x);
            }
            Op::RightShift(x) => check_shift(&mut tree, set, x, Shift::Right),
            Op::LeftShift(x) => check_shift(&mut tree, set, x, Shift::Left),
        }
    }

    tree
}

/// Shifts must either succeed or fail with the error matching the tree's state, and failing
/// must leave the tree untouched.
fn check_shift<T>(tree: &mut Tree<T>, set: &BTreeSet<T>, x: &T, shift: Shift)
where
    T: Ord + Clone + fmt::Debug,
{
    let before = tree.copy();
    match tree.shift(x, shift) {
        Ok(()) => assert!(set.contains(x)),
        Err(TreeError::NotFound) => {
            assert!(!set.contains(x));
            assert_eq!(*tree, before);
        }
        Err(TreeError::RotationImpossible { shift: failed }) => {
            assert_eq!(failed, shift);
            assert_eq!(*tree, before);
        }
        Err(e) => panic!("unexpected error {e}"),
    }
}

fn is_strictly_ascending<T: Ord>(tree: &Tree<T>) -> bool {
    let xs = tree.in_order();
    xs.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    is_strictly_ascending(&tree) && tree.iter().eq(set.iter()) && tree.count() == set.len()
}

#[quickcheck]
fn sorted_after_inserts(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    is_strictly_ascending(&tree)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && is_strictly_ascending(&tree)
}

#[quickcheck]
fn duplicate_inserts_are_ignored(xs: Vec<i8>) -> bool {
    let once: Tree<_> = xs.iter().copied().collect();
    let twice: Tree<_> = xs.iter().chain(xs.iter()).copied().collect();

    once.count() == twice.count() && once.in_order() == twice.in_order() && once == twice
}

#[quickcheck]
fn count_and_height_agree(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let count = tree.count() as isize;
    let height = tree.height();

    // A tree with `n` nodes is at most `n - 1` edges tall and holds at most `2^(height + 1) - 1`
    // nodes. Both bounds hold for the empty tree too.
    height < count && (count as f64) < 2f64.powi(height as i32 + 1)
}

#[test]
fn scenario_from_sorted_insertions() {
    let tree: Tree<_> = [4, 2, 7, 1, 3, 6, 9].into_iter().collect();

    assert_eq!(tree.in_order(), [&1, &2, &3, &4, &6, &7, &9]);
    assert_eq!(tree.find_min(), Ok(&1));
    assert_eq!(tree.find_max(), Ok(&9));
    assert_eq!(tree.count(), 7);
}

#[test]
fn scenario_empty_tree() {
    let tree = Tree::<i32>::new();

    assert!(tree.is_empty());
    assert_eq!(tree.count(), 0);
    assert!(tree.is_full());
    assert_eq!(tree.find_min(), Err(TreeError::Underflow));
    assert_eq!(tree.find_min().unwrap_err().to_string(), "tree is empty");
}

#[test]
fn scenario_remove_root() {
    let mut tree: Tree<_> = [4, 2, 7, 1, 3, 6, 9].into_iter().collect();
    tree.remove(&4);

    assert_eq!(tree.levels()[0], [&6]);
    assert_eq!(tree.count(), 6);
    assert!(is_strictly_ascending(&tree));
}

#[test]
fn make_empty_then_reuse() {
    let mut tree: Tree<_> = [4, 2, 7].into_iter().collect();
    tree.make_empty();
    assert!(tree.is_empty());

    tree.insert(1);
    assert_eq!(tree.in_order(), [&1]);
}
