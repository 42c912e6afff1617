//! Property tests exercising the public API against a `BTreeSet` model.

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the element into the tree
    Insert(T),
    /// Remove the element from the tree
    Remove(T),
    /// Rotate right around the element, if possible
    RightShift(T),
    /// Rotate left around the element, if possible
    LeftShift(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::RightShift(T::arbitrary(g)),
            3 => Op::LeftShift(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
