use quickcheck::{Arbitrary, Gen};

mod lists;
mod tree;

/// Things to do to both lists in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T after the tail
    Append(T),
    /// Remove the tail
    Pop,
    /// Remove the head
    PopFront,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Append(T::arbitrary(g)),
            1 => Op::Pop,
            2 => Op::PopFront,
            _ => unreachable!(),
        }
    }
}
