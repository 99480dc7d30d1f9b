//! Zipping: pair each element with the same-index elements of sidecar arrays.

use smallvec::SmallVec;

use crate::indexed::Indexed;
use crate::sequence::{Sequence, Step};

/// A row emitted by [`Zipped`]: the parent's element followed by one entry
/// per sidecar array that still has an element at that index.
pub type ZipRow<T> = SmallVec<[T; 4]>;

/// The parent's elements, each bundled with its positional companions.
///
/// Rows end when the parent ends. A sidecar shorter than the parent simply
/// contributes nothing to rows past its end, so rows can narrow.
pub struct Zipped<S: Sequence> {
    parent: S,
    others: Vec<Vec<S::Item>>,
}

impl<S: Sequence> Zipped<S> {
    pub(crate) fn new(parent: S, others: Vec<Vec<S::Item>>) -> Self {
        Zipped { parent, others }
    }

    fn row(&self, item: S::Item, index: usize) -> ZipRow<S::Item>
    where
        S::Item: Clone,
    {
        let mut row = ZipRow::new();
        row.push(item);
        for other in &self.others {
            if let Some(companion) = other.get(index) {
                row.push(companion.clone());
            }
        }
        row
    }
}

impl<S> Sequence for Zipped<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = ZipRow<S::Item>;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(Self::Item, usize) -> Step,
    {
        self.parent.each(|item, index| visitor(self.row(item, index), index))
    }
}

impl<S> Indexed for Zipped<S>
where
    S: Indexed,
    S::Item: Clone,
{
    fn length(&self) -> usize {
        self.parent.length()
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        self.parent.get(index).map(|item| self.row(item, index))
    }
}
