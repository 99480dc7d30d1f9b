//! Deduplication: keep the first occurrence of each distinct element.
//!
//! The generic [`Unique`] node works over any parent and any `PartialEq`
//! element by scanning the list of elements already emitted. For in-memory
//! array sources there is a specialized [`UniqueArray`] node whose strategy
//! is chosen once, at construction, from the source's size at that moment:
//! small sources are deduplicated with no allocation at all by re-scanning
//! the source prefix, mid-sized sources track emitted values in a dense
//! list, and large sources graduate to a hash set. All three strategies
//! produce identical output.

use std::hash::Hash;

use fnv::FnvHashSet;
use log::trace;

use crate::sequence::{Sequence, Step};
use crate::sources::array::ArraySequence;

/// Source sizes below this deduplicate by re-scanning the emitted prefix.
const DENSE_THRESHOLD: usize = 40;
/// Source sizes below this track emitted values in a dense list.
const HASHED_THRESHOLD: usize = 800;

/// The first occurrence of each distinct element of the parent.
pub struct Unique<S> {
    parent: S,
}

impl<S> Unique<S> {
    pub(crate) fn new(parent: S) -> Self {
        Unique { parent }
    }
}

impl<S> Sequence for Unique<S>
where
    S: Sequence,
    S::Item: Clone + PartialEq,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        let mut seen: Vec<S::Item> = Vec::new();
        let mut emitted = 0;
        self.parent.each(|item, _| {
            if seen.contains(&item) {
                Step::Continue
            } else {
                seen.push(item.clone());
                let step = visitor(item, emitted);
                emitted += 1;
                step
            }
        })
    }
}

/// How a [`UniqueArray`] checks whether an element was already emitted.
enum UniqStrategy {
    /// Re-scan the source prefix before the current position.
    ScanBack,
    /// Track emitted values in a dense list.
    DenseList,
    /// Track emitted values in a hash set.
    HashSet,
}

/// Deduplication specialized to an in-memory array source.
pub struct UniqueArray<T> {
    parent: ArraySequence<T>,
    strategy: UniqStrategy,
}

impl<T> UniqueArray<T>
where
    T: Clone + Eq + Hash + 'static,
{
    pub(crate) fn new(parent: ArraySequence<T>) -> Self {
        let size = parent.items().len();
        let strategy = if size < DENSE_THRESHOLD {
            trace!("uniq over {size} elements: scanning the source prefix");
            UniqStrategy::ScanBack
        } else if size < HASHED_THRESHOLD {
            trace!("uniq over {size} elements: dense list of emitted values");
            UniqStrategy::DenseList
        } else {
            trace!("uniq over {size} elements: hash set of emitted values");
            UniqStrategy::HashSet
        };
        UniqueArray { parent, strategy }
    }
}

impl<T> Sequence for UniqueArray<T>
where
    T: Clone + Eq + Hash + 'static,
{
    type Item = T;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(T, usize) -> Step,
    {
        let items = self.parent.items();
        let mut emitted = 0;
        match self.strategy {
            UniqStrategy::ScanBack => {
                for (index, item) in items.iter().enumerate() {
                    if items[..index].contains(item) {
                        continue;
                    }
                    if visitor(item.clone(), emitted).is_stop() {
                        return Step::Stop;
                    }
                    emitted += 1;
                }
            }
            UniqStrategy::DenseList => {
                let mut seen: Vec<&T> = Vec::new();
                for item in items {
                    if seen.contains(&item) {
                        continue;
                    }
                    seen.push(item);
                    if visitor(item.clone(), emitted).is_stop() {
                        return Step::Stop;
                    }
                    emitted += 1;
                }
            }
            UniqStrategy::HashSet => {
                let mut seen: FnvHashSet<&T> = FnvHashSet::default();
                for item in items {
                    if !seen.insert(item) {
                        continue;
                    }
                    if visitor(item.clone(), emitted).is_stop() {
                        return Step::Stop;
                    }
                    emitted += 1;
                }
            }
        }
        Step::Continue
    }
}

#[cfg(test)]
mod tests {
    use crate::{lazy, ArraySequence, Sequence};

    #[test]
    fn uniq_keeps_first_occurrences_in_order() {
        assert_eq!(lazy(vec![1, 2, 2, 3, 3, 3]).uniq().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn generic_uniq_works_over_derived_sequences() {
        let distinct = lazy(vec![1, 2, 3, 4, 5, 6]).map(|x, _| x / 2).uniq().to_vec();
        assert_eq!(distinct, vec![0, 1, 2, 3]);
    }

    // Exercise every strategy tier; output must be identical across them.

    fn repetitive(len: usize) -> Vec<usize> {
        (0..len).map(|i| i % 7).collect()
    }

    #[test]
    fn scan_back_tier_below_forty() {
        let distinct = ArraySequence::new(repetitive(39)).uniq().to_vec();
        assert_eq!(distinct, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn dense_list_tier_below_eight_hundred() {
        let distinct = ArraySequence::new(repetitive(799)).uniq().to_vec();
        assert_eq!(distinct, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn hash_set_tier_at_eight_hundred_and_beyond() {
        let distinct = ArraySequence::new(repetitive(800)).uniq().to_vec();
        assert_eq!(distinct, vec![0, 1, 2, 3, 4, 5, 6]);
    }
}
