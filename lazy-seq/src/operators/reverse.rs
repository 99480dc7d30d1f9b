//! Reversal: the parent's elements in the opposite order.

use std::cell::OnceCell;

use log::debug;

use crate::indexed::Indexed;
use crate::sequence::{each_items, Sequence, Step};

/// The parent's elements, last first.
///
/// When the parent is indexable, random access reads from the far end and
/// needs no buffering. Iteration materializes the parent once into a
/// reversed buffer and serves every `each` from it.
pub struct Reversed<S: Sequence> {
    parent: S,
    cache: OnceCell<Vec<S::Item>>,
}

impl<S: Sequence> Reversed<S> {
    pub(crate) fn new(parent: S) -> Self {
        Reversed { parent, cache: OnceCell::new() }
    }
}

impl<S> Reversed<S>
where
    S: Sequence,
    S::Item: Clone,
{
    fn backwards(&self) -> &[S::Item] {
        self.cache.get_or_init(|| {
            debug!("materializing reversed sequence");
            let mut items = self.parent.to_vec();
            items.reverse();
            items
        })
    }
}

impl<S> Sequence for Reversed<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        each_items(self.backwards(), &mut visitor)
    }
}

impl<S> Indexed for Reversed<S>
where
    S: Indexed,
    S::Item: Clone,
{
    fn length(&self) -> usize {
        self.parent.length()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        let length = self.parent.length();
        if index < length {
            self.parent.get(length - 1 - index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{lazy, Indexed, Sequence};

    #[test]
    fn reverse_reverses() {
        assert_eq!(lazy(vec![1, 2, 3]).reverse().to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn reverse_of_reverse_is_identity() {
        let twice = lazy(vec![1, 2, 3]).reverse().reverse().to_vec();
        assert_eq!(twice, vec![1, 2, 3]);
    }

    #[test]
    fn reversed_random_access_reads_from_the_far_end() {
        let reversed = lazy(vec![1, 2, 3]).reverse();
        assert_eq!(reversed.length(), 3);
        assert_eq!(reversed.get(0), Some(3));
        assert_eq!(reversed.get(2), Some(1));
        assert_eq!(reversed.get(3), None);
    }

    #[test]
    fn reverse_over_a_filtered_parent_materializes() {
        let reversed = lazy(vec![1, 2, 3, 4]).filter(|x, _| x % 2 == 0).reverse();
        assert_eq!(reversed.to_vec(), vec![4, 2]);
        // a second pass serves the cached buffer and agrees
        assert_eq!(reversed.to_vec(), vec![4, 2]);
    }
}
