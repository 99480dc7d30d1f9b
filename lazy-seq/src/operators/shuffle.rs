//! Shuffling: emit a sequence in a uniformly random order.

use std::cell::OnceCell;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::indexed::Indexed;
use crate::sequence::{each_items, Sequence, Step};

/// The parent's elements in a uniformly random permutation.
///
/// The permutation is a Fisher–Yates shuffle of a materialized copy, drawn
/// once on first iteration; repeated terminals on the same node observe the
/// same order. A seed fixes the permutation for reproducibility.
pub struct Shuffled<S: Sequence> {
    parent: S,
    seed: Option<u64>,
    cache: OnceCell<Vec<S::Item>>,
}

impl<S: Sequence> Shuffled<S> {
    pub(crate) fn new(parent: S, seed: Option<u64>) -> Self {
        Shuffled { parent, seed, cache: OnceCell::new() }
    }
}

impl<S> Shuffled<S>
where
    S: Sequence,
    S::Item: Clone,
{
    fn shuffled(&self) -> &[S::Item] {
        self.cache.get_or_init(|| {
            let mut items = self.parent.to_vec();
            debug!("shuffling {} materialized elements", items.len());
            match self.seed {
                Some(seed) => items.shuffle(&mut StdRng::seed_from_u64(seed)),
                None => items.shuffle(&mut rand::thread_rng()),
            }
            items
        })
    }
}

impl<S> Sequence for Shuffled<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        each_items(self.shuffled(), &mut visitor)
    }
}

impl<S> Indexed for Shuffled<S>
where
    S: Sequence,
    S::Item: Clone,
{
    fn length(&self) -> usize {
        self.shuffled().len()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        self.shuffled().get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::{lazy, Sequence};

    #[test]
    fn shuffle_permutes_without_loss() {
        let mut shuffled = lazy(vec![1, 2, 3, 4, 5, 6, 7, 8]).shuffle().to_vec();
        shuffled.sort_unstable();
        assert_eq!(shuffled, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn shuffle_order_is_stable_across_iterations_of_one_node() {
        let shuffled = lazy((0..100).collect::<Vec<_>>()).shuffle();
        assert_eq!(shuffled.to_vec(), shuffled.to_vec());
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let once = lazy((0..32).collect::<Vec<_>>()).shuffle_with(7).to_vec();
        let again = lazy((0..32).collect::<Vec<_>>()).shuffle_with(7).to_vec();
        assert_eq!(once, again);
    }
}
