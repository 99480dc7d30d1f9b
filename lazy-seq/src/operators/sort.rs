//! Ordering: materialize a sequence and emit it sorted.

use std::cell::OnceCell;
use std::cmp::Ordering;

use log::debug;

use crate::indexed::Indexed;
use crate::sequence::{each_items, Sequence, Step};

/// The library's comparator: equal, else greater, else less.
///
/// Incomparable values (such as a NaN against anything) land in the final
/// `Less` arm; they order arbitrarily but deterministically for one sort.
#[inline]
pub(crate) fn natural_order<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    if left == right {
        Ordering::Equal
    } else if left > right {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// The identity key for sorts over the elements themselves.
pub(crate) fn natural_key<T: Clone>(item: &T) -> T {
    item.clone()
}

/// The parent's elements, totally ordered by a key function.
///
/// The parent is materialized and sorted on first iteration, and every read
/// thereafter serves the sorted buffer. The key is evaluated once per side
/// at each comparison. The underlying sort happens to be stable, but
/// stability is not part of the contract.
pub struct Sorted<S: Sequence, K> {
    parent: S,
    key: K,
    cache: OnceCell<Vec<S::Item>>,
}

impl<S: Sequence, K> Sorted<S, K> {
    pub(crate) fn new(parent: S, key: K) -> Self {
        Sorted { parent, key, cache: OnceCell::new() }
    }
}

impl<S, K, Key> Sorted<S, K>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> Key,
    Key: PartialOrd,
{
    fn ordered(&self) -> &[S::Item] {
        self.cache.get_or_init(|| {
            let mut items = self.parent.to_vec();
            debug!("materializing and sorting {} elements", items.len());
            items.sort_by(|left, right| natural_order(&(self.key)(left), &(self.key)(right)));
            items
        })
    }
}

impl<S, K, Key> Sequence for Sorted<S, K>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> Key,
    Key: PartialOrd,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        each_items(self.ordered(), &mut visitor)
    }
}

impl<S, K, Key> Indexed for Sorted<S, K>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> Key,
    Key: PartialOrd,
{
    fn length(&self) -> usize {
        self.ordered().len()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        self.ordered().get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lazy, Sequence};

    #[test]
    fn natural_order_matches_the_contract() {
        assert_eq!(natural_order(&1, &1), Ordering::Equal);
        assert_eq!(natural_order(&2, &1), Ordering::Greater);
        assert_eq!(natural_order(&1, &2), Ordering::Less);
    }

    #[test]
    fn sort_orders_naturally() {
        assert_eq!(lazy(vec![3, 1, 2]).sort().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn sort_by_orders_by_key() {
        let words = lazy(vec!["ccc", "a", "bb"]).sort_by(|w| w.len()).to_vec();
        assert_eq!(words, vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn sorted_output_is_non_decreasing() {
        let sorted = lazy(vec![5, 3, 9, 1, 3, 7]).sort().to_vec();
        for pair in sorted.windows(2) {
            assert!(natural_order(&pair[0], &pair[1]) != Ordering::Greater);
        }
    }
}
