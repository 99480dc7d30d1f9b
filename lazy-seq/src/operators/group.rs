//! Keyed aggregation: group, index, and count elements by a computed key.
//!
//! All three nodes materialize on first read. Keys are emitted in
//! first-occurrence order (for [`IndexedBy`], the value seen last for a key
//! wins, but the key keeps its original position). Lookup during
//! materialization goes through an `FnvHashMap` from key to slot.

use std::cell::OnceCell;
use std::hash::Hash;

use fnv::FnvHashMap;
use log::debug;

use crate::indexed::Indexed;
use crate::sequence::{each_items, Sequence, Step};

/// Each distinct key with the list of elements that mapped to it.
pub struct Grouped<S: Sequence, K, Key> {
    parent: S,
    key: K,
    cache: OnceCell<Vec<(Key, Vec<S::Item>)>>,
}

impl<S: Sequence, K, Key> Grouped<S, K, Key> {
    pub(crate) fn new(parent: S, key: K) -> Self {
        Grouped { parent, key, cache: OnceCell::new() }
    }
}

impl<S, K, Key> Grouped<S, K, Key>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> Key,
    Key: Eq + Hash + Clone,
{
    fn groups(&self) -> &[(Key, Vec<S::Item>)] {
        self.cache.get_or_init(|| {
            let mut slots: FnvHashMap<Key, usize> = FnvHashMap::default();
            let mut groups: Vec<(Key, Vec<S::Item>)> = Vec::new();
            self.parent.each(|item, _| {
                let key = (self.key)(&item);
                let slot = *slots.entry(key.clone()).or_insert_with(|| {
                    groups.push((key, Vec::new()));
                    groups.len() - 1
                });
                groups[slot].1.push(item);
                Step::Continue
            });
            debug!("grouped parent into {} keys", groups.len());
            groups
        })
    }
}

impl<S, K, Key> Sequence for Grouped<S, K, Key>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> Key,
    Key: Eq + Hash + Clone,
{
    type Item = (Key, Vec<S::Item>);

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(Self::Item, usize) -> Step,
    {
        each_items(self.groups(), &mut visitor)
    }
}

impl<S, K, Key> Indexed for Grouped<S, K, Key>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> Key,
    Key: Eq + Hash + Clone,
{
    fn length(&self) -> usize {
        self.groups().len()
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        self.groups().get(index).cloned()
    }
}

/// Each distinct key with the element that mapped to it, last one winning.
pub struct IndexedBy<S: Sequence, K, Key> {
    parent: S,
    key: K,
    cache: OnceCell<Vec<(Key, S::Item)>>,
}

impl<S: Sequence, K, Key> IndexedBy<S, K, Key> {
    pub(crate) fn new(parent: S, key: K) -> Self {
        IndexedBy { parent, key, cache: OnceCell::new() }
    }
}

impl<S, K, Key> IndexedBy<S, K, Key>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> Key,
    Key: Eq + Hash + Clone,
{
    fn entries(&self) -> &[(Key, S::Item)] {
        self.cache.get_or_init(|| {
            let mut slots: FnvHashMap<Key, usize> = FnvHashMap::default();
            let mut entries: Vec<(Key, S::Item)> = Vec::new();
            self.parent.each(|item, _| {
                let key = (self.key)(&item);
                match slots.entry(key.clone()) {
                    std::collections::hash_map::Entry::Occupied(slot) => {
                        entries[*slot.get()].1 = item;
                    }
                    std::collections::hash_map::Entry::Vacant(slot) => {
                        slot.insert(entries.len());
                        entries.push((key, item));
                    }
                }
                Step::Continue
            });
            entries
        })
    }
}

impl<S, K, Key> Sequence for IndexedBy<S, K, Key>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> Key,
    Key: Eq + Hash + Clone,
{
    type Item = (Key, S::Item);

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(Self::Item, usize) -> Step,
    {
        each_items(self.entries(), &mut visitor)
    }
}

/// Each distinct key with the number of elements that mapped to it.
pub struct Counted<S, K, Key> {
    parent: S,
    key: K,
    cache: OnceCell<Vec<(Key, usize)>>,
}

impl<S, K, Key> Counted<S, K, Key> {
    pub(crate) fn new(parent: S, key: K) -> Self {
        Counted { parent, key, cache: OnceCell::new() }
    }
}

impl<S, K, Key> Counted<S, K, Key>
where
    S: Sequence,
    K: Fn(&S::Item) -> Key,
    Key: Eq + Hash + Clone,
{
    fn counts(&self) -> &[(Key, usize)] {
        self.cache.get_or_init(|| {
            let mut slots: FnvHashMap<Key, usize> = FnvHashMap::default();
            let mut counts: Vec<(Key, usize)> = Vec::new();
            self.parent.each(|item, _| {
                let key = (self.key)(&item);
                let slot = *slots.entry(key.clone()).or_insert_with(|| {
                    counts.push((key, 0));
                    counts.len() - 1
                });
                counts[slot].1 += 1;
                Step::Continue
            });
            counts
        })
    }
}

impl<S, K, Key> Sequence for Counted<S, K, Key>
where
    S: Sequence,
    K: Fn(&S::Item) -> Key,
    Key: Eq + Hash + Clone,
{
    type Item = (Key, usize);

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(Self::Item, usize) -> Step,
    {
        each_items(self.counts(), &mut visitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::{lazy, Sequence};

    #[test]
    fn group_by_keeps_first_occurrence_key_order() {
        let groups = lazy(vec![1, 2, 3, 4, 5, 6])
            .group_by(|x| x % 3)
            .to_vec();
        assert_eq!(groups, vec![(1, vec![1, 4]), (2, vec![2, 5]), (0, vec![3, 6])]);
    }

    #[test]
    fn count_by_counts() {
        let counts = lazy(vec!["apple", "avocado", "banana"])
            .count_by(|word| word.as_bytes()[0])
            .to_vec();
        assert_eq!(counts, vec![(b'a', 2), (b'b', 1)]);
    }

    #[test]
    fn index_by_keeps_the_last_element_per_key() {
        let entries = lazy(vec![(1, "one"), (2, "two"), (1, "uno")])
            .index_by(|&(n, _)| n)
            .to_vec();
        assert_eq!(entries, vec![(1, (1, "uno")), (2, (2, "two"))]);
    }
}
