//! The in-memory keyed source.

use fnv::FnvHashMap;

use crate::keyed::KeyedSequence;
use crate::sequence::{each_items, Sequence, Step};

/// A keyed sequence over an owned, insertion-ordered set of pairs.
///
/// Keys are strings. Re-inserting an existing key replaces its value but
/// keeps the key's original position, matching the way keyed collections
/// accumulate assignments. Lookup by key is O(1) through a side index.
pub struct ObjectSequence<V> {
    pairs: Vec<(String, V)>,
    slots: FnvHashMap<String, usize>,
}

impl<V: Clone + 'static> ObjectSequence<V> {
    /// Builds a keyed sequence from pairs, later values winning per key.
    pub fn new(pairs: Vec<(String, V)>) -> Self {
        let mut object = ObjectSequence { pairs: Vec::new(), slots: FnvHashMap::default() };
        for (key, value) in pairs {
            object.put(key, value);
        }
        object
    }

    /// Builds a keyed sequence from borrowed keys, for convenience.
    pub fn from_pairs(pairs: Vec<(&str, V)>) -> Self {
        ObjectSequence::new(pairs.into_iter().map(|(key, value)| (key.to_owned(), value)).collect())
    }

    fn put(&mut self, key: String, value: V) {
        match self.slots.get(&key) {
            Some(&slot) => self.pairs[slot].1 = value,
            None => {
                self.slots.insert(key.clone(), self.pairs.len());
                self.pairs.push((key, value));
            }
        }
    }
}

impl<V: Clone + 'static> Sequence for ObjectSequence<V> {
    type Item = (String, V);

    fn each<F>(&self, mut visitor: F) -> Step
    where
        F: FnMut((String, V), usize) -> Step,
    {
        each_items(&self.pairs, &mut visitor)
    }
}

impl<V: Clone + 'static> KeyedSequence for ObjectSequence<V> {
    type Value = V;

    fn get(&self, key: &str) -> Option<V> {
        self.slots.get(key).map(|&slot| self.pairs[slot].1.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;

    #[test]
    fn iteration_follows_insertion_order() {
        let object = ObjectSequence::from_pairs(vec![("b", 1), ("a", 2), ("c", 3)]);
        let keys: Vec<String> = object.to_vec().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn reinsertion_replaces_in_place() {
        let object = ObjectSequence::from_pairs(vec![("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(object.to_vec(), vec![("a".to_owned(), 3), ("b".to_owned(), 2)]);
        assert_eq!(object.get("a"), Some(3));
        assert_eq!(object.get("missing"), None);
    }
}
