//! The base sequence protocol: short-circuit iteration and derived operations.
//!
//! A [`Sequence`] is a producer of zero or more elements, visited in order by
//! [`Sequence::each`]. Everything else in this module is derived: non-terminal
//! operations construct a new operator node in O(1) without touching any
//! element, and terminal operations drive `each` on the outermost node, which
//! pulls on its parent, and so on down to the source.
//!
//! Iteration is cancelled by returning [`Step::Stop`] from a visitor. Nodes
//! must propagate the sentinel: when a child's visitor stops, the child stops
//! its own iteration of its parent. Terminals such as [`Sequence::find`] and
//! [`Sequence::index_of`] rely on this to avoid driving the producer past the
//! element that decides the answer.

use std::time::Duration;

use crate::cursor::MaterializedCursor;
use crate::fields::Field;
use crate::operators::chunk::Chunked;
use crate::operators::concat::Concatenated;
use crate::operators::filter::{Compacted, Filtered, WhereFields};
use crate::operators::flatten::{Flattened, Nested};
use crate::operators::group::{Counted, Grouped, IndexedBy};
use crate::operators::map::{Invoked, Mapped, Plucked};
use crate::operators::reverse::Reversed;
use crate::operators::shuffle::Shuffled;
use crate::operators::skip::{Skip, SkipWhile};
use crate::operators::sort::{natural_key, natural_order, Sorted};
use crate::operators::tail::Tail;
use crate::operators::take::{Take, TakeWhile};
use crate::operators::tap::Tapped;
use crate::operators::unique::Unique;
use crate::operators::without::{Intersection, Without};
use crate::operators::zip::Zipped;
use crate::schedule::AsyncSequence;
use crate::sources::array::ArraySequence;
use crate::sources::object::ObjectSequence;

/// The outcome of one visitor invocation: continue iterating, or stop.
///
/// `Stop` is the universal cancellation mechanism. An `each` implementation
/// that receives it must cease invoking its visitor and return promptly, and
/// must report `Stop` to its own caller so that enclosing nodes stop too.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep iterating.
    Continue,
    /// Cease iteration now.
    Stop,
}

impl Step {
    /// True when iteration should cease.
    #[inline]
    pub fn is_stop(self) -> bool {
        matches!(self, Step::Stop)
    }
}

/// Drives a visitor over a materialized buffer, honoring the stop sentinel.
#[inline]
pub(crate) fn each_items<T, F>(items: &[T], visitor: &mut F) -> Step
where
    T: Clone,
    F: FnMut(T, usize) -> Step,
{
    for (index, item) in items.iter().enumerate() {
        if visitor(item.clone(), index).is_stop() {
            return Step::Stop;
        }
    }
    Step::Continue
}

/// A lazy producer of zero or more elements.
///
/// Implementors provide [`each`](Sequence::each); every other method is
/// derived from it. Non-terminal methods consume `self` and return an
/// operator node that holds the parent by value; the node is itself a
/// sequence and may be iterated any number of times. Two `each` calls on the
/// same pipeline produce the same elements in the same order, unless the
/// underlying source changes between them.
///
/// Several operations go by more than one name in collection libraries. The
/// canonical names here, with their common aliases: `map` (collect), `filter`
/// (select), `fold` (reduce/inject/foldl), `take` (first(n)/head), `skip`
/// (rest/drop/tail), `uniq` (unique), `all` (every), `any` (some),
/// `fold_right` (foldr), `find` (detect), `assign` (extend). Where an alias
/// is itself idiomatic it exists as a delegating method (`reject`,
/// `difference`, `rest`).
pub trait Sequence {
    /// The element type produced by this sequence.
    type Item;

    /// Invokes `visitor` with each element and its position, in order.
    ///
    /// Returns [`Step::Stop`] exactly when a visitor invocation stopped the
    /// iteration early, so that enclosing nodes can stop their own parents.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence, Step};
    ///
    /// let mut seen = Vec::new();
    /// lazy(vec![1, 2, 3]).each(|x, i| {
    ///     seen.push((x, i));
    ///     Step::Continue
    /// });
    /// assert_eq!(seen, vec![(1, 0), (2, 1), (3, 2)]);
    /// ```
    fn each<F>(&self, visitor: F) -> Step
    where
        F: FnMut(Self::Item, usize) -> Step;

    /// Creates a new sequence by applying `mapper` to each element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence};
    ///
    /// let doubled = lazy(vec![1, 2, 3]).map(|x, _| x * 2).to_vec();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn map<B, F>(self, mapper: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> B,
    {
        Mapped::new(self, mapper)
    }

    /// Projects the named field out of each record element.
    ///
    /// Elements that lack the field project to `None`.
    fn pluck(self, name: &str) -> Plucked<Self>
    where
        Self: Sized,
        Self::Item: Field,
    {
        Plucked::new(self, name.to_owned())
    }

    /// Creates a new sequence by passing each element through `method`.
    ///
    /// This is projection through a function reference, for pipelines that
    /// call one accessor on every element: `rows.invoke(Vec::len)`.
    fn invoke<B>(self, method: fn(&Self::Item) -> B) -> Invoked<Self, B>
    where
        Self: Sized,
    {
        Invoked::new(self, method)
    }

    /// Keeps only the elements for which `predicate` returns true.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence};
    ///
    /// let evens = lazy(vec![1, 2, 3, 4, 5, 6]).filter(|x, _| x % 2 == 0).to_vec();
    /// assert_eq!(evens, vec![2, 4, 6]);
    /// ```
    fn filter<P>(self, predicate: P) -> Filtered<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        Filtered::new(self, predicate)
    }

    /// Keeps only the elements for which `predicate` returns false.
    fn reject<P>(self, predicate: P) -> Filtered<Self, impl Fn(&Self::Item, usize) -> bool>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        Filtered::new(self, move |item: &Self::Item, index: usize| !predicate(item, index))
    }

    /// Keeps only the record elements whose fields all equal `properties`.
    fn where_fields(self, properties: Vec<(String, <Self::Item as Field>::Value)>) -> WhereFields<Self>
    where
        Self: Sized,
        Self::Item: Field,
    {
        WhereFields::new(self, properties)
    }

    /// Drops absent values, unwrapping the present ones.
    fn compact<T>(self) -> Compacted<Self>
    where
        Self: Sized + Sequence<Item = Option<T>>,
    {
        Compacted::new(self)
    }

    /// Reverses the order of elements.
    ///
    /// Over an indexable parent this preserves random access without any
    /// buffering; otherwise the parent is materialized on first iteration.
    fn reverse(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }

    /// Emits this sequence's elements, then `other`'s.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence};
    ///
    /// let both = lazy(vec![1, 2]).concat(lazy(vec![3, 4])).to_vec();
    /// assert_eq!(both, vec![1, 2, 3, 4]);
    /// ```
    fn concat<T>(self, other: T) -> Concatenated<Self, T>
    where
        Self: Sized,
        T: Sequence<Item = Self::Item>,
    {
        Concatenated::new(self, other)
    }

    /// Limits the sequence to its first `count` elements.
    ///
    /// The parent is never driven past the `count`-th element.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Emits elements while `predicate` holds, then stops.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Skips the first `count` elements.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Skips the first element.
    fn rest(self) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, 1)
    }

    /// Skips elements while `predicate` holds, then emits the remainder.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Limits the sequence to its last `count` elements.
    ///
    /// Maintains a bounded tail buffer while draining the parent, so it works
    /// on sequences with no known length.
    fn last_n(self, count: usize) -> Tail<Self>
    where
        Self: Sized,
    {
        Tail::new(self, count)
    }

    /// Sorts the elements by their natural order.
    ///
    /// The parent is materialized on first iteration. Equal elements carry no
    /// ordering guarantee between them.
    fn sort(self) -> Sorted<Self, fn(&Self::Item) -> Self::Item>
    where
        Self: Sized,
        Self::Item: Clone + PartialOrd,
    {
        Sorted::new(self, natural_key::<Self::Item>)
    }

    /// Sorts the elements by the keys that `key` computes.
    ///
    /// The key function is evaluated once per side at each comparison, and
    /// keys are ordered by the library's comparator: equal, else greater,
    /// else less.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence};
    ///
    /// let by_len = lazy(vec!["ccc", "a", "bb"]).sort_by(|s| s.len()).to_vec();
    /// assert_eq!(by_len, vec!["a", "bb", "ccc"]);
    /// ```
    fn sort_by<K, Key>(self, key: K) -> Sorted<Self, K>
    where
        Self: Sized,
        Self::Item: Clone,
        K: Fn(&Self::Item) -> Key,
        Key: PartialOrd,
    {
        Sorted::new(self, key)
    }

    /// Groups elements by the keys that `key` computes, emitting each key
    /// with the list of its members, keys in first-occurrence order.
    fn group_by<K, Key>(self, key: K) -> Grouped<Self, K, Key>
    where
        Self: Sized,
        K: Fn(&Self::Item) -> Key,
        Key: Eq + std::hash::Hash + Clone,
    {
        Grouped::new(self, key)
    }

    /// Indexes elements by the keys that `key` computes; the last element
    /// seen for a key wins.
    fn index_by<K, Key>(self, key: K) -> IndexedBy<Self, K, Key>
    where
        Self: Sized,
        K: Fn(&Self::Item) -> Key,
        Key: Eq + std::hash::Hash + Clone,
    {
        IndexedBy::new(self, key)
    }

    /// Counts elements by the keys that `key` computes, emitting each key
    /// with its count, keys in first-occurrence order.
    fn count_by<K, Key>(self, key: K) -> Counted<Self, K, Key>
    where
        Self: Sized,
        K: Fn(&Self::Item) -> Key,
        Key: Eq + std::hash::Hash + Clone,
    {
        Counted::new(self, key)
    }

    /// Keeps the first occurrence of each distinct element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence};
    ///
    /// assert_eq!(lazy(vec![1, 2, 2, 3, 3, 3]).uniq().to_vec(), vec![1, 2, 3]);
    /// ```
    fn uniq(self) -> Unique<Self>
    where
        Self: Sized,
    {
        Unique::new(self)
    }

    /// Pairs each element with the same-index elements of `others`.
    ///
    /// Rows stop when this sequence does; a shorter sidecar array simply
    /// contributes nothing to the rows past its end.
    fn zip(self, others: Vec<Vec<Self::Item>>) -> Zipped<Self>
    where
        Self: Sized,
    {
        Zipped::new(self, others)
    }

    /// Emits the elements in a uniformly random order.
    ///
    /// The permutation is drawn once, when the node first materializes, and
    /// is stable across repeated iteration of the same node.
    fn shuffle(self) -> Shuffled<Self>
    where
        Self: Sized,
    {
        Shuffled::new(self, None)
    }

    /// Like [`shuffle`](Sequence::shuffle), but seeded for reproducibility.
    fn shuffle_with(self, seed: u64) -> Shuffled<Self>
    where
        Self: Sized,
    {
        Shuffled::new(self, Some(seed))
    }

    /// Recursively inlines nested lists, emitting leaf values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Nested, Sequence};
    ///
    /// let nested: Vec<Nested<i32>> = vec![
    ///     1.into(),
    ///     vec![2, 3].into(),
    ///     Nested::List(vec![4.into(), vec![5].into()]),
    /// ];
    /// assert_eq!(lazy(nested).flatten().to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    fn flatten<T>(self) -> Flattened<Self>
    where
        Self: Sized + Sequence<Item = Nested<T>>,
    {
        Flattened::new(self)
    }

    /// Removes every element equal to one of `values`.
    fn without(self, values: Vec<Self::Item>) -> Without<Self>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        Without::new(self, values)
    }

    /// Removes every element equal to one of `values`.
    fn difference(self, values: Vec<Self::Item>) -> Without<Self>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.without(values)
    }

    /// Appends `values` and drops duplicates, keeping first occurrences.
    fn union_with(self, values: Vec<Self::Item>) -> Unique<Concatenated<Self, ArraySequence<Self::Item>>>
    where
        Self: Sized,
        Self::Item: Clone + 'static,
    {
        self.concat(ArraySequence::new(values)).uniq()
    }

    /// Keeps the elements present in every one of `others`, each at most once.
    fn intersection_with(self, others: Vec<Vec<Self::Item>>) -> Intersection<Self>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        Intersection::new(self, others)
    }

    /// Gathers elements into lists of `size`; the final list may be shorter.
    fn chunk(self, size: usize) -> Chunked<Self>
    where
        Self: Sized,
    {
        Chunked::new(self, size)
    }

    /// Observes each element with `inspector` as it flows past, unchanged.
    fn tap<F>(self, inspector: F) -> Tapped<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        Tapped::new(self, inspector)
    }

    /// Re-expresses this sequence's iteration through a scheduler, delivering
    /// each element in its own scheduled step.
    ///
    /// With an interval, steps are paced that far apart; without one, the
    /// scheduler's highest-priority deferred slot is used. The driver runs
    /// over this sequence's own pull cursor, acquired here; generated
    /// sequences shadow this method to supply their unbuffered cursor, which
    /// is what lets an unbounded generator tick until stopped. The result is
    /// not itself a [`Sequence`], so a pipeline cannot be made asynchronous
    /// twice.
    fn into_async(self, interval: Option<Duration>) -> AsyncSequence<MaterializedCursor<Self>>
    where
        Self: Sized,
    {
        AsyncSequence::new(self.into_cursor(), interval)
    }

    /// A pull cursor that owns this sequence, for element-at-a-time
    /// consumption.
    ///
    /// Sequences without random access are buffered on the cursor's first
    /// advance. Bounded generated sequences come with their own unbuffered
    /// cursor instead.
    fn into_cursor(self) -> MaterializedCursor<Self>
    where
        Self: Sized,
    {
        MaterializedCursor::new(self)
    }

    /// Materializes the sequence into a vector.
    fn to_vec(&self) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.each(|item, _| {
            out.push(item);
            Step::Continue
        });
        out
    }

    /// Rebuilds a keyed sequence from elements in pairs form. A key that
    /// occurs more than once keeps its last value.
    fn to_object<V>(&self) -> ObjectSequence<V>
    where
        Self: Sequence<Item = (String, V)>,
        V: Clone + 'static,
    {
        ObjectSequence::new(self.to_vec())
    }

    /// Invokes `action` with every element.
    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(Self::Item),
    {
        self.each(|item, _| {
            action(item);
            Step::Continue
        });
    }

    /// Aggregates left-to-right from an explicit seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence};
    ///
    /// assert_eq!(lazy(vec![5, 10, 15, 20]).fold(0, |a, x| a + x), 50);
    /// ```
    fn fold<B, F>(&self, seed: B, mut aggregator: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut state = Some(seed);
        self.each(|item, _| {
            let next = aggregator(state.take().expect("fold state is always present"), item);
            state = Some(next);
            Step::Continue
        });
        state.expect("fold state is always present")
    }

    /// Aggregates left-to-right, seeding with the first element.
    ///
    /// Returns `None` on an empty sequence.
    fn reduce<F>(&self, mut aggregator: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut state: Option<Self::Item> = None;
        self.each(|item, _| {
            state = Some(match state.take() {
                Some(acc) => aggregator(acc, item),
                None => item,
            });
            Step::Continue
        });
        state
    }

    /// Aggregates right-to-left from an explicit seed.
    fn fold_right<B, F>(&self, seed: B, mut aggregator: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut state = seed;
        for item in self.to_vec().into_iter().rev() {
            state = aggregator(state, item);
        }
        state
    }

    /// Aggregates right-to-left, seeding with the last element.
    ///
    /// Returns `None` on an empty sequence.
    fn reduce_right<F>(&self, aggregator: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut items = self.to_vec();
        let seed = items.pop()?;
        Some(items.into_iter().rev().fold(seed, aggregator))
    }

    /// The least element, or `None` when empty.
    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        self.reduce(|best, item| {
            if natural_order(&item, &best) == std::cmp::Ordering::Less {
                item
            } else {
                best
            }
        })
    }

    /// The greatest element, or `None` when empty.
    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        self.reduce(|best, item| {
            if natural_order(&item, &best) == std::cmp::Ordering::Greater {
                item
            } else {
                best
            }
        })
    }

    /// The element whose `key` is least, or `None` when empty.
    fn min_by_key<K, Key>(&self, key: K) -> Option<Self::Item>
    where
        K: Fn(&Self::Item) -> Key,
        Key: PartialOrd,
    {
        self.reduce(|best, item| {
            if natural_order(&key(&item), &key(&best)) == std::cmp::Ordering::Less {
                item
            } else {
                best
            }
        })
    }

    /// The element whose `key` is greatest, or `None` when empty.
    fn max_by_key<K, Key>(&self, key: K) -> Option<Self::Item>
    where
        K: Fn(&Self::Item) -> Key,
        Key: PartialOrd,
    {
        self.reduce(|best, item| {
            if natural_order(&key(&item), &key(&best)) == std::cmp::Ordering::Greater {
                item
            } else {
                best
            }
        })
    }

    /// Sums the elements from a zero seed.
    fn sum(&self) -> Self::Item
    where
        Self::Item: Default + std::ops::Add<Output = Self::Item>,
    {
        self.fold(<Self::Item as Default>::default(), |acc, item| acc + item)
    }

    /// Concatenates the elements' display forms, with `delimiter` between
    /// consecutive elements only.
    fn join(&self, delimiter: &str) -> String
    where
        Self::Item: std::fmt::Display,
    {
        let mut out = String::new();
        self.each(|item, index| {
            if index > 0 {
                out.push_str(delimiter);
            }
            out.push_str(&item.to_string());
            Step::Continue
        });
        out
    }

    /// The first element satisfying `predicate`, or `None`.
    ///
    /// Stops driving the producer as soon as a match is found.
    fn find<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        let mut found = None;
        self.each(|item, index| {
            if predicate(&item, index) {
                found = Some(item);
                Step::Stop
            } else {
                Step::Continue
            }
        });
        found
    }

    /// The first record whose fields all equal `properties`, or `None`.
    fn find_where(&self, properties: &[(String, <Self::Item as Field>::Value)]) -> Option<Self::Item>
    where
        Self::Item: Field,
    {
        self.find(|item, _| {
            properties
                .iter()
                .all(|(name, expected)| item.field(name).as_ref() == Some(expected))
        })
    }

    /// True when `predicate` holds for every element; true on empty.
    ///
    /// Stops at the first counterexample.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        let mut holds = true;
        self.each(|item, index| {
            if predicate(&item, index) {
                Step::Continue
            } else {
                holds = false;
                Step::Stop
            }
        });
        holds
    }

    /// True when `predicate` holds for some element; false on empty.
    ///
    /// Stops at the first witness.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        let mut holds = false;
        self.each(|item, index| {
            if predicate(&item, index) {
                holds = true;
                Step::Stop
            } else {
                Step::Continue
            }
        });
        holds
    }

    /// True when the sequence produces no elements.
    fn is_empty(&self) -> bool {
        let mut empty = true;
        self.each(|_, _| {
            empty = false;
            Step::Stop
        });
        empty
    }

    /// The position of the first element equal to `value`, or `None`.
    ///
    /// Stops driving the producer at the first match.
    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        let mut found = None;
        self.each(|item, index| {
            if &item == value {
                found = Some(index);
                Step::Stop
            } else {
                Step::Continue
            }
        });
        found
    }

    /// True when some element equals `value`.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// The number of elements produced by a full iteration.
    fn size(&self) -> usize {
        let mut count = 0;
        self.each(|_, _| {
            count += 1;
            Step::Continue
        });
        count
    }

    /// The first element, or `None` when empty.
    fn first(&self) -> Option<Self::Item> {
        let mut first = None;
        self.each(|item, _| {
            first = Some(item);
            Step::Stop
        });
        first
    }

    /// The last element, or `None` when empty.
    ///
    /// Drains the sequence; indexable sequences answer this from
    /// [`get`](crate::Indexed::get) instead.
    fn last(&self) -> Option<Self::Item> {
        let mut last = None;
        self.each(|item, _| {
            last = Some(item);
            Step::Continue
        });
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy;

    #[test]
    fn each_visits_in_order_with_indices() {
        let mut seen = Vec::new();
        let outcome = lazy(vec!['a', 'b', 'c']).each(|c, i| {
            seen.push((i, c));
            Step::Continue
        });
        assert_eq!(outcome, Step::Continue);
        assert_eq!(seen, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn stop_sentinel_halts_and_reports() {
        let mut seen = Vec::new();
        let outcome = lazy(vec![1, 2, 3, 4]).each(|x, _| {
            seen.push(x);
            if x == 2 {
                Step::Stop
            } else {
                Step::Continue
            }
        });
        assert_eq!(outcome, Step::Stop);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn fold_matches_reference() {
        assert_eq!(lazy(vec![5, 10, 15, 20]).fold(0, |a, b| a + b), 50);
        assert_eq!(lazy(Vec::<i32>::new()).fold(7, |a, b| a + b), 7);
    }

    #[test]
    fn reduce_seeds_with_first_element() {
        assert_eq!(lazy(vec![1, 2, 3]).reduce(|a, b| a * 10 + b), Some(123));
        assert_eq!(lazy(Vec::<i32>::new()).reduce(|a, b| a + b), None);
    }

    #[test]
    fn reduce_right_seeds_with_last_element() {
        // right-to-left: ((3 * 10 + 2) * 10) + 1
        assert_eq!(lazy(vec![1, 2, 3]).reduce_right(|a, b| a * 10 + b), Some(321));
        assert_eq!(lazy(Vec::<i32>::new()).reduce_right(|a, b| a + b), None);
    }

    #[test]
    fn join_places_delimiter_between_elements_only() {
        assert_eq!(lazy(vec![1, 2, 3]).join(", "), "1, 2, 3");
        assert_eq!(lazy(vec![1]).join(", "), "1");
        assert_eq!(lazy(Vec::<i32>::new()).join(", "), "");
    }

    #[test]
    fn predicates_default_on_empty() {
        let empty = lazy(Vec::<i32>::new());
        assert!(empty.all(|_, _| false));
        assert!(!empty.any(|_, _| true));
        assert!(empty.is_empty());
    }

    #[test]
    fn min_max_sum() {
        let numbers = lazy(vec![3, 1, 4, 1, 5]);
        assert_eq!(numbers.min(), Some(1));
        assert_eq!(numbers.max(), Some(5));
        assert_eq!(numbers.sum(), 14);
        assert_eq!(lazy(Vec::<i32>::new()).min(), None);
    }

    #[test]
    fn min_max_by_key() {
        let words = lazy(vec!["ccc", "a", "bb"]);
        assert_eq!(words.min_by_key(|w| w.len()), Some("a"));
        assert_eq!(words.max_by_key(|w| w.len()), Some("ccc"));
    }

    #[test]
    fn first_and_last() {
        let numbers = lazy(vec![9, 8, 7]);
        assert_eq!(numbers.first(), Some(9));
        assert_eq!(numbers.last(), Some(7));
        let empty = lazy(Vec::<i32>::new());
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn index_of_and_contains() {
        let numbers = lazy(vec![10, 20, 30]);
        assert_eq!(numbers.index_of(&20), Some(1));
        assert_eq!(numbers.index_of(&99), None);
        assert!(numbers.contains(&30));
        assert!(!numbers.contains(&31));
    }
}
